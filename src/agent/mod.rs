pub mod response;

pub use response::{
    AgentResponse, IMPLEMENTATION_NOTE, MODEL_NAME, RESPONSE_PREFIX, TIMESTAMP_FORMAT,
};

use crate::Result;

/// Agent core. Currently a stub that echoes the prompt back inside a
/// canned response instead of calling a model.
pub struct AgentCore;

impl AgentCore {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    /// Process a prompt and return the response object.
    ///
    /// Total over any input string, including the empty one; the only side
    /// effect is a clock read for the timestamp.
    pub fn think(&self, prompt: &str) -> AgentResponse {
        // TODO: route the prompt to a real model backend (Emergent LLM Key
        // or a local llama.cpp runtime) instead of echoing it
        AgentResponse::stub(prompt)
    }
}
