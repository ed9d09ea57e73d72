pub mod agent;
pub mod config;
pub mod logger;

pub use agent::{AgentCore, AgentResponse};
pub use config::Settings;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
