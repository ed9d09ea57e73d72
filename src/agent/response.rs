use chrono::Local;
use serde::{Deserialize, Serialize};

/// Fixed prefix every stub reply carries in front of the echoed prompt.
pub const RESPONSE_PREFIX: &str = "[AION-MIND stub] Procesando: ";

/// Model identifier reported while no real model is wired up.
pub const MODEL_NAME: &str = "stub";

/// Status note reported until a real model implementation lands.
pub const IMPLEMENTATION_NOTE: &str = "Implementación pendiente de modelo real";

/// ISO-8601 local wall-clock time with microseconds, no UTC offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Reply produced for a single prompt. Field order is the serialization
/// order on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub success: bool,
    pub response: String,
    pub timestamp: String,
    pub model: String,
    pub note: String,
}

impl AgentResponse {
    /// Build the canned reply for `prompt`, stamped with the current local
    /// time.
    pub(crate) fn stub(prompt: &str) -> Self {
        Self {
            success: true,
            response: format!("{}{}", RESPONSE_PREFIX, prompt),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            model: MODEL_NAME.to_string(),
            note: IMPLEMENTATION_NOTE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_field_values() {
        let response = AgentResponse::stub("prueba");
        assert!(response.success);
        assert_eq!(response.response, "[AION-MIND stub] Procesando: prueba");
        assert_eq!(response.model, "stub");
        assert_eq!(response.note, "Implementación pendiente de modelo real");
    }

    #[test]
    fn test_serialized_field_order() {
        let response = AgentResponse::stub("orden");
        let json = serde_json::to_string_pretty(&response).unwrap();

        let keys = ["\"success\"", "\"response\"", "\"timestamp\"", "\"model\"", "\"note\""];
        let positions: Vec<usize> = keys.iter().map(|key| json.find(key).unwrap()).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_serialization_round_trip() {
        let response = AgentResponse::stub("ida y vuelta");
        let json = serde_json::to_string(&response).unwrap();
        let decoded: AgentResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn test_response_shape() {
        let response = AgentResponse::stub("hola");
        insta::assert_json_snapshot!(response, {
            ".timestamp" => "[timestamp]",
        }, @r###"
{
  "success": true,
  "response": "[AION-MIND stub] Procesando: hola",
  "timestamp": "[timestamp]",
  "model": "stub",
  "note": "Implementación pendiente de modelo real"
}
"###);
    }
}
