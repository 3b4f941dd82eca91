use serde::{Deserialize, Serialize};

use crate::script::{Script, ScriptError};

/// On-disk script definition. Kept separate from [`Script`] so deserialized
/// input still goes through validation.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScriptExternal {
    pub name: String,
    pub steps: Vec<String>,
    // Allow both "totalDurationMs" and legacy "durationMs"
    #[serde(alias = "durationMs")]
    pub total_duration_ms: u64,
}

impl TryFrom<ScriptExternal> for Script {
    type Error = ScriptError;

    fn try_from(ext: ScriptExternal) -> Result<Self, Self::Error> {
        Script::new(ext.name, ext.steps, ext.total_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_json_round_trips_through_validation() {
        let raw = r#"{"name":"scan","steps":["Scanning...","Done"],"totalDurationMs":200}"#;
        let ext: ScriptExternal = serde_json::from_str(raw).unwrap();
        let script = Script::try_from(ext).unwrap();
        assert_eq!(script.steps().len(), 2);
    }

    #[test]
    fn external_with_empty_steps_fails_validation() {
        let raw = r#"{"name":"scan","steps":[],"durationMs":200}"#;
        let ext: ScriptExternal = serde_json::from_str(raw).unwrap();
        assert_eq!(Script::try_from(ext).unwrap_err(), ScriptError::EmptySteps);
    }
}
