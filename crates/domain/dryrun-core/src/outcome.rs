use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key/value detail lines carried by a successful run, in display order.
pub type OutcomePayload = BTreeMap<String, String>;

/// Terminal result of a simulated run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Success(OutcomePayload),
    Failure { reason: String },
}

impl Outcome {
    pub fn success<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Outcome::Success(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Outcome::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// Pluggable terminal evaluation. The runner treats this as fully opaque:
/// it is invoked exactly once, after the last step, and a panic inside it is
/// captured and surfaced as a `Failure` rather than propagated.
pub type OutcomeFn = Box<dyn FnOnce() -> Outcome + Send + 'static>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_builder_keeps_pairs() {
        let o = Outcome::success([("recovered", "1000"), ("token", "ETHG")]);
        match o {
            Outcome::Success(payload) => {
                assert_eq!(payload.get("token").map(String::as_str), Some("ETHG"));
                assert_eq!(payload.len(), 2);
            }
            Outcome::Failure { .. } => panic!("expected success"),
        }
    }
}
