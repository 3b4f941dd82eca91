pub mod formats;
pub mod outcome;
pub mod presets;
pub mod script;

pub use outcome::{Outcome, OutcomeFn, OutcomePayload};
pub use script::{Script, ScriptError};
