use crate::run::RunState;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub run: RunState,
}
