use dryrun_app_core::app_core::{AppStore, DomainEvent};
use dryrun_app_core::domain::AppState;
use dryrun_app_core::kernel::AppKernel;
use dryrun_app_core::ports::PresetSource;
use dryrun_runner::{RunEvent, RunId};

#[tokio::test]
async fn stale_run_events_are_ignored_in_tick() {
    let current: RunId = uuid::Uuid::new_v4();
    let stale: RunId = uuid::Uuid::new_v4();

    let mut state = AppState::default();
    state.run.run_id = Some(current);

    let store = AppStore::new(state);
    let mut kernel = AppKernel::new(store.clone(), PresetSource);

    let before = store.state();

    kernel
        .sender()
        .send(DomainEvent::Run {
            run_id: stale,
            ev: RunEvent::Failed {
                reason: "stale".into(),
            },
        })
        .await
        .unwrap();

    kernel.tick();

    let after = store.state();
    assert_eq!(before.run.run_id, after.run.run_id);
    assert_eq!(before.run.error, after.run.error);
    assert!(after.run.error.is_none());
}

#[tokio::test]
async fn matching_run_events_are_applied_in_tick() {
    let current: RunId = uuid::Uuid::new_v4();

    let mut state = AppState::default();
    state.run.run_id = Some(current);

    let store = AppStore::new(state);
    let mut kernel = AppKernel::new(store.clone(), PresetSource);

    kernel
        .sender()
        .send(DomainEvent::Run {
            run_id: current,
            ev: RunEvent::Failed {
                reason: "boom".into(),
            },
        })
        .await
        .unwrap();

    kernel.tick();

    assert_eq!(store.state().run.error.as_deref(), Some("boom"));
}
