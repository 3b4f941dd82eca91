use camino::Utf8PathBuf;
use dryrun_cli::commands;

#[tokio::test]
async fn extraction_preset_runs_to_success() {
    commands::cmd_run("extraction".into(), None, 100)
        .await
        .unwrap();
}

#[tokio::test]
async fn compile_with_bad_source_fails_nonzero() {
    let err = commands::cmd_run("compile".into(), Some("contract X { error }".into()), 100)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("source contains errors"));
}

#[tokio::test]
async fn unknown_operation_is_rejected() {
    let err = commands::cmd_run("warp-drive".into(), None, 100)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("warp-drive"));
}

#[tokio::test]
async fn script_file_runs_to_success() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.json");
    std::fs::write(
        &path,
        r#"{"name":"demo","steps":["one","two"],"totalDurationMs":120}"#,
    )
    .unwrap();

    commands::cmd_script(Utf8PathBuf::from_path_buf(path).unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn script_file_with_no_steps_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, r#"{"name":"empty","steps":[],"totalDurationMs":120}"#).unwrap();

    let err = commands::cmd_script(Utf8PathBuf::from_path_buf(path).unwrap())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("at least one step"));
}
