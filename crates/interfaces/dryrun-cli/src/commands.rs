use anyhow::{bail, Context, Result};
use camino::Utf8PathBuf;
use dryrun_core::formats::ScriptExternal;
use dryrun_core::{presets, Outcome, OutcomeFn, Script};
use dryrun_runner::{RunEvent, Runner};
use indicatif::{ProgressBar, ProgressStyle};

pub fn cmd_list() -> Result<()> {
    println!(":: Available operations");
    for preset in presets::all() {
        println!("   {:<14} {}", preset.id, preset.summary);
    }
    Ok(())
}

pub async fn cmd_run(operation: String, input: Option<String>, duration_ms: u64) -> Result<()> {
    let duration_ms = dryrun_config::clamp_duration_ms(duration_ms);

    let script = presets::script(&operation, duration_ms)
        .with_context(|| format!("Unknown operation '{operation}' (see `list`)"))?;
    let outcome_fn = presets::outcome_fn(&operation, input)
        .with_context(|| format!("Unknown operation '{operation}' (see `list`)"))?;

    run_script(script, outcome_fn).await
}

pub async fn cmd_script(path: Utf8PathBuf) -> Result<()> {
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read script file {path}"))?;
    let external: ScriptExternal =
        serde_json::from_str(&raw).with_context(|| format!("Malformed script file {path}"))?;
    let script = Script::try_from(external)?;

    let name = script.name().to_string();
    let steps = script.steps().len().to_string();
    let outcome_fn: OutcomeFn = Box::new(move || {
        Outcome::success([
            ("script".to_string(), name),
            ("steps".to_string(), steps),
            ("status".to_string(), "completed".to_string()),
        ])
    });

    run_script(script, outcome_fn).await
}

async fn run_script(script: Script, outcome_fn: OutcomeFn) -> Result<()> {
    println!(
        ":: Running '{}' ({} steps, ~{}ms)",
        script.name(),
        script.steps().len(),
        script.total_duration().as_millis()
    );

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos:>3}% {msg}")
            .unwrap(),
    );

    let (handle, mut events) = Runner::start(script, outcome_fn);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                handle.cancel();
            }
            maybe_ev = events.recv() => match maybe_ev {
                Some(RunEvent::Started { .. }) => {}
                Some(RunEvent::Progress { snapshot }) => {
                    pb.set_position(snapshot.percent as u64);
                    pb.set_message(snapshot.label);
                }
                Some(RunEvent::Completed { payload }) => {
                    pb.finish_with_message("done");
                    println!("\n:: Result");
                    for (key, value) in &payload {
                        println!("   {key:<16} {value}");
                    }
                    return Ok(());
                }
                Some(RunEvent::Failed { reason }) => {
                    pb.abandon_with_message("failed");
                    bail!("Run failed: {reason}");
                }
                Some(RunEvent::Cancelled) => {
                    pb.abandon_with_message("cancelled");
                    println!("\n:: Cancelled");
                    return Ok(());
                }
                None => return Ok(()),
            }
        }
    }
}
