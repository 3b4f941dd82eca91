use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use dryrun_cli::{commands, CliOperation};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in operations
    List,
    /// Run a built-in operation
    Run {
        #[arg(value_enum)]
        operation: CliOperation,
        #[arg(long, help = "Input text for operations that inspect it (compile)")]
        input: Option<String>,
        #[arg(long, default_value_t = dryrun_config::DEFAULT_TOTAL_DURATION_MS)]
        duration_ms: u64,
    },
    /// Run a script definition from a JSON file
    Script { path: Utf8PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("default subscriber");

    match cli.command {
        Commands::List => commands::cmd_list()?,
        Commands::Run {
            operation,
            input,
            duration_ms,
        } => commands::cmd_run(operation.id().to_string(), input, duration_ms).await?,
        Commands::Script { path } => commands::cmd_script(path).await?,
    }

    Ok(())
}
