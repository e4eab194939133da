use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use task_core::{ToolExecutor, TransitionPolicy};
use task_tools::TaskToolExecutor;

mod config;
mod logging;
mod orchestrator;

use config::TrackerConfig;
use logging::init_logging;
use orchestrator::{Orchestrator, Script, StepOutcome};

#[derive(Parser, Debug, Clone)]
#[command(name = "task-tracker")]
#[command(about = "Task tracking tools driven by a scripted orchestrator")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.task-tracker/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug mode
    #[arg(long, short, global = true, env = "TASK_TRACKER_DEBUG")]
    debug: bool,

    /// Reject backward moves and changes to completed tasks
    #[arg(long, global = true)]
    strict: bool,

    /// Log filter such as `debug` or `task_core=trace` (overrides debug flag)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print every tool schema as JSON
    Tools,
    /// Replay a YAML or JSON script of tool calls
    Run {
        /// Script file
        script: PathBuf,
    },
    /// Break a goal into tasks and work through them
    Demo {
        /// Overall goal
        goal: String,
        /// Task to add (repeatable)
        #[arg(long = "task", short = 't')]
        tasks: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = TrackerConfig::resolve_path(cli.config.as_deref());
    let mut config = TrackerConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if cli.debug {
        config.debug = true;
    }
    if cli.strict {
        config.transition_policy = TransitionPolicy::Strict;
    }

    let max_level = init_logging(cli.log_level.as_deref(), config.debug);

    log::info!("Starting task tracker");
    log::debug!("  Log level: {}", max_level);
    match &config_path {
        Some(path) => log::info!("  Config: {}", path.display()),
        None => log::debug!("  Config: defaults"),
    }
    log::info!("  Transition policy: {:?}", config.transition_policy);
    log::debug!("  Echo calls: {}", config.echo_calls);

    let executor = TaskToolExecutor::with_policy(config.transition_policy);

    match cli.command {
        Commands::Tools => {
            let schemas = executor.list_tools();
            println!("{}", serde_json::to_string_pretty(&schemas)?);
        }
        Commands::Run { script } => {
            let script = Script::load(&script)
                .with_context(|| format!("loading script {}", script.display()))?;
            log::info!("Running script with {} steps", script.steps.len());

            let mut orchestrator = Orchestrator::new(&executor);
            orchestrator.run_script(&script).await;
            let transcript = orchestrator.into_transcript();
            print_transcript(&transcript, config.echo_calls);
        }
        Commands::Demo { goal, tasks } => {
            if tasks.is_empty() {
                log::warn!("Demo started without tasks; only the empty list will be shown");
            }

            let mut orchestrator = Orchestrator::new(&executor);
            orchestrator.run_demo(&goal, &tasks).await;
            print_transcript(orchestrator.transcript(), config.echo_calls);
        }
    }

    Ok(())
}

fn print_transcript(transcript: &[StepOutcome], echo_calls: bool) {
    let failures = transcript.iter().filter(|step| step.is_error()).count();

    for step in transcript {
        if echo_calls {
            println!("> {} {}", step.call.function.name, step.call.function.arguments);
        }
        println!("{}", step.output.trim_end());
        println!();
    }

    if failures > 0 {
        log::warn!("{} of {} tool calls returned errors", failures, transcript.len());
    }
}
