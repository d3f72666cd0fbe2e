use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use embedding_diff::comparison::run_comparison;
use embedding_diff::config::State;
use embedding_diff::source::{FileSink, JsonFileSource};
use embedding_diff::vector_entry::{CandidateEntry, ModelEmbeddings};

#[derive(Parser)]
#[command(name = "embedding-diff")]
#[command(version = "0.1")]
#[command(about = "Compare two sets of embeddings and report how far they diverge", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the two inputs and write the report (default)
    Compare,
    /// Print the resolved configuration
    Config,
}

fn init_logging(state: &State) {
    let default_level = if state.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("embedding_diff={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn compare_command(state: &State) -> Result<()> {
    let left = JsonFileSource::<Vec<CandidateEntry>>::new("llama", &state.left_path);
    let right = JsonFileSource::<ModelEmbeddings>::new("ollama", &state.right_path);
    let sink = FileSink::new(&state.report_path);

    let report = run_comparison(&left, &right, &sink)?;
    if let (Some(min), Some(max)) = (report.summary.min, report.summary.max) {
        tracing::debug!(
            "Difference range {:.4}% to {:.4}%, std dev {:?}",
            min,
            max,
            report.summary.std_dev
        );
    }

    println!(
        "Vector comparison report generated: {}",
        sink.path().display()
    );
    println!("Average difference: {:.4}%", report.summary.mean);
    Ok(())
}

fn config_command(state: &State) -> Result<()> {
    state.print_config();
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let state = State::new()?;
    init_logging(&state);

    match args.command.unwrap_or(Commands::Compare) {
        Commands::Compare => compare_command(&state)?,
        Commands::Config => config_command(&state)?,
    }
    Ok(())
}
