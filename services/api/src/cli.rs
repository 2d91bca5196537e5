use crate::commands::{
    run_ask, run_chat, run_estimate, run_thresholds, AskArgs, ChatArgs, EstimateArgs,
    ThresholdsArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use super_visa::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Super Visa Estimator",
    about = "Serve or query the Super Visa eligibility estimator and expert assistant",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate eligibility for one household
    Estimate(EstimateArgs),
    /// Print the minimum income table
    Thresholds(ThresholdsArgs),
    /// Ask the assistant a single question
    Ask(AskArgs),
    /// Open an interactive chat with the assistant
    Chat(ChatArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON message catalog replacing the built-in texts
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Estimate(args) => run_estimate(args),
        Command::Thresholds(args) => run_thresholds(args),
        Command::Ask(args) => run_ask(args).await,
        Command::Chat(args) => run_chat(args).await,
    }
}
