use clap::{Parser, Subcommand};
use eyre::Result;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "moodly",
    about = "Take the DASS-21 check-in and see what it unlocks",
    version
)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take the questionnaire (or see why you cannot yet)
    Take,
    /// Show what the result store knows about you
    Status,
    /// Show your current result
    Result,
    /// Check whether the AI companion is available to you
    Eligibility,
    /// Clear your result so the questionnaire can be taken again
    Retake,
    /// List crisis helplines
    Helplines,
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write a config file with defaults
    Init {
        /// Base URL of the Moodly API
        #[arg(long)]
        api_base_url: Option<String>,
        /// Per-request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json);

    match cli.command {
        Command::Take => commands::take().await,
        Command::Status => commands::status().await,
        Command::Result => commands::result().await,
        Command::Eligibility => commands::eligibility().await,
        Command::Retake => commands::retake().await,
        Command::Helplines => {
            commands::print_helplines();
            Ok(())
        }
        Command::Config { command } => match command {
            ConfigCommand::Show => commands::config_show(),
            ConfigCommand::Init {
                api_base_url,
                timeout_secs,
                force,
            } => commands::config_init(api_base_url, timeout_secs, force),
        },
    }
}
