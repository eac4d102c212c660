mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::draft::DraftSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "genesix",
    about = "Product-discovery wizard: fill, validate and submit the step-1 form",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage step-1 draft files (.yaml, .yml or .json)
    Draft {
        #[command(subcommand)]
        subcommand: DraftSubcommand,
    },

    /// Check a draft against the required-field and length rules
    Validate { file: PathBuf },

    /// Print the normalized payload a draft would send
    Payload { file: PathBuf },

    /// Validate a draft and POST it to the step-1 webhook
    Submit {
        file: PathBuf,

        /// Webhook URL (overrides build-time and N8N_WEBHOOK_ETAPA1_URL)
        #[arg(long)]
        webhook_url: Option<String>,
    },

    /// List the wizard steps in order
    Steps,

    /// Show the resolved webhook endpoint
    Webhook {
        #[arg(long)]
        webhook_url: Option<String>,
    },

    /// Resolve a URL fragment to the page and view the shell would show
    Route {
        /// Fragment such as "#dashboard" (empty for the landing page)
        #[arg(default_value = "")]
        fragment: String,

        /// Resolve as a signed-in user
        #[arg(long)]
        signed_in: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Submit { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Draft { subcommand } => cmd::draft::run(subcommand, cli.json),
        Commands::Validate { file } => cmd::validate::run(&file, cli.json),
        Commands::Payload { file } => cmd::payload::run(&file),
        Commands::Submit { file, webhook_url } => {
            cmd::submit::run(&file, webhook_url.as_deref(), cli.json)
        }
        Commands::Steps => cmd::steps::run(cli.json),
        Commands::Webhook { webhook_url } => cmd::webhook::run(webhook_url.as_deref(), cli.json),
        Commands::Route {
            fragment,
            signed_in,
        } => cmd::route::run(&fragment, signed_in, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
