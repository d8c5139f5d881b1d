use clap::{Parser, Subcommand};
use std::path::Path;
use std::process::ExitCode;

use cf_cli::{
    actor::{CloudControllerActor, SessionActor},
    command::{self, ServiceArgs, ServiceCommand},
    config::{CliConfig, DEFAULT_BINARY_NAME},
    ui::TerminalUi,
    CommandError,
};

const SERVICE_HELP_TEMPLATE: &str = "\
NAME:
   service - {about}

USAGE:
   {usage}

OPTIONS:
{options}

SEE ALSO:
   bind-service, rename-service, update-service
";

#[derive(Parser)]
#[command(name = "cf")]
#[command(about = "Command line client for platform service instances", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show service instance info
    #[command(
        override_usage = "cf service SERVICE_INSTANCE",
        help_template = SERVICE_HELP_TEMPLATE
    )]
    Service(ServiceArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            println!("FAILED");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let config = CliConfig::load()?.with_binary_name(binary_name());

    match cli.command {
        Commands::Service(args) => {
            let client = command::new_clients(&config)?;

            let mut cmd = ServiceCommand::new(
                args,
                TerminalUi::stdio(),
                config.clone(),
                SessionActor::new(config),
                CloudControllerActor::new(client),
            );
            cmd.execute()
        }
    }
}

/// Name the tool was invoked as, so hints match what the user typed.
fn binary_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_stem)
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(DEFAULT_BINARY_NAME)
        .to_string()
}
