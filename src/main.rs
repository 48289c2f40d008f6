use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tokio::io::BufReader;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use rant::config::Config;
use rant::error::RantError;
use rant::random;
use rant::ranter::Ranter;
use rant::stream::{RantStream, StreamMode, StreamResult};
use rant::wire::RantResponse;

/// Rant: turn calm phrases into EMPHATIC ONES!!! 😤
#[derive(Parser, Debug)]
#[command(name = "rant")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Text to rant about (omit to read stdin line by line)
    text: Vec<String>,

    /// Read {"t": ...} JSON lines and answer with {"r": ...}
    #[arg(long = "json")]
    json: bool,

    /// Seed for emoji selection, for reproducible rants
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Attribute each rant to this user ("<@USER> says: ...")
    #[arg(long = "as", value_name = "USER")]
    announce_as: Option<String>,

    /// Comma-separated emojis to rage with
    #[arg(short = 'e', long = "emojis", value_delimiter = ',')]
    emojis: Option<Vec<String>>,

    /// Config file (TOML format)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rant=debug,info")
    } else {
        EnvFilter::new("rant=info,warn")
    };

    // stdout carries the rants
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config, RantError> {
    let mut config = if let Some(ref config_path) = cli.config {
        Config::from_file(config_path)?
    } else {
        Config::load_default()?
    };

    config.merge_cli_args(
        cli.emojis.clone(),
        cli.seed,
        cli.json,
        cli.announce_as.clone(),
    );

    Ok(config)
}

fn rant_args(stream: &RantStream, text: &str, mode: StreamMode) -> Result<String, RantError> {
    let rant = stream.rant_text(text);
    match mode {
        StreamMode::Plain => Ok(rant),
        StreamMode::Json => RantResponse::new(rant).to_line(),
    }
}

async fn run_stdin(
    mut stream: RantStream,
    shutdown_rx: broadcast::Receiver<()>,
) -> Result<StreamResult, RantError> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    stream.run(stdin, &mut stdout, shutdown_rx).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    debug!("Config: {:?}", config);

    if let Some(seed) = config.seed {
        random::reseed(seed);
    }

    let pool = match config.pool() {
        Ok(p) => p,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mode = if config.json {
        StreamMode::Json
    } else {
        StreamMode::Plain
    };
    let stream = RantStream::new(Ranter::new(pool), mode).with_announcer(config.announce_as);

    if !cli.text.is_empty() {
        match rant_args(&stream, &cli.text.join(" "), mode) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Setup shutdown signal handling
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            return;
        }
        info!("Received Ctrl+C, shutting down...");
        let _ = shutdown_tx.send(());
    });

    match run_stdin(stream, shutdown_rx).await {
        Ok(StreamResult::Finished { rejected, .. }) => {
            if rejected > 0 {
                eprintln!(
                    "{} {} line(s) could not be decoded",
                    "WARNING:".yellow().bold(),
                    rejected
                );
            }
        }
        Ok(StreamResult::Shutdown { ranted }) => {
            eprintln!(
                "\n{} Shutdown after {} rant(s)",
                "INTERRUPTED:".yellow().bold(),
                ranted
            );
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
        Err(e) => {
            eprintln!("{} {}", "ERROR:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
