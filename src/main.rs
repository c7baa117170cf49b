use clap::{Parser, Subcommand};
use pitchcaller::config::WristbandConfig;
use pitchcaller::pitches;
use pitchcaller::session::Session;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Softball wristband signal generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with the pitch set (defaults to the built-in mix)
    #[arg(global = true, short, long)]
    pitches: Option<String>,

    /// JSON file with the wristband config (defaults to the Standard preset)
    #[arg(global = true, short, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a wristband and coach key
    Generate(cmd::generate::GenerateArgs),
    /// Check percentages, grid labels and the slot allocation without shuffling
    Check(cmd::check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing PitchCaller...");

    let mut config = match &cli.config {
        Some(path) => {
            info!("📂 Loading Config: {}", path);
            WristbandConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => WristbandConfig::default(),
    };

    let pitch_set = match &cli.pitches {
        Some(path) => {
            info!("⚾ Loading Pitches: {}", path);
            pitches::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => {
            info!("⚾ No pitch file given. Using the default pitch set.");
            pitches::default_pitches()
        }
    };

    let overrides = match &cli.command {
        Commands::Generate(args) => &args.overrides,
        Commands::Check(args) => &args.overrides,
    };
    config.apply_overrides(overrides);

    let session = Session::new(config, pitch_set).unwrap_or_else(|e| {
        error!("❌ Invalid setup: {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Generate(args) => cmd::generate::run(args, &session),
        Commands::Check(args) => cmd::check::run(args, &session),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
