use crate::reports;
use clap::Args;
use pitchcaller::config::ConfigOverrides;
use pitchcaller::distribution::allocate_counts;
use pitchcaller::error::PcResult;
use pitchcaller::export;
use pitchcaller::layout::{print_footer, CoachKey, WristbandSheet};
use pitchcaller::session::Session;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub overrides: ConfigOverrides,

    /// Seed for a reproducible shuffle
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Print the assignment as JSON instead of the cards
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also write the assignment to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, session: &Session) -> PcResult<()> {
    let mut rng = if let Some(s) = args.seed {
        info!("🎲 Using seed {}", s);
        fastrand::Rng::with_seed(s)
    } else {
        fastrand::Rng::new()
    };

    let generated = session.generate(&mut rng)?;
    let config = generated.config();
    let index = generated.index();

    if args.json {
        println!("{}", serde_json::to_string_pretty(generated.signals())?);
    } else {
        println!("\n=== {} ===", config.title);

        let sheet = WristbandSheet::build(config, &index);
        reports::wristband::print(&sheet);
        reports::print_cut_line();

        let key = CoachKey::build(generated.pitches(), &index);
        reports::coach_key::print(&key);

        println!("\n{}", print_footer(config));

        let allocations = allocate_counts(generated.pitches(), config.grid.total_slots());
        reports::print_allocation_report(generated.pitches(), &allocations);
    }

    if let Some(path) = args.csv {
        let file = BufWriter::new(File::create(&path)?);
        export::write_csv(file, generated.signals(), &index)?;
        info!(
            "💾 Wrote {} signals to {}",
            generated.signals().len(),
            path.display()
        );
    }

    Ok(())
}
