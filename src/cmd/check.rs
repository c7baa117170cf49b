use crate::reports;
use clap::Args;
use pitchcaller::config::{ConfigOverrides, GridPreset};
use pitchcaller::distribution::{allocate_counts, validate_shares};
use pitchcaller::error::{PcResult, PitchCallerError};
use pitchcaller::session::Session;
use strum::IntoEnumIterator;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub overrides: ConfigOverrides,

    /// Only show pitches whose name contains this text
    #[arg(short, long)]
    pub filter: Option<String>,
}

pub fn run(args: CheckArgs, session: &Session) -> PcResult<()> {
    let config = session.config();
    let grid = &config.grid;

    println!("\n🔎 === SIGNAL AUDIT: {} === 🔎", config.team_name);
    println!(
        "Grid: {} x {} = {} calls (sections of {})",
        grid.columns,
        grid.rows,
        grid.total_slots(),
        config.section_size
    );

    for preset in GridPreset::iter() {
        let (columns, rows) = preset.dimensions();
        let marker = if (columns, rows) == (grid.columns, grid.rows)
            && preset.section_size() == config.section_size
        {
            "*"
        } else {
            " "
        };
        println!(" {} {}", marker, preset.description());
    }

    grid.validate()?;
    info!("✅ All {} slot labels are unique", grid.total_slots());

    let allocations = allocate_counts(session.pitches(), grid.total_slots());
    let pairs: Vec<_> = session
        .pitches()
        .iter()
        .zip(allocations.iter())
        .filter(|(p, _)| match args.filter {
            Some(ref f) => p.name.to_lowercase().contains(&f.to_lowercase()),
            None => true,
        })
        .collect();

    if pairs.is_empty() {
        println!("No pitches found matching criteria.");
    } else {
        let (pitches, allocs): (Vec<_>, Vec<_>) =
            pairs.into_iter().map(|(p, a)| (p.clone(), a.clone())).unzip();
        reports::print_allocation_report(&pitches, &allocs);
    }

    if !validate_shares(session.pitches()) {
        return Err(PitchCallerError::UnbalancedShares {
            total: session.total_percentage(),
        });
    }

    println!("\nTotal: {}% ✅", session.total_percentage());
    Ok(())
}
