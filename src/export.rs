use crate::distribution::SignalEntry;
use crate::error::PcResult;
use crate::lookup::SignalIndex;
use std::io::Write;

/// Writes one row per signal: `code,pitch_id,pitch,abbreviation`.
pub fn write_csv<W: Write>(
    writer: W,
    signals: &[SignalEntry],
    index: &SignalIndex<'_>,
) -> PcResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["code", "pitch_id", "pitch", "abbreviation"])?;

    for s in signals {
        let (name, abbr) = match index.pitch(&s.pitch_id) {
            Some(p) => (p.name.clone(), p.label()),
            None => (String::new(), String::new()),
        };
        wtr.write_record([
            s.code.as_str(),
            s.pitch_id.as_str(),
            name.as_str(),
            abbr.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
