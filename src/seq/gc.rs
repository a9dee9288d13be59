use anyhow::{bail, Result};

/// Percentage of `G`/`C` symbols in `seq`, matching both cases.
///
/// Composition is deliberately case-insensitive even though counting and
/// transcription are not; the exercises differ and the difference is kept.
/// An empty sequence has no defined GC content and is an error, never 0.
pub fn percent_gc(id: &str, seq: &str) -> Result<f64> {
    if seq.is_empty() {
        bail!("record \"{}\" has an empty sequence, GC content is undefined", id);
    }

    let gc_count = seq
        .bytes()
        .filter(|b| matches!(b, b'G' | b'g' | b'C' | b'c'))
        .count();

    Ok(100.0 * gc_count as f64 / seq.len() as f64)
}

/// GC percentage for every record, preserving input order.
pub fn scan<I, S>(records: I) -> Result<Vec<(String, f64)>>
where
    I: IntoIterator<Item = (String, S)>,
    S: AsRef<str>,
{
    let mut percents = Vec::new();
    for (id, seq) in records {
        let percent = percent_gc(&id, seq.as_ref())?;
        percents.push((id, percent));
    }
    Ok(percents)
}

/// The record with the highest GC percentage, formatted as
/// `<id> <percentage to six decimal places>`. Ties go to the first
/// occurrence; `None` only when there are no records at all.
pub fn max_gc(percents: &[(String, f64)]) -> Option<String> {
    let mut best: Option<(&str, f64)> = None;
    for (id, percent) in percents {
        if best.map_or(true, |(_, best_percent)| *percent > best_percent) {
            best = Some((id, *percent));
        }
    }
    best.map(|(id, percent)| format!("{} {:.6}", id, percent))
}
