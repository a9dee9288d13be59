use crate::seq::gc;
use crate::utils::input;
use anyhow::{bail, Context, Result};
use bio::io::fasta;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

pub fn run(file: Option<PathBuf>) -> Result<()> {
    let reader: Box<dyn BufRead> = match &file {
        Some(path) if path.as_os_str() != "-" => input::open_reader(path)?,
        _ => Box::new(BufReader::new(io::stdin())),
    };

    println!("{}", best_record(reader)?);
    Ok(())
}

/// Parse FASTA records from `reader` and report the one with the highest
/// GC content as `<id> <percentage>`.
pub fn best_record<R: BufRead>(reader: R) -> Result<String> {
    let mut records = Vec::new();
    for result in fasta::Reader::new(reader).records() {
        let record = result.context("Failed to parse FASTA record")?;
        let seq = String::from_utf8(record.seq().to_vec())
            .with_context(|| format!("record \"{}\" is not valid UTF-8", record.id()))?;
        records.push((record.id().to_string(), seq));
    }

    let percents = gc::scan(records)?;
    match gc::max_gc(&percents) {
        Some(line) => Ok(line),
        None => bail!("no FASTA records found in input"),
    }
}
