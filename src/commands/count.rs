use crate::seq::counts::BaseCounts;
use crate::utils::input;
use anyhow::Result;

pub fn run(dna: String) -> Result<()> {
    let seq = input::string_or_file(&dna)?;
    println!("{}", BaseCounts::count(&seq));
    Ok(())
}
