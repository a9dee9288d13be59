use crate::seq::revcomp;
use crate::utils::input;
use anyhow::Result;

pub fn run(dna: String) -> Result<()> {
    let seq = input::string_or_file(&dna)?;
    println!("{}", revcomp::reverse_complement(&seq));
    Ok(())
}
