use crate::seq::generate;
use anyhow::Result;

pub fn run(length: u64, seed: Option<u64>) -> Result<()> {
    println!("{}", generate::random_dna(length as usize, seed));
    Ok(())
}
