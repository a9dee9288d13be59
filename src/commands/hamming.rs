use crate::seq::hamming::{self, Pairing};
use anyhow::Result;

pub fn run(seq1: String, seq2: String, strict: bool) -> Result<()> {
    let pairing = if strict {
        Pairing::Strict
    } else {
        Pairing::Full
    };
    println!("{}", hamming::distance(&seq1, &seq2, pairing)?);
    Ok(())
}
