use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the canonical bases of a DNA sequence
    Count {
        /// DNA sequence, or path to a file containing it
        dna: String,
    },

    /// Transcribe DNA files to RNA (T -> U), one output file per input
    Transcribe {
        /// Input DNA files, one sequence per line
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory (configured out_dir when omitted)
        #[arg(short = 'o', long = "out-dir")]
        out_dir: Option<PathBuf>,
    },

    /// Print the reverse complement of a DNA sequence
    Revcomp {
        /// DNA sequence, or path to a file containing it
        dna: String,
    },

    /// Compute the population size after a number of generations
    Growth {
        /// Number of generations (1-40)
        #[arg(value_parser = clap::value_parser!(u64).range(1..=40))]
        generations: u64,

        /// Litter size per generation (1-5)
        #[arg(value_parser = clap::value_parser!(u64).range(1..=5))]
        litter: u64,
    },

    /// Report the FASTA record with the highest GC content
    Gc {
        /// Input FASTA file ("-" or omitted reads standard input)
        file: Option<PathBuf>,
    },

    /// Count mismatched positions between two sequences
    Hamming {
        /// First sequence
        seq1: String,

        /// Second sequence
        seq2: String,

        /// Fail on unequal lengths instead of counting the overhang as mismatches
        #[arg(long)]
        strict: bool,
    },

    /// Generate a random DNA sequence for test data
    Generate {
        /// Sequence length in bases
        #[arg(value_parser = clap::value_parser!(u64).range(1..=10_000_000))]
        length: u64,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
}
