use clap::Parser;
use dna_tools::cli::{Args, Commands};
use dna_tools::commands;

fn main() {
    let args = Args::parse();

    let result = match args.command {
        Commands::Count { dna } => commands::count::run(dna),
        Commands::Transcribe { files, out_dir } => commands::transcribe::run(files, out_dir),
        Commands::Revcomp { dna } => commands::revcomp::run(dna),
        Commands::Growth {
            generations,
            litter,
        } => commands::growth::run(generations, litter),
        Commands::Gc { file } => commands::gc::run(file),
        Commands::Hamming { seq1, seq2, strict } => commands::hamming::run(seq1, seq2, strict),
        Commands::Generate { length, seed } => commands::generate::run(length, seed),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
