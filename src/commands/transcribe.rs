use crate::config::Config;
use crate::seq::transcribe;
use crate::utils::input;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

pub fn run(files: Vec<PathBuf>, out_dir: Option<PathBuf>) -> Result<()> {
    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(Config::load().out_dir));

    // One idempotent create before any file is written.
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut sequences = 0;
    for path in &files {
        progress.set_message(format!("Transcribing {}", path.display()));
        sequences += transcribe_file(path, &out_dir)?;
        progress.inc(1);
    }
    progress.finish_and_clear();

    println!(
        "Done, wrote {} sequence{} in {} file{} to directory \"{}\".",
        sequences,
        if sequences == 1 { "" } else { "s" },
        files.len(),
        if files.len() == 1 { "" } else { "s" },
        out_dir.display()
    );

    Ok(())
}

/// Transcribe one input file into `out_dir` under its base filename,
/// line by line, returning the number of sequences (lines) written.
pub fn transcribe_file(path: &Path, out_dir: &Path) -> Result<usize> {
    let reader = input::open_reader(path)?;

    let file_name = path
        .file_name()
        .with_context(|| format!("\"{}\" has no file name", path.display()))?;
    let out_path = out_dir.join(file_name);
    let out_file = File::create(&out_path)
        .with_context(|| format!("Failed to create {}", out_path.display()))?;
    let mut writer = BufWriter::new(out_file);

    let mut sequences = 0;
    for line in reader.lines() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        writeln!(writer, "{}", transcribe::transcribe(&line))?;
        sequences += 1;
    }

    Ok(sequences)
}
