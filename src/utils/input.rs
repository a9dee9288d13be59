use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Interpret a positional argument as a literal sequence, unless it names
/// an existing file, in which case the file contents are used instead
/// (trailing whitespace trimmed).
pub fn string_or_file(arg: &str) -> Result<String> {
    let path = Path::new(arg);
    if !path.is_file() {
        return Ok(arg.to_string());
    }

    let mut reader = open_reader(path)?;
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(contents.trim_end().to_string())
}

/// Open a file as a buffered reader, decompressing transparently when the
/// content is gzip/bzip2/xz.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    match niffler::get_reader(Box::new(file)) {
        Ok((inner_reader, _compression)) => Ok(Box::new(BufReader::new(inner_reader))),
        // Sniffing needs five bytes; anything shorter is necessarily plain.
        Err(niffler::Error::FileTooShort) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}
