//! Interactive filename prompting.
//!
//! Prompting is a caller-side concern: the pipelines only ever see
//! resolved paths that exist. Missing files re-prompt rather than
//! abort.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Downloads directory interactive prompts resolve against.
pub fn downloads_dir(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join("Downloads"))
        .unwrap_or_else(|| PathBuf::from("Downloads"))
}

/// Append `.csv` unless the name already carries it.
pub fn ensure_csv_extension(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.to_ascii_lowercase().ends_with(".csv") {
        trimmed.to_string()
    } else {
        format!("{trimmed}.csv")
    }
}

/// Ask how many files to process; re-prompts until a positive number.
pub fn prompt_file_count() -> Result<usize> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("How many CSV files do you want to process? ");
        io::stdout().flush().context("flush prompt")?;
        line.clear();
        if stdin.lock().read_line(&mut line).context("read stdin")? == 0 {
            anyhow::bail!("stdin closed while prompting for file count");
        }
        match line.trim().parse::<usize>() {
            Ok(count) if count > 0 => return Ok(count),
            Ok(_) => println!("Please enter a number greater than 0"),
            Err(_) => println!("Please enter a valid number"),
        }
    }
}

/// Ask for one CSV filename, resolved against the downloads directory;
/// re-prompts until the file exists.
pub fn prompt_existing_csv(directory: &Path, label: &str) -> Result<PathBuf> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter name of {label}: ");
        io::stdout().flush().context("flush prompt")?;
        line.clear();
        if stdin.lock().read_line(&mut line).context("read stdin")? == 0 {
            anyhow::bail!("stdin closed while prompting for a filename");
        }
        let name = ensure_csv_extension(&line);
        let path = directory.join(&name);
        if path.exists() {
            println!("File found: {name}");
            return Ok(path);
        }
        println!("File not found: {name}");
        println!("Check that the name is correct and the file is in {}", directory.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_extension_is_appended_once() {
        assert_eq!(ensure_csv_extension("contacts"), "contacts.csv");
        assert_eq!(ensure_csv_extension("contacts.csv"), "contacts.csv");
        assert_eq!(ensure_csv_extension(" contacts.CSV \n"), "contacts.CSV");
    }

    #[test]
    fn downloads_dir_prefers_override() {
        let dir = downloads_dir(Some(PathBuf::from("/tmp/exports")));
        assert_eq!(dir, PathBuf::from("/tmp/exports"));
    }
}
