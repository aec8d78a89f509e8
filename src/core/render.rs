use crate::domain::model::EntryReport;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `File:` / `Hex:` line pairs
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

#[derive(Serialize)]
struct PathNotFoundRecord<'a> {
    path_not_found: &'a str,
}

pub fn write_entry<W: Write>(out: &mut W, format: OutputFormat, entry: &EntryReport) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "File: {}", entry.repr)?;
            writeln!(out, "  Hex: {}", entry.hex)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, entry)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_path_not_found<W: Write>(out: &mut W, format: OutputFormat, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();
    match format {
        OutputFormat::Text => writeln!(out, "Path not found: {}", display)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &PathNotFoundRecord { path_not_found: &display })?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EntryReport {
        EntryReport {
            name: "a.txt".to_string(),
            repr: "'a.txt'".to_string(),
            hex: "612e747874".to_string(),
        }
    }

    #[test]
    fn test_text_entry() {
        let mut out = Vec::new();
        write_entry(&mut out, OutputFormat::Text, &sample()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "File: 'a.txt'\n  Hex: 612e747874\n");
    }

    #[test]
    fn test_json_entry() {
        let mut out = Vec::new();
        write_entry(&mut out, OutputFormat::Json, &sample()).unwrap();

        let line = String::from_utf8(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["name"], "a.txt");
        assert_eq!(value["hex"], "612e747874");
    }

    #[test]
    fn test_path_not_found() {
        let mut text = Vec::new();
        write_path_not_found(&mut text, OutputFormat::Text, Path::new("db/migration")).unwrap();
        assert_eq!(String::from_utf8(text).unwrap(), "Path not found: db/migration\n");

        let mut json = Vec::new();
        write_path_not_found(&mut json, OutputFormat::Json, Path::new("db/migration")).unwrap();
        assert_eq!(
            String::from_utf8(json).unwrap(),
            "{\"path_not_found\":\"db/migration\"}\n"
        );
    }
}
