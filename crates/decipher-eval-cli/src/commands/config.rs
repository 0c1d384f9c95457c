//! Config command - manage configuration

use anyhow::Result;
use console::{style, Term};
use decipher_eval_core::{AlignmentPolicy, Config, OutputFormat};
use std::path::Path;

pub fn show(config: &Config) -> Result<()> {
    let term = Term::stdout();

    term.write_line(&format!("{}", style("decipher-eval Configuration").bold()))?;
    term.write_line("")?;

    term.write_line(&format!(
        "Output format:    {}",
        style(config.output_format.display_name()).cyan()
    ))?;
    term.write_line(&format!(
        "Alignment:        {}",
        style(config.alignment.display_name()).cyan()
    ))?;
    term.write_line(&format!(
        "TSV header row:   {}",
        style(config.tsv_has_header).cyan()
    ))?;
    term.write_line(&format!(
        "Show progress:    {}",
        style(config.show_progress).cyan()
    ))?;

    Ok(())
}

pub fn set_format(config: &mut Config, path: Option<&Path>, format: &str) -> Result<()> {
    let term = Term::stdout();

    let output_format: OutputFormat = match format.parse() {
        Ok(f) => f,
        Err(message) => {
            term.write_line(&format!("{} {}", style("✗").red(), message))?;
            return Ok(());
        }
    };

    config.output_format = output_format;
    config.save(path)?;

    term.write_line(&format!(
        "{} Output format set to: {}",
        style("✓").green(),
        output_format.display_name()
    ))?;

    Ok(())
}

pub fn set_alignment(config: &mut Config, path: Option<&Path>, policy: &str) -> Result<()> {
    let term = Term::stdout();

    let alignment: AlignmentPolicy = match policy.parse() {
        Ok(p) => p,
        Err(message) => {
            term.write_line(&format!("{} {}", style("✗").red(), message))?;
            return Ok(());
        }
    };

    config.alignment = alignment;
    config.save(path)?;

    term.write_line(&format!(
        "{} Alignment set to: {}",
        style("✓").green(),
        alignment.display_name()
    ))?;

    if alignment == AlignmentPolicy::Truncate {
        term.write_line(&format!(
            "{} Aligned files of unequal length will be cut to the shortest one",
            style("⚠").yellow()
        ))?;
    }

    Ok(())
}

pub fn show_path(path: Option<&Path>) -> Result<()> {
    let term = Term::stdout();
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::default_config_path()?,
    };

    term.write_line(&format!("Config file: {:?}", config_path))?;

    if config_path.exists() {
        term.write_line(&format!("{} File exists", style("✓").green()))?;
    } else {
        term.write_line(&format!(
            "{} File does not exist (using defaults)",
            style("ℹ").blue()
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_format_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();

        set_format(&mut config, Some(&path), "tsv").unwrap();

        assert_eq!(config.output_format, OutputFormat::Tsv);
        assert_eq!(Config::load(Some(&path)).unwrap().output_format, OutputFormat::Tsv);
    }

    #[test]
    fn test_unknown_alignment_leaves_config_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();

        set_alignment(&mut config, Some(&path), "sloppy").unwrap();

        assert_eq!(config.alignment, AlignmentPolicy::Truncate);
        assert!(!path.exists());
    }
}
