use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, bail};
use spgen_codegen::{SuffixMode, generation::DEFAULT_CONFIG_FILE};
use spgen_manifest::SpToml;
use tracing::info;

use crate::{
    ops::{self, GenerateOptions},
    plan::Plan,
    reports::{Report, TerminalOutput},
};

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for spgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "spgen")]
#[command(version)]
#[command(about = "Generate key-value preference accessor classes from a TOML schema")]
pub(crate) struct Cli {
    /// Path to the schema file
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Output plan: "std" prints a summary, "android:kt" writes Kotlin classes
    #[arg(short, long, default_value = "std")]
    pub output: String,

    /// Write a starter schema to CONFIG instead of generating
    #[arg(long)]
    pub new: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Strip an existing Long/Float suffix before appending the canonical one
    #[arg(long)]
    pub normalize_suffix: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        if self.new {
            let report = ops::scaffold(&self.config)?;
            report.render(&mut TerminalOutput::new());
            return Ok(());
        }

        let sp_toml = SpToml::open(&self.config).unwrap_or_exit();
        info!(path = %sp_toml.path().display(), "loaded schema");
        let report = ops::generate(
            sp_toml.manifest(),
            GenerateOptions {
                plan: Plan::resolve(&self.output),
                suffix_mode: self.suffix_mode(),
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            bail!("{} group(s) failed to generate", report.failures.len());
        }
        Ok(())
    }

    fn suffix_mode(&self) -> SuffixMode {
        if self.normalize_suffix {
            SuffixMode::Normalize
        } else {
            SuffixMode::Append
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["spgen"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert_eq!(cli.output, "std");
        assert!(!cli.new);
        assert!(!cli.dry_run);
        assert_eq!(cli.suffix_mode(), SuffixMode::Append);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "spgen",
            "prefs.toml",
            "-o",
            "android:kt",
            "--dry-run",
            "--normalize-suffix",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("prefs.toml"));
        assert_eq!(Plan::resolve(&cli.output), Plan::AndroidKt);
        assert!(cli.dry_run);
        assert_eq!(cli.suffix_mode(), SuffixMode::Normalize);
    }

    #[test]
    fn test_new_flag() {
        let cli = Cli::try_parse_from(["spgen", "--new", "starter.toml"]).unwrap();
        assert!(cli.new);
        assert_eq!(cli.config, PathBuf::from("starter.toml"));
    }

    #[test]
    fn test_long_output_flag() {
        let cli = Cli::try_parse_from(["spgen", "--output", "kt"]).unwrap();
        assert_eq!(Plan::resolve(&cli.output), Plan::AndroidKt);
    }
}
