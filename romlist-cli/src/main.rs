//! romlist CLI
//!
//! Command-line interface for generating `roms.json` manifests for NES ROM
//! directories.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use romlist_lib::{ManifestSummary, generate_manifest_file, manifest_path};

#[derive(Parser)]
#[command(name = "romlist")]
#[command(version)]
#[command(about = "Generate a roms.json manifest for a NES ROM directory", long_about = None)]
struct Cli {
    /// Directory containing .nes ROM files (the manifest is written there)
    roms_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print().expect("Failed to print argument error");
            // clap reports --help and --version through Err; those exit cleanly
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    run_generate(&cli.roms_dir)
}

/// Run the manifest generation and report the outcome.
fn run_generate(roms_dir: &Path) -> ExitCode {
    let target = manifest_path(roms_dir);
    log::debug!(
        "Generating {} from {}",
        target.display(),
        roms_dir.display()
    );

    match generate_manifest_file(roms_dir, &target) {
        Ok(manifest) => {
            println!(
                "{} {} written ({})",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                target.display(),
                summary_line(&manifest.summary()),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stderr, |t| t.red()),
                e,
            );
            ExitCode::FAILURE
        }
    }
}

/// Format the per-run counts for the success line.
fn summary_line(summary: &ManifestSummary) -> String {
    let noun = if summary.rom_count == 1 { "ROM" } else { "ROMs" };
    format!(
        "{} {}, {} with previews",
        summary.rom_count, noun, summary.with_preview
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_pluralizes() {
        let one = ManifestSummary {
            rom_count: 1,
            with_preview: 0,
        };
        assert_eq!(summary_line(&one), "1 ROM, 0 with previews");

        let many = ManifestSummary {
            rom_count: 12,
            with_preview: 7,
        };
        assert_eq!(summary_line(&many), "12 ROMs, 7 with previews");
    }
}
