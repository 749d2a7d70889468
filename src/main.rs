//! vecpath CLI
//!
//! Usage:
//!   vecpath [OPTIONS] [FILES]...
//!
//! Options:
//!   -c, --config <FILE>               Settings file (TOML format)
//!   -i, --input-kind <KIND>           auto, svg or records
//!   -s, --segmentation <MODE>         whole-element or per-close
//!   -f, --format <FORMAT>             json, legacy-json or text
//!   -p, --pretty                      Indent JSON output
//!       --no-pretty                   Compact JSON output
//!   -v, --verbose                     More logging (repeat for debug)
//!   -h, --help                        Print help

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use vecpath::{convert_files, ConvertConfig, InputKind, OutputFormat, SegmentationMode};

#[derive(Parser)]
#[command(name = "vecpath")]
#[command(about = "Convert SVG paths and vertex records into unit-space path files")]
struct Cli {
    /// Input files (.svg drawings or `<type> <x> <y>` record text)
    files: Vec<PathBuf>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How to read inputs: auto, svg or records
    #[arg(short, long)]
    input_kind: Option<InputKind>,

    /// Subpath splitting: whole-element or per-close
    #[arg(short, long)]
    segmentation: Option<SegmentationMode>,

    /// Output format: json, legacy-json or text
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Indent JSON output
    #[arg(short, long, overrides_with = "no_pretty")]
    pretty: bool,

    /// Compact JSON output, even if the settings file asks for indentation
    #[arg(long, overrides_with = "pretty")]
    no_pretty: bool,

    /// More logging (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // No input is not an error
    if cli.files.is_empty() {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error printing usage: {}", e);
        }
        println!();
        return;
    }

    // Load settings
    let mut config = match &cli.config {
        Some(path) => match ConvertConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ConvertConfig::default(),
    };

    apply_overrides(&cli, &mut config);

    // Each file stands alone; one failure does not stop the batch
    let outcomes = convert_files(&cli.files, &config);
    let mut failed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(written) => {
                for name in written {
                    println!("{}", name.display());
                }
            }
            Err(_) => {
                if let Some(report) = outcome.error_report() {
                    eprintln!("{}", report);
                }
                failed += 1;
            }
        }
    }

    if failed > 0 {
        eprintln!("{} of {} file(s) failed", failed, outcomes.len());
        std::process::exit(1);
    }
}

/// Command line flags win over the settings file
fn apply_overrides(cli: &Cli, config: &mut ConvertConfig) {
    if let Some(kind) = cli.input_kind {
        config.input = kind;
    }
    if let Some(mode) = cli.segmentation {
        config.segmentation = mode;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.pretty {
        config.output.pretty = true;
    }
    if cli.no_pretty {
        config.output.pretty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overridden(args: &[&str], config: ConvertConfig) -> ConvertConfig {
        let cli = Cli::try_parse_from(args).expect("Should parse");
        let mut config = config;
        apply_overrides(&cli, &mut config);
        config
    }

    #[test]
    fn test_no_pretty_overrides_settings() {
        let settings =
            ConvertConfig::from_toml_str("[output]\npretty = true\n").expect("Should load");
        assert!(overridden(&["vecpath", "a.svg"], settings.clone()).output.pretty);
        assert!(!overridden(&["vecpath", "--no-pretty", "a.svg"], settings).output.pretty);
    }

    #[test]
    fn test_last_pretty_flag_wins() {
        let args = ["vecpath", "--no-pretty", "-p", "a.svg"];
        assert!(overridden(&args, ConvertConfig::default()).output.pretty);
        let args = ["vecpath", "-p", "--no-pretty", "a.svg"];
        assert!(!overridden(&args, ConvertConfig::default()).output.pretty);
    }

    #[test]
    fn test_flags_override_settings() {
        let config = overridden(
            &["vecpath", "-s", "per-close", "-f", "text", "-i", "svg", "a.txt"],
            ConvertConfig::default(),
        );
        assert_eq!(config.segmentation, SegmentationMode::PerClose);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.input, InputKind::Svg);
    }
}
