//! Command-line parsing and help output.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::error::{CodegenError, CodegenResult};

/// Canonical one-line usage text.
pub const USAGE: &str = "Usage: icon-codegen <path to svg files> <output path> [--watch | -w]";

#[derive(Debug, Parser)]
#[command(
    name = "icon-codegen",
    about = "Generate Leptos icon components from a directory of SVG files"
)]
struct Args {
    /// Directory containing the source `.svg` files.
    input: Option<PathBuf>,
    /// Directory receiving one module per icon plus `mod.rs`.
    output: Option<PathBuf>,
    /// Keep running and regenerate whenever the input directory changes.
    #[arg(short, long)]
    watch: bool,
    /// TOML file overriding generator defaults.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Typed options for a generation run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunOptions {
    /// Source directory.
    pub input: PathBuf,
    /// Destination directory.
    pub output: PathBuf,
    /// Whether to stay in watch mode.
    pub watch: bool,
    /// Optional config file.
    pub config: Option<PathBuf>,
}

/// Parsed command selection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Invocation {
    /// Run the generator.
    Run(RunOptions),
    /// Print the rendered help or version text and exit successfully.
    Help(String),
}

/// Parse raw arguments (without the program name).
pub fn parse(args: Vec<String>) -> CodegenResult<Invocation> {
    let argv = std::iter::once("icon-codegen".to_string()).chain(args);
    let parsed = match Args::try_parse_from(argv) {
        Ok(parsed) => parsed,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(Invocation::Help(err.render().to_string()));
        }
        Err(err) => {
            return Err(CodegenError::usage(USAGE)
                .with_hint(err.kind().as_str().unwrap_or("invalid arguments")));
        }
    };

    let (Some(input), Some(output)) = (parsed.input, parsed.output) else {
        return Err(CodegenError::usage(USAGE));
    };

    Ok(Invocation::Run(RunOptions {
        input,
        output,
        watch: parsed.watch,
        config: parsed.config,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodegenErrorCategory;
    use pretty_assertions::assert_eq;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn positional_directories_and_short_watch_flag() {
        let parsed = parse(args(&["svg", "src/generated", "-w"])).expect("parse");
        assert_eq!(
            parsed,
            Invocation::Run(RunOptions {
                input: PathBuf::from("svg"),
                output: PathBuf::from("src/generated"),
                watch: true,
                config: None,
            })
        );
    }

    #[test]
    fn long_watch_flag_and_config_file() {
        let parsed = parse(args(&["--watch", "in", "out", "--config", "codegen.toml"]))
            .expect("parse");
        let Invocation::Run(options) = parsed else {
            panic!("expected run invocation");
        };
        assert!(options.watch);
        assert_eq!(options.config, Some(PathBuf::from("codegen.toml")));
    }

    #[test]
    fn missing_output_directory_is_a_usage_error() {
        let err = parse(args(&["svg"])).expect_err("missing output");
        assert_eq!(err.category, CodegenErrorCategory::Usage);
        assert_eq!(err.message, USAGE);

        let err = parse(Vec::new()).expect_err("missing both");
        assert_eq!(err.category, CodegenErrorCategory::Usage);
    }

    #[test]
    fn unknown_flags_are_usage_errors() {
        let err = parse(args(&["in", "out", "--verbose"])).expect_err("unknown flag");
        assert_eq!(err.category, CodegenErrorCategory::Usage);
    }

    #[test]
    fn help_is_not_an_error() {
        let parsed = parse(args(&["--help"])).expect("help");
        assert!(matches!(parsed, Invocation::Help(text) if text.contains("icon-codegen")));
    }
}
