//! SVG-to-component generator for the `practical_icons` crate (`icon-codegen`).
//!
//! The crate is a thin CLI layer over a file transformation pipeline: [`generate`] turns every
//! `.svg` file of an input directory into a Leptos component module and writes a barrel
//! `mod.rs`, [`watch`] reruns that pipeline on change, and [`fs`] owns output cleanup.

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod fs;
pub mod generate;
pub mod naming;
pub mod svg;
pub mod watch;

use crate::cli::{Invocation, RunOptions};
use crate::config::CodegenConfig;
use crate::error::{CodegenErrorCategory, CodegenResult};

/// Executes the generator using the current process arguments.
pub fn execute_from_env() -> CodegenResult<()> {
    match cli::parse(std::env::args().skip(1).collect())? {
        Invocation::Help(text) => {
            print!("{text}");
            Ok(())
        }
        Invocation::Run(options) => run(&options),
    }
}

/// Run one generation pass, or stay in watch mode when requested.
pub fn run(options: &RunOptions) -> CodegenResult<()> {
    let config = match &options.config {
        Some(path) => CodegenConfig::load(path)?,
        None => CodegenConfig::default(),
    };

    if options.watch {
        watch::watch(&options.input, &options.output, &config)
    } else {
        generate::process_dir(&options.input, &options.output, &config).map(|_| ())
    }
}

/// Converts a generator result into a stable process exit code.
///
/// Usage errors print the usage line alone; every failure maps to exit code `1`.
pub fn exit_code(result: CodegenResult<()>) -> std::process::ExitCode {
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) if err.category == CodegenErrorCategory::Usage => {
            eprintln!("{}", err.message);
            std::process::ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: Icon generation failed: {err}");
            std::process::ExitCode::from(1)
        }
    }
}
