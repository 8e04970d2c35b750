#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use sharpen_cli::args::{CliArgs, Command};
use sharpen_cli::driver::{self, RefactorRequest};
use sharpen_cli::{config, tracing_config};

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR_DIAGNOSTICS: i32 = 1;

fn main() -> Result<()> {
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let options = config::resolve_config(args.config.as_deref(), &cwd)?;

    let status = match &args.command {
        Command::Check { snapshot, json } => {
            let color = !json && std::io::stdout().is_terminal();
            let report = driver::check(snapshot, &options, *json, color)?;
            println!("{}", report.output);
            if report.has_errors() {
                EXIT_ERROR_DIAGNOSTICS
            } else {
                EXIT_SUCCESS
            }
        }
        Command::Refactor {
            snapshot,
            document,
            offset,
            length,
        } => {
            let request = RefactorRequest {
                document,
                offset: *offset,
                length: *length,
            };
            match driver::refactor(snapshot, &options, &request)? {
                Some(text) => print!("{text}"),
                None => eprintln!("No refactoring available at {document}:{offset}."),
            }
            EXIT_SUCCESS
        }
        Command::Annotate { snapshot } => {
            let annotated = driver::annotate(snapshot, &options)?;
            if annotated.is_empty() {
                eprintln!("No attribute classes to annotate.");
            }
            for (name, text) in annotated {
                println!("// {name}");
                print!("{text}");
            }
            EXIT_SUCCESS
        }
        Command::ShowConfig => {
            println!("{}", driver::show_config(&options)?);
            EXIT_SUCCESS
        }
    };

    if status != EXIT_SUCCESS {
        std::process::exit(status);
    }
    Ok(())
}
