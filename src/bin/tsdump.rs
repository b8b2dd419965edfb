//! Command-line interface for tsdump
//! Converts a tree-sitter syntax tree dump into JSON (or another registered format).
//!
//! Usage:
//!   tsdump `<path>` [--format `<format>`] [--output `<file>`]   - Convert a dump
//!   tsdump `<path>` --config `<file>` [--strict]                - Convert with user settings
//!   tsdump --list-formats                                       - List available formats

use clap::{Arg, ArgAction, Command};
use std::path::Path;
use tsdump::tsdump::building::ConvertOptions;
use tsdump::tsdump::config::Loader;
use tsdump::tsdump::formats::FormatRegistry;
use tsdump::tsdump::processor::{process_file, write_output, ProcessingError, ProcessingOptions};

fn main() {
    let matches = Command::new("tsdump")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert tree-sitter syntax tree dumps into structured trees")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the tree-sitter dump")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from config: json)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on lines that carry no node instead of skipping them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let options = load_options(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("format"),
        matches.get_flag("strict"),
    );
    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    let output = matches.get_one::<String>("output");

    handle_convert_command(path, output.map(String::as_str), &options);
}

/// Resolve configuration: embedded defaults, then the user file, then flags
fn load_options(config: Option<&String>, format: Option<&String>, strict: bool) -> ProcessingOptions {
    let mut loader = Loader::new();
    if let Some(config) = config {
        loader = loader.with_file(config);
    }
    if let Some(format) = format {
        loader = loader
            .set_override("output.format", format.as_str())
            .unwrap_or_else(|e| exit_with(&format!("Error: invalid format override: {}", e)));
    }
    if strict {
        loader = loader
            .set_override("decoding.line_policy", "strict")
            .unwrap_or_else(|e| exit_with(&format!("Error: invalid policy override: {}", e)));
    }

    let config = loader
        .build()
        .unwrap_or_else(|e| exit_with(&format!("Error: could not load configuration: {}", e)));

    ProcessingOptions {
        convert: ConvertOptions::from(&config.decoding),
        format: config.output.format,
    }
}

/// Handle the convert command
fn handle_convert_command(path: &str, output: Option<&str>, options: &ProcessingOptions) {
    let rendered = process_file(path, options).unwrap_or_else(|e| report_and_exit(&e));

    match output {
        Some(output) => {
            write_output(output, &rendered).unwrap_or_else(|e| report_and_exit(&e));
            eprintln!(
                "Successfully parsed {} and saved to {}",
                path,
                Path::new(output).display()
            );
        }
        None => {
            if rendered.ends_with('\n') {
                print!("{}", rendered);
            } else {
                println!("{}", rendered);
            }
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");

    for (name, description) in registry.describe_formats() {
        println!("  {}", name);
        println!("    {}", description);
    }
}

fn report_and_exit(error: &ProcessingError) -> ! {
    exit_with(&format!("Error: {}", error))
}

fn exit_with(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
