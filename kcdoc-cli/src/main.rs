//! Command-line interface for kcdoc
//! This binary reads a standalone Kconfig file and generates structured
//! documentation from its declarations.
//!
//! Usage:
//!   kcdoc `<path>` [--output `<path>`] [--format `<format>`]   - Generate the document
//!   kcdoc --list-formats                                       - List available output formats

use clap::{Arg, ArgAction, Command};
use kcdoc_config::{KcdocConfig, Loader};
use kcdoc_parser::SourceLoader;
use kcdoc_render::FormatRegistry;
use std::fs;
use std::path::Path;

fn main() {
    let matches = Command::new("kcdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate documentation from standalone Kconfig files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the standalone Kconfig file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (default: docs/KCONFIG.md, or output.path from kcdoc.toml)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: markdown, or output.format from kcdoc.toml)"),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Write the document to stdout instead of a file")
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

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    handle_generate_command(
        path,
        matches.get_one::<String>("output"),
        matches.get_one::<String>("format"),
        matches.get_flag("stdout"),
    );
}

/// Handle the generate command
fn handle_generate_command(
    path: &str,
    output: Option<&String>,
    format: Option<&String>,
    to_stdout: bool,
) {
    let config = load_config(output, format);

    // Report a missing input before any parsing is attempted.
    if !Path::new(path).exists() {
        eprintln!("Error: Kconfig file not found: {}", path);
        std::process::exit(1);
    }

    let loader = SourceLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });
    let options = loader.parse();

    let registry = FormatRegistry::with_defaults();
    let document = registry
        .serialize(&options, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            eprintln!("\nAvailable formats:");
            for name in registry.list_formats() {
                if let Ok(fmt) = registry.get(&name) {
                    eprintln!("  {} - {}", fmt.name(), fmt.description());
                }
            }
            std::process::exit(1);
        });

    if to_stdout {
        print!("{}", document);
        return;
    }

    let destination = Path::new(&config.output.path);
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                eprintln!("Error creating {}: {}", parent.display(), e);
                std::process::exit(1);
            });
        }
    }
    fs::write(destination, &document).unwrap_or_else(|e| {
        eprintln!("Error writing {}: {}", destination.display(), e);
        std::process::exit(1);
    });

    if config.output.format == "markdown" {
        println!("Markdown generated: {}", destination.display());
    } else {
        println!("Output generated: {}", destination.display());
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(fmt) = registry.get(&name) {
            println!("  {}", fmt.name());
            println!("    {}", fmt.description());
            println!();
        }
    }
}

/// Layer CLI overrides over kcdoc.toml (if present) over the embedded defaults.
fn load_config(output: Option<&String>, format: Option<&String>) -> KcdocConfig {
    let mut loader = Loader::new().with_optional_file("kcdoc.toml");
    if let Some(path) = output {
        loader = loader.set_override("output.path", path.clone()).unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        });
    }
    if let Some(name) = format {
        loader = loader.set_override("output.format", name.clone()).unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        });
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}
