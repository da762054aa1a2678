use clap::{Arg, ArgMatches, Command};
use log::error;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Manual source read when no path is given.
const DEFAULT_INPUT: &str = "manual.md";
/// PDF written when no output path is given.
const DEFAULT_OUTPUT: &str = "manual.pdf";

#[derive(Debug)]
enum AppError {
    FileReadError(std::io::Error),
    ConversionError(String),
    PathError(String),
}

/// Verbosity level for output
#[derive(Debug, Clone, Copy, PartialEq)]
enum Verbosity {
    Quiet,   // No output except errors
    Normal,  // Standard output
    Verbose, // Detailed output
}

/// Read the manual text and determine the directory screenshots are
/// resolved against (the document's directory, or the current directory for
/// string input).
fn get_markdown_input(matches: &ArgMatches) -> Result<(String, PathBuf), AppError> {
    if let Some(markdown_string) = matches.get_one::<String>("string") {
        let base_dir = env::current_dir().map_err(|e| AppError::PathError(e.to_string()))?;
        return Ok((markdown_string.to_string(), base_dir));
    }

    let file_path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or(DEFAULT_INPUT);
    let content = fs::read_to_string(file_path).map_err(AppError::FileReadError)?;

    let base_dir = Path::new(file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    Ok((content, base_dir))
}

fn get_output_path(matches: &ArgMatches) -> Result<PathBuf, AppError> {
    let current_dir = env::current_dir().map_err(|e| AppError::PathError(e.to_string()))?;

    Ok(matches
        .get_one::<String>("output")
        .map(|p| current_dir.join(p))
        .unwrap_or_else(|| current_dir.join(DEFAULT_OUTPUT)))
}

fn run(matches: ArgMatches) -> Result<(), AppError> {
    // Determine verbosity level
    let verbosity = if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };

    let html_only = matches.get_flag("html-only");

    let (markdown, base_dir) = get_markdown_input(&matches)?;
    let output_path = get_output_path(&matches)?;
    let output_path_str = output_path
        .to_str()
        .ok_or_else(|| AppError::PathError("Invalid output path".to_string()))?;

    if html_only {
        // Stop after the deterministic stages and keep the intermediate
        // document; useful for inspecting substitution and styling.
        let html = manual2pdf::compose_html(&markdown, &base_dir);
        fs::write(output_path_str, html).map_err(|e| {
            AppError::ConversionError(format!("Failed to write HTML to {}: {}", output_path_str, e))
        })?;

        if verbosity != Verbosity::Quiet {
            println!("✅ Successfully saved HTML to {}", output_path_str);
        }
        return Ok(());
    }

    manual2pdf::render_into_file(&markdown, &base_dir, output_path_str)
        .map_err(|e| AppError::ConversionError(e.to_string()))?;

    if verbosity != Verbosity::Quiet {
        println!("✅ Successfully saved PDF to {}", output_path_str);

        // Show file size in verbose mode
        if verbosity == Verbosity::Verbose {
            if let Ok(metadata) = fs::metadata(output_path_str) {
                let size_kb = metadata.len() as f64 / 1024.0;
                if size_kb < 1024.0 {
                    println!("   Size: {:.1} KB", size_kb);
                } else {
                    println!("   Size: {:.2} MB", size_kb / 1024.0);
                }
            }
        }
    }

    Ok(())
}

fn main() {
    // Initialize logger with environment variable control (RUST_LOG)
    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();

    let cmd = Command::new("manual2pdf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown user manual to a styled PDF")
        .after_help(
            "EXAMPLES:\n  \
            manual2pdf\n  \
            manual2pdf -p docs/manual.md -o manual.pdf\n  \
            manual2pdf -p manual.md --html-only -o manual.html\n  \
            manual2pdf -s \"# 使用手冊\" -o manual.pdf\n",
        )
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .value_name("FILE_PATH")
                .default_value(DEFAULT_INPUT)
                .help("Path to the markdown manual; screenshots are read from the same directory")
                .conflicts_with("string"),
        )
        .arg(
            Arg::new("string")
                .short('s')
                .long("string")
                .value_name("MARKDOWN_STRING")
                .help("Markdown content as a string"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("OUTPUT_PATH")
                .default_value(DEFAULT_OUTPUT)
                .help("Path to the output file"),
        )
        .arg(
            Arg::new("html-only")
                .long("html-only")
                .help("Write the composed HTML document instead of rendering a PDF")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show detailed output including the output file size")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("quiet"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress all output except errors")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("verbose"),
        );

    let matches = cmd.get_matches();

    if let Err(e) = run(matches) {
        match e {
            AppError::FileReadError(e) => error!("[X] Error reading file: {}", e),
            AppError::ConversionError(e) => error!("[X] Conversion error: {}", e),
            AppError::PathError(e) => error!("[X] Path error: {}", e),
        }
        process::exit(1);
    }
}
