//! Repodump CLI - flatten a repository into one annotated document.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use repodump::errors::{exit_code, DumpError};
use repodump::output::{write_document, OutputFormat};
use repodump::Dump;

#[derive(Parser)]
#[command(name = "repodump")]
#[command(about = "Flatten a repository into a single annotated text document")]
#[command(version)]
struct Cli {
    /// Root directory to dump
    #[arg(required_unless_present = "completions")]
    repo_path: Option<PathBuf>,

    /// Destination file for the generated document
    #[arg(required_unless_present = "completions")]
    output_file: Option<PathBuf>,

    /// Additional names to exclude
    #[arg(short = 'e', long = "exclude")]
    exclude: Vec<String>,

    /// Patterns of files to include contents
    #[arg(short = 'i', long = "include-content")]
    include_content: Vec<String>,

    /// Write the document as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum)]
    completions: Option<Shell>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        generate(shell, &mut Cli::command(), "repodump", &mut std::io::stdout());
        return;
    }

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> Result<(), DumpError> {
    // clap's required_unless_present guard makes both paths present here
    let (Some(repo_path), Some(output_file)) = (cli.repo_path, cli.output_file) else {
        return Ok(());
    };

    let document = Dump::new(&repo_path)
        .exclude(cli.exclude)
        .include_content(cli.include_content)
        .build()?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    write_document(&document, &output_file, format)?;
    println!("Output written to {}", output_file.display());

    Ok(())
}
