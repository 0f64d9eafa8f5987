//! CLI entry point for `mailsift`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mailsift::EmailReport;

#[derive(Parser)]
#[command(name = "mailsift", version, about = "Extract normalized text from an email container and its attachments")]
struct Cli {
    /// Email container to process (.eml or .msg)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = mailsift::config::load_config();

    let log_level = match cli.verbose {
        0 => config.general.log_level.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    setup_logging(&log_level);

    let raw = std::fs::read(&cli.file)
        .with_context(|| format!("cannot read '{}'", cli.file.display()))?;
    let file_name = cli
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let report = mailsift::process_email(file_name, &raw)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Set up tracing with stderr output and an env-filter override.
fn setup_logging(level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Human-readable report layout.
fn print_report(report: &EmailReport) {
    println!("From:    {}", report.from);
    println!("Subject: {}", report.subject);
    println!("\n{}\n", "-".repeat(72));
    println!("{}", report.body);

    if !report.attachments.is_empty() {
        println!("\n[Attachments: {} file(s)]", report.attachments.len());
        for att in &report.attachments {
            println!("\n--- {} ---", att.name);
            println!("{}", att.text);
        }
    }
}
