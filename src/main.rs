//! Command-line interface for wsdldoc

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use wsdldoc::limits::Limits;
#[cfg(feature = "cli")]
use wsdldoc::loaders::{Loader, RetryPolicy};
#[cfg(feature = "cli")]
use wsdldoc::{parse_source, render, ExtractOptions, FieldCollection, Format, Location, Result};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "wsdldoc")]
#[command(author, version, about = "Parse a WSDL file and print a readable report", long_about = None)]
#[command(after_help = "Examples:
  wsdldoc service.wsdl
  wsdldoc http://example.com/service?wsdl
  wsdldoc service.wsdl --format html --output result.html")]
struct Cli {
    /// Path or http(s) URL of the WSDL
    #[arg(value_name = "WSDL")]
    wsdl: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Collect complex type fields through sequence/all/choice only,
    /// instead of every nested element
    #[arg(long)]
    direct_fields: bool,

    /// Attempts for remote fetches that fail to connect
    #[arg(long, default_value_t = 3)]
    retries: u32,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> Result<()> {
    let retry = RetryPolicy {
        max_attempts: cli.retries,
        ..RetryPolicy::default()
    };
    let loader = Loader::new().with_limits(Limits::default()).with_retry(retry);

    let location = Location::parse(&cli.wsdl);
    let source = loader.load(&location)?;
    tracing::info!(location = %location.as_str(), "loaded WSDL");

    let options = ExtractOptions::default().with_field_collection(if cli.direct_fields {
        FieldCollection::DirectChildren
    } else {
        FieldCollection::Descendants
    });
    let model = parse_source(&source, loader.limits(), &options)?;
    tracing::info!(
        services = model.services.len(),
        port_types = model.port_types.len(),
        messages = model.messages.len(),
        types = model.types.len(),
        "parsed WSDL"
    );

    let output = render::render(&model, cli.format)?;

    if let Some(output_path) = cli.output {
        fs::write(&output_path, &output)?;
        tracing::info!(path = %output_path.display(), format = %cli.format, "report written");
    } else {
        println!("{}", output);
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
