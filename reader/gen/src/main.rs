//! Reader Code Generator
//!
//! Generates the Go `Reader` interface and its paginated SDK accessors from
//! a provider's descriptor list. Generated source is printed to stdout;
//! logs go to stderr.

use std::io::Write;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use reader_define::Descriptor;
use reader_definitions::define_aws_reader;
use reader_gen::config::{DEFAULT_INTERFACE, DEFAULT_PACKAGE, DEFAULT_RECEIVER, GeneratorConfig};
use reader_gen::errors::GeneratorError;
use reader_gen::output::{generate, inspect};
use reader_gen::validation::{reject_issues, validate_descriptors};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

/// Cloud providers with a descriptor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Provider {
    /// Amazon Web Services
    Aws,
}

impl Provider {
    fn descriptors(self) -> Vec<Descriptor> {
        match self {
            Provider::Aws => define_aws_reader(),
        }
    }
}

/// Reader generator - renders paginated Go SDK accessors from descriptor lists
#[derive(Parser, Debug)]
#[command(name = "reader-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Provider whose descriptor list is rendered
    #[arg(short, long, value_enum, default_value_t = Provider::Aws)]
    provider: Provider,

    /// Go package name of the generated file
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    package: String,

    /// Name of the generated interface
    #[arg(long, default_value = DEFAULT_INTERFACE)]
    interface: String,

    /// Receiver type implementing the interface
    #[arg(long, default_value = DEFAULT_RECEIVER)]
    receiver: String,

    /// Refuse descriptor lists with conflicting or ignored fields
    #[arg(long)]
    strict: bool,

    /// Print the derived plans as JSON instead of Go source
    #[arg(long)]
    inspect: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let descriptors = cli.provider.descriptors();
    info!(provider = ?cli.provider, descriptors = descriptors.len(), "Loaded descriptor list");

    if cli.strict {
        let issues = validate_descriptors(&descriptors);
        for issue in &issues {
            eprintln!("{} {}", "error:".red().bold(), issue);
        }
        if !issues.is_empty() {
            eprintln!("{}", "descriptor list failed strict validation".red());
        }
        reject_issues(issues)?;
    }

    let mut stdout = std::io::stdout().lock();

    if cli.inspect {
        writeln!(stdout, "{}", inspect(&descriptors)?)?;
        return Ok(());
    }

    let config = GeneratorConfig::default()
        .with_package(cli.package)
        .with_interface(cli.interface)
        .with_receiver(cli.receiver);

    let code = generate(&descriptors, &config)?;
    stdout.write_all(code.as_bytes())?;

    Ok(())
}
