use clap::{Parser, ValueEnum};
use dig_turtle::{MalformedPolicy, PlanError, PlanTranslator, TranslatorConfig};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dig-turtle")]
#[command(version)]
#[command(about = "Translate a U/L/D/R dig plan into turtle-graphics commands")]
struct Cli {
    /// Plan file to read (`-` for stdin)
    #[arg(value_name = "INPUT", default_value = "input.txt")]
    input: PathBuf,

    /// Name of the turtle object in emitted calls
    #[arg(long, value_name = "NAME", default_value = "t")]
    turtle: String,

    /// Skip lines that are not exactly three tokens instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One drawing call per line
    Text,
    /// JSON array of commands
    Json,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

fn run(cli: Cli) -> Result<(), PlanError> {
    let input = read_source(&cli.input)
        .inspect_err(|e| tracing::error!(path = %cli.input.display(), "cannot read plan: {e}"))?;
    tracing::info!(path = %cli.input.display(), bytes = input.len(), "read plan");

    let translator = PlanTranslator::new(TranslatorConfig {
        turtle_name: cli.turtle,
        malformed: if cli.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Reject
        },
    });

    let stdout = io::stdout().lock();
    match cli.format {
        Format::Text => translator.write_plan(&input, stdout)?,
        Format::Json => translator.write_json(&input, stdout)?,
    };
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
