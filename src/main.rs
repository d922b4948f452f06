use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use serde::Serialize;
use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::{debug, warn};
use url::Url;

// Import from the library instead of local modules
use tld_info::{
    config::Config,
    loader,
    markdown,
    normalize,
    OutputFormat,
    SearchOptions,
    TldRecord,
};

const EXAMPLES: &str = "\
Examples:
  tld-info .ai
  tld-info search Anguilla
  tld-info validate example.org
  tld-info --type gTLD
  tld-info --country JP";

#[derive(Parser)]
#[command(
    name = "tld-info",
    version,
    about = "Look up, validate and search top-level domains",
    args_conflicts_with_subcommands = true,
    disable_help_subcommand = true,
    after_help = EXAMPLES
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Get info for a specific TLD (e.g., .com, ai)
    #[arg(value_name = "TLD")]
    tld: Option<String>,

    /// Arguments after the TLD are ignored
    #[arg(hide = true)]
    extra: Vec<String>,

    /// List TLDs of a specific type (e.g., ccTLD, gTLD)
    #[arg(long = "type", value_name = "TLD_TYPE", num_args = 0..=1)]
    kind: Option<Option<String>>,

    /// List TLDs for a specific country code (e.g., DE, US)
    #[arg(long, value_name = "COUNTRY_CODE", num_args = 0..=1)]
    country: Option<Option<String>>,

    /// Print records as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Search TLDs by name, registry, or country code
    Search {
        query: Option<String>,
        /// Stop after this many matches
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Validate if a TLD (or the TLD of a domain or URL) is known
    Validate {
        #[arg(value_name = "TLD_OR_DOMAIN")]
        input: Option<String>,
    },
    /// List all TLDs with basic info
    #[command(name = "listall")]
    ListAll,
    /// Write the Markdown TLD table
    Docs {
        /// Output file (defaults to the configured docs path)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct Validation<'a> {
    input: &'a str,
    tld: String,
    valid: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "tld_info=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = Config::load()
        .context("failed to load configuration")
        .and_then(|config| run(cli, config, &mut std::io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("CLI Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: Config, out: &mut impl Write) -> anyhow::Result<()> {
    if let Some(path) = &config.data_path {
        let table = loader::load_from_path(path)
            .with_context(|| format!("failed to load TLD data from {}", path.display()))?;
        tld_info::install(table)?;
    }

    let printer = Printer {
        output: if cli.json { OutputFormat::Json } else { config.output },
    };

    match cli.command {
        Some(Command::ListAll) => list_all(&printer, out),
        Some(Command::Search { query, limit }) => {
            let Some(query) = query.filter(|q| !q.is_empty()) else {
                return usage_error("Search query is missing.", out);
            };
            let limit = limit.unwrap_or(config.search_limit);
            let results = tld_info::search(&query, SearchOptions::with_limit(limit));
            printer.records(out, &results, || format!("No TLDs found matching \"{}\".", query))
        }
        Some(Command::Validate { input }) => {
            let Some(input) = input.filter(|i| !i.is_empty()) else {
                return usage_error("TLD to validate is missing.", out);
            };
            validate(&printer, &input, out)
        }
        Some(Command::Docs { output }) => {
            let path = output.unwrap_or(config.docs_path);
            write_docs(&path, out)
        }
        None => {
            if let Some(kind) = cli.kind {
                let Some(kind) = kind.filter(|k| !k.is_empty()) else {
                    return usage_error("--type option requires a value.", out);
                };
                let results = tld_info::filter_by_type(&kind);
                return printer.records(out, &results, || format!("No TLDs found for type \"{}\".", kind));
            }

            if let Some(country) = cli.country {
                let Some(country) = country.filter(|c| !c.is_empty()) else {
                    return usage_error("--country option requires a value.", out);
                };
                let results = tld_info::filter_by_country(&country);
                return printer.records(out, &results, || {
                    format!("No TLDs found for country code \"{}\".", country)
                });
            }

            if !cli.extra.is_empty() {
                debug!("Ignoring extra arguments: {:?}", cli.extra);
            }

            match cli.tld {
                Some(tld) => lookup(&printer, &tld, out),
                // Default to help if no command was given
                None => print_help(out),
            }
        }
    }
}

fn list_all(printer: &Printer, out: &mut impl Write) -> anyhow::Result<()> {
    let records: Vec<&TldRecord> = tld_info::records().iter().collect();
    printer.records(out, &records, || "No TLD data available.".to_string())
}

fn lookup(printer: &Printer, input: &str, out: &mut impl Write) -> anyhow::Result<()> {
    if let Some(record) = tld_info::lookup(input) {
        return printer.record(out, record);
    }

    // Maybe a domain was given where a TLD was expected (example.com, not .com)
    let parts: Vec<&str> = input.split('.').collect();
    if parts.len() > 1 && !parts[0].is_empty() {
        if let Some(record) = parts.last().and_then(|label| tld_info::lookup(label)) {
            if printer.output == OutputFormat::Text {
                writeln!(out, "Information for the TLD part ('{}') of '{}':", record.tld, input)?;
            }
            return printer.record(out, record);
        }
    }

    debug!("Lookup for {:?} found nothing", input);
    match printer.output {
        OutputFormat::Text => {
            writeln!(out, "No information found for TLD: \"{}\".", normalize(input))?;
            writeln!(out, "Is it a valid TLD?  {}", tld_info::is_valid(input))?;
        }
        OutputFormat::Json => writeln!(out, "null")?,
    }
    Ok(())
}

fn validate(printer: &Printer, input: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let tld = tld_candidate(input);
    let valid = tld_info::is_valid(&tld);

    match printer.output {
        OutputFormat::Text => writeln!(out, "{}", valid)?,
        OutputFormat::Json => {
            let validation = Validation { input, tld, valid };
            writeln!(out, "{}", serde_json::to_string_pretty(&validation)?)?;
        }
    }
    Ok(())
}

/// The part of a TLD, domain or URL that names the TLD.
fn tld_candidate(input: &str) -> String {
    let host = if input.contains("://") {
        match Url::parse(input) {
            Ok(url) => url.host_str().map(str::to_string),
            Err(e) => {
                debug!("Could not parse {:?} as a URL: {}", input, e);
                None
            }
        }
    } else {
        None
    };

    let host = host.as_deref().unwrap_or(input);
    let host = host.strip_suffix('.').unwrap_or(host);
    match host.rsplit_once('.') {
        Some((_, label)) => format!(".{}", label),
        None => host.to_string(),
    }
}

fn write_docs(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let records = tld_info::records();
    if records.is_empty() {
        warn!("TLD table is empty, Markdown will be generated with no data");
    }

    markdown::write_table(records, path)
        .with_context(|| format!("failed to write Markdown documentation to {}", path.display()))?;
    writeln!(out, "Successfully wrote Markdown documentation to {}", path.display())?;
    Ok(())
}

fn usage_error(message: &str, out: &mut impl Write) -> anyhow::Result<()> {
    eprintln!("Error: {}", message);
    print_help(out)
}

fn print_help(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", Cli::command().render_help())?;
    Ok(())
}

struct Printer {
    output: OutputFormat,
}

impl Printer {
    fn record(&self, out: &mut impl Write, record: &TldRecord) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Text => writeln!(out, "{}", describe(record))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(record)?)?,
        }
        Ok(())
    }

    fn records(
        &self,
        out: &mut impl Write,
        records: &[&TldRecord],
        empty_message: impl FnOnce() -> String,
    ) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Text if records.is_empty() => writeln!(out, "{}", empty_message())?,
            OutputFormat::Text => {
                for record in records {
                    writeln!(out, "{}", describe(record))?;
                }
            }
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(records)?)?,
        }
        Ok(())
    }
}

fn describe(record: &TldRecord) -> String {
    let mut line = format!(
        "{}: {}, Registry: {}, Status: {}",
        record.tld,
        record.kind,
        record.registry.as_deref().unwrap_or("N/A"),
        record.status.as_ref().map(|s| s.as_str()).unwrap_or("N/A"),
    );

    if let Some(code) = &record.country_code {
        line.push_str(&format!(", Country: {}", code));
    }
    if let Some(flag) = tld_info::emoji_flag(&record.tld) {
        line.push_str(&format!(", Emoji: {}", flag));
    }

    line
}
