//! xlint: Command-line tool for linting X.509 certificates.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use xlint_lib::{Certificate, FilterOptions, LintSource, Registry, Report, Status};

#[derive(Parser)]
#[command(
    name = "xlint",
    about = "Lint X.509 certificates against CABF, ETSI and RFC requirements",
    long_about = "xlint runs a set of independent conformance checks (lints) against\n\
                  X.509 certificates and reports a pass/fail status per lint.\n\n\
                  Input format (PEM vs DER) is auto-detected unless --pem or --der\n\
                  is specified. All commands read from stdin when no file is given.",
    after_help = "EXAMPLES:\n\
                  \n  xlint lint cert.pem\
                  \n  xlint lint --json cert.pem\
                  \n  xlint lint --include-sources etsi_esi cert.der\
                  \n  xlint lint --recurse --failures-only certs/\
                  \n  xlint list --source rfc5280\
                  \n  cat cert.pem | xlint lint"
)]
struct Cli {
    /// Log lint execution details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the lints against certificates (exit 0 = clean, 1 = error or fatal findings)
    Lint {
        /// Certificate file or directory. Reads from stdin if omitted.
        file: Option<PathBuf>,
        /// Force DER input parsing (default: auto-detect)
        #[arg(long)]
        der: bool,
        /// Force PEM input parsing (default: auto-detect)
        #[arg(long)]
        pem: bool,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
        /// Also print lints that were not applicable or not effective
        #[arg(long)]
        all: bool,
        /// Only run these lints
        #[arg(long, value_delimiter = ',', value_name = "NAMES")]
        include_names: Vec<String>,
        /// Skip these lints
        #[arg(long, value_delimiter = ',', value_name = "NAMES")]
        exclude_names: Vec<String>,
        /// Only run lints from these sources
        #[arg(long, value_delimiter = ',', value_name = "SOURCES")]
        include_sources: Vec<String>,
        /// Skip lints from these sources
        #[arg(long, value_delimiter = ',', value_name = "SOURCES")]
        exclude_sources: Vec<String>,
        /// Only print failures (directory mode)
        #[arg(long)]
        failures_only: bool,
        /// Recurse into subdirectories (directory mode)
        #[arg(short, long)]
        recurse: bool,
    },
    /// List the registered lints
    List {
        /// Only list lints from this source
        #[arg(long)]
        source: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Maximum file size for certificate inputs (10 MiB).
const MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            let meta = std::fs::metadata(path)
                .with_context(|| format!("Failed to stat file: {}", path.display()))?;
            if meta.len() > MAX_INPUT_BYTES {
                anyhow::bail!(
                    "File too large ({} bytes, max {} bytes): {}",
                    meta.len(),
                    MAX_INPUT_BYTES,
                    path.display()
                );
            }
            std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .take(MAX_INPUT_BYTES)
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Parse every certificate in the input. PEM bundles yield one entry each.
fn parse_input(input: &[u8], der: bool, pem: bool) -> Result<Vec<Certificate>> {
    let is_pem = if der {
        false
    } else if pem {
        true
    } else {
        input
            .iter()
            .find(|b| !b.is_ascii_whitespace())
            .is_some_and(|&b| b == b'-')
    };

    if is_pem {
        xlint_lib::parse_pem_bundle(input)?
            .iter()
            .map(|der| xlint_lib::parse_der(der).map_err(anyhow::Error::from))
            .collect()
    } else {
        Ok(vec![xlint_lib::parse_der(input)?])
    }
}

fn parse_sources(names: &[String]) -> Result<Vec<LintSource>> {
    names
        .iter()
        .map(|name| name.parse::<LintSource>().map_err(anyhow::Error::from))
        .collect()
}

/// Check if a path has a certificate file extension.
fn is_cert_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("pem") || ext.eq_ignore_ascii_case("der")
            || ext.eq_ignore_ascii_case("crt") || ext.eq_ignore_ascii_case("cer")
    )
}

/// Find all certificate files (.pem, .der, .crt, .cer) in a directory.
fn find_cert_files(dir: &Path, recurse: bool) -> Vec<PathBuf> {
    let walker = if recurse {
        walkdir::WalkDir::new(dir)
    } else {
        walkdir::WalkDir::new(dir).max_depth(1)
    };
    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_cert_file(e.path()))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Report for one certificate, labelled by where it came from.
#[derive(Serialize)]
struct LabelledReport {
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<Report>,
}

impl LabelledReport {
    fn failed(&self) -> bool {
        self.error.is_some()
            || self
                .report
                .as_ref()
                .is_some_and(|r| r.summary().errors_present() || r.summary().fatals_present())
    }
}

fn lint_input(
    label: &str,
    input: &[u8],
    der: bool,
    pem: bool,
    registry: &Registry,
) -> Vec<LabelledReport> {
    let certs = match parse_input(input, der, pem) {
        Ok(certs) => certs,
        Err(e) => {
            tracing::debug!(input = %label, error = %e, "input did not parse");
            return vec![LabelledReport {
                label: label.to_string(),
                error: Some(format!("parse error: {:#}", e)),
                report: None,
            }]
        }
    };
    let multiple = certs.len() > 1;
    xlint_lib::lint_certificates(registry, &certs)
        .into_iter()
        .enumerate()
        .map(|(i, report)| LabelledReport {
            label: if multiple {
                format!("{}[{}]", label, i)
            } else {
                label.to_string()
            },
            error: None,
            report: Some(report),
        })
        .collect()
}

fn print_report(entry: &LabelledReport, all: bool) {
    if let Some(err) = &entry.error {
        eprintln!("{}: FAIL ({})", entry.label, err);
        return;
    }
    let Some(report) = &entry.report else {
        return;
    };
    println!("{}:", entry.label);
    for (name, result) in report.iter() {
        if !all && matches!(result.status, Status::NotApplicable | Status::NotEffective) {
            continue;
        }
        match &result.details {
            Some(details) => println!("  {:<45} {:<5} {}", name, result.status, details),
            None => println!("  {:<45} {}", name, result.status),
        }
    }
    let summary = report.summary();
    println!(
        "  -- {} pass, {} info, {} warn, {} error, {} fatal, {} NA, {} NE",
        summary.count(Status::Pass),
        summary.count(Status::Info),
        summary.count(Status::Warn),
        summary.count(Status::Error),
        summary.count(Status::Fatal),
        summary.count(Status::NotApplicable),
        summary.count(Status::NotEffective),
    );
}

fn print_summary_line(entry: &LabelledReport) {
    match (&entry.error, &entry.report) {
        (Some(err), _) => eprintln!("{}: FAIL ({})", entry.label, err),
        (None, Some(report)) => {
            let summary = report.summary();
            let line = format!(
                "{}: {} ({} error, {} fatal, {} warn)",
                entry.label,
                if entry.failed() { "FAIL" } else { "OK" },
                summary.count(Status::Error),
                summary.count(Status::Fatal),
                summary.count(Status::Warn),
            );
            if entry.failed() {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
        }
        (None, None) => {}
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = xlint_lib::global_registry().context("Failed to build lint registry")?;

    match &cli.command {
        Commands::Lint {
            file,
            der,
            pem,
            json,
            all,
            include_names,
            exclude_names,
            include_sources,
            exclude_sources,
            failures_only,
            recurse,
        } => {
            let options = FilterOptions {
                include_names: include_names.clone(),
                exclude_names: exclude_names.clone(),
                include_sources: parse_sources(include_sources)?,
                exclude_sources: parse_sources(exclude_sources)?,
            };
            let filtered;
            let registry = if options.is_empty() {
                registry
            } else {
                filtered = registry.filter(&options)?;
                &filtered
            };

            // Directory mode: lint all cert files in parallel
            let entries: Vec<LabelledReport> = match file {
                Some(path) if path.is_dir() => {
                    let files = find_cert_files(path, *recurse);
                    if files.is_empty() {
                        anyhow::bail!(
                            "No certificate files (.pem, .der, .crt, .cer) found in {}",
                            path.display()
                        );
                    }
                    tracing::debug!(count = files.len(), dir = %path.display(), "linting directory");
                    let entries: Vec<LabelledReport> = files
                        .par_iter()
                        .flat_map_iter(|f| {
                            let label = f.display().to_string();
                            match std::fs::read(f) {
                                Ok(data) => lint_input(&label, &data, *der, *pem, registry),
                                Err(e) => vec![LabelledReport {
                                    label,
                                    error: Some(format!("read error: {}", e)),
                                    report: None,
                                }],
                            }
                        })
                        .collect();
                    if *json {
                        println!("{}", serde_json::to_string_pretty(&entries)?);
                    } else {
                        for entry in &entries {
                            if *failures_only && !entry.failed() {
                                continue;
                            }
                            print_summary_line(entry);
                        }
                    }
                    entries
                }
                _ => {
                    let input = read_input(file.as_ref())?;
                    let label = file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "stdin".to_string());
                    let entries = lint_input(&label, &input, *der, *pem, registry);
                    if *json {
                        println!("{}", serde_json::to_string_pretty(&entries)?);
                    } else {
                        for entry in &entries {
                            print_report(entry, *all);
                        }
                    }
                    entries
                }
            };

            if entries.iter().any(LabelledReport::failed) {
                std::process::exit(1);
            }
        }
        Commands::List { source, json } => {
            let lints = match source {
                Some(name) => registry.by_source(name.parse::<LintSource>()?),
                None => registry.all(),
            };
            if *json {
                let infos: Vec<_> = lints.iter().map(|lint| lint.info()).collect();
                println!("{}", serde_json::to_string_pretty(&infos)?);
            } else {
                for lint in lints {
                    println!("{:<45} {:<10} {}", lint.name, lint.source, lint.citation);
                }
            }
        }
    }

    Ok(())
}
