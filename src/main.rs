// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-data: inspect and validate the bundled reference tables

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use country_data::lookup::{self, CountryQuery};
use country_data::types::{Country, Currency, Language, Status};
use country_data::{calling, countries, currencies, export, languages, validate};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "country-data")]
#[command(version)]
#[command(about = "Country, currency, and language reference data keyed by ISO codes")]
#[command(long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a country by alpha-2 or alpha-3 code
    Country {
        #[arg(value_name = "CODE")]
        code: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a currency by ISO 4217 code
    Currency {
        #[arg(value_name = "CODE")]
        code: String,

        #[arg(long)]
        json: bool,
    },

    /// Show a language by ISO 639 code
    Language {
        #[arg(value_name = "CODE")]
        code: String,

        #[arg(long)]
        json: bool,
    },

    /// List countries, optionally filtered
    List {
        /// Only rows with this status (e.g. "assigned", "deleted")
        #[arg(short, long)]
        status: Option<String>,

        /// Only countries using this currency
        #[arg(short, long)]
        currency: Option<String>,

        /// Only countries using this language (ISO 639-2/T)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Print every international calling code in numeric order
    CallingCodes,

    /// Check the dataset's referential integrity
    Validate,

    /// Dump the full dataset as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Country { code, json } => {
            let country = countries()
                .get(&code)
                .ok_or_else(|| anyhow!("no country with code {:?}", code))?;
            if json {
                println!("{}", serde_json::to_string_pretty(country)?);
            } else {
                print_country(country);
            }
        }

        Commands::Currency { code, json } => {
            let currency = currencies()
                .get(&code)
                .ok_or_else(|| anyhow!("no currency with code {:?}", code))?;
            if json {
                println!("{}", serde_json::to_string_pretty(currency)?);
            } else {
                print_currency(currency);
            }
        }

        Commands::Language { code, json } => {
            let language = languages()
                .get(&code)
                .ok_or_else(|| anyhow!("no language with code {:?}", code))?;
            if json {
                println!("{}", serde_json::to_string_pretty(language)?);
            } else {
                print_language(language);
            }
        }

        Commands::List {
            status,
            currency,
            language,
        } => {
            let mut query = CountryQuery::new();
            if let Some(label) = status.as_deref() {
                let status = Status::parse(label).ok_or_else(|| {
                    anyhow!(
                        "unknown status {:?} (expected one of: {})",
                        label,
                        Status::all()
                            .iter()
                            .map(|s| s.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )
                })?;
                query = query.status(status);
            }
            if let Some(code) = currency.as_deref() {
                query = query.currency(code);
            }
            if let Some(code) = language.as_deref() {
                query = query.language(code);
            }

            let found = lookup::countries(&query);
            for country in &found {
                println!(
                    "{}  {:2}  {:3}  {:<44} {}",
                    country.emoji,
                    country.alpha2.bold(),
                    country.alpha3,
                    country.name,
                    country.kor_name.dimmed()
                );
            }
            println!("\n{} countries", found.len());
        }

        Commands::CallingCodes => {
            for code in calling::calling_codes() {
                let names: Vec<&str> = calling::countries_for_calling_code(code)
                    .iter()
                    .map(|c| c.alpha2)
                    .collect();
                println!("{:<8} {}", code.bold(), names.join(" "));
            }
        }

        Commands::Validate => {
            let report = validate::dataset();
            println!("{}", "=== DATASET VALIDATION ===".bold().cyan());
            println!("  Countries checked: {}", report.checked());
            println!("  Currencies: {}", currencies().len());
            println!("  Languages: {}", languages().len());
            println!();

            if report.is_ok() {
                println!("{}", "PASSED".green().bold());
            } else {
                println!("{}", "FAILED".red().bold());
                for (kind, count) in report.counts_by_kind() {
                    println!("  {:<12} {}", kind, count.to_string().red());
                }
                println!();
                for violation in report.violations() {
                    println!("    - {}", violation.to_string().red());
                }
            }
            report.into_result()?;
        }

        Commands::Export { output, compact } => {
            if let Some(path) = output {
                export::write_json(&path, !compact)?;
                println!("Dataset saved to: {}", path.display());
            } else {
                println!("{}", export::to_json(!compact)?);
            }
        }
    }

    Ok(())
}

fn print_country(country: &Country) {
    println!(
        "\n{} {}",
        country.emoji,
        country.name.bold().cyan()
    );
    if !country.kor_name.is_empty() {
        println!("  Korean name: {}", country.kor_name);
    }
    println!("  Alpha-2: {}", country.alpha2);
    println!(
        "  Alpha-3: {}",
        if country.alpha3.is_empty() { "-" } else { country.alpha3 }
    );
    let status = if country.status.is_assigned() {
        country.status.as_str().green()
    } else {
        country.status.as_str().yellow()
    };
    println!("  Status: {}", status);
    println!("  Currencies: {}", join_or_dash(country.currencies));
    println!("  Languages: {}", join_or_dash(country.languages));
    println!("  Calling codes: {}", join_or_dash(country.calling_codes));
    if !country.ioc.is_empty() {
        println!("  IOC: {}", country.ioc);
    }
}

fn print_currency(currency: &Currency) {
    println!("\n{} {}", currency.code.bold().cyan(), currency.name);
    println!("  Number: {}", currency.number);
    match currency.decimals {
        Some(decimals) => println!("  Decimals: {}", decimals),
        None => println!("  Decimals: n/a"),
    }
    if !currency.symbol.is_empty() {
        println!("  Symbol: {}", currency.symbol);
    }
}

fn print_language(language: &Language) {
    println!("\n{} {}", language.alpha3.bold().cyan(), language.name);
    if !language.alpha2.is_empty() {
        println!("  ISO 639-1: {}", language.alpha2);
    }
    if !language.bibliographic.is_empty() {
        println!("  Bibliographic: {}", language.bibliographic);
    }
}

fn join_or_dash(values: &[&str]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}
