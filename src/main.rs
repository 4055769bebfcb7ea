// SPDX-License-Identifier: PMPL-1.0-or-later

//! tour-i18n: inspect and audit the storefront's translation catalogs

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tour_i18n::audit::{self, AuditReport};
use tour_i18n::config::Config;
use tour_i18n::i18n::{Lang, Resolution, Translator};
use tour_i18n::output::OutputFormat;
use tour_i18n::telemetry;

#[derive(Parser)]
#[command(name = "tour-i18n")]
#[command(version)]
#[command(about = "Resolve and audit storefront translation catalogs")]
#[command(long_about = None)]
struct Cli {
    /// Directory of locale files (overrides config and TOUR_I18N_LOCALES)
    #[arg(long, global = true, value_name = "DIR")]
    locales: Option<PathBuf>,

    /// Config file (default: ./tour-i18n.yaml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a key path to display text
    Get {
        /// Dotted key path, e.g. hero.title
        #[arg(value_name = "KEY")]
        key: String,

        /// Language code (default: config default_language, else EN)
        #[arg(short, long)]
        lang: Option<String>,

        /// Also print whether the text was found, borrowed from EN, or missing
        #[arg(long)]
        explain: bool,
    },

    /// Print a whole namespace for a language
    Namespace {
        #[arg(value_name = "NAME")]
        name: String,

        #[arg(short, long)]
        lang: Option<String>,

        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// List supported languages and whether a catalog is loaded for each
    Langs,

    /// Report keys each language is missing relative to EN
    Audit {
        /// Report format (default: from the output file extension, else json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the report to a file instead of printing a summary
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with an error if any language is incomplete
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_logging(cli.verbose)?;

    let mut config = Config::discover(cli.config.as_deref())?;
    if let Some(dir) = cli.locales {
        config.locales_dir = Some(dir);
    }
    let translator = Translator::new(config.catalog_set()?);

    match cli.command {
        Commands::Get { key, lang, explain } => {
            let code = language_code(&config, lang.as_deref());
            let text = translator.resolve_key(&code, &key);
            if explain {
                let resolution = translator.lookup(&code, &key);
                let label = match resolution {
                    Resolution::Found(_) => resolution.label().green(),
                    Resolution::Fallback(_) => resolution.label().yellow(),
                    Resolution::Missing => resolution.label().red(),
                };
                println!("{} [{} {}]", text, code, label);
            } else {
                println!("{}", text);
            }
        }

        Commands::Namespace { name, lang, format } => {
            let code = language_code(&config, lang.as_deref());
            let namespace = translator.resolve_namespace(&code, &name);
            if namespace.is_empty() {
                tracing::warn!(namespace = %name, lang = %code, "namespace is empty or absent");
            }
            print!("{}", ensure_newline(format.serialize(namespace)?));
        }

        Commands::Langs => {
            for lang in Lang::all() {
                let status = if translator.catalogs().get(*lang).is_some() {
                    "loaded".green()
                } else {
                    "not loaded".red()
                };
                let marker = if *lang == Lang::REFERENCE {
                    " (reference)"
                } else {
                    ""
                };
                println!(
                    "{}  {:<10} {:<11} {}{}",
                    lang.code().bold(),
                    lang.english_name(),
                    lang.native_name(),
                    status,
                    marker
                );
            }
        }

        Commands::Audit {
            format,
            output,
            strict,
        } => {
            let report = audit::audit(translator.catalogs());
            if let Some(path) = output {
                let format = format
                    .or_else(|| OutputFormat::from_path(&path))
                    .unwrap_or(OutputFormat::Json);
                std::fs::write(&path, format.serialize(&report)?)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Audit saved to: {}", path.display());
            } else if let Some(format) = format {
                print!("{}", ensure_newline(format.serialize(&report)?));
            } else {
                print_audit(&report);
            }
            if (strict || config.strict_audit) && !report.is_complete() {
                return Err(anyhow!(
                    "{} translation(s) missing across {} language(s)",
                    report.total_missing(),
                    report.languages.iter().filter(|l| !l.is_complete()).count()
                ));
            }
        }
    }

    Ok(())
}

/// Canonical code for a user-supplied language, or the raw value when it
/// names no supported language (resolution then uses the reference catalog).
fn language_code(config: &Config, requested: Option<&str>) -> String {
    match requested {
        Some(raw) => match Lang::parse(raw) {
            Some(lang) => lang.code().to_string(),
            None => {
                tracing::warn!(lang = raw, "unsupported language, using {}", Lang::REFERENCE);
                raw.to_string()
            }
        },
        None => config.default_lang().code().to_string(),
    }
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn print_audit(report: &AuditReport) {
    println!(
        "Reference: {} ({} keys)",
        report.reference.code().bold(),
        report.reference_keys
    );
    for entry in &report.languages {
        let pct = format!("{:>5.1}%", entry.coverage);
        let pct = if entry.is_complete() {
            pct.green()
        } else if entry.loaded {
            pct.yellow()
        } else {
            pct.red()
        };
        println!(
            "  {}  {}  {}/{} translated",
            entry.language.code().bold(),
            pct,
            entry.translated,
            report.reference_keys
        );
        for key in &entry.missing {
            println!("      - missing {}", key);
        }
        for key in &entry.extra {
            println!("      + extra   {}", key);
        }
    }
}
