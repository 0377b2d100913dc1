use anyhow::{bail, Context};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::checker::{check_model, has_errors, print_check_issues, CheckIssue, CheckSeverity};
use crate::config::{load_conversion_config, resolve_config_path, ConversionConfig};
use crate::converter::{convert_entities_with_applications, convert_entities_without_application, ConversionParameters};
use crate::logger::TracingLogger;
use crate::model::{load_model, ApplicationType, DatabaseType, JdlObject};

/// Command-line interface for the JDL to JSON converter
#[derive(Parser, Debug)]
#[command(name = "jdl-json")]
#[command(about = "Convert parsed JDL models into JSON entity documents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a JDL model into JSON entity documents
    ///
    /// Models with applications produce one entity map per application;
    /// models without produce a single map with changelog dates.
    Convert {
        /// Path to the JDL model file (YAML or JSON)
        #[arg(short, long)]
        model: PathBuf,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to the conversion config (jdl-json.toml)
        /// If not provided, will auto-detect alongside the model
        #[arg(short, long, env = "JDL_CONFIG")]
        config: Option<PathBuf>,

        /// Application name, for models without applications
        #[arg(long, env = "JDL_APPLICATION_NAME")]
        application_name: Option<String>,

        /// Application type: monolith, microservice, gateway, uaa
        #[arg(long, env = "JDL_APPLICATION_TYPE")]
        application_type: Option<ApplicationType>,

        /// Database type: sql, mongodb, cassandra, couchbase, neo4j, no
        #[arg(long, env = "JDL_DATABASE_TYPE")]
        database_type: Option<DatabaseType>,

        /// RFC 3339 timestamp seeding the changelog dates (default: now)
        #[arg(long, env = "JDL_CREATION_TIMESTAMP")]
        creation_timestamp: Option<String>,

        /// Print compact JSON instead of pretty-printed JSON
        #[arg(long, default_value_t = false)]
        compact: bool,
    },
    /// Check a JDL model for problems without converting it
    Check {
        /// Path to the JDL model file (YAML or JSON)
        #[arg(short, long)]
        model: PathBuf,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

/// Run a parsed command line
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Convert {
            model,
            output,
            config,
            application_name,
            application_type,
            database_type,
            creation_timestamp,
            compact,
        } => {
            let overrides = ConversionConfig {
                application_name,
                application_type,
                database_type,
                creation_timestamp,
            };
            let jdl = load_model(&model)?;
            report_issues(&check_model(&jdl));

            let json = if jdl.applications.is_empty() {
                let config = resolve_conversion_config(config.as_deref(), &model)?.merged_with(overrides);
                convert_legacy(&jdl, &config, compact)?
            } else {
                tracing::info!(applications = jdl.applications.len(), "Converting per application");
                let converted = convert_entities_with_applications(Some(&jdl), &TracingLogger)?;
                to_json(&converted, compact)?
            };
            write_output(output.as_deref(), &json)
        }
        Commands::Check {
            model,
            fail_on_error,
            errors_only,
        } => {
            let jdl = load_model(&model)?;
            let mut issues = check_model(&jdl);
            if errors_only {
                issues.retain(|i| i.severity == CheckSeverity::Error);
            }
            print_check_issues(&issues);
            if fail_on_error && has_errors(&issues) {
                bail!("{} has errors", model.display());
            }
            Ok(())
        }
    }
}

fn resolve_conversion_config(explicit: Option<&Path>, model: &Path) -> anyhow::Result<ConversionConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("Conversion config not found: {}", path.display());
        }
    }
    let Some(path) = resolve_config_path(explicit, model) else {
        return Ok(ConversionConfig::default());
    };
    tracing::debug!(config = %path.display(), "Loading conversion config");
    Ok(load_conversion_config(&path)?.unwrap_or_default())
}

fn convert_legacy(jdl: &JdlObject, config: &ConversionConfig, compact: bool) -> anyhow::Result<String> {
    let creation_timestamp = config.creation_timestamp_utc()?.unwrap_or_else(Utc::now);
    let parameters = ConversionParameters {
        jdl: Some(jdl),
        application_name: config.application_name.as_deref(),
        application_type: config.application_type,
        database_type: config.database_type,
        creation_timestamp,
    };
    let converted = convert_entities_without_application(&parameters, &TracingLogger)
        .context("Models without applications need --application-name and --database-type (or a jdl-json.toml)")?;
    to_json(&converted, compact)
}

/// Surface checker findings as log events; conversion goes on regardless
fn report_issues(issues: &[CheckIssue]) {
    for issue in issues {
        match issue.severity {
            CheckSeverity::Error => {
                tracing::error!(kind = %issue.kind, location = %issue.location, "{}", issue.message)
            }
            CheckSeverity::Warning => {
                tracing::warn!(kind = %issue.kind, location = %issue.location, "{}", issue.message)
            }
            CheckSeverity::Info => {
                tracing::info!(kind = %issue.kind, location = %issue.location, "{}", issue.message)
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

fn write_output(output: Option<&Path>, json: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory for {}", path.display()))?;
            }
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write JSON output: {}", path.display()))?;
            tracing::info!(output = %path.display(), "Wrote JSON entities");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write JSON to stdout")?;
        }
    }
    Ok(())
}
