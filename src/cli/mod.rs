//! # CLI Module
//!
//! Command-line interface of the `jdl-json` binary.
//!
//! ## Commands
//!
//! ### `convert`
//!
//! Convert a JDL model into JSON entity documents:
//!
//! ```bash
//! jdl-json convert --model model.yaml --output entities.json
//! ```
//!
//! Options:
//! - `--model <FILE>` - Path to the JDL model, YAML or JSON (required)
//! - `--output <FILE>` - Write to a file instead of stdout
//! - `--config <FILE>` - Conversion config (default: `jdl-json.toml` next to the model, or `JDL_CONFIG`)
//! - `--application-name`, `--application-type`, `--database-type`,
//!   `--creation-timestamp` - Legacy-mode parameters, override the config file.
//!   Also read from `JDL_APPLICATION_NAME`, `JDL_APPLICATION_TYPE`,
//!   `JDL_DATABASE_TYPE` and `JDL_CREATION_TIMESTAMP`
//! - `--compact` - Single-line JSON
//!
//! A model declaring applications prints `{ "<app>": { "<Entity>": {...} } }`;
//! a model without applications prints `{ "<Entity>": {...} }` with
//! `changelogDate` values.
//!
//! ### `check`
//!
//! Report problems of a JDL model:
//!
//! ```bash
//! jdl-json check --model model.yaml --fail-on-error
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use jdl_json::cli::{Cli, run_cli};
//! use clap::Parser;
//!
//! run_cli(Cli::parse())?;
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};
