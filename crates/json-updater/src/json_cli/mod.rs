//! `json-update`: command-line front end for [`Updater`].
//!
//! Holds the argument definitions and the core logic used by the binary
//! entry point, so both can be exercised from tests.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::codec::serialize_document;
use crate::error::{Error, Result};
use crate::options::{Strictness, UpdaterOptions};
use crate::store::DocumentStore;
use crate::updater::Updater;

/// Edit a JSON file by dotted property path
#[derive(Parser, Debug)]
#[command(name = "json-update")]
#[command(version)]
pub struct Cli {
    /// Reject `update` merges across incompatible types
    #[arg(long, env = "JSON_UPDATE_STRICT", conflicts_with = "permissive")]
    pub strict: bool,

    /// Let `update` replace values of incompatible types, even when the
    /// config file asks for strict merges
    #[arg(long)]
    pub permissive: bool,

    /// Spaces per indentation level in the written file
    #[arg(long, env = "JSON_UPDATE_INDENT")]
    pub indent: Option<usize>,

    /// Sort object keys produced by `append`
    #[arg(long)]
    pub sort_appended_keys: bool,

    /// End the written file with a newline
    #[arg(long)]
    pub trailing_newline: bool,

    /// TOML file with updater options; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON document to edit
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert a property that does not exist yet
    Add { path: String, value: String },
    /// Merge into an existing property
    Update { path: String, value: String },
    /// Replace an existing property with a value of the same type
    Set { path: String, value: String },
    /// Append to an existing array, object or string
    Append {
        /// Push the value as one array element, never flattened
        #[arg(long)]
        preserve: bool,
        path: String,
        value: String,
    },
    /// Remove one or more properties
    #[command(alias = "remove")]
    Delete {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print a property
    Get { path: String },
}

/// Interpret a command-line value: JSON if it parses, a plain string
/// otherwise.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Resolve the effective options: config file first, then flags.
pub async fn resolve_options(cli: &Cli) -> Result<UpdaterOptions> {
    let mut options = match &cli.config {
        Some(path) => UpdaterOptions::load(path).await?,
        None => UpdaterOptions::default(),
    };
    if cli.strict {
        options.strictness = Strictness::Strict;
    } else if cli.permissive {
        options.strictness = Strictness::Permissive;
    }
    if let Some(indent) = cli.indent {
        options.indent = indent;
    }
    options.sort_appended_keys |= cli.sort_appended_keys;
    options.trailing_newline |= cli.trailing_newline;
    Ok(options)
}

/// Run `command` against `updater`.
///
/// Returns the text to print on stdout, if any.
pub async fn run_command<S: DocumentStore>(
    updater: &Updater<S>,
    command: Command,
) -> Result<Option<String>> {
    match command {
        Command::Add { path, value } => updater.add(&path, parse_value(&value)).await?,
        Command::Update { path, value } => updater.update(&path, parse_value(&value)).await?,
        Command::Set { path, value } => updater.set(&path, parse_value(&value)).await?,
        Command::Append {
            preserve,
            path,
            value,
        } => updater.append(&path, parse_value(&value), preserve).await?,
        Command::Delete { paths } => updater.delete(paths).await?,
        Command::Get { path } => {
            let value = updater
                .get(&path)
                .await?
                .ok_or(Error::PropertyNotFound { path })?;
            // the caller terminates the line itself
            let options = updater.options().clone().with_trailing_newline(false);
            return Ok(Some(serialize_document(&value, &options)?));
        }
    }
    Ok(None)
}

/// Run a parsed command line against the filesystem.
pub async fn run(cli: Cli) -> Result<Option<String>> {
    let options = resolve_options(&cli).await?;
    let updater = crate::open(cli.file).with_options(options);
    run_command(&updater, cli.command).await
}
