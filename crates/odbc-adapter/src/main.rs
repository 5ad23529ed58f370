//! odbc-adapter CLI
//!
//! Inspect how the adapter resolves vendors, parses type strings and
//! casts values.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use odbc_adapter::{
    AdapterConfig, Column, ConnectionAdapter, Dialect, DialectRegistry, FieldDescription,
};

/// Inspect ODBC dialect resolution and column type handling.
#[derive(Parser)]
#[command(name = "odbc-adapter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with extra dialect registrations.
    #[arg(short, long, env = "ODBC_ADAPTER_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which dialect a database product name resolves to.
    Resolve {
        /// Product name as reported by the driver, e.g. "PostgreSQL 14.2".
        product: String,
    },

    /// Describe the column built for a native type string.
    Describe {
        /// Database product name.
        #[arg(short, long, env = "ODBC_ADAPTER_DBMS")]
        dbms: String,

        /// Native type string, e.g. "numeric(10,2)".
        sql_type: String,

        /// Raw default as reported by the driver.
        #[arg(long)]
        default: Option<String>,

        /// Mark the column NOT NULL.
        #[arg(long)]
        not_null: bool,
    },

    /// Cast a raw value with the column built for a native type string.
    Cast {
        /// Database product name.
        #[arg(short, long, env = "ODBC_ADAPTER_DBMS")]
        dbms: String,

        /// Native type string.
        sql_type: String,

        /// Raw value; omit for NULL.
        value: Option<String>,
    },
}

#[derive(Serialize)]
struct ColumnSummary<'a> {
    name: &'a str,
    sql_type: &'a str,
    abstract_type: Option<&'static str>,
    limit: Option<u32>,
    precision: Option<u32>,
    scale: Option<u32>,
    nullable: bool,
    default: Option<String>,
    raw_default: Option<&'a str>,
}

impl<'a> From<&'a Column> for ColumnSummary<'a> {
    fn from(column: &'a Column) -> Self {
        Self {
            name: column.name(),
            sql_type: column.sql_type(),
            abstract_type: column.abstract_type().map(|t| t.as_str()),
            limit: column.limit(),
            precision: column.precision(),
            scale: column.scale(),
            nullable: column.nullable(),
            default: column.default().map(ToString::to_string),
            raw_default: column.raw_default(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let registry = match &cli.config {
        Some(path) => AdapterConfig::load(path)?.registry()?,
        None => DialectRegistry::with_builtins(),
    };
    debug!(patterns = ?registry.patterns().collect::<Vec<_>>(), "Dialect registry ready");

    match cli.command {
        Commands::Resolve { product } => {
            let adapter = ConnectionAdapter::establish(&registry, &product)?;
            println!("{}", adapter.dialect().name());
        }

        Commands::Describe {
            dbms,
            sql_type,
            default,
            not_null,
        } => {
            let adapter = ConnectionAdapter::establish(&registry, &dbms)?;
            let mut field = FieldDescription::new("column", sql_type).nullable(!not_null);
            if let Some(default) = default {
                field = field.default_value(default);
            }
            let column = adapter.column(&field);
            println!(
                "{}",
                serde_json::to_string_pretty(&ColumnSummary::from(&column))?
            );
        }

        Commands::Cast {
            dbms,
            sql_type,
            value,
        } => {
            let adapter = ConnectionAdapter::establish(&registry, &dbms)?;
            let column = adapter.column(&FieldDescription::new("value", sql_type));
            match column.cast(value.as_deref())? {
                Some(value) => println!("{value}"),
                None => println!("NULL"),
            }
        }
    }

    Ok(())
}
