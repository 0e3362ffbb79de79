//! PersistKit CLI - inspect and edit an embedded record store

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use persistkit::config::{self, PersistConfig};
use persistkit::{ui, Database, DataDirProvider, Record, RecordList, StartupError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "persistkit")]
#[command(version)]
#[command(about = "Embedded key-record store backed by SQLite")]
#[command(long_about = r#"
PersistKit keeps typed records (identifier, kind, flags, content) in a single
SQLite file.

Example usage:
  persistkit init
  persistkit save --id a --kind note --flags 1 --hex 0102
  persistkit get --id a
  persistkit list --json
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit machine-readable JSON instead of human output
    #[arg(long, global = true)]
    json: bool,

    /// Path to the database file (overrides config)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the store and write a config file pointing at it
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Insert or replace a record
    Save {
        /// Record identifier
        #[arg(short, long)]
        id: String,

        /// Record kind
        #[arg(short, long)]
        kind: String,

        /// Flag bits (decimal, 0x.. or 0b..)
        #[arg(short, long, default_value = "0", value_parser = parse_flags)]
        flags: u32,

        #[command(flatten)]
        content: ContentArgs,
    },

    /// Show one record
    Get {
        /// Record identifier
        #[arg(short, long)]
        id: String,
    },

    /// Show all records
    List,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Init { .. } => "init",
            Commands::Save { .. } => "save",
            Commands::Get { .. } => "get",
            Commands::List => "list",
        }
    }
}

#[derive(Args)]
#[group(required = false, multiple = false)]
struct ContentArgs {
    /// Content as UTF-8 text
    #[arg(long)]
    text: Option<String>,

    /// Content as hex bytes
    #[arg(long)]
    hex: Option<String>,

    /// Read content from a file
    #[arg(long)]
    file: Option<PathBuf>,
}

impl ContentArgs {
    fn into_bytes(self) -> anyhow::Result<Vec<u8>> {
        if let Some(text) = self.text {
            return Ok(text.into_bytes());
        }
        if let Some(encoded) = self.hex {
            return hex::decode(encoded.trim()).context("content is not valid hex");
        }
        if let Some(path) = self.file {
            return std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()));
        }
        Ok(Vec::new())
    }
}

fn parse_flags(value: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = value.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else if let Some(bin) = value.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else {
        value.parse()
    };
    parsed.map_err(|e| format!("invalid flags '{}': {}", value, e))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    fn is_human(self) -> bool {
        self == OutputMode::Human
    }
}

fn emit_success(output_mode: OutputMode, command: &str, data: serde_json::Value) -> anyhow::Result<()> {
    if output_mode == OutputMode::Json {
        let envelope = serde_json::json!({ "ok": true, "command": command, "data": data });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    }
    Ok(())
}

fn emit_failure(output_mode: OutputMode, command: &str, err: &anyhow::Error) {
    match output_mode {
        OutputMode::Human => ui::error(&format!("{:#}", err)),
        OutputMode::Json => {
            let envelope = serde_json::json!({ "ok": false, "command": command, "error": format!("{:#}", err) });
            println!("{}", envelope);
        }
    }
}

fn record_json(record: &Record) -> serde_json::Value {
    serde_json::json!({
        "identifier": record.identifier,
        "kind": record.kind,
        "flags": record.flags,
        "content_hex": hex::encode(&record.content),
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = if cli.json { OutputMode::Json } else { OutputMode::Human };
    let command = cli.command.name();

    match run(cli, output_mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            emit_failure(output_mode, command, &e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, output_mode: OutputMode) -> anyhow::Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let loaded = config::load_config(&config_path)?;
    let database = config::resolve_database_path(cli.database.clone(), loaded.as_ref());

    match cli.command {
        Commands::Init { force } => {
            let db = open_store(database.as_deref())?;
            let db_path = db.path().map(Path::to_path_buf).unwrap_or_default();
            // Absolute so the config resolves the same store from any directory
            let db_path = std::fs::canonicalize(&db_path).unwrap_or(db_path);

            let config = PersistConfig { database: Some(db_path.clone()) };
            config::write_config(&config_path, &config, force)?;

            if output_mode.is_human() {
                ui::header("Store initialized");
                ui::info("Database", &db_path.display().to_string());
                ui::info("Config", &config_path.display().to_string());
                ui::info("Records", &db.load_all()?.len().to_string());
            }
            emit_success(output_mode, "init", serde_json::json!({
                "database": db_path,
                "config": config_path,
            }))?;
        }

        Commands::Save { id, kind, flags, content } => {
            let db = open_store(database.as_deref())?;
            let record = Record::new(id, kind, flags, content.into_bytes()?);

            let mut list = RecordList::load(&db)?;
            list.add(&record)
                .with_context(|| format!("failed to save record '{}'", record.identifier))?;

            if output_mode.is_human() {
                ui::success(&format!("Saved '{}' ({} bytes)", record.identifier, record.content.len()));
                ui::info("Records in store", &list.len().to_string());
            }
            emit_success(output_mode, "save", serde_json::json!({
                "record": record_json(&record),
                "total": list.len(),
            }))?;
        }

        Commands::Get { id } => {
            let db = open_store(database.as_deref())?;
            let record = db.load_by_identifier(&id)?;

            if output_mode.is_human() {
                match &record {
                    Some(record) => ui::record_detail(record),
                    None => ui::warn(&format!("{} No record with identifier '{}'", ui::Icons::EMPTY, id)),
                }
            }
            emit_success(output_mode, "get", record.as_ref().map(record_json).unwrap_or_default())?;
        }

        Commands::List => {
            let db = open_store(database.as_deref())?;
            let list = RecordList::load(&db)?;

            if output_mode.is_human() {
                if list.is_empty() {
                    ui::warn(&format!("{} Store is empty", ui::Icons::EMPTY));
                } else {
                    println!("{}", ui::records_table(list.records()));
                    println!("{}", ui::dim(&format!("{} record(s)", list.len())));
                }
            }
            let records: Vec<serde_json::Value> = list.records().iter().map(record_json).collect();
            emit_success(output_mode, "list", serde_json::Value::Array(records))?;
        }
    }

    Ok(())
}

/// Open the store at `path`, or at the platform data directory when unset.
/// Failure here means the session has no store, so it is reported as fatal.
fn open_store(path: Option<&Path>) -> anyhow::Result<Database> {
    let result: Result<Database, StartupError> = match path {
        Some(path) => persistkit::open_at(path),
        None => persistkit::bootstrap(&DataDirProvider),
    };
    result.context("failed to initialize the database")
}
