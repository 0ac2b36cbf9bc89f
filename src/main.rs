use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

use pref_kv::{BackendError, FjallBackend, Kind, StoreError, TypedStore, Value};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Invalid {kind} value: '{input}'")]
    InvalidValue { kind: Kind, input: String },
}

/// Value kind selector for CLI arguments.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum KindArg {
    /// UTF-8 string.
    #[default]
    String,
    /// Set of strings, comma-separated on the command line.
    StringSet,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 32-bit float.
    F32,
    /// Boolean, `true` or `false`.
    Bool,
}

impl From<KindArg> for Kind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::String => Kind::String,
            KindArg::StringSet => Kind::StringSet,
            KindArg::I32 => Kind::I32,
            KindArg::I64 => Kind::I64,
            KindArg::F32 => Kind::F32,
            KindArg::Bool => Kind::Bool,
        }
    }
}

// clap renders `default_value_t` through Display; keep it aligned with the
// kebab-case names ValueEnum derives for parsing.
impl std::fmt::Display for KindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Kind::from(*self))
    }
}

#[derive(Parser)]
#[command(name = "pref-kv")]
#[command(about = "Typed key-value settings store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a value under a key
    Set {
        /// Key for the value
        key: String,

        /// Value literal, parsed according to --kind
        value: String,

        /// Kind of the value
        #[arg(long, value_enum, default_value_t = KindArg::String)]
        kind: KindArg,

        /// Store path
        #[arg(long, default_value = ".pref-kv", env = "PREF_KV_PATH")]
        path: PathBuf,
    },

    /// Print the value stored under a key
    Get {
        /// Key for the value
        key: String,

        /// Kind of the value
        #[arg(long, value_enum, default_value_t = KindArg::String)]
        kind: KindArg,

        /// Store path
        #[arg(long, default_value = ".pref-kv", env = "PREF_KV_PATH")]
        path: PathBuf,
    },
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Set {
            key,
            value,
            kind,
            path,
        } => {
            let parsed = parse_value(kind, &value)?;
            let mut store = TypedStore::new(FjallBackend::open(&path)?);
            store.set(&key, parsed)?;
            println!("Set '{}'", key);
            Ok(())
        }
        Commands::Get { key, kind, path } => {
            let store = TypedStore::new(FjallBackend::open(&path)?);
            match read_value(&store, &key, kind)? {
                Some(value) => {
                    println!("{}", value);
                    Ok(())
                }
                None => {
                    eprintln!("Key '{}' not set", key);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn parse_value(kind: KindArg, input: &str) -> Result<Value, AppError> {
    let invalid = || AppError::InvalidValue {
        kind: kind.into(),
        input: input.to_string(),
    };
    match kind {
        KindArg::String => Ok(Value::String(input.to_string())),
        KindArg::StringSet => Ok(Value::StringSet(
            input
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )),
        KindArg::I32 => input.parse().map(Value::I32).map_err(|_| invalid()),
        KindArg::I64 => input.parse().map(Value::I64).map_err(|_| invalid()),
        KindArg::F32 => input.parse().map(Value::F32).map_err(|_| invalid()),
        KindArg::Bool => match input {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(invalid()),
        },
    }
}

fn read_value(
    store: &TypedStore<FjallBackend>,
    key: &str,
    kind: KindArg,
) -> Result<Option<Value>, AppError> {
    let value = match kind {
        KindArg::String => store.get_opt::<String>(key, None)?.map(Value::String),
        KindArg::StringSet => store
            .get_opt::<BTreeSet<String>>(key, None)?
            .map(Value::StringSet),
        KindArg::I32 => store.get_opt::<i32>(key, None)?.map(Value::I32),
        KindArg::I64 => store.get_opt::<i64>(key, None)?.map(Value::I64),
        KindArg::F32 => store.get_opt::<f32>(key, None)?.map(Value::F32),
        KindArg::Bool => store.get_opt::<bool>(key, None)?.map(Value::Bool),
    };
    Ok(value)
}
