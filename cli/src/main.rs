//! ogmios-inspect: decode captured node replies and print request envelopes.

use anyhow::Context;
use clap::Parser;
use ogmios_client::{init_logging, signed_cbor_hex, ClientOptions, LogFormat};
use ogmios_protocol::{codec, Schema};
use ogmios_types::Point;
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ogmios-inspect", about = "Decode captured ogmios replies in either schema")]
struct Cli {
    /// Schema of the payload: "legacy" (v5) or "current" (v6).
    /// Detected from the envelope when omitted, then taken from the config file.
    #[arg(long, env = "OGMIOS_SCHEMA")]
    schema: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "OGMIOS_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "OGMIOS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file.
    #[arg(long, env = "OGMIOS_CONFIG")]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Decode a chain-sync reply into the legacy response shape.
    #[command(name = "chain-sync")]
    ChainSync { file: PathBuf },

    /// Decode a transaction submission reply.
    #[command(name = "submit-result")]
    SubmitResult { file: PathBuf },

    /// Decode a UTxO query reply.
    #[command(name = "utxo")]
    Utxo { file: PathBuf },

    /// Print the request envelope an operation would send.
    #[command(name = "request")]
    Request {
        #[command(subcommand)]
        op: RequestOp,

        /// Request id (current schema) or mirror (legacy schema).
        #[arg(long)]
        id: Option<String>,
    },

    /// Print the resolved client options as TOML.
    #[command(name = "config")]
    Config,
}

#[derive(clap::Subcommand)]
enum RequestOp {
    /// Find an intersection; points are "origin" or "SLOT/HASH".
    #[command(name = "find-intersection")]
    FindIntersection { points: Vec<String> },

    /// Request the next chain-sync event.
    #[command(name = "next-block")]
    NextBlock,

    /// Submit the signed transaction in FILE (hex or text envelope).
    #[command(name = "submit")]
    Submit { file: PathBuf },

    /// Query unspent outputs at the given addresses.
    #[command(name = "utxo")]
    Utxo { addresses: Vec<String> },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = match &cli.config {
        Some(path) => ClientOptions::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ClientOptions::default(),
    };
    let log_format = cli.log_format.unwrap_or(options.log_format);
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| options.log_level.clone());
    let options = options.with_logging(log_format, log_level);
    init_logging(options.log_format, &options.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let explicit = cli
        .schema
        .as_deref()
        .map(str::parse::<Schema>)
        .transpose()
        .context("invalid --schema")?;

    match &cli.command {
        Command::ChainSync { file } => {
            let raw = read(file)?;
            let schema = resolve_schema(explicit, &raw, &options);
            let response = ogmios_chainsync::decode_response(schema, &raw)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::SubmitResult { file } => {
            let raw = read(file)?;
            let schema = resolve_schema(explicit, &raw, &options);
            let outcome = ogmios_txsubmit::decode_submission(schema, &raw)?;
            let messages: Vec<serde_json::Value> = outcome
                .messages()
                .iter()
                .map(|m| serde_json::from_str(m.get()))
                .collect::<Result<_, _>>()?;
            let report = json!({
                "schema": schema,
                "accepted": outcome.is_accepted(),
                "transactionId": outcome.transaction_id(),
                "errorCodes": outcome.error_codes().ok(),
                "messages": messages,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Utxo { file } => {
            let raw = read(file)?;
            let schema = resolve_schema(explicit, &raw, &options);
            let utxos = ogmios_statequery::decode_utxos(schema, &raw)?;
            println!("{}", serde_json::to_string_pretty(&utxos)?);
        }
        Command::Request { op, id } => {
            let schema = explicit.unwrap_or(options.schema);
            let request = match op {
                RequestOp::FindIntersection { points } => {
                    let points = points
                        .iter()
                        .map(|p| parse_point(p))
                        .collect::<anyhow::Result<Vec<_>>>()?;
                    ogmios_chainsync::request::find_intersection(schema, &points)
                }
                RequestOp::NextBlock => ogmios_chainsync::request::next_block(schema),
                RequestOp::Submit { file } => {
                    let cbor_hex = signed_cbor_hex(&read(file)?)?;
                    ogmios_txsubmit::submit_tx(schema, &cbor_hex)
                }
                RequestOp::Utxo { addresses } => ogmios_statequery::utxo(schema, addresses),
            };
            let envelope = request.into_envelope(schema, id.clone().map(serde_json::Value::String));
            let bytes = codec::encode(&envelope)?;
            println!("{}", String::from_utf8_lossy(&bytes));
        }
        Command::Config => {
            let options = match explicit {
                Some(schema) => options.with_schema(schema),
                None => options,
            };
            print!("{}", options.to_toml_string()?);
        }
    }
    Ok(())
}

fn read(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("reading {}", path.display()))
}

/// "origin" or "SLOT/HASH".
fn parse_point(s: &str) -> anyhow::Result<Point> {
    if s == ogmios_types::ORIGIN {
        return Ok(Point::Origin);
    }
    let (slot, hash) = s
        .split_once('/')
        .with_context(|| format!("point {s:?} is neither \"origin\" nor SLOT/HASH"))?;
    let slot = slot
        .parse::<u64>()
        .with_context(|| format!("invalid slot in point {s:?}"))?;
    Ok(Point::specific(slot, hash))
}

/// `--schema` wins, then whatever the envelope says, then the config.
fn resolve_schema(explicit: Option<Schema>, raw: &[u8], options: &ClientOptions) -> Schema {
    if let Some(schema) = explicit {
        return schema;
    }
    match codec::decode_value(raw).ok().as_ref().and_then(Schema::detect) {
        Some(schema) => {
            tracing::debug!(%schema, "detected schema from envelope");
            schema
        }
        None => options.schema,
    }
}
