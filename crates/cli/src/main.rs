//! RMS CLI - Command-line interface for the RMS daemon

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rms_core::domain::{EntityDescriptor, AUTHOR, IP_ASSET, PUBLICATION, USER};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tabled::builder::Builder;
use tabled::settings::Style;

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:50051";

#[derive(Parser)]
#[command(name = "rms")]
#[command(about = "RMS record service CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "RMS_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ResourceArg {
    Authors,
    IpAssets,
    Publications,
    Users,
}

impl ResourceArg {
    fn descriptor(self) -> &'static EntityDescriptor {
        match self {
            ResourceArg::Authors => &AUTHOR,
            ResourceArg::IpAssets => &IP_ASSET,
            ResourceArg::Publications => &PUBLICATION,
            ResourceArg::Users => &USER,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every record of a resource
    List {
        #[arg(value_enum)]
        resource: ResourceArg,
    },

    /// Show one record
    Get {
        #[arg(value_enum)]
        resource: ResourceArg,

        /// Primary key
        id: String,
    },

    /// Delete one record
    Delete {
        #[arg(value_enum)]
        resource: ResourceArg,

        /// Primary key
        id: String,
    },

    /// Show system status
    Status,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

async fn call_rpc(url: &str, method: &str, params: Value) -> Result<Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

fn key_params(entity: &EntityDescriptor, id: &str) -> Value {
    json!([{ entity.key_column: id }])
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// One row per record, columns in descriptor order
fn render_table(entity: &EntityDescriptor, records: &[Value]) -> String {
    let mut builder = Builder::default();
    builder.push_record(entity.columns());
    for record in records {
        builder.push_record(entity.columns().map(|column| cell(&record[column])));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Field/value pairs for a single record
fn render_record(entity: &EntityDescriptor, record: &Value) -> String {
    let mut builder = Builder::default();
    builder.push_record(["field", "value"]);
    for column in entity.columns() {
        builder.push_record([column.to_string(), cell(&record[column])]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { resource } => {
            let entity = resource.descriptor();
            let result = call_rpc(&cli.rpc_url, entity.methods.list, json!([])).await?;
            let records: Vec<Value> = serde_json::from_value(result)?;

            if records.is_empty() {
                println!("{}", format!("No {} found", entity.wire.plural).yellow());
            } else {
                println!("{}", render_table(entity, &records));
                println!("{}", format!("{} record(s)", records.len()).dimmed());
            }
        }

        Commands::Get { resource, id } => {
            let entity = resource.descriptor();
            let record =
                call_rpc(&cli.rpc_url, entity.methods.get, key_params(entity, &id)).await?;

            println!("{}", format!("{} {}", entity.name, id).cyan().bold());
            println!("{}", render_record(entity, &record));
        }

        Commands::Delete { resource, id } => {
            let entity = resource.descriptor();
            let result =
                call_rpc(&cli.rpc_url, entity.methods.delete, key_params(entity, &id)).await?;

            if result["success"].as_bool().unwrap_or(false) {
                println!(
                    "{}",
                    format!("✓ {} {} deleted", entity.name, id).green().bold()
                );
            } else {
                anyhow::bail!("{} {} could not be deleted", entity.name, id);
            }
        }

        Commands::Status => {
            println!("{}", "System Status".cyan().bold());
            println!();

            match call_rpc(&cli.rpc_url, "admin.stats.v1", json!([])).await {
                Ok(stats) => {
                    println!("  {} {}", "RPC URL:".bold(), cli.rpc_url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!("  {} {}", "Version:".bold(), cell(&stats["version"]));
                    println!("  {} {} seconds", "Uptime:".bold(), stats["uptime_seconds"]);
                    println!();

                    let mut builder = Builder::default();
                    builder.push_record(["entity", "table", "rows"]);
                    for entry in stats["entities"].as_array().into_iter().flatten() {
                        builder.push_record([
                            cell(&entry["entity"]),
                            cell(&entry["table"]),
                            cell(&entry["rows"]),
                        ]);
                    }
                    let mut table = builder.build();
                    table.with(Style::rounded());
                    println!("{}", table);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}
