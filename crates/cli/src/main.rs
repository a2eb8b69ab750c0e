//! Dashboard CLI - Command-line client for the Dashboard API REST binding

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Deserialize;
use serde_json::{json, Value};
use tabled::{Table, Tabled};

const DEFAULT_URL: &str = "http://127.0.0.1:3001";

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Dashboard API CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// REST server URL
    #[arg(long, env = "DASHBOARD_URL", default_value = DEFAULT_URL)]
    url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Say hello (only "yoo" is accepted)
    Hello {
        /// Name to greet
        name: String,
    },

    /// Say goodbye
    Bye,

    /// Check service health
    Health,

    /// List the operations the service exposes
    Describe,
}

/// Failure body returned by the REST binding
#[derive(Deserialize)]
struct FailureBody {
    kind: String,
    status: u16,
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

#[derive(Deserialize)]
struct ContractDoc {
    title: String,
    version: String,
    operations: Vec<OperationDoc>,
}

#[derive(Deserialize)]
struct OperationDoc {
    name: String,
    method: String,
    path: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorDoc>,
}

#[derive(Deserialize)]
struct ErrorDoc {
    kind: String,
    status: u16,
}

#[derive(Tabled)]
struct OperationRow {
    name: String,
    method: String,
    path: String,
    summary: String,
    errors: String,
}

impl From<OperationDoc> for OperationRow {
    fn from(op: OperationDoc) -> Self {
        let errors = op
            .errors
            .iter()
            .map(|e| format!("{} ({})", e.kind, e.status))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            name: op.name,
            method: op.method,
            path: op.path,
            summary: op.summary.unwrap_or_default(),
            errors: if errors.is_empty() { "-".to_string() } else { errors },
        }
    }
}

async fn call(base: &str, method: reqwest::Method, path: &str, body: Option<Value>) -> Result<Value> {
    let url = format!("{}{}", base.trim_end_matches('/'), path);

    let client = reqwest::Client::new();
    let mut request = client.request(method, &url);
    if let Some(body) = body {
        request = request.json(&body);
    }

    let response = request
        .send()
        .await
        .context("Failed to connect to backend")?;
    let ok = response.status().is_success();
    let value: Value = response.json().await.context("Failed to parse response")?;

    if !ok {
        let failure: FailureBody =
            serde_json::from_value(value).context("Unexpected error response")?;
        let mut detail = format!("{} ({}): {}", failure.kind, failure.status, failure.message);
        if let Some(data) = failure.data {
            detail.push_str(&format!(" {}", data));
        }
        anyhow::bail!(detail);
    }

    Ok(value)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hello { name } => {
            let body = json!({ "name": name });
            let result = call(&cli.url, reqwest::Method::POST, "/hello", Some(body)).await?;

            println!("{}", result["message"].as_str().unwrap_or("").green().bold());
        }

        Commands::Bye => {
            let result = call(&cli.url, reqwest::Method::POST, "/bye", None).await?;

            println!("{}", result["message"].as_str().unwrap_or("").green().bold());
            if let Some(user) = result.get("user") {
                println!("  {} {} <{}>", "User:".bold(), user["name"], user["email"]);
            }
            if let Some(secs) = result["sessionDuration"].as_u64() {
                println!("  {} {}m {}s", "Session:".bold(), secs / 60, secs % 60);
            }
            println!("  {} {}", "At:".bold(), result["timestamp"]);
        }

        Commands::Health => {
            println!("{}", "Service Health".cyan().bold());
            println!();

            match call(&cli.url, reqwest::Method::GET, "/health", None).await {
                Ok(result) => {
                    println!("  {} {}", "URL:".bold(), cli.url);
                    println!("  {} {}", "Status:".bold(), result["status"].to_string().green());
                    println!("  {} {}", "Checked:".bold(), result["timestamp"]);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }

        Commands::Describe => {
            let result = call(&cli.url, reqwest::Method::GET, "/contract", None).await?;
            let doc: ContractDoc =
                serde_json::from_value(result).context("Invalid contract document")?;

            println!("{}", format!("{} v{}", doc.title, doc.version).cyan().bold());
            println!();

            let rows: Vec<OperationRow> = doc.operations.into_iter().map(Into::into).collect();
            println!("{}", Table::new(rows));
        }
    }

    Ok(())
}
