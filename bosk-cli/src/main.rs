//! Bosk command-line driver
//!
//! Runs the node lifecycle against a live bosk state tree from a shell,
//! using the same configuration, validation and diagnostics as the provider.
//!
//! Usage:
//!   bosk --base-url http://localhost:1740/ get /bosk/path/to/node
//!   bosk put /bosk/path/to/node '{"id":"node"}'
//!   echo '[1, 2]' | bosk hcl
//!
//! Credentials come from `TF_BOSK_USERNAME_<suffix>` and
//! `TF_BOSK_PASSWORD_<suffix>` unless the suffix is `NO_AUTH`.

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bosk_client::{to_hcl, NO_AUTH_SUFFIX};
use bosk_provider::{BoskProvider, ProviderData, ProviderModel};
use bosk_types::{Diagnostics, NodeRecord};
use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "bosk")]
#[command(about = "Manage nodes of a bosk state tree")]
#[command(version)]
struct Args {
    /// Base URL of the bosk service, ending in "/"
    #[arg(long, env = "BOSK_BASE_URL", default_value = "http://localhost:1740/")]
    base_url: String,

    /// Suffix of the TF_BOSK_USERNAME_/TF_BOSK_PASSWORD_ variables
    #[arg(long, env = "BOSK_AUTH_SUFFIX", default_value = NO_AUTH_SUFFIX)]
    auth_suffix: String,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    #[command(flatten)]
    Node(NodeCommand),
    /// Convert JSON on stdin into an HCL jsonencode expression
    Hcl,
}

/// Commands that talk to the tree.
#[derive(Subcommand, Debug, PartialEq, Eq)]
enum NodeCommand {
    /// Print the canonical JSON held at a node
    Get { path: String },
    /// Create or replace the value of a node
    Put { path: String, value_json: String },
    /// Delete a node
    Delete { path: String },
    /// Print the record an import of the node would produce
    Import { path: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut diags = Diagnostics::new();
    let output = match &args.command {
        Command::Hcl => Some(hcl_from_stdin()?),
        Command::Node(command) => match configure(&args, &mut diags) {
            Some(data) => run(&data, command, &mut diags).await?,
            None => None,
        },
    };

    for diag in &diags {
        eprintln!("{diag}");
    }
    if let Some(output) = output {
        println!("{output}");
    }

    Ok(if diags.has_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn configure(args: &Args, diags: &mut Diagnostics) -> Option<ProviderData> {
    let provider = BoskProvider::new(env!("CARGO_PKG_VERSION"));
    let model = ProviderModel::new(&args.base_url, &args.auth_suffix);
    debug!(base_url = %model.base_url, suffix = %model.basic_auth_var_suffix, "configuring");
    provider.configure(&model, diags)
}

/// Runs one node command, returning what should be printed on success.
async fn run(
    data: &ProviderData,
    command: &NodeCommand,
    diags: &mut Diagnostics,
) -> Result<Option<String>> {
    let output = match command {
        NodeCommand::Get { path } => data.node_data_source().read_path(path, diags).await,
        NodeCommand::Put { path, value_json } => {
            let plan = NodeRecord::new(path.as_str(), value_json.as_str());
            data.node_resource().create(&plan, diags).await;
            None
        }
        NodeCommand::Delete { path } => {
            // Delete only needs the address.
            let state = NodeRecord::new(path.as_str(), "");
            data.node_resource().delete(&state, diags).await;
            None
        }
        NodeCommand::Import { path } => match data.node_resource().import_state(path, diags).await {
            Some(record) => Some(record.to_json().context("failed to encode imported record")?),
            None => None,
        },
    };
    Ok(output)
}

fn hcl_from_stdin() -> Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read JSON from stdin")?;
    hcl_from_str(&input)
}

fn hcl_from_str(input: &str) -> Result<String> {
    let value: serde_json::Value =
        serde_json::from_str(input).context("stdin does not hold a JSON value")?;
    Ok(to_hcl(&value))
}
