/*
[INPUT]:  CLI arguments, YAML configuration file, environment credentials
[OUTPUT]: Pretty-printed JSON response on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kryptono_cli::{CliConfig, Command};

#[derive(Parser, Debug)]
#[command(name = "kryptono-cli", version, about = "Kryptono exchange REST client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(&args.config_path)?;
    let client = config.build_client()?;
    info!(
        config_path = %args.config_path.display(),
        authenticated = client.credentials().is_some(),
        "client ready"
    );

    if args.command.is_private() && client.credentials().is_none() {
        bail!("this command needs credentials (config file or KRYPTONO_API_KEY/KRYPTONO_API_SECRET)");
    }

    let output = args.command.run(&client, config.window()).await?;
    let rendered = serde_json::to_string_pretty(&output).context("render output")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<CliConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}
