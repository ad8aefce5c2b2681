use clap::{Parser, Subcommand};
use serde_json::Value;
use url::Url;

#[derive(Parser)]
#[command(name = "lattice-ctl")]
#[command(about = "Query a running lattice-app instance", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: Url,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show app name, message and index
    Hello,
    /// Dump the instance environment
    Env,
    /// Print the instance index
    Index,
    /// Check instance health
    Health,
}

impl Commands {
    fn path(&self) -> &'static str {
        match self {
            Commands::Hello => "/",
            Commands::Env => "/env",
            Commands::Index => "/index",
            Commands::Health => "/health",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let target = cli.url.join(cli.command.path())?;
    let res = client.get(target).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: lattice-app returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) if json.is_object() || json.is_array() => {
            println!("{}", serde_json::to_string_pretty(&json)?)
        }
        _ => println!("{}", text),
    }
    Ok(())
}
