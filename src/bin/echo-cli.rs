use clap::{Parser, Subcommand};
use serde_json::Value;

use echo_server::observability::metrics::REQUESTS_TOTAL;

#[derive(Parser)]
#[command(name = "echo-cli")]
#[command(about = "Client CLI for a running echo-server", long_about = None)]
struct Cli {
    /// Echo endpoint URL.
    #[arg(short, long, default_value = "http://localhost:8080/")]
    url: String,

    /// Prometheus scrape URL of the server.
    #[arg(short, long, default_value = "http://localhost:9090/metrics")]
    metrics_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// POST a payload (sent verbatim) and print the reply
    Send {
        /// Request body, e.g. '{"a":1}'
        body: String,
    },
    /// Show the response counters by status code
    Metrics,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Send { body } => {
            let res = client
                .post(&cli.url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Metrics => {
            let res = client.get(&cli.metrics_url).send().await?;
            if !res.status().is_success() {
                eprintln!("Error: metrics endpoint returned status {}", res.status());
                return Ok(());
            }
            let text = res.text().await?;
            for line in text.lines().filter(|l| l.starts_with(REQUESTS_TOTAL)) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let request_id = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    println!("{} (request id {})", status, request_id);

    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
