//! Prints one's Cloud Foundry organizations and applications.
//!
//! Demonstrates wiring an authenticated transport into the client. Token
//! acquisition is out of scope: pass a bearer token obtained elsewhere
//! (e.g. `cf oauth-token`).
//!
//! Run with:
//! ```
//! CF_TOKEN="$(cf oauth-token | cut -d' ' -f2)" cargo run --example cfapps -- --api https://api.bosh-lite.com
//! ```

use std::time::Duration;

use ccv2::{Client, Context, Resource};
use clap::Parser;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tabled::{Table, Tabled};

#[derive(Parser, Debug)]
#[command(name = "cfapps", about = "List Cloud Foundry organizations and applications")]
struct Args {
    /// URL of the Cloud Controller.
    #[arg(long, env = "CCV2_API_URL", default_value = "https://api.bosh-lite.com")]
    api: String,

    /// Bearer token used for every request.
    #[arg(long, env = "CF_TOKEN")]
    token: String,

    /// Per-call timeout in seconds.
    #[arg(long, default_value = "5")]
    timeout: u64,
}

#[derive(Tabled)]
struct AppRow {
    name: String,
    state: String,
    instances: i64,
    memory: String,
    guid: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let timeout = Duration::from_secs(args.timeout);

    let info = Client::new(&args.api)?
        .info(&Context::background().with_timeout(timeout))
        .await?;
    println!("Connected to {} (API {})", args.api, info.api_version);

    let mut headers = HeaderMap::new();
    let token = args.token.trim_start_matches("bearer ").trim_start_matches("Bearer ");
    headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("bearer {token}"))?);
    let transport = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;
    let client = Client::with_transport(&args.api, transport)?;

    let orgs = client
        .organizations(&Context::background().with_timeout(timeout), &[])
        .await?;
    println!("===== Organizations =====");
    for org in &orgs {
        println!("{}", org.name());
    }

    let apps = client
        .applications(&Context::background().with_timeout(timeout), &[])
        .await?;
    println!("===== Applications =====");
    let rows: Vec<AppRow> = apps
        .iter()
        .map(|app| AppRow {
            name: app.name().to_string(),
            state: app.entity.state.clone(),
            instances: app.entity.instances,
            memory: format!("{}M", app.entity.memory),
            guid: app.guid().to_string(),
        })
        .collect();
    println!("{}", Table::new(rows));

    Ok(())
}
