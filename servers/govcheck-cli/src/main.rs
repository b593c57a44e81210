use anyhow::{bail, Result};
use clap::Parser;
use metamap::{Client, Environment, GovCheckResponse};
use serde::Serialize;
use tracing::info;

mod args;

use args::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let environment = Environment::from_env()?;
    environment.init_tracing();

    let client = Client::from_env()?;

    match cli.command {
        Command::Token => {
            let token = client.authenticate().await?;
            let summary = serde_json::json!({ "expiresIn": token.expires_in });
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Command::Dni(args) => {
            ensure_token(&client).await?;
            report(&client.argentina_dni(&args.dni_request()?).await?)
        }
        Command::Renaper(args) => {
            ensure_token(&client).await?;
            report(&client.argentina_renaper(&args.renaper_request()?).await?)
        }
        Command::RenaperPremium(args) => {
            ensure_token(&client).await?;
            report(&client.argentina_renaper_premium(&args.request()?).await?)
        }
    }
}

async fn ensure_token(client: &Client) -> Result<()> {
    if !client.has_access_token().await {
        info!("No access token configured, exchanging client credentials");
        client.authenticate().await?;
    }
    Ok(())
}

/// Prints the response and fails when it carries a business error
fn report<D: Serialize>(response: &GovCheckResponse<D>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);

    if let Some(error) = response.business_error() {
        bail!("Check rejected by MetaMap: {error}");
    }

    Ok(())
}
