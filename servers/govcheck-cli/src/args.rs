use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use metamap::argentina::{
    ArgentinaDniRequest, ArgentinaRenaperPremiumRequest, ArgentinaRenaperRequest, Gender,
};
use metamap::Metadata;

#[derive(Parser)]
#[command(author, version, about = "Run MetaMap government checks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Exchange the client credentials for an access token")]
    Token,
    #[command(about = "Validate a DNI card number and issue date")]
    Dni(CheckArgs),
    #[command(about = "Validate a DNI holder against RENAPER")]
    Renaper(CheckArgs),
    #[command(
        about = "RENAPER check with card validation and the full document record",
        alias = "premium"
    )]
    RenaperPremium(PremiumArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub person: PersonArgs,
    /// Document issue date, YYYY-MM-DD
    #[arg(long)]
    pub date_of_issue: String,
}

#[derive(Args)]
pub struct PremiumArgs {
    #[command(flatten)]
    pub person: PersonArgs,
    /// Document issue date, YYYY-MM-DD
    #[arg(long)]
    pub issue_date: String,
}

#[derive(Args)]
pub struct PersonArgs {
    /// Document number from a national ID or driver license
    #[arg(long)]
    pub document_number: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date_of_birth: String,
    /// M or F
    #[arg(long)]
    pub gender: Gender,
    /// Webhook receiving the asynchronous result
    #[arg(long)]
    pub callback_url: Option<String>,
    /// JSON object echoed back in outputs and webhooks
    #[arg(long)]
    pub metadata: Option<String>,
}

impl PersonArgs {
    fn metadata(&self) -> Result<Option<Metadata>> {
        self.metadata
            .as_deref()
            .map(|raw| serde_json::from_str(raw).context("--metadata must be a JSON object"))
            .transpose()
    }
}

impl CheckArgs {
    pub fn dni_request(&self) -> Result<ArgentinaDniRequest> {
        let p = &self.person;
        Ok(ArgentinaDniRequest {
            document_number: p.document_number.clone(),
            date_of_birth: p.date_of_birth.clone(),
            gender: p.gender,
            date_of_issue: self.date_of_issue.clone(),
            callback_url: p.callback_url.clone(),
            metadata: p.metadata()?,
        })
    }

    pub fn renaper_request(&self) -> Result<ArgentinaRenaperRequest> {
        let p = &self.person;
        Ok(ArgentinaRenaperRequest {
            document_number: p.document_number.clone(),
            date_of_birth: p.date_of_birth.clone(),
            gender: p.gender,
            date_of_issue: self.date_of_issue.clone(),
            callback_url: p.callback_url.clone(),
            metadata: p.metadata()?,
        })
    }
}

impl PremiumArgs {
    pub fn request(&self) -> Result<ArgentinaRenaperPremiumRequest> {
        let p = &self.person;
        Ok(ArgentinaRenaperPremiumRequest {
            document_number: p.document_number.clone(),
            date_of_birth: p.date_of_birth.clone(),
            issue_date: self.issue_date.clone(),
            gender: p.gender,
            callback_url: p.callback_url.clone(),
            metadata: p.metadata()?,
        })
    }
}
