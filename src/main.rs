mod api;
mod cli;
mod config;
mod error;
mod importer;
mod zone;

#[cfg(test)]
mod tests;

use std::process::ExitCode;

use anyhow::Result;
use api::DnsimpleClient;
use clap::Parser;
use cli::Cli;
use config::Settings;
use importer::{Importer, LogReporter, StdinConfirm};
use log::{error, info};
use zone::ZoneFile;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging, keeping the HTTP stack quiet unless asked
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,reqwest=warn,hyper=warn"),
    )
    .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(&cli)?;
    let zone = ZoneFile::read(cli.zonefile.clone())?;
    let client = DnsimpleClient::new(&settings.credentials(), &settings.api_endpoint)?;

    let importer = Importer::new(client, StdinConfirm, LogReporter, zone)?;
    info!("Zone file belongs to domain \"{}\".", importer.domain());
    importer.run().await?;
    Ok(())
}
