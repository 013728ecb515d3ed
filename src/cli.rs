use clap::Parser;
use std::path::PathBuf;

/// Import a BIND zone file into your DNSimple account.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// DNSimple email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// DNSimple API token (see https://dnsimple.com/account)
    #[arg(short, long = "token", value_name = "API_TOKEN")]
    pub token: Option<String>,

    /// YAML file holding email, api_token and api_endpoint
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the DNSimple API
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// The zone file to import
    pub zonefile: PathBuf,
}
