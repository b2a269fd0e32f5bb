use clap::Parser;
use std::path::PathBuf;

/// Update DuckDNS subdomains with the current public address.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use debug mode
    #[arg(short, long)]
    pub debug: bool,

    /// Config file location
    #[arg(short, long, default_value = "duckdns.yaml")]
    pub config: PathBuf,

    /// Names to update with DuckDNS. Just the subdomain section. Use the flag
    /// multiple times to set multiple values.
    #[arg(short, long, value_delimiter = ',')]
    pub names: Vec<String>,

    /// Token for updating DuckDNS
    #[arg(short, long, default_value = "")]
    pub token: String,
}
