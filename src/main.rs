mod api;
mod cli;
mod config;
mod ddns;
mod logging;

#[cfg(test)]
mod tests;

use api::DuckDnsClient;
use clap::Parser;
use cli::Cli;
use ddns::DuckDns;
use logging::Logger;
use std::{env, process::ExitCode};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let logger = Logger::from_debug_flag(cli.debug);
    logger.debug(format_args!("Debug logging enabled"));

    let update = config::resolve(&cli, |key| env::var(key).ok(), &logger);

    let ddns = DuckDns::new(DuckDnsClient::new(), &logger);
    match ddns.update_all_records(&update).await {
        Ok(()) => {
            logger.debug(format_args!("IP address updated successfully"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            logger.error(format_args!("error updating IP address: {}", e));
            ExitCode::FAILURE
        }
    }
}
