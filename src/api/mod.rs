pub mod client;
pub mod duckdns;

pub use client::UpdateClient;
pub use duckdns::DuckDnsClient;
