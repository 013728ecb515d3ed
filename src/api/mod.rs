pub mod client;
pub mod dnsimple;
pub mod models;

pub use client::DnsimpleApi;
pub use dnsimple::{DnsimpleClient, API_BASE_URL};
pub use models::{Credentials, ImportResult};
