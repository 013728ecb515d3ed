use super::models::*;
use crate::{error::Result, zone::Domain};
use async_trait::async_trait;

#[async_trait]
pub trait DnsimpleApi {
    /// `GET /domains/{domain}`
    async fn lookup_domain(&self, domain: &Domain) -> Result<ApiReply>;
    /// `POST /domains/`
    async fn create_domain(&self, domain: &Domain) -> Result<ApiReply>;
    /// `POST /domains/{domain}/zone_imports`
    async fn import_zone(&self, domain: &Domain, zone_data: &str) -> Result<ApiReply>;
}
