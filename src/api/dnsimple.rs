use super::{client::DnsimpleApi, models::*};
use crate::{error::Result, zone::Domain};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};

pub const API_BASE_URL: &str = "https://dnsimple.com";

// `X-DNSimple-Token`, lowercased as `HeaderName` requires
const TOKEN_HEADER: &str = "x-dnsimple-token";

pub struct DnsimpleClient {
    client: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

#[async_trait]
impl DnsimpleApi for DnsimpleClient {
    async fn lookup_domain(&self, domain: &Domain) -> Result<ApiReply> {
        let url = format!("{}/domains/{}", self.base_url, domain);
        debug!("GETting \"{}\"", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await?;

        Self::into_reply(response).await
    }

    async fn create_domain(&self, domain: &Domain) -> Result<ApiReply> {
        let url = format!("{}/domains/", self.base_url);
        debug!("POSTing to \"{}\"", url);

        let request = CreateDomainRequest {
            domain: NewDomain {
                name: domain.as_str().to_owned(),
            },
        };
        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .body(serde_json::to_string(&request)?)
            .send()
            .await?;

        Self::into_reply(response).await
    }

    async fn import_zone(&self, domain: &Domain, zone_data: &str) -> Result<ApiReply> {
        let url = format!("{}/domains/{}/zone_imports", self.base_url, domain);
        debug!("POSTing to \"{}\"", url);

        let request = ZoneImportRequest {
            zone_import: ZoneData {
                zone_data: zone_data.to_string(),
            },
        };
        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .body(serde_json::to_string(&request)?)
            .send()
            .await?;

        Self::into_reply(response).await
    }
}

impl DnsimpleClient {
    pub fn new(credentials: &Credentials, base_url: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: Self::build_headers(credentials)?,
        })
    }

    pub fn build_headers(credentials: &Credentials) -> Result<HeaderMap> {
        let mut token = HeaderValue::from_str(&credentials.token_header())?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(TOKEN_HEADER), token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn into_reply(response: reqwest::Response) -> Result<ApiReply> {
        let status = response.status();
        let body = response.text().await?;
        debug!("Response {}: {}", status.as_u16(), body);

        Ok(ApiReply { status, body })
    }
}
