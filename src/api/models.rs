use serde::{Deserialize, Serialize};

/// DNSimple account email and API token.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub api_token: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            api_token: api_token.into(),
        }
    }

    /// Value of the `X-DNSimple-Token` header.
    pub fn token_header(&self) -> String {
        format!("{}:{}", self.email, self.api_token)
    }
}

/// Status and raw body of an API call. Interpreting the status is up to the caller.
#[derive(Debug)]
pub struct ApiReply {
    pub status: reqwest::StatusCode,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewDomain {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateDomainRequest {
    pub domain: NewDomain,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ZoneData {
    pub zone_data: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ZoneImportRequest {
    pub zone_import: ZoneData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ImportResult {
    pub imported_records_count: u64,
    pub not_imported_records_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct ZoneImportResponse {
    pub zone_import: ImportResult,
}
