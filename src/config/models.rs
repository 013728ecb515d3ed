use serde::Deserialize;
use validator::Validate;

/// Contents of the optional credentials file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub email: Option<String>,
    pub api_token: Option<String>,
    pub api_endpoint: Option<String>,
}

/// Everything needed to talk to the API, after merging flags and file.
#[derive(Debug, Validate)]
pub struct Settings {
    #[validate(email(message = "Email address is not valid"))]
    pub email: String,

    #[validate(length(min = 1, message = "API token cannot be empty"))]
    pub api_token: String,

    #[validate(url(message = "API endpoint must be a URL"))]
    pub api_endpoint: String,
}
