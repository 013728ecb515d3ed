use std::{io, path::PathBuf};

use reqwest::{header::InvalidHeaderValue, StatusCode};
use thiserror::Error;

/// Every way an import run can end early. None of these are retried.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Could not find domain name for zone file \"{}\".", .path.display())]
    DomainNotFound { path: PathBuf },

    #[error("Could not access the API (HTTP 401). Are your credentials wrong?")]
    Authentication,

    #[error("Could not access the API (HTTP {})", .0.as_u16())]
    UnexpectedStatus(StatusCode),

    #[error("Could not create domain \"{domain}\" (HTTP {})", .status.as_u16())]
    CreationFailed { domain: String, status: StatusCode },

    #[error("Could not import the zone file (HTTP {})", .0.as_u16())]
    ImportFailed(StatusCode),

    #[error("Aborting.")]
    OperatorDeclined,

    #[error("credentials cannot be used as a header value")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("request to the DNSimple API failed")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response body from the DNSimple API")]
    Decode(#[from] serde_json::Error),

    #[error("could not read zone file \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = ImportError> = std::result::Result<T, E>;
