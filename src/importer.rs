use std::io::{self, BufRead, Write};

use log::{debug, info, warn};
use reqwest::StatusCode;

use crate::{
    api::{models::ZoneImportResponse, DnsimpleApi, ImportResult},
    error::{ImportError, Result},
    zone::{Domain, ZoneFile},
};

/// Asks the operator a yes/no question.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Prompts on stdout and reads the answer from stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{}", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&answer),
        }
    }
}

/// An empty answer counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

/// Where progress messages of a run end up.
pub trait Reporter {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Forwards to the `log` facade.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

/// Drives one import: make sure the domain exists, then upload the zone.
pub struct Importer<A, C, R> {
    api: A,
    confirm: C,
    reporter: R,
    zone: ZoneFile,
    domain: Domain,
}

impl<A, C, R> Importer<A, C, R>
where
    A: DnsimpleApi,
    C: Confirm,
    R: Reporter,
{
    /// Resolves the domain once. It is reused for every later call.
    pub fn new(api: A, confirm: C, reporter: R, zone: ZoneFile) -> Result<Self> {
        let domain = zone.domain()?;
        Ok(Self {
            api,
            confirm,
            reporter,
            zone,
            domain,
        })
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Creates the domain when it is missing. An existing domain needs the
    /// operator's go-ahead.
    pub async fn ensure_domain(&self) -> Result<()> {
        let reply = self.api.lookup_domain(&self.domain).await?;

        match reply.status {
            StatusCode::OK => {
                self.reporter
                    .warn(&format!("Domain \"{}\" already exists.", self.domain));
                if !self.confirm.confirm("Continue anyways? (Y/n) ") {
                    return Err(ImportError::OperatorDeclined);
                }
            }
            StatusCode::NOT_FOUND => {
                let created = self.api.create_domain(&self.domain).await?;
                if !created.status.is_success() {
                    return Err(ImportError::CreationFailed {
                        domain: self.domain.to_string(),
                        status: created.status,
                    });
                }
                self.reporter.info(&format!(
                    "Created new domain \"{}\" on DNSimple.",
                    self.domain
                ));
            }
            StatusCode::UNAUTHORIZED => return Err(ImportError::Authentication),
            status => return Err(ImportError::UnexpectedStatus(status)),
        }

        Ok(())
    }

    /// Uploads the zone file. Rejected records are only a warning.
    pub async fn import_zone(&self) -> Result<ImportResult> {
        self.reporter.info(&format!(
            "Importing zonefile {}.",
            self.zone.path().display()
        ));

        let reply = self
            .api
            .import_zone(&self.domain, self.zone.content())
            .await?;
        if reply.status != StatusCode::CREATED {
            return Err(ImportError::ImportFailed(reply.status));
        }

        let response: ZoneImportResponse = serde_json::from_str(&reply.body)?;
        let result = response.zone_import;
        debug!("{:?}", result);

        self.reporter.info(&format!(
            "Successfully imported {} records.",
            result.imported_records_count
        ));
        if result.not_imported_records_count > 0 {
            self.reporter.warn(&format!(
                "Could not import {} records.",
                result.not_imported_records_count
            ));
        }

        Ok(result)
    }

    pub async fn run(&self) -> Result<ImportResult> {
        self.ensure_domain().await?;
        self.import_zone().await
    }
}
