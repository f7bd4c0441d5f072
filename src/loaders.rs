//! WSDL loading
//!
//! This module fetches WSDL text from the local file system or over HTTP.
//! Remote fetches retry connection failures a bounded number of times with a
//! fixed backoff; every other failure is terminal.

use crate::documents::WsdlSource;
use crate::error::LoadError;
use crate::limits::Limits;
use crate::locations::Location;
use std::fs;
#[cfg(any(feature = "remote", test))]
use std::io::Read;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// User agent sent with remote requests; some SOAP gateways reject unknown clients
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                              AppleWebKit/537.36 (KHTML, like Gecko) \
                              Chrome/120.0.0.0 Safari/537.36";

/// Accept header sent with remote requests
pub const ACCEPT: &str = "text/xml, application/xml, */*";

/// Retry behaviour for remote fetches
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Pause between attempts
    pub backoff: Duration,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(1),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Resource loader for WSDL documents
#[derive(Debug)]
pub struct Loader {
    /// Resource limits
    limits: Limits,
    /// Remote retry policy
    retry: RetryPolicy,
    /// Whether to allow remote resources
    allow_remote: bool,
}

impl Loader {
    /// Create a new loader with default settings
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
            retry: RetryPolicy::default(),
            allow_remote: true,
        }
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set whether to allow remote resources
    pub fn with_allow_remote(mut self, allow: bool) -> Self {
        self.allow_remote = allow;
        self
    }

    /// The limits this loader applies
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Load the text of a WSDL document
    pub fn load(&self, location: &Location) -> Result<WsdlSource, LoadError> {
        let text = match location {
            Location::Path(path) => {
                info!(path = %path.display(), "reading local WSDL");
                self.read_file(path)?
            }
            Location::Url(url) => {
                if !self.allow_remote {
                    return Err(LoadError::RemoteDisabled(url.to_string()));
                }
                info!(%url, "fetching remote WSDL");
                self.fetch(url.as_str())?
            }
            Location::String(s) => s.clone(),
        };

        self.limits.check_document_size(text.len())?;
        Ok(WsdlSource::new(location.clone(), text))
    }

    fn read_file(&self, path: &Path) -> Result<String, LoadError> {
        fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })
    }

    #[cfg(feature = "remote")]
    fn fetch(&self, url: &str) -> Result<String, LoadError> {
        use tracing::warn;

        let network = |attempts: u32, e: reqwest::Error| LoadError::Network {
            url: url.to_string(),
            attempts,
            message: e.to_string(),
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(self.retry.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| network(0, e))?;

        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            let result = client
                .get(url)
                .header(reqwest::header::ACCEPT, ACCEPT)
                .send()
                .and_then(|r| r.error_for_status());

            match result {
                Ok(response) => {
                    if let Some(len) = response.content_length() {
                        self.limits.check_document_size(len as usize)?;
                    }
                    let body = read_capped(response, self.limits.max_document_size).map_err(
                        |e| LoadError::Network {
                            url: url.to_string(),
                            attempts: attempt,
                            message: e.to_string(),
                        },
                    )?;
                    self.limits.check_document_size(body.len())?;
                    return String::from_utf8(body).map_err(|e| LoadError::Network {
                        url: url.to_string(),
                        attempts: attempt,
                        message: format!("response is not valid UTF-8: {}", e),
                    });
                }
                Err(e) if e.is_connect() && attempt < max_attempts => {
                    warn!(
                        %url,
                        attempt,
                        max_attempts,
                        error = %e,
                        "connection failed, retrying"
                    );
                    std::thread::sleep(self.retry.backoff);
                    attempt += 1;
                }
                Err(e) => return Err(network(attempt, e)),
            }
        }
    }

    #[cfg(not(feature = "remote"))]
    fn fetch(&self, url: &str) -> Result<String, LoadError> {
        Err(LoadError::RemoteDisabled(format!(
            "{} (built without the `remote` feature)",
            url
        )))
    }
}

/// Read at most `max + 1` bytes, enough to tell an oversized body apart
/// without buffering all of it
#[cfg(any(feature = "remote", test))]
fn read_capped(reader: impl Read, max: usize) -> std::io::Result<Vec<u8>> {
    let mut body = Vec::new();
    reader
        .take((max as u64).saturating_add(1))
        .read_to_end(&mut body)?;
    Ok(body)
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
