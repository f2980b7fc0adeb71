//! Package registry lookups
//!
//! The registry is reached through the [HttpClient] trait so tests can
//! substitute [mock::MockHttpClient] for the real [http::ReqwestClient].

pub mod http;
pub mod mock;

pub use http::ReqwestClient;
pub use mock::MockHttpClient;

use semver::Version;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::parse_version;
use crate::error::{PubverError, Result};

/// Default base URL of the package registry
pub const DEFAULT_REGISTRY_URL: &str = "https://pub.dev";

/// Raw response of a single HTTP GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }
}

/// Minimal blocking HTTP client
pub trait HttpClient {
    /// Perform one GET request. Transport failures are errors; any HTTP
    /// status, including non-2xx, is returned as a response.
    fn fetch(&self, url: &str) -> Result<HttpResponse>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn fetch(&self, url: &str) -> Result<HttpResponse> {
        (**self).fetch(url)
    }
}

/// The version a registry reports as latest for one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedVersionRecord {
    pub package: String,
    pub version: Version,
}

#[derive(Debug, Deserialize)]
struct PackageResponse {
    latest: LatestRelease,
}

#[derive(Debug, Deserialize)]
struct LatestRelease {
    version: String,
}

/// Client for the `GET /api/packages/{name}` registry endpoint
pub struct PackageRegistry<C> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> PackageRegistry<C> {
    pub fn new(client: C, base_url: &str) -> Self {
        PackageRegistry {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn package_url(&self, package: &str) -> String {
        format!("{}/api/packages/{}", self.base_url, package)
    }

    /// Fetch the latest published version of `package`.
    ///
    /// Exactly one request is made; it is never retried.
    pub fn latest_version(&self, package: &str) -> Result<PublishedVersionRecord> {
        let url = self.package_url(package);
        debug!("Fetching published version from {}", url);

        let response = self.client.fetch(&url)?;
        if response.status != 200 {
            warn!("Registry returned status {}: {}", response.status, url);
            return Err(PubverError::registry(format!(
                "Unexpected status {} for package '{}'",
                response.status, package
            )));
        }

        let parsed: PackageResponse = serde_json::from_str(&response.body).map_err(|e| {
            warn!("Failed to parse registry response: {}", e);
            PubverError::registry(format!("Malformed response for '{}': {}", package, e))
        })?;

        let version = parse_version(&parsed.latest.version)?;
        debug!("Registry reports {} {}", package, version);

        Ok(PublishedVersionRecord {
            package: package.to_string(),
            version,
        })
    }
}
