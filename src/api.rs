use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://collectionapi.metmuseum.org";

/// Longest slice of a server error body we put on screen.
const ERROR_BODY_LIMIT: usize = 200;

/// Response of the catalog listing endpoint.
///
/// `objectIDs` is `null` on the real API when a query matches nothing,
/// so the array stays optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectsIndex {
    #[serde(default)]
    pub total: u64,
    #[serde(default, rename = "objectIDs")]
    pub object_ids: Option<Vec<u64>>,
}

impl ObjectsIndex {
    /// Draw one identifier uniformly from the listed ones.
    ///
    /// The draw runs over the identifier array itself rather than the
    /// server-reported `total`, so the result is always a listed id
    /// even if the two disagree.
    pub fn draw(&self, rng: &mut impl Rng) -> Result<u64, ApiError> {
        let ids = self.object_ids.as_deref().unwrap_or_default();
        if ids.is_empty() {
            return Err(ApiError::EmptyCatalog);
        }
        Ok(ids[rng.gen_range(0..ids.len())])
    }
}

/// A single object record from the per-object endpoint.
///
/// Every descriptive field is optional; the API routinely returns empty
/// strings, which the display layer treats the same as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectRecord {
    #[serde(rename = "objectID")]
    pub object_id: u64,
    pub title: Option<String>,
    pub object_date: Option<String>,
    pub primary_image: Option<String>,
    pub artist_prefix: Option<String>,
    pub artist_display_name: Option<String>,
    pub period: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub department: Option<String>,
    pub credit_line: Option<String>,
}

/// Error raised by catalog requests.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unparseable response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("catalog listed no object identifiers")]
    EmptyCatalog,
}

impl ApiError {
    /// One-line message for the on-screen error log.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { status, body } => {
                let body = truncate_body(body);
                if body.is_empty() {
                    format!("request failed with HTTP {status}")
                } else {
                    format!("request failed with HTTP {status}: {body}")
                }
            }
            ApiError::Http(e) => format!("request failed: {e}"),
            ApiError::Decode(e) => format!("unparseable response: {e}"),
            ApiError::EmptyCatalog => "catalog listed no object identifiers".to_string(),
        }
    }
}

/// Trim and cap a server error body so one response cannot flood the log.
fn truncate_body(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() <= ERROR_BODY_LIMIT {
        body.to_string()
    } else {
        let mut capped: String = body.chars().take(ERROR_BODY_LIMIT).collect();
        capped.push('…');
        capped
    }
}

/// Client for the Met collection API.
#[derive(Clone)]
pub struct MetClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetClient {
    /// Build a client for the given API base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("met-explorer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full catalog listing.
    pub async fn list_objects(&self) -> Result<ObjectsIndex, ApiError> {
        let url = format!("{}/public/collection/v1/objects", self.base_url);
        self.get_json(&url).await
    }

    /// Fetch the record for a single object.
    pub async fn get_object(&self, id: u64) -> Result<ObjectRecord, ApiError> {
        let url = format!("{}/public/collection/v1/objects/{id}", self.base_url);
        self.get_json(&url).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
