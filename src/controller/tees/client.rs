use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;

use crate::error::CoreError;
use crate::model::Tee;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Source of tee sets for a course.
#[async_trait]
pub trait TeeProvider: Send + Sync {
    async fn tees_for_course(&self, course_id: &str) -> Result<Vec<Tee>, CoreError>;
}

#[derive(Deserialize)]
struct TeesResponse {
    #[serde(default)]
    tees: Vec<Tee>,
}

/// Course-data API reached over HTTP.
pub struct HttpTeeProvider {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl HttpTeeProvider {
    /// # Errors
    ///
    /// Will return `Err` if the base URL doesn't parse or the HTTP client
    /// can't be built
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, CoreError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CoreError::Parse(format!("course API url {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CoreError::Parse(format!("course API url {base_url} has no path")));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// `{base}/courses/{id}/tees`, with the id escaped as a single path segment.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the id is blank or a dot segment
    pub fn tees_url(&self, course_id: &str) -> Result<Url, CoreError> {
        let id = course_id.trim();
        if id.is_empty() || id == "." || id == ".." {
            return Err(CoreError::InvalidInput(format!(
                "course id {course_id:?} is not a usable path segment"
            )));
        }
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| CoreError::Parse(format!("course API url {} has no path", self.base_url)))?
            .pop_if_empty()
            .push("courses")
            .push(id)
            .push("tees");
        Ok(url)
    }
}

#[async_trait]
impl TeeProvider for HttpTeeProvider {
    async fn tees_for_course(&self, course_id: &str) -> Result<Vec<Tee>, CoreError> {
        let mut request = self.client.get(self.tees_url(course_id)?);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let resp = request.send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CoreError::NotFound(format!("course {course_id}")));
        }
        let resp = resp.error_for_status()?;
        let body: TeesResponse = resp.json().await?;

        let mut tees = Vec::with_capacity(body.tees.len());
        for tee in body.tees {
            match tee.validate() {
                Ok(()) => tees.push(tee),
                Err(e) => tracing::warn!(course_id, "dropping tee from provider: {e}"),
            }
        }
        Ok(tees)
    }
}
