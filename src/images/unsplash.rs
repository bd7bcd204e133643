// images/unsplash.rs
use crate::images::models::SearchResponse;
use crate::images::pipeline::{persist, ImageSource};
use crate::images::ImageError;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use std::path::Path;
use std::time::Duration;

const SEARCH_URL: &str = "https://api.unsplash.com/search/photos";
const USER_AGENT: &str = concat!("nomad_cities/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

pub struct UnsplashClient {
    client: Client,
    access_key: String,
}

impl UnsplashClient {
    pub fn new(access_key: impl Into<String>) -> Result<Self, ImageError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self {
            client,
            access_key: access_key.into(),
        })
    }
}

impl ImageSource for UnsplashClient {
    fn search(&self, query: &str, page: u32) -> Result<String, ImageError> {
        let page = page.to_string();
        let resp = self
            .client
            .get(SEARCH_URL)
            .header(AUTHORIZATION, format!("Client-ID {}", self.access_key))
            .header("Accept-Version", "v1")
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("page", page.as_str()),
                ("orientation", "landscape"),
            ])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_default();
            tracing::debug!(%status, body = %text, "search rejected");
            return Err(ImageError::Status {
                status: status.as_u16(),
                url: SEARCH_URL.to_string(),
            });
        }

        let body = resp.text()?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| ImageError::JsonParse(e.to_string()))?;

        let total = parsed.total;
        let photo = parsed
            .into_first()
            .ok_or_else(|| ImageError::NoResults(query.to_string()))?;

        tracing::debug!(query, total, photo_id = %photo.id, "search hit");
        Ok(photo.urls.regular)
    }

    /// Requires a 200, then hands the body to [`persist`] so a failed
    /// transfer never replaces an existing photo.
    fn download(&self, url: &str, dest: &Path) -> Result<u64, ImageError> {
        let resp = self.client.get(url).send()?;

        if resp.status() != StatusCode::OK {
            return Err(ImageError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        persist(resp, dest)
    }
}
