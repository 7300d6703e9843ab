//! Content Management API client.
//!
//! Sync HTTP client for `api.contentful.com` with Bearer-token auth. All
//! calls are scoped to one space environment.

mod content_types;
mod entries;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use ureq::http::Response;
use ureq::{Agent, Body};

use lander_config::ApiConfig;
use lander_content::ContentError;

use crate::api::ManagementApi;
use crate::types::{Collection, ContentType, EntryFilter, ManagedEntry};

/// Media type of management API request bodies.
const MANAGEMENT_MEDIA_TYPE: &str = "application/vnd.contentful.management.v1+json";

/// Page size for list calls.
const PAGE_SIZE: u32 = 100;

/// Content Management API client.
pub struct ManagementClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl ManagementClient {
    /// Create client from validated management settings.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.environment_url(),
            token: config.access_token.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// GET `path` and decode the JSON body.
    fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, ContentError> {
        let mut request = self
            .agent
            .get(&self.url(path))
            .header("Authorization", &self.auth_header())
            .header("Accept", "application/json");
        for (key, value) in params {
            request = request.query(key, value);
        }

        read_json(request.call()?)
    }

    /// GET every page of a list endpoint, or the first `limit` items.
    fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
        limit: Option<u32>,
    ) -> Result<Vec<T>, ContentError> {
        let page_size = limit.map_or(PAGE_SIZE, |l| l.min(PAGE_SIZE));
        let mut items = Vec::new();

        loop {
            let mut page_params = params.to_vec();
            page_params.push(("limit".to_owned(), page_size.to_string()));
            page_params.push(("skip".to_owned(), items.len().to_string()));

            let page: Collection<T> = self.get(path, &page_params)?;
            let fetched = page.items.len();
            items.extend(page.items);

            let wanted = limit.map_or(page.total, u64::from);
            if fetched == 0 || items.len() as u64 >= wanted.min(page.total) {
                break;
            }
        }

        if let Some(limit) = limit {
            items.truncate(limit as usize);
        }
        Ok(items)
    }

    /// PUT a JSON body (or nothing) with an optional version header.
    fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        version: Option<u64>,
        body: Option<&B>,
    ) -> Result<T, ContentError> {
        let mut request = self
            .agent
            .put(&self.url(path))
            .header("Authorization", &self.auth_header())
            .header("Content-Type", MANAGEMENT_MEDIA_TYPE);
        if let Some(version) = version {
            request = request.header("X-Contentful-Version", &version.to_string());
        }

        let response = match body {
            Some(body) => request.send(&serde_json::to_vec(body)?[..])?,
            None => request.send_empty()?,
        };
        read_json(response)
    }

    /// POST a JSON body with extra headers.
    fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        body: &B,
    ) -> Result<T, ContentError> {
        let mut request = self
            .agent
            .post(&self.url(path))
            .header("Authorization", &self.auth_header())
            .header("Content-Type", MANAGEMENT_MEDIA_TYPE);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        read_json(request.send(&serde_json::to_vec(body)?[..])?)
    }

    /// DELETE with a version header.
    fn delete<T: DeserializeOwned>(&self, path: &str, version: u64) -> Result<T, ContentError> {
        let response = self
            .agent
            .delete(&self.url(path))
            .header("Authorization", &self.auth_header())
            .header("X-Contentful-Version", &version.to_string())
            .call()?;

        read_json(response)
    }
}

impl ManagementApi for ManagementClient {
    fn content_types(&self) -> Result<Vec<ContentType>, ContentError> {
        self.list_content_types()
    }

    fn content_type(&self, id: &str) -> Result<ContentType, ContentError> {
        self.get_content_type(id)
    }

    fn put_content_type(
        &self,
        definition: &ContentType,
        version: Option<u64>,
    ) -> Result<ContentType, ContentError> {
        self.save_content_type(definition, version)
    }

    fn publish_content_type(&self, id: &str, version: u64) -> Result<ContentType, ContentError> {
        self.activate_content_type(id, version)
    }

    fn entries(&self, filter: &EntryFilter) -> Result<Vec<ManagedEntry>, ContentError> {
        self.list_entries(filter)
    }

    fn entry(&self, id: &str) -> Result<ManagedEntry, ContentError> {
        self.get_entry(id)
    }

    fn create_entry(
        &self,
        content_type: &str,
        fields: &Map<String, Value>,
    ) -> Result<ManagedEntry, ContentError> {
        self.post_entry(content_type, fields)
    }

    fn publish_entry(&self, id: &str, version: u64) -> Result<ManagedEntry, ContentError> {
        self.put_published(id, version)
    }

    fn unpublish_entry(&self, id: &str, version: u64) -> Result<ManagedEntry, ContentError> {
        self.delete_published(id, version)
    }
}

/// Turn an error status into [`ContentError`], otherwise decode the body.
fn read_json<T: DeserializeOwned>(response: Response<Body>) -> Result<T, ContentError> {
    let status = response.status().as_u16();
    let mut body_reader = response.into_body();

    if status >= 400 {
        let error_body = body_reader
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(ContentError::from_response(status, &error_body));
    }

    Ok(body_reader.read_json()?)
}
