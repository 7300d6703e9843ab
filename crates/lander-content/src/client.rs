//! Content Delivery API client.
//!
//! Sync HTTP client over a shared `ureq` agent with Bearer-token auth.

use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use lander_config::ApiConfig;

use crate::error::ContentError;
use crate::links::{self, RawCollection};
use crate::model::EntryCollection;
use crate::query::EntryQuery;
use crate::source::ContentSource;

/// Content Delivery API client.
///
/// Holds one agent for the life of the process; calls are stateless and the
/// client is shared between threads.
pub struct ContentClient {
    agent: Agent,
    base_url: String,
    access_token: String,
}

impl ContentClient {
    /// Create client from validated delivery settings.
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
            access_token: config.access_token.clone(),
        }
    }

    /// GET `{base_url}/{path}` and decode the JSON body.
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, ContentError> {
        let url = format!("{}/{}", self.base_url, path);

        let mut request = self
            .agent
            .get(&url)
            .header("Authorization", &format!("Bearer {}", self.access_token))
            .header("Accept", "application/json");
        for (key, value) in params {
            request = request.query(key, value);
        }

        let response = request.call()?;

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
}

impl ContentSource for ContentClient {
    fn entries(&self, query: &EntryQuery) -> Result<EntryCollection, ContentError> {
        debug!(
            content_type = query.content_type.as_deref(),
            sys_id = query.sys_id.as_deref(),
            locale = query.locale.as_deref(),
            "Querying entries"
        );
        let raw: RawCollection = self.get_json("entries", &query.to_params())?;
        links::into_collection(raw, query.include_depth())
    }
}
