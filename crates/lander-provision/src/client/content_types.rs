//! Content type operations.

use serde::Serialize;
use tracing::info;

use lander_content::ContentError;

use super::ManagementClient;
use crate::types::{ContentType, Field};

/// Request body for content type create/update.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentTypeBody<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_field: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    fields: &'a [Field],
}

impl<'a> From<&'a ContentType> for ContentTypeBody<'a> {
    fn from(content_type: &'a ContentType) -> Self {
        Self {
            name: &content_type.name,
            display_field: content_type.display_field.as_deref(),
            description: content_type.description.as_deref(),
            fields: &content_type.fields,
        }
    }
}

impl ManagementClient {
    pub(crate) fn list_content_types(&self) -> Result<Vec<ContentType>, ContentError> {
        self.list("content_types", &[], None)
    }

    pub(crate) fn get_content_type(&self, id: &str) -> Result<ContentType, ContentError> {
        self.get(&format!("content_types/{id}"), &[])
    }

    pub(crate) fn save_content_type(
        &self,
        definition: &ContentType,
        version: Option<u64>,
    ) -> Result<ContentType, ContentError> {
        info!(
            content_type = definition.id(),
            version, "Saving content type"
        );
        self.put(
            &format!("content_types/{}", definition.id()),
            version,
            Some(&ContentTypeBody::from(definition)),
        )
    }

    pub(crate) fn activate_content_type(
        &self,
        id: &str,
        version: u64,
    ) -> Result<ContentType, ContentError> {
        info!(content_type = id, version, "Publishing content type");
        self.put::<(), _>(&format!("content_types/{id}/published"), Some(version), None)
    }
}
