//! Content type export.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::api::ManagementApi;
use crate::error::ProvisionError;
use crate::types::{ContentType, Field};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedContentType<'a> {
    id: &'a str,
    name: &'a str,
    display_field: Option<&'a str>,
    description: Option<&'a str>,
    fields: &'a [Field],
}

/// Render content types as pretty-printed JSON.
pub fn export_json(content_types: &[ContentType]) -> Result<String, ProvisionError> {
    let exported: Vec<ExportedContentType<'_>> = content_types
        .iter()
        .map(|t| ExportedContentType {
            id: t.id(),
            name: &t.name,
            display_field: t.display_field.as_deref(),
            description: t.description.as_deref(),
            fields: &t.fields,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&exported)?)
}

/// Write the environment's content types to `path`, creating parent directories.
pub fn export_content_types(
    api: &dyn ManagementApi,
    path: &Path,
) -> Result<Vec<ContentType>, ProvisionError> {
    let content_types = api.content_types()?;
    let json = export_json(&content_types)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    info!(path = %path.display(), count = content_types.len(), "Exported content types");

    Ok(content_types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeManagement;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn test_export_json_shape() {
        let content_type = ContentType::new(
            "navigationLink",
            "Navigation Link",
            "text",
            vec![Field::symbol("text", "Text").required()],
        );
        let json: Value = serde_json::from_str(&export_json(&[content_type]).unwrap()).unwrap();
        assert_eq!(
            json,
            json!([{
                "id": "navigationLink",
                "name": "Navigation Link",
                "displayField": "text",
                "description": null,
                "fields": [{
                    "id": "text",
                    "name": "Text",
                    "type": "Symbol",
                    "required": true,
                    "localized": false
                }]
            }])
        );
    }

    #[test]
    fn test_export_writes_file_in_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contentful").join("content-types.json");
        let api = FakeManagement::new().with_content_type(ContentType::new(
            "button",
            "Button",
            "text",
            vec![],
        ));

        let exported = export_content_types(&api, &path).unwrap();

        assert_eq!(exported.len(), 1);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[\n  {"));
        assert!(written.contains("\"id\": \"button\""));
    }
}
