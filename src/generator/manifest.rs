//! Manifest Patching
//!
//! JSON file helpers plus the pure overlay functions behind the two rewrite
//! steps. Overlay semantics: start from the full original object, overwrite
//! only the specified keys, and *remove* cleared keys from the output (they
//! must never be serialized as null).

use std::path::Path;

use serde_json::{Map, Value};

use crate::types::{Feature, ForgeError, Result};

/// JSON object type used for both manifests (arbitrary keys, order kept)
pub type JsonObject = Map<String, Value>;

/// Read and parse a JSON object from disk.
///
/// Parse failures carry the file path: template content is not statically
/// known, so a malformed manifest is a reportable error, not a bug.
pub async fn read_json(path: &Path) -> Result<JsonObject> {
    let raw = tokio::fs::read_to_string(path).await?;
    let value: Value = serde_json::from_str(&raw)
        .map_err(|e| ForgeError::parse(path.display().to_string(), e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ForgeError::parse(
            path.display().to_string(),
            format!("expected a JSON object, got {}", json_type_name(&other)),
        )),
    }
}

/// Write a JSON object pretty-printed (2-space indent) with trailing newline
pub async fn write_json_pretty(path: &Path, object: &JsonObject) -> Result<()> {
    let mut rendered = serde_json::to_string_pretty(object)?;
    rendered.push('\n');
    tokio::fs::write(path, rendered)
        .await
        .map_err(|e| ForgeError::manifest_write(path.display().to_string(), e.to_string()))
}

/// Overlay project identity onto `package.json`.
///
/// Overwrites `name` and `description`, clears `author`, preserves every
/// other key (version, dependencies, scripts, ...).
pub fn patch_package(mut package: JsonObject, project_name: &str, generated_by: &str) -> JsonObject {
    package.insert("name".into(), Value::String(project_name.into()));
    package.insert("description".into(), Value::String(generated_by.into()));
    package.remove("author");
    package
}

/// Overlay project identity and feature gating onto the extension manifest.
///
/// `name` and `short_name` become the project name, `description` the
/// attribution string. Each gated key keeps its original value iff its
/// feature is selected; otherwise the key is removed entirely. Unrelated
/// keys pass through unchanged.
pub fn patch_extension_manifest(
    mut manifest: JsonObject,
    project_name: &str,
    generated_by: &str,
    features: &[Feature],
) -> JsonObject {
    manifest.insert("name".into(), Value::String(project_name.into()));
    manifest.insert("short_name".into(), Value::String(project_name.into()));
    manifest.insert("description".into(), Value::String(generated_by.into()));

    for feature in Feature::ALL {
        if !features.contains(&feature) {
            manifest.remove(feature.manifest_key());
        }
    }

    manifest
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_patch_package_overwrites_identity() {
        let package = object(json!({
            "name": "angular-web-extension",
            "description": "upstream template",
            "author": "Upstream Author",
            "version": "2.1.0",
            "dependencies": {"@angular/core": "^17.0.0"}
        }));

        let patched = patch_package(package, "my-app", "Generated with extforge");

        assert_eq!(patched["name"], "my-app");
        assert_eq!(patched["description"], "Generated with extforge");
        assert!(!patched.contains_key("author"));
        // unrelated keys preserved
        assert_eq!(patched["version"], "2.1.0");
        assert_eq!(patched["dependencies"]["@angular/core"], "^17.0.0");
    }

    #[test]
    fn test_patch_package_without_author_key() {
        let package = object(json!({"name": "t", "version": "0.0.1"}));
        let patched = patch_package(package, "my-app", "Generated with extforge");
        assert!(!patched.contains_key("author"));
        assert_eq!(patched["version"], "0.0.1");
    }

    #[test]
    fn test_feature_gating_exact() {
        let manifest = object(json!({
            "browser_action": {},
            "options_page": {},
            "chrome_url_overrides": {},
            "foo": "bar"
        }));

        let patched =
            patch_extension_manifest(manifest, "my-app", "Generated with extforge", &[Feature::Tab]);

        assert!(patched.contains_key("chrome_url_overrides"));
        assert!(!patched.contains_key("browser_action"));
        assert!(!patched.contains_key("options_page"));
        assert_eq!(patched["foo"], "bar");
    }

    #[test]
    fn test_popup_and_tab_scenario() {
        let manifest = object(json!({
            "browser_action": {},
            "options_page": {},
            "chrome_url_overrides": {},
            "foo": "bar"
        }));

        let patched = patch_extension_manifest(
            manifest,
            "my-app",
            "Generated with extforge",
            &[Feature::Popup, Feature::Tab],
        );

        let expected = object(json!({
            "browser_action": {},
            "chrome_url_overrides": {},
            "foo": "bar",
            "name": "my-app",
            "short_name": "my-app",
            "description": "Generated with extforge"
        }));
        assert_eq!(patched, expected);
    }

    #[test]
    fn test_unrelated_keys_pass_through_unchanged() {
        let manifest = object(json!({
            "manifest_version": 2,
            "permissions": ["storage", "tabs"],
            "icons": {"48": "icons/48.png"},
            "browser_action": {"default_popup": "popup.html"}
        }));

        let patched = patch_extension_manifest(
            manifest.clone(),
            "my-app",
            "Generated with extforge",
            &[Feature::Popup, Feature::Options, Feature::Tab],
        );

        assert_eq!(patched["manifest_version"], manifest["manifest_version"]);
        assert_eq!(patched["permissions"], manifest["permissions"]);
        assert_eq!(patched["icons"], manifest["icons"]);
        assert_eq!(patched["browser_action"], manifest["browser_action"]);
    }

    #[test]
    fn test_selected_feature_absent_from_source_adds_nothing() {
        let manifest = object(json!({"foo": "bar"}));
        let patched = patch_extension_manifest(
            manifest,
            "my-app",
            "Generated with extforge",
            &[Feature::Popup],
        );
        assert!(!patched.contains_key("browser_action"));
        assert_eq!(patched["foo"], "bar");
    }

    #[test]
    fn test_cleared_keys_omitted_not_null() {
        let manifest = object(json!({"options_page": "options.html"}));
        let patched =
            patch_extension_manifest(manifest, "my-app", "Generated with extforge", &[Feature::Tab]);
        let rendered = serde_json::to_string(&patched).unwrap();
        assert!(!rendered.contains("options_page"));
        assert!(!rendered.contains("null"));
    }

    #[tokio::test]
    async fn test_read_json_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        tokio::fs::write(&path, "[1, 2, 3]").await.unwrap();

        let err = read_json(&path).await.unwrap_err();
        assert!(matches!(err, ForgeError::Parse { .. }));
        assert!(err.to_string().contains("an array"));
    }

    #[tokio::test]
    async fn test_read_json_reports_path_on_syntax_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = read_json(&path).await.unwrap_err();
        assert!(err.to_string().contains("package.json"));
    }

    #[tokio::test]
    async fn test_write_json_pretty_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let map = object(json!({"name": "my-app", "nested": {"key": true}}));

        write_json_pretty(&path, &map).await.unwrap();
        let written = tokio::fs::read_to_string(&path).await.unwrap();

        assert!(written.contains("\n  \"name\": \"my-app\""));
        assert!(written.contains("\n    \"key\": true"));
        assert!(written.ends_with('\n'));
    }
}
