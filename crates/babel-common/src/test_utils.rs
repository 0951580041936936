//! Test utilities and shared test helpers for babel.
//!
//! Enabled with the `testing` feature so that other crates in the workspace
//! can pull them into their dev-dependencies.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` as the `common.json` bundle of `code` under `base_dir`.
pub fn write_bundle(base_dir: &Path, code: &str, contents: &str) -> PathBuf {
    let dir = base_dir.join(code);
    fs::create_dir_all(&dir).expect("Failed to create locale directory");
    let path = dir.join("common.json");
    fs::write(&path, contents).expect("Failed to write bundle");
    path
}

/// Build a bundle document with the two home page strings.
pub fn home_bundle_json(welcome: &str, description: &str) -> String {
    serde_json::json!({
        "messages": {
            "welcome": welcome,
            "description": description,
        }
    })
    .to_string()
}

/// Create a locales directory holding `es` and `en` home page bundles.
pub fn create_test_locales() -> tempfile::TempDir {
    let temp_dir = create_temp_dir();
    write_bundle(
        temp_dir.path(),
        "es",
        &home_bundle_json("Bienvenido", "Descripción"),
    );
    write_bundle(temp_dir.path(), "en", &home_bundle_json("Welcome", "Desc"));
    temp_dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_locales_layout() {
        let dir = create_test_locales();
        let es = fs::read_to_string(dir.path().join("es/common.json")).unwrap();
        let en = fs::read_to_string(dir.path().join("en/common.json")).unwrap();

        assert!(es.contains("Bienvenido"));
        assert!(en.contains("Welcome"));
        assert!(!dir.path().join("fr").exists());
    }

    #[test]
    fn test_home_bundle_json_shape() {
        let value: serde_json::Value =
            serde_json::from_str(&home_bundle_json("Hi", "There")).unwrap();
        assert_eq!(value["messages"]["welcome"], "Hi");
        assert_eq!(value["messages"]["description"], "There");
    }
}
