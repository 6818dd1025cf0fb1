//! JSON file helpers used by the config loader and the demo.
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read and deserialize a JSON document; `what` names it in error messages.
pub fn read_json_file<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {what} {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse {what} {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn json_round_trips_through_nested_dir() {
        let dir = std::env::temp_dir().join(format!("edge_bundler_io_{}", std::process::id()));
        let path = dir.join("nested").join("value.json");
        let mut value = BTreeMap::new();
        value.insert("cycles".to_string(), 6);
        write_json_file(&path, &value).unwrap();
        let back: BTreeMap<String, i32> = read_json_file(&path, "test file").unwrap();
        assert_eq!(back, value);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = read_json_file::<serde_json::Value>(Path::new("/nonexistent/x.json"), "config")
            .unwrap_err();
        assert!(err.starts_with("Failed to read config /nonexistent/x.json"));
    }
}
