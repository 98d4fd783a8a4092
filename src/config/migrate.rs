use super::Config;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::Path;

/// Default values for every known key, as YAML.
fn default_mapping() -> io::Result<Mapping> {
    let value = serde_yaml::to_value(Config::default())
        .map_err(|e| io::Error::other(format!("Failed to serialize defaults: {e}")))?;

    match value {
        Value::Mapping(map) => Ok(map),
        _ => Err(io::Error::other("default configuration is not a mapping")),
    }
}

/// Add keys missing from the config file, keeping existing values and any
/// unknown keys. Returns the names of the keys that were added.
pub fn fill_missing_fields(conf: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(conf)?;

    let mut yaml: Value = if content.trim().is_empty() {
        Value::Mapping(Mapping::new())
    } else {
        serde_yaml::from_str(&content).map_err(|e| {
            io::Error::other(format!("Failed to parse YAML {:?}: {}", conf, e))
        })?
    };

    let Some(map) = yaml.as_mapping_mut() else {
        return Err(io::Error::other(format!(
            "Configuration {:?} is not a YAML mapping",
            conf
        )));
    };

    let mut added = Vec::new();
    for (key, default) in default_mapping()? {
        if !map.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            map.insert(key, default);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&yaml).map_err(|e| {
            io::Error::other(format!("Failed to serialize YAML for {:?}: {}", conf, e))
        })?;
        fs::write(conf, serialized)?;
    }

    Ok(added)
}
