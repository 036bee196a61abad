//! Cluster inventory loading.
//!
//! Inventories are YAML, TOML, or JSON documents. They are normalized into a
//! JSON value tree so the weight assigner sees a single shape regardless of
//! the source format. Instances are looked up under `terraform.instances`,
//! then a top-level `instances` key, then the document root.
//!
//! Lookups of a missing section or host yield an empty mapping rather than
//! an error, so a node without inventory data simply has nothing to rank.

use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to read inventory {path}")]
    Read {
        #[source]
        source: std::io::Error,
        path: String,
    },

    #[error("YAML inventory error at path {path}")]
    Yaml {
        #[source]
        source: serde_yaml::Error,
        path: String,
    },

    #[error("TOML inventory error at path {path}")]
    Toml {
        #[source]
        source: toml::de::Error,
        path: String,
    },

    #[error("JSON inventory error at path {path}")]
    Json {
        #[source]
        source: serde_json::Error,
        path: String,
    },
}

/// Inventory file format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryFormat {
    Yaml,
    Toml,
    Json,
}

impl InventoryFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => InventoryFormat::Yaml,
            Some("toml") => InventoryFormat::Toml,
            _ => InventoryFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    document: Value,
}

impl Inventory {
    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    pub fn from_file(path: &Path) -> Result<Self, InventoryError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| InventoryError::Read {
            source,
            path: display.clone(),
        })?;
        Self::from_str_as(&content, InventoryFormat::from_path(path), &display)
    }

    /// Parse `content` in the given format. `origin` is only used in errors.
    pub fn from_str_as(
        content: &str,
        format: InventoryFormat,
        origin: &str,
    ) -> Result<Self, InventoryError> {
        let document = match format {
            InventoryFormat::Yaml => {
                serde_yaml::from_str::<Value>(content).map_err(|source| InventoryError::Yaml {
                    source,
                    path: origin.to_string(),
                })?
            }
            InventoryFormat::Toml => {
                toml::from_str::<Value>(content).map_err(|source| InventoryError::Toml {
                    source,
                    path: origin.to_string(),
                })?
            }
            InventoryFormat::Json => {
                serde_json::from_str::<Value>(content).map_err(|source| InventoryError::Json {
                    source,
                    path: origin.to_string(),
                })?
            }
        };
        Ok(Self { document })
    }

    /// The node mapping of this inventory.
    pub fn instances(&self) -> &Value {
        if let Some(instances) = self.document.pointer("/terraform/instances") {
            return instances;
        }
        self.document.get("instances").unwrap_or(&self.document)
    }

    /// Top-level section stored under `key`, or an empty mapping.
    ///
    /// Inventories keyed by node prefix (`node:`, `gpu:`, ...) keep each
    /// group's data in its own section.
    pub fn section(&self, key: &str) -> Value {
        self.document
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Inventory entry of a single host, or an empty mapping.
    pub fn instance(&self, hostname: &str) -> Value {
        self.instances()
            .get(hostname)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Keep only instances whose name starts with `prefix`.
    ///
    /// Name filtering is a convenience on top of the keyed lookups above;
    /// it selects e.g. all `node*` hosts out of a mixed instance list.
    ///
    /// A non-mapping instance section is returned untouched so the caller
    /// still reports it as malformed.
    pub fn with_prefix(&self, prefix: &str) -> Value {
        match self.instances() {
            Value::Object(map) => {
                let kept: Map<String, Value> = map
                    .iter()
                    .filter(|(name, _)| name.starts_with(prefix))
                    .map(|(name, desc)| (name.clone(), desc.clone()))
                    .collect();
                Value::Object(kept)
            }
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    const YAML: &str = r#"
terraform:
  instances:
    mgmt1:
      specs: {cpus: 2, realmemory: 6000, gpu: 0}
    node1:
      specs: {cpus: 4, realmemory: 16000, gpu: 0}
      weight: 10
"#;

    #[test]
    fn yaml_terraform_layout() {
        let inv = Inventory::from_str_as(YAML, InventoryFormat::Yaml, "test.yaml").unwrap();
        let instances = inv.instances().as_object().unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances["node1"]["weight"], json!(10));
    }

    #[test]
    fn toml_instances_layout() {
        let toml_str = r#"
[instances.node1.spec]
gpu = 0
memory = 16
cpus = 4
"#;
        let inv = Inventory::from_str_as(toml_str, InventoryFormat::Toml, "test.toml").unwrap();
        assert_eq!(inv.instances()["node1"]["spec"]["cpus"], json!(4));
    }

    #[test]
    fn bare_mapping_is_the_instance_section() {
        let inv = Inventory::from_value(json!({"node1": {"spec": {"gpu": 0, "memory": 1, "cpus": 1}}}));
        assert!(inv.instances().get("node1").is_some());
    }

    #[test]
    fn prefix_filter_keeps_matching_names() {
        let inv = Inventory::from_str_as(YAML, InventoryFormat::Yaml, "test.yaml").unwrap();
        let nodes = inv.with_prefix("node");
        let names: Vec<&String> = nodes.as_object().unwrap().keys().collect();
        assert_eq!(names, vec!["node1"]);
    }

    #[test]
    fn section_selects_top_level_key() {
        let inv = Inventory::from_value(json!({
            "node": {"instances": {"node1": {}}},
            "gpu": {"instances": {"gpu1": {}}},
        }));
        assert_eq!(inv.section("gpu"), json!({"instances": {"gpu1": {}}}));
    }

    #[test]
    fn missing_section_is_empty() {
        let inv = Inventory::from_str_as(YAML, InventoryFormat::Yaml, "test.yaml").unwrap();
        assert_eq!(inv.section("login"), json!({}));
    }

    #[test]
    fn instance_returns_host_entry() {
        let inv = Inventory::from_str_as(YAML, InventoryFormat::Yaml, "test.yaml").unwrap();
        let node1 = inv.instance("node1");
        assert_eq!(node1["weight"], json!(10));
        assert_eq!(node1["specs"]["realmemory"], json!(16000));
    }

    #[test]
    fn missing_instance_is_empty() {
        let inv = Inventory::from_str_as(YAML, InventoryFormat::Yaml, "test.yaml").unwrap();
        assert_eq!(inv.instance("node42"), json!({}));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(InventoryFormat::from_path(Path::new("a.yml")), InventoryFormat::Yaml);
        assert_eq!(InventoryFormat::from_path(Path::new("a.toml")), InventoryFormat::Toml);
        assert_eq!(InventoryFormat::from_path(Path::new("a.json")), InventoryFormat::Json);
        assert_eq!(InventoryFormat::from_path(Path::new("inventory")), InventoryFormat::Json);
    }

    #[test]
    fn from_file_reads_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();
        let inv = Inventory::from_file(file.path()).unwrap();
        assert!(inv.instances().get("mgmt1").is_some());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Inventory::from_file(Path::new("/nonexistent/inventory.yaml")).unwrap_err();
        assert!(matches!(err, InventoryError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/inventory.yaml"));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = Inventory::from_str_as("{", InventoryFormat::Json, "bad.json").unwrap_err();
        assert!(matches!(err, InventoryError::Json { .. }));
    }
}
