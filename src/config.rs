//! Run configuration.
//!
//! Built once before tree assembly (from an optional JSON file plus CLI
//! overrides) and never mutated afterwards. The tree keeps its own copy.

use crate::error::TreeError;
use crate::model::AccessLevel;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Give global declarations (free functions, globals, ...) their own pages.
    pub separate_global_declarations: bool,
    pub hide_objc: bool,
    pub hide_swift: bool,
    /// Modules being documented, in presentation order.
    pub documented_modules: Vec<String>,
    /// Glob patterns searched for per-type abstract files.
    pub abstract_glob: Vec<String>,
    /// Declarations below this level are pruned.
    pub min_acl: AccessLevel,
    pub page_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separate_global_declarations: false,
            hide_objc: false,
            hide_swift: false,
            documented_modules: Vec::new(),
            abstract_glob: Vec::new(),
            min_acl: AccessLevel::Public,
            page_extension: "html".to_string(),
        }
    }
}

impl Config {
    /// Load a JSON configuration file. Missing keys take their defaults.
    pub fn from_path(path: &Path) -> Result<Self, TreeError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Is `name` one of the modules being documented? With no modules
    /// configured, every module in the input counts as documented.
    pub fn module_name(&self, name: &str) -> bool {
        self.documented_modules.is_empty() || self.documented_modules.iter().any(|m| m == name)
    }

    pub fn multiple_modules(&self) -> bool {
        self.documented_modules.len() > 1
    }
}
