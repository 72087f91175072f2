//! Strategy registry — resolves declarative strategy definitions by id.
//!
//! The registry holds [`StrategyDef`]s loaded from YAML files in its search
//! paths or registered programmatically, indexed by namespaced id with
//! optional namespace aliases. Domain factories
//! ([`grading::from_def`](crate::grading::from_def),
//! [`pricing::from_def`](crate::pricing::from_def)) turn resolved
//! definitions into typed strategies at composition time.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::utilities::errors::RegistryError;

pub mod def;

pub use def::StrategyDef;

use def::StrategyDefListWrapper;

/// Process-wide default registry.
static GLOBAL_REGISTRY: Lazy<Mutex<StrategyRegistry>> =
    Lazy::new(|| Mutex::new(StrategyRegistry::new()));

/// Run `f` against the process-wide default registry.
pub fn with_global<R>(f: impl FnOnce(&mut StrategyRegistry) -> R) -> R {
    let mut registry = GLOBAL_REGISTRY.lock().unwrap();
    f(&mut registry)
}

/// Registry of strategy definitions.
///
/// Holds all known definitions indexed by their namespaced id. Supports
/// loading from filesystem directories, individual files, and programmatic
/// registration.
#[derive(Debug, Default)]
pub struct StrategyRegistry {
    /// Definitions indexed by id.
    defs: HashMap<String, StrategyDef>,

    /// Search paths for definition YAML files.
    search_paths: Vec<PathBuf>,

    /// Namespace aliases (e.g., "discounts" -> "pricing").
    aliases: HashMap<String, String>,
}

impl StrategyRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the standard search path.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.search_paths.push(PathBuf::from("strategies"));
        registry
    }

    /// Add a search path for definition YAML files.
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        self.search_paths.push(path.into());
    }

    /// Register a namespace alias.
    pub fn add_alias(&mut self, alias: &str, target_namespace: &str) {
        self.aliases
            .insert(alias.to_string(), target_namespace.to_string());
    }

    /// Register a definition, replacing any previous one with the same id.
    pub fn register(&mut self, def: StrategyDef) {
        self.defs.insert(def.id.clone(), def);
    }

    /// Register a definition, rejecting duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateStrategy`] if the id is taken.
    pub fn register_unique(&mut self, def: StrategyDef) -> Result<(), RegistryError> {
        if self.defs.contains_key(&def.id) {
            return Err(RegistryError::DuplicateStrategy { id: def.id });
        }
        self.defs.insert(def.id.clone(), def);
        Ok(())
    }

    /// Register definitions from a YAML file.
    ///
    /// The file can contain a single `strategy:` or a `strategies:` list.
    /// Returns the number of definitions registered.
    pub fn register_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;

        // Try a single definition first.
        if let Ok(def) = StrategyDef::from_yaml(&content) {
            self.register(def);
            return Ok(1);
        }

        // Fall back to a list of definitions.
        let list: StrategyDefListWrapper = serde_yaml::from_str(&content)?;
        let count = list.strategies.len();
        for def in list.strategies {
            self.register(def);
        }
        Ok(count)
    }

    /// Load all definition YAML files from a directory (recursive).
    ///
    /// Files that fail to parse are skipped with a warning. Returns the
    /// number of definitions registered; a missing directory registers none.
    pub fn load_directory(&mut self, dir: &Path) -> Result<usize, RegistryError> {
        let mut count = 0;
        if !dir.exists() {
            return Ok(0);
        }

        let entries = std::fs::read_dir(dir).map_err(|source| RegistryError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| RegistryError::Io {
                path: dir.display().to_string(),
                source,
            })?;
            let path = entry.path();

            if path.is_dir() {
                count += self.load_directory(&path)?;
            } else if path
                .extension()
                .map_or(false, |ext| ext == "yaml" || ext == "yml")
            {
                match self.register_from_file(&path) {
                    Ok(n) => count += n,
                    Err(e) => {
                        log::warn!("failed to load definitions from {}: {}", path.display(), e);
                    }
                }
            }
        }

        Ok(count)
    }

    /// Load definitions from all registered search paths.
    pub fn load_all(&mut self) -> Result<usize, RegistryError> {
        let mut count = 0;
        let paths = self.search_paths.clone();
        for path in &paths {
            count += self.load_directory(path)?;
        }
        Ok(count)
    }

    /// Resolve a definition by its namespaced id, applying alias resolution.
    pub fn resolve(&self, id: &str) -> Option<&StrategyDef> {
        let resolved_id = self.resolve_alias(id);
        self.defs.get(&resolved_id)
    }

    /// Resolve a definition or fail with [`RegistryError::UnknownStrategy`].
    pub fn require(&self, id: &str) -> Result<&StrategyDef, RegistryError> {
        self.resolve(id).ok_or_else(|| RegistryError::UnknownStrategy {
            id: id.to_string(),
        })
    }

    /// List all registered definitions.
    pub fn list(&self) -> Vec<&StrategyDef> {
        self.defs.values().collect()
    }

    /// List definitions by namespace.
    pub fn list_by_namespace(&self, namespace: &str) -> Vec<&StrategyDef> {
        let resolved = self
            .aliases
            .get(namespace)
            .cloned()
            .unwrap_or_else(|| namespace.to_string());
        self.defs
            .values()
            .filter(|d| d.namespace() == resolved)
            .collect()
    }

    /// Search definitions by tag.
    pub fn search_by_tag(&self, tag: &str) -> Vec<&StrategyDef> {
        self.defs.values().filter(|d| d.has_tag(tag)).collect()
    }

    /// Get the total number of registered definitions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Resolve aliases in an id.
    fn resolve_alias(&self, id: &str) -> String {
        let parts: Vec<&str> = id.splitn(2, ':').collect();
        if parts.len() == 2 {
            let namespace = parts[0];
            let name = parts[1];
            if let Some(target) = self.aliases.get(namespace) {
                return format!("{}:{}", target, name);
            }
        }
        id.to_string()
    }
}
