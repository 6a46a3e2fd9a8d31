use crate::error::{QueryError, Result};
use godoc_loader::Package;
use std::collections::BTreeMap;

/// The queryable documentation engine: an immutable index over the loaded
/// package set.
///
/// Built once from the loader's output and never mutated, so any number of
/// concurrent callers can query it without locking.
pub struct DocEngine {
    packages: BTreeMap<String, Package>,
}

impl DocEngine {
    /// Index loaded packages by import path.
    #[must_use]
    pub fn new(packages: Vec<Package>) -> Self {
        let packages = packages
            .into_iter()
            .map(|p| (p.import_path.clone(), p))
            .collect();
        Self { packages }
    }

    /// All loaded packages, in sorted import-path order.
    pub fn all_packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    /// Look up one package by import path.
    pub fn package(&self, import_path: &str) -> Result<&Package> {
        self.packages
            .get(import_path)
            .ok_or_else(|| QueryError::PackageNotFound {
                path: import_path.to_string(),
            })
    }

    /// Number of loaded packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
