// src/core/registry.rs
use crate::core::catalog::{Catalog, ItemSource};
use crate::error::EngineError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io;

/// Process-wide map from catalog identifier to its one `Catalog` instance.
///
/// Lookups never fail: an unknown identifier runs the collaborator-supplied
/// loader exactly once and the result lives for the rest of the process.
/// No deletion; entries stay for the process lifetime.
#[derive(Default)]
pub struct CatalogRegistry {
    catalogs: HashMap<String, Catalog>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the catalog for `identifier`, loading it on first reference.
    /// A loader failure leaves the registry unchanged, so a later call may
    /// retry with a working loader.
    pub fn get_or_create<F>(
        &mut self,
        identifier: &str,
        loader: F,
    ) -> Result<&mut Catalog, EngineError>
    where
        F: FnOnce(&str) -> io::Result<Vec<ItemSource>>,
    {
        match self.catalogs.entry(identifier.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let sources = loader(identifier)?;
                Ok(entry.insert(Catalog::new(identifier, sources)))
            }
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&Catalog> {
        self.catalogs.get(identifier)
    }
}
