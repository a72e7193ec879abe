//! Module abstraction
//!
//! The binary reader/writer that loads an assembly into an editable in-memory
//! form (and serializes it back) is an external collaborator. resfold only
//! needs a narrow capability surface over the manifest resource table, defined
//! here as the [`ResourceModule`] trait so that any rewriting library can back
//! the engine.
//!
//! [`InMemoryModule`] is a reference implementation used by the test suite and
//! by hosts that want to dry-run the pipeline without a real rewriter.

use std::collections::BTreeMap;

/// Error type at the module seam
///
/// Backing rewriter libraries have their own error types; they cross this
/// boundary boxed and are wrapped into
/// [`EmbedFailed`](crate::error::ResfoldError::EmbedFailed) by the engine.
pub type ModuleError = Box<dyn std::error::Error + Send + Sync>;

/// Visibility of a manifest resource
///
/// Embedded satellites are implementation detail of the assembly and are
/// never meant for external linking, so the engine always embeds `Private`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceVisibility {
    Public,
    Private,
}

/// One named binary blob in an assembly's manifest resource table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedResource {
    pub name: String,
    pub visibility: ResourceVisibility,
    pub data: Vec<u8>,
}

impl EmbeddedResource {
    /// Create a private resource (the only kind the engine embeds)
    pub fn private(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            visibility: ResourceVisibility::Private,
            data,
        }
    }
}

/// Editable view over an assembly's manifest resource table
///
/// The engine borrows a module for the duration of one embed call and only
/// ever inserts, replaces or removes resources by name — it never touches
/// code, types or other metadata tables.
pub trait ResourceModule {
    /// Names of all resources currently in the manifest table
    fn resource_names(&self) -> Vec<String>;

    /// Insert a resource; the name must not already exist
    fn add_resource(&mut self, resource: EmbeddedResource) -> Result<(), ModuleError>;

    /// Remove a resource by name, returning whether it existed
    fn remove_resource(&mut self, name: &str) -> bool;

    /// Whether the save pipeline behind this module re-attaches an
    /// embedded debug symbol stream when the module is written back
    ///
    /// Rewriters commonly drop embedded symbols unless told to re-supply
    /// them; the symbol coordinator refuses to proceed under the `Embedded`
    /// policy when this returns `false`.
    fn preserves_embedded_symbols(&self) -> bool;
}

/// In-memory manifest resource table
///
/// Reference implementation of [`ResourceModule`] for tests and dry-runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryModule {
    resources: BTreeMap<String, EmbeddedResource>,
    preserves_embedded_symbols: bool,
}

impl InMemoryModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a module whose save pipeline keeps embedded symbols
    pub fn with_embedded_symbol_support() -> Self {
        Self {
            resources: BTreeMap::new(),
            preserves_embedded_symbols: true,
        }
    }

    /// Look up a resource by name
    pub fn resource(&self, name: &str) -> Option<&EmbeddedResource> {
        self.resources.get(name)
    }

    /// Number of resources in the table
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}

impl ResourceModule for InMemoryModule {
    fn resource_names(&self) -> Vec<String> {
        self.resources.keys().cloned().collect()
    }

    fn add_resource(&mut self, resource: EmbeddedResource) -> Result<(), ModuleError> {
        if self.resources.contains_key(&resource.name) {
            return Err(format!("resource '{}' already exists", resource.name).into());
        }
        self.resources.insert(resource.name.clone(), resource);
        Ok(())
    }

    fn remove_resource(&mut self, name: &str) -> bool {
        self.resources.remove(name).is_some()
    }

    fn preserves_embedded_symbols(&self) -> bool {
        self.preserves_embedded_symbols
    }
}
