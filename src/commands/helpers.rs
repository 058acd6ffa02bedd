//! Command helper utilities

use crate::catalog::{CatalogLoader, CommandCatalog, MergedCatalog};
use crate::cli::GlobalArgs;
use crate::config::ConfigPaths;
use crate::error::Result;
use crate::installer::InstallationOrchestrator;

/// Resolved configuration and catalog for one invocation
pub struct Session {
    pub paths: ConfigPaths,
    pub catalog: MergedCatalog,
    pub json: bool,
}

impl Session {
    /// Resolve the configuration directory and load the catalog
    pub fn open(global: &GlobalArgs) -> Result<Self> {
        let paths = ConfigPaths::resolve(global.config_dir.clone())?;
        let catalog = CatalogLoader::new()
            .with_directory(global.catalog_dir.clone())
            .without_builtin(global.no_builtin)
            .load()?;

        log::debug!(
            "Using {} with {} catalog command(s)",
            paths.config_dir.display(),
            catalog.all_names().len()
        );

        Ok(Self {
            paths,
            catalog,
            json: global.json,
        })
    }

    pub fn orchestrator(&self) -> InstallationOrchestrator<'_> {
        InstallationOrchestrator::new(self.paths.clone(), &self.catalog)
    }
}
