//! State shared by the operations of one invocation

use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

use crate::catalog::CatalogStore;
use crate::config::Settings;
use crate::error::{McpkgError, Result};
use crate::installer::target::resolve_datapacks_dir;
use crate::installer::{InstallManager, PromptConfirm};
use crate::pack::PackType;
use crate::remote::{HttpTransport, Transport};

/// Everything one command needs: settings, network, catalog and installer
pub struct Session {
    pub settings: Settings,
    pub transport: Rc<dyn Transport>,
    pub catalog: CatalogStore,
    pub installer: InstallManager,
    path: PathBuf,
    explicit_path: bool,
}

impl Session {
    /// Session backed by the user's configuration, HTTP and a terminal prompt
    ///
    /// `path` is the candidate directory for target resolution; the current
    /// directory when `None`.
    pub fn open(path: Option<PathBuf>) -> Result<Self> {
        let settings = Settings::load()?;
        let transport: Rc<dyn Transport> = Rc::new(HttpTransport::new()?);
        let catalog = CatalogStore::from_settings(&settings, Rc::clone(&transport))?;
        let installer = InstallManager::new(Box::new(PromptConfirm), settings.resource_packs_dir()?);

        let explicit_path = path.is_some();
        let path = match path {
            Some(path) => path,
            None => std::env::current_dir().map_err(|e| McpkgError::IoError {
                message: format!("Failed to get current directory: {e}"),
            })?,
        };

        Ok(Self::new(settings, transport, catalog, installer, path, explicit_path))
    }

    pub fn new(
        settings: Settings,
        transport: Rc<dyn Transport>,
        catalog: CatalogStore,
        installer: InstallManager,
        path: PathBuf,
        explicit_path: bool,
    ) -> Self {
        Self {
            settings,
            transport,
            catalog,
            installer,
            path,
            explicit_path,
        }
    }

    /// The datapacks directory for the candidate path
    pub fn world_target(&self) -> Result<PathBuf> {
        resolve_datapacks_dir(&self.path)
    }

    /// Like [`Self::world_target`], but outside a world without `--path` there is none
    pub fn optional_world_target(&self) -> Result<Option<PathBuf>> {
        match self.world_target() {
            Ok(target) => Ok(Some(target)),
            Err(McpkgError::InvalidTarget { .. }) if !self.explicit_path => {
                debug!("'{}' is not a world, only resource packs apply", self.path.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Install directory for a pack type
    pub fn target_for(&self, pack_type: PackType) -> Result<PathBuf> {
        match pack_type {
            PackType::Resource => Ok(self.installer.resource_dir().to_path_buf()),
            PackType::Data | PackType::Crafting => self.world_target(),
        }
    }
}
