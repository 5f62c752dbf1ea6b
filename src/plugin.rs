//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ember.
//! The Ember project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Ember Plugin Contract
//!
//! The [`EmCPlugin`] trait is the capability interface a plugin author
//! implements: `on_enable` and `on_disable` are required, `on_load` and
//! `on_reload` default to no-ops. [`EmCPluginBase`] is the concrete
//! per-instance state an implementation embeds — it carries the
//! one-time runtime context, the lifecycle controller, and the cached
//! dictionary, and provides every accessor the host and the plugin's
//! own code reach for during the lifecycle hooks.
//!
//! # Example
//!
//! ```ignore
//! use emberx::{EmCPlugin, EmCPluginBase, Result};
//!
//! #[derive(Default)]
//! struct Shipyard {
//!     base: EmCPluginBase,
//! }
//!
//! impl EmCPlugin for Shipyard {
//!     fn base(&self) -> &EmCPluginBase {
//!         &self.base
//!     }
//!
//!     fn on_enable(&mut self) -> Result<()> {
//!         self.base.extract_resource("config/default.yml", &self.base.data_folder()?.join("config.yml"))?;
//!         Ok(())
//!     }
//!
//!     fn on_disable(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//! }
//! ```

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::context::{EmCContextCell, EmCRuntimeContext};
use crate::descriptor::EmCPluginDescriptor;
use crate::dictionary::EmCDictionary;
use crate::engine::{EmCEngine, EmCWorldGenerator};
use crate::errors::{EmError, Result};
use crate::library::EmCCodeLoadingContext;
use crate::lifecycle::EmCLifecycleController;
use crate::loader::EmCPluginLoader;
use crate::logger::EmCPluginLogger;
use crate::resources::EmCResourceAccessor;

/// Capability interface implemented by every plugin.
///
/// The host drives the four lifecycle hooks through the dispatch
/// functions in [`crate::lifecycle`]; hook errors propagate to the host
/// unchanged.
pub trait EmCPlugin: Send {
    /// The per-instance base state embedded by the implementation.
    fn base(&self) -> &EmCPluginBase;

    /// Invoked when the host activates the plugin. Must leave the
    /// plugin operational or signal failure.
    fn on_enable(&mut self) -> Result<()>;

    /// Invoked when the host deactivates the plugin. Must release
    /// whatever `on_enable` acquired.
    fn on_disable(&mut self) -> Result<()>;

    /// Invoked once after initialization, before the plugin is exposed
    /// to other plugins.
    fn on_load(&mut self) -> Result<()> {
        Ok(())
    }

    /// Invoked to refresh configuration without an enable/disable
    /// cycle.
    fn on_reload(&mut self) -> Result<()> {
        Ok(())
    }

    /// Extension point for world generation requests from the host.
    ///
    /// The default answers nothing: it logs the unknown request (its
    /// sole defined behavior) and returns `None`.
    fn world_generator(
        &self,
        world: &str,
        generator: &str,
    ) -> Option<Arc<dyn EmCWorldGenerator>> {
        if let Ok(logger) = self.base().logger() {
            logger.error(
                "plugin.world_generator.unknown",
                format!("unknown generator '{}' for world '{}'", generator, world),
            );
        }
        None
    }
}

/// Concrete per-instance plugin state.
///
/// Everything except the enabled flag is immutable after `initialize`;
/// the external plugin loader calls `initialize` exactly once before
/// any lifecycle hook fires.
#[derive(Default)]
pub struct EmCPluginBase {
    cell: EmCContextCell,
    lifecycle: EmCLifecycleController,
    dictionary: OnceLock<Arc<EmCDictionary>>,
}

impl EmCPluginBase {
    pub fn new() -> Self {
        EmCPluginBase {
            cell: EmCContextCell::new(),
            lifecycle: EmCLifecycleController::new(),
            dictionary: OnceLock::new(),
        }
    }

    /// Binds the runtime context to this plugin instance.
    ///
    /// Callable exactly once, by the external plugin loader, before any
    /// lifecycle hook. Constructs the plugin-bound logging sink and the
    /// dictionary binding (resolved lazily on first access). A second
    /// call fails with [`EmError::AlreadyInitialized`] and leaves the
    /// first context untouched.
    pub fn initialize(
        &self,
        loader: Arc<EmCPluginLoader>,
        engine: Arc<dyn EmCEngine>,
        descriptor: EmCPluginDescriptor,
        data_folder: PathBuf,
        package_file: PathBuf,
        code_context: Arc<EmCCodeLoadingContext>,
    ) -> Result<()> {
        let context = EmCRuntimeContext::new(
            loader,
            engine,
            descriptor,
            data_folder,
            package_file,
            code_context,
        );
        self.cell.install(context)?;

        let context = self.cell.get("initialize")?;
        context.logger().info(
            "plugin.initialize",
            format!(
                "runtime context bound - version={}",
                context.descriptor().version()
            ),
        );
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.is_initialized()
    }

    /// The full runtime context.
    pub fn context(&self) -> Result<&EmCRuntimeContext> {
        self.cell.get("context")
    }

    /// Handle to the host engine.
    pub fn engine(&self) -> Result<&dyn EmCEngine> {
        Ok(self.cell.get("engine")?.engine())
    }

    /// The plugin's descriptor.
    pub fn description(&self) -> Result<&EmCPluginDescriptor> {
        Ok(self.cell.get("description")?.descriptor())
    }

    /// Handle to the external plugin loader.
    pub fn loader(&self) -> Result<&Arc<EmCPluginLoader>> {
        Ok(self.cell.get("loader")?.loader())
    }

    /// The plugin's data directory.
    pub fn data_folder(&self) -> Result<&Path> {
        Ok(self.cell.get("data_folder")?.data_folder())
    }

    /// Path of the plugin's package archive.
    pub fn file(&self) -> Result<&Path> {
        Ok(self.cell.get("file")?.package_file())
    }

    /// The plugin's display name, as supplied by the descriptor.
    pub fn name(&self) -> Result<&str> {
        Ok(self.cell.get("name")?.descriptor().name())
    }

    /// The logging sink bound to this plugin.
    pub fn logger(&self) -> Result<&EmCPluginLogger> {
        Ok(self.cell.get("logger")?.logger())
    }

    /// The plugin's code-loading context.
    pub fn code_context(&self) -> Result<&Arc<EmCCodeLoadingContext>> {
        Ok(self.cell.get("code_context")?.code_context())
    }

    /// The lifecycle controller owning the enabled flag.
    pub fn lifecycle(&self) -> &EmCLifecycleController {
        &self.lifecycle
    }

    pub fn is_enabled(&self) -> bool {
        self.lifecycle.is_enabled()
    }

    /// Host-driven flag mutation. Cooperative contract: the host is the
    /// sole authorized mutator.
    pub fn set_enabled(&self, enabled: bool) {
        self.lifecycle.set_enabled(enabled);
    }

    /// Opens the package archive fresh and returns a stream over the
    /// named entry, or `None` when the entry does not exist.
    pub fn get_resource(&self, path: &str) -> Result<Option<Cursor<Vec<u8>>>> {
        let context = self.cell.get("get_resource")?;
        EmCResourceAccessor::new(context.package_file()).get_resource(path)
    }

    /// Extracts the named entry to `destination`, creating parent
    /// directories and overwriting any existing file.
    pub fn extract_resource(&self, path: &str, destination: &Path) -> Result<()> {
        let context = self.cell.get("extract_resource")?;
        EmCResourceAccessor::new(context.package_file()).extract_resource(path, destination)
    }

    /// Appends a library file to the plugin's code-loading context.
    ///
    /// Validation order: the file must exist on disk
    /// ([`EmError::LibraryNotFound`]), its bare name must match a rule
    /// in the loader's pattern set
    /// ([`EmError::UnsupportedLibraryType`]), and its path must convert
    /// into a loadable reference
    /// ([`EmError::MalformedLibraryLocation`]). Appending is
    /// irreversible for the lifetime of the instance.
    pub fn load_library(&self, file: &Path) -> Result<()> {
        let context = self.cell.get("load_library")?;

        if !file.exists() {
            return Err(EmError::LibraryNotFound {
                path: file.display().to_string(),
            });
        }

        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !context.loader().patterns().matches(&file_name) {
            return Err(EmError::UnsupportedLibraryType { file: file_name });
        }

        context.code_context().append(file)?;
        context.logger().debug(
            "plugin.library.loaded",
            format!("library appended - file={}", file_name),
        );
        Ok(())
    }

    /// The plugin-scoped dictionary, built on first access and cached
    /// for the instance's lifetime. Repeated calls return the same
    /// instance.
    pub fn dictionary(&self) -> Result<Arc<EmCDictionary>> {
        let context = self.cell.get("dictionary")?;
        let dictionary = self
            .dictionary
            .get_or_init(|| Arc::new(EmCDictionary::from_context(context)));
        Ok(Arc::clone(dictionary))
    }
}
