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

//! # Ember Runtime Context
//!
//! The runtime context is the immutable-after-init bundle every other
//! component reads from: host handle, descriptor, data directory,
//! package file path, code-loading context, and the plugin-bound
//! logging sink. The external plugin loader constructs it exactly once
//! per plugin instance, before any lifecycle hook fires.
//!
//! [`EmCContextCell`] guards the one-time contract: installing twice
//! fails with `AlreadyInitialized`, reading before install fails with
//! `NotInitialized`.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::descriptor::EmCPluginDescriptor;
use crate::engine::EmCEngine;
use crate::errors::{EmError, Result};
use crate::library::EmCCodeLoadingContext;
use crate::loader::EmCPluginLoader;
use crate::logger::EmCPluginLogger;

/// Immutable bundle backing one bound plugin instance.
pub struct EmCRuntimeContext {
    loader: Arc<EmCPluginLoader>,
    engine: Arc<dyn EmCEngine>,
    descriptor: EmCPluginDescriptor,
    data_folder: PathBuf,
    package_file: PathBuf,
    code_context: Arc<EmCCodeLoadingContext>,
    logger: EmCPluginLogger,
}

impl EmCRuntimeContext {
    /// Assembles the context and binds the logging sink to the plugin
    /// named by the descriptor.
    pub fn new(
        loader: Arc<EmCPluginLoader>,
        engine: Arc<dyn EmCEngine>,
        descriptor: EmCPluginDescriptor,
        data_folder: PathBuf,
        package_file: PathBuf,
        code_context: Arc<EmCCodeLoadingContext>,
    ) -> Self {
        let logger = EmCPluginLogger::new(descriptor.name());
        EmCRuntimeContext {
            loader,
            engine,
            descriptor,
            data_folder,
            package_file,
            code_context,
            logger,
        }
    }

    pub fn loader(&self) -> &Arc<EmCPluginLoader> {
        &self.loader
    }

    pub fn engine(&self) -> &dyn EmCEngine {
        self.engine.as_ref()
    }

    pub fn descriptor(&self) -> &EmCPluginDescriptor {
        &self.descriptor
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    pub fn package_file(&self) -> &Path {
        &self.package_file
    }

    pub fn code_context(&self) -> &Arc<EmCCodeLoadingContext> {
        &self.code_context
    }

    pub fn logger(&self) -> &EmCPluginLogger {
        &self.logger
    }
}

/// Once-only installation slot for a plugin's runtime context.
#[derive(Default)]
pub struct EmCContextCell {
    slot: OnceLock<EmCRuntimeContext>,
}

impl EmCContextCell {
    pub fn new() -> Self {
        EmCContextCell {
            slot: OnceLock::new(),
        }
    }

    /// Installs the context. A second call fails with
    /// [`EmError::AlreadyInitialized`] naming the plugin that is
    /// already bound, and leaves the first context untouched.
    pub fn install(&self, context: EmCRuntimeContext) -> Result<()> {
        if self.slot.set(context).is_err() {
            let bound = self
                .slot
                .get()
                .map(|installed| installed.descriptor().name().to_string())
                .unwrap_or_default();
            return Err(EmError::AlreadyInitialized { plugin: bound });
        }
        Ok(())
    }

    /// Reads the installed context, naming the attempted operation in
    /// the error when initialization has not happened yet.
    pub fn get(&self, operation: &str) -> Result<&EmCRuntimeContext> {
        self.slot
            .get()
            .ok_or_else(|| EmError::not_initialized(operation))
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}
