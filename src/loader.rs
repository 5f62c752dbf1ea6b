//! Copyright © 2025 Wenze Wei. All Rights Reserved.
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

//! External plugin-loader handle.
//!
//! Discovery, descriptor parsing, and instantiation of plugin
//! implementations live outside Ember; this type is the boundary object
//! those mechanisms hand into each runtime context. Plugins consult it
//! read-only: the library pattern set drives `load_library` validation,
//! the data root anchors per-plugin data folders.

use std::path::{Path, PathBuf};

use crate::library::EmCLibraryPatternSet;

/// Handle to the external loading machinery, shared across the plugin
/// instances it created.
#[derive(Debug)]
pub struct EmCPluginLoader {
    patterns: EmCLibraryPatternSet,
    data_root: PathBuf,
}

impl EmCPluginLoader {
    /// Loader with the platform-default library patterns.
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        EmCPluginLoader {
            patterns: EmCLibraryPatternSet::platform_default(),
            data_root: data_root.into(),
        }
    }

    /// Loader with a host-supplied pattern set.
    pub fn with_patterns(data_root: impl Into<PathBuf>, patterns: EmCLibraryPatternSet) -> Self {
        EmCPluginLoader {
            patterns,
            data_root: data_root.into(),
        }
    }

    /// The ordered library file pattern set, consulted read-only.
    pub fn patterns(&self) -> &EmCLibraryPatternSet {
        &self.patterns
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Per-plugin data directory under the loader's data root.
    pub fn data_folder_for(&self, plugin_name: &str) -> PathBuf {
        self.data_root.join(plugin_name)
    }
}
