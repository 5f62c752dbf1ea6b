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

//! # Ember Library Loading
//!
//! Plugins may augment their code-loading context with auxiliary native
//! libraries at runtime. This module provides the two pieces involved:
//!
//! - [`EmCLibraryPatternSet`]: the externally-supplied matching rules
//!   deciding which file names are acceptable library types
//! - [`EmCCodeLoadingContext`]: the append-only registry of library
//!   locations from which the process resolves additional symbols
//!
//! Appending is irreversible for the lifetime of the plugin instance;
//! there is no unload. A loaded library executes with the full privilege
//! of the host process.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use libloading::Library;
use regex::Regex;

use crate::errors::{EmError, Result};

/// Ordered set of matching rules for acceptable library file names.
///
/// Rules are matched against the bare file name, not the full path, and
/// succeed when a pattern matches anywhere in the name. An empty set
/// matches nothing.
#[derive(Clone, Debug, Default)]
pub struct EmCLibraryPatternSet {
    patterns: Vec<Regex>,
}

impl EmCLibraryPatternSet {
    pub fn new(patterns: Vec<Regex>) -> Self {
        EmCLibraryPatternSet { patterns }
    }

    /// Compiles a set from raw pattern strings.
    pub fn compile<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for pattern in patterns {
            let regex = Regex::new(pattern.as_ref()).map_err(|err| {
                EmError::validation(format!(
                    "invalid library pattern '{}': {}",
                    pattern.as_ref(),
                    err
                ))
            })?;
            compiled.push(regex);
        }
        Ok(EmCLibraryPatternSet::new(compiled))
    }

    /// The host convention: native dynamic-library suffixes for the
    /// platforms Ember runs on.
    pub fn platform_default() -> Self {
        EmCLibraryPatternSet::compile([r"\.so$", r"\.dylib$", r"\.dll$"]).unwrap()
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(file_name))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// One registered library location and its lazily-opened handle.
#[derive(Debug)]
struct EmCLibraryEntry {
    location: PathBuf,
    handle: Option<Library>,
}

/// Append-only registry of library locations backing a plugin's code
/// resolution.
///
/// Appending records the canonicalized location only; the underlying
/// library is opened on first symbol resolution and stays open for the
/// lifetime of the context. Because nothing is ever unloaded, function
/// pointers copied out of [`EmCCodeLoadingContext::resolve`] remain
/// valid as long as the context is alive.
#[derive(Debug, Default)]
pub struct EmCCodeLoadingContext {
    entries: Mutex<Vec<EmCLibraryEntry>>,
}

impl EmCCodeLoadingContext {
    pub fn new() -> Self {
        EmCCodeLoadingContext {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Appends a library location to the context.
    ///
    /// The file's path must be convertible into a loadable reference;
    /// canonicalization failure maps to
    /// [`EmError::MalformedLibraryLocation`]. The library itself is not
    /// opened here.
    pub fn append(&self, file: &Path) -> Result<()> {
        let location = file
            .canonicalize()
            .map_err(|err| EmError::MalformedLibraryLocation {
                path: file.display().to_string(),
                message: err.to_string(),
            })?;

        let mut entries = self.entries.lock().unwrap();
        log::debug!(
            "plugin.library.append: library location registered - location={}, slot={}",
            location.display(),
            entries.len()
        );
        entries.push(EmCLibraryEntry {
            location,
            handle: None,
        });
        Ok(())
    }

    /// Resolves a symbol from the registered libraries, in append order.
    ///
    /// Libraries are opened lazily; one that fails to open is logged and
    /// skipped so a single bad entry cannot poison the whole context.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `T` matches the actual type of the
    /// exported symbol. `T` is copied out of the library, so it must be
    /// a plain function pointer or other `Copy` value.
    pub unsafe fn resolve<T: Copy>(&self, symbol: &[u8]) -> Result<T> {
        let mut entries = self.entries.lock().unwrap();
        for entry in entries.iter_mut() {
            if entry.handle.is_none() {
                match Library::new(&entry.location) {
                    Ok(library) => entry.handle = Some(library),
                    Err(err) => {
                        log::warn!(
                            "plugin.library.open_failed: skipping unopenable library - location={}, error={}",
                            entry.location.display(),
                            err
                        );
                        continue;
                    }
                }
            }

            // Entries without a handle were skipped above.
            let library = entry.handle.as_ref().unwrap();
            if let Ok(found) = library.get::<T>(symbol) {
                return Ok(*found);
            }
        }

        Err(EmError::internal(format!(
            "symbol '{}' not found in any registered library",
            String::from_utf8_lossy(symbol)
        )))
    }

    /// Snapshot of the registered library locations, in append order.
    pub fn locations(&self) -> Vec<PathBuf> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|entry| entry.location.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}
