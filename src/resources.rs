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

//! # Ember Resource Access
//!
//! Read access to a plugin's package archive. Every call opens the
//! archive fresh and releases the handle before returning, so resource
//! access is freely re-entrant across threads within an enabled plugin.
//!
//! `get_resource` copies the entry's bytes out before the archive handle
//! closes; the returned stream stays readable indefinitely and never
//! dangles into a closed archive.

use std::fs::{self, File};
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::errors::{EmError, Result};

/// Cheap view over one plugin's package archive.
#[derive(Clone, Debug)]
pub struct EmCResourceAccessor {
    package: PathBuf,
}

impl EmCResourceAccessor {
    pub fn new(package: impl Into<PathBuf>) -> Self {
        EmCResourceAccessor {
            package: package.into(),
        }
    }

    pub fn package(&self) -> &Path {
        &self.package
    }

    /// Looks up the entry named by `path` (forward-slash delimited) and
    /// returns a readable stream positioned at its start, or `None` when
    /// the entry does not exist.
    ///
    /// Failure to open or read the archive itself is an error; only
    /// entry absence maps to `None`.
    pub fn get_resource(&self, path: &str) -> Result<Option<Cursor<Vec<u8>>>> {
        let file = File::open(&self.package)?;
        let mut archive = ZipArchive::new(file)?;

        let mut entry = match archive.by_name(path) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let mut content = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut content)?;
        Ok(Some(Cursor::new(content)))
    }

    /// Copies the entry named by `path` to `destination`, creating
    /// parent directories as needed and overwriting any existing file.
    ///
    /// Fails with [`EmError::ResourceNotFound`] before touching the
    /// destination when the entry is absent; any I/O failure during the
    /// copy propagates.
    pub fn extract_resource(&self, path: &str, destination: &Path) -> Result<()> {
        let mut stream = self
            .get_resource(path)?
            .ok_or_else(|| EmError::ResourceNotFound {
                path: path.to_string(),
            })?;

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut output = File::create(destination)?;
        io::copy(&mut stream, &mut output)?;
        Ok(())
    }

    /// Names of every entry in the archive. Used by the dictionary scan.
    pub fn entry_names(&self) -> Result<Vec<String>> {
        let file = File::open(&self.package)?;
        let archive = ZipArchive::new(file)?;
        Ok(archive.file_names().map(str::to_string).collect())
    }
}
