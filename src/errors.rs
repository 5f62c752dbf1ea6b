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

//! # Ember Error Module
//!
//! This module defines the error types used throughout the Ember plugin
//! core for consistent error handling and reporting.
//!
//! ## Error Categories
//!
//! - **Io**: Filesystem failures during resource extraction or copy
//! - **NotInitialized / AlreadyInitialized**: Violations of the one-time
//!   initialization contract of a plugin instance
//! - **ResourceNotFound**: Package archive entry absent
//! - **LibraryNotFound / UnsupportedLibraryType / MalformedLibraryLocation**:
//!   Failures while appending a code library to the loading context
//! - **Validation**: Invalid parameters or lifecycle transitions
//! - **Zip**: Package archive operation errors
//! - **Serde**: Descriptor or dictionary deserialization errors
//! - **Internal**: Unexpected internal failures
//!
//! All failures surface synchronously to the caller; nothing here is
//! retried or swallowed.

use std::io;

use thiserror::Error;
use zip::result::ZipError;

/// Convience result type used throughout Ember Core.
pub type Result<T> = std::result::Result<T, EmError>;

/// Canonical error enumeration for Ember Core.
#[derive(Debug, Error)]
pub enum EmError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// An operation required the runtime context before `initialize` ran.
    #[error("plugin not initialized: operation '{operation}' requires a bound runtime context")]
    NotInitialized { operation: String },

    /// A second `initialize` call on an already-bound plugin instance.
    #[error("plugin '{plugin}' is already initialized")]
    AlreadyInitialized { plugin: String },

    /// The named package archive entry does not exist.
    #[error("unknown resource: {path}")]
    ResourceNotFound { path: String },

    /// The library file does not exist on disk.
    #[error("failed to load library: the file '{path}' does not exist")]
    LibraryNotFound { path: String },

    /// The library file name matches no registered pattern.
    #[error("failed to load library: the file '{file}' is not a supported library file type")]
    UnsupportedLibraryType { file: String },

    /// The library path could not be turned into a loadable reference.
    #[error("failed to load library '{path}': {message}")]
    MalformedLibraryLocation { path: String, message: String },

    /// Validation errors triggered by invalid parameters or transitions.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Errors originating from package archive operations.
    #[error("zip error: {0}")]
    Zip(String),

    /// Wrapper for serde-style deserialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for EmError {
    fn from(err: io::Error) -> Self {
        EmError::Io(err.to_string())
    }
}

impl From<ZipError> for EmError {
    fn from(err: ZipError) -> Self {
        EmError::Zip(err.to_string())
    }
}

impl From<serde_json::Error> for EmError {
    fn from(err: serde_json::Error) -> Self {
        EmError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for EmError {
    fn from(err: serde_yaml::Error) -> Self {
        EmError::Serde(err.to_string())
    }
}

impl EmError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        EmError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct pre-initialization errors.
    pub fn not_initialized(operation: impl Into<String>) -> Self {
        EmError::NotInitialized {
            operation: operation.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        EmError::Internal(message.into())
    }
}
