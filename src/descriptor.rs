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

//! Plugin descriptor metadata.
//!
//! A descriptor identifies one plugin: name, version, and free-form
//! metadata. Descriptors are produced by the external plugin loader
//! (discovery and file parsing live there, not here) and consumed
//! read-only by the runtime context. `Deserialize` is derived so the
//! loader can map descriptor files straight onto these types.

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::errors::{EmError, Result};

/// Plugin version information.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct EmCPluginVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre_release: Option<String>,
}

impl EmCPluginVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        EmCPluginVersion {
            major,
            minor,
            patch,
            pre_release: None,
        }
    }

    pub fn parse(version_str: &str) -> Result<Self> {
        let parts: Vec<&str> = version_str.split('.').collect();
        if parts.len() < 3 {
            return Err(EmError::validation(
                "Invalid version format, expected major.minor.patch",
            ));
        }

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| EmError::validation("Invalid major version"))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| EmError::validation("Invalid minor version"))?;

        let (patch, pre_release) = if let Some(dash_pos) = parts[2].find('-') {
            let patch_str = &parts[2][..dash_pos];
            let pre_str = &parts[2][dash_pos + 1..];
            let patch = patch_str
                .parse::<u32>()
                .map_err(|_| EmError::validation("Invalid patch version"))?;
            (patch, Some(pre_str.to_string()))
        } else {
            let patch = parts[2]
                .parse::<u32>()
                .map_err(|_| EmError::validation("Invalid patch version"))?;
            (patch, None)
        };

        Ok(EmCPluginVersion {
            major,
            minor,
            patch,
            pre_release,
        })
    }
}

impl fmt::Display for EmCPluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pre_release {
            Some(pre) => write!(f, "{}.{}.{}-{}", self.major, self.minor, self.patch, pre),
            None => write!(f, "{}.{}.{}", self.major, self.minor, self.patch),
        }
    }
}

impl<'de> Deserialize<'de> for EmCPluginVersion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        EmCPluginVersion::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Read-only metadata record identifying a plugin.
#[derive(Clone, Debug, Deserialize)]
pub struct EmCPluginDescriptor {
    pub name: String,
    pub version: EmCPluginVersion,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl EmCPluginDescriptor {
    /// Assemble a descriptor programmatically. Hosts and tests use this;
    /// production descriptors normally arrive through the external
    /// loader's file parsing.
    pub fn new(name: impl Into<String>, version: EmCPluginVersion) -> Self {
        EmCPluginDescriptor {
            name: name.into(),
            version,
            description: None,
            authors: Vec::new(),
            website: None,
        }
    }

    /// The plugin's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &EmCPluginVersion {
        &self.version
    }
}
