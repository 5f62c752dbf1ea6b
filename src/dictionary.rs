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

//! # Ember Plugin Dictionary
//!
//! Plugin-scoped keyed text lookup, typically for localized strings.
//! The dictionary is built once from the runtime context: the package
//! archive is scanned for `lang/<code>.yml` tables, each a flat
//! `key: text` map. Construction is deterministic and tolerant — a
//! package without language tables yields an empty dictionary, and a
//! malformed table is logged and skipped rather than failing the whole
//! build. What a lookup miss means is the caller's concern.

use std::collections::HashMap;

use crate::context::EmCRuntimeContext;
use crate::resources::EmCResourceAccessor;

/// Language table consulted when no explicit language is requested.
pub const EM_DEFAULT_LANGUAGE: &str = "en";

/// Keyed translated-text lookup for one plugin.
#[derive(Debug, Default)]
pub struct EmCDictionary {
    tables: HashMap<String, HashMap<String, String>>,
}

impl EmCDictionary {
    /// Builds the dictionary from the plugin's package archive.
    pub fn from_context(context: &EmCRuntimeContext) -> Self {
        let accessor = EmCResourceAccessor::new(context.package_file());
        let mut tables: HashMap<String, HashMap<String, String>> = HashMap::new();

        let names = match accessor.entry_names() {
            Ok(names) => names,
            Err(err) => {
                context.logger().warn(
                    "plugin.dictionary.scan_failed",
                    format!("no language tables available: {}", err),
                );
                return EmCDictionary { tables };
            }
        };

        for name in names {
            let code = match _language_code(&name) {
                Some(code) => code.to_string(),
                None => continue,
            };

            match accessor.get_resource(&name) {
                Ok(Some(stream)) => {
                    match serde_yaml::from_reader::<_, HashMap<String, String>>(stream) {
                        Ok(table) => {
                            tables.insert(code, table);
                        }
                        Err(err) => context.logger().warn(
                            "plugin.dictionary.table_malformed",
                            format!("skipping '{}': {}", name, err),
                        ),
                    }
                }
                Ok(None) => {}
                Err(err) => context.logger().warn(
                    "plugin.dictionary.table_unreadable",
                    format!("skipping '{}': {}", name, err),
                ),
            }
        }

        EmCDictionary { tables }
    }

    /// Looks up `key` in the default language table.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_in(EM_DEFAULT_LANGUAGE, key)
    }

    /// Looks up `key` in the table for `lang`.
    pub fn get_in(&self, lang: &str, key: &str) -> Option<&str> {
        self.tables
            .get(lang)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Language codes with a loaded table, sorted for determinism.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Total number of keys across all language tables.
    pub fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extracts the language code from a `lang/<code>.yml` entry name.
fn _language_code(entry_name: &str) -> Option<&str> {
    let rest = entry_name.strip_prefix("lang/")?;
    if rest.contains('/') {
        return None;
    }
    rest.strip_suffix(".yml").or_else(|| rest.strip_suffix(".yaml"))
}
