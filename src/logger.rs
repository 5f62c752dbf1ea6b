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

//! Plugin-scoped logging sink.
//!
//! One [`EmCPluginLogger`] is constructed per plugin instance during
//! `initialize` and handed to every component through the runtime
//! context. Records go through the standard `log` facade; which sinks
//! receive them is the host's concern.

/// Named logging sink bound to a single plugin instance.
///
/// Every record carries the owning plugin as a structured field, so host
/// operators can filter a single plugin out of a shared process log.
#[derive(Clone, Debug)]
pub struct EmCPluginLogger {
    plugin: String,
}

impl EmCPluginLogger {
    pub fn new(plugin: impl Into<String>) -> Self {
        EmCPluginLogger {
            plugin: plugin.into(),
        }
    }

    /// Name of the plugin this sink is bound to.
    pub fn name(&self) -> &str {
        &self.plugin
    }

    pub fn debug(&self, event: &str, message: impl AsRef<str>) {
        log::debug!("{}: {} - plugin={}", event, message.as_ref(), self.plugin);
    }

    pub fn info(&self, event: &str, message: impl AsRef<str>) {
        log::info!("{}: {} - plugin={}", event, message.as_ref(), self.plugin);
    }

    pub fn warn(&self, event: &str, message: impl AsRef<str>) {
        log::warn!("{}: {} - plugin={}", event, message.as_ref(), self.plugin);
    }

    pub fn error(&self, event: &str, message: impl AsRef<str>) {
        log::error!("{}: {} - plugin={}", event, message.as_ref(), self.plugin);
    }
}
