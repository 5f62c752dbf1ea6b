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

//! # Ember Plugin Lifecycle
//!
//! A bound plugin moves through `Unloaded → Loaded → Enabled ⇄ Disabled`,
//! with reload as a re-entrant action available from either of the last
//! two states. Transitions are driven exclusively by the host through
//! the `EmFFire*` dispatch functions; the controller never schedules
//! anything on its own.
//!
//! Hook failures propagate to the host unchanged: no retry, no automatic
//! disable. Recovery policy belongs to the host.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::errors::{EmError, Result};
use crate::plugin::EmCPlugin;

/// Plugin lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmCPluginState {
    Unloaded,
    Loaded,
    Enabled,
    Disabled,
}

impl EmCPluginState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmCPluginState::Unloaded => "unloaded",
            EmCPluginState::Loaded => "loaded",
            EmCPluginState::Enabled => "enabled",
            EmCPluginState::Disabled => "disabled",
        }
    }
}

/// Owner of a plugin instance's enabled flag and lifecycle state.
///
/// `set_enabled` is a plain cooperative accessor: the host is the sole
/// authorized mutator, but nothing here enforces that authorization.
#[derive(Debug)]
pub struct EmCLifecycleController {
    enabled: AtomicBool,
    state: Mutex<EmCPluginState>,
}

impl Default for EmCLifecycleController {
    fn default() -> Self {
        EmCLifecycleController::new()
    }
}

impl EmCLifecycleController {
    pub fn new() -> Self {
        EmCLifecycleController {
            enabled: AtomicBool::new(false),
            state: Mutex::new(EmCPluginState::Unloaded),
        }
    }

    // The flag guards no other memory, so relaxed ordering suffices.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn state(&self) -> EmCPluginState {
        *self.state.lock().unwrap()
    }

    fn mark(&self, state: EmCPluginState) {
        *self.state.lock().unwrap() = state;
    }
}

fn _expect_state(
    plugin: &dyn EmCPlugin,
    operation: &str,
    allowed: &[EmCPluginState],
) -> Result<()> {
    let base = plugin.base();
    if !base.is_initialized() {
        return Err(EmError::not_initialized(operation));
    }
    let current = base.lifecycle().state();
    if !allowed.contains(&current) {
        return Err(EmError::validation(format!(
            "cannot dispatch '{}' while plugin is {}",
            operation,
            current.as_str()
        )));
    }
    Ok(())
}

fn _log_transition(plugin: &dyn EmCPlugin, event: &str, message: &str) {
    if let Ok(context) = plugin.base().context() {
        context.logger().debug(event, message);
    }
}

/// Dispatches the load hook: `Unloaded → Loaded`.
///
/// Invoked once by the host after initialization, before the plugin is
/// exposed to other plugins.
pub fn EmFFireLoad(plugin: &mut dyn EmCPlugin) -> Result<()> {
    _expect_state(&*plugin, "on_load", &[EmCPluginState::Unloaded])?;
    plugin.on_load()?;
    plugin.base().lifecycle().mark(EmCPluginState::Loaded);
    _log_transition(&*plugin, "plugin.lifecycle.load", "load hook completed");
    Ok(())
}

/// Dispatches the enable hook: `Loaded | Disabled → Enabled`.
///
/// The enabled flag flips only after the hook succeeds; a failed
/// `on_enable` leaves state and flag untouched for the host to decide
/// recovery.
pub fn EmFFireEnable(plugin: &mut dyn EmCPlugin) -> Result<()> {
    _expect_state(
        &*plugin,
        "on_enable",
        &[EmCPluginState::Loaded, EmCPluginState::Disabled],
    )?;
    plugin.on_enable()?;
    let controller = plugin.base().lifecycle();
    controller.mark(EmCPluginState::Enabled);
    controller.set_enabled(true);
    _log_transition(&*plugin, "plugin.lifecycle.enable", "plugin enabled");
    Ok(())
}

/// Dispatches the disable hook: `Enabled → Disabled`.
pub fn EmFFireDisable(plugin: &mut dyn EmCPlugin) -> Result<()> {
    _expect_state(&*plugin, "on_disable", &[EmCPluginState::Enabled])?;
    plugin.on_disable()?;
    let controller = plugin.base().lifecycle();
    controller.mark(EmCPluginState::Disabled);
    controller.set_enabled(false);
    _log_transition(&*plugin, "plugin.lifecycle.disable", "plugin disabled");
    Ok(())
}

/// Dispatches the reload hook from `Enabled` or `Disabled`.
///
/// Reload is a transient action: it refreshes configuration without an
/// enable/disable cycle and leaves state and flag as they were.
pub fn EmFFireReload(plugin: &mut dyn EmCPlugin) -> Result<()> {
    _expect_state(
        &*plugin,
        "on_reload",
        &[EmCPluginState::Enabled, EmCPluginState::Disabled],
    )?;
    plugin.on_reload()?;
    _log_transition(&*plugin, "plugin.lifecycle.reload", "reload hook completed");
    Ok(())
}
