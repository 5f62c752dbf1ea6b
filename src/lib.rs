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

//! # Ember Core Library
//!
//! Ember is the plugin lifecycle core for a long-lived host engine: it
//! governs how an externally-discovered extension module is bound to the
//! running host process, how its packaged resources and auxiliary code
//! libraries are exposed, and how its enabled/disabled state transitions
//! are enforced.
//!
//! ## Module Overview
//!
//! - **errors**: `EmError` taxonomy and the crate-wide `Result` alias
//! - **engine**: host-side collaborator traits (`EmCEngine`, world
//!   generator extension point)
//! - **descriptor**: read-only plugin metadata and version parsing
//! - **logger**: per-plugin logging sink over the `log` facade
//! - **library**: library file pattern set and the append-only
//!   code-loading context
//! - **context**: the immutable runtime context and its one-time
//!   installation guard
//! - **lifecycle**: state machine, enabled flag, and host-driven hook
//!   dispatch
//! - **resources**: package archive access (`get_resource`,
//!   `extract_resource`)
//! - **dictionary**: lazily-built plugin-scoped text lookup
//! - **loader**: handle to the external plugin-loading machinery
//! - **plugin**: the `EmCPlugin` contract and `EmCPluginBase` state
//!
//! ## Control Flow
//!
//! The external loader constructs a runtime context once per plugin
//! instance via `EmCPluginBase::initialize`; all other components read
//! from that context. The host then drives the lifecycle hooks through
//! `EmFFireLoad`/`EmFFireEnable`/`EmFFireDisable`/`EmFFireReload`;
//! plugin-author code calls resource access and library loading from
//! inside those hooks as needed.
//!
//! ## Error Handling
//!
//! All operations return `Result<T, EmError>`. Failures surface
//! synchronously to the caller — the plugin author's own code or the
//! host — and are never retried or swallowed internally.

#![allow(non_snake_case)]

pub mod errors;
pub mod engine;
pub mod descriptor;
pub mod logger;
pub mod library;
pub mod context;
pub mod lifecycle;
pub mod resources;
pub mod dictionary;
pub mod loader;
pub mod plugin;

pub use errors::{EmError, Result};
pub use engine::{EmCEngine, EmCWorldGenerator};
pub use descriptor::{EmCPluginDescriptor, EmCPluginVersion};
pub use logger::EmCPluginLogger;
pub use library::{EmCCodeLoadingContext, EmCLibraryPatternSet};
pub use context::{EmCContextCell, EmCRuntimeContext};
pub use lifecycle::{
    EmCLifecycleController, EmCPluginState, EmFFireDisable, EmFFireEnable, EmFFireLoad,
    EmFFireReload,
};
pub use resources::EmCResourceAccessor;
pub use dictionary::{EmCDictionary, EM_DEFAULT_LANGUAGE};
pub use loader::EmCPluginLoader;
pub use plugin::{EmCPlugin, EmCPluginBase};
