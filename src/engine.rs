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

//! Host-side collaborator traits.
//!
//! The host engine discovers, loads, and drives plugin instances; Ember
//! only ever sees it through [`EmCEngine`]. World generation is a
//! domain-specific extension point: plugins may answer a generator
//! request, the host consumes whatever they return.

/// Handle to the long-lived host process driving plugin instances.
///
/// Shared into every [`crate::context::EmCRuntimeContext`] as
/// `Arc<dyn EmCEngine>`; plugins read from it, never mutate it.
pub trait EmCEngine: Send + Sync {
    /// Host implementation name.
    fn name(&self) -> &str;

    /// Host implementation version string.
    fn version(&self) -> &str;
}

/// Opaque world generator produced by a plugin on host request.
///
/// The content of a generator is outside Ember's concern; the host only
/// needs a stable identity to route generation work.
pub trait EmCWorldGenerator: Send + Sync {
    fn name(&self) -> &str;
}
