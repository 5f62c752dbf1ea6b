//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ember.
//! The Ember project belongs to the Dunimd Team.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use emberx::{
    EmCCodeLoadingContext, EmCEngine, EmCLibraryPatternSet, EmCPlugin, EmCPluginBase,
    EmCPluginDescriptor, EmCPluginLoader, EmCPluginVersion, EmError, Result,
};
use tempfile::TempDir;

struct TestEngine;

impl EmCEngine for TestEngine {
    fn name(&self) -> &str {
        "ember-test-host"
    }

    fn version(&self) -> &str {
        "0.0.1"
    }
}

#[derive(Default)]
struct TestPlugin {
    base: EmCPluginBase,
}

impl EmCPlugin for TestPlugin {
    fn base(&self) -> &EmCPluginBase {
        &self.base
    }

    fn on_enable(&mut self) -> Result<()> {
        Ok(())
    }

    fn on_disable(&mut self) -> Result<()> {
        Ok(())
    }
}

fn bind_with_patterns(
    plugin: &TestPlugin,
    workspace: &TempDir,
    patterns: EmCLibraryPatternSet,
) -> Arc<EmCCodeLoadingContext> {
    let loader = Arc::new(EmCPluginLoader::with_patterns(
        workspace.path().join("plugins"),
        patterns,
    ));
    let descriptor = EmCPluginDescriptor::new("shipyard", EmCPluginVersion::new(1, 0, 0));
    let data_folder = loader.data_folder_for("shipyard");
    let code_context = Arc::new(EmCCodeLoadingContext::new());
    plugin
        .base
        .initialize(
            loader,
            Arc::new(TestEngine),
            descriptor,
            data_folder,
            workspace.path().join("shipyard.zip"),
            Arc::clone(&code_context),
        )
        .unwrap();
    code_context
}

fn jar_patterns() -> EmCLibraryPatternSet {
    EmCLibraryPatternSet::compile([r".*\.jar$"]).unwrap()
}

#[test]
fn matching_existing_library_is_appended() {
    let workspace = TempDir::new().unwrap();
    let plugin = TestPlugin::default();
    let code_context = bind_with_patterns(&plugin, &workspace, jar_patterns());

    let library = workspace.path().join("lib.jar");
    fs::write(&library, b"jar bytes").unwrap();

    plugin.base.load_library(&library).unwrap();

    let locations = code_context.locations();
    assert_eq!(locations.len(), 1);
    assert!(locations[0].ends_with("lib.jar"));
}

#[test]
fn unmatched_existing_library_is_rejected() {
    let workspace = TempDir::new().unwrap();
    let plugin = TestPlugin::default();
    let code_context = bind_with_patterns(&plugin, &workspace, jar_patterns());

    let library = workspace.path().join("lib.txt");
    fs::write(&library, b"plain text").unwrap();

    let err = plugin.base.load_library(&library).unwrap_err();
    assert!(matches!(
        err,
        EmError::UnsupportedLibraryType { ref file } if file == "lib.txt"
    ));
    assert!(code_context.is_empty());
}

#[test]
fn missing_library_is_rejected_before_pattern_check() {
    let workspace = TempDir::new().unwrap();
    let plugin = TestPlugin::default();
    bind_with_patterns(&plugin, &workspace, jar_patterns());

    // Matching name, no file on disk.
    let err = plugin
        .base
        .load_library(&workspace.path().join("missing.jar"))
        .unwrap_err();
    assert!(matches!(err, EmError::LibraryNotFound { .. }));

    // Non-matching name, no file on disk: existence is still checked first.
    let err = plugin
        .base
        .load_library(&workspace.path().join("missing.txt"))
        .unwrap_err();
    assert!(matches!(err, EmError::LibraryNotFound { .. }));
}

#[test]
fn empty_pattern_set_rejects_every_file() {
    let workspace = TempDir::new().unwrap();
    let plugin = TestPlugin::default();
    bind_with_patterns(&plugin, &workspace, EmCLibraryPatternSet::default());

    let library = workspace.path().join("lib.jar");
    fs::write(&library, b"jar bytes").unwrap();

    let err = plugin.base.load_library(&library).unwrap_err();
    assert!(matches!(err, EmError::UnsupportedLibraryType { .. }));
}

#[test]
fn libraries_accumulate_in_append_order() {
    let workspace = TempDir::new().unwrap();
    let plugin = TestPlugin::default();
    let code_context = bind_with_patterns(&plugin, &workspace, jar_patterns());

    let first = workspace.path().join("alpha.jar");
    let second = workspace.path().join("beta.jar");
    fs::write(&first, b"").unwrap();
    fs::write(&second, b"").unwrap();

    plugin.base.load_library(&first).unwrap();
    plugin.base.load_library(&second).unwrap();

    let locations = code_context.locations();
    assert_eq!(locations.len(), 2);
    assert!(locations[0].ends_with("alpha.jar"));
    assert!(locations[1].ends_with("beta.jar"));
}

#[test]
fn load_library_requires_initialization() {
    let plugin = TestPlugin::default();
    let err = plugin
        .base
        .load_library(PathBuf::from("lib.jar").as_path())
        .unwrap_err();
    assert!(matches!(err, EmError::NotInitialized { .. }));
}

#[test]
fn resolve_reports_missing_symbol_across_registered_libraries() {
    let workspace = TempDir::new().unwrap();
    let bogus = workspace.path().join("bogus.so");
    fs::write(&bogus, b"not a real shared object").unwrap();

    let code_context = EmCCodeLoadingContext::new();
    code_context.append(&bogus).unwrap();

    // The entry cannot be opened as a library; resolution skips it and
    // reports the symbol as unresolved instead of failing the context.
    let err = unsafe {
        code_context
            .resolve::<unsafe extern "C" fn() -> u32>(b"ember_entry\0")
            .unwrap_err()
    };
    assert!(err.to_string().contains("ember_entry"));
}
