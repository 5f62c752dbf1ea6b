//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ember.
//! The Ember project belongs to the Dunimd Team.

use std::path::PathBuf;
use std::sync::Arc;

use emberx::{
    EmCCodeLoadingContext, EmCEngine, EmCPlugin, EmCPluginBase, EmCPluginDescriptor,
    EmCPluginLoader, EmCPluginVersion, EmError, Result,
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

fn bind(plugin: &TestPlugin, workspace: &TempDir, name: &str) -> Result<()> {
    let loader = Arc::new(EmCPluginLoader::new(workspace.path().join("plugins")));
    let descriptor = EmCPluginDescriptor::new(name, EmCPluginVersion::new(1, 0, 0));
    let data_folder = loader.data_folder_for(name);
    plugin.base.initialize(
        loader,
        Arc::new(TestEngine),
        descriptor,
        data_folder,
        workspace.path().join(format!("{}.zip", name)),
        Arc::new(EmCCodeLoadingContext::new()),
    )
}

#[test]
fn initialize_binds_context_once() {
    let workspace = TempDir::new().unwrap();
    let plugin = TestPlugin::default();
    assert!(!plugin.base.is_initialized());

    bind(&plugin, &workspace, "shipyard").unwrap();

    assert!(plugin.base.is_initialized());
    assert_eq!(plugin.base.name().unwrap(), "shipyard");
    assert_eq!(plugin.base.engine().unwrap().name(), "ember-test-host");
    assert_eq!(
        plugin.base.description().unwrap().version().to_string(),
        "1.0.0"
    );
    assert_eq!(
        plugin.base.data_folder().unwrap(),
        workspace.path().join("plugins").join("shipyard")
    );
    assert_eq!(
        plugin.base.file().unwrap(),
        workspace.path().join("shipyard.zip")
    );
    assert_eq!(plugin.base.logger().unwrap().name(), "shipyard");
}

#[test]
fn second_initialize_is_rejected() {
    let workspace = TempDir::new().unwrap();
    let plugin = TestPlugin::default();
    bind(&plugin, &workspace, "shipyard").unwrap();

    let err = bind(&plugin, &workspace, "impostor").unwrap_err();
    assert!(matches!(
        err,
        EmError::AlreadyInitialized { ref plugin } if plugin == "shipyard"
    ));

    // The first context stays bound.
    assert_eq!(plugin.base.name().unwrap(), "shipyard");
}

#[test]
fn accessors_fail_before_initialize() {
    let plugin = TestPlugin::default();

    assert!(matches!(
        plugin.base.name().unwrap_err(),
        EmError::NotInitialized { .. }
    ));
    assert!(matches!(
        plugin.base.engine().unwrap_err(),
        EmError::NotInitialized { .. }
    ));
    assert!(matches!(
        plugin.base.get_resource("config/default.yml").unwrap_err(),
        EmError::NotInitialized { .. }
    ));
    assert!(matches!(
        plugin.base.load_library(PathBuf::from("lib.so").as_path()).unwrap_err(),
        EmError::NotInitialized { .. }
    ));
    assert!(matches!(
        plugin.base.dictionary().unwrap_err(),
        EmError::NotInitialized { .. }
    ));
}

#[test]
fn not_initialized_error_names_the_operation() {
    let plugin = TestPlugin::default();
    let message = plugin.base.name().unwrap_err().to_string();
    assert!(message.contains("'name'"), "unexpected message: {message}");
}

#[test]
fn enabled_flag_works_before_initialize() {
    // The flag is plain state; it does not depend on the context.
    let plugin = TestPlugin::default();
    assert!(!plugin.base.is_enabled());
    plugin.base.set_enabled(true);
    assert!(plugin.base.is_enabled());
    plugin.base.set_enabled(false);
    assert!(!plugin.base.is_enabled());
}
