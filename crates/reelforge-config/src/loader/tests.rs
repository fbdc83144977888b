//! Tests for layered configuration loading.

use super::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write JSON5 contents to a path, creating parent directories if needed.
fn write_json5(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(path, contents).expect("write");
}

/// Verify that a minimal config parses with defaults.
#[test]
fn parse_minimal_config() {
    let json5 = "{}";
    let config = ReelForgeConfig::load_from_str(json5).expect("config");
    assert_eq!(config.profile.full_name, "Alex Johnson");
    assert_eq!(config.generator.delay_ms, 2000);
    assert_eq!(config.generator.batch_size, 3);
    assert_eq!(config.integrations.len(), 4);
}

/// Reject unexpected top-level config keys.
#[test]
fn rejects_unknown_top_level_key() {
    let json5 = r#"{ unexpected: true }"#;
    let err = ReelForgeConfig::load_from_str(json5).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("unknown field"));
}

/// Reject a batch size larger than the smallest content pool.
#[test]
fn rejects_oversized_batch_size() {
    let json5 = r#"{ generator: { batch_size: 12 } }"#;
    let err = ReelForgeConfig::load_from_str(json5).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("batch_size"));
}

/// Reject a zero generation delay ceiling violation.
#[test]
fn rejects_excessive_delay() {
    let json5 = r#"{ generator: { delay_ms: 120000 } }"#;
    let err = ReelForgeConfig::load_from_str(json5).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("delay_ms"));
}

/// Partial layers report which file failed to decode.
#[test]
fn invalid_layer_names_offending_file() {
    let temp = TempDir::new().expect("tmp");
    let runtime_config = temp.path().join("runtime.json5");
    write_json5(&runtime_config, r#"{ generator: { cadence: 5 } }"#);

    let mut options = LayeredConfigOptions::new(temp.path());
    options.system_config_path = None;
    options.user_config_path = None;
    options.runtime_paths = vec![runtime_config];

    let err = ReelForgeConfig::load_layered_with_options(options).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("runtime("));
}

/// Ensure repo config takes precedence over cwd config.
#[test]
fn layered_config_prefers_repo_over_cwd() {
    let temp = TempDir::new().expect("tmp");
    let root = temp.path();
    let project_root = root.join("project");
    fs::create_dir_all(project_root.join(".git")).expect("git");
    let cwd = project_root.join("subdir");
    fs::create_dir_all(&cwd).expect("cwd");

    let system_config = root.join("system.json5");
    write_json5(
        &system_config,
        "{ profile: { business_name: \"system\" } }",
    );

    let user_config = root.join("user.json5");
    write_json5(&user_config, "{ profile: { business_name: \"user\" } }");

    let project_config = project_root.join(DEFAULT_CONFIG_FILE);
    write_json5(
        &project_config,
        "{ profile: { business_name: \"project\" } }",
    );

    let cwd_config = cwd.join(DEFAULT_CONFIG_FILE);
    write_json5(&cwd_config, "{ profile: { business_name: \"cwd\" } }");

    let repo_config = project_root
        .join(DEFAULT_CONFIG_DIR)
        .join(DEFAULT_CONFIG_FILE);
    write_json5(&repo_config, "{ profile: { business_name: \"repo\" } }");

    let mut options = LayeredConfigOptions::new(&cwd);
    options.system_config_path = Some(system_config);
    options.user_config_path = Some(user_config);

    let layered = ReelForgeConfig::load_layered_with_options(options).expect("layered");
    assert_eq!(layered.config.profile.business_name, "repo".to_string());
    assert_eq!(layered.layers.len(), 5);
}

/// Runtime overrides apply last and win over all local layers.
#[test]
fn runtime_override_wins() {
    let temp = TempDir::new().expect("tmp");
    let root = temp.path();
    let project_root = root.join("project");
    fs::create_dir_all(project_root.join(".git")).expect("git");
    let cwd = project_root.join("subdir");
    fs::create_dir_all(&cwd).expect("cwd");

    let system_config = root.join("system.json5");
    write_json5(&system_config, "{ generator: { delay_ms: 500 } }");

    let runtime_config = root.join("runtime.json5");
    write_json5(&runtime_config, "{ generator: { delay_ms: 50 } }");

    let mut options = LayeredConfigOptions::new(&cwd);
    options.system_config_path = Some(system_config);
    options.user_config_path = None;
    options.runtime_paths = vec![runtime_config];

    let layered = ReelForgeConfig::load_layered_with_options(options).expect("layered");
    assert_eq!(layered.config.generator.delay_ms, 50);
}

/// When cwd is the project root, the shared config file loads only once.
#[test]
fn same_file_reached_via_two_slots_loads_once() {
    let temp = TempDir::new().expect("tmp");
    let project_root = temp.path().join("project");
    fs::create_dir_all(project_root.join(".git")).expect("git");

    let shared_config = project_root.join(DEFAULT_CONFIG_FILE);
    write_json5(&shared_config, "{ generator: { delay_ms: 250 } }");

    let mut options = LayeredConfigOptions::new(&project_root);
    options.system_config_path = None;
    options.user_config_path = None;

    let layered = ReelForgeConfig::load_layered_with_options(options).expect("layered");
    assert_eq!(layered.layers.len(), 1);
    assert_eq!(layered.layers[0].source, ConfigLayerSource::Project);
    assert_eq!(layered.config.generator.delay_ms, 250);
}

/// Merging only touches the keys an overlay actually sets.
#[test]
fn merge_preserves_sibling_keys() {
    let temp = TempDir::new().expect("tmp");
    let root = temp.path();
    let cwd = root.join("work");
    fs::create_dir_all(&cwd).expect("cwd");

    let system_config = root.join("system.json5");
    write_json5(
        &system_config,
        "{ notifications: { email: false, sms: true } }",
    );

    let runtime_config = root.join("runtime.json5");
    write_json5(&runtime_config, "{ notifications: { email: true } }");

    let mut options = LayeredConfigOptions::new(&cwd);
    options.system_config_path = Some(system_config);
    options.user_config_path = None;
    options.runtime_paths = vec![runtime_config];

    let layered = ReelForgeConfig::load_layered_with_options(options).expect("layered");
    assert!(layered.config.notifications.email);
    assert!(layered.config.notifications.sms);
}
