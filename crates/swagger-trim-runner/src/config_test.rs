use super::{load_runner_config, RunnerConfig, RunnerConfigError};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use swagger_trim_sdk::{CyclePolicy, TransformOptions};

#[test]
fn load_runner_config_parses_yaml_overrides_and_keeps_defaults() {
    let path = write_temp_file(
        "config-ok",
        "yaml",
        r#"
schema: swagger-trim/0.0.1
whitelist:
  - pods
  - nodes
metadata:
  title: staging cloud apis
cycle_policy: reject
synthetic:
  region_names: [logicA, logicB]
"#,
    );

    let config = load_runner_config(path.as_path()).expect("config must load");
    let defaults = TransformOptions::default();
    assert_eq!(config.transform.whitelist.patterns(), &["pods", "nodes"]);
    assert_eq!(config.transform.metadata.title, "staging cloud apis");
    assert_eq!(config.transform.metadata.version, defaults.metadata.version);
    assert_eq!(config.transform.cycle_policy, CyclePolicy::Reject);
    assert_eq!(config.transform.synthetic.region_names, vec!["logicA", "logicB"]);
    assert_eq!(config.transform.synthetic.path, defaults.synthetic.path);
    assert_eq!(config.transform.cluster_parameter, defaults.cluster_parameter);
}

#[test]
fn empty_json_config_equals_builtin_defaults() {
    let path = write_temp_file("config-empty", "json", "{}");
    let config = load_runner_config(path.as_path()).expect("config must load");
    assert_eq!(config, RunnerConfig::default());
}

#[test]
fn load_runner_config_reports_every_validation_issue() {
    let path = write_temp_file(
        "config-invalid",
        "yaml",
        r#"
schema: swagger-trim/9.9.9
whitelist: ["pods", "  "]
metadata:
  version: ""
synthetic:
  path: api/v3/clusters
"#,
    );

    let error = load_runner_config(path.as_path()).expect_err("must reject");
    match error {
        RunnerConfigError::Validation(issues) => {
            let references = issues
                .iter()
                .filter_map(|issue| issue.reference.as_deref())
                .collect::<Vec<_>>();
            assert_eq!(issues.len(), 4);
            assert!(references.contains(&"runner.config.schema"));
            assert!(references.contains(&"runner.config.whitelist.blank_entry"));
            assert!(references.contains(&"runner.config.metadata"));
            assert!(references.contains(&"runner.config.synthetic.path"));
            assert!(issues
                .iter()
                .any(|issue| issue.location.to_string() == "#/whitelist/1"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_whitelist_is_rejected() {
    let path = write_temp_file("config-no-whitelist", "yaml", "whitelist: []\n");
    let error = load_runner_config(path.as_path()).expect_err("must reject");
    assert!(error.to_string().contains("whitelist must contain at least one entry"));
}

#[test]
fn load_runner_config_expands_env_placeholders() {
    let env_key = format!("SWAGGER_TRIM_TEST_TITLE_{}", std::process::id());
    unsafe {
        std::env::set_var(env_key.as_str(), "env cloud apis");
    }

    let path = write_temp_file(
        "config-env",
        "yaml",
        format!(
            r#"
metadata:
  title: ${{{env_key}}}
"#
        )
        .as_str(),
    );

    let config = load_runner_config(path.as_path()).expect("config must load");
    assert_eq!(config.transform.metadata.title, "env cloud apis");
}

#[test]
fn missing_env_placeholder_is_a_parse_error() {
    let path = write_temp_file(
        "config-env-missing",
        "yaml",
        "metadata:\n  title: ${SWAGGER_TRIM_TEST_DEFINITELY_UNSET}\n",
    );
    let error = load_runner_config(path.as_path()).expect_err("must reject");
    assert!(matches!(error, RunnerConfigError::Parse(_)));
}

fn write_temp_file(prefix: &str, extension: &str, content: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time must be monotonic")
        .as_nanos();
    path.push(format!(
        "swagger-trim-{prefix}-{}-{nanos}.{extension}",
        std::process::id()
    ));
    fs::write(&path, content).expect("must write temp file");
    path
}
