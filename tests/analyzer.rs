use depmap::config::AppConfig;
use depmap::core::CodebaseAnalyzer;
use depmap::error::AnalyzeError;
use std::fs;
use std::path::Path;

fn config_for(root: &Path, output: &Path) -> AppConfig {
    AppConfig {
        root: root.to_path_buf(),
        extension: ".js".to_string(),
        output: output.to_path_buf(),
        ..AppConfig::default()
    }
}

#[test]
fn two_file_project_produces_the_expected_graph() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("a.js"), "import { x } from './b';\n").unwrap();
    fs::write(root.join("b.js"), "export const x = 1;\n").unwrap();

    let config = config_for(root, &root.join("unused.json"));
    let graph = CodebaseAnalyzer::new().analyze(&config).unwrap();

    assert_eq!(graph.len(), 2);
    let a_key = root.join("a.js").display().to_string();
    let b_key = root.join("b.js").display().to_string();
    assert_eq!(graph[&a_key], vec!["./b"]);
    assert_eq!(graph[&b_key], Vec::<String>::new());
}

#[test]
fn node_modules_content_never_reaches_the_graph() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("node_modules")).unwrap();
    fs::write(root.join("main.js"), "import dep from 'dep';\n").unwrap();
    fs::write(root.join("node_modules/dep.js"), "export const d = 1;\n").unwrap();

    let config = config_for(root, &root.join("unused.json"));
    let graph = CodebaseAnalyzer::new().analyze(&config).unwrap();

    assert_eq!(graph.len(), 1);
    let main_key = root.join("main.js").display().to_string();
    assert_eq!(graph[&main_key], vec!["dep"]);
}

#[test]
fn persisted_artifact_is_byte_identical_across_runs() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path().join("proj");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.js"), "import { x } from './b';\nimport y from './c';\n").unwrap();
    fs::write(root.join("b.js"), "export function x() {}\n").unwrap();
    fs::write(root.join("c.js"), "").unwrap();

    let output = dir.path().join("graph.json");
    let config = config_for(&root, &output);
    let analyzer = CodebaseAnalyzer::new();

    analyzer.analyze_and_persist(&config).unwrap();
    let first = fs::read(&output).unwrap();

    analyzer.analyze_and_persist(&config).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn persisted_artifact_is_pretty_printed_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path().join("proj");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.js"), "import { x } from './b';\n").unwrap();

    let output = dir.path().join("graph.json");
    let config = config_for(&root, &output);
    CodebaseAnalyzer::new().analyze_and_persist(&config).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    // Human-readable indentation, and round-trips as a JSON object.
    assert!(text.contains("\n  "));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value.is_object());
}

#[test]
fn missing_output_directory_is_a_graph_write_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("a.js"), "export const a = 1;\n").unwrap();

    let output = root.join("no-such-dir/graph.json");
    let config = config_for(root, &output);
    let err = CodebaseAnalyzer::new()
        .analyze_and_persist(&config)
        .unwrap_err();

    assert!(matches!(err, AnalyzeError::GraphWrite { .. }));
}

#[test]
fn missing_root_produces_an_empty_graph() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = dir.path().join("graph.json");
    let config = config_for(&dir.path().join("nope"), &output);

    let graph = CodebaseAnalyzer::new().analyze(&config).unwrap();
    assert!(graph.is_empty());
}

#[cfg(unix)]
#[test]
fn unreadable_file_fails_the_whole_run() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("ok.js"), "export const a = 1;\n").unwrap();
    let locked = root.join("locked.js");
    fs::write(&locked, "export const b = 2;\n").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not apply to root; nothing to assert in that case.
    if fs::read_to_string(&locked).is_ok() {
        return;
    }

    let config = config_for(root, &root.join("unused.json"));
    let result = CodebaseAnalyzer::new().analyze(&config);

    // Restore permissions so TempDir cleanup succeeds.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    match result {
        Err(AnalyzeError::Extraction { path, .. }) => assert_eq!(path, locked),
        other => panic!("expected extraction error, got {other:?}"),
    }
}
