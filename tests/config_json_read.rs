//! Verify a JSON config file drives a full run without touching user state.

use std::fs;
use tempfile::tempdir;

use dirculese::config::{load_config, LogLevel};

#[test]
fn reads_config_and_organizes_directories_in_order() {
    let td = tempdir().expect("create tempdir");
    let downloads = td.path().join("downloads");
    let pictures = td.path().join("pictures");
    let projects = td.path().join("projects");
    for d in [&downloads, &pictures, &projects] {
        fs::create_dir_all(d).unwrap();
    }
    for f in ["cat.png", "acme__invoice.pdf", "setup.tmp", "notes.md"] {
        fs::write(downloads.join(f), f).unwrap();
    }

    let cfg_path = td.path().join("dirculese.json");
    let json = serde_json::json!({
        "LogLevel": "info",
        "Directories": [{
            "Path": downloads,
            "Rules": [
                { "Target": pictures, "Delete": false, "Handler": "ExtensionHandler", "Extensions": ["png", "jpg"] },
                { "Target": projects, "Delete": false, "Handler": "PrefixHandler", "PrefixDelimiters": ["__"] },
                { "Delete": true, "Handler": "ExtensionHandler", "Extensions": ["tmp"] }
            ]
        }]
    });
    fs::write(&cfg_path, serde_json::to_string_pretty(&json).unwrap()).unwrap();

    let cfg = load_config(&cfg_path).expect("load config");
    assert_eq!(cfg.log_level, Some(LogLevel::Info));

    let dirs = cfg.managed_directories().expect("build rules");
    assert_eq!(dirs.len(), 1);
    assert_eq!(dirs[0].rules().len(), 3);
    dirs[0].run().expect("run rules");

    assert!(pictures.join("cat.png").exists());
    assert!(projects.join("acme").join("acme__invoice.pdf").exists());
    assert!(!downloads.join("setup.tmp").exists());
    assert!(downloads.join("notes.md").exists());
}

#[test]
fn malformed_json_reports_path() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("broken.json");
    fs::write(&cfg_path, "{ not json").unwrap();
    let err = load_config(&cfg_path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.json"), "err was: {err:#}");
}

#[test]
fn unknown_handler_fails_before_anything_runs() {
    let td = tempdir().unwrap();
    let src = td.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("a.png"), "a").unwrap();

    let cfg_path = td.path().join("c.json");
    let json = serde_json::json!({
        "Directories": [{ "Path": src, "Rules": [{ "Target": td.path(), "Handler": "DateHandler" }] }]
    });
    fs::write(&cfg_path, json.to_string()).unwrap();

    let cfg = load_config(&cfg_path).unwrap();
    let err = cfg.managed_directories().unwrap_err();
    assert_eq!(err.code(), "config_error");
    assert!(src.join("a.png").exists());
}
