//! End-to-end tests of the filebrowse binary: the stdout contract seen by the host

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

use filebrowse::exitcode;

fn filebrowse() -> Command {
    let mut cmd = cargo_bin_cmd!("filebrowse");
    cmd.env_remove("FILEBROWSE_HOME_DIR")
        .env_remove("FILEBROWSE_LOG_LEVEL")
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn titles(listing: &Value) -> Vec<String> {
    listing["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================
// manifest
// ============================================================

#[test]
fn given_no_arguments_when_running_then_prints_manifest() {
    let manifest = stdout_json(&mut filebrowse());

    assert!(manifest["title"].is_string());
    assert!(manifest["description"].is_string());
    assert_eq!(manifest["root"].as_array().unwrap().len(), 2);

    let commands = manifest["commands"].as_array().unwrap();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0]["name"], "browse");
    assert_eq!(commands[0]["mode"], "filter");
    assert_eq!(
        commands[0]["params"],
        serde_json::json!([{"name": "dir", "type": "string", "optional": true}])
    );
}

#[test]
fn given_no_arguments_when_running_then_manifest_indented_four_spaces() {
    filebrowse()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n    \"title\": "));
}

#[test]
fn given_manifest_when_running_then_root_entries_run_browse() {
    let manifest = stdout_json(&mut filebrowse());

    for entry in manifest["root"].as_array().unwrap() {
        assert_eq!(entry["type"], "run");
        assert_eq!(entry["command"], "browse");
    }
    assert_eq!(manifest["root"][0]["params"]["dir"], "~");
    assert_eq!(manifest["root"][1]["params"]["dir"], ".");
}

// ============================================================
// browse
// ============================================================

#[test]
fn given_directory_when_browsing_then_single_line_listing() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a"), "").unwrap();

    filebrowse()
        .args(["browse", "--dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"items\":["))
        .stdout(predicate::str::is_match("^[^\n]*\n$").unwrap());
}

#[test]
fn given_hidden_file_when_browsing_then_excluded() {
    let temp = TempDir::new().unwrap();
    for name in ["a", ".b", "c"] {
        fs::write(temp.path().join(name), "").unwrap();
    }

    let listing = stdout_json(filebrowse().args(["browse", "--dir"]).arg(temp.path()));

    let mut got = titles(&listing);
    got.sort();
    assert_eq!(got, vec!["a", "c"]);
}

#[test]
fn given_subdirectory_and_file_when_browsing_then_actions_match_kind() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("f.txt"), "").unwrap();

    let listing = stdout_json(filebrowse().args(["browse", "--dir"]).arg(temp.path()));
    let items = listing["items"].as_array().unwrap();
    let sub = items.iter().find(|i| i["title"] == "sub").unwrap();
    let file = items.iter().find(|i| i["title"] == "f.txt").unwrap();

    let sub_path = temp.path().join("sub").to_string_lossy().into_owned();
    assert_eq!(
        sub["actions"],
        serde_json::json!([
            {"title": "Browse", "type": "run", "command": "browse", "params": {"dir": sub_path}},
            {"title": "Open", "type": "open", "target": sub_path}
        ])
    );
    assert_eq!(file["actions"].as_array().unwrap().len(), 1);
    assert_eq!(file["actions"][0]["title"], "Open");
}

#[test]
fn given_relative_dir_when_browsing_then_paths_absolute() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("sub/inner")).unwrap();

    let listing = stdout_json(
        filebrowse()
            .current_dir(temp.path())
            .args(["browse", "--dir", "sub"]),
    );

    let item = &listing["items"][0];
    let accessory = item["accessories"][0].as_str().unwrap();
    assert!(Path::new(accessory).is_absolute());
    assert!(accessory.ends_with("sub/inner"));
    assert!(Path::new(item["actions"][0]["params"]["dir"].as_str().unwrap()).is_absolute());
    assert!(Path::new(item["actions"][1]["target"].as_str().unwrap()).is_absolute());
}

#[test]
fn given_no_dir_when_browsing_then_same_as_current_dir() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("one"), "").unwrap();
    fs::create_dir(temp.path().join("two")).unwrap();

    let implicit = filebrowse()
        .current_dir(temp.path())
        .arg("browse")
        .output()
        .unwrap();
    let explicit = filebrowse()
        .current_dir(temp.path())
        .args(["browse", "--dir", "."])
        .output()
        .unwrap();
    let dangling = filebrowse()
        .current_dir(temp.path())
        .args(["browse", "--dir"])
        .output()
        .unwrap();

    assert!(implicit.status.success());
    assert_eq!(implicit.stdout, explicit.stdout);
    assert_eq!(implicit.stdout, dangling.stdout);
}

#[test]
fn given_tilde_when_browsing_then_lists_home() {
    let home = TempDir::new().unwrap();
    fs::create_dir(home.path().join("Documents")).unwrap();

    let listing = stdout_json(
        filebrowse()
            .env("HOME", home.path())
            .args(["browse", "--dir", "~"]),
    );

    assert_eq!(titles(&listing), vec!["Documents"]);
}

#[test]
fn given_tilde_subpath_when_browsing_then_leading_tilde_replaced() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join("sub/deeper")).unwrap();

    let listing = stdout_json(
        filebrowse()
            .env("HOME", home.path())
            .args(["browse", "--dir", "~/sub"]),
    );

    assert_eq!(
        listing["items"][0]["accessories"][0],
        home.path().join("sub/deeper").to_string_lossy().into_owned()
    );
}

#[test]
fn given_home_override_when_browsing_tilde_then_override_wins() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    fs::write(other.path().join("marker"), "").unwrap();

    let listing = stdout_json(
        filebrowse()
            .env("HOME", home.path())
            .env("FILEBROWSE_HOME_DIR", other.path())
            .args(["browse", "--dir", "~"]),
    );

    assert_eq!(titles(&listing), vec!["marker"]);
}

#[test]
fn given_dollar_in_platform_home_when_browsing_tilde_then_home_used_verbatim() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("u$VAR");
    fs::create_dir_all(home.join("Documents")).unwrap();
    fs::create_dir_all(temp.path().join("uelsewhere/Wrong")).unwrap();

    let listing = stdout_json(
        filebrowse()
            .env("HOME", &home)
            .env("VAR", "elsewhere")
            .args(["browse", "--dir", "~"]),
    );

    assert_eq!(titles(&listing), vec!["Documents"]);
}

#[cfg(unix)]
#[test]
fn given_non_utf8_home_when_running_then_succeeds() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let temp = TempDir::new().unwrap();
    let mut raw = temp.path().as_os_str().to_os_string().into_vec();
    raw.extend_from_slice(b"/h\xff");
    let home = OsString::from_vec(raw);
    fs::create_dir_all(Path::new(&home).join("Documents")).unwrap();

    let manifest = stdout_json(filebrowse().env("HOME", &home));
    assert_eq!(manifest["commands"][0]["name"], "browse");

    let listing = stdout_json(
        filebrowse()
            .env("HOME", &home)
            .args(["browse", "--dir", "~"]),
    );
    assert_eq!(titles(&listing), vec!["Documents"]);
}

#[test]
fn given_unchanged_directory_when_browsing_twice_then_byte_identical() {
    let temp = TempDir::new().unwrap();
    for name in ["b", "a", "c"] {
        fs::write(temp.path().join(name), "").unwrap();
    }

    let first = filebrowse().args(["browse", "--dir"]).arg(temp.path()).output().unwrap();
    let second = filebrowse().args(["browse", "--dir"]).arg(temp.path()).output().unwrap();

    assert_eq!(first.stdout, second.stdout);
}

// ============================================================
// failures
// ============================================================

#[test]
fn given_missing_directory_when_browsing_then_fails_without_stdout() {
    filebrowse()
        .args(["browse", "--dir", "/definitely/does/not/exist"])
        .assert()
        .code(exitcode::NOINPUT)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("/definitely/does/not/exist"));
}

#[test]
fn given_regular_file_when_browsing_then_fails_without_stdout() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    filebrowse()
        .args(["browse", "--dir"])
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn given_unknown_command_when_running_then_usage_error() {
    filebrowse()
        .arg("list")
        .assert()
        .code(exitcode::USAGE)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn given_unknown_flag_when_browsing_then_usage_error() {
    filebrowse()
        .args(["browse", "--depth", "2"])
        .assert()
        .code(exitcode::USAGE)
        .stdout(predicate::str::is_empty());
}

#[test]
fn given_debug_flag_when_browsing_then_logs_only_on_stderr() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a"), "").unwrap();

    let output = filebrowse()
        .args(["-dd", "browse", "--dir"])
        .arg(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let listing: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(titles(&listing), vec!["a"]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("DEBUG"));
}

#[test]
fn given_invalid_log_level_when_running_then_config_error() {
    filebrowse()
        .env("FILEBROWSE_LOG_LEVEL", "chatty")
        .assert()
        .code(exitcode::CONFIG)
        .stdout(predicate::str::is_empty());
}

#[test]
fn given_invalid_log_level_with_debug_flag_when_running_then_flag_wins() {
    let output = filebrowse()
        .env("FILEBROWSE_LOG_LEVEL", "bogus")
        .arg("-d")
        .output()
        .unwrap();

    assert!(output.status.success());
    let manifest: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(manifest["commands"][0]["name"], "browse");
}
