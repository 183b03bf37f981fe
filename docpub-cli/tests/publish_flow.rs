//! End-to-end publish runs through the docpub binary.
//!
//! These tests exercise the full pipeline from the command line: a fake
//! Doxygen script generates the HTML, and a one-shot HTTP stub stands in
//! for the documentation host. Each failure mode is pinned to its exit
//! code:
//! - Exit code 0: documentation built and uploaded
//! - Exit code 1: the documentation build failed
//! - Exit code 2: the host did not accept the upload
//! - Exit code 3: everything else, configuration faults included

#![cfg(unix)]

mod common;

use common::{one_shot_http_server, TestEnv, SAMPLE_DOXYFILE};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::net::TcpListener;
use std::path::Path;

/// Configuration document pointing at the fake tool, the Doxyfile, and a
/// host on the loopback interface.
fn loopback_config(tool: &Path, doxyfile: &Path, port: u16) -> serde_json::Value {
    json!({
        "hostMyDocs": {
            "address": "127.0.0.1",
            "port": port,
            "disable-tls": true,
            "login": "publisher",
            "password": "hunter2"
        },
        "doxygen": {
            "doxygen": tool.to_string_lossy(),
            "doxyfile": doxyfile.to_string_lossy()
        },
        "project": { "language": "cpp", "version": "1.0", "name": "Widget" }
    })
}

/// Names of working copies left next to the Doxyfile; must be empty after
/// every completed run.
fn leftover_working_copies(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".docpub"))
        .collect()
}

/// Test the complete publish path with exit code 0.
///
/// The file pins the version to 1.0 and the flag overrides it to 2.0; the
/// upload the stub host receives must carry the flag's version, proving
/// the override made it through the Doxyfile rewrite and into the archive
/// name.
#[test]
fn test_publish_success_exits_zero() {
    let env = TestEnv::new();
    let tool = env.install_fake_doxygen("mkdir -p html && echo '<html/>' > html/index.html");
    let doxyfile = env.write_doxyfile(SAMPLE_DOXYFILE);
    let (port, request_rx) = one_shot_http_server("200 OK");
    let config = env.write_config(&loopback_config(&tool, &doxyfile, port));

    env.command()
        .arg("--config-file")
        .arg(&config)
        .arg("--project-version")
        .arg("2.0")
        .assert()
        .code(0);

    // The stub host received the flag's version, not the file's.
    let request = request_rx.recv().unwrap();
    let text = String::from_utf8_lossy(&request);
    assert!(text.starts_with("POST /BackEnd/addProject/ HTTP/1.1"));
    assert!(text.contains("name=\"version\"\r\n\r\n2.0\r\n"));
    assert!(text.contains("name=\"name\"\r\n\r\nWidget\r\n"));
    assert!(text.contains("name=\"language\"\r\n\r\ncpp\r\n"));
    assert!(text.contains("filename=\"Widget-2.0.tar\""));

    // The archive was left behind and the working copy was not.
    let root = env.path().canonicalize().unwrap();
    assert!(root.join("Widget-2.0.tar").is_file());
    assert!(leftover_working_copies(env.path()).is_empty());
}

/// Test that a Doxygen run exiting nonzero yields exit code 1.
#[test]
fn test_publish_build_failure_exits_one() {
    let env = TestEnv::new();
    let tool = env.install_fake_doxygen("exit 1");
    let doxyfile = env.write_doxyfile(SAMPLE_DOXYFILE);
    let config = env.write_config(&loopback_config(&tool, &doxyfile, 443));

    env.command()
        .arg("--config-file")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("FATAL:"))
        .stderr(predicate::str::contains("build failed"));

    // The working copy never outlives the run, success or not.
    assert!(leftover_working_copies(env.path()).is_empty());
}

/// Test that a Doxygen run producing no output yields exit code 1.
#[test]
fn test_publish_empty_output_exits_one() {
    let env = TestEnv::new();
    let tool = env.install_fake_doxygen("exit 0");
    let doxyfile = env.write_doxyfile(SAMPLE_DOXYFILE);
    let config = env.write_config(&loopback_config(&tool, &doxyfile, 443));

    env.command()
        .arg("--config-file")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("build failed"));
}

/// Test that a host rejecting the archive yields exit code 2.
#[test]
fn test_publish_rejected_upload_exits_two() {
    let env = TestEnv::new();
    let tool = env.install_fake_doxygen("mkdir -p html && echo '<html/>' > html/index.html");
    let doxyfile = env.write_doxyfile(SAMPLE_DOXYFILE);
    let (port, _request_rx) = one_shot_http_server("500 Internal Server Error");
    let config = env.write_config(&loopback_config(&tool, &doxyfile, port));

    env.command()
        .arg("--config-file")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("upload failed"));
}

/// Test that an unreachable host yields exit code 2.
///
/// Transport failures count as rejected uploads, not faults: the archive
/// was built and it is the delivery that went wrong.
#[test]
fn test_publish_unreachable_host_exits_two() {
    let env = TestEnv::new();
    let tool = env.install_fake_doxygen("mkdir -p html && echo '<html/>' > html/index.html");
    let doxyfile = env.write_doxyfile(SAMPLE_DOXYFILE);

    // Bind a port and drop it again so nothing is listening there.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = env.write_config(&loopback_config(&tool, &doxyfile, port));

    env.command()
        .arg("--config-file")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("upload failed"));
}

/// Test that --debug dumps the resolved configuration, credentials and
/// all, before the stages run.
#[test]
fn test_debug_flag_dumps_resolved_configuration() {
    let env = TestEnv::new();
    let tool = env.install_fake_doxygen("exit 1");
    let doxyfile = env.write_doxyfile(SAMPLE_DOXYFILE);
    let config = env.write_config(&loopback_config(&tool, &doxyfile, 443));

    env.command()
        .arg("--config-file")
        .arg(&config)
        .arg("--debug")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("resolved configuration:"))
        .stderr(predicate::str::contains("hunter2"));
}

/// Test that a debug flag set in the configuration file raises verbosity
/// the same way --debug does.
#[test]
fn test_file_debug_flag_upgrades_verbosity() {
    let env = TestEnv::new();
    let tool = env.install_fake_doxygen("exit 1");
    let doxyfile = env.write_doxyfile(SAMPLE_DOXYFILE);
    let mut document = loopback_config(&tool, &doxyfile, 443);
    document["debug"] = json!(true);
    let config = env.write_config(&document);

    env.command()
        .arg("--config-file")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DEBUG:"))
        .stderr(predicate::str::contains("resolved configuration:"));
}

/// Test that project metadata absent from every source still publishes,
/// with the version falling back to the Doxyfile's stock value.
#[test]
fn test_publish_falls_back_to_doxyfile_metadata() {
    let env = TestEnv::new();
    let tool = env.install_fake_doxygen("mkdir -p html && echo '<html/>' > html/index.html");
    let doxyfile = env.write_doxyfile(SAMPLE_DOXYFILE);
    let (port, request_rx) = one_shot_http_server("200 OK");
    let mut document = loopback_config(&tool, &doxyfile, port);
    document["project"] = json!({ "language": "cpp" });
    let config = env.write_config(&document);

    env.command()
        .arg("--config-file")
        .arg(&config)
        .assert()
        .code(0);

    let request = request_rx.recv().unwrap();
    let text = String::from_utf8_lossy(&request);
    assert!(text.contains("name=\"name\"\r\n\r\nStock Name\r\n"));
    assert!(text.contains("name=\"version\"\r\n\r\n0.0.1\r\n"));
}
