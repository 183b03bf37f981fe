//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Doxyfile and configuration file fixtures
//! - A fake Doxygen script (Unix only)
//! - A one-shot HTTP stub standing in for the documentation host

use assert_cmd::Command;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use tempfile::TempDir;

/// A Doxyfile carrying stock metadata for the fake tool to publish.
#[allow(dead_code)]
pub const SAMPLE_DOXYFILE: &str = "\
# Doxyfile 1.9.8

PROJECT_NAME           = \"Stock Name\"
PROJECT_NUMBER         = 0.0.1
OUTPUT_DIRECTORY       =
GENERATE_LATEX         = NO
";

/// Test environment with an isolated working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment backed by a fresh temporary directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the docpub binary.
    pub fn command(&self) -> Command {
        Command::cargo_bin("docpub").expect("Failed to find docpub binary")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a Doxyfile into the environment and return its path.
    pub fn write_doxyfile(&self, content: &str) -> PathBuf {
        let path = self.temp_path.join("Doxyfile");
        fs::write(&path, content).expect("Failed to write Doxyfile");
        path
    }

    /// Write a JSON configuration document into the environment and
    /// return its path.
    pub fn write_config(&self, document: &serde_json::Value) -> PathBuf {
        let path = self.temp_path.join("docpub.json");
        let text = serde_json::to_string_pretty(document).expect("Failed to render config");
        fs::write(&path, text).expect("Failed to write config file");
        path
    }

    /// Install an executable shell script standing in for Doxygen.
    #[cfg(unix)]
    pub fn install_fake_doxygen(&self, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let tool = self.temp_path.join("fake-doxygen");
        fs::write(&tool, format!("#!/bin/sh\n{script}\n")).expect("Failed to write fake tool");
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake tool executable");
        tool
    }
}

/// Serves exactly one HTTP request on a random local port, answering with
/// `status_line`, and hands the raw request bytes back over a channel.
#[allow(dead_code)]
pub fn one_shot_http_server(status_line: &'static str) -> (u16, mpsc::Receiver<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
    let port = listener
        .local_addr()
        .expect("Stub server has no address")
        .port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Stub server accept failed");
        let mut request = Vec::new();
        let mut chunk = [0_u8; 4096];

        let headers_end = loop {
            let read = stream.read(&mut chunk).expect("Stub server read failed");
            request.extend_from_slice(&chunk[..read]);
            if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let headers = String::from_utf8_lossy(&request[..headers_end]).into_owned();
        let content_length = headers
            .lines()
            .find(|line| line.to_ascii_lowercase().starts_with("content-length:"))
            .and_then(|line| line.split(':').nth(1))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while request.len() < headers_end + content_length {
            let read = stream.read(&mut chunk).expect("Stub server read failed");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..read]);
        }

        let response =
            format!("HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        stream
            .write_all(response.as_bytes())
            .expect("Stub server write failed");
        let _ = stream.flush();
        tx.send(request).expect("Stub server channel closed");
    });

    (port, rx)
}
