//! Common test utilities for integration tests.
//!
//! This module provides file fixtures and a one-shot HTTP stub for testing
//! the docpub library end to end without a real Doxygen installation or a
//! reachable documentation host.

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

/// A Doxyfile with the mix of content real ones carry: comments, plain
/// assignments, a quoted value, an appending assignment, and a
/// backslash-continued list.
#[allow(dead_code)]
pub const SAMPLE_DOXYFILE: &str = "\
# Doxyfile 1.9.8

PROJECT_NAME           = \"Stock Name\"
PROJECT_NUMBER         = 0.0.1
OUTPUT_DIRECTORY       =
GENERATE_LATEX         = NO
ALIASES                = \"sideeffect=@par Side Effects:\"
PREDEFINED            += DOXYGEN_RUNNING
INPUT                  = src \\
                         include
";

/// Writes `content` to `dir/name` and returns the full path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write test file");
    path
}

/// Writes a JSON configuration document to `dir/name`.
#[allow(dead_code)]
pub fn write_config(dir: &Path, name: &str, document: &serde_json::Value) -> PathBuf {
    let text = serde_json::to_string_pretty(document).expect("failed to render config JSON");
    write_file(dir, name, &text)
}

/// Installs an executable shell script standing in for Doxygen.
///
/// The script runs with the Doxyfile's directory as its working directory,
/// exactly as the real tool would be invoked.
#[cfg(unix)]
#[allow(dead_code)]
pub fn install_fake_doxygen(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let tool = dir.join("fake-doxygen");
    fs::write(&tool, format!("#!/bin/sh\n{script}\n")).expect("failed to write fake tool");
    fs::set_permissions(&tool, fs::Permissions::from_mode(0o755))
        .expect("failed to mark fake tool executable");
    tool
}

/// Serves exactly one HTTP request on a random local port, answering with
/// `status_line`, and hands the raw request bytes back over a channel.
///
/// The accept loop runs on a background thread so the caller can issue the
/// request from the test thread.
#[allow(dead_code)]
pub fn one_shot_http_server(status_line: &'static str) -> (u16, mpsc::Receiver<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind stub server");
    let port = listener.local_addr().expect("stub server has no address").port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("stub server accept failed");
        let mut request = Vec::new();
        let mut chunk = [0_u8; 4096];

        let headers_end = loop {
            let read = stream.read(&mut chunk).expect("stub server read failed");
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
            let read = stream.read(&mut chunk).expect("stub server read failed");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..read]);
        }

        let response =
            format!("HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        stream
            .write_all(response.as_bytes())
            .expect("stub server write failed");
        let _ = stream.flush();
        tx.send(request).expect("stub server channel closed");
    });

    (port, rx)
}
