//! Build script for docpub-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying flags, update both files.
fn build_cli() -> Command {
    Command::new("docpub")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build and publish Doxygen documentation")
        .long_about(
            "Command-line tool that runs Doxygen over a project and uploads the generated \
             documentation to a HostMyDocs server",
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable verbose diagnostic output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-file")
                .long("config-file")
                .help("Path to a JSON configuration file")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("address")
                .long("address")
                .help("Documentation host address")
                .value_name("ADDRESS"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .help("Documentation host port")
                .value_name("PORT"),
        )
        .arg(
            Arg::new("disable-tls")
                .long("disable-tls")
                .help("Connect over plain HTTP instead of HTTPS")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("login")
                .long("login")
                .help("Documentation host account login")
                .value_name("LOGIN"),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .help("Documentation host account password")
                .value_name("PASSWORD"),
        )
        .arg(
            Arg::new("doxygen")
                .long("doxygen")
                .help("Path to the Doxygen executable")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("doxyfile")
                .long("doxyfile")
                .help("Path to the Doxyfile describing the build")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .help("Programming language the documentation is published under")
                .value_name("LANGUAGE"),
        )
        .arg(
            Arg::new("project-version")
                .long("project-version")
                .help("Version string the documentation is published under")
                .value_name("VERSION"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .help("Project name the documentation is published under")
                .value_name("NAME"),
        )
}

fn main() {
    // Generate the man page at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("docpub.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
