//! CLI structure and flag definitions.
//!
//! This module defines the docpub command line using clap's derive macros.
//! There are no subcommands: every invocation is one publish run, and the
//! flags mirror the configuration schema so each one can override its
//! file-based counterpart.

use clap::Parser;
use docpub::config::{Config, DocToolConfig, GeneralConfig, HostConfig, ProjectConfig};
use std::path::PathBuf;

/// Command-line tool for publishing Doxygen documentation to HostMyDocs.
#[derive(Parser)]
#[command(name = "docpub")]
#[command(version, about = "Build and publish Doxygen documentation", long_about = None)]
pub struct Cli {
    /// Enable verbose diagnostic output
    #[arg(long)]
    pub debug: bool,

    /// Path to a JSON configuration file
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Documentation host address
    #[arg(long, value_name = "ADDRESS")]
    pub address: Option<String>,

    /// Documentation host port
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Connect over plain HTTP instead of HTTPS
    #[arg(long)]
    pub disable_tls: bool,

    /// Documentation host account login
    #[arg(long, value_name = "LOGIN")]
    pub login: Option<String>,

    /// Documentation host account password
    #[arg(long, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Path to the Doxygen executable
    #[arg(long, value_name = "PATH")]
    pub doxygen: Option<PathBuf>,

    /// Path to the Doxyfile describing the build
    #[arg(long, value_name = "PATH")]
    pub doxyfile: Option<PathBuf>,

    /// Programming language the documentation is published under
    #[arg(long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Version string the documentation is published under
    #[arg(long, value_name = "VERSION")]
    pub project_version: Option<String>,

    /// Project name the documentation is published under
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
}

impl Cli {
    /// The configuration tree carried by explicitly supplied flags.
    ///
    /// Boolean flags count as supplied only when set; everything absent
    /// stays `None` so the merge cannot mask file values with defaults.
    #[must_use]
    pub fn overrides(&self) -> Config {
        Config {
            general: GeneralConfig {
                debug: self.debug.then_some(true),
                config_file: self.config_file.clone(),
            },
            host: HostConfig {
                address: self.address.clone(),
                port: self.port,
                disable_tls: self.disable_tls.then_some(true),
                login: self.login.clone(),
                password: self.password.clone(),
            },
            doc_tool: DocToolConfig {
                executable_path: self.doxygen.clone(),
                config_file_path: self.doxyfile.clone(),
            },
            project: ProjectConfig {
                language: self.language.clone(),
                version: self.project_version.clone(),
                name: self.name.clone(),
            },
        }
    }
}
