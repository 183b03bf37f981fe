//! Documentation builders.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(test)]
use mockall::automock;

use crate::doctool::{ToolConfigFile, HTML_OUTPUT, OUTPUT_DIRECTORY};
use crate::error::Result;
use crate::pipeline::artifact::BuildRequest;
use crate::pipeline::bundle;

/// Builds documentation and packages it into an archive.
///
/// `Ok(Some(path))` carries the archive path. `Ok(None)` reports a failed
/// build without faulting; the pipeline maps it to the build-failure exit
/// path. `Err` is reserved for unexpected faults such as I/O errors.
#[cfg_attr(test, automock)]
pub trait DocBuilder {
    /// Build the documentation described by `request`.
    ///
    /// # Errors
    ///
    /// Returns an error only for faults outside the build itself; a build
    /// the tool rejects is reported as `Ok(None)`.
    fn build(&self, request: &BuildRequest) -> Result<Option<PathBuf>>;
}

/// Runs Doxygen and packages its HTML output.
#[derive(Debug, Clone)]
pub struct DoxygenBuilder {
    executable: PathBuf,
}

impl DoxygenBuilder {
    /// Executable name used when the configuration does not supply one.
    /// Resolved through `PATH` by the operating system.
    pub const DEFAULT_EXECUTABLE: &'static str = "doxygen";

    /// Create a builder running `executable`, or
    /// [`Self::DEFAULT_EXECUTABLE`] when `None`.
    #[must_use]
    pub fn new(executable: Option<&Path>) -> Self {
        Self {
            executable: executable
                .map_or_else(|| PathBuf::from(Self::DEFAULT_EXECUTABLE), Path::to_path_buf),
        }
    }

    /// The executable this builder invokes.
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

impl Default for DoxygenBuilder {
    fn default() -> Self {
        Self::new(None)
    }
}

impl DocBuilder for DoxygenBuilder {
    fn build(&self, request: &BuildRequest) -> Result<Option<PathBuf>> {
        let tool_config = ToolConfigFile::load(&request.config_path)?;
        let config_path = request.config_path.canonicalize()?;
        let work_dir = config_path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        // Doxygen defaults: output root is the working directory, HTML goes
        // to an `html` subdirectory.
        let output_root = match tool_config.value(OUTPUT_DIRECTORY) {
            Some(dir) if !dir.is_empty() => work_dir.join(dir),
            _ => work_dir.clone(),
        };
        let html_dir = match tool_config.value(HTML_OUTPUT) {
            Some(dir) if !dir.is_empty() => output_root.join(dir),
            _ => output_root.join("html"),
        };

        // Clean build: drop the output of any previous run.
        if html_dir.exists() {
            fs::remove_dir_all(&html_dir)?;
        }

        log::debug!(
            "running {} with {}",
            self.executable.display(),
            config_path.display()
        );
        let status = Command::new(&self.executable)
            .arg(&config_path)
            .current_dir(&work_dir)
            .status()?;
        if !status.success() {
            log::error!("doc tool exited with {status}");
            return Ok(None);
        }

        if !html_dir.is_dir() || html_dir.read_dir()?.next().is_none() {
            log::error!("doc tool produced no output in {}", html_dir.display());
            return Ok(None);
        }

        let archive_name = format!("{}-{}.tar", request.project_name, request.project_version);
        let archive_path = output_root.join(archive_name);
        bundle::pack_directory(&html_dir, &archive_path)?;
        log::debug!("packaged documentation into {}", archive_path.display());
        Ok(Some(archive_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_executable() {
        let builder = DoxygenBuilder::new(None);
        assert_eq!(
            builder.executable(),
            Path::new(DoxygenBuilder::DEFAULT_EXECUTABLE)
        );
    }

    #[test]
    fn test_explicit_executable() {
        let builder = DoxygenBuilder::new(Some(Path::new("/opt/doxygen/bin/doxygen")));
        assert_eq!(builder.executable(), Path::new("/opt/doxygen/bin/doxygen"));
    }

    #[test]
    fn test_missing_config_is_a_fault() {
        let builder = DoxygenBuilder::new(None);
        let request = BuildRequest {
            config_path: PathBuf::from("/nonexistent/Doxyfile"),
            project_name: "demo".to_string(),
            project_version: "1.0".to_string(),
        };
        assert!(builder.build(&request).is_err());
    }

    #[cfg(unix)]
    mod unix {
        use std::os::unix::fs::PermissionsExt;

        use tempfile::TempDir;

        use super::*;

        /// Install a fake doc tool script and a Doxyfile in a fresh
        /// directory, returning the builder and the request to run it.
        fn fake_tool(dir: &TempDir, script: &str, doxyfile: &str) -> (DoxygenBuilder, BuildRequest) {
            let tool = dir.path().join("fake-doxygen");
            fs::write(&tool, format!("#!/bin/sh\n{script}\n")).unwrap();
            fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

            let config = dir.path().join("Doxyfile");
            fs::write(&config, doxyfile).unwrap();

            let builder = DoxygenBuilder::new(Some(&tool));
            let request = BuildRequest {
                config_path: config,
                project_name: "demo".to_string(),
                project_version: "1.2".to_string(),
            };
            (builder, request)
        }

        #[test]
        fn test_successful_build_packages_archive() {
            let dir = TempDir::new().unwrap();
            let (builder, request) = fake_tool(
                &dir,
                "mkdir -p html && echo '<html/>' > html/index.html",
                "PROJECT_NAME = demo\n",
            );

            let root = dir.path().canonicalize().unwrap();
            let archive = builder.build(&request).unwrap();
            assert_eq!(archive, Some(root.join("demo-1.2.tar")));
            assert!(root.join("demo-1.2.tar").is_file());
        }

        #[test]
        fn test_output_directory_is_honored() {
            let dir = TempDir::new().unwrap();
            let (builder, request) = fake_tool(
                &dir,
                "mkdir -p target/docs/html && echo x > target/docs/html/index.html",
                "OUTPUT_DIRECTORY = target/docs\n",
            );

            let root = dir.path().canonicalize().unwrap();
            let archive = builder.build(&request).unwrap();
            assert_eq!(archive, Some(root.join("target/docs").join("demo-1.2.tar")));
        }

        #[test]
        fn test_nonzero_exit_reports_no_artifact() {
            let dir = TempDir::new().unwrap();
            let (builder, request) = fake_tool(&dir, "exit 1", "PROJECT_NAME = demo\n");
            assert_eq!(builder.build(&request).unwrap(), None);
        }

        #[test]
        fn test_empty_output_reports_no_artifact() {
            let dir = TempDir::new().unwrap();
            let (builder, request) = fake_tool(&dir, "mkdir -p html", "PROJECT_NAME = demo\n");
            assert_eq!(builder.build(&request).unwrap(), None);
        }

        #[test]
        fn test_stale_output_is_removed_first() {
            let dir = TempDir::new().unwrap();
            let (builder, request) = fake_tool(&dir, "exit 0", "PROJECT_NAME = demo\n");

            // Output surviving from an earlier run must not count.
            fs::create_dir_all(dir.path().join("html")).unwrap();
            fs::write(dir.path().join("html").join("stale.html"), "old").unwrap();

            assert_eq!(builder.build(&request).unwrap(), None);
            assert!(!dir.path().join("html").exists());
        }
    }
}
