//! Build requests and documentation artifacts.

use std::path::PathBuf;

/// What a builder needs to produce documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Doc-tool configuration the builder must consume. During a pipeline
    /// run this is the rewritten working copy, not the original file.
    pub config_path: PathBuf,
    /// Effective project name after metadata resolution.
    pub project_name: String,
    /// Effective project version after metadata resolution.
    pub project_version: String,
}

/// A built documentation archive plus the metadata the host needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocArtifact {
    /// Archive produced by the builder.
    pub archive_path: PathBuf,
    /// Project name to publish under.
    pub name: String,
    /// Project version to publish under.
    pub version: String,
    /// Language shown next to the project on the host.
    pub language: String,
}

impl DocArtifact {
    /// File name of the archive, for upload forms.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.archive_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("archive.tar")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let artifact = DocArtifact {
            archive_path: PathBuf::from("/tmp/out/demo-1.0.tar"),
            name: "demo".to_string(),
            version: "1.0".to_string(),
            language: "cpp".to_string(),
        };
        assert_eq!(artifact.file_name(), "demo-1.0.tar");
    }

    #[test]
    fn test_file_name_fallback() {
        let artifact = DocArtifact {
            archive_path: PathBuf::from("/"),
            name: String::new(),
            version: String::new(),
            language: String::new(),
        };
        assert_eq!(artifact.file_name(), "archive.tar");
    }
}
