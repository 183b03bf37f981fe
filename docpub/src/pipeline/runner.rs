//! Pipeline orchestration.
//!
//! This module implements the publishing run: resolve the configuration
//! and rewrite the doc-tool config, build and package the documentation,
//! upload the archive. The first failure is terminal; nothing is retried.

use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::keys::{CanonicalKey, DocToolKey, ProjectKey, Section};
use crate::config::ConfigContext;
use crate::doctool::{ToolConfigFile, PROJECT_NAME, PROJECT_NUMBER};
use crate::error::{Error, Result};
use crate::logging::Logger;

use super::artifact::{BuildRequest, DocArtifact};
use super::builder::DocBuilder;
use super::state::{PipelineState, Stage};
use super::target::UploadTarget;
use super::uploader::DocUploader;

/// Everything the resolve stage hands to the later stages.
///
/// The working copy is a live temp file; dropping it removes the file,
/// which must happen once the builder has consumed it and on every
/// failure path.
struct ResolvedRun {
    request: BuildRequest,
    language: String,
    working_copy: NamedTempFile,
}

/// A single publishing run over injected collaborators.
///
/// The pipeline moves forward through the states in
/// [`PipelineState`]; the first stage failure is terminal and is
/// reported through [`state`](Self::state) as well as the returned error.
///
/// # Examples
///
/// ```no_run
/// use docpub::config::{Config, ConfigContext};
/// use docpub::pipeline::{DoxygenBuilder, HostMyDocsUploader, Pipeline};
/// use docpub::init_logger;
///
/// let context = ConfigContext::new(Config::default());
/// let builder = DoxygenBuilder::default();
/// let uploader = HostMyDocsUploader::new();
/// let logger = init_logger(false);
///
/// let mut pipeline = Pipeline::new(&context, &builder, &uploader, &logger);
/// pipeline.run().unwrap();
/// ```
pub struct Pipeline<'a, B: DocBuilder, U: DocUploader> {
    context: &'a ConfigContext,
    builder: &'a B,
    uploader: &'a U,
    logger: &'a Logger,
    state: PipelineState,
}

impl<'a, B: DocBuilder, U: DocUploader> Pipeline<'a, B, U> {
    /// Creates a pipeline over a configuration context and collaborators.
    #[must_use]
    pub const fn new(
        context: &'a ConfigContext,
        builder: &'a B,
        uploader: &'a U,
        logger: &'a Logger,
    ) -> Self {
        Self {
            context,
            builder,
            uploader,
            logger,
            state: PipelineState::Idle,
        }
    }

    /// The current pipeline state.
    #[must_use]
    pub const fn state(&self) -> PipelineState {
        self.state
    }

    /// Runs the pipeline to completion or first failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BuildFailed`] when the builder produces no
    /// artifact, [`Error::UploadFailed`] when the host does not accept
    /// the archive, and otherwise whatever fault a stage raised. The
    /// failed stage is recorded in [`state`](Self::state).
    pub fn run(&mut self) -> Result<()> {
        // Step 1: Resolve configuration and rewrite the doc-tool config
        let resolved = match self.resolve() {
            Ok(resolved) => resolved,
            Err(error) => return self.fail(Stage::Resolve, error),
        };
        self.state = PipelineState::ConfigUpdated;
        self.logger.info("doc-tool configuration updated");

        // Step 2: Build and package the documentation
        let archive_path = match self.builder.build(&resolved.request) {
            Ok(Some(path)) => path,
            Ok(None) => {
                return self.fail(
                    Stage::Build,
                    Error::BuildFailed {
                        reason: "builder produced no artifact".to_string(),
                    },
                );
            }
            Err(error) => return self.fail(Stage::Build, error),
        };
        let ResolvedRun {
            request,
            language,
            working_copy,
        } = resolved;
        // The builder has consumed the working copy; remove it before upload.
        drop(working_copy);
        self.state = PipelineState::Built;
        self.logger
            .info(&format!("documentation built: {}", archive_path.display()));

        // Step 3: Upload the archive to the host
        let artifact = DocArtifact {
            archive_path,
            name: request.project_name,
            version: request.project_version,
            language,
        };
        let host = match self.context.host() {
            Ok(host) => host,
            Err(error) => return self.fail(Stage::Upload, error),
        };
        let target = match UploadTarget::from_host(host) {
            Ok(target) => target,
            Err(error) => return self.fail(Stage::Upload, error),
        };
        match self.uploader.upload(&target, &artifact) {
            Ok(true) => {
                self.state = PipelineState::Uploaded;
                self.logger
                    .info(&format!("documentation uploaded to {}", target.base_url()));
                Ok(())
            }
            Ok(false) => self.fail(
                Stage::Upload,
                Error::UploadFailed {
                    reason: "host did not accept the archive".to_string(),
                },
            ),
            Err(error) => self.fail(Stage::Upload, error),
        }
    }

    /// Resolve the configuration, rewrite project metadata into the
    /// doc-tool config, and persist the working copy next to the original.
    fn resolve(&self) -> Result<ResolvedRun> {
        // First section access triggers lazy resolution.
        let doc_tool = self.context.doc_tool()?.clone();
        let project = self.context.project()?.clone();

        // Both fields are enforced by validation; the typed error keeps
        // this total without a panic path.
        let config_path = doc_tool.config_file_path.ok_or(Error::MissingField {
            section: Section::DocTool,
            field: CanonicalKey::DocTool(DocToolKey::ConfigFile),
        })?;
        let language = project.language.ok_or(Error::MissingField {
            section: Section::Project,
            field: CanonicalKey::Project(ProjectKey::Language),
        })?;

        self.logger.info("updating doc-tool configuration");
        self.logger
            .debug(&format!("doc-tool configuration: {}", config_path.display()));

        let mut tool_config = ToolConfigFile::load(&config_path)?;
        if let Some(version) = &project.version {
            let old = tool_config.value(PROJECT_NUMBER).unwrap_or("").to_string();
            self.logger
                .debug(&format!("update PROJECT_NUMBER from '{old}' to '{version}'"));
            tool_config.set(PROJECT_NUMBER, version);
        }
        if let Some(name) = &project.name {
            let old = tool_config.value(PROJECT_NAME).unwrap_or("").to_string();
            self.logger
                .debug(&format!("update PROJECT_NAME from '{old}' to '{name}'"));
            tool_config.set(PROJECT_NAME, name);
        }

        // Effective metadata: the project section when present, else
        // whatever the tool config carries, else empty.
        let project_name = tool_config.value(PROJECT_NAME).unwrap_or("").to_string();
        let project_version = tool_config.value(PROJECT_NUMBER).unwrap_or("").to_string();

        let parent = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let working_copy = tempfile::Builder::new()
            .prefix("Doxyfile.")
            .suffix(".docpub")
            .tempfile_in(&parent)?;
        tool_config.store(working_copy.path())?;
        self.logger
            .debug(&format!("working copy: {}", working_copy.path().display()));

        Ok(ResolvedRun {
            request: BuildRequest {
                config_path: working_copy.path().to_path_buf(),
                project_name,
                project_version,
            },
            language,
            working_copy,
        })
    }

    fn fail(&mut self, stage: Stage, error: Error) -> Result<()> {
        self.state = PipelineState::Failed(stage);
        self.logger.error(&format!("{stage} stage failed: {error}"));
        Err(error)
    }
}
