//! Pipeline state machine.
//!
//! A publishing run moves forward through `Idle → ConfigUpdated → Built →
//! Uploaded`. The first stage failure moves the pipeline to the terminal
//! `Failed` state carrying the stage that failed; nothing is retried.

use std::fmt;

/// Stages of a publishing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Configuration resolution and doc-tool config rewrite.
    Resolve,
    /// Documentation build and packaging.
    Build,
    /// Archive upload to the documentation host.
    Upload,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resolve => "resolve",
            Self::Build => "build",
            Self::Upload => "upload",
        };
        write!(f, "{name}")
    }
}

/// Observable state of a publishing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    /// No stage has run yet.
    #[default]
    Idle,
    /// The doc-tool configuration working copy has been written.
    ConfigUpdated,
    /// The builder produced an archive.
    Built,
    /// The host accepted the archive. Terminal.
    Uploaded,
    /// A stage failed. Terminal.
    Failed(Stage),
}

impl PipelineState {
    /// Whether the pipeline can make no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Uploaded | Self::Failed(_))
    }

    /// The failed stage, when the pipeline has failed.
    #[must_use]
    pub const fn failed_stage(self) -> Option<Stage> {
        match self {
            Self::Failed(stage) => Some(stage),
            _ => None,
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::ConfigUpdated => write!(f, "config-updated"),
            Self::Built => write!(f, "built"),
            Self::Uploaded => write!(f, "uploaded"),
            Self::Failed(stage) => write!(f, "failed({stage})"),
        }
    }
}
