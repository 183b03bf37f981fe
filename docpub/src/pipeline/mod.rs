//! Publishing pipeline for docpub.
//!
//! A publishing run has three stages, sequenced by [`Pipeline`]:
//!
//! 1. **Resolve**: pull the doc-tool and project sections from the
//!    configuration context, rewrite project metadata into a working copy
//!    of the doc-tool configuration.
//! 2. **Build**: hand the working copy to a [`DocBuilder`], which runs the
//!    tool and packages its HTML output into a tar archive.
//! 3. **Upload**: hand the archive to a [`DocUploader`] targeting the
//!    configured host.
//!
//! The builder and uploader are traits so the orchestration can be tested
//! without Doxygen or a live host; [`DoxygenBuilder`] and
//! [`HostMyDocsUploader`] are the production implementations. Stage
//! failures are terminal and map onto the process exit taxonomy: build
//! failures, upload failures, and everything else.

pub mod artifact;
pub mod builder;
pub mod bundle;
pub mod runner;
pub mod state;
pub mod target;
pub mod uploader;

// Re-export key types at module root
pub use artifact::{BuildRequest, DocArtifact};
pub use builder::{DocBuilder, DoxygenBuilder};
pub use runner::Pipeline;
pub use state::{PipelineState, Stage};
pub use target::UploadTarget;
pub use uploader::{DocUploader, HostMyDocsUploader};
