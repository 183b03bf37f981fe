//! Publish operation implementation.
//!
//! This module wires the parsed command line into a pipeline run: explicit
//! flags become the override tree, the configuration is resolved once, the
//! collaborators are constructed from the resolved doc-tool section, and
//! the pipeline carries the run through build and upload.

use docpub::config::ConfigContext;
use docpub::pipeline::{DoxygenBuilder, HostMyDocsUploader, Pipeline};
use docpub::{LogLevel, Logger};

use crate::cli::Cli;
use crate::error::CliError;

/// Execute the publish run described by the parsed command line.
pub fn execute(cli: &Cli, logger: &Logger) -> Result<(), CliError> {
    // 1. Build the sticky context over the explicit flags
    let context = ConfigContext::new(cli.overrides());

    // 2. Resolve the full configuration; the first access decides for the
    //    whole run
    let config = context.full().map_err(CliError::from)?;

    // 3. A debug flag arriving through the file raises verbosity the same
    //    way --debug does
    let upgraded;
    let logger = if config.general.debug_enabled() && logger.level() < LogLevel::Verbose {
        upgraded = Logger::new(LogLevel::Verbose);
        &upgraded
    } else {
        logger
    };
    logger.debug(&format!("resolved configuration: {config:?}"));

    // 4. Construct the collaborators from the resolved doc-tool section
    let builder = DoxygenBuilder::new(config.doc_tool.executable_path.as_deref());
    let uploader = HostMyDocsUploader::new();

    // 5. Run the pipeline to completion or first failure
    let mut pipeline = Pipeline::new(&context, &builder, &uploader, logger);
    pipeline.run().map_err(CliError::from)
}
