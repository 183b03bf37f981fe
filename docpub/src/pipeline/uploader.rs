//! Documentation uploaders.

use std::fs;

#[cfg(test)]
use mockall::automock;

use crate::error::Result;
use crate::pipeline::artifact::DocArtifact;
use crate::pipeline::target::UploadTarget;

/// Multipart boundary for upload requests. Long enough not to collide
/// with archive bytes in practice.
const BOUNDARY: &str = "----docpub-2qYt7Vxz9Kf4mH0b";

/// Uploads documentation archives to a host.
///
/// `Ok(true)` means the host accepted the archive. `Ok(false)` means the
/// host rejected it or could not be reached; the pipeline maps it to the
/// upload-failure exit path. `Err` is reserved for local faults such as an
/// unreadable archive.
#[cfg_attr(test, automock)]
pub trait DocUploader {
    /// Upload `artifact` to `target`.
    ///
    /// # Errors
    ///
    /// Local faults only; a rejected or unreachable host is `Ok(false)`.
    fn upload(&self, target: &UploadTarget, artifact: &DocArtifact) -> Result<bool>;
}

/// Uploads to a HostMyDocs server through its `addProject` endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostMyDocsUploader;

impl HostMyDocsUploader {
    /// Create an uploader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocUploader for HostMyDocsUploader {
    fn upload(&self, target: &UploadTarget, artifact: &DocArtifact) -> Result<bool> {
        let archive = fs::read(&artifact.archive_path)?;
        let body = multipart_body(artifact, &archive);

        let url = format!("{}/BackEnd/addProject/", target.base_url());
        let credentials = base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            format!("{}:{}", target.login, target.password),
        );

        log::debug!("uploading {} to {url}", artifact.file_name());
        let response = ureq::post(&url)
            .set("Authorization", &format!("Basic {credentials}"))
            .set(
                "Content-Type",
                &format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .send_bytes(&body);

        match response {
            Ok(response) if (200..300).contains(&response.status()) => {
                log::debug!("host answered {}", response.status());
                Ok(true)
            }
            Ok(response) => {
                log::error!("host answered {} for {url}", response.status());
                Ok(false)
            }
            Err(ureq::Error::Status(code, _)) => {
                log::error!("host rejected the upload with status {code}");
                Ok(false)
            }
            Err(err) => {
                log::error!("upload transport failure: {err}");
                Ok(false)
            }
        }
    }
}

fn multipart_body(artifact: &DocArtifact, archive: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(archive.len() + 1024);
    for (field, value) in [
        ("name", artifact.name.as_str()),
        ("version", artifact.version.as_str()),
        ("language", artifact.language.as_str()),
    ] {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"archive\"; \
             filename=\"{}\"\r\nContent-Type: application/x-tar\r\n\r\n",
            artifact.file_name()
        )
        .as_bytes(),
    );
    body.extend_from_slice(archive);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}
