//! File endpoints: multipart upload and displayable image URLs.

use reqwest::multipart::{Form, Part};
use studymate_compose::{BoxError, ImageUploader, StagedImage};
use studymate_shared::types::{UploadKind, UploadReport};

use crate::client::ApiClient;
use crate::error::ApiError;

/// One file in an upload batch.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ApiClient {
    /// `POST /files/upload`: multipart batch upload.  Each file goes
    /// into a `files` part; the category goes into the `type` field.
    pub async fn upload_files(
        &self,
        files: Vec<UploadFile>,
        kind: UploadKind,
    ) -> Result<UploadReport, ApiError> {
        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.mime)?;
            form = form.part("files", part);
        }
        form = form.text("type", kind.as_str());

        let request = self.http().post(self.url("/files/upload")).multipart(form);
        self.execute(request).await
    }

    /// Build the displayable URL for a stored image.  An empty filename
    /// yields an empty string, matching the original client.
    pub fn image_url(&self, filename: &str, kind: UploadKind) -> String {
        if filename.is_empty() {
            return String::new();
        }

        let base = format!("{}/files/images/view", self.base_url());
        match reqwest::Url::parse_with_params(&base, &[("filename", filename), ("type", kind.as_str())]) {
            Ok(url) => url.to_string(),
            Err(err) => {
                tracing::warn!(filename = %filename, error = %err, "could not build image URL");
                String::new()
            }
        }
    }
}

impl ImageUploader for ApiClient {
    /// Upload one staged composer image and return its permanent,
    /// server-resolvable URL.
    async fn upload_image(&self, image: &StagedImage) -> Result<String, BoxError> {
        let report = self
            .upload_files(
                vec![UploadFile {
                    file_name: image.file_name.clone(),
                    mime: image.mime.to_string(),
                    bytes: image.bytes.clone(),
                }],
                UploadKind::Post,
            )
            .await?;

        let Some(stored_name) = report.success_file_names.first() else {
            return Err(Box::new(ApiError::UploadRejected(image.file_name.clone())));
        };

        Ok(self.image_url(stored_name, UploadKind::Post))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig::default()).unwrap()
    }

    #[test]
    fn image_url_encodes_query() {
        let url = client().image_url("스터디 인증.png", UploadKind::Post);
        assert!(url.starts_with("http://localhost:8090/api/v1/files/images/view?"));
        assert!(url.contains("type=POST"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn empty_filename_gives_empty_url() {
        assert_eq!(client().image_url("", UploadKind::Thumbnail), "");
    }
}
