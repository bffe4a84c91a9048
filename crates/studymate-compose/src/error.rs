use thiserror::Error;

/// Boxed error carried across the uploader seam.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while composing or resolving a post.
#[derive(Error, Debug)]
pub enum ComposeError {
    /// The staged payload is not an image type.
    #[error("unsupported-file: '{file_name}' is not an image")]
    UnsupportedFile { file_name: String },

    /// The staged payload exceeds the inline-image size cap.
    #[error("file-too-large: '{file_name}' is {size} bytes (max {max})")]
    FileTooLarge {
        file_name: String,
        size: usize,
        max: usize,
    },

    /// An upload failed mid-resolution; the submit must be aborted.
    #[error("inline-image-upload-failed: '{file_name}'")]
    InlineImageUploadFailed {
        file_name: String,
        #[source]
        source: BoxError,
    },
}
