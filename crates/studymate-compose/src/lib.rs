//! # studymate-compose
//!
//! The post-composition pipeline: images inserted into the editor are
//! staged in memory as `data:` URLs ([`PendingImages`]) and only
//! uploaded when the post is submitted, at which point the
//! [`resolver`] walks the composed HTML, uploads each staged payload
//! strictly in document order, and rewrites the `<img>` references to
//! their permanent server locations.
//!
//! The markup is handled as a real document tree ([`Document`]) rather
//! than by string replacement, so rewriting preserves well-formedness.

pub mod document;
pub mod resolver;
pub mod staging;

mod error;

pub use document::Document;
pub use error::{BoxError, ComposeError};
pub use resolver::{resolve_inline_images, ImageUploader};
pub use staging::{PendingImages, StagedImage};
