//! Inline-image upload resolver.
//!
//! Takes a finalized document plus the staging map built during
//! composition and produces markup safe to persist remotely: every
//! staged `data:` reference is uploaded (strictly one at a time, in
//! document order) and rewritten to its permanent server URL.
//!
//! A reference present in the markup but absent from the map is left
//! untouched; this tolerates documents whose images are already
//! permanent, e.g. an unmodified post being edited.  On upload failure
//! the whole resolution aborts; the caller must not persist the
//! partially rewritten markup it never receives.

use std::collections::HashMap;

use crate::document::Document;
use crate::error::{BoxError, ComposeError};
use crate::staging::{PendingImages, StagedImage};

/// Seam to the remote content store.  Implemented by the API client;
/// tests substitute a recording mock.
#[allow(async_fn_in_trait)]
pub trait ImageUploader {
    /// Upload one image payload and return its permanent, resolvable URL.
    async fn upload_image(&self, image: &StagedImage) -> Result<String, BoxError>;
}

/// Resolve every staged inline image in `html`.
///
/// On success the returned markup contains no temporary references and
/// the staging map is empty.  Entries uploaded before a failure are
/// released; the remaining ones stay staged so the same submit can be
/// retried.
pub async fn resolve_inline_images<U: ImageUploader>(
    html: &str,
    pending: &mut PendingImages,
    uploader: &U,
) -> Result<String, ComposeError> {
    // Fast path: nothing staged, no parsing cost.
    if pending.is_empty() {
        return Ok(html.to_string());
    }

    let doc = Document::parse(html);

    // Only images that use the temporary scheme AND have a live entry.
    let targets: Vec<_> = doc
        .images()
        .into_iter()
        .filter(|img| {
            img.src()
                .map(|src| src.starts_with("data:") && pending.contains(&src))
                .unwrap_or(false)
        })
        .collect();

    if targets.is_empty() {
        return Ok(html.to_string());
    }

    tracing::debug!(count = targets.len(), "resolving inline images");

    // A reference duplicated in the markup (a copy-pasted element) is
    // uploaded once; later occurrences reuse the resolved URL.
    let mut resolved: HashMap<String, String> = HashMap::new();

    for img in targets {
        let Some(reference) = img.src() else {
            continue;
        };
        if let Some(url) = resolved.get(&reference) {
            img.set_src(url);
            continue;
        }
        let Some(staged) = pending.get(&reference).cloned() else {
            continue;
        };

        // Sequential by contract: the next upload starts only after
        // this one resolved.
        let url = uploader.upload_image(&staged).await.map_err(|source| {
            ComposeError::InlineImageUploadFailed {
                file_name: staged.file_name.clone(),
                source,
            }
        })?;

        img.set_src(&url);
        pending.release(&reference);

        tracing::debug!(file_name = %staged.file_name, url = %url, "inline image uploaded");
        resolved.insert(reference, url);
    }

    Ok(doc.inner_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock uploader that records invocation order and detects overlap.
    #[derive(Default)]
    struct MockUploader {
        calls: Mutex<Vec<String>>,
        in_flight: Mutex<bool>,
        fail_on: Option<String>,
    }

    impl MockUploader {
        fn failing_on(file_name: &str) -> Self {
            Self {
                fail_on: Some(file_name.to_string()),
                ..Self::default()
            }
        }
    }

    impl ImageUploader for MockUploader {
        async fn upload_image(&self, image: &StagedImage) -> Result<String, BoxError> {
            {
                let mut flag = self.in_flight.lock().unwrap();
                assert!(!*flag, "two uploads in flight simultaneously");
                *flag = true;
            }
            tokio::task::yield_now().await;

            self.calls.lock().unwrap().push(image.file_name.clone());
            *self.in_flight.lock().unwrap() = false;

            if self.fail_on.as_deref() == Some(image.file_name.as_str()) {
                return Err("upload rejected".into());
            }
            Ok(format!("https://files.example/{}", image.file_name))
        }
    }

    fn staged_doc(names: &[&str]) -> (String, PendingImages) {
        let mut pending = PendingImages::new();
        let mut html = String::from("<p>log</p>");
        for name in names {
            let reference = pending.stage(name, name.as_bytes().to_vec()).unwrap();
            html.push_str(&format!(r#"<img src="{reference}">"#));
        }
        (html, pending)
    }

    #[tokio::test]
    async fn empty_map_returns_input_unchanged() {
        let mut pending = PendingImages::new();
        let html = "<p>untouched   <em>markup</em></p>";
        let out = resolve_inline_images(html, &mut pending, &MockUploader::default())
            .await
            .unwrap();
        assert_eq!(out, html);
    }

    #[tokio::test]
    async fn all_references_resolved_and_map_drained() {
        let (html, mut pending) = staged_doc(&["a.png", "b.png"]);
        let uploader = MockUploader::default();

        let out = resolve_inline_images(&html, &mut pending, &uploader)
            .await
            .unwrap();

        assert!(!out.contains("data:"));
        assert!(out.contains("https://files.example/a.png"));
        assert!(out.contains("https://files.example/b.png"));
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn uploads_run_in_document_order() {
        let (html, mut pending) = staged_doc(&["a.png", "b.png", "c.png"]);
        let uploader = MockUploader::default();

        resolve_inline_images(&html, &mut pending, &uploader)
            .await
            .unwrap();

        assert_eq!(
            *uploader.calls.lock().unwrap(),
            vec!["a.png", "b.png", "c.png"]
        );
    }

    #[tokio::test]
    async fn stale_reference_left_untouched() {
        // A data: URL that was never staged (or already released).
        let html = r#"<p><img src="data:image/png;base64,QUJD"></p>"#;
        let mut pending = PendingImages::new();
        pending.stage("other.png", b"zzz".to_vec()).unwrap();

        let out = resolve_inline_images(html, &mut pending, &MockUploader::default())
            .await
            .unwrap();
        assert_eq!(out, html);
        // The unrelated entry was never a match, so it stays staged.
        assert_eq!(pending.len(), 1);
    }

    #[tokio::test]
    async fn permanent_urls_ignored_on_second_resolution() {
        let (html, mut pending) = staged_doc(&["a.png"]);
        let uploader = MockUploader::default();

        let resolved = resolve_inline_images(&html, &mut pending, &uploader)
            .await
            .unwrap();
        assert!(pending.is_empty());

        // Resolving again is the empty-map fast path: byte-for-byte.
        let again = resolve_inline_images(&resolved, &mut pending, &uploader)
            .await
            .unwrap();
        assert_eq!(again, resolved);
        assert_eq!(uploader.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicated_reference_uploads_once_and_rewrites_every_occurrence() {
        let mut pending = PendingImages::new();
        let reference = pending.stage("a.png", b"abc".to_vec()).unwrap();
        let html = format!(r#"<img src="{reference}"><p>x</p><img src="{reference}">"#);
        let uploader = MockUploader::default();

        let out = resolve_inline_images(&html, &mut pending, &uploader)
            .await
            .unwrap();

        assert!(!out.contains("data:"));
        assert_eq!(out.matches("https://files.example/a.png").count(), 2);
        assert_eq!(uploader.calls.lock().unwrap().len(), 1);
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn failure_aborts_and_keeps_remaining_entries() {
        let (html, mut pending) = staged_doc(&["a.png", "b.png", "c.png"]);
        let uploader = MockUploader::failing_on("b.png");

        let err = resolve_inline_images(&html, &mut pending, &uploader)
            .await
            .unwrap_err();

        match err {
            ComposeError::InlineImageUploadFailed { file_name, .. } => {
                assert_eq!(file_name, "b.png");
            }
            other => panic!("unexpected error: {other}"),
        }

        // a.png uploaded and released; b.png and c.png still staged.
        assert_eq!(pending.len(), 2);
        assert_eq!(*uploader.calls.lock().unwrap(), vec!["a.png", "b.png"]);
    }
}
