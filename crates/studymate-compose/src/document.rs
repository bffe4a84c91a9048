//! Composed-document tree.
//!
//! Wraps the parsed HTML fragment produced by the editor.  The resolver
//! needs three things from it: the embedded `<img>` elements in
//! document order, attribute rewriting on them, and serialization back
//! to body-inner markup (the editor never stores the
//! `<html><head><body>` wrapper the parser adds).

use kuchikiki::traits::TendrilSink;
use kuchikiki::{parse_html, ElementData, NodeDataRef, NodeRef};

/// A parsed post body.
pub struct Document {
    root: NodeRef,
}

impl Document {
    /// Parse serialized editor markup into a tree.
    pub fn parse(html: &str) -> Self {
        Self {
            root: parse_html().one(html),
        }
    }

    /// Every embedded image element, in document order.
    pub fn images(&self) -> Vec<ImageNode> {
        self.root
            .select("img")
            .map(|sel| sel.map(ImageNode::new).collect())
            .unwrap_or_default()
    }

    /// Concatenated text content, markup stripped.
    pub fn text(&self) -> String {
        self.root.text_contents()
    }

    /// Plain-text length in characters, used for the content limit.
    pub fn text_len(&self) -> usize {
        self.text().chars().count()
    }

    /// Serialize back to markup, stripping the document wrapper the
    /// parser introduced (the equivalent of `body.innerHTML`).
    pub fn inner_html(&self) -> String {
        match self.root.select_first("body") {
            Ok(body) => body.as_node().children().map(|c| c.to_string()).collect(),
            Err(()) => self.root.to_string(),
        }
    }
}

/// Handle to one `<img>` element inside a [`Document`].
pub struct ImageNode {
    node: NodeDataRef<ElementData>,
}

impl ImageNode {
    fn new(node: NodeDataRef<ElementData>) -> Self {
        Self { node }
    }

    /// Current `src` attribute, if present.
    pub fn src(&self) -> Option<String> {
        self.node.attributes.borrow().get("src").map(str::to_string)
    }

    /// Rewrite the `src` attribute in place.
    pub fn set_src(&self, url: &str) {
        self.node
            .attributes
            .borrow_mut()
            .insert("src", url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_enumerate_in_document_order() {
        let doc = Document::parse(r#"<p>a <img src="one"> b</p><img src="two">"#);
        let srcs: Vec<_> = doc.images().iter().filter_map(|i| i.src()).collect();
        assert_eq!(srcs, vec!["one", "two"]);
    }

    #[test]
    fn rewrite_and_serialize_without_wrapper() {
        let doc = Document::parse(r#"<p><img src="old"></p>"#);
        doc.images()[0].set_src("https://cdn.example/new.png");

        let html = doc.inner_html();
        assert!(html.contains(r#"src="https://cdn.example/new.png""#));
        assert!(!html.contains("old"));
        assert!(!html.contains("<body"));
        assert!(!html.contains("<html"));
    }

    #[test]
    fn text_len_counts_characters() {
        let doc = Document::parse("<p>스터디 log</p>");
        assert_eq!(doc.text_len(), 7);
    }

    #[test]
    fn image_without_src_is_tolerated() {
        let doc = Document::parse("<p><img alt=\"x\"></p>");
        assert_eq!(doc.images().len(), 1);
        assert!(doc.images()[0].src().is_none());
    }
}
