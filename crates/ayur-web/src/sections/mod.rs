//! Section renderers shared by the pages.

mod cart;
mod layout;
mod product;
mod program;
mod summary;

pub use cart::*;
pub use layout::*;
pub use product::*;
pub use program::*;
pub use summary::*;

/// Escape text for HTML element content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<script>alert("x & y's")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; y&#39;s&quot;)&lt;/script&gt;"
        );
        assert_eq!(html_escape("Brahmi Oil"), "Brahmi Oil");
    }
}
