//! Page shell, site header and footer.

use super::html_escape;
use crate::{Route, ViewContext};

/// Brand shown in every header.
pub const BRAND: &str = "AyurvedaCareConnect";

/// A header navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Drawn as a filled button rather than an outline.
    pub primary: bool,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            primary: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

/// Wrap a page body in a complete HTML document.
pub fn render_document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{}</title>
</head>
<body>
{}
</body>
</html>"#,
        html_escape(title),
        body
    )
}

/// Render the site header with the given navigation.
pub fn render_header(links: &[NavLink]) -> String {
    let nav: String = links
        .iter()
        .map(|link| {
            format!(
                r#"<a class="{}" href="{}">{}</a>"#,
                if link.primary { "button" } else { "button button--outline" },
                html_escape(&link.href),
                html_escape(&link.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<header class="site-header">
    <a class="brand" href="/"><span class="brand-mark">&#127807;</span> {}</a>
    <nav>
        {}
    </nav>
</header>"#,
        BRAND, nav
    )
}

/// Navigation for inner pages: home, plus whatever the page adds.
pub fn inner_nav(extra: &[NavLink]) -> Vec<NavLink> {
    let mut links = vec![NavLink::new("Back to Home", Route::Home.path())];
    links.extend_from_slice(extra);
    links
}

/// Link to the cart with its item count.
pub fn cart_link(ctx: &ViewContext<'_>) -> NavLink {
    NavLink::new(format!("Cart ({})", ctx.cart.total_items()), Route::Cart.path())
}

pub fn render_footer() -> String {
    format!(
        r#"<footer class="site-footer">
    <p>&copy; {} &middot; Ayurvedic wellness, rooted in tradition.</p>
</footer>"#,
        BRAND
    )
}
