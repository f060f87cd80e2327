//! Shared HTML components for the site.
//!
//! Contains the navigation bar, the base page template, and the default
//! index page used when the site root has no index of its own.

use crate::models::NavLink;

use super::html_escape;
use super::script::SITE_SCRIPT;
use super::styles::STYLE;

// ============================================================================
// Navigation Bar
// ============================================================================

/// Sections of the default index page, as `(id, label)`.
pub const DEFAULT_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("publications", "Publications"),
];

/// Navigation links for the default sections. `prefix` is prepended to each
/// fragment, e.g. `"../index.html"` for pages inside `publications/`.
pub fn site_nav_links(prefix: &str) -> Vec<NavLink> {
    DEFAULT_SECTIONS
        .iter()
        .map(|(id, label)| NavLink::new(format!("{}#{}", prefix, id), *label))
        .collect()
}

pub fn nav_bar(links: &[NavLink]) -> String {
    let items: String = links
        .iter()
        .map(|link| {
            let class = if link.active { "nav-item active" } else { "nav-item" };
            format!(
                r#"<a href="{href}" class="{class}">{label}</a>"#,
                href = html_escape(&link.href),
                class = class,
                label = html_escape(&link.label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"<nav class="nav-bar">
            {}
        </nav>"#,
        items
    )
}

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(title: &str, content: &str, links: &[NavLink]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    {nav}
    <div class="container">
        {content}
    </div>
    {SITE_SCRIPT}
</body>
</html>"#,
        title = html_escape(title),
        nav = nav_bar(links),
    )
}

/// Index page used when the site root has neither `index.template.html` nor
/// `index.html`.
pub fn default_index_page() -> String {
    let content = r#"<section id="about">
            <h1>Publications</h1>
        </section>
        <section id="publications">
            <div id="publication-list"></div>
        </section>"#;
    base_html("Publications", content, &site_nav_links(""))
}
