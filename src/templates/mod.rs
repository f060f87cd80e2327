//! HTML templates and styling for the site.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants
//! - `components` - Shared HTML components (nav bar, base template, default index)
//! - `detail` - Details page template for one publication
//! - `script` - Client-side script for scroll highlighting and citation toggles

mod components;
mod detail;
mod script;
mod styles;

pub use components::{base_html, default_index_page, nav_bar, site_nav_links, DEFAULT_SECTIONS};
pub use detail::{default_template, render_detail_page, DESCRIPTION_CHARS};
pub use script::SITE_SCRIPT;
pub use styles::STYLE;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
