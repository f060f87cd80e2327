//! PDF link resolution for generated pages.
//!
//! Publication data stores PDF links either as absolute URLs or as paths
//! relative to the site root. Citation metadata needs an absolute URL,
//! while the button on a details page (which lives one directory down, in
//! `publications/`) needs a link relative to that page.

use url::Url;

use crate::error::SiteError;

/// Whether a link is an absolute `http`/`https` URL.
pub fn is_absolute_http(link: &str) -> bool {
    match Url::parse(link) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Validate and normalize a site base URL (no trailing slash).
pub fn parse_base_url(base: &str) -> Result<String, SiteError> {
    let url = Url::parse(base).map_err(|source| SiteError::InvalidUrl {
        url: base.to_string(),
        source,
    })?;
    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Absolute URL of a PDF, for `citation_pdf_url` metadata.
pub fn absolute_pdf_url(base_url: &str, link: &str) -> String {
    if is_absolute_http(link) {
        return link.to_string();
    }
    let clean = link.replace("../", "").replace("./", "");
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        clean.trim_start_matches('/')
    )
}

/// PDF link as seen from a page inside `publications/`.
pub fn display_pdf_link(link: &str) -> String {
    if is_absolute_http(link) {
        return link.to_string();
    }
    let prefix = format!("{}/", crate::PUBLICATIONS_DIR);
    match link.strip_prefix(&prefix) {
        Some(rest) => rest.to_string(),
        None => link.to_string(),
    }
}

/// Absolute URL of a site-relative path.
pub fn site_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
