//! Static site generation.
//!
//! `build_site` runs the whole pipeline: details pages for every entry with
//! `create_page`, the sitemap, removal of stale pages, and (when the site
//! has an `index.template.html`) a prerendered `index.html`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::links::site_url;
use crate::models::Publication;
use crate::render::{render_list_into, PublicationList};
use crate::templates::{default_template, render_detail_page};
use crate::{INDEX_PATH, PUBLICATIONS_DIR};

// ============================================================================
// Templates
// ============================================================================

/// The site's `template.html`, or the built-in template when it has none.
pub fn load_template(path: &Path) -> Result<String> {
    if path.exists() {
        fs::read_to_string(path).map_err(|e| SiteError::io("reading", path, e))
    } else {
        debug!(path = %path.display(), "no template, using built-in");
        Ok(default_template())
    }
}

/// Entries that get a details page. Hidden entries are included.
pub fn page_entries(papers: &[Publication]) -> impl Iterator<Item = &Publication> {
    papers.iter().filter(|paper| paper.create_page)
}

/// Find the details-page entry for `id`.
pub fn find_page<'a>(papers: &'a [Publication], id: &str) -> Option<&'a Publication> {
    page_entries(papers).find(|paper| paper.id == id)
}

// ============================================================================
// Details Pages
// ============================================================================

/// Write one page per `create_page` entry into `out_dir`. Returns the file
/// names written, in data order.
pub fn generate_pages(
    papers: &[Publication],
    template: &str,
    base_url: &str,
    out_dir: &Path,
) -> Result<Vec<String>> {
    fs::create_dir_all(out_dir).map_err(|e| SiteError::io("creating", out_dir, e))?;

    let mut written = Vec::new();
    for paper in page_entries(papers) {
        let filename = paper.page_filename();
        let path = out_dir.join(&filename);
        let html = render_detail_page(paper, template, base_url);
        fs::write(&path, html).map_err(|e| SiteError::io("writing", &path, e))?;
        debug!(path = %path.display(), "wrote details page");
        written.push(filename);
    }
    info!(count = written.len(), "generated details pages");
    Ok(written)
}

// ============================================================================
// Sitemap
// ============================================================================

/// Sitemap URLs: the index page first, then every details page.
pub fn sitemap_urls(base_url: &str, papers: &[Publication]) -> Vec<String> {
    let mut urls = vec![site_url(base_url, INDEX_PATH)];
    urls.extend(
        page_entries(papers)
            .map(|paper| site_url(base_url, &format!("{}/{}", PUBLICATIONS_DIR, paper.page_filename()))),
    );
    urls
}

pub fn render_sitemap(urls: &[String], lastmod: NaiveDate) -> String {
    let lastmod = lastmod.format("%Y-%m-%d").to_string();
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for url in urls {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", crate::templates::html_escape(url)));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>");
    xml
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ============================================================================
// Orphan Cleanup
// ============================================================================

/// Delete `.html` files directly inside `out_dir` that are not in `keep`.
/// Returns the deleted paths.
pub fn cleanup_orphans(out_dir: &Path, keep: &HashSet<String>) -> Result<Vec<PathBuf>> {
    let mut deleted = Vec::new();
    if !out_dir.exists() {
        return Ok(deleted);
    }

    for entry in WalkDir::new(out_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| SiteError::Walk {
            path: out_dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.ends_with(".html") || keep.contains(&name) {
            continue;
        }
        fs::remove_file(entry.path()).map_err(|e| SiteError::io("deleting", entry.path(), e))?;
        info!(file = %name, "deleted orphan page");
        deleted.push(entry.path().to_path_buf());
    }
    deleted.sort();
    Ok(deleted)
}

// ============================================================================
// Full Build
// ============================================================================

#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages: Vec<String>,
    pub deleted: Vec<PathBuf>,
    pub index_rendered: bool,
}

/// Build the site under `config.root`. Publication data that cannot be
/// loaded aborts the build before anything is written.
pub async fn build_site(config: &SiteConfig, client: &reqwest::Client) -> Result<BuildReport> {
    let papers = config.source.fetch(client).await?;
    info!(source = %config.source, count = papers.len(), "loaded publications");

    let template = load_template(&config.template_path())?;
    let out_dir = config.output_dir();
    let pages = generate_pages(&papers, &template, &config.base_url, &out_dir)?;

    let sitemap = render_sitemap(&sitemap_urls(&config.base_url, &papers), today());
    let sitemap_path = config.sitemap_path();
    fs::write(&sitemap_path, sitemap).map_err(|e| SiteError::io("writing", &sitemap_path, e))?;
    info!(path = %sitemap_path.display(), "generated sitemap");

    let keep: HashSet<String> = pages.iter().cloned().collect();
    let deleted = cleanup_orphans(&out_dir, &keep)?;

    let index_template = config.index_template_path();
    let index_rendered = if index_template.exists() {
        let page = fs::read_to_string(&index_template)
            .map_err(|e| SiteError::io("reading", &index_template, e))?;
        let mut list = PublicationList::new();
        list.show(&papers);
        let rendered = render_list_into(&page, &list);
        let index_path = config.index_path();
        fs::write(&index_path, rendered).map_err(|e| SiteError::io("writing", &index_path, e))?;
        info!(path = %index_path.display(), "rendered index page");
        true
    } else {
        false
    };

    Ok(BuildReport {
        pages,
        deleted,
        index_rendered,
    })
}
