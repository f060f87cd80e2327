//! Details page template for a single publication.
//!
//! A site may provide its own `template.html`; otherwise the built-in
//! template below is used. Placeholders are filled in a single pass, so
//! text taken from the data is never itself treated as a placeholder.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::links::{absolute_pdf_url, display_pdf_link};
use crate::models::Publication;
use crate::nav::highlight;

use super::components::{nav_bar, site_nav_links};
use super::html_escape;
use super::script::SITE_SCRIPT;
use super::styles::STYLE;

/// Number of abstract characters used for the description meta tag.
pub const DESCRIPTION_CHARS: usize = 160;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{([A-Z_]+)\}\}").unwrap());

pub fn default_template() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{{{TITLE}}}}</title>
    {{{{META_TAGS}}}}
    <style>{STYLE}</style>
</head>
<body>
    {{{{NAV}}}}
    <div class="container pub-detail">
        <h1>{{{{TITLE}}}}</h1>
        <p class="authors">{{{{AUTHORS}}}}</p>
        <p class="meta">{{{{VENUE}}}}</p>
        <div class="pub-actions">{{{{PDF_BUTTON}}}}</div>
        <div class="abstract">{{{{ABSTRACT}}}}</div>
        <h3>BibTeX</h3>
        <pre>{{{{BIBTEX}}}}</pre>
    </div>
    {SITE_SCRIPT}
</body>
</html>"#
    )
}

fn meta_tags(paper: &Publication, base_url: &str) -> String {
    let description: String = paper
        .abstract_text
        .as_deref()
        .unwrap_or("")
        .chars()
        .take(DESCRIPTION_CHARS)
        .collect();

    let mut tags = format!(
        r#"
    <meta name="citation_title" content="{title}">
    <meta name="citation_author" content="{authors}">
    <meta name="citation_publication_date" content="{year}">
    <meta name="citation_conference_title" content="{venue}">
    <meta name="description" content="{description}...">"#,
        title = html_escape(&paper.title),
        authors = html_escape(&paper.authors.join("; ")),
        year = html_escape(&paper.year.to_string()),
        venue = html_escape(&paper.venue),
        description = html_escape(&description),
    );

    if let Some(link) = paper.pdf_link() {
        tags.push_str(&format!(
            "\n    <meta name=\"citation_pdf_url\" content=\"{}\">",
            html_escape(&absolute_pdf_url(base_url, link))
        ));
    }
    tags
}

/// Fill `template` for `paper`.
pub fn render_detail_page(paper: &Publication, template: &str, base_url: &str) -> String {
    let pdf_button = match paper.pdf_link() {
        Some(link) => format!(
            r#"<a href="{}" class="btn-action" target="_blank">Read PDF</a>"#,
            html_escape(&display_pdf_link(link))
        ),
        None => String::new(),
    };

    let mut links = site_nav_links("../index.html");
    highlight(&mut links, Some("publications"));

    let abstract_html = ammonia::clean(paper.abstract_text.as_deref().unwrap_or(""));

    let title = html_escape(&paper.title);
    let meta = meta_tags(paper, base_url);
    let nav = nav_bar(&links);
    let authors = html_escape(&paper.authors_display());
    let venue = html_escape(&format!("{} ({})", paper.venue, paper.year));
    let bibtex = html_escape(&paper.bibtex);

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let value = match &caps[1] {
                "TITLE" => &title,
                "META_TAGS" => &meta,
                "NAV" => &nav,
                "AUTHORS" => &authors,
                "VENUE" => &venue,
                "ABSTRACT" => &abstract_html,
                "BIBTEX" => &bibtex,
                "PDF_BUTTON" => &pdf_button,
                _ => return caps[0].to_string(),
            };
            value.clone()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Year;

    fn paper() -> Publication {
        Publication {
            id: "fast-sort".to_string(),
            title: "Sorting <Fast>".to_string(),
            authors: vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()],
            venue: "SODA".to_string(),
            year: Year::Number(2024),
            pdf_link: Some("publications/pdfs/fast-sort.pdf".to_string()),
            create_page: true,
            bibtex: "@inproceedings{fast, title={Sorting}}".to_string(),
            hide_from_list: false,
            abstract_text: Some("We sort <em>fast</em>.<script>alert(1)</script>".to_string()),
        }
    }

    #[test]
    fn test_placeholders_filled() {
        let html = render_detail_page(&paper(), &default_template(), "https://example.github.io");
        assert!(!html.contains("{{"), "unfilled placeholder in:\n{}", html);
        assert!(html.contains("<h1>Sorting &lt;Fast&gt;</h1>"));
        assert!(html.contains(r#"<p class="authors">Ada Lovelace, Alan Turing</p>"#));
        assert!(html.contains(r#"<p class="meta">SODA (2024)</p>"#));
        assert!(html.contains("<pre>@inproceedings{fast, title={Sorting}}</pre>"));
    }

    #[test]
    fn test_meta_tags() {
        let html = render_detail_page(&paper(), &default_template(), "https://example.github.io");
        assert!(html.contains(r#"<meta name="citation_author" content="Ada Lovelace; Alan Turing">"#));
        assert!(html.contains(r#"<meta name="citation_publication_date" content="2024">"#));
        assert!(html.contains(
            r#"<meta name="citation_pdf_url" content="https://example.github.io/publications/pdfs/fast-sort.pdf">"#
        ));
    }

    #[test]
    fn test_pdf_button_is_relative_to_page() {
        let html = render_detail_page(&paper(), &default_template(), "https://example.github.io");
        assert!(html.contains(r#"<a href="pdfs/fast-sort.pdf" class="btn-action" target="_blank">Read PDF</a>"#));
    }

    #[test]
    fn test_no_pdf_means_no_button_or_pdf_meta() {
        let mut p = paper();
        p.pdf_link = None;
        let html = render_detail_page(&p, &default_template(), "https://example.github.io");
        assert!(!html.contains("Read PDF"));
        assert!(!html.contains("citation_pdf_url"));
    }

    #[test]
    fn test_abstract_is_sanitized() {
        let html = render_detail_page(&paper(), &default_template(), "https://example.github.io");
        assert!(html.contains(r#"<div class="abstract">We sort <em>fast</em>.</div>"#));
        assert!(!html.contains("<script>alert"));

        let body = render_detail_page(&paper(), "{{ABSTRACT}}", "https://example.github.io");
        assert_eq!(body, "We sort <em>fast</em>.");
        assert!(!body.contains("<script>"));
    }

    #[test]
    fn test_data_text_is_not_filled_as_placeholder() {
        let mut p = paper();
        p.bibtex = "@misc{a, note={{PDF_BUTTON}}}".to_string();
        let html = render_detail_page(&p, "<pre>{{BIBTEX}}</pre>", "https://example.github.io");
        assert_eq!(html, "<pre>@misc{a, note={{PDF_BUTTON}}}</pre>");

        p.title = "On {{BIBTEX}}".to_string();
        let html = render_detail_page(&p, "<h1>{{TITLE}}</h1>", "https://example.github.io");
        assert_eq!(html, "<h1>On {{BIBTEX}}</h1>");
    }

    #[test]
    fn test_unknown_placeholder_left_alone() {
        let html = render_detail_page(&paper(), "{{DATE}} {{VENUE}}", "https://example.github.io");
        assert_eq!(html, "{{DATE}} SODA (2024)");
    }

    #[test]
    fn test_description_truncated() {
        let mut p = paper();
        p.abstract_text = Some("x".repeat(400));
        let html = render_detail_page(&p, "{{META_TAGS}}", "https://example.github.io");
        let expected = format!(r#"content="{}...""#, "x".repeat(DESCRIPTION_CHARS));
        assert!(html.contains(&expected));
    }

    #[test]
    fn test_nav_marks_publications_active() {
        let html = render_detail_page(&paper(), "{{NAV}}", "https://example.github.io");
        assert!(html.contains(r#"class="nav-item active">Publications</a>"#));
    }
}
