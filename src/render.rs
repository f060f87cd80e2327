//! Publication list rendering.
//!
//! The publication container is modelled as a `PublicationList`: it holds
//! either the cards built from the data file or the fixed error message,
//! plus the visibility state of every citation panel. Rendering happens in
//! one pass over the data, in data order:
//!
//! - entries with `hide_from_list` are skipped, but still consume an index,
//!   so panel ids (`bib-{index}`) follow the raw array position
//! - the title links to the details page, else the PDF, else is plain text
//! - the action row has a PDF button, a Details button and the BibTeX toggle
//!
//! `inject_into_container` splices the rendered list into an existing page
//! at the element with id `publication-list`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{error, info};

use crate::accordion::BibPanels;
use crate::loader::PublicationSource;
use crate::models::Publication;
use crate::templates::{html_escape, SITE_SCRIPT};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Element id of the publication container.
pub const CONTAINER_ID: &str = "publication-list";

/// Container content shown when the publication data cannot be loaded.
pub const ERROR_MESSAGE: &str = "<p>Error loading publications.</p>";

// ============================================================================
// Cards
// ============================================================================

/// How a card's title is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleLink {
    /// Link to the generated details page.
    Page(String),
    /// Link to the PDF, opened in a new tab.
    Pdf(String),
    Plain,
}

/// One button in a card's action row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Pdf(String),
    Details(String),
    /// Toggles the citation panel with this id.
    BibToggle(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub bib_id: String,
    pub title: String,
    pub title_link: TitleLink,
    pub authors: String,
    pub venue: String,
    pub year: String,
    pub actions: Vec<Action>,
    pub bibtex: String,
}

pub fn bib_id(index: usize) -> String {
    format!("bib-{}", index)
}

impl Card {
    /// Build the card for the entry at `index` in the data array.
    pub fn from_publication(index: usize, paper: &Publication) -> Self {
        let bib_id = bib_id(index);

        let title_link = if paper.create_page {
            TitleLink::Page(paper.page_url())
        } else if let Some(link) = paper.pdf_link() {
            TitleLink::Pdf(link.to_string())
        } else {
            TitleLink::Plain
        };

        let mut actions = Vec::with_capacity(3);
        if let Some(link) = paper.pdf_link() {
            actions.push(Action::Pdf(link.to_string()));
        }
        if paper.create_page {
            actions.push(Action::Details(paper.page_url()));
        }
        actions.push(Action::BibToggle(bib_id.clone()));

        Self {
            bib_id,
            title: paper.title.clone(),
            title_link,
            authors: paper.authors_display(),
            venue: paper.venue.clone(),
            year: paper.year.to_string(),
            actions,
            bibtex: paper.bibtex.clone(),
        }
    }

    fn title_html(&self) -> String {
        let title = html_escape(&self.title);
        match &self.title_link {
            TitleLink::Page(url) => format!(
                r#"<a href="{}" class="pub-title-link">{}</a>"#,
                html_escape(url),
                title
            ),
            TitleLink::Pdf(url) => format!(
                r#"<a href="{}" target="_blank" class="pub-title-link">{}</a>"#,
                html_escape(url),
                title
            ),
            TitleLink::Plain => format!(r#"<span class="pub-title-static">{}</span>"#, title),
        }
    }

    fn action_html(action: &Action) -> String {
        match action {
            Action::Pdf(url) => format!(
                r#"<a href="{}" class="btn-link" target="_blank">PDF</a>"#,
                html_escape(url)
            ),
            Action::Details(url) => {
                format!(r#"<a href="{}" class="btn-link">Details</a>"#, html_escape(url))
            }
            Action::BibToggle(id) => format!(
                r#"<button class="btn-bib" onclick="toggleBib('{}')">BibTeX</button>"#,
                html_escape(id)
            ),
        }
    }

    /// Render the card; `panel_visible` decides the citation panel's display.
    pub fn to_html(&self, panel_visible: bool) -> String {
        let actions: String = self.actions.iter().map(Self::action_html).collect();
        let display = if panel_visible { "block" } else { "none" };

        format!(
            r#"<div class="pub-card">
    <div class="pub-content">
        <h4>{title}</h4>
        <p class="authors">{authors}</p>
        <p class="venue">{venue} <strong>({year})</strong></p>
    </div>
    <div class="pub-actions">{actions}</div>
    <div id="{id}" class="bibtex-hidden" style="display: {display};">{bibtex}</div>
</div>"#,
            title = self.title_html(),
            authors = html_escape(&self.authors),
            venue = html_escape(&self.venue),
            year = html_escape(&self.year),
            actions = actions,
            id = html_escape(&self.bib_id),
            display = display,
            bibtex = html_escape(&self.bibtex),
        )
    }
}

/// Build cards for every entry not hidden from the list, in data order.
pub fn build_cards(papers: &[Publication]) -> Vec<Card> {
    papers
        .iter()
        .enumerate()
        .filter(|(_, paper)| !paper.hide_from_list)
        .map(|(index, paper)| Card::from_publication(index, paper))
        .collect()
}

// ============================================================================
// Container
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListContent {
    /// Nothing loaded yet; the container keeps its original markup.
    #[default]
    Pending,
    Cards(Vec<Card>),
    Failed,
}

/// The `publication-list` element and its citation panel state.
#[derive(Debug, Clone, Default)]
pub struct PublicationList {
    content: ListContent,
    panels: BibPanels,
}

impl PublicationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with cards for `papers`. All panels start hidden.
    pub fn show(&mut self, papers: &[Publication]) {
        let cards = build_cards(papers);
        self.panels = BibPanels::new(cards.iter().map(|card| card.bib_id.clone()));
        self.content = ListContent::Cards(cards);
    }

    /// Replace the contents with the error message. No cards survive.
    pub fn fail(&mut self) {
        self.panels = BibPanels::default();
        self.content = ListContent::Failed;
    }

    pub fn content(&self) -> &ListContent {
        &self.content
    }

    pub fn cards(&self) -> &[Card] {
        match &self.content {
            ListContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn panels(&self) -> &BibPanels {
        &self.panels
    }

    /// Click on the BibTeX button of panel `id`.
    pub fn toggle_bib(&mut self, id: &str) {
        self.panels = self.panels.select(id);
    }

    /// Inner HTML of the container, or `None` while nothing has been loaded.
    pub fn to_html(&self) -> Option<String> {
        match &self.content {
            ListContent::Pending => None,
            ListContent::Failed => Some(ERROR_MESSAGE.to_string()),
            ListContent::Cards(cards) => Some(
                cards
                    .iter()
                    .map(|card| card.to_html(self.panels.is_visible(&card.bib_id)))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
        }
    }
}

/// Fill the publication container from `source`. Does nothing when the page
/// has no container. Any failure leaves only the error message.
pub async fn load_publications(
    container: Option<&mut PublicationList>,
    source: &PublicationSource,
    client: &reqwest::Client,
) {
    let Some(container) = container else {
        return;
    };

    match source.fetch(client).await {
        Ok(papers) => {
            container.show(&papers);
            info!(
                source = %source,
                total = papers.len(),
                shown = container.cards().len(),
                "loaded publications"
            );
        }
        Err(e) => {
            error!(source = %source, error = %e, "Error loading publications");
            container.fail();
        }
    }
}

// ============================================================================
// Page Injection
// ============================================================================

static CONTAINER_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"(?i)<([a-z][a-z0-9]*)\b[^>]*\sid\s*=\s*["']{}["'][^>]*>"#,
        CONTAINER_ID
    ))
    .unwrap()
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(/?)([a-z][a-z0-9]*)\b[^>]*?(/?)>").unwrap());

/// Whether `page` contains a publication container.
pub fn has_container(page: &str) -> bool {
    CONTAINER_OPEN.is_match(page)
}

/// Replace the contents of the publication container in `page` with
/// `inner`. Returns `None` when there is no container or it is never closed.
pub fn inject_into_container(page: &str, inner: &str) -> Option<String> {
    let open = CONTAINER_OPEN.captures(page)?;
    let whole = open.get(0)?;
    let tag = open.get(1)?.as_str().to_ascii_lowercase();
    let content_start = whole.end();

    let mut depth = 1usize;
    let mut content_end = None;
    for caps in TAG.captures_iter(&page[content_start..]) {
        if !caps[2].eq_ignore_ascii_case(&tag) || !caps[3].is_empty() {
            continue;
        }
        if caps[1].is_empty() {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                content_end = caps.get(0).map(|m| content_start + m.start());
                break;
            }
        }
    }
    let close_start = content_end?;

    let mut out = String::with_capacity(page.len() + inner.len());
    out.push_str(&page[..content_start]);
    out.push_str(inner);
    out.push_str(&page[close_start..]);
    Some(out)
}

static BODY_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</body\s*>").unwrap());

/// Add the client script before the last `</body>` (or at the end) unless
/// the page already defines `toggleBib`.
pub fn ensure_site_script(page: &str) -> String {
    if page.contains("toggleBib = function") || page.contains("function toggleBib") {
        return page.to_string();
    }
    match BODY_CLOSE.find_iter(page).last() {
        Some(close) => {
            let mut out = String::with_capacity(page.len() + SITE_SCRIPT.len());
            out.push_str(&page[..close.start()]);
            out.push_str(SITE_SCRIPT);
            out.push_str(&page[close.start()..]);
            out
        }
        None => format!("{}{}", page, SITE_SCRIPT),
    }
}

/// Inject an already loaded `list` into `page`, adding the client script
/// the cards' BibTeX buttons call. Returns `page` unchanged when it has no
/// container or nothing has been loaded.
pub fn render_list_into(page: &str, list: &PublicationList) -> String {
    match list.to_html().and_then(|inner| inject_into_container(page, &inner)) {
        Some(rendered) if list.cards().is_empty() => rendered,
        Some(rendered) => ensure_site_script(&rendered),
        None => page.to_string(),
    }
}

/// Render the publication list into `page` when it has a container.
/// Returns `page` unchanged otherwise.
pub async fn render_page(page: &str, source: &PublicationSource, client: &reqwest::Client) -> String {
    if !has_container(page) {
        return page.to_string();
    }
    let mut list = PublicationList::new();
    load_publications(Some(&mut list), source, client).await;
    render_list_into(page, &list)
}
