//! Publication site library - re-exports for testing and external use.
//!
//! This module provides public access to all the site's modules: the data
//! model, the navigation highlighter, the publication renderer, the static
//! page generator and the preview server handlers.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

pub mod accordion;
pub mod config;
pub mod error;
pub mod handlers;
pub mod links;
pub mod loader;
pub mod models;
pub mod nav;
pub mod pages;
pub mod render;
pub mod templates;

// ============================================================================
// Configuration
// ============================================================================

pub const DATA_PATH: &str = "data/publications.json";
pub const PUBLICATIONS_DIR: &str = "publications";
pub const TEMPLATE_PATH: &str = "template.html";
pub const INDEX_TEMPLATE_PATH: &str = "index.template.html";
pub const INDEX_PATH: &str = "index.html";
pub const SITEMAP_PATH: &str = "sitemap.xml";
pub const DEFAULT_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 3000));

// ============================================================================
// Application State
// ============================================================================

/// Shared by all request handlers; each request builds its own page model.
#[derive(Clone)]
pub struct AppState {
    pub config: config::SiteConfig,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: config::SiteConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

// Re-export commonly used types
pub use accordion::{select, BibPanels};
pub use config::SiteConfig;
pub use error::{LoadError, SiteError};
pub use loader::PublicationSource;
pub use models::{NavLink, Publication, Section, Year};
pub use nav::{active_section, highlight, NavHighlighter, SCROLL_LOOKAHEAD};
pub use pages::{build_site, cleanup_orphans, generate_pages, render_sitemap, BuildReport};
pub use render::{
    build_cards, inject_into_container, load_publications, render_page, Action, Card,
    PublicationList, TitleLink, ERROR_MESSAGE,
};
