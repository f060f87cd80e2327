//! Site configuration.
//!
//! Everything is resolved relative to the site root: the data file, the
//! templates, and the generated `publications/` directory.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Result, SiteError};
use crate::links::parse_base_url;
use crate::loader::PublicationSource;
use crate::{
    DATA_PATH, DEFAULT_ADDR, INDEX_PATH, INDEX_TEMPLATE_PATH, PUBLICATIONS_DIR, SITEMAP_PATH,
    TEMPLATE_PATH,
};

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub root: PathBuf,
    /// Absolute URL of the deployed site, without trailing slash.
    pub base_url: String,
    pub source: PublicationSource,
    pub addr: SocketAddr,
}

impl SiteConfig {
    /// Build a configuration. Without `base_url` the site is assumed to be
    /// served from `addr`; without `data_url` the data file under `root` is
    /// read directly.
    pub fn new(
        root: impl Into<PathBuf>,
        base_url: Option<&str>,
        data_url: Option<&str>,
        addr: Option<SocketAddr>,
    ) -> Result<Self> {
        let root = root.into();
        let addr = addr.unwrap_or(DEFAULT_ADDR);
        let base_url = match base_url {
            Some(url) => parse_base_url(url)?,
            None => format!("http://{}", addr),
        };
        let source = match data_url {
            Some(url) => PublicationSource::Http(Url::parse(url).map_err(|source| {
                SiteError::InvalidUrl {
                    url: url.to_string(),
                    source,
                }
            })?),
            None => PublicationSource::File(root.join(DATA_PATH)),
        };
        Ok(Self {
            root,
            base_url,
            source,
            addr,
        })
    }

    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path(PUBLICATIONS_DIR)
    }

    pub fn template_path(&self) -> PathBuf {
        self.path(TEMPLATE_PATH)
    }

    pub fn index_template_path(&self) -> PathBuf {
        self.path(INDEX_TEMPLATE_PATH)
    }

    pub fn index_path(&self) -> PathBuf {
        self.path(INDEX_PATH)
    }

    pub fn sitemap_path(&self) -> PathBuf {
        self.path(SITEMAP_PATH)
    }
}
