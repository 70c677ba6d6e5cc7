//! Widget configuration.
//!
//! Every field has a default matching the cat shelter deployment, so an empty
//! (or absent) config file is valid.

use crate::error::ConfigError;
use crate::render::markup::is_web_url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placeholder substituted with the entity id in [`SearchConfig::detail_route`].
const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Data endpoint answering `GET` with the JSON entity list.
    pub endpoint: String,
    /// Per-entity detail location; `{id}` is replaced by the entity id.
    pub detail_route: String,
    /// Prefix for photos given as bare file names.
    pub photo_prefix: String,
    /// Host page element holding the query text.
    pub input_id: String,
    /// Host page element the results are rendered into.
    pub results_id: String,
    /// Text of the single entry shown when nothing matches.
    pub empty_text: String,
    /// When set, a failed load renders this text instead of leaving the
    /// results surface untouched.
    pub load_error_text: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/api/cats".to_string(),
            detail_route: "/chats/{id}".to_string(),
            photo_prefix: "/uploads/".to_string(),
            input_id: "searchBox".to_string(),
            results_id: "searchResults".to_string(),
            empty_text: "Aucun résultat".to_string(),
            load_error_text: None,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// `$XDG_CONFIG_HOME/cat-search/config.toml` (or the platform equivalent).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cat-search").join("config.toml"))
    }

    /// Loads `explicit` if given, else the default location when it exists,
    /// else falls back to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Using config at {}", path.display());
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Detail location for the entity with the given id.
    ///
    /// The id is percent-encoded, so it always stays within one path segment.
    pub fn detail_href(&self, id: &str) -> String {
        self.detail_route.replace(ID_PLACEHOLDER, &urlencoding::encode(id))
    }

    /// Resolves a photo reference to something usable as an image source.
    ///
    /// Absolute paths and `http(s)` URLs pass through; anything else is a file
    /// name under [`photo_prefix`](Self::photo_prefix), even if it contains a
    /// colon.
    pub fn photo_src(&self, photo: &str) -> String {
        let is_web = url::Url::parse(photo).is_ok_and(|url| is_web_url(&url));
        if photo.starts_with('/') || is_web {
            photo.to_string()
        } else {
            format!("{}/{}", self.photo_prefix.trim_end_matches('/'), photo)
        }
    }
}
