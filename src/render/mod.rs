//! Rendering of the results surface.
//!
//! A render produces a [`Rendered`] value: the structured entries plus the
//! Bootstrap list-group markup they stand for. Surfaces store it wholesale.

mod entries;
pub mod markup;

use std::fmt;

pub use entries::{render_entries, render_load_error};

/// One entry of the results surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultEntry {
    /// The single "no results" entry.
    Placeholder { text: String },
    /// Shown instead of results when loading failed, if so configured.
    LoadError { text: String },
    /// A link to one entity's detail location.
    Item {
        href: String,
        thumbnail: Option<String>,
        name: String,
        age: String,
    },
}

impl fmt::Display for ResultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use markup::escape;

        match self {
            Self::Placeholder { text } => write!(
                f,
                r#"<div class="list-group-item text-muted">{}</div>"#,
                escape(text)
            ),
            Self::LoadError { text } => write!(
                f,
                r#"<div class="list-group-item list-group-item-danger">{}</div>"#,
                escape(text)
            ),
            Self::Item {
                href,
                thumbnail,
                name,
                age,
            } => {
                write!(
                    f,
                    r#"<a href="{}" class="list-group-item list-group-item-action d-flex align-items-center">"#,
                    escape(href)
                )?;
                if let Some(src) = thumbnail {
                    write!(
                        f,
                        r#"<img src="{}" alt="" class="rounded me-3" width="48" height="48">"#,
                        escape(src)
                    )?;
                }
                write!(
                    f,
                    r#"<div><strong>{}</strong><br><small class="text-muted">{}</small></div></a>"#,
                    escape(name),
                    escape(age)
                )
            }
        }
    }
}

/// The full contents of a results surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    entries: Vec<ResultEntry>,
    html: String,
}

impl Rendered {
    pub fn new(entries: Vec<ResultEntry>) -> Self {
        let html = entries.iter().map(ToString::to_string).collect();
        Self { entries, html }
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}
