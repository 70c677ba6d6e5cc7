//! Builds results-surface entries from entities.

use super::markup::is_safe_url;
use super::{Rendered, ResultEntry};
use crate::config::SearchConfig;
use crate::entity::Entity;

/// Link target used when an entity's detail location is not a safe URL.
const INERT_HREF: &str = "#";

/// Renders `items` in order, or the single placeholder entry when empty.
pub fn render_entries(items: &[&Entity], config: &SearchConfig) -> Rendered {
    if items.is_empty() {
        return Rendered::new(vec![ResultEntry::Placeholder {
            text: config.empty_text.clone(),
        }]);
    }

    Rendered::new(items.iter().map(|e| item_entry(e, config)).collect())
}

/// The single entry shown after a failed load.
pub fn render_load_error(text: &str) -> Rendered {
    Rendered::new(vec![ResultEntry::LoadError {
        text: text.to_string(),
    }])
}

fn item_entry(entity: &Entity, config: &SearchConfig) -> ResultEntry {
    let href = config.detail_href(entity.id());
    let href = if is_safe_url(&href) {
        href
    } else {
        tracing::warn!("Unsafe detail link for entity {}, rendering inert", entity.id());
        INERT_HREF.to_string()
    };

    let thumbnail = entity.photo().and_then(|photo| {
        let src = config.photo_src(photo);
        if is_safe_url(&src) {
            Some(src)
        } else {
            tracing::warn!("Dropping unsafe photo URL for entity {}", entity.id());
            None
        }
    });

    ResultEntry::Item {
        href,
        thumbnail,
        name: entity.name().to_string(),
        age: entity.age().to_string(),
    }
}
