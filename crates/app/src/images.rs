//! Menu image resolution
//!
//! Capability-based resolver: an explicit URL wins, then the conventional
//! slugged asset path, with one fixed placeholder for anything that fails
//! to load.

/// Shown when neither the explicit URL nor the slugged asset resolves.
pub const FALLBACK_IMAGE: &str = "/images/menu/default-food.jpg";

/// Resolve the image for a menu item: the explicit URL when present and
/// non-blank, otherwise the slugged asset path derived from the item name.
#[must_use]
pub fn resolve_menu_image(name: &str, image_url: Option<&str>) -> String {
    match image_url {
        Some(url) if !url.trim().is_empty() => url.to_owned(),
        _ => format!("/images/menu/{}.jpg", slug(name)),
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
