//! Text helpers shared by the public pages and the back-office tables.

use api::models::{TimelineEntry, IMAGE_DELIMITER};
use chrono::NaiveDate;

/// Comma-separated technologies, trimmed, blanks dropped.
pub fn split_technologies(technologies: &str) -> Vec<String> {
    split_trimmed(technologies, ",")
}

/// Image URLs joined by `|£|`, trimmed, blanks dropped.
pub fn split_images(images: &str) -> Vec<String> {
    split_trimmed(images, IMAGE_DELIMITER)
}

fn split_trimmed(value: &str, delimiter: &str) -> Vec<String> {
    value
        .split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Images for the detail carousel: the extra images, or the cover when there
/// are none, or nothing.
pub fn carousel_images(other_images: &str, cover_image: &str) -> Vec<String> {
    let images = split_images(other_images);
    if !images.is_empty() {
        return images;
    }
    let cover = cover_image.trim();
    if cover.is_empty() {
        Vec::new()
    } else {
        vec![cover.to_string()]
    }
}

/// Next carousel position, wrapping at both ends. An empty carousel stays at 0.
pub fn carousel_step(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

/// `DD/MM/YYYY`.
pub fn format_date_fr(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `DD Mon YYYY`, e.g. `04 Sep 2023`.
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Value for an `<input type="date">`.
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Oldest first; entries without a date keep their order at the end.
pub fn sort_timeline_by_date(entries: &mut [TimelineEntry]) {
    entries.sort_by_key(|e| (e.date.is_none(), e.date));
}

/// Case-insensitive quick filter over a row's displayed fields. A blank query
/// matches every row.
pub fn matches_query<'a>(fields: impl IntoIterator<Item = &'a str>, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&query))
}
