//! Deterministic colours for avatars, technology chips and status badges.

use api::models::ProjectStatus;

/// Avatar background derived from a person's name.
///
/// The uppercased concatenation is hashed with `hash = c + (hash << 5) - hash`
/// in wrapping 32-bit arithmetic over UTF-16 code units; the three low bytes
/// become `#rrggbb`.
pub fn color_from_name(first: &str, last: &str) -> String {
    let full = format!("{first}{last}").to_uppercase();
    let hash = full.encode_utf16().fold(0i32, |hash, unit| {
        (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });
    let mut color = String::with_capacity(7);
    color.push('#');
    for i in 0..3 {
        let byte = (hash >> (i * 8)) & 0xFF;
        color.push_str(&format!("{byte:02x}"));
    }
    color
}

/// Multiplier used for chips on the project cards.
pub const CARD_CHIP_FACTOR: u64 = 123_456;
/// Multiplier used for chips in the project detail dialog.
pub const DETAIL_CHIP_FACTOR: u64 = 123_450;

/// Chip background for a technology name: the first UTF-16 unit times
/// `factor`, modulo `0xFFFFFF`, as six hex digits. Blank names are black.
pub fn tech_chip_color(tech: &str, factor: u64) -> String {
    let first = tech.trim().encode_utf16().next().map(u64::from).unwrap_or(0);
    format!("#{:06x}", (first * factor) % 0xFF_FFFF)
}

/// Badge colour for a project status on the public pages.
pub fn status_color(status: &str) -> &'static str {
    match ProjectStatus::parse(status) {
        Some(ProjectStatus::InProgress) => "deepskyblue",
        Some(ProjectStatus::Done) => "green",
        Some(ProjectStatus::Archived) => "gray",
        None => "lightgray",
    }
}

/// Badge colour for a project status in the back-office detail view.
pub fn admin_status_color(status: &str) -> &'static str {
    match ProjectStatus::parse(status) {
        Some(ProjectStatus::InProgress) => "#ffeb3b",
        Some(ProjectStatus::Done) => "#4caf50",
        _ => "#f44336",
    }
}

/// First letter of each name, uppercased. Empty names contribute nothing.
pub fn initials(first: &str, last: &str) -> String {
    [first, last]
        .iter()
        .filter_map(|name| name.trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_name_is_stable() {
        let a = color_from_name("Alexandre", "Lacour");
        assert_eq!(a, color_from_name("alexandre", "LACOUR"));
        assert_eq!(a.len(), 7);
        assert!(a.starts_with('#'));
        assert!(a[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_color_from_name_known_values() {
        // "A" hashes to 65 = 0x41.
        assert_eq!(color_from_name("A", ""), "#410000");
        // "AB": 66 + (65 << 5) - 65 = 2081 = 0x0821.
        assert_eq!(color_from_name("A", "B"), "#210800");
        assert_eq!(color_from_name("", ""), "#000000");
    }

    #[test]
    fn test_color_from_long_name_wraps() {
        let long = "X".repeat(64);
        let color = color_from_name(&long, &long);
        assert_eq!(color.len(), 7);
    }

    #[test]
    fn test_tech_chip_color() {
        // 'R' = 82; 82 * 123456 = 10123392 = 0x9a7880
        assert_eq!(tech_chip_color("Rust", CARD_CHIP_FACTOR), "#9a7880");
        assert_eq!(tech_chip_color(" Rust ", CARD_CHIP_FACTOR), "#9a7880");
        // 'A' = 65; 65 * 123456 = 8024640 = 0x7a7240
        assert_eq!(tech_chip_color("Angular", CARD_CHIP_FACTOR), "#7a7240");
        // 65 * 123450 = 8024250 = 0x7a70ba
        assert_eq!(tech_chip_color("Angular", DETAIL_CHIP_FACTOR), "#7a70ba");
        assert_eq!(tech_chip_color("", CARD_CHIP_FACTOR), "#000000");
    }

    #[test]
    fn test_tech_chip_color_wraps_modulo() {
        // 'z' = 122 stays below the modulus.
        assert_eq!(tech_chip_color("z", CARD_CHIP_FACTOR), "#e5d280");
        // 'é' = 233; 233 * 123456 = 28765248, mod 0xFFFFFF = 0xb6ec41
        assert_eq!(tech_chip_color("é", CARD_CHIP_FACTOR), "#b6ec41");
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color("En cours"), "deepskyblue");
        assert_eq!(status_color("Terminé"), "green");
        assert_eq!(status_color("Archivé"), "gray");
        assert_eq!(status_color(""), "lightgray");
        assert_eq!(admin_status_color("En cours"), "#ffeb3b");
        assert_eq!(admin_status_color("Archivé"), "#f44336");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("alexandre", "lacour"), "AL");
        assert_eq!(initials("", "Lacour"), "L");
        assert_eq!(initials("", ""), "");
    }
}
