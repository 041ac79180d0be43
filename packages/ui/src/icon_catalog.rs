//! # Icon catalogue
//!
//! Timeline entries may carry a custom icon name (`customIcone` on the wire).
//! The names follow the Material convention: a base glyph name optionally
//! followed by a style suffix (`Outlined`, `Rounded`, `TwoTone`, `Sharp`); a
//! name without suffix is the `Filled` style.
//!
//! [`icon_catalog`] lists every base name in every style. [`filter_icons`] is
//! the search behind the picker: a linear scan, no index. [`GlyphIcon`] draws
//! a catalogue name with the Font Awesome glyph closest to its base name.

use std::sync::OnceLock;

use api::models::TimelineKind;
use dioxus::prelude::*;

use crate::icons::*;
use crate::Icon;

/// Style suffixes, in picker order.
pub const STYLE_SUFFIXES: [&str; 4] = ["Outlined", "Rounded", "TwoTone", "Sharp"];

const BASE_NAMES: &[&str] = &[
    "AccountBalance",
    "AssignmentInd",
    "Book",
    "Brush",
    "Build",
    "Business",
    "CameraAlt",
    "Celebration",
    "Cloud",
    "Code",
    "Computer",
    "Construction",
    "Email",
    "EmojiEvents",
    "Event",
    "Favorite",
    "Flag",
    "Flight",
    "Group",
    "Handshake",
    "HelpOutline",
    "Home",
    "Language",
    "Laptop",
    "Lightbulb",
    "LocationOn",
    "MenuBook",
    "MilitaryTech",
    "MusicNote",
    "Person",
    "Phone",
    "Psychology",
    "Public",
    "Restaurant",
    "RocketLaunch",
    "School",
    "Science",
    "Security",
    "Settings",
    "SportsEsports",
    "Star",
    "Storage",
    "Terminal",
    "TrendingUp",
    "Work",
];

/// Style filter offered by the icon picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconStyle {
    #[default]
    All,
    Filled,
    Outlined,
    Rounded,
    TwoTone,
    Sharp,
}

impl IconStyle {
    pub const ALL: [IconStyle; 6] = [
        IconStyle::All,
        IconStyle::Filled,
        IconStyle::Outlined,
        IconStyle::Rounded,
        IconStyle::TwoTone,
        IconStyle::Sharp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IconStyle::All => "All",
            IconStyle::Filled => "Filled",
            IconStyle::Outlined => "Outlined",
            IconStyle::Rounded => "Rounded",
            IconStyle::TwoTone => "TwoTone",
            IconStyle::Sharp => "Sharp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IconStyle::TwoTone => "Two-Tone",
            other => other.as_str(),
        }
    }

    /// Unknown values read as [`IconStyle::All`].
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }

    fn accepts(self, name: &str) -> bool {
        match self {
            IconStyle::All => true,
            IconStyle::Filled => !STYLE_SUFFIXES.iter().any(|s| name.contains(s)),
            other => name.ends_with(other.as_str()),
        }
    }
}

/// Every catalogue name: each base name, then its four styled variants.
pub fn icon_catalog() -> &'static [String] {
    static CATALOG: OnceLock<Vec<String>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut names = Vec::with_capacity(BASE_NAMES.len() * (STYLE_SUFFIXES.len() + 1));
        for base in BASE_NAMES {
            names.push(base.to_string());
            for suffix in STYLE_SUFFIXES {
                names.push(format!("{base}{suffix}"));
            }
        }
        names
    })
}

/// Names from `names` matching `query` (case-insensitive substring) and `style`.
pub fn filter_icons<'a>(names: &'a [String], query: &str, style: IconStyle) -> Vec<&'a str> {
    let query = query.to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&query) && style.accepts(name))
        .map(String::as_str)
        .collect()
}

/// `name` without its style suffix.
pub fn base_name(name: &str) -> &str {
    STYLE_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
}

/// Icon name and colour tone for a timeline category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeIcon {
    pub name: &'static str,
    /// CSS modifier class, `tone-primary` and so on.
    pub tone: &'static str,
}

pub fn timeline_type_icon(kind: TimelineKind) -> TypeIcon {
    let (name, tone) = match kind {
        TimelineKind::Experience => ("Work", "tone-primary"),
        TimelineKind::Internship => ("AssignmentInd", "tone-secondary"),
        TimelineKind::WorkStudy => ("Business", "tone-action"),
        TimelineKind::Teaching => ("School", "tone-warning"),
        TimelineKind::Personal => ("HelpOutline", "tone-info"),
        TimelineKind::Other => ("Star", "tone-disabled"),
        TimelineKind::Unknown => ("Event", "tone-error"),
    };
    TypeIcon { name, tone }
}

/// Draw a catalogue icon. Names outside the catalogue render nothing.
#[component]
pub fn GlyphIcon(name: String, #[props(default = 20)] size: u32) -> Element {
    let (w, h) = (size, size);
    match base_name(&name) {
        "AccountBalance" => rsx! { Icon { icon: FaBuildingColumns, width: w, height: h } },
        "AssignmentInd" => rsx! { Icon { icon: FaIdBadge, width: w, height: h } },
        "Book" => rsx! { Icon { icon: FaBook, width: w, height: h } },
        "Brush" => rsx! { Icon { icon: FaPaintbrush, width: w, height: h } },
        "Build" => rsx! { Icon { icon: FaWrench, width: w, height: h } },
        "Business" => rsx! { Icon { icon: FaBuilding, width: w, height: h } },
        "CameraAlt" => rsx! { Icon { icon: FaCamera, width: w, height: h } },
        "Celebration" => rsx! { Icon { icon: FaGift, width: w, height: h } },
        "Cloud" => rsx! { Icon { icon: FaCloud, width: w, height: h } },
        "Code" => rsx! { Icon { icon: FaCode, width: w, height: h } },
        "Computer" => rsx! { Icon { icon: FaDesktop, width: w, height: h } },
        "Construction" => rsx! { Icon { icon: FaScrewdriverWrench, width: w, height: h } },
        "Email" => rsx! { Icon { icon: FaEnvelope, width: w, height: h } },
        "EmojiEvents" => rsx! { Icon { icon: FaTrophy, width: w, height: h } },
        "Event" => rsx! { Icon { icon: FaCalendarDays, width: w, height: h } },
        "Favorite" => rsx! { Icon { icon: FaHeart, width: w, height: h } },
        "Flag" => rsx! { Icon { icon: FaFlag, width: w, height: h } },
        "Flight" => rsx! { Icon { icon: FaPlane, width: w, height: h } },
        "Group" => rsx! { Icon { icon: FaUsers, width: w, height: h } },
        "Handshake" => rsx! { Icon { icon: FaHandshake, width: w, height: h } },
        "HelpOutline" => rsx! { Icon { icon: FaCircleQuestion, width: w, height: h } },
        "Home" => rsx! { Icon { icon: FaHouse, width: w, height: h } },
        "Language" | "Public" => rsx! { Icon { icon: FaGlobe, width: w, height: h } },
        "Laptop" => rsx! { Icon { icon: FaLaptop, width: w, height: h } },
        "Lightbulb" => rsx! { Icon { icon: FaLightbulb, width: w, height: h } },
        "LocationOn" => rsx! { Icon { icon: FaLocationDot, width: w, height: h } },
        "MenuBook" => rsx! { Icon { icon: FaBookOpen, width: w, height: h } },
        "MilitaryTech" => rsx! { Icon { icon: FaMedal, width: w, height: h } },
        "MusicNote" => rsx! { Icon { icon: FaMusic, width: w, height: h } },
        "Person" => rsx! { Icon { icon: FaUser, width: w, height: h } },
        "Phone" => rsx! { Icon { icon: FaPhone, width: w, height: h } },
        "Psychology" => rsx! { Icon { icon: FaBrain, width: w, height: h } },
        "Restaurant" => rsx! { Icon { icon: FaUtensils, width: w, height: h } },
        "RocketLaunch" => rsx! { Icon { icon: FaRocket, width: w, height: h } },
        "School" => rsx! { Icon { icon: FaGraduationCap, width: w, height: h } },
        "Science" => rsx! { Icon { icon: FaFlask, width: w, height: h } },
        "Security" => rsx! { Icon { icon: FaShieldHalved, width: w, height: h } },
        "Settings" => rsx! { Icon { icon: FaGear, width: w, height: h } },
        "SportsEsports" => rsx! { Icon { icon: FaGamepad, width: w, height: h } },
        "Star" => rsx! { Icon { icon: FaStar, width: w, height: h } },
        "Storage" => rsx! { Icon { icon: FaDatabase, width: w, height: h } },
        "Terminal" => rsx! { Icon { icon: FaTerminal, width: w, height: h } },
        "TrendingUp" => rsx! { Icon { icon: FaChartLine, width: w, height: h } },
        "Work" => rsx! { Icon { icon: FaBriefcase, width: w, height: h } },
        _ => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_catalog_has_every_style() {
        let catalog = icon_catalog();
        assert_eq!(catalog.len(), BASE_NAMES.len() * 5);
        assert!(catalog.iter().any(|n| n == "Work"));
        assert!(catalog.iter().any(|n| n == "WorkTwoTone"));
        assert!(catalog.iter().any(|n| n == "SchoolSharp"));
    }

    #[test]
    fn test_filter_by_query_is_case_insensitive() {
        let list = names(&["Work", "WorkOutlined", "Home", "Homework"]);
        assert_eq!(
            filter_icons(&list, "WORK", IconStyle::All),
            vec!["Work", "WorkOutlined", "Homework"]
        );
        assert_eq!(filter_icons(&list, "", IconStyle::All).len(), 4);
    }

    #[test]
    fn test_filled_excludes_any_suffix() {
        let list = names(&["Star", "StarOutlined", "StarRounded", "StarTwoTone", "StarSharp"]);
        assert_eq!(filter_icons(&list, "", IconStyle::Filled), vec!["Star"]);
    }

    #[test]
    fn test_filled_uses_contains_not_ends_with() {
        // A suffix in the middle of the name still excludes it from Filled.
        let list = names(&["SharpshooterIcon", "RoundedCornerOutlined", "Plain"]);
        assert_eq!(filter_icons(&list, "", IconStyle::Filled), vec!["Plain"]);
    }

    #[test]
    fn test_styled_filter_uses_suffix() {
        let list = names(&["Star", "StarOutlined", "OutlinedStar", "StarTwoTone"]);
        assert_eq!(filter_icons(&list, "", IconStyle::Outlined), vec!["StarOutlined"]);
        assert_eq!(filter_icons(&list, "star", IconStyle::TwoTone), vec!["StarTwoTone"]);
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("WorkOutlined"), "Work");
        assert_eq!(base_name("HelpOutline"), "HelpOutline");
        assert_eq!(base_name("StarTwoTone"), "Star");
    }

    #[test]
    fn test_style_parse_and_labels() {
        assert_eq!(IconStyle::parse("Sharp"), IconStyle::Sharp);
        assert_eq!(IconStyle::parse("bogus"), IconStyle::All);
        assert_eq!(IconStyle::TwoTone.label(), "Two-Tone");
    }

    #[test]
    fn test_timeline_type_icons() {
        assert_eq!(timeline_type_icon(TimelineKind::Experience).name, "Work");
        assert_eq!(timeline_type_icon(TimelineKind::Teaching).name, "School");
        assert_eq!(timeline_type_icon(TimelineKind::Unknown).name, "Event");
        for kind in [TimelineKind::Internship, TimelineKind::Other] {
            let icon = timeline_type_icon(kind);
            assert!(icon_catalog().iter().any(|n| n == icon.name));
        }
    }
}
