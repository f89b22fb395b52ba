//! Card factory
//!
//! Derives the visual description of one card from an item. Colour and icon
//! depend only on item data, so a card looks the same across re-filters.

use crate::types::{ExactGroup, FacetGroup, Item, ItemId};

/// Card background colours
pub const PALETTE: [&str; 12] = [
    "#BBDEFB", "#C8E6C9", "#FFE082", "#F8BBD0", "#CE93D8", "#B39DDB",
    "#80DEEA", "#FFCC80", "#AED581", "#90CAF9", "#FFAB91", "#A5D6A7",
];

/// Icon used when no tag matches
pub const DEFAULT_ICON: &str = "lightbulb_outline";

/// Character budget of the card excerpt
pub const DESCRIPTION_LIMIT: usize = 100;

/// Image load budget before falling back to the icon
pub const IMAGE_TIMEOUT_MS: u32 = 3_000;

/// Tag → Material icon, keys lowercase
const ICONS: &[(&str, &str)] = &[
    ("manual de uso", "menu_book"),
    ("infografías", "image"),
    ("enlaces externos", "link"),
    ("guías", "description"),
];

/// Background colour for an id
pub fn color_for(id: ItemId) -> &'static str {
    PALETTE[id as usize % PALETTE.len()]
}

/// Icon for a classification tag, case-insensitive
pub fn icon_for(tag: Option<&str>) -> &'static str {
    let Some(tag) = tag else {
        return DEFAULT_ICON;
    };
    let key = tag.trim().to_lowercase();
    ICONS
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(DEFAULT_ICON, |&(_, icon)| icon)
}

/// Truncate to `limit` characters, marking the cut with `...`
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Accessible name of the card button
pub fn accessible_name(title: &str) -> String {
    format!("Abrir herramienta: {}", title)
}

/// Image area of a card or of the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visual {
    /// Try the image, fall back to `fallback` on error or timeout
    Image { url: String, fallback: &'static str },
    Icon(&'static str),
}

/// Small tag chip on the card face
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub class: &'static str,
    pub icon: &'static str,
    pub text: String,
}

/// Everything needed to materialize one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: ItemId,
    pub title: String,
    pub excerpt: String,
    pub color: &'static str,
    pub visual: Visual,
    pub badges: Vec<Badge>,
    pub aria_label: String,
}

/// Build the card view of an item
pub fn build(item: &Item) -> CardView {
    let icon = icon_for(item.primary_tag());
    let visual = match item.image_url() {
        Some(url) => Visual::Image {
            url: url.to_string(),
            fallback: icon,
        },
        None => Visual::Icon(icon),
    };

    CardView {
        id: item.id,
        title: item.title.clone(),
        excerpt: truncate(&item.description, DESCRIPTION_LIMIT),
        color: color_for(item.id),
        visual,
        badges: badges(item),
        aria_label: accessible_name(&item.title),
    }
}

// Users: up to two, usage and kind: one each. Exact layout: every present tag.
fn badges(item: &Item) -> Vec<Badge> {
    let limits = [
        (FacetGroup::Users, 2),
        (FacetGroup::Usage, 1),
        (FacetGroup::Kind, 1),
    ];

    let mut out: Vec<Badge> = limits
        .iter()
        .flat_map(|&(group, limit)| {
            item.tags(group).iter().take(limit).map(move |tag| Badge {
                class: group.class(),
                icon: group.icon(),
                text: tag.clone(),
            })
        })
        .collect();

    out.extend(ExactGroup::ALL.iter().filter_map(|&group| {
        item.scalar(group).map(|tag| Badge {
            class: group.class(),
            icon: group.icon(),
            text: tag.to_string(),
        })
    }));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_stable() {
        assert_eq!(color_for(0), "#BBDEFB");
        assert_eq!(color_for(12), "#BBDEFB");
        assert_eq!(color_for(13), color_for(1));
        for id in 0..50 {
            assert_eq!(color_for(id), color_for(id));
        }
    }

    #[test]
    fn test_icon_lookup_case_insensitive() {
        assert_eq!(icon_for(Some("Guías")), "description");
        assert_eq!(icon_for(Some("MANUAL DE USO")), "menu_book");
        assert_eq!(icon_for(Some(" Enlaces externos ")), "link");
        assert_eq!(icon_for(Some("Plantillas")), DEFAULT_ICON);
        assert_eq!(icon_for(None), DEFAULT_ICON);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("corto", 100), "corto");
        let exact = "a".repeat(100);
        assert_eq!(truncate(&exact, 100), exact);
        let long = "b".repeat(101);
        assert_eq!(truncate(&long, 100), format!("{}...", "b".repeat(100)));
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "ñ".repeat(120);
        let cut = truncate(&text, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_build_icon_card() {
        let item = Item {
            id: 3,
            title: "Mapa de empatía".into(),
            description: "Entender al usuario".into(),
            users: vec!["Analista".into(), "Diseñador".into(), "Líder".into()],
            usage: vec!["Descubrir".into(), "Idear".into()],
            kind: vec!["Guías".into()],
            ..Default::default()
        };

        let card = build(&item);
        assert_eq!(card.id, 3);
        assert_eq!(card.color, color_for(3));
        assert_eq!(card.visual, Visual::Icon("description"));
        assert_eq!(card.aria_label, "Abrir herramienta: Mapa de empatía");
        assert_eq!(card.excerpt, "Entender al usuario");

        let texts: Vec<&str> = card.badges.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["Analista", "Diseñador", "Descubrir", "Guías"]);
        assert_eq!(card.badges[0].icon, "person");
        assert_eq!(card.badges[2].class, "uso");
    }

    #[test]
    fn test_build_image_card_keeps_fallback() {
        let item = Item {
            id: 1,
            title: "Con imagen".into(),
            image: Some("img/uno.png".into()),
            kind: vec!["Infografías".into()],
            ..Default::default()
        };
        let card = build(&item);
        assert_eq!(
            card.visual,
            Visual::Image {
                url: "img/uno.png".into(),
                fallback: "image"
            }
        );
    }

    #[test]
    fn test_build_exact_layout_badges() {
        let item = Item {
            id: 8,
            title: "Lluvia de ideas".into(),
            category: Some("Ideación".into()),
            participants: Some("3-8".into()),
            ..Default::default()
        };
        let card = build(&item);
        let texts: Vec<&str> = card.badges.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["Ideación", "3-8"]);
        assert_eq!(card.badges[1].icon, "group");
    }
}
