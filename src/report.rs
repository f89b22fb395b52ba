//! Plain-text rendering of catalog data for the terminal

use caja_common::card::{self, truncate};
use caja_common::{announcer, Catalog, ExactGroup, FacetGroup, Issue, Item, ModalContent};
use std::fmt::Write;

/// One line per item: id, title, badges, excerpt
pub fn list(items: &[Item], description_limit: usize) -> String {
    let mut out = String::new();
    for item in items {
        let view = card::build(item);
        let badges: Vec<&str> = view.badges.iter().map(|b| b.text.as_str()).collect();
        let _ = writeln!(out, "{:>4}  {}", item.id, item.title);
        if !badges.is_empty() {
            let _ = writeln!(out, "      [{}]", badges.join(", "));
        }
        if !item.description.is_empty() {
            let _ = writeln!(out, "      {}", truncate(&item.description, description_limit));
        }
    }
    let _ = writeln!(out, "{}", announcer::message(items.len()));
    out
}

/// Full detail, in dialog order
pub fn detail(content: &ModalContent) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", content.title);
    let _ = writeln!(out, "{}", "=".repeat(content.title.chars().count()));

    for row in &content.rows {
        let _ = writeln!(out, "{} {}", row.label, row.tags.join(", "));
    }

    if !content.description.is_empty() {
        let _ = writeln!(out, "\nDescripción:\n  {}", content.description);
    }
    if !content.objective.is_empty() {
        let _ = writeln!(out, "\nObjetivo:\n  {}", content.objective);
    }
    if !content.materials.is_empty() {
        let _ = writeln!(out, "\nMateriales:");
        for material in &content.materials {
            let _ = writeln!(out, "  - {}", material);
        }
    }
    if !content.steps.is_empty() {
        let _ = writeln!(out, "\nPasos:");
        for (i, step) in content.steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, step);
        }
    }
    out
}

pub fn issues(issues: &[Issue]) -> String {
    let mut out = String::new();
    for issue in issues {
        let _ = writeln!(out, "  ✗ {}", issue);
    }
    out
}

/// Distinct values per filter group
pub fn tags(catalog: &Catalog) -> String {
    let mut out = String::new();
    for group in FacetGroup::ALL {
        let values = catalog.tags(group);
        if !values.is_empty() {
            let _ = writeln!(out, "{}\n  {}", group.question(), values.join(", "));
        }
    }
    for group in ExactGroup::ALL {
        let values = catalog.scalars(group);
        if !values.is_empty() {
            let _ = writeln!(out, "{}\n  {}", group.label(), values.join(", "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> Item {
        Item {
            id: 7,
            title: "Mapa de actores".into(),
            description: "d".repeat(30),
            objective: "Identificar actores".into(),
            materials: vec!["Post-its".into()],
            steps: vec!["Listar".into(), "Agrupar".into()],
            users: vec!["Analista".into()],
            usage: vec!["Descubrir".into()],
            kind: vec!["Guías".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_list_truncates_and_counts() {
        let out = list(&[item()], 10);
        assert!(out.contains("   7  Mapa de actores"));
        assert!(out.contains("[Analista, Descubrir, Guías]"));
        assert!(out.contains(&format!("{}...", "d".repeat(10))));
        assert!(out.ends_with("Se encontró 1 herramienta para los criterios seleccionados.\n"));
    }

    #[test]
    fn test_list_empty() {
        assert!(list(&[], 100).starts_with("No se encontraron herramientas"));
    }

    #[test]
    fn test_detail_numbers_steps() {
        let out = detail(&ModalContent::from_item(&item()));
        assert!(out.starts_with("Mapa de actores\n===============\n"));
        assert!(out.contains("Para: Analista"));
        assert!(out.contains("  1. Listar\n  2. Agrupar\n"));
        assert!(out.contains("  - Post-its"));
    }

    #[test]
    fn test_issues_lines() {
        let out = issues(&[Issue::DuplicateId(3), Issue::EmptyTitle(4)]);
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("id 3"));
    }
}
