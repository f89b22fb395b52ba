//! Catalog item types
//!
//! The JSON keys follow the deployed `herramientas.json` document, so the
//! field names are renamed on the wire.
//!
//! Two classification layouts exist:
//! - faceted (`usuarios` / `uso` / `tipo`): tag lists, multi-select filters
//! - exact (`categoria` / `duracion` / `participantes`): one tag each, single-select filters

use serde::{Deserialize, Serialize};

/// Stable item identifier, used as rendering key and colour seed
pub type ItemId = u32;

/// One catalog entry ("herramienta")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,

    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "descripcion", default)]
    pub description: String,

    #[serde(rename = "objetivo", default)]
    pub objective: String,

    /// Image URI (may be a data URL). Blank strings count as absent.
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(rename = "materiales", default)]
    pub materials: Vec<String>,

    #[serde(rename = "pasos", default)]
    pub steps: Vec<String>,

    #[serde(rename = "usuarios", default)]
    pub users: Vec<String>,

    #[serde(rename = "uso", default)]
    pub usage: Vec<String>,

    #[serde(rename = "tipo", default)]
    pub kind: Vec<String>,

    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "duracion", default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(rename = "participantes", default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<String>,

    /// Attachment written by the authoring tool; carried through untouched.
    #[serde(rename = "archivoAdjunto", default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<serde_json::Value>,
}

impl Item {
    /// Image URI, or `None` when missing or blank
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Tag list of a faceted group
    pub fn tags(&self, group: FacetGroup) -> &[String] {
        match group {
            FacetGroup::Users => &self.users,
            FacetGroup::Usage => &self.usage,
            FacetGroup::Kind => &self.kind,
        }
    }

    /// Scalar tag of an exact group
    pub fn scalar(&self, group: ExactGroup) -> Option<&str> {
        match group {
            ExactGroup::Category => self.category.as_deref(),
            ExactGroup::Duration => self.duration.as_deref(),
            ExactGroup::Participants => self.participants.as_deref(),
        }
    }

    /// Primary classification tag used for icon lookup:
    /// first `tipo` entry, falling back to `categoria`.
    pub fn primary_tag(&self) -> Option<&str> {
        self.kind
            .first()
            .map(String::as_str)
            .or(self.category.as_deref())
    }
}

/// Multi-select filter group (faceted layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetGroup {
    /// ¿Quién va a usar la herramienta?
    Users,
    /// ¿Para qué lo usarás?
    Usage,
    /// ¿Qué tipo de herramienta buscas?
    Kind,
}

impl FacetGroup {
    pub const ALL: [FacetGroup; 3] = [FacetGroup::Users, FacetGroup::Usage, FacetGroup::Kind];

    /// Form field name used by the filter checkboxes
    pub fn key(&self) -> &'static str {
        match self {
            FacetGroup::Users => "usuarios",
            FacetGroup::Usage => "uso",
            FacetGroup::Kind => "tipo",
        }
    }

    /// Dropdown question shown above the options
    pub fn question(&self) -> &'static str {
        match self {
            FacetGroup::Users => "¿Quién va a usar la herramienta?",
            FacetGroup::Usage => "¿Para qué lo usarás?",
            FacetGroup::Kind => "¿Qué tipo de herramienta buscas?",
        }
    }

    /// Label prefix of the tag row inside the modal
    pub fn label(&self) -> &'static str {
        match self {
            FacetGroup::Users => "Para:",
            FacetGroup::Usage => "Uso:",
            FacetGroup::Kind => "Tipo:",
        }
    }

    /// Material icon shown next to badges of this group
    pub fn icon(&self) -> &'static str {
        match self {
            FacetGroup::Users => "person",
            FacetGroup::Usage => "business",
            FacetGroup::Kind => "widgets",
        }
    }

    /// CSS modifier shared by card badges and modal tags
    pub fn class(&self) -> &'static str {
        match self {
            FacetGroup::Users => "usuarios",
            FacetGroup::Usage => "uso",
            FacetGroup::Kind => "tipo",
        }
    }

    /// Parse a group from its form key or English name
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "usuarios" | "users" => Some(FacetGroup::Users),
            "uso" | "usage" => Some(FacetGroup::Usage),
            "tipo" | "kind" => Some(FacetGroup::Kind),
            _ => None,
        }
    }
}

/// Single-select filter group (exact layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExactGroup {
    Category,
    Duration,
    Participants,
}

impl ExactGroup {
    pub const ALL: [ExactGroup; 3] = [
        ExactGroup::Category,
        ExactGroup::Duration,
        ExactGroup::Participants,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ExactGroup::Category => "categoria",
            ExactGroup::Duration => "duracion",
            ExactGroup::Participants => "participantes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExactGroup::Category => "Categoría:",
            ExactGroup::Duration => "Duración:",
            ExactGroup::Participants => "Participantes:",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ExactGroup::Category => "category",
            ExactGroup::Duration => "schedule",
            ExactGroup::Participants => "group",
        }
    }

    pub fn class(&self) -> &'static str {
        self.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faceted_json() -> &'static str {
        r#"{
            "id": 3,
            "titulo": "Mapa de empatía",
            "descripcion": "Entender al usuario",
            "objetivo": "Alinear al equipo",
            "imagen": "",
            "materiales": ["Post-its"],
            "pasos": ["Dibujar el mapa", "Completar cuadrantes"],
            "usuarios": ["Analista", "Diseñador"],
            "uso": ["Descubrimiento"],
            "tipo": ["Guías"]
        }"#
    }

    #[test]
    fn test_item_deserialize_faceted() {
        let item: Item = serde_json::from_str(faceted_json()).expect("deserialize failed");
        assert_eq!(item.id, 3);
        assert_eq!(item.title, "Mapa de empatía");
        assert_eq!(item.users, vec!["Analista", "Diseñador"]);
        assert_eq!(item.tags(FacetGroup::Kind), ["Guías".to_string()]);
        assert_eq!(item.category, None);
    }

    #[test]
    fn test_item_deserialize_exact_layout() {
        let json = r#"{
            "id": 1,
            "titulo": "Lluvia de ideas",
            "categoria": "Ideación",
            "duracion": "30 min",
            "participantes": "3-8",
            "descripcion": "Generar ideas",
            "objetivo": "Divergir",
            "materiales": [],
            "pasos": []
        }"#;

        let item: Item = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(item.scalar(ExactGroup::Category), Some("Ideación"));
        assert_eq!(item.scalar(ExactGroup::Duration), Some("30 min"));
        assert!(item.users.is_empty());
        assert_eq!(item.primary_tag(), Some("Ideación"));
    }

    #[test]
    fn test_item_deserialize_missing_lists() {
        let json = r#"{"id": 9, "titulo": "Mínima"}"#;
        let item: Item = serde_json::from_str(json).expect("deserialize failed");
        assert!(item.materials.is_empty());
        assert!(item.steps.is_empty());
        assert_eq!(item.description, "");
    }

    #[test]
    fn test_image_url_blank_is_absent() {
        let item: Item = serde_json::from_str(faceted_json()).unwrap();
        assert_eq!(item.image_url(), None);

        let with_image = Item {
            image: Some("  img/mapa.png ".to_string()),
            ..Default::default()
        };
        assert_eq!(with_image.image_url(), Some("img/mapa.png"));
    }

    #[test]
    fn test_primary_tag_prefers_kind() {
        let item = Item {
            kind: vec!["Infografías".into(), "Guías".into()],
            category: Some("Ideación".into()),
            ..Default::default()
        };
        assert_eq!(item.primary_tag(), Some("Infografías"));
        assert_eq!(Item::default().primary_tag(), None);
    }

    #[test]
    fn test_serialize_uses_wire_keys() {
        let item = Item {
            id: 5,
            title: "Test".into(),
            users: vec!["Analista".into()],
            ..Default::default()
        };
        let json = serde_json::to_string(&item).expect("serialize failed");
        assert!(json.contains("\"titulo\":\"Test\""));
        assert!(json.contains("\"usuarios\":[\"Analista\"]"));
        assert!(!json.contains("imagen"));
        assert!(!json.contains("categoria"));
    }

    #[test]
    fn test_attachment_is_carried_through() {
        let json = r#"{"id": 2, "titulo": "Con adjunto", "archivoAdjunto": {"nombre": "guia.pdf"}}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["archivoAdjunto"]["nombre"], "guia.pdf");
    }

    #[test]
    fn test_facet_group_parse() {
        assert_eq!(FacetGroup::parse("usuarios"), Some(FacetGroup::Users));
        assert_eq!(FacetGroup::parse("Kind"), Some(FacetGroup::Kind));
        assert_eq!(FacetGroup::parse("uso"), Some(FacetGroup::Usage));
        assert_eq!(FacetGroup::parse("color"), None);
    }
}
