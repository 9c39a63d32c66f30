//! Category model for content classification.

use serde::Serialize;

/// A labeled grouping used to classify content items.
///
/// Records are authored as `'static` data in [`crate::catalog`], so every
/// field borrows from the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    /// Stable slug identifier (e.g., "parenting", "diy-creation").
    pub id: &'static str,
    /// Display label.
    pub name: &'static str,
    /// One-sentence explanation of what belongs in the category.
    pub description: &'static str,
    /// Optional emoji or glyph shown next to the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

impl Category {
    /// Display label prefixed with the icon, when there is one.
    pub fn label(&self) -> String {
        match self.icon {
            Some(icon) => format!("{} {}", icon, self.name),
            None => self.name.to_string(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: Category = Category {
        id: "plain",
        name: "Plain",
        description: "No icon here",
        icon: None,
    };

    #[test]
    fn test_json_omits_missing_icon() {
        let value = serde_json::to_value(PLAIN).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "plain",
                "name": "Plain",
                "description": "No icon here",
            })
        );
    }

    #[test]
    fn test_json_includes_icon() {
        let with_icon = Category {
            icon: Some("📚"),
            ..PLAIN
        };
        let value = serde_json::to_value(with_icon).unwrap();
        assert_eq!(value["icon"], "📚");
    }

    #[test]
    fn test_label() {
        assert_eq!(PLAIN.label(), "Plain");
        let with_icon = Category {
            icon: Some("🌀"),
            ..PLAIN
        };
        assert_eq!(with_icon.label(), "🌀 Plain");
        assert_eq!(with_icon.to_string(), "Plain (plain)");
    }
}
