//! The authored category table and its lookups.
//!
//! Order is the display order and is never sorted.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::error::AppError;
use crate::models::Category;

/// Every content category, in display order.
pub static CATEGORIES: [Category; 7] = [
    Category {
        id: "systems-strategy",
        name: "Systems & Strategy",
        description: "Digital power, code, and strategic design",
        icon: Some("💻"),
    },
    Category {
        id: "integration-growth",
        name: "Integration & Growth",
        description: "Inner mastery, parenting, masculine leadership",
        icon: Some("🧘🏽‍♂️"),
    },
    Category {
        id: "parenting",
        name: "Parenting",
        description: "Raising resilient children, family dynamics, and personal growth",
        icon: Some("👨‍👩‍👧‍👦"),
    },
    Category {
        id: "diy-creation",
        name: "DIY & Creation",
        description: "Physical builds, handmade goods, crafting",
        icon: Some("🛠️"),
    },
    Category {
        id: "art-expression",
        name: "Art & Expression",
        description: "Creative soul, aesthetic power, truth-telling",
        icon: Some("🎵"),
    },
    Category {
        id: "learning-projects",
        name: "Learning Projects",
        description: "Documentation of mastery in progress",
        icon: Some("📚"),
    },
    Category {
        id: "metaspace",
        name: "Metaspace",
        description: "Reflections on the journey itself — the why, the how, the code of life",
        icon: Some("🌀"),
    },
];

static BY_ID: Lazy<HashMap<&'static str, &'static Category>> =
    Lazy::new(|| CATEGORIES.iter().map(|c| (c.id, c)).collect());

/// Returns the full table in display order.
pub fn all() -> &'static [Category] {
    &CATEGORIES
}

/// Category ids in display order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|c| c.id)
}

/// Exact, case-sensitive lookup by id.
pub fn find(id: &str) -> Option<&'static Category> {
    BY_ID.get(id).copied()
}

/// Like [`find`], but an unknown id is an error.
pub fn get(id: &str) -> Result<&'static Category, AppError> {
    find(id).ok_or_else(|| AppError::CategoryNotFound(id.to_string()))
}

/// Check a table against the category schema.
///
/// Ids must be unique slugs; names and descriptions must not be blank.
/// Returns the first violation found.
pub fn validate(categories: &[Category]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(categories.len());

    for (index, category) in categories.iter().enumerate() {
        if !is_slug(category.id) {
            return Err(AppError::Validation(format!(
                "category #{} has invalid id '{}': expected lowercase letters, digits and single hyphens",
                index + 1,
                category.id
            )));
        }
        if !seen.insert(category.id) {
            return Err(AppError::Validation(format!(
                "duplicate category id '{}'",
                category.id
            )));
        }
        if category.name.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "category '{}' has an empty name",
                category.id
            )));
        }
        if category.description.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "category '{}' has an empty description",
                category.id
            )));
        }
    }

    tracing::debug!(count = categories.len(), "Category table valid");
    Ok(())
}

fn is_slug(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('-')
        && !id.ends_with('-')
        && !id.contains("--")
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
