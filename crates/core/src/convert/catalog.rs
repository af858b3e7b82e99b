//! Read-only enumeration of categories and units for selection UIs.

use convertly_shared::Category;
use serde::Serialize;

use super::formula::{Formula, FormulaKind};

/// Category with its formula kind and unit identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// Category identifier.
    pub category: Category,
    /// Formula used by the category.
    pub formula: FormulaKind,
    /// Unit identifiers in table order.
    pub units: Vec<&'static str>,
}

/// Returns all supported categories in presentation order.
#[must_use]
pub fn categories() -> &'static [Category] {
    &Category::ALL
}

/// Returns the unit identifiers of a category in table order.
#[must_use]
pub fn units(category: Category) -> Vec<&'static str> {
    Formula::for_category(category).unit_ids()
}

/// Describes one category.
#[must_use]
pub fn describe(category: Category) -> CategoryInfo {
    let formula = Formula::for_category(category);
    CategoryInfo {
        category,
        formula: formula.kind(),
        units: formula.unit_ids(),
    }
}

/// Describes every category.
#[must_use]
pub fn catalog() -> Vec<CategoryInfo> {
    categories().iter().copied().map(describe).collect()
}
