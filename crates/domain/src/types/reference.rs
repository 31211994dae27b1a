//! Reference data delivered by the live feed

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::record::SalesRecord;

/// Salesperson listed in the reference range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Salesperson {
    pub name: String,
    /// Canonical digits-only phone
    pub phone: String,
}

/// Identifier of the live spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedHandle(String);

impl FeedHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FeedHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text product catalogue handed to the analysis prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductContext(String);

impl ProductContext {
    /// Build the catalogue from `(product, category, salesperson_name)` rows.
    ///
    /// Rows lacking a product or category are skipped.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, Option<&'a str>)>,
    {
        let lines: Vec<String> = entries
            .into_iter()
            .filter(|(product, category, _)| !product.is_empty() && !category.is_empty())
            .map(|(product, category, salesperson)| match salesperson {
                Some(name) if !name.is_empty() => format!(
                    "- {product}: {category} ({}: {name})",
                    crate::constants::SALESPERSON_LABEL
                ),
                _ => format!("- {product}: {category}"),
            })
            .collect();
        Self(lines.join("\n"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Everything one live fetch produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveSnapshot {
    pub records: Vec<SalesRecord>,
    pub salespersons: Vec<Salesperson>,
    pub product_context: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_context_lines() {
        let context = ProductContext::from_entries([
            ("Fertilizer A", "Organic", Some("Anan")),
            ("Seed B", "Rice", None),
            ("", "Orphan", None),
            ("Tool C", "", Some("Anan")),
        ]);
        assert_eq!(
            context.as_str(),
            "- Fertilizer A: Organic (พนักงาน: Anan)\n- Seed B: Rice"
        );
    }

    #[test]
    fn empty_reference_yields_empty_context() {
        assert!(ProductContext::from_entries(std::iter::empty()).is_empty());
    }
}
