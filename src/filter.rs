use serde::Deserialize;

use crate::models::InventoryItem;

/// Criteria for narrowing the table. Doubles as the query-string shape of the
/// list page, so every field defaults to "unconstrained" when absent.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub supplier: String,
}

impl FilterCriteria {
    fn matches(&self, item: &InventoryItem) -> bool {
        let text_ok = self.q.is_empty() || {
            let needle = self.q.to_lowercase();
            item.product_name.to_lowercase().contains(&needle)
                || item.product_id.to_string().contains(&needle)
        };
        let category_ok = self.category.is_empty() || item.category == self.category;
        let supplier_ok = self.supplier.is_empty() || item.supplier == self.supplier;
        text_ok && category_ok && supplier_ok
    }
}

// Stable filter: matched items keep their original relative order.
pub fn filter_items<'a>(
    items: &'a [InventoryItem],
    criteria: &FilterCriteria,
) -> Vec<&'a InventoryItem> {
    items.iter().filter(|item| criteria.matches(item)).collect()
}

pub fn unique_categories(items: &[InventoryItem]) -> Vec<String> {
    unique_values(items, |item| &item.category)
}

pub fn unique_suppliers(items: &[InventoryItem]) -> Vec<String> {
    unique_values(items, |item| &item.supplier)
}

// Distinct values in first-occurrence order, for the dropdowns.
fn unique_values<'a, F>(items: &'a [InventoryItem], field: F) -> Vec<String>
where
    F: Fn(&'a InventoryItem) -> &'a String,
{
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        let value = field(item);
        if !seen.iter().any(|known| known == value) {
            seen.push(value.clone());
        }
    }
    seen
}
