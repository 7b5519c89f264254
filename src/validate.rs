use std::collections::BTreeMap;

use url::Url;

use crate::models::NewInventoryItem;

/// Minimums enforced on the add-item form. The defaults reproduce the form
/// schema of the original service contract, including the minimum of 1 on
/// quantity and price (so a zero stock level cannot be recorded unless a
/// caller relaxes the limits).
#[derive(Debug, Clone, Copy)]
pub struct ValidationLimits {
    pub min_product_id: i64,
    pub min_product_name_len: usize,
    pub min_quantity: i64,
    pub min_price: i64,
    pub min_category_len: usize,
    pub min_supplier_len: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_product_id: 1,
            min_product_name_len: 3,
            min_quantity: 1,
            min_price: 1,
            min_category_len: 5,
            min_supplier_len: 3,
        }
    }
}

/// Per-field validation messages keyed by form field name. A field with no
/// entry is valid. This is plain data, never an error value; blocking
/// submission on a non-empty map is the caller's job.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    // Empty string when the field is valid; templates render it directly.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Entries from `other` win on collision, so parse-stage messages can
    // supersede minimum-check messages for the same field.
    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }
}

pub fn validate(candidate: &NewInventoryItem, limits: &ValidationLimits) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if candidate.product_id < limits.min_product_id {
        errors.insert("productID", "Must include product id");
    }
    if candidate.product_name.chars().count() < limits.min_product_name_len {
        errors.insert("productName", "Product name is required");
    }
    if candidate.quantity < limits.min_quantity {
        errors.insert("quantity", "Must input quantity");
    }
    if candidate.price < limits.min_price {
        errors.insert("price", "Must input unit price");
    }
    if candidate.category.chars().count() < limits.min_category_len {
        errors.insert("category", "Category is required");
    }
    if candidate.supplier.chars().count() < limits.min_supplier_len {
        errors.insert("supplier", "Supplier is required");
    }
    if !is_absolute_url(&candidate.product_image) {
        errors.insert("productImage", "Must be a valid URL");
    }
    errors
}

fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).map(|url| url.has_host()).unwrap_or(false)
}
