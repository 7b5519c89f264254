use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    #[serde(rename = "alternativeText", default, skip_serializing_if = "Option::is_none")]
    pub alternative_text: Option<String>,
}

impl ProductImage {
    // The service stores upload paths relative to its own origin.
    pub fn resolve_url(&self, base: &Url) -> String {
        match Url::parse(&self.url) {
            Ok(absolute) => absolute.into(),
            Err(_) => base
                .join(&self.url)
                .map(Into::into)
                .unwrap_or_else(|_| self.url.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: i64,
    pub document_id: String,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub price: i64,
    pub category: String,
    pub supplier: String,
    pub product_image: Option<ProductImage>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

// Candidate for the create operation. The image is submitted as a plain URL;
// the service resolves it into a media reference on its side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInventoryItem {
    #[serde(rename = "productID")]
    pub product_id: i64,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub quantity: i64,
    pub price: i64,
    pub category: String,
    pub supplier: String,
    #[serde(rename = "productImage")]
    pub product_image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemAttributes {
    #[serde(rename = "productID")]
    pub product_id: i64,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub quantity: i64,
    pub price: i64,
    pub category: String,
    pub supplier: String,
    #[serde(rename = "productImage", default)]
    pub product_image: Option<ProductImage>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// One record as the service returns it. Depending on the service version the
// item fields arrive either inline next to id/documentId or nested under an
// `attributes` key; both shapes are accepted.
#[derive(Debug, Deserialize)]
pub struct ItemRecord {
    pub id: i64,
    #[serde(rename = "documentId")]
    pub document_id: String,
    #[serde(flatten)]
    pub body: RecordBody,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordBody {
    Nested { attributes: ItemAttributes },
    Inline(ItemAttributes),
}

impl From<ItemRecord> for InventoryItem {
    fn from(record: ItemRecord) -> Self {
        let ItemRecord {
            id,
            document_id,
            body,
        } = record;
        let fields = match body {
            RecordBody::Nested { attributes } => attributes,
            RecordBody::Inline(attributes) => attributes,
        };
        InventoryItem {
            id,
            document_id,
            product_id: fields.product_id,
            product_name: fields.product_name,
            quantity: fields.quantity,
            price: fields.price,
            category: fields.category,
            supplier: fields.supplier,
            product_image: fields.product_image,
            created_at: fields.created_at,
            updated_at: fields.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    pub data: Vec<ItemRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ItemEnvelope {
    pub data: ItemRecord,
}

#[derive(Debug, Serialize)]
pub struct CreateEnvelope<'a> {
    pub data: &'a NewInventoryItem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_with_inline_fields_deserializes() {
        let json = serde_json::json!({
            "id": 7,
            "documentId": "abc123",
            "productID": 42,
            "productName": "Espresso Beans",
            "quantity": 12,
            "price": 18,
            "category": "Beverages",
            "supplier": "Acme",
            "productImage": { "url": "/uploads/beans.png", "alternativeText": "beans" },
            "createdAt": "2025-03-01T10:00:00.000Z",
            "updatedAt": "2025-03-02T10:00:00.000Z"
        });
        let record: ItemRecord = serde_json::from_value(json).expect("inline record");
        let item = InventoryItem::from(record);
        assert_eq!(item.id, 7);
        assert_eq!(item.document_id, "abc123");
        assert_eq!(item.product_name, "Espresso Beans");
        assert_eq!(item.product_image.as_ref().unwrap().url, "/uploads/beans.png");
        assert!(item.created_at.is_some());
    }

    #[test]
    fn record_with_nested_attributes_deserializes() {
        let json = serde_json::json!({
            "id": 3,
            "documentId": "def456",
            "attributes": {
                "productID": 9,
                "productName": "Filter Paper",
                "quantity": 100,
                "price": 4,
                "category": "Supplies",
                "supplier": "PaperCo"
            }
        });
        let record: ItemRecord = serde_json::from_value(json).expect("nested record");
        let item = InventoryItem::from(record);
        assert_eq!(item.id, 3);
        assert_eq!(item.product_id, 9);
        assert_eq!(item.supplier, "PaperCo");
        assert!(item.product_image.is_none());
        assert!(item.created_at.is_none());
    }

    #[test]
    fn create_candidate_is_wrapped_in_data() {
        let candidate = NewInventoryItem {
            product_id: 1,
            product_name: "Mug".to_string(),
            quantity: 5,
            price: 9,
            category: "Kitchenware".to_string(),
            supplier: "MugCo".to_string(),
            product_image: "http://images.local/mug.png".to_string(),
        };
        let body = serde_json::to_value(CreateEnvelope { data: &candidate }).unwrap();
        assert_eq!(body["data"]["productID"], 1);
        assert_eq!(body["data"]["productName"], "Mug");
        assert_eq!(body["data"]["productImage"], "http://images.local/mug.png");
    }

    #[test]
    fn relative_image_paths_resolve_against_the_service_origin() {
        let base = Url::parse("http://localhost:1337").unwrap();
        let image = ProductImage {
            url: "/uploads/beans.png".to_string(),
            alternative_text: None,
        };
        assert_eq!(image.resolve_url(&base), "http://localhost:1337/uploads/beans.png");
    }

    #[test]
    fn absolute_image_urls_are_left_alone() {
        let base = Url::parse("http://localhost:1337").unwrap();
        let image = ProductImage {
            url: "https://cdn.example.com/beans.png".to_string(),
            alternative_text: None,
        };
        assert_eq!(image.resolve_url(&base), "https://cdn.example.com/beans.png");
    }
}
