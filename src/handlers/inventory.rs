use askama::Template;
use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use url::Url;

use crate::{
    filter::{self, FilterCriteria},
    models::{InventoryItem, NewInventoryItem},
    validate::{validate, FieldErrors},
    AppState,
};

#[derive(Template)]
#[template(path = "inventories/items.html")]
struct ItemsTemplate {
    items: Vec<ItemDisplay>,
    categories: Vec<String>,
    suppliers: Vec<String>,
    criteria: FilterCriteria,
}

#[derive(Template)]
#[template(path = "inventories/item_form.html")]
struct ItemFormTemplate {
    form: ItemForm,
    errors: FieldErrors,
}

// Row shaped for the table template: image URL resolved against the service
// origin, alt text falling back to the product name, delete link pre-encoded.
struct ItemDisplay {
    product_id: i64,
    product_name: String,
    quantity: i64,
    price: i64,
    category: String,
    supplier: String,
    image_url: String,
    image_alt: String,
    delete_href: String,
}

impl ItemDisplay {
    fn from_item(item: &InventoryItem, base: &Url) -> Self {
        let image_url = item
            .product_image
            .as_ref()
            .map(|image| image.resolve_url(base))
            .unwrap_or_default();
        let image_alt = item
            .product_image
            .as_ref()
            .and_then(|image| image.alternative_text.clone())
            .unwrap_or_else(|| item.product_name.clone());
        ItemDisplay {
            product_id: item.product_id,
            product_name: item.product_name.clone(),
            quantity: item.quantity,
            price: item.price,
            category: item.category.clone(),
            supplier: item.supplier.clone(),
            image_url,
            image_alt,
            delete_href: format!(
                "/inventories/{}/delete",
                urlencoding::encode(&item.document_id)
            ),
        }
    }
}

// Raw form fields as the browser submits them; everything arrives as a
// string and numeric fields are parsed before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemForm {
    #[serde(rename = "productID", default)]
    product_id: String,
    #[serde(rename = "productName", default)]
    product_name: String,
    #[serde(default)]
    quantity: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    supplier: String,
    #[serde(rename = "productImage", default)]
    product_image: String,
}

impl Default for ItemForm {
    // A fresh form starts from the same defaults the original form used.
    fn default() -> Self {
        ItemForm {
            product_id: "1".to_string(),
            product_name: String::new(),
            quantity: "1".to_string(),
            price: "1".to_string(),
            category: String::new(),
            supplier: String::new(),
            product_image: String::new(),
        }
    }
}

fn parse_candidate(form: &ItemForm) -> (NewInventoryItem, FieldErrors) {
    let mut parse_errors = FieldErrors::default();
    let mut numeric = |field: &'static str, raw: &str| -> i64 {
        match raw.trim().parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                parse_errors.insert(field, "Must be a number");
                0
            }
        }
    };
    let candidate = NewInventoryItem {
        product_id: numeric("productID", &form.product_id),
        quantity: numeric("quantity", &form.quantity),
        price: numeric("price", &form.price),
        product_name: form.product_name.clone(),
        category: form.category.clone(),
        supplier: form.supplier.clone(),
        product_image: form.product_image.clone(),
    };
    (candidate, parse_errors)
}

// Handler to display the filtered list of inventory items
pub async fn items_list(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Html<String> {
    let inventory = state.inventory.read().await;
    let items = inventory.items();

    // Dropdown options come from the full set, not the filtered one.
    let categories = filter::unique_categories(items);
    let suppliers = filter::unique_suppliers(items);

    let rows = filter::filter_items(items, &criteria)
        .into_iter()
        .map(|item| ItemDisplay::from_item(item, state.client.base_url()))
        .collect();

    let template = ItemsTemplate {
        items: rows,
        categories,
        suppliers,
        criteria,
    };
    Html(template.render().unwrap())
}

// Handler to show the form for adding a new item
pub async fn item_form() -> Html<String> {
    let template = ItemFormTemplate {
        form: ItemForm::default(),
        errors: FieldErrors::default(),
    };
    Html(template.render().unwrap())
}

// Handler to create a new inventory item
pub async fn create_item(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Response, StatusCode> {
    let (candidate, parse_errors) = parse_candidate(&form);
    let mut errors = validate(&candidate, &state.limits);
    errors.merge(parse_errors);

    // Submission stays blocked while any field has an error; re-render the
    // form with the entered values and the per-field messages.
    if !errors.is_empty() {
        let template = ItemFormTemplate { form, errors };
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(template.render().unwrap()),
        )
            .into_response());
    }

    let created = state.client.create_item(&candidate).await.map_err(|e| {
        eprintln!("Failed to create item: {}", e);
        StatusCode::BAD_GATEWAY
    })?;

    // Appended only now that the service confirmed the record.
    state.inventory.write().await.append(created);

    Ok(Redirect::to("/inventories").into_response())
}

// Handler to delete an inventory item by its documentId
pub async fn delete_item(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
) -> Result<Redirect, StatusCode> {
    state.client.delete_item(&document_id).await.map_err(|e| {
        eprintln!("Failed to delete item {}: {}", document_id, e);
        StatusCode::BAD_GATEWAY
    })?;

    // An id with no local entry (e.g. a raced second delete) prunes nothing.
    state.inventory.write().await.remove(&document_id);

    Ok(Redirect::to("/inventories"))
}
