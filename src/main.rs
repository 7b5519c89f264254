mod client;
mod filter;
mod handlers;
mod models;
mod validate;
mod viewmodel;

use std::{env, sync::Arc};

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use dotenvy::dotenv;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use client::InventoryClient;
use validate::ValidationLimits;
use viewmodel::InventoryList;

#[derive(Clone)]
pub struct AppState {
    pub client: InventoryClient,
    pub inventory: Arc<RwLock<InventoryList>>,
    pub limits: ValidationLimits,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    env_logger::init();

    let api_url =
        env::var("INVENTORY_API_URL").unwrap_or_else(|_| "http://localhost:1337".to_string());

    let client = InventoryClient::new(&api_url)
        .expect("INVENTORY_API_URL must be a valid absolute URL");

    // Initial load; the view-model owns the authoritative list from here on.
    let items = client
        .list_items()
        .await
        .expect("Failed to load inventory from the remote service");

    println!("Loaded {} inventory items from {}", items.len(), api_url);

    let state = AppState {
        client,
        inventory: Arc::new(RwLock::new(InventoryList::new(items))),
        limits: ValidationLimits::default(),
    };

    // Build the application router
    let app = create_router(state);

    // Get port from environment or use default
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    println!("🚀 Stockroom server starting on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::permanent("/inventories") }))
        // Inventory routes
        .route("/inventories", get(handlers::inventory::items_list))
        .route("/inventories", post(handlers::inventory::create_item))
        .route("/inventories/new", get(handlers::inventory::item_form))
        .route(
            "/inventories/:document_id/delete",
            get(handlers::inventory::delete_item),
        )
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
