pub mod inventory;

// Re-export only the types we actually use
pub use inventory::{
    CreateEnvelope, InventoryItem, ItemEnvelope, ListEnvelope, NewInventoryItem, ProductImage,
};
