use crate::models::InventoryItem;

/// Authoritative in-memory copy of the item set for the lifetime of the
/// process. All mutations are applied only after the remote service has
/// confirmed the corresponding operation; a failed call leaves the list
/// untouched.
#[derive(Debug, Default)]
pub struct InventoryList {
    items: Vec<InventoryItem>,
}

impl InventoryList {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the list wholesale with a fresh load from the service.
    pub fn replace_all(&mut self, items: Vec<InventoryItem>) {
        self.items = items;
    }

    /// Append a record the service confirmed. Append-only: no positional
    /// guarantee relative to any displayed ordering.
    pub fn append(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    /// Remove the first entry with the given documentId after a confirmed
    /// delete. An id with no local entry is a no-op, not an error; a second
    /// delete of the same id simply finds nothing to remove.
    pub fn remove(&mut self, document_id: &str) -> bool {
        match self
            .items
            .iter()
            .position(|item| item.document_id == document_id)
        {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(document_id: &str, name: &str) -> InventoryItem {
        InventoryItem {
            id: 1,
            document_id: document_id.to_string(),
            product_id: 1,
            product_name: name.to_string(),
            quantity: 1,
            price: 1,
            category: "Beverages".to_string(),
            supplier: "Acme".to_string(),
            product_image: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn append_grows_the_list_by_one() {
        let mut list = InventoryList::new(vec![item("a", "Espresso Beans")]);
        list.append(item("b", "Green Tea"));
        assert_eq!(list.len(), 2);
        assert!(list.items().iter().any(|i| i.document_id == "b"));
    }

    #[test]
    fn remove_drops_exactly_the_matching_entry() {
        let mut list = InventoryList::new(vec![
            item("a", "Espresso Beans"),
            item("b", "Green Tea"),
            item("c", "Filter Paper"),
        ]);
        assert!(list.remove("b"));
        assert_eq!(list.len(), 2);
        assert!(!list.items().iter().any(|i| i.document_id == "b"));
    }

    #[test]
    fn removing_an_absent_id_is_a_noop() {
        let mut list = InventoryList::new(vec![item("a", "Espresso Beans")]);
        assert!(!list.remove("missing"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn a_second_delete_of_the_same_id_finds_nothing() {
        let mut list = InventoryList::new(vec![item("a", "Espresso Beans")]);
        assert!(list.remove("a"));
        assert!(!list.remove("a"));
        assert!(list.is_empty());
    }

    #[test]
    fn replace_all_is_wholesale() {
        let mut list = InventoryList::new(vec![item("a", "Espresso Beans")]);
        list.replace_all(vec![item("b", "Green Tea"), item("c", "Filter Paper")]);
        assert_eq!(list.len(), 2);
        assert!(!list.items().iter().any(|i| i.document_id == "a"));
    }
}
