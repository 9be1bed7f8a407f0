//! Shopping cart collaborator
//!
//! The builder only needs [`CartSink`]; the storefront's [`Cart`] also keeps
//! the list persisted so it survives a new session.

mod storage;

pub use storage::{CartStorage, FileStorage, MemoryStorage};

use shared::models::CartItem;

use crate::error::CartStorageError;
use crate::pricing::sum_prices;

/// Fixed storage key for the persisted item list
pub const CART_STORAGE_KEY: &str = "cart";

/// Receives items handed off by the plate builder
pub trait CartSink {
    fn add_item(&mut self, item: CartItem);
}

impl CartSink for Vec<CartItem> {
    fn add_item(&mut self, item: CartItem) {
        self.push(item);
    }
}

/// Persisted shopping cart
///
/// Every mutation writes the full list back to storage. Persistence failures
/// are logged and never roll back the in-memory list.
#[derive(Debug)]
pub struct Cart<S: CartStorage> {
    items: Vec<CartItem>,
    storage: S,
}

impl<S: CartStorage> Cart<S> {
    /// Rehydrate the cart, starting empty if the stored value is unreadable
    pub fn load(storage: S) -> Self {
        let items = match read_items(&storage) {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load cart from storage");
                Vec::new()
            }
        };
        tracing::debug!(count = items.len(), "Cart loaded");
        Self { items, storage }
    }

    /// Rehydrate the cart, surfacing storage and parse errors
    pub fn try_load(storage: S) -> Result<Self, CartStorageError> {
        let items = read_items(&storage)?;
        Ok(Self { items, storage })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Running total of stored item prices
    pub fn subtotal(&self) -> f64 {
        sum_prices(self.items.iter().map(|item| item.price))
    }

    pub fn add_item(&mut self, item: CartItem) {
        tracing::debug!(id = %item.id, reg = %item.reg, price = item.price, "Cart item added");
        self.items.push(item);
        self.persist();
    }

    /// Remove by id; unknown ids leave the cart unchanged
    pub fn remove_item(&mut self, id: &str) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        self.persist();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Replace the whole list
    pub fn set_items(&mut self, items: Vec<CartItem>) {
        self.items = items;
        self.persist();
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn try_persist(&mut self) -> Result<(), CartStorageError> {
        let json = serde_json::to_string(&self.items)?;
        self.storage.save(CART_STORAGE_KEY, &json)
    }

    fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            tracing::error!(error = %e, "Failed to persist cart");
        }
    }
}

impl<S: CartStorage> CartSink for Cart<S> {
    fn add_item(&mut self, item: CartItem) {
        Cart::add_item(self, item);
    }
}

fn read_items<S: CartStorage>(storage: &S) -> Result<Vec<CartItem>, CartStorageError> {
    match storage.load(CART_STORAGE_KEY)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{FixingKit, PlateBadge, PlateConfig, PlateStyle};

    fn item(id: &str, reg: &str, price: f64) -> CartItem {
        CartItem {
            id: id.to_string(),
            reg: reg.to_string(),
            price,
            config: PlateConfig::default().with_reg(reg),
        }
    }

    /// Storage whose writes always fail
    struct BrokenStorage;

    impl CartStorage for BrokenStorage {
        fn load(&self, _key: &str) -> Result<Option<String>, CartStorageError> {
            Ok(None)
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<(), CartStorageError> {
            Err(std::io::Error::other("disk full").into())
        }
    }

    #[test]
    fn test_add_remove_clear() {
        let mut cart = Cart::load(MemoryStorage::new());
        assert!(cart.is_empty());

        cart.add_item(item("a", "AB12CDE", 65.0));
        cart.add_item(item("b", "X1", 40.0));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.subtotal(), 105.0);

        assert_eq!(cart.remove_item("a").map(|i| i.reg), Some("AB12CDE".to_string()));
        assert!(cart.remove_item("missing").is_none());
        assert_eq!(cart.len(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), 0.0);
    }

    #[test]
    fn test_mutations_are_persisted() {
        let mut cart = Cart::load(MemoryStorage::new());
        cart.add_item(item("a", "X1", 40.0));

        let stored = cart.storage().get(CART_STORAGE_KEY).unwrap();
        let items: Vec<CartItem> = serde_json::from_str(stored).unwrap();
        assert_eq!(items, cart.items());

        cart.clear();
        assert_eq!(cart.storage().get(CART_STORAGE_KEY), Some("[]"));
    }

    #[test]
    fn test_reload_restores_config() {
        let config = PlateConfig::default()
            .with_reg("AB12CDE")
            .with_style(PlateStyle::FourD)
            .with_badge(PlateBadge::Eng)
            .with_ev_strip(true)
            .with_fixing_kit(FixingKit::Screw);
        let original = CartItem {
            id: "x".into(),
            reg: config.reg.clone(),
            price: 85.0,
            config,
        };

        let mut cart = Cart::load(MemoryStorage::new());
        cart.add_item(original.clone());

        let reloaded = Cart::load(cart.into_storage());
        assert_eq!(reloaded.items(), &[original]);
    }

    #[test]
    fn test_file_storage_survives_sessions() {
        let temp = tempfile::tempdir().unwrap();
        {
            let mut cart = Cart::load(FileStorage::new(temp.path()));
            cart.add_item(item("a", "X1", 40.0));
        }
        let cart = Cart::load(FileStorage::new(temp.path()));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].reg, "X1");
        assert!(temp.path().join("cart.json").exists());
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let mut storage = MemoryStorage::new();
        storage.insert(CART_STORAGE_KEY, "{not json");

        assert!(Cart::try_load(storage.clone()).is_err());

        let mut cart = Cart::load(storage);
        assert!(cart.is_empty());
        cart.add_item(item("a", "X1", 40.0));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_persist_failure_keeps_items() {
        let mut cart = Cart::load(BrokenStorage);
        cart.add_item(item("a", "X1", 40.0));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_set_items_replaces_list() {
        let mut cart = Cart::load(MemoryStorage::new());
        cart.add_item(item("a", "X1", 40.0));
        cart.set_items(vec![item("b", "Y2", 20.0), item("c", "Z3", 25.5)]);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.subtotal(), 45.5);
    }

    #[test]
    fn test_vec_is_a_sink() {
        let mut sink: Vec<CartItem> = Vec::new();
        CartSink::add_item(&mut sink, item("a", "X1", 40.0));
        assert_eq!(sink.len(), 1);
    }
}
