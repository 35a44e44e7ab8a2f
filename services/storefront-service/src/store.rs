use async_trait::async_trait;
use shop_cart::{Cart, CartError, CartLine};
use shop_catalog::{Catalog, ProductId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Per-session carts. Each operation is atomic for its session.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn add(&self, session_id: &str, catalog: &Catalog, id: ProductId, qty: u32) -> Result<CartLine, CartError>;
    async fn remove(&self, session_id: &str, id: ProductId) -> Option<CartLine>;
    /// Set a line's quantity (zero removes it) and return the resulting cart.
    async fn update(&self, session_id: &str, id: ProductId, qty: u32) -> Result<Cart, CartError>;
    async fn snapshot(&self, session_id: &str) -> Cart;
}

/// Carts held in process memory; they are gone after a restart.
#[derive(Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<String, Cart>>,
}

#[cfg(test)]
impl InMemoryCartStore {
    /// Number of sessions holding a cart.
    pub async fn session_count(&self) -> usize {
        self.carts.read().await.len()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn add(&self, session_id: &str, catalog: &Catalog, id: ProductId, qty: u32) -> Result<CartLine, CartError> {
        let mut guard = self.carts.write().await;
        if let Some(cart) = guard.get_mut(session_id) {
            return cart.add(catalog, id, qty).cloned();
        }

        // Only a successful add creates a session entry.
        let mut cart = Cart::new();
        let line = cart.add(catalog, id, qty)?.clone();
        guard.insert(session_id.to_owned(), cart);
        Ok(line)
    }

    async fn update(&self, session_id: &str, id: ProductId, qty: u32) -> Result<Cart, CartError> {
        let mut guard = self.carts.write().await;
        let cart = guard.get_mut(session_id).ok_or(CartError::LineNotFound(id))?;
        cart.set_qty(id, qty)?;
        Ok(cart.clone())
    }

    async fn remove(&self, session_id: &str, id: ProductId) -> Option<CartLine> {
        let mut guard = self.carts.write().await;
        guard.get_mut(session_id)?.remove(id)
    }

    async fn snapshot(&self, session_id: &str) -> Cart {
        let guard = self.carts.read().await;
        guard.get(session_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = InMemoryCartStore::default();
        let catalog = Catalog::builtin();

        store.add("a", &catalog, ProductId(3), 2).await.unwrap();
        store.add("a", &catalog, ProductId(3), 1).await.unwrap();
        store.add("b", &catalog, ProductId(4), 1).await.unwrap();

        let a = store.snapshot("a").await;
        assert_eq!(a.line_count(), 1);
        assert_eq!(a.total(), 360);
        assert_eq!(store.snapshot("b").await.total(), 180);
        assert!(store.snapshot("c").await.is_empty());
    }

    #[tokio::test]
    async fn unknown_product_leaves_cart_untouched() {
        let store = InMemoryCartStore::default();
        let catalog = Catalog::builtin();

        let err = store.add("a", &catalog, ProductId(77), 1).await.unwrap_err();
        assert_eq!(err, CartError::UnknownProduct(ProductId(77)));
        assert!(store.snapshot("a").await.is_empty());
    }

    #[tokio::test]
    async fn rejected_adds_do_not_create_sessions() {
        let store = InMemoryCartStore::default();
        let catalog = Catalog::builtin();

        for i in 0..100 {
            let session = format!("s{i}");
            assert!(store.add(&session, &catalog, ProductId(999), 1).await.is_err());
            assert!(store.add(&session, &catalog, ProductId(1), 0).await.is_err());
        }
        assert_eq!(store.session_count().await, 0);

        store.add("s1", &catalog, ProductId(1), 1).await.unwrap();
        assert!(store.add("s1", &catalog, ProductId(999), 1).await.is_err());
        assert_eq!(store.session_count().await, 1);
        assert_eq!(store.snapshot("s1").await.line_count(), 1);
    }

    #[tokio::test]
    async fn update_sets_quantity_and_zero_removes() {
        let store = InMemoryCartStore::default();
        let catalog = Catalog::builtin();
        store.add("a", &catalog, ProductId(3), 1).await.unwrap();
        store.add("a", &catalog, ProductId(4), 1).await.unwrap();

        let cart = store.update("a", ProductId(3), 4).await.unwrap();
        assert_eq!(cart.total(), 120 * 4 + 180);

        let cart = store.update("a", ProductId(4), 0).await.unwrap();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(store.snapshot("a").await.total(), 480);

        assert_eq!(
            store.update("nobody", ProductId(3), 2).await.unwrap_err(),
            CartError::LineNotFound(ProductId(3))
        );
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn remove_missing_session_is_none() {
        let store = InMemoryCartStore::default();
        assert!(store.remove("nobody", ProductId(1)).await.is_none());
    }
}
