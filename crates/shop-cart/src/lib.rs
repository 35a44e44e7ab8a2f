//! Shopping cart engine.
//!
//! A cart is an ordered list of lines, at most one per product. Quantities are
//! always at least 1: the only way to drop a line is [`Cart::remove`].

use serde::{Deserialize, Serialize};
use shop_catalog::{Catalog, ProductId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    #[error("quantity overflow for product {0}")]
    QuantityOverflow(ProductId),

    #[error("product {0} is not in the cart")]
    LineNotFound(ProductId),
}

pub type Result<T> = std::result::Result<T, CartError>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: u64,
    pub qty: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.qty))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` units of a catalog product, merging with an existing line.
    pub fn add(&mut self, catalog: &Catalog, id: ProductId, qty: u32) -> Result<&CartLine> {
        if qty == 0 {
            return Err(CartError::InvalidQuantity(qty));
        }
        let product = catalog.get(id).ok_or(CartError::UnknownProduct(id))?;

        let index = match self.position(id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.qty = line
                    .qty
                    .checked_add(qty)
                    .ok_or(CartError::QuantityOverflow(id))?;
                index
            }
            None => {
                self.lines.push(CartLine {
                    product_id: product.id,
                    name: product.name.clone(),
                    price: product.price,
                    qty,
                });
                self.lines.len() - 1
            }
        };

        Ok(&self.lines[index])
    }

    /// Raise a line's quantity by one. Returns the new quantity.
    pub fn increment(&mut self, id: ProductId) -> Result<u32> {
        let line = self.line_mut(id)?;
        line.qty = line
            .qty
            .checked_add(1)
            .ok_or(CartError::QuantityOverflow(id))?;
        Ok(line.qty)
    }

    /// Lower a line's quantity by one, stopping at 1. Returns the new quantity.
    pub fn decrement(&mut self, id: ProductId) -> Result<u32> {
        let line = self.line_mut(id)?;
        if line.qty > 1 {
            line.qty -= 1;
        }
        Ok(line.qty)
    }

    /// Set a line's quantity outright. Zero removes the line and returns `None`.
    pub fn set_qty(&mut self, id: ProductId, qty: u32) -> Result<Option<u32>> {
        if qty == 0 {
            return self
                .remove(id)
                .map(|_| None)
                .ok_or(CartError::LineNotFound(id));
        }
        let line = self.line_mut(id)?;
        line.qty = qty;
        Ok(Some(qty))
    }

    /// Drop the line for `id`, returning it if it was present.
    pub fn remove(&mut self, id: ProductId) -> Option<CartLine> {
        let index = self.position(id)?;
        Some(self.lines.remove(index))
    }

    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.subtotal()))
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.qty)).sum()
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product_id == id)
    }

    fn line_mut(&mut self, id: ProductId) -> Result<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == id)
            .ok_or(CartError::LineNotFound(id))
    }
}
