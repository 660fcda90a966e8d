// SPDX-License-Identifier: MPL-2.0
//! In-memory shopping list backing the demo screen.
//!
//! Products live either on the list (to buy) or in the basket. Nothing is
//! persisted; the list starts empty on every launch.

use std::fmt;

/// Unique identifier for a product within one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    in_basket: bool,
}

impl Product {
    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn in_basket(&self) -> bool {
        self.in_basket
    }
}

/// A product removed from the list, remembered so it can be put back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    index: usize,
    product: Product,
}

impl Removed {
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }
}

/// Ordered collection of products.
#[derive(Debug, Default)]
pub struct ProductList {
    next_id: u64,
    products: Vec<Product>,
}

impl ProductList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product to buy. Blank names are rejected.
    pub fn add(&mut self, name: &str) -> Option<&Product> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = ProductId(self.next_id);
        self.next_id += 1;
        self.products.push(Product {
            id,
            name: name.to_string(),
            in_basket: false,
        });
        self.products.last()
    }

    /// Moves a product into or out of the basket. Returns the product if it
    /// changed place.
    pub fn set_in_basket(&mut self, id: ProductId, in_basket: bool) -> Option<&Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        if product.in_basket == in_basket {
            return None;
        }
        product.in_basket = in_basket;
        Some(product)
    }

    pub fn remove(&mut self, id: ProductId) -> Option<Removed> {
        let index = self.products.iter().position(|p| p.id == id)?;
        let product = self.products.remove(index);
        Some(Removed { index, product })
    }

    /// Puts a removed product back where it was.
    pub fn restore(&mut self, removed: Removed) -> &Product {
        let index = removed.index.min(self.products.len());
        self.products.insert(index, removed.product);
        &self.products[index]
    }

    /// Removes every product in the basket and returns how many were removed.
    pub fn clear_basket(&mut self) -> usize {
        let before = self.products.len();
        self.products.retain(|p| !p.in_basket);
        before - self.products.len()
    }

    pub fn to_buy(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| !p.in_basket)
    }

    pub fn in_basket(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.in_basket)
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_rejects_blank_names() {
        let mut list = ProductList::new();
        assert!(list.add("   ").is_none());
        let milk = list.add("  Milk ").expect("valid name");
        assert_eq!(milk.name(), "Milk");
        assert!(!milk.in_basket());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn basket_moves_are_reported_once() {
        let mut list = ProductList::new();
        let id = list.add("Bread").expect("added").id();

        assert!(list.set_in_basket(id, true).is_some());
        assert!(list.set_in_basket(id, true).is_none());
        assert_eq!(list.in_basket().count(), 1);
        assert_eq!(list.to_buy().count(), 0);

        assert!(list.set_in_basket(id, false).is_some());
        assert_eq!(list.to_buy().count(), 1);
    }

    #[test]
    fn restore_puts_product_back_in_place() {
        let mut list = ProductList::new();
        let a = list.add("A").expect("a").id();
        let b = list.add("B").expect("b").id();
        let c = list.add("C").expect("c").id();

        let removed = list.remove(b).expect("b exists");
        assert_eq!(removed.product().name(), "B");
        assert!(list.get(b).is_none());

        list.restore(removed);
        let order: Vec<ProductId> = list.to_buy().map(Product::id).collect();
        assert_eq!(order, vec![a, b, c]);
    }

    #[test]
    fn restore_clamps_index_when_list_shrank() {
        let mut list = ProductList::new();
        let a = list.add("A").expect("a").id();
        let b = list.add("B").expect("b").id();
        let removed = list.remove(b).expect("b");
        list.remove(a);

        assert_eq!(list.restore(removed).name(), "B");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn clear_basket_keeps_list_items() {
        let mut list = ProductList::new();
        let a = list.add("A").expect("a").id();
        list.add("B");
        list.set_in_basket(a, true);

        assert_eq!(list.clear_basket(), 1);
        assert_eq!(list.len(), 1);
        assert_eq!(list.clear_basket(), 0);
    }
}
