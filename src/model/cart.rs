use serde::{Deserialize, Serialize};

use super::CartError;

/// A purchasable line entry of the diner's cart.
///
/// Prices are whole-currency amounts (no minor units), as the menu lists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    /// Creates a new cart item.
    ///
    /// # Arguments
    /// * `name` - Dish name as shown on the menu
    /// * `price` - Unit price, finite and non-negative
    /// * `quantity` - Number of portions, at least one
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Result<Self, CartError> {
        let item = Self {
            name: name.into(),
            price,
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    /// Price of the whole line (`price × quantity`), unrounded.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    fn validate(&self) -> Result<(), CartError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CartError::InvalidPrice {
                name: self.name.clone(),
                price: self.price,
            });
        }
        if self.quantity == 0 {
            return Err(CartError::InvalidQuantity {
                name: self.name.clone(),
                quantity: self.quantity,
            });
        }
        Ok(())
    }
}

/// A non-empty list of validated [`CartItem`]s.
///
/// Items deserialized or built by hand are re-checked here, so every `Cart`
/// can be formatted without failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Result<Self, CartError> {
        if items.is_empty() {
            return Err(CartError::Empty);
        }
        for item in &items {
            item.validate()?;
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    // A cart is never empty; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Sum of `price × quantity` over all items, unrounded.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

impl TryFrom<Vec<CartItem>> for Cart {
    type Error = CartError;

    fn try_from(items: Vec<CartItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total_multiplies_price_by_quantity() {
        let item = CartItem::new("Riz", 1500.0, 2).unwrap();
        assert_eq!(item.line_total(), 3000.0);
    }

    #[test]
    fn test_rejects_negative_and_non_finite_prices() {
        assert!(matches!(
            CartItem::new("Riz", -1.0, 1),
            Err(CartError::InvalidPrice { .. })
        ));
        assert!(matches!(
            CartItem::new("Riz", f64::NAN, 1),
            Err(CartError::InvalidPrice { .. })
        ));
        assert!(matches!(
            CartItem::new("Riz", f64::INFINITY, 1),
            Err(CartError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_quantity() {
        let result = CartItem::new("Riz", 1500.0, 0);
        assert_eq!(
            result,
            Err(CartError::InvalidQuantity {
                name: "Riz".to_string(),
                quantity: 0
            })
        );
    }

    #[test]
    fn test_cart_must_not_be_empty() {
        assert_eq!(Cart::new(Vec::new()), Err(CartError::Empty));
    }

    #[test]
    fn test_cart_revalidates_hand_built_items() {
        let item = CartItem {
            name: "Attiéké".to_string(),
            price: 500.0,
            quantity: 0,
        };
        assert!(matches!(
            Cart::new(vec![item]),
            Err(CartError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_cart_total_sums_line_totals() {
        let cart = Cart::new(vec![
            CartItem::new("Riz", 1500.0, 2).unwrap(),
            CartItem::new("Alloco", 750.5, 1).unwrap(),
        ])
        .unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 3750.5);
    }
}
