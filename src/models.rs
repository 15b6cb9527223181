//! Domain records as stored in PostgreSQL.

use crate::error::ValidationError;
use serde::Serialize;
use utoipa::ToSchema;

pub const MIN_PRICE: f64 = 1.0;
pub const MAX_PRICE: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// A pizza serializes in full wherever it appears.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema, sqlx::FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

/// A pizza listed at a restaurant for a price.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: f64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// A price in [`MIN_PRICE`, `MAX_PRICE`]. NaN never validates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if (MIN_PRICE..=MAX_PRICE).contains(&value) {
            Ok(Price(value))
        } else {
            Err(ValidationError::PriceOutOfRange { value })
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Validated input for a new restaurant pizza. References are checked by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurantPizza {
    pub price: Price,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_bounds_are_inclusive() {
        assert_eq!(Price::new(1.0).map(Price::get), Ok(1.0));
        assert_eq!(Price::new(30.0).map(Price::get), Ok(30.0));
        assert_eq!(Price::new(12.5).map(Price::get), Ok(12.5));
    }

    #[test]
    fn price_outside_range_is_rejected() {
        for value in [0.0, 0.99, 30.01, 31.0, -5.0, f64::INFINITY] {
            assert_eq!(Price::new(value), Err(ValidationError::PriceOutOfRange { value }));
        }
    }

    #[test]
    fn nan_price_is_rejected() {
        assert!(Price::new(f64::NAN).is_err());
    }

    #[test]
    fn price_error_message_is_client_facing() {
        let err = Price::new(0.0).unwrap_err();
        assert_eq!(err.to_string(), "Price must be between 1 and 30");
    }
}
