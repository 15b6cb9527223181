//! Request body validation for restaurant pizza creation.

use crate::error::CreateError;
use crate::models::{NewRestaurantPizza, Price};
use serde_json::{Map, Value};

const REQUIRED_FIELDS: [&str; 3] = ["price", "pizza_id", "restaurant_id"];

pub struct RequestValidator;

impl RequestValidator {
    /// Turn a raw JSON body into a validated `NewRestaurantPizza`.
    /// Checks run in order: object with all required fields, price, then the two ids.
    pub fn restaurant_pizza(body: &Value) -> Result<NewRestaurantPizza, CreateError> {
        let map = body
            .as_object()
            .ok_or_else(|| CreateError::Malformed("body must be a JSON object".into()))?;
        for field in REQUIRED_FIELDS {
            if !map.contains_key(field) {
                return Err(CreateError::Malformed(format!("{} is required", field)));
            }
        }
        let price = map
            .get("price")
            .and_then(Value::as_f64)
            .ok_or_else(|| CreateError::Malformed("price must be a number".into()))?;
        let price = Price::new(price)?;
        Ok(NewRestaurantPizza {
            price,
            pizza_id: id_field(map, "pizza_id")?,
            restaurant_id: id_field(map, "restaurant_id")?,
        })
    }
}

fn id_field(map: &Map<String, Value>, field: &str) -> Result<i64, CreateError> {
    map.get(field)
        .and_then(Value::as_i64)
        .ok_or_else(|| CreateError::Malformed(format!("{} must be an integer", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use serde_json::json;

    #[test]
    fn accepts_valid_body() {
        let new = RequestValidator::restaurant_pizza(&json!({ "price": 12.5, "pizza_id": 2, "restaurant_id": 4 })).unwrap();
        assert_eq!(new.price.get(), 12.5);
        assert_eq!(new.pizza_id, 2);
        assert_eq!(new.restaurant_id, 4);
    }

    #[test]
    fn integer_price_is_accepted() {
        let new = RequestValidator::restaurant_pizza(&json!({ "price": 30, "pizza_id": 1, "restaurant_id": 1 })).unwrap();
        assert_eq!(new.price.get(), 30.0);
    }

    #[test]
    fn out_of_range_price_is_a_validation_error() {
        for price in [0, 31] {
            let err = RequestValidator::restaurant_pizza(&json!({ "price": price, "pizza_id": 1, "restaurant_id": 1 })).unwrap_err();
            assert!(matches!(err, CreateError::Validation(ValidationError::PriceOutOfRange { .. })));
        }
    }

    #[test]
    fn missing_field_wins_over_bad_price() {
        let err = RequestValidator::restaurant_pizza(&json!({ "price": 0, "pizza_id": 1 })).unwrap_err();
        assert!(matches!(err, CreateError::Malformed(_)));
    }

    #[test]
    fn bad_price_is_reported_before_bad_ids() {
        let err = RequestValidator::restaurant_pizza(&json!({ "price": 45, "pizza_id": "x", "restaurant_id": null })).unwrap_err();
        assert!(matches!(err, CreateError::Validation(_)));
    }

    #[test]
    fn non_numeric_values_are_malformed() {
        let cases = [
            json!({ "price": "12", "pizza_id": 1, "restaurant_id": 1 }),
            json!({ "price": null, "pizza_id": 1, "restaurant_id": 1 }),
            json!({ "price": 12, "pizza_id": "1", "restaurant_id": 1 }),
            json!({ "price": 12, "pizza_id": 1, "restaurant_id": 1.5 }),
            json!([12, 1, 1]),
            Value::Null,
        ];
        for body in cases {
            let err = RequestValidator::restaurant_pizza(&body).unwrap_err();
            assert!(matches!(err, CreateError::Malformed(_)), "{body}");
        }
    }
}
