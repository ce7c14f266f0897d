use serde::{Deserialize, Serialize};

use crate::entities::Route;

/// A fare quote for a trip selection. `route` is the matched route, or
/// `None` when the pickup/dropoff pair has no published route, in which
/// case the price is zero.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub route: Option<Route>,
    pub price: f64,
}

impl Quote {
    pub fn new(route: Route, price: f64) -> Self {
        Self {
            route: Some(route),
            price,
        }
    }

    pub fn unmatched() -> Self {
        Self {
            route: None,
            price: 0.0,
        }
    }
}
