use serde::{Deserialize, Serialize};

/// A passenger-count bracket and its flat fare.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub passengers: String,
    pub price: f64,
}

/// A fixed origin/destination pair with display labels and pricing tiers.
///
/// Persisted snapshots may predate the pricing table, so `pricing`
/// defaults to empty when the key is absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: u64,
    pub from: String,
    pub to: String,
    pub distance: String,
    pub duration: String,
    #[serde(default)]
    pub pricing: Vec<PricingTier>,
}

/// A route as submitted by the admin console, before the repository
/// assigns an id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewRoute {
    pub from: String,
    pub to: String,
    pub distance: String,
    pub duration: String,
    #[serde(default)]
    pub pricing: Vec<PricingTier>,
}

impl NewRoute {
    pub fn into_route(self, id: u64) -> Route {
        Route {
            id,
            from: self.from,
            to: self.to,
            distance: self.distance,
            duration: self.duration,
            pricing: self.pricing,
        }
    }
}

/// Partial update for a route. Fields left out of the request body stay
/// untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoutePatch {
    pub from: Option<String>,
    pub to: Option<String>,
    pub distance: Option<String>,
    pub duration: Option<String>,
    pub pricing: Option<Vec<PricingTier>>,
}

impl RoutePatch {
    pub fn apply(self, route: &mut Route) {
        if let Some(from) = self.from {
            route.from = from;
        }
        if let Some(to) = self.to {
            route.to = to;
        }
        if let Some(distance) = self.distance {
            route.distance = distance;
        }
        if let Some(duration) = self.duration {
            route.duration = duration;
        }
        if let Some(pricing) = self.pricing {
            route.pricing = pricing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(passengers: &str, price: f64) -> PricingTier {
        PricingTier {
            passengers: passengers.into(),
            price,
        }
    }

    #[test]
    fn patch_applies_only_provided_fields() {
        let mut route = Route {
            id: 1,
            from: "Port Douglas".into(),
            to: "Cairns Airport".into(),
            distance: "67 km".into(),
            duration: "55 min".into(),
            pricing: vec![tier("1-2", 160.0)],
        };

        let patch = RoutePatch {
            distance: Some("68 km".into()),
            pricing: Some(vec![tier("1-2", 170.0)]),
            ..Default::default()
        };
        patch.apply(&mut route);

        assert_eq!(route.from, "Port Douglas");
        assert_eq!(route.to, "Cairns Airport");
        assert_eq!(route.distance, "68 km");
        assert_eq!(route.duration, "55 min");
        assert_eq!(route.pricing, vec![tier("1-2", 170.0)]);
    }

    #[test]
    fn route_without_pricing_key_parses_as_empty_tiers() {
        let raw = r#"{"id":7,"from":"A","to":"B","distance":"1 km","duration":"2 min"}"#;
        let route: Route = serde_json::from_str(raw).unwrap();

        assert_eq!(route.id, 7);
        assert!(route.pricing.is_empty());
    }
}
