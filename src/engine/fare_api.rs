use super::Engine;

use async_trait::async_trait;

use crate::api::FareAPI;
use crate::entities::{Quote, Route};
use crate::error::{incomplete_pricing_error, Error};

/// Flat surcharge added when a child seat is requested.
pub const CHILD_SEAT_SURCHARGE: f64 = 5.0;

/// Passenger-count brackets, checked in order. Counts above the last
/// bound fall into the top tier.
const BRACKETS: [(u32, usize); 2] = [(2, 0), (4, 1)];
const TOP_TIER: usize = 2;

fn tier_index(passengers: u32) -> usize {
    for (bound, index) in BRACKETS {
        if passengers <= bound {
            return index;
        }
    }

    TOP_TIER
}

/// Quotes a fare against a routes snapshot. Pure and synchronous; the
/// client recomputes it whenever pickup, dropoff, passenger count, or
/// the child-seat flag changes.
///
/// No matching route is a normal outcome (an incomplete trip selection)
/// and quotes zero. A matching route with too few pricing tiers for the
/// selected bracket is a data error.
pub fn quote_fare(
    routes: &[Route],
    pickup: &str,
    dropoff: &str,
    passengers: u32,
    child_seat: bool,
) -> Result<Quote, Error> {
    let route = match routes.iter().find(|r| r.from == pickup && r.to == dropoff) {
        Some(route) => route,
        None => return Ok(Quote::unmatched()),
    };

    let tier = route
        .pricing
        .get(tier_index(passengers))
        .ok_or_else(incomplete_pricing_error)?;

    let surcharge = if child_seat { CHILD_SEAT_SURCHARGE } else { 0.0 };

    Ok(Quote::new(route.clone(), tier.price + surcharge))
}

/// All labels appearing as an origin or destination, sorted and
/// de-duplicated. Feeds the booking form's pickup selector.
pub fn locations(routes: &[Route]) -> Vec<String> {
    let mut labels: Vec<String> = routes
        .iter()
        .flat_map(|r| [r.from.clone(), r.to.clone()])
        .collect();
    labels.sort();
    labels.dedup();

    labels
}

/// Destinations reachable from a pickup label, sorted and de-duplicated.
pub fn dropoffs(routes: &[Route], pickup: &str) -> Vec<String> {
    let mut labels: Vec<String> = routes
        .iter()
        .filter(|r| r.from == pickup)
        .map(|r| r.to.clone())
        .collect();
    labels.sort();
    labels.dedup();

    labels
}

#[async_trait]
impl FareAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(
        &self,
        pickup: &str,
        dropoff: &str,
        passengers: u32,
        child_seat: bool,
    ) -> Result<Quote, Error> {
        let routes = self.repo.list().await?;

        quote_fare(&routes, pickup, dropoff, passengers, child_seat)
    }

    #[tracing::instrument(skip(self))]
    async fn list_locations(&self) -> Result<Vec<String>, Error> {
        let routes = self.repo.list().await?;

        Ok(locations(&routes))
    }

    #[tracing::instrument(skip(self))]
    async fn list_dropoffs(&self, pickup: &str) -> Result<Vec<String>, Error> {
        let routes = self.repo.list().await?;

        Ok(dropoffs(&routes, pickup))
    }
}
