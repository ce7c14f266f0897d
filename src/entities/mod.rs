mod booking;
mod quote;
mod route;

pub use booking::{BookingConfirmation, BookingRequest};
pub use quote::Quote;
pub use route::{NewRoute, PricingTier, Route, RoutePatch};
