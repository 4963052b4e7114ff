//! Device-location lookup for the "current location" search shortcut
//!
//! Resolving the device position is an external concern; the app only needs a
//! query string it can feed back into the normal search flow. A failed lookup
//! is logged and leaves the current query untouched.

use thiserror::Error;

/// Errors from a location provider
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocationError {
    /// The provider could not determine a position
    #[error("Could not determine current location: {0}")]
    Unavailable(String),
}

/// Resolves the device position into a searchable location string
pub trait LocationProvider {
    /// Returns a query string for the device's current location
    fn locate(&self) -> Result<String, LocationError>;
}

/// Placeholder provider that reports the literal "Current Location".
///
/// Feeds a fixed label into the search flow instead of a resolved city
/// name; it is a stub, not a finished feature.
/// TODO: resolve actual coordinates into a city name via a geocoding backend.
#[derive(Debug, Clone, Default)]
pub struct StubLocationProvider;

impl LocationProvider for StubLocationProvider {
    fn locate(&self) -> Result<String, LocationError> {
        Ok("Current Location".to_string())
    }
}
