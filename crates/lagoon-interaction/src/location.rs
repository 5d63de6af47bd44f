//! Device location collaborator.

use async_trait::async_trait;
use lagoon_core::error::Result;
use lagoon_core::geo::Coordinate;

/// The outcome of one location acquisition attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationOutcome {
    /// Permission granted and a fix obtained.
    Fix(Coordinate),
    /// The user denied the foreground permission.
    Denied,
    /// Permission granted but no fix could be obtained.
    Unavailable,
}

/// Acquires the device's last-known location.
///
/// Implementations request foreground permission first; denial is a
/// typed outcome, not an error, so the proximity path can abort with a
/// system notice while the keyword path stays unaffected.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn acquire(&self) -> Result<LocationOutcome>;
}

/// Location provider backed by configuration.
///
/// A terminal session has no GPS, so the fix comes from config when the
/// operator supplied one; otherwise every acquisition is unavailable.
pub struct ConfiguredLocationProvider {
    fix: Option<Coordinate>,
}

impl ConfiguredLocationProvider {
    pub fn new(fix: Option<Coordinate>) -> Self {
        Self { fix }
    }
}

#[async_trait]
impl LocationProvider for ConfiguredLocationProvider {
    async fn acquire(&self) -> Result<LocationOutcome> {
        Ok(match self.fix {
            Some(coordinate) => LocationOutcome::Fix(coordinate),
            None => LocationOutcome::Unavailable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn configured_fix_is_returned() {
        let provider = ConfiguredLocationProvider::new(Some(Coordinate::new(6.45, 3.40)));
        assert_eq!(
            provider.acquire().await.unwrap(),
            LocationOutcome::Fix(Coordinate::new(6.45, 3.40))
        );
    }

    #[tokio::test]
    async fn missing_fix_is_unavailable() {
        let provider = ConfiguredLocationProvider::new(None);
        assert_eq!(provider.acquire().await.unwrap(), LocationOutcome::Unavailable);
    }
}
