// Repository trait for observation data access
use crate::domain::observation::ObservationSeries;

pub trait ObservationRepository: Send + Sync {
    /// Load the full, validated observation series
    fn load_series(&self) -> anyhow::Result<ObservationSeries>;
}
