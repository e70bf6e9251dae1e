// Dashboard service - Use case for building chart specifications
use crate::application::chart_spec_builder::{
    build_decade_spec, build_page_spec, build_scatter_spec,
};
use crate::application::observation_repository::ObservationRepository;
use crate::domain::chart::{DecadeBarSpec, ScatterSpec};
use crate::domain::classification::classify_series;
use crate::domain::dashboard::DashboardView;
use crate::domain::error::Result;
use crate::domain::language::Language;
use crate::domain::observation::ObservationSeries;
use crate::domain::trend::{linear_fit, TrendSummary};
use crate::domain::units::Unit;
use std::sync::Arc;

/// Builds every dashboard artefact from a series loaded once at construction
#[derive(Clone)]
pub struct DashboardService {
    series: Arc<ObservationSeries>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn ObservationRepository>) -> anyhow::Result<Self> {
        let series = repository.load_series()?;
        tracing::info!(
            "Loaded {} observations ({}-{})",
            series.len(),
            series.first_year(),
            series.last_year()
        );
        Ok(Self {
            series: Arc::new(series),
        })
    }

    pub fn build_scatter_spec(&self, language: Language, unit: Unit) -> Result<ScatterSpec> {
        build_scatter_spec(&self.series, language, unit)
    }

    pub fn build_decade_spec(&self, language: Language, unit: Unit) -> Result<DecadeBarSpec> {
        build_decade_spec(&self.series, language, unit)
    }

    /// Least-squares trend of the yearly points in `unit`
    pub fn trend(&self, unit: Unit) -> Result<TrendSummary> {
        let classified = classify_series(&self.series, unit)?;
        let fit = linear_fit(&classified)?;
        Ok(fit.summarize(unit, self.series.first_year(), self.series.last_year()))
    }

    /// Everything the page needs for one (language, unit) pair
    pub fn build_view(&self, language: Language, unit: Unit) -> Result<DashboardView> {
        let scatter = self.build_scatter_spec(language, unit)?;
        let decades = self.build_decade_spec(language, unit)?;

        Ok(DashboardView {
            language,
            unit,
            page: build_page_spec(language, unit),
            scatter,
            decades,
        })
    }
}
