// View parameters owned by the page shell
use crate::application::dashboard_service::DashboardService;
use crate::domain::dashboard::DashboardView;
use crate::domain::error::Result;
use crate::domain::language::Language;
use crate::domain::units::Unit;

/// Current language and unit.
///
/// Holds no derived data: after any change the shell calls [`ViewState::derive`]
/// and replaces whatever it rendered before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    language: Language,
    unit: Unit,
}

impl ViewState {
    pub fn new(language: Language, unit: Unit) -> Self {
        Self { language, unit }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns true when the specs need rebuilding
    pub fn set_language(&mut self, language: Language) -> bool {
        let changed = self.language != language;
        self.language = language;
        changed
    }

    /// Returns true when the specs need rebuilding
    pub fn set_unit(&mut self, unit: Unit) -> bool {
        let changed = self.unit != unit;
        self.unit = unit;
        changed
    }

    pub fn derive(&self, service: &DashboardService) -> Result<DashboardView> {
        tracing::debug!("Rebuilding dashboard for ({}, {})", self.language, self.unit);
        service.build_view(self.language, self.unit)
    }
}
