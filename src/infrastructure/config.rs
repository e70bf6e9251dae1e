use crate::application::view_state::ViewState;
use crate::domain::language::Language;
use crate::domain::units::Unit;
use serde::Deserialize;

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub view: ViewSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewSettings {
    pub default_language: Language,
    pub default_unit: Unit,
}

impl ViewSettings {
    pub fn initial_state(&self) -> ViewState {
        ViewState::new(self.default_language, self.default_unit)
    }
}

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

fn with_defaults(builder: Builder) -> Result<Builder, config::ConfigError> {
    builder
        .set_default("server.bind_addr", "0.0.0.0:8080")?
        .set_default("view.default_language", Language::default().code())?
        .set_default("view.default_unit", Unit::default().code())
}

/// Defaults, then `config/dashboard.{toml,...}` if present, then `DASHBOARD__*` env vars
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = with_defaults(config::Config::builder())?
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
fn parse_toml(toml: &str) -> anyhow::Result<DashboardConfig> {
    let settings = with_defaults(config::Config::builder())?
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = parse_toml("").unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.view.initial_state(), ViewState::default());
    }

    #[test]
    fn test_overrides() {
        let config = parse_toml(
            r#"
            [server]
            bind_addr = "127.0.0.1:3000"

            [view]
            default_language = "en"
            default_unit = "F"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.view.default_language, Language::English);
        assert_eq!(config.view.default_unit, Unit::Fahrenheit);
    }

    #[test]
    fn test_rejects_unknown_language() {
        let err = parse_toml(
            r#"
            [view]
            default_language = "de"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unsupported language"), "{err}");
    }
}
