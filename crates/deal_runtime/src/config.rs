//! Interaction timings and seed records loaded from the build-time catalog.

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/deal_config_generated.rs"));

/// Catalog schema understood by this build.
pub const DEAL_CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while loading the configuration catalog.
pub enum ConfigError {
    /// The catalog JSON did not match the expected shape.
    #[error("config parse failed: {0}")]
    Parse(String),
    /// The catalog was written for a different schema.
    #[error("config schema mismatch: expected {expected} found {found}")]
    SchemaMismatch {
        /// Supported schema version.
        expected: u32,
        /// Schema version found in the catalog.
        found: u32,
    },
    /// A duration that paces a CSS transition was zero.
    #[error("timing `{0}` must be non-zero")]
    ZeroTiming(&'static str),
    /// Notifications would be removed before their fade-out finished.
    #[error("notification display time is shorter than its fade-out")]
    DisplayShorterThanFade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Durations (milliseconds) that must match the stylesheet's transitions.
pub struct UiTimings {
    /// Modal overlay fade; the overlay is removed this long after close.
    pub modal_transition_ms: u32,
    /// Feed fade-out before the tab content swap.
    pub tab_fade_ms: u32,
    /// How long a notification stays shown.
    pub notification_display_ms: u32,
    /// Notification fade-out before removal.
    pub notification_fade_ms: u32,
    /// Delay of the simulated ROI composer.
    pub compose_delay_ms: u32,
    /// Lifetime of the tab ripple element.
    pub ripple_ms: u32,
}

impl Default for UiTimings {
    fn default() -> Self {
        Self {
            modal_transition_ms: 200,
            tab_fade_ms: 200,
            notification_display_ms: 3000,
            notification_fade_ms: 300,
            compose_delay_ms: 500,
            ripple_ms: 600,
        }
    }
}

impl UiTimings {
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("modal_transition_ms", self.modal_transition_ms),
            ("tab_fade_ms", self.tab_fade_ms),
            ("notification_display_ms", self.notification_display_ms),
            ("notification_fade_ms", self.notification_fade_ms),
            ("ripple_ms", self.ripple_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroTiming(key));
            }
        }
        if self.notification_display_ms < self.notification_fade_ms {
            return Err(ConfigError::DisplayShorterThanFade);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Seed assignee record.
pub struct SeedAssignee {
    /// Display name.
    pub name: String,
    /// Role label.
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Seed custom field row.
pub struct SeedField {
    /// Field label.
    pub name: String,
    /// Field value.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Initial sidebar records for the deal.
pub struct DealSeed {
    /// Deal title shown in the header.
    pub title: String,
    /// Initial assignees.
    #[serde(default)]
    pub assignees: Vec<SeedAssignee>,
    /// Initial shared file names.
    #[serde(default)]
    pub files: Vec<String>,
    /// Initial custom field rows.
    #[serde(default)]
    pub custom_fields: Vec<SeedField>,
}

impl Default for DealSeed {
    fn default() -> Self {
        let assignee = |name: &str, role: &str| SeedAssignee {
            name: name.to_string(),
            role: role.to_string(),
        };
        let field = |name: &str, value: &str| SeedField {
            name: name.to_string(),
            value: value.to_string(),
        };
        Self {
            title: "Northway Fleet Operations".to_string(),
            assignees: vec![
                assignee("Sobhan Rabbani", "Account Executive"),
                assignee("Sarah Sanders", "Director"),
            ],
            files: vec![
                "ROI_Analysis_Q1_2026.pdf".to_string(),
                "Northway_Proposal_v2.pdf".to_string(),
            ],
            custom_fields: vec![
                field("Industry", "Logistics"),
                field("Region", "North America"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Complete dashboard configuration.
pub struct UiConfig {
    /// Transition timings.
    pub timings: UiTimings,
    /// Seed records.
    pub deal: DealSeed,
}

#[derive(Deserialize)]
struct CatalogEnvelope {
    schema_version: u32,
    timings: UiTimings,
    deal: DealSeed,
}

impl UiConfig {
    /// Parses and validates a catalog JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON, a schema mismatch, or invalid timings.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let envelope: CatalogEnvelope =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        if envelope.schema_version != DEAL_CONFIG_SCHEMA_VERSION {
            return Err(ConfigError::SchemaMismatch {
                expected: DEAL_CONFIG_SCHEMA_VERSION,
                found: envelope.schema_version,
            });
        }
        envelope.timings.validate()?;
        Ok(Self {
            timings: envelope.timings,
            deal: envelope.deal,
        })
    }

    /// Loads the catalog compiled into this build, falling back to defaults on error.
    pub fn from_catalog() -> Self {
        match Self::parse(DEAL_CONFIG_JSON) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("deal config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn compiled_catalog_matches_builtin_defaults() {
        let config = UiConfig::parse(DEAL_CONFIG_JSON).expect("catalog parses");
        assert_eq!(config.timings, UiTimings::default());
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn schema_mismatch_is_rejected() {
        let raw = r#"{"schema_version":2,"timings":{"modal_transition_ms":200,"tab_fade_ms":200,"notification_display_ms":3000,"notification_fade_ms":300,"compose_delay_ms":500,"ripple_ms":600},"deal":{"title":"x"}}"#;
        assert_eq!(
            UiConfig::parse(raw),
            Err(ConfigError::SchemaMismatch {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn zero_and_inverted_timings_are_rejected() {
        let zero = r#"{"schema_version":1,"timings":{"modal_transition_ms":0,"tab_fade_ms":200,"notification_display_ms":3000,"notification_fade_ms":300,"compose_delay_ms":500,"ripple_ms":600},"deal":{"title":"x"}}"#;
        assert_eq!(
            UiConfig::parse(zero),
            Err(ConfigError::ZeroTiming("modal_transition_ms"))
        );

        let inverted = r#"{"schema_version":1,"timings":{"modal_transition_ms":200,"tab_fade_ms":200,"notification_display_ms":100,"notification_fade_ms":300,"compose_delay_ms":500,"ripple_ms":600},"deal":{"title":"x"}}"#;
        assert_eq!(
            UiConfig::parse(inverted),
            Err(ConfigError::DisplayShorterThanFade)
        );
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        assert!(matches!(UiConfig::parse("{"), Err(ConfigError::Parse(_))));
    }
}
