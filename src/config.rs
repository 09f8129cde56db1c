//! Report configuration

use serde::{Deserialize, Serialize};
use std::env;

use crate::types::{LogbookError, LogbookResult};

/// Branding and colors used when rendering printable reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Company name shown in the report header
    pub company_name: String,
    /// Heading of the daily report
    pub daily_title: String,
    /// Heading of the monthly report
    pub monthly_title: String,
    /// Last line of the footer
    pub footer_note: String,
    /// Color for non-negative differences
    pub positive_color: String,
    /// Color for negative differences
    pub negative_color: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            company_name: "MAURICEA ALIMENTOS".to_string(),
            daily_title: "Relatório Diário de Coleta de Sobras de Ração".to_string(),
            monthly_title: "Relatório Mensal de Coleta de Sobras de Ração".to_string(),
            footer_note: "Sistema de Controle de Coleta de Sobras de Ração - Mauricea Alimentos"
                .to_string(),
            positive_color: "#16a34a".to_string(),
            negative_color: "#dc2626".to_string(),
        }
    }
}

impl ReportConfig {
    /// Build a configuration from `LOGBOOK_*` environment variables,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> LogbookResult<Self> {
        let defaults = Self::default();
        let var = |name: &str, default: String| env::var(name).unwrap_or(default);

        let config = Self {
            company_name: var("LOGBOOK_COMPANY_NAME", defaults.company_name),
            daily_title: var("LOGBOOK_DAILY_TITLE", defaults.daily_title),
            monthly_title: var("LOGBOOK_MONTHLY_TITLE", defaults.monthly_title),
            footer_note: var("LOGBOOK_FOOTER_NOTE", defaults.footer_note),
            positive_color: var("LOGBOOK_POSITIVE_COLOR", defaults.positive_color),
            negative_color: var("LOGBOOK_NEGATIVE_COLOR", defaults.negative_color),
        };
        config.validate()?;

        Ok(config)
    }

    /// Check that the values can be rendered
    pub fn validate(&self) -> LogbookResult<()> {
        if self.company_name.trim().is_empty() {
            return Err(LogbookError::Config(
                "o nome da empresa não pode ficar em branco".to_string(),
            ));
        }

        for (name, color) in [
            ("positive_color", &self.positive_color),
            ("negative_color", &self.negative_color),
        ] {
            if !is_hex_color(color) {
                return Err(LogbookError::Config(format!(
                    "{name} inválida: '{color}', esperado #rrggbb"
                )));
            }
        }

        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
