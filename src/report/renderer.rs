//! Printable HTML reports for a day or a month

use askama::Template;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::ReportConfig;
use crate::report::format::*;
use crate::types::*;

/// Which period a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    Daily(NaiveDate),
    Monthly(Month),
}

/// A self-contained printable document: styling and the print trigger are
/// embedded, so it can be displayed or saved as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub kind: ReportKind,
    pub title: String,
    pub html: String,
}

impl ReportDocument {
    /// Download name: the title with every character outside `[A-Za-z0-9]`
    /// replaced by `_`, plus `.html`
    pub fn file_name(&self) -> String {
        let stem: String = self
            .title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("{}.html", stem)
    }

    /// Write the document into `dir` under [`Self::file_name`]
    pub fn save(&self, dir: &Path) -> LogbookResult<PathBuf> {
        let path = dir.join(self.file_name());
        fs::write(&path, &self.html)?;
        Ok(path)
    }
}

struct SummaryCards {
    trip_count: usize,
    collected: String,
    discharged: String,
    difference: String,
}

impl SummaryCards {
    fn new(
        trip_count: usize,
        collected: &BigDecimal,
        discharged: &BigDecimal,
        difference: &BigDecimal,
    ) -> Self {
        Self {
            trip_count,
            collected: format_weight(collected),
            discharged: format_weight(discharged),
            difference: format_weight(difference),
        }
    }
}

struct TripRow {
    ticket: String,
    collection_time: String,
    origin: String,
    destination: String,
    discharge_time: String,
    collected: String,
    discharged: String,
    difference: String,
    color: String,
}

struct DayRow {
    date: String,
    trip_count: usize,
    collected: String,
    discharged: String,
    difference: String,
    color: String,
}

#[derive(Template)]
#[template(path = "daily_report.html")]
struct DailyReportTemplate<'a> {
    title: &'a str,
    company_name: &'a str,
    report_title: &'a str,
    period: String,
    cards: SummaryCards,
    rows: Vec<TripRow>,
    generated_at: String,
    footer_note: &'a str,
}

#[derive(Template)]
#[template(path = "monthly_report.html")]
struct MonthlyReportTemplate<'a> {
    title: &'a str,
    company_name: &'a str,
    report_title: &'a str,
    period: String,
    cards: SummaryCards,
    rows: Vec<DayRow>,
    generated_at: String,
    footer_note: &'a str,
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Renders summaries into [`ReportDocument`]s
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    config: ReportConfig,
}

impl ReportRenderer {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    fn difference_color(&self, difference: &BigDecimal) -> String {
        if *difference >= BigDecimal::from(0) {
            self.config.positive_color.clone()
        } else {
            self.config.negative_color.clone()
        }
    }

    /// Render the daily report. Refuses a day without trips.
    pub fn render_daily(
        &self,
        summary: &DaySummary,
        generated_at: NaiveDateTime,
    ) -> LogbookResult<ReportDocument> {
        if summary.is_empty() {
            return Err(LogbookError::NoData(format!(
                "Não há viagens registradas para esta data ({}). Adicione viagens antes de gerar o relatório.",
                format_date(summary.date)
            )));
        }

        let title = format!("Relatório Diário - {}", format_date(summary.date));
        let rows = summary
            .trips
            .iter()
            .map(|trip| {
                let difference = trip.difference();
                TripRow {
                    ticket: trip.collection_ticket.clone(),
                    collection_time: format_time(trip.collection_time),
                    origin: or_dash(&trip.origin_farm),
                    destination: or_dash(&trip.destination_farm),
                    discharge_time: trip
                        .discharge_time
                        .map(format_time)
                        .unwrap_or_else(|| "-".to_string()),
                    collected: format_weight(&trip.collection_weight),
                    discharged: format_weight(&trip.discharge_weight),
                    color: self.difference_color(&difference),
                    difference: format_weight(&difference),
                }
            })
            .collect();

        let html = DailyReportTemplate {
            title: &title,
            company_name: &self.config.company_name,
            report_title: &self.config.daily_title,
            period: format_long_date(summary.date),
            cards: SummaryCards::new(
                summary.trip_count,
                &summary.total_collection,
                &summary.total_discharge,
                &summary.difference,
            ),
            rows,
            generated_at: format_timestamp(generated_at),
            footer_note: &self.config.footer_note,
        }
        .render()?;

        info!(date = %summary.date, trips = summary.trip_count, "daily report rendered");

        Ok(ReportDocument {
            kind: ReportKind::Daily(summary.date),
            title,
            html,
        })
    }

    /// Render the monthly report. Refuses a month without recorded days.
    pub fn render_monthly(
        &self,
        summary: &MonthSummary,
        generated_at: NaiveDateTime,
    ) -> LogbookResult<ReportDocument> {
        if summary.is_empty() {
            return Err(LogbookError::NoData(format!(
                "Não há viagens registradas para este mês ({}). Adicione viagens antes de gerar o relatório.",
                format_month(summary.month)
            )));
        }

        let title = format!("Relatório Mensal - {}", format_month(summary.month));
        let rows = summary
            .iter()
            .map(|day| {
                let difference = day.difference();
                DayRow {
                    date: format_date(day.date),
                    trip_count: day.trip_count,
                    collected: format_weight(&day.collection),
                    discharged: format_weight(&day.discharge),
                    color: self.difference_color(&difference),
                    difference: format_weight(&difference),
                }
            })
            .collect();

        let html = MonthlyReportTemplate {
            title: &title,
            company_name: &self.config.company_name,
            report_title: &self.config.monthly_title,
            period: format_month(summary.month),
            cards: SummaryCards::new(
                summary.trip_count(),
                &summary.total_collection(),
                &summary.total_discharge(),
                &summary.difference(),
            ),
            rows,
            generated_at: format_timestamp(generated_at),
            footer_note: &self.config.footer_note,
        }
        .render()?;

        info!(month = %summary.month, days = summary.len(), "monthly report rendered");

        Ok(ReportDocument {
            kind: ReportKind::Monthly(summary.month),
            title,
            html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logbook::summary::{day_summary, month_summary};
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    fn generated_at() -> NaiveDateTime {
        date("2024-02-01").and_hms_opt(10, 0, 0).unwrap()
    }

    fn trip(day: &str, collection: i64, discharge: i64, origin: &str) -> Trip {
        let mut trip = Trip::new(
            date(day),
            NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
            BigDecimal::from(collection),
            BigDecimal::from(discharge),
        );
        trip.origin_farm = origin.to_string();
        trip
    }

    #[test]
    fn test_daily_report_contents() {
        let trips = vec![
            trip("2024-01-01", 1200, 1195, "Granja Boa Vista"),
            trip("2024-01-01", 50, 52, ""),
        ];
        let summary = day_summary(&trips, date("2024-01-01"));

        let doc = ReportRenderer::default()
            .render_daily(&summary, generated_at())
            .unwrap();

        assert_eq!(doc.kind, ReportKind::Daily(date("2024-01-01")));
        assert_eq!(doc.title, "Relatório Diário - 01/01/2024");
        assert!(doc.html.contains("MAURICEA ALIMENTOS"));
        assert!(doc.html.contains("segunda-feira, 1 de janeiro de 2024"));
        assert!(doc.html.contains("1.250 kg"));
        assert!(doc.html.contains("1.247 kg"));
        assert!(doc.html.contains("Granja Boa Vista"));
        assert!(doc.html.contains(&trips[0].collection_ticket));
        assert!(doc.html.contains("color: #16a34a;\">5</td>"));
        assert!(doc.html.contains("color: #dc2626;\">-2</td>"));
        assert!(doc.html.contains("window.print()"));
    }

    #[test]
    fn test_daily_report_prints_fields_as_recorded() {
        let mut recorded = trip("2024-01-01", 10, 9, " Granja Boa Vista ");
        recorded.collection_time = NaiveTime::from_hms_opt(7, 5, 30).unwrap();
        recorded.discharge_time = NaiveTime::from_hms_opt(9, 15, 0);
        let summary = day_summary(&[recorded], date("2024-01-01"));

        let doc = ReportRenderer::default()
            .render_daily(&summary, generated_at())
            .unwrap();

        assert!(doc.html.contains("<td>07:05:30</td>"));
        assert!(doc.html.contains("<td>09:15</td>"));
        assert!(doc.html.contains(" Granja Boa Vista "));
    }

    #[test]
    fn test_daily_report_refuses_empty_day() {
        let summary = day_summary(&[], date("2024-01-01"));
        let err = ReportRenderer::default()
            .render_daily(&summary, generated_at())
            .unwrap_err();
        assert!(matches!(err, LogbookError::NoData(_)));
        assert!(err.to_string().contains("01/01/2024"));
    }

    #[test]
    fn test_farm_names_are_escaped() {
        let trips = vec![trip("2024-01-01", 10, 9, "<b>Sítio</b> & Filhos")];
        let summary = day_summary(&trips, date("2024-01-01"));
        let doc = ReportRenderer::default()
            .render_daily(&summary, generated_at())
            .unwrap();
        assert!(!doc.html.contains("<b>Sítio</b>"));
        assert!(doc.html.contains("&lt;b&gt;Sítio&lt;"));
    }

    #[test]
    fn test_monthly_report_contents() {
        let trips = vec![
            trip("2024-01-20", 100, 90, "A"),
            trip("2024-01-03", 40, 45, "B"),
            trip("2024-01-20", 60, 50, "C"),
        ];
        let summary = month_summary(&trips, Month::new(2024, 1).unwrap());

        let doc = ReportRenderer::default()
            .render_monthly(&summary, generated_at())
            .unwrap();

        assert_eq!(doc.title, "Relatório Mensal - janeiro de 2024");
        assert!(doc.html.contains("Relatório Mensal de Coleta de Sobras de Ração"));
        assert!(doc.html.contains("<p class=\"value\">3</p>"));
        assert!(doc.html.contains("200 kg"));
        assert!(doc.html.contains("185 kg"));
        assert!(doc.html.contains("15 kg"));
        assert!(doc.html.contains("color: #dc2626;\">-5</td>"));

        let first = doc.html.find("<td>20").unwrap();
        let second = doc.html.find("<td>03").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_monthly_report_refuses_empty_month() {
        let summary = month_summary(&[], Month::new(2024, 1).unwrap());
        let err = ReportRenderer::default()
            .render_monthly(&summary, generated_at())
            .unwrap_err();
        assert!(matches!(err, LogbookError::NoData(_)));
    }

    #[test]
    fn test_custom_config_is_rendered() {
        let config = ReportConfig {
            company_name: "Granja Modelo".to_string(),
            positive_color: "#000000".to_string(),
            ..ReportConfig::default()
        };
        let trips = vec![trip("2024-01-01", 10, 9, "A")];
        let summary = day_summary(&trips, date("2024-01-01"));

        let doc = ReportRenderer::new(config)
            .render_daily(&summary, generated_at())
            .unwrap();

        assert!(doc.html.contains("Granja Modelo"));
        assert!(doc.html.contains("color: #000000;\">1</td>"));
    }

    #[test]
    fn test_file_name() {
        let doc = ReportDocument {
            kind: ReportKind::Daily(date("2024-01-01")),
            title: "Relatório Diário - 01/01/2024".to_string(),
            html: String::new(),
        };
        assert_eq!(doc.file_name(), "Relat_rio_Di_rio___01_01_2024.html");
    }
}
