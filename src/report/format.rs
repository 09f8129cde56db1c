//! pt-BR number and date formatting for printed reports

use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::types::Month;

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const WEEKDAYS: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

/// Format a weight with `.` grouping, `,` decimals and at most three
/// fraction digits, e.g. `1234.5` → `1.234,5`.
pub fn format_weight(value: &BigDecimal) -> String {
    let (digits, scale) = value.round(3).as_bigint_and_exponent();
    let digits = digits.to_string();
    let (negative, digits) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest.to_string()),
        None => (false, digits),
    };

    let (integer, fraction) = if scale <= 0 {
        (format!("{}{}", digits, "0".repeat(scale.unsigned_abs() as usize)), String::new())
    } else {
        let scale = scale as usize;
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (integer, fraction) = padded.split_at(padded.len() - scale);
        (integer.to_string(), fraction.trim_end_matches('0').to_string())
    };
    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };

    let mut out = String::new();
    if negative && !(integer == "0" && fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push(',');
        out.push_str(&fraction);
    }
    out
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Long form, e.g. `segunda-feira, 1 de janeiro de 2024`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        WEEKDAYS[date.weekday().num_days_from_monday() as usize],
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Month and year, e.g. `janeiro de 2024`
pub fn format_month(month: Month) -> String {
    let name = MONTHS
        .get(month.month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or_default();
    format!("{} de {}", name, month.year)
}

/// `HH:MM`, or `HH:MM:SS` when the time carries seconds
pub fn format_time(time: NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

/// `dd/mm/yyyy, HH:MM:SS`
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%d/%m/%Y, %H:%M:%S").to_string()
}
