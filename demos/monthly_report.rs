//! Build a month of trips, clear one day, and save the monthly report

use chrono::{Duration, NaiveDate};
use feed_logbook::utils::MemoryStorage;
use feed_logbook::{Logbook, Month, NewTrip};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let mut logbook = Logbook::new(MemoryStorage::new());
    let month: Month = "2024-03".parse()?;
    let first = month.first_day();

    for day in 0..10 {
        let date = first + Duration::days(day);
        for trip in 0..3 {
            let collected = 10_000 + day * 150 + trip * 40;
            let discharged = collected - 25 + (day % 3) * 20;
            logbook.add_trip(&NewTrip {
                collection_time: format!("{:02}:00", 6 + trip * 3),
                collection_weight: collected.to_string(),
                origin_farm: format!("Granja {}", trip + 1),
                discharge_weight: discharged.to_string(),
                destination_farm: "Fazenda Santa Luzia".to_string(),
                ..NewTrip::for_date(date)
            })?;
        }
    }

    // A mistyped day is wiped in one go
    let wrong_day = NaiveDate::from_ymd_opt(2024, 3, 4).ok_or("invalid date")?;
    let removed = logbook.delete_day(wrong_day)?;
    println!("Removed {removed} trips from {wrong_day}");

    let summary = logbook.month_summary(month)?;
    println!("{:<12} {:>6} {:>12} {:>12} {:>10}", "Date", "Trips", "Collected", "Discharged", "Diff");
    for day in summary.iter() {
        println!(
            "{:<12} {:>6} {:>12} {:>12} {:>10}",
            day.date.to_string(),
            day.trip_count,
            day.collection.to_string(),
            day.discharge.to_string(),
            day.difference().to_string()
        );
    }

    let report = logbook.monthly_report(month)?;
    let path = report.save(&std::env::temp_dir())?;
    println!("\n{} written to {}", report.title, path.display());

    Ok(())
}
