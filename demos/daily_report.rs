//! Record a day of trips and print its daily report

use chrono::NaiveDate;
use feed_logbook::utils::MemoryStorage;
use feed_logbook::{deliver, Delivery, Headless, Logbook, NewTrip, ReportConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = ReportConfig::from_env()?;
    let mut logbook = Logbook::with_config(MemoryStorage::new(), config)?;
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).ok_or("invalid date")?;

    println!("Recording trips for {date}...");
    let trips = [
        ("06:10", "12450", "Granja Boa Vista", "07:05", "12390", "Fazenda Santa Luzia"),
        ("08:30", "9800,5", "Sítio Três Irmãos", "09:40", "9815", "Fazenda Santa Luzia"),
        ("11:00", "15020", "Granja Boa Vista", "", "14988", "Fazenda Água Limpa"),
    ];
    for (collection_time, collected, origin, discharge_time, discharged, destination) in trips {
        let trip = logbook.add_trip(&NewTrip {
            collection_time: collection_time.to_string(),
            collection_weight: collected.to_string(),
            origin_farm: origin.to_string(),
            discharge_time: discharge_time.to_string(),
            discharge_weight: discharged.to_string(),
            destination_farm: destination.to_string(),
            ..NewTrip::for_date(date)
        })?;
        println!("  ✓ {} {} → {}", trip.collection_ticket, origin, destination);
    }

    // Missing collection time is refused and nothing is stored
    let rejected = logbook.add_trip(&NewTrip {
        collection_weight: "100".to_string(),
        discharge_weight: "100".to_string(),
        ..NewTrip::for_date(date)
    });
    if let Err(err) = rejected {
        println!("  ✗ rejected: {err}");
    }

    let summary = logbook.day_summary(date)?;
    println!(
        "\n{} trips, collected {} kg, discharged {} kg, difference {} kg",
        summary.trip_count, summary.total_collection, summary.total_discharge, summary.difference
    );

    let report = logbook.daily_report(date)?;
    let out_dir = std::env::temp_dir();
    match deliver(&report, &mut Headless, &out_dir)? {
        Delivery::Displayed => println!("Report displayed"),
        Delivery::Downloaded(path) => println!("Report saved to {}", path.display()),
    }

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,feed_logbook=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
