//! Sun Almanac Tool
//!
//! Prints a table of sunrise, sunset, day length, solar declination, and
//! the Equation of Time for a latitude and range of days, using the
//! heliograph engine. Orbital parameters are adjustable to explore
//! what-if scenarios (a tilted-over Earth, a more eccentric orbit).
//!
//! Usage:
//!   cargo run --bin sun_almanac -- --latitude 52.0 --step 30
//!   cargo run --bin sun_almanac -- --latitude -35.0 --day 172 --json

use clap::Parser;
use heliograph::{OrbitalParameters, SolarEngine};
use serde::Serialize;

/// Sun Almanac Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prints sunrise/sunset, declination, and Equation of Time tables",
    long_about = None
)]
struct Args {
    /// Observer latitude in degrees (-90 to 90)
    #[arg(short, long, default_value_t = 52.0)]
    latitude: f64,

    /// Single day-of-year to report (1 to 365); omit for a full-year table
    #[arg(short, long)]
    day: Option<u32>,

    /// Step between table rows in days
    #[arg(short, long, default_value_t = 10)]
    step: usize,

    /// Axial tilt in degrees
    #[arg(long, default_value_t = 23.44)]
    tilt: f64,

    /// Orbital eccentricity
    #[arg(long, default_value_t = 0.0167)]
    eccentricity: f64,

    /// Day-of-year of perihelion
    #[arg(long, default_value_t = 3)]
    perihelion: u32,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// One row of almanac output
#[derive(Debug, Serialize)]
struct AlmanacRow {
    day: u32,
    declination_deg: f64,
    eot_min: f64,
    sunrise: Option<f64>,
    sunset: Option<f64>,
    day_length: f64,
    noon_altitude_deg: f64,
}

fn build_row(engine: &SolarEngine, day: u32) -> AlmanacRow {
    let times = engine.sun_times(day as f64);
    // Polar days carry no meaningful sunrise/sunset instants
    let (sunrise, sunset) = if times.never_rises || times.never_sets {
        (None, None)
    } else {
        (Some(times.sunrise), Some(times.sunset))
    };
    AlmanacRow {
        day,
        declination_deg: engine.declination(day as f64),
        eot_min: engine.equation_of_time(day as f64).total(),
        sunrise,
        sunset,
        day_length: times.day_length,
        noon_altitude_deg: engine.noon_altitude(day as f64),
    }
}

fn format_hour(hour: Option<f64>) -> String {
    match hour {
        Some(h) => {
            let minutes = (h * 60.0).round() as u32;
            format!("{:02}:{:02}", minutes / 60, minutes % 60)
        }
        None => "--:--".to_string(),
    }
}

fn print_table(rows: &[AlmanacRow]) {
    println!(
        "{:>4} {:>8} {:>8} {:>7} {:>7} {:>8} {:>9}",
        "day", "dec", "eot", "rise", "set", "length", "noon alt"
    );
    println!("-------------------------------------------------------");
    for row in rows {
        println!(
            "{:>4} {:>7.2}\u{b0} {:>6.2}m {:>7} {:>7} {:>7.2}h {:>8.2}\u{b0}",
            row.day,
            row.declination_deg,
            row.eot_min,
            format_hour(row.sunrise),
            format_hour(row.sunset),
            row.day_length,
            row.noon_altitude_deg,
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let params = OrbitalParameters::new(args.tilt, args.eccentricity, args.perihelion)?;
    let engine = SolarEngine::new(params, args.latitude)?;

    let days: Vec<u32> = match args.day {
        Some(day) => vec![day],
        None => (1..=365).step_by(args.step.max(1)).collect(),
    };
    let rows: Vec<AlmanacRow> = days.iter().map(|&d| build_row(&engine, d)).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!(
            "Sun almanac at latitude {:.2}\u{b0} (tilt {:.2}\u{b0}, e {:.4}, perihelion day {})",
            args.latitude, args.tilt, args.eccentricity, args.perihelion
        );
        print_table(&rows);
    }

    Ok(())
}
