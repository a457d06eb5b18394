use std::path::PathBuf;

use anyhow::{Context, Result};

const DEPARTMENTS: &[&str] = &[
    "CHI", "CS", "ECE", "ECON", "EE", "EECS", "ENGR", "FRE", "GER", "IE", "ISE", "LIFE", "MATH",
    "MGT", "UNI",
];

const DAYS: &[&str] = &["MW", "TR", "F", "MWF", "T"];

const SLOTS: &[&str] = &[
    "08:40-10:30",
    "10:40-12:30",
    "12:40-14:30",
    "14:40-16:30",
    "16:40-18:30",
];

const BUILDINGS: &[&str] = &["FENS", "FASS", "FMAN", "SL"];

/// Course numbers offered per year level (the year is the hundreds digit).
const COURSE_SUFFIXES: &[u16] = &[1, 4, 10];

const SECTIONS: &[&str] = &["A", "B"];

fn main() -> Result<()> {
    env_logger::init();

    let out_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_timetable.csv"));

    let mut writer = csv::Writer::from_path(&out_path)
        .with_context(|| format!("creating {}", out_path.display()))?;
    writer.write_record(["Course", "Section", "Days", "Time", "Room"])?;

    let mut n = 0usize;
    for &dept in DEPARTMENTS {
        for year in 1..=5u16 {
            for &suffix in COURSE_SUFFIXES {
                for &section in SECTIONS {
                    let code = format!("{dept} {}", year * 100 + suffix);
                    let days = DAYS[n % DAYS.len()];
                    let slot = SLOTS[(n / DAYS.len()) % SLOTS.len()];
                    let room = format!(
                        "{} {}",
                        BUILDINGS[n % BUILDINGS.len()],
                        1000 + (n * 37) % 900
                    );
                    writer.write_record([code.as_str(), section, days, slot, room.as_str()])?;
                    n += 1;
                }
            }
        }
    }
    writer.flush().context("flushing CSV")?;

    log::info!("Wrote {n} course rows");
    println!("Wrote {n} course rows to {}", out_path.display());
    Ok(())
}
