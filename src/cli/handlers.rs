use anyhow::{Result, anyhow};
use chrono::{Datelike, Months, NaiveDate};
use log::warn;
use std::str::FromStr;

use crate::config::AppConfig;
use crate::models::{Prayer, WeekGrid};
use crate::store::AttendanceStore;
use crate::utils::dates::{date_key, days_in_month, last_days, parse_date_key};
use crate::utils::format::{count_bar, format_percentage, progress_bar, weekday_abbrev};
use crate::utils::hijri::hijri_string;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! print_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        print!("\x1b[0m");
    }};
}

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn resolve_date(arg: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match arg {
        None => Ok(today),
        Some(s) => {
            parse_date_key(s).ok_or_else(|| anyhow!("Invalid date '{}'. Use YYYY-MM-DD", s))
        }
    }
}

// ─── Toggle ──────────────────────────────────────────────────────────────────

pub fn handle_toggle(
    store: &mut AttendanceStore,
    prayer_str: &str,
    date_arg: Option<&str>,
    today: NaiveDate,
) -> Result<()> {
    let prayer = Prayer::from_str(prayer_str).map_err(|_| {
        anyhow!(
            "Unknown prayer '{}'. Use: fajr, dhuhr, asr, maghrib, isha",
            prayer_str
        )
    })?;
    let date = resolve_date(date_arg, today)?;

    if let Err(err) = store.toggle_attendance(prayer, date) {
        // In-memory state stays correct; the mark may just not survive a restart
        warn!("could not persist attendance: {err}");
    }

    let count = store.attended_count(date);
    if store.is_attended(prayer, date) {
        println_colored!(
            GREEN,
            "  ✓ {} at the mosque on {} ({}/{})",
            prayer,
            date_key(date),
            count,
            Prayer::PER_DAY
        );
    } else {
        println_colored!(
            DIM,
            "  ○ {} unmarked for {} ({}/{})",
            prayer,
            date_key(date),
            count,
            Prayer::PER_DAY
        );
    }
    if store.attended_all(date) {
        println_colored!(GOLD, "  All five in congregation");
    }
    Ok(())
}

// ─── Day checklist ───────────────────────────────────────────────────────────

pub fn handle_day(
    store: &AttendanceStore,
    config: &AppConfig,
    date_arg: Option<&str>,
    today: NaiveDate,
) -> Result<()> {
    let date = resolve_date(date_arg, today)?;
    let count = store.attended_count(date) as u32;

    println!();
    let hijri = config
        .display
        .show_hijri
        .then(|| hijri_string(date, config.display.hijri_offset))
        .flatten();
    match hijri {
        Some(h) => println_colored!(GOLD, "  Mosque — {} ({})", date_key(date), h),
        None => println_colored!(GOLD, "  Mosque — {}", date_key(date)),
    }
    println!();

    for prayer in Prayer::ALL {
        if store.is_attended(prayer, date) {
            println_colored!(GREEN, "  ✓ {:<8} at the mosque", prayer.as_str());
        } else {
            println_colored!(DIM, "  ○ {}", prayer.as_str());
        }
    }

    println!();
    let bar = progress_bar(count, Prayer::PER_DAY as u32, 10);
    if store.attended_all(date) {
        println_colored!(GREEN, "  {}  {}/{} — full day", bar, count, Prayer::PER_DAY);
    } else {
        println_colored!(BOLD, "  {}  {}/{}", bar, count, Prayer::PER_DAY);
    }
    println!();
    Ok(())
}

// ─── Week grid ───────────────────────────────────────────────────────────────

pub fn handle_week(store: &AttendanceStore, config: &AppConfig, today: NaiveDate) -> Result<()> {
    let days = last_days(config.display.week_days.max(1), today);
    let grid = WeekGrid::new(store.daily_attendance(&days));

    println!();
    println_colored!(GOLD, "  Mosque — last {} days", days.len());
    println!();

    print!("       ");
    for date in &days {
        if *date == today {
            print_colored!(BOLD, " {}", weekday_abbrev(*date));
        } else {
            print_colored!(DIM, " {}", weekday_abbrev(*date));
        }
    }
    println!();

    for prayer in Prayer::ALL {
        print!("  {:<4} ", prayer.short_name());
        for date in &days {
            if store.is_attended(prayer, *date) {
                print_colored!(GREEN, "  ●");
            } else {
                print_colored!(DIM, "  ·");
            }
        }
        println!();
    }

    print!("       ");
    for day in &grid.days {
        if day.is_full() {
            print_colored!(GREEN, "  {}", day.attended);
        } else {
            print_colored!(DIM, "  {}", day.attended);
        }
    }
    println!();

    println!();
    println_colored!(
        BOLD,
        "  Total: {}/{}  |  {} full days",
        grid.total_attended(),
        grid.total_possible(),
        grid.full_days()
    );
    println!();
    Ok(())
}

// ─── Month heatmap ───────────────────────────────────────────────────────────

pub fn handle_month(store: &AttendanceStore, back: u32, today: NaiveDate) -> Result<()> {
    let reference = today.checked_sub_months(Months::new(back)).unwrap_or(today);
    let percentage = store.monthly_percentage(reference, today);

    println!();
    println_colored!(GOLD, "  Mosque — {}", reference.format("%B %Y"));
    println!();
    println_colored!(DIM, "  ● = 5/5, ◕ = 3-4, ◑ = 1-2, ○ = 0, · = upcoming");
    println!();

    let Some(first) = NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1) else {
        return Ok(());
    };
    let offset = first.weekday().num_days_from_monday() as usize;

    print!("  ");
    for label in ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"] {
        print_colored!(DIM, "{} ", label);
    }
    println!();

    print!("  {}", "   ".repeat(offset));
    let mut col = offset;
    for day in 1..=days_in_month(reference) {
        let Some(date) = NaiveDate::from_ymd_opt(reference.year(), reference.month(), day) else {
            continue;
        };
        if date > today {
            print_colored!(DIM, "·");
        } else {
            match store.attended_count(date) {
                5 => print_colored!(GREEN, "●"),
                3 | 4 => print_colored!(AMBER, "◕"),
                1 | 2 => print_colored!(AMBER, "◑"),
                _ => print_colored!(DIM, "○"),
            }
        }
        print!("  ");
        col += 1;
        if col == 7 {
            println!();
            print!("  ");
            col = 0;
        }
    }
    if col != 0 {
        println!();
    }

    println!();
    let pct = format_percentage(percentage);
    if percentage >= 80.0 {
        println_colored!(GREEN, "  Attendance: {}", pct);
    } else if percentage >= 50.0 {
        println_colored!(AMBER, "  Attendance: {}", pct);
    } else {
        println_colored!(RED, "  Attendance: {}", pct);
    }
    println!();
    Ok(())
}

// ─── Streaks ─────────────────────────────────────────────────────────────────

pub fn handle_streak(store: &AttendanceStore, today: NaiveDate) -> Result<()> {
    let streaks = store.streaks(today);

    println!();
    println_colored!(GOLD, "  Streaks");
    println!();
    if streaks.current > 0 {
        println_colored!(BOLD, "  Any prayer:  {} days", streaks.current);
    } else {
        println_colored!(DIM, "  Any prayer:  0 days");
    }
    if streaks.perfect > 0 {
        println_colored!(GREEN, "  All five:    {} days", streaks.perfect);
    } else {
        println_colored!(DIM, "  All five:    0 days");
    }

    // Today's count as a nudge toward keeping the streak alive
    let count = store.attended_count(today) as u8;
    println!();
    println_colored!(DIM, "  Today: {} {}/5", count_bar(count), count);
    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(store: &AttendanceStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store.records())?;
    println!("{}", json);
    Ok(())
}
