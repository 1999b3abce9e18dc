//! French date formatting for display.
//!
//! Inputs are whatever the API returns (RFC 3339 timestamps, SQL-style
//! datetimes, bare dates). Anything unparseable is returned verbatim so a
//! surprising backend value degrades to "shown as-is" instead of an error.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Parse the date formats the API is known to emit.
fn parse(value: &str) -> Option<NaiveDateTime> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.naive_local());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

/// Long French date with time: `07 juillet 2025 à 14:30`.
///
/// Empty input stays empty; unparseable input is returned unchanged.
#[must_use]
pub fn format_date_fr(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let Some(datetime) = parse(value) else {
        return value.to_owned();
    };
    let month = MONTHS_FR[datetime.month0() as usize];
    format!(
        "{:02} {month} {} à {:02}:{:02}",
        datetime.day(),
        datetime.year(),
        datetime.hour(),
        datetime.minute()
    )
}

/// Short French date: `07/07/2025`.
///
/// Same degradation rules as [`format_date_fr`].
#[must_use]
pub fn format_short_date_fr(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let Some(datetime) = parse(value) else {
        return value.to_owned();
    };
    format!("{:02}/{:02}/{}", datetime.day(), datetime.month(), datetime.year())
}

/// Relative French wording against the current clock: `il y a 3 jours`,
/// `dans 2 heures`.
#[must_use]
pub fn format_relative_fr(value: &str) -> String {
    relative_from(value, Utc::now())
}

fn relative_from(value: &str, now: DateTime<Utc>) -> String {
    if value.is_empty() {
        return String::new();
    }
    let Some(datetime) = parse(value) else {
        return value.to_owned();
    };
    let seconds = datetime.and_utc().signed_duration_since(now).num_seconds();
    let past = seconds < 0;
    let magnitude = seconds.unsigned_abs();

    let (count, singular, plural) = if magnitude < 60 {
        (magnitude, "seconde", "secondes")
    } else if magnitude < 3_600 {
        (magnitude / 60, "minute", "minutes")
    } else if magnitude < 86_400 {
        (magnitude / 3_600, "heure", "heures")
    } else if magnitude < 30 * 86_400 {
        (magnitude / 86_400, "jour", "jours")
    } else if magnitude < 365 * 86_400 {
        (magnitude / (30 * 86_400), "mois", "mois")
    } else {
        (magnitude / (365 * 86_400), "an", "ans")
    };

    let unit = if count == 1 { singular } else { plural };
    if past {
        format!("il y a {count} {unit}")
    } else {
        format!("dans {count} {unit}")
    }
}
