// =============================================================================
// Contact Site - Submission Timestamps
// =============================================================================
// Table of Contents:
// 1. Clock
// 2. Browser Clock
// 3. Formatting
// =============================================================================

use chrono::{DateTime, FixedOffset, Local};
use wasm_bindgen::JsValue;

// -----------------------------------------------------------------------------
// 1. Clock
// -----------------------------------------------------------------------------

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    /// The current time rendered for display. Defaults to [`format_timestamp`].
    fn timestamp(&self) -> String {
        format_timestamp(&self.now())
    }
}

/// Wall clock in the visitor's local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

// -----------------------------------------------------------------------------
// 2. Browser Clock
// -----------------------------------------------------------------------------

/// Wall clock that lets the browser format the timestamp, so zones get their
/// real short names (`EST`, `PDT`).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

/// `Intl.DateTimeFormat` options for the submission timestamp.
const LOCALE_OPTIONS: [(&str, &str); 8] = [
    ("weekday", "short"),
    ("year", "numeric"),
    ("month", "short"),
    ("day", "2-digit"),
    ("hour", "2-digit"),
    ("minute", "2-digit"),
    ("second", "2-digit"),
    ("timeZoneName", "short"),
];

impl BrowserClock {
    fn locale_string() -> Result<String, JsValue> {
        let options = js_sys::Object::new();
        for (key, value) in LOCALE_OPTIONS {
            js_sys::Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value))?;
        }
        Ok(js_sys::Date::new_0().to_locale_string("en-US", &options).into())
    }
}

impl Clock for BrowserClock {
    fn now(&self) -> DateTime<FixedOffset> {
        SystemClock.now()
    }

    fn timestamp(&self) -> String {
        match Self::locale_string() {
            Ok(formatted) => formatted,
            Err(e) => {
                log::debug!("Falling back to chrono timestamp: {e:?}");
                format_timestamp(&self.now())
            }
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Formatting
// -----------------------------------------------------------------------------

/// Format a timestamp the way an en-US browser shows it, e.g.
/// `Mon, Oct 19, 2026, 02:05:09 PM UTC`.
pub fn format_timestamp(at: &DateTime<FixedOffset>) -> String {
    format!(
        "{} {}",
        at.format("%a, %b %d, %Y, %I:%M:%S %p"),
        zone_abbreviation(at.offset())
    )
}

/// Short zone name for an offset: `UTC`, `GMT+2`, `GMT-5`, `GMT+5:30`.
///
/// Only the offset is known here, so named zones such as `EST` are not
/// produced; [`BrowserClock`] covers those.
pub fn zone_abbreviation(offset: &FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    if seconds == 0 {
        return "UTC".to_string();
    }

    let sign = if seconds < 0 { '-' } else { '+' };
    let total_minutes = seconds.unsigned_abs() / 60;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);

    if minutes == 0 {
        format!("GMT{sign}{hours}")
    } else {
        format!("GMT{sign}{hours}:{minutes:02}")
    }
}
