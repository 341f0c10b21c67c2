//! Menu-bar clock text.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Milliseconds between clock refreshes.
pub const CLOCK_TICK_MS: u32 = 1_000;

/// Format like `Thu Oct 16 9:41 PM`.
///
/// `weekday` is 0 for Sunday and `month` is 0-based, as returned by the
/// browser `Date` getters. Out-of-range values render as `?`.
pub fn format_clock(weekday: u32, month: u32, day: u32, hours: u32, minutes: u32) -> String {
    let weekday = WEEKDAYS.get(weekday as usize).copied().unwrap_or("?");
    let month = MONTHS.get(month as usize).copied().unwrap_or("?");
    let meridiem = if hours < 12 { "AM" } else { "PM" };
    let hour12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{weekday} {month} {day} {hour12}:{minutes:02} {meridiem}")
}

/// Current local time, or an empty string during server rendering.
pub fn now_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format_clock(now.get_day(), now.get_month(), now.get_date(), now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
