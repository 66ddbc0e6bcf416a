use chrono::{FixedOffset, Utc};

use super::*;

#[test]
fn currency_groups_thousands() {
    assert_eq!(currency(0.0), "₹0.00");
    assert_eq!(currency(950.0), "₹950.00");
    assert_eq!(currency(1234.5), "₹1,234.50");
    assert_eq!(currency(1_250_000.0), "₹1,250,000.00");
    assert_eq!(currency(-12.0), "-₹12.00");
}

#[test]
fn currency_or_dash_handles_missing() {
    assert_eq!(currency_or_dash(None), "-");
    assert_eq!(currency_or_dash(Some(10.0)), "₹10.00");
}

fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
}

#[test]
fn utc_timestamps_render_in_the_viewer_zone() {
    assert_eq!(time_of_day_in("2026-10-01T04:30:00.000Z", &ist()), "10:00");
    assert_eq!(date_in("2026-10-01T20:00:00Z", &ist()), "2026-10-02");
    assert_eq!(date_in("2026-10-01T20:00:00Z", &Utc), "2026-10-01");
}

#[test]
fn offset_timestamps_are_converted_not_sliced() {
    assert_eq!(time_of_day_in("2026-10-01T10:00:00+05:30", &ist()), "10:00");
    assert_eq!(time_of_day_in("2026-10-01T10:00:00+05:30", &Utc), "04:30");
    assert_eq!(date_in("2026-10-02T01:00:00+05:30", &Utc), "2026-10-01");
}

#[test]
fn unparsable_input_falls_back_to_its_date_part() {
    assert_eq!(date("2026-10-01"), "2026-10-01");
    assert_eq!(date_in("2026-10-01Tlater", &ist()), "2026-10-01");
    assert_eq!(time_of_day("2026-10-01"), "");
    assert_eq!(time_of_day_in("2026-10-01T10:05", &Utc), "10:05");
}

#[test]
fn rating_shows_new_for_unrated() {
    assert_eq!(rating(Some(4.26)), "4.3");
    assert_eq!(rating(Some(0.0)), "New");
    assert_eq!(rating(None), "New");
}
