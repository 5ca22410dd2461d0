use super::*;

#[test]
fn naive_timestamp_is_treated_as_utc() {
    assert_eq!(date_time("2025-03-01T10:15:00"), "2025-03-01 10:15:00 UTC");
}

#[test]
fn fractional_seconds_are_dropped() {
    assert_eq!(date_time("2025-03-01T10:15:00.123456"), "2025-03-01 10:15:00 UTC");
}

#[test]
fn offset_timestamp_is_converted_to_utc() {
    assert_eq!(date_time("2025-03-01T12:15:00+02:00"), "2025-03-01 10:15:00 UTC");
    assert_eq!(date_time("2025-03-01T10:15:00Z"), "2025-03-01 10:15:00 UTC");
}

#[test]
fn space_separated_timestamp_is_accepted() {
    assert_eq!(date_time("2025-03-01 10:15:00"), "2025-03-01 10:15:00 UTC");
}

#[test]
fn unparseable_timestamp_is_echoed() {
    assert_eq!(date_time("yesterday"), "yesterday");
    assert_eq!(time_of_day("00:00:04"), "00:00:04");
}

#[test]
fn time_of_day_extracts_clock() {
    assert_eq!(time_of_day("2025-03-01T10:15:07"), "10:15:07");
}

#[test]
fn score_formats_two_decimals() {
    assert_eq!(score(Some(0.914)), "0.91");
    assert_eq!(score(Some(0.0)), "0.00");
}

#[test]
fn missing_or_nan_score_is_na() {
    assert_eq!(score(None), "N/A");
    assert_eq!(score(Some(f64::NAN)), "N/A");
}
