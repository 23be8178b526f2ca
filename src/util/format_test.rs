use super::*;

#[test]
fn small_numbers_are_unchanged() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(42), "42");
    assert_eq!(format_thousands(999), "999");
}

#[test]
fn groups_of_three_get_commas() {
    assert_eq!(format_thousands(1_000), "1,000");
    assert_eq!(format_thousands(1_234), "1,234");
    assert_eq!(format_thousands(123_456), "123,456");
    assert_eq!(format_thousands(1_234_567), "1,234,567");
}

#[test]
fn exact_multiples_of_three_digits() {
    assert_eq!(format_thousands(100_000), "100,000");
    assert_eq!(format_thousands(1_000_000_000), "1,000,000,000");
}
