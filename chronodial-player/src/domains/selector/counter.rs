/// `"01/03"` style page counter. An empty list reads `"00/00"`.
pub fn page_counter(active_index: usize, total: usize) -> String {
    let current = if total == 0 { 0 } else { active_index + 1 };
    format!("{current:02}/{total:02}")
}

/// Counter value shown for a tweened year: always the nearest integer.
/// Years are tweened as `f64`, which holds every `i32` exactly.
pub fn displayed_year(value: f64) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_two_digits() {
        assert_eq!(page_counter(0, 3), "01/03");
        assert_eq!(page_counter(1, 3), "02/03");
        assert_eq!(page_counter(11, 12), "12/12");
        assert_eq!(page_counter(99, 120), "100/120");
        assert_eq!(page_counter(0, 0), "00/00");
    }

    #[test]
    fn years_round_to_nearest() {
        assert_eq!(displayed_year(1919.4), 1919);
        assert_eq!(displayed_year(1919.6), 1920);
        assert_eq!(displayed_year(-44.5), -45);
        assert_eq!(displayed_year(123_456_789.0), 123_456_789);
        assert_eq!(displayed_year(-541_000_001.0), -541_000_001);
    }
}
