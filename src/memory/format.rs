use crate::config::SIZE_UNITS;

/// Scales `bytes` to the largest unit that keeps the value at or above one,
/// e.g. `1536` renders as `"1.50 Kb"`.
pub fn format_human(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value / 1024.0 >= 1.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", value, SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_stay_in_bytes() {
        assert_eq!(format_human(0), "0.00 bytes");
        assert_eq!(format_human(1), "1.00 bytes");
        assert_eq!(format_human(1023), "1023.00 bytes");
    }

    #[test]
    fn scales_through_units() {
        assert_eq!(format_human(1024), "1.00 Kb");
        assert_eq!(format_human(1536), "1.50 Kb");
        assert_eq!(format_human(1_048_576), "1.00 Mb");
        assert_eq!(format_human(3 * 1024 * 1024 * 1024), "3.00 Gb");
    }

    #[test]
    fn terabytes_is_the_ceiling() {
        assert_eq!(format_human(1u64 << 40), "1.00 Tb");
        assert_eq!(format_human(1u64 << 50), "1024.00 Tb");
    }
}
