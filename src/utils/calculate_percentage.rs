use crate::types::Frequency;

/// Share of `count` in `total`, in percent. A zero `total` yields `0.0`.
pub fn calculate_percentage(count: Frequency, total: Frequency) -> f64 {
    if total == 0 {
        return 0.0;
    }

    count as f64 * 100.0 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_percentage() {
        assert_eq!(calculate_percentage(2, 2), 100.0);
        assert_eq!(calculate_percentage(1, 4), 25.0);
        assert_eq!(format!("{:.1}", calculate_percentage(1, 3)), "33.3");
        assert_eq!(format!("{:.1}", calculate_percentage(2, 3)), "66.7");
    }

    #[test]
    fn test_zero_total_does_not_divide() {
        assert_eq!(calculate_percentage(0, 0), 0.0);
    }
}
