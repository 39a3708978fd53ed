// tests/y_axis_formatting_test.rs

use pid_plotter::plot_framework::format_axis_value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_value_formatting() {
        // Temperatures / positions: plain integers, one decimal below 10
        assert_eq!(format_axis_value(0.0), "0");
        assert_eq!(format_axis_value(10.0), "10");
        assert_eq!(format_axis_value(100.0), "100");
        assert_eq!(format_axis_value(5.5), "5.5");
        assert_eq!(format_axis_value(-7.5), "-7.5");
    }

    #[test]
    fn test_small_term_formatting() {
        // P/I/D contributions are often well below one
        assert_eq!(format_axis_value(0.2), "0.20");
        assert_eq!(format_axis_value(0.05), "0.05");
        assert_eq!(format_axis_value(-0.25), "-0.25");
    }

    #[test]
    fn test_large_value_formatting() {
        // Large values use k notation
        assert_eq!(format_axis_value(1000.0), "1k");
        assert_eq!(format_axis_value(5000.0), "5k");
        assert_eq!(format_axis_value(12500.0), "12k"); // 12.5 rounds half to even
        assert_eq!(format_axis_value(-3000.0), "-3k");

        // Very large values use M notation
        assert_eq!(format_axis_value(1_000_000.0), "1.0M");
        assert_eq!(format_axis_value(2_500_000.0), "2.5M");
    }

    #[test]
    fn test_time_axis_tick_values() {
        // Millisecond ticks stay integral below 1000
        for (value, expected) in [(0.0, "0"), (250.0, "250"), (999.0, "999")] {
            assert_eq!(format_axis_value(value), expected, "value {}", value);
        }
    }
}
