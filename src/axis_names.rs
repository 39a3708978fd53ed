/// Axis naming for the dual-axis PID trace chart.
///
/// The chart shares one horizontal time axis between two vertical axes:
/// the process values on the left and the controller output terms on the right.
pub const TIME_AXIS_LABEL: &str = "Time (ms)";
pub const LEFT_AXIS_LABEL: &str = "Setpoint, Measurement, Error";
pub const RIGHT_AXIS_LABEL: &str = "Output, P, I, D";

/// Vertical axis a series is scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

impl AxisSide {
    /// Axis description drawn next to the tick labels.
    pub fn label(self) -> &'static str {
        match self {
            AxisSide::Left => LEFT_AXIS_LABEL,
            AxisSide::Right => RIGHT_AXIS_LABEL,
        }
    }
}

/// Both vertical axes, left first.
pub const AXIS_SIDES: [AxisSide; 2] = [AxisSide::Left, AxisSide::Right];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_side_label() {
        assert_eq!(AxisSide::Left.label(), "Setpoint, Measurement, Error");
        assert_eq!(AxisSide::Right.label(), "Output, P, I, D");
    }

    #[test]
    fn test_axis_sides_constant() {
        assert_eq!(AXIS_SIDES[0], AxisSide::Left);
        assert_eq!(AXIS_SIDES[1], AxisSide::Right);
    }
}
