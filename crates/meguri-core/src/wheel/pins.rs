//! Pin-crossing detection for click cues.
//!
//! The wheel is split into `count` pins of `360 / count` degrees, starting at
//! the same zero reference as the winner resolver.

/// Result of one crossing check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub crossed: bool,
    /// Pin boundaries passed since `last_crossed`.
    pub passed: usize,
    /// Rotation to compare the next frame against.
    pub last_crossed: f64,
}

/// Index of the pin `rotation` falls in. `None` when there are no pins to
/// cross (`count <= 1`).
pub fn pin_index(rotation: f64, count: usize) -> Option<usize> {
    if count <= 1 {
        return None;
    }
    let width = 360.0 / count as f64;
    let index = (rotation.rem_euclid(360.0) / width).floor() as usize;
    Some(index.min(count - 1))
}

/// Count the pin boundaries between `last_crossed` and `current`.
///
/// Both angles are cumulative (not wrapped to a single turn), so a frame that
/// sweeps several pins, or whole turns, reports every boundary it passed.
/// Motion backwards never counts.
pub fn check_crossing(current: f64, count: usize, last_crossed: f64) -> Crossing {
    let unchanged = Crossing {
        crossed: false,
        passed: 0,
        last_crossed,
    };
    if count <= 1 || current <= last_crossed {
        return unchanged;
    }

    let width = 360.0 / count as f64;
    let passed = (current / width).floor() - (last_crossed / width).floor();
    if passed < 1.0 {
        return unchanged;
    }
    Crossing {
        crossed: true,
        passed: passed as usize,
        last_crossed: current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_pin_no_crossing() {
        let c = check_crossing(80.0, 4, 10.0);
        assert!(!c.crossed);
        assert_eq!(c.last_crossed, 10.0);
    }

    #[test]
    fn test_crossing_updates_last() {
        let c = check_crossing(95.0, 4, 80.0);
        assert!(c.crossed);
        assert_eq!(c.passed, 1);
        assert_eq!(c.last_crossed, 95.0);
    }

    #[test]
    fn test_wraparound_is_a_crossing() {
        let c = check_crossing(365.0, 4, 350.0);
        assert!(c.crossed);
        assert_eq!(c.passed, 1);
        assert_eq!(c.last_crossed, 365.0);
    }

    #[test]
    fn test_multi_pin_jump_counts_every_boundary() {
        let c = check_crossing(250.0, 8, 10.0);
        assert!(c.crossed);
        assert_eq!(c.passed, 5);

        // A full turn in one frame passes every pin once.
        let c = check_crossing(370.0, 30, 10.0);
        assert_eq!(c.passed, 30);
    }

    #[test]
    fn test_backwards_motion_never_crosses() {
        let c = check_crossing(80.0, 4, 95.0);
        assert!(!c.crossed);
        assert_eq!(c.passed, 0);
        assert_eq!(c.last_crossed, 95.0);
    }

    #[test]
    fn test_degenerate_counts_never_cross() {
        for count in [0, 1] {
            let c = check_crossing(180.0, count, 0.0);
            assert!(!c.crossed);
            assert_eq!(c.passed, 0);
            assert_eq!(c.last_crossed, 0.0);
        }
        assert_eq!(pin_index(42.0, 1), None);
    }

    #[test]
    fn test_negative_rotation_normalizes() {
        assert_eq!(pin_index(-10.0, 4), Some(3));
    }
}
