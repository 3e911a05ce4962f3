use crate::models::Entry;

/// Index of the segment under the indicator at the top of the wheel.
///
/// The wheel turns clockwise under a fixed indicator, so the segment under it
/// sits at `(360 - rotation) mod 360`. Returns `None` for an empty wheel.
pub fn winning_index(final_rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let normalized = final_rotation.rem_euclid(360.0);
    let adjusted = (360.0 - normalized).rem_euclid(360.0);
    let segment = 360.0 / count as f64;
    Some((adjusted / segment).floor() as usize % count)
}

/// The candidate under the indicator after the wheel stops at `final_rotation`.
pub fn resolve_winner(final_rotation: f64, candidates: &[Entry]) -> Option<&Entry> {
    winning_index(final_rotation, candidates.len()).map(|i| &candidates[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rotation_is_first() {
        assert_eq!(winning_index(0.0, 4), Some(0));
        assert_eq!(winning_index(3600.0, 4), Some(0));
    }

    #[test]
    fn test_indicator_offset() {
        // A quarter turn clockwise brings the last segment under the indicator.
        assert_eq!(winning_index(45.0, 4), Some(3));
        assert_eq!(winning_index(135.0, 4), Some(2));
        assert_eq!(winning_index(225.0, 4), Some(1));
        assert_eq!(winning_index(315.0, 4), Some(0));
    }

    #[test]
    fn test_is_pure() {
        for rotation in [0.0, 17.5, 359.9, 3742.0, -90.0] {
            assert_eq!(winning_index(rotation, 7), winning_index(rotation, 7));
        }
    }

    #[test]
    fn test_full_coverage() {
        for count in 2..=24 {
            let segment = 360.0 / count as f64;
            let mut seen = vec![0u32; count];
            for k in 0..count {
                let rotation = k as f64 * segment + segment / 2.0;
                let index = winning_index(rotation, count).unwrap();
                seen[index] += 1;
            }
            assert!(seen.iter().all(|&n| n == 1), "count {count}: {seen:?}");
        }
    }

    #[test]
    fn test_empty_wheel_has_no_winner() {
        assert_eq!(winning_index(90.0, 0), None);
        assert!(resolve_winner(90.0, &[]).is_none());
    }

    #[test]
    fn test_resolve_winner_returns_entry() {
        let candidates = vec![Entry::new(1, "A"), Entry::new(2, "B")];
        assert_eq!(resolve_winner(0.0, &candidates).map(|e| e.id), Some(1));
        assert_eq!(resolve_winner(90.0, &candidates).map(|e| e.id), Some(2));
    }
}
