//! Cross-shaped board geometry.
//!
//! A board of arm thickness `a` is a `(2a + 1)`-wide square with four square
//! corner blocks cut out. The near edge of each block is `(a + 1) / 2` and the
//! far edge `(3a + 1) / 2`, both with integer division.
//!
//! Edge and count arithmetic is done in `i64`, so the helpers accept any `i32`
//! arm thickness without overflowing.

/// Arm thickness used when the caller does not choose one.
pub const DEFAULT_ARM_THICKNESS: i32 = 3;

/// Largest accepted arm thickness: the grid side `2a + 1` must fit in an `i32`.
pub const MAX_ARM_THICKNESS: i32 = (i32::MAX - 1) / 2;

/// Side length of the square grid for an arm thickness.
#[must_use]
pub fn board_size(arm_thickness: i32) -> i64 {
    2 * i64::from(arm_thickness) + 1
}

/// First row/column index that is clear of the top/left corner blocks.
#[must_use]
pub fn near_edge(arm_thickness: i32) -> i64 {
    (i64::from(arm_thickness) + 1) / 2
}

/// First row/column index that falls in the bottom/right corner blocks.
#[must_use]
pub fn far_edge(arm_thickness: i32) -> i64 {
    (3 * i64::from(arm_thickness) + 1) / 2
}

/// Side length of one corner block.
#[must_use]
pub fn corner_block_side(arm_thickness: i32) -> i64 {
    near_edge(arm_thickness)
}

/// Whether `arm_thickness` describes a supported board.
#[must_use]
pub const fn is_valid_arm_thickness(arm_thickness: i32) -> bool {
    arm_thickness > 0 && arm_thickness % 2 == 1 && arm_thickness <= MAX_ARM_THICKNESS
}

/// The centre slot, which is the default empty start position.
#[must_use]
pub const fn center(arm_thickness: i32) -> super::Coord {
    super::Coord::new(arm_thickness, arm_thickness)
}

/// Whether `(row, col)` is a playable slot.
///
/// Positions outside `[0, size)` on either axis are never playable.
#[must_use]
pub fn on_board(row: i32, col: i32, arm_thickness: i32, size: i32) -> bool {
    if row < 0 || col < 0 || row >= size || col >= size {
        return false;
    }

    let (row, col) = (i64::from(row), i64::from(col));
    let near = near_edge(arm_thickness);
    let far = far_edge(arm_thickness);

    let top = row < near;
    let bottom = row >= far;
    let left = col < near;
    let right = col >= far;

    !((top || bottom) && (left || right))
}

/// Number of playable slots on a board, or 0 if `arm_thickness` is not valid.
///
/// The largest valid arm thickness gives a count below `2^62`.
#[must_use]
pub fn playable_slots(arm_thickness: i32) -> i64 {
    if !is_valid_arm_thickness(arm_thickness) {
        return 0;
    }
    let size = board_size(arm_thickness);
    let side = corner_block_side(arm_thickness);
    size * size - 4 * side * side
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_playable(arm: i32) -> i64 {
        let size = i32::try_from(board_size(arm)).unwrap();
        let mut count = 0;
        for row in 0..size {
            for col in 0..size {
                if on_board(row, col, arm, size) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_standard_edges() {
        assert_eq!(board_size(3), 7);
        assert_eq!(near_edge(3), 2);
        assert_eq!(far_edge(3), 5);
    }

    #[test]
    fn test_top_left_block() {
        assert!(!on_board(0, 0, 3, 7));
        assert!(!on_board(1, 1, 3, 7));
        assert!(on_board(1, 2, 3, 7));
        assert!(on_board(2, 1, 3, 7));
    }

    #[test]
    fn test_top_right_block() {
        assert!(!on_board(0, 6, 3, 7));
        assert!(!on_board(1, 5, 3, 7));
        assert!(on_board(1, 4, 3, 7));
        assert!(on_board(2, 5, 3, 7));
    }

    #[test]
    fn test_bottom_left_block() {
        assert!(!on_board(6, 0, 3, 7));
        assert!(!on_board(5, 1, 3, 7));
        assert!(on_board(4, 1, 3, 7));
        assert!(on_board(5, 2, 3, 7));
    }

    #[test]
    fn test_bottom_right_block() {
        assert!(!on_board(6, 6, 3, 7));
        assert!(!on_board(5, 5, 3, 7));
        assert!(on_board(4, 5, 3, 7));
        assert!(on_board(5, 4, 3, 7));
    }

    #[test]
    fn test_outside_grid_edges() {
        assert!(!on_board(-1, 3, 3, 7)); // above
        assert!(!on_board(7, 3, 3, 7)); // below
        assert!(!on_board(3, -1, 3, 7)); // left
        assert!(!on_board(3, 7, 3, 7)); // right
        assert!(on_board(0, 3, 3, 7));
        assert!(on_board(6, 3, 3, 7));
        assert!(on_board(3, 0, 3, 7));
        assert!(on_board(3, 6, 3, 7));
    }

    #[test]
    fn test_arm_one_is_plus() {
        let playable: Vec<(i32, i32)> = (0..3)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .filter(|&(r, c)| on_board(r, c, 1, 3))
            .collect();
        assert_eq!(playable, vec![(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_playable_count_matches_predicate() {
        for arm in (1..=15).step_by(2) {
            assert_eq!(count_playable(arm), playable_slots(arm), "arm {arm}");
        }
        assert_eq!(playable_slots(3), 33);
    }

    #[test]
    fn test_shape_rotation_symmetry() {
        for arm in (1..=9).step_by(2) {
            let size = i32::try_from(board_size(arm)).unwrap();
            for row in 0..size {
                for col in 0..size {
                    // 90 degree rotation: (r, c) -> (c, size - 1 - r)
                    assert_eq!(
                        on_board(row, col, arm, size),
                        on_board(col, size - 1 - row, arm, size),
                        "arm {arm} at ({row}, {col})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_arm_thickness_validation() {
        assert!(is_valid_arm_thickness(1));
        assert!(is_valid_arm_thickness(3));
        assert!(is_valid_arm_thickness(MAX_ARM_THICKNESS));
        assert!(!is_valid_arm_thickness(0));
        assert!(!is_valid_arm_thickness(-3));
        assert!(!is_valid_arm_thickness(4));
        assert!(!is_valid_arm_thickness(MAX_ARM_THICKNESS + 2));
        assert!(!is_valid_arm_thickness(i32::MAX));
        assert!(is_valid_arm_thickness(101));
        assert!(is_valid_arm_thickness(201));
    }

    #[test]
    fn test_largest_arm_fits_grid() {
        assert_eq!(board_size(MAX_ARM_THICKNESS), i64::from(i32::MAX));
        assert_eq!(playable_slots(101), 203 * 203 - 4 * 51 * 51);
        assert!(playable_slots(MAX_ARM_THICKNESS) > 0);
    }

    #[test]
    fn test_extreme_arm_values_do_not_overflow() {
        for arm in [i32::MAX, i32::MIN, MAX_ARM_THICKNESS, -1, 0] {
            assert!(!on_board(0, 0, arm, 5), "arm {arm}");
            assert!(!on_board(i32::MAX, i32::MAX, arm, i32::MAX), "arm {arm}");
            let _ = near_edge(arm);
            let _ = far_edge(arm);
            let _ = board_size(arm);
        }
        assert_eq!(near_edge(i32::MAX), 1 << 30);
        assert_eq!(far_edge(i32::MAX), (3 * i64::from(i32::MAX) + 1) / 2);
        assert_eq!(playable_slots(i32::MAX), 0);
        assert_eq!(playable_slots(i32::MIN), 0);
        assert_eq!(playable_slots(4), 0);
    }
}
