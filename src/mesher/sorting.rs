//! Painter's-algorithm draw ordering.
//!
//! A 2D renderer draws higher sorting orders on top of lower ones. Deriving
//! the order from the vertical position makes objects lower on screen draw
//! later, which reads as "in front" for a top-down or isometric scene.

use glam::Vec3;

/// Base sorting order that vertical positions are subtracted from.
pub const SORTING_ORDER_BASE: i32 = 5000;

/// Derive a sorting order from a vertical position.
///
/// Truncates `base - vertical_position` toward zero (C-style cast, not
/// floor) before adding the offset. Visual-ordering parity with existing
/// scenes depends on this exact truncation.
pub fn sorting_order(vertical_position: f32, base: i32, offset: i32) -> i32 {
    (base as f32 - vertical_position) as i32 + offset
}

/// Sorting order for a world position using [`SORTING_ORDER_BASE`].
pub fn sorting_order_for(position: Vec3, offset: i32) -> i32 {
    sorting_order(position.y, SORTING_ORDER_BASE, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_at_origin() {
        assert_eq!(sorting_order(0.0, 5000, 0), 5000);
    }

    #[test]
    fn test_fractional_position_truncates() {
        // 5000 - 10.7 = 4989.3, truncated to 4989, plus 3
        assert_eq!(sorting_order(10.7, 5000, 3), 4992);
    }

    #[test]
    fn test_lower_positions_sort_later() {
        let high = sorting_order(20.0, SORTING_ORDER_BASE, 0);
        let low = sorting_order(-20.0, SORTING_ORDER_BASE, 0);
        assert!(low > high);
    }

    #[test]
    fn test_offset_shifts_order() {
        let base = sorting_order(5.0, SORTING_ORDER_BASE, 0);
        assert_eq!(sorting_order(5.0, SORTING_ORDER_BASE, 7), base + 7);
        assert_eq!(sorting_order(5.0, SORTING_ORDER_BASE, -7), base - 7);
    }

    #[test]
    fn test_position_helper_uses_y() {
        let position = Vec3::new(100.0, 10.7, -3.0);
        assert_eq!(sorting_order_for(position, 3), 4992);
    }
}
