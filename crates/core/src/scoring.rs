//! Scoring module - score tables and level-dependent timing curves
//!
//! Everything here is a pure function over [`GameConfig`], so given the same
//! config a reimplementation reproduces the exact numbers. Line-clear points
//! are table-driven and scale with `(level + 1)`; the timing curves shrink
//! linearly per level and clamp at a floor so the game never becomes
//! unplayably fast.

use pentris_types::GameConfig;

/// Points for clearing `rows` rows in one lock at the given level
///
/// Row counts beyond the table clamp to its last entry (a pentomino can
/// clear at most five rows at once).
pub fn line_clear_score(rows: usize, level: u32, config: &GameConfig) -> u32 {
    if rows == 0 {
        return 0;
    }
    let index = rows.min(config.line_scores.len() - 1);
    config.line_scores[index].saturating_mul(level + 1)
}

/// Points for dropping `cells` cells under player control
pub fn drop_score(cells: u32, per_cell: u32) -> u32 {
    cells.saturating_mul(per_cell)
}

/// Level reached after clearing `total_lines` lines
pub fn level_for_lines(total_lines: u32, config: &GameConfig) -> u32 {
    total_lines / config.lines_per_level.max(1)
}

fn interval_ms(start: u32, decrement: u32, floor: u32, level: u32) -> u32 {
    start
        .saturating_sub(decrement.saturating_mul(level))
        .max(floor)
}

/// Gravity interval for a level, in milliseconds
pub fn fall_interval_ms(level: u32, config: &GameConfig) -> u32 {
    interval_ms(
        config.fall_start_ms,
        config.fall_decrement_ms,
        config.fall_floor_ms,
        level,
    )
}

/// Held-direction sideways repeat interval for a level
pub fn sideways_interval_ms(level: u32, config: &GameConfig) -> u32 {
    interval_ms(
        config.sideways_start_ms,
        config.sideways_decrement_ms,
        config.sideways_floor_ms,
        level,
    )
}

/// Held soft-drop repeat interval for a level
pub fn soft_drop_interval_ms(level: u32, config: &GameConfig) -> u32 {
    interval_ms(
        config.soft_drop_start_ms,
        config.soft_drop_decrement_ms,
        config.soft_drop_floor_ms,
        level,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_scores_scale_with_level() {
        let config = GameConfig::default();
        assert_eq!(line_clear_score(0, 0, &config), 0);
        assert_eq!(line_clear_score(1, 0, &config), 100);
        assert_eq!(line_clear_score(2, 0, &config), 300);
        assert_eq!(line_clear_score(5, 0, &config), 1200);
        assert_eq!(line_clear_score(1, 4, &config), 500);
    }

    #[test]
    fn line_scores_clamp_past_the_table() {
        let config = GameConfig::default();
        // More than five rows cannot happen with pentominoes, but the table
        // clamps rather than indexing out of range.
        assert_eq!(line_clear_score(9, 0, &config), 1200);
    }

    #[test]
    fn level_progression_uses_the_divisor() {
        let config = GameConfig::default();
        assert_eq!(level_for_lines(0, &config), 0);
        assert_eq!(level_for_lines(9, &config), 0);
        assert_eq!(level_for_lines(10, &config), 1);
        assert_eq!(level_for_lines(25, &config), 2);

        let five = GameConfig {
            lines_per_level: 5,
            ..GameConfig::default()
        };
        assert_eq!(level_for_lines(5, &five), 1);
    }

    #[test]
    fn fall_interval_shrinks_to_the_floor() {
        let config = GameConfig::default();
        assert_eq!(fall_interval_ms(0, &config), 1000);
        assert_eq!(fall_interval_ms(1, &config), 920);
        assert_eq!(fall_interval_ms(11, &config), 120);
        assert_eq!(fall_interval_ms(12, &config), 100);
        assert_eq!(fall_interval_ms(100, &config), 100);
    }

    #[test]
    fn repeat_intervals_shrink_to_their_floors() {
        let config = GameConfig::default();
        assert_eq!(sideways_interval_ms(0, &config), 100);
        assert_eq!(sideways_interval_ms(10, &config), 60);
        assert_eq!(sideways_interval_ms(50, &config), 40);
        assert_eq!(soft_drop_interval_ms(0, &config), 80);
        assert_eq!(soft_drop_interval_ms(50, &config), 30);
    }

    #[test]
    fn drop_score_is_per_cell() {
        let config = GameConfig::default();
        assert_eq!(drop_score(10, config.soft_drop_cell_score), 10);
        assert_eq!(drop_score(10, config.hard_drop_cell_score), 20);
    }

    #[test]
    fn zero_divisor_does_not_panic() {
        let config = GameConfig {
            lines_per_level: 0,
            ..GameConfig::default()
        };
        assert_eq!(level_for_lines(100, &config), 100);
    }
}
