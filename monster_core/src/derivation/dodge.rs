//! Dodge value

use super::numeric::numeric_value;
use crate::types::DieSize;

/// Dodge = Defence + Intellect + level - physical weight
///
/// Not clamped: heavy, low-level monsters with weak dice get a negative
/// dodge. Any floor is up to whoever renders it.
///
/// Computed in `i64`, which holds the result for every `i32` level and weight.
pub fn dodge_value(
    defence: Option<DieSize>,
    intellect: Option<DieSize>,
    level: i32,
    physical_weight: i32,
) -> i64 {
    i64::from(numeric_value(defence)) + i64::from(numeric_value(intellect)) + i64::from(level)
        - i64::from(physical_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_die() -> impl Strategy<Value = Option<DieSize>> {
        proptest::option::of(proptest::sample::select(DieSize::all()))
    }

    #[test]
    fn test_dodge_basic() {
        // 8 + 6 + 3 - 2 = 15
        assert_eq!(dodge_value(Some(DieSize::D8), Some(DieSize::D6), 3, 2), 15);
    }

    #[test]
    fn test_dodge_unset_dice() {
        assert_eq!(dodge_value(None, Some(DieSize::D10), 1, 0), 11);
        assert_eq!(dodge_value(None, None, 4, 4), 0);
    }

    #[test]
    fn test_dodge_goes_negative() {
        assert_eq!(dodge_value(None, None, 1, 5), -4);
        assert_eq!(dodge_value(None, None, 0, 3), -3);
    }

    #[test]
    fn test_dodge_level_and_weight_are_linear() {
        let base = dodge_value(Some(DieSize::D4), Some(DieSize::D4), 0, 0);
        assert_eq!(base, 8);
        assert_eq!(dodge_value(Some(DieSize::D4), Some(DieSize::D4), 5, 0), base + 5);
        assert_eq!(dodge_value(Some(DieSize::D4), Some(DieSize::D4), 0, 5), base - 5);
    }

    #[test]
    fn test_dodge_extreme_inputs() {
        assert_eq!(
            dodge_value(Some(DieSize::D12), None, i32::MAX, 0),
            i64::from(i32::MAX) + 12
        );
        assert_eq!(dodge_value(None, None, 0, i32::MIN), -i64::from(i32::MIN));
        assert_eq!(
            dodge_value(None, None, i32::MIN, i32::MAX),
            i64::from(i32::MIN) - i64::from(i32::MAX)
        );
        assert_eq!(
            dodge_value(Some(DieSize::D12), Some(DieSize::D12), i32::MAX, i32::MIN),
            24 + i64::from(i32::MAX) - i64::from(i32::MIN)
        );
    }

    proptest! {
        #[test]
        fn prop_negative_when_weight_exceeds_level(level in any::<i32>(), weight in any::<i32>()) {
            prop_assume!(weight > level);
            prop_assert!(dodge_value(None, None, level, weight) < 0);
        }

        #[test]
        fn prop_matches_wide_arithmetic(
            defence in any_die(),
            intellect in any_die(),
            level in any::<i32>(),
            weight in any::<i32>()
        ) {
            let expected = i64::from(numeric_value(defence)) + i64::from(numeric_value(intellect))
                + i64::from(level) - i64::from(weight);
            prop_assert_eq!(dodge_value(defence, intellect, level, weight), expected);
        }

        #[test]
        fn prop_repeated_calls_agree(
            defence in any_die(),
            intellect in any_die(),
            level in any::<i32>(),
            weight in any::<i32>()
        ) {
            let first = dodge_value(defence, intellect, level, weight);
            for _ in 0..8 {
                prop_assert_eq!(dodge_value(defence, intellect, level, weight), first);
            }
        }
    }
}
