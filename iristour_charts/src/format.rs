// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

/// Formats a tick value using the tick step to pick a consistent number of
/// decimals.
///
/// A step of `0.5` yields one decimal, `0.25` two, and so on; integer steps
/// (or an unknown step of `0.0`) drop the fraction when the value is whole.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    let decimals = step_decimals(step);
    if decimals == 0 && v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.decimals$}")
    }
}

fn step_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let mut decimals = 0_usize;
    while decimals < 6 {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            reason = "decimals stays below 6"
        )]
        let scaled = step * 10_f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() < 1e-9 {
            break;
        }
        decimals += 1;
    }
    decimals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_steps_format_whole_values_without_decimals() {
        assert_eq!(format_tick_with_step(4.0, 1.0), "4");
        assert_eq!(format_tick_with_step(10.0, 2.0), "10");
    }

    #[test]
    fn fractional_steps_keep_consistent_decimals() {
        assert_eq!(format_tick_with_step(4.5, 0.5), "4.5");
        assert_eq!(format_tick_with_step(4.0, 0.5), "4.0");
        assert_eq!(format_tick_with_step(0.25, 0.25), "0.25");
    }

    #[test]
    fn unknown_step_falls_back_to_plain_formatting() {
        assert_eq!(format_tick_with_step(3.0, 0.0), "3");
    }
}
