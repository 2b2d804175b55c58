use chrono::{Datelike, NaiveDate};

use crate::core::primitives::date_to_unix_millis;

const E10: f64 = 7.071_067_811_865_475; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

const MILLIS_PER_YEAR: f64 = 365.0 * 86_400_000.0;

/// Largest tick count an axis may request; wider integer spans yield no ticks.
pub const MAX_AXIS_TICKS: usize = 1_000;

/// Integer tick span `[i1, i2]` and signed increment.
///
/// A negative increment means ticks are `i / -inc`, which keeps sub-unit
/// steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let positive_inc = 10f64.powf(-power) / factor;
        i1 = (start * positive_inc).round();
        i2 = (stop * positive_inc).round();
        if i1 / positive_inc < start {
            i1 += 1.0;
        }
        if i2 / positive_inc > stop {
            i2 -= 1.0;
        }
        inc = -positive_inc;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Human-friendly step (1, 2 or 5 times a power of ten) for roughly
/// `count` ticks over `[start, stop]`.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start {
        (stop, start)
    } else {
        (start, stop)
    };
    let (_, _, inc) = tick_spec(lo, hi, count as f64);
    if inc < 0.0 { -1.0 / inc } else { inc }
}

/// Evenly spaced "nice" values inside `[start, stop]`, in the same order as
/// the bounds.
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if i2 < i1 || !inc.is_finite() || inc == 0.0 || i2 - i1 > MAX_AXIS_TICKS as f64 {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut ticks: Vec<f64> = (0..n)
        .map(|offset| {
            let i = i1 + offset as f64;
            if inc < 0.0 { i / -inc } else { i * inc }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Year-aligned ticks (January 1st) inside `[min_date, max_date]`.
///
/// The year step is a nice step over the span measured in 365-day years,
/// never below one; only years divisible by the step are kept. Spans too
/// short to hold a January 1st fall back to quarter starts.
#[must_use]
pub fn year_ticks(min_date: NaiveDate, max_date: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let (lo, hi) = if max_date < min_date {
        (max_date, min_date)
    } else {
        (min_date, max_date)
    };
    if count == 0 {
        return Vec::new();
    }

    let span_years = (date_to_unix_millis(hi) - date_to_unix_millis(lo)) / MILLIS_PER_YEAR;
    let step = if span_years > 0.0 {
        tick_step(0.0, span_years, count).max(1.0).round() as i32
    } else {
        1
    };

    let first_year = lo.year() + i32::from(lo.ordinal() > 1);
    let aligned = first_year.div_euclid(step) * step;
    let aligned = if aligned < first_year { aligned + step } else { aligned };

    let ticks: Vec<NaiveDate> = (0..)
        .map(|k| aligned + k * step)
        .map_while(|year| NaiveDate::from_ymd_opt(year, 1, 1).filter(|date| *date <= hi))
        .collect();
    if !ticks.is_empty() {
        return ticks;
    }
    quarter_ticks(lo, hi)
}

fn quarter_ticks(lo: NaiveDate, hi: NaiveDate) -> Vec<NaiveDate> {
    let mut ticks = Vec::new();
    let mut year = lo.year();
    let mut month = (lo.month0() / 3) * 3 + 1;
    loop {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) else {
            break;
        };
        if date > hi {
            break;
        }
        if date >= lo {
            ticks.push(date);
        }
        month += 3;
        if month > 12 {
            month -= 12;
            year += 1;
        }
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::{MAX_AXIS_TICKS, linear_ticks, tick_step};

    #[test]
    fn tick_step_picks_one_two_five_multiples() {
        assert_eq!(tick_step(0.0, 10.0, 10), 1.0);
        assert_eq!(tick_step(0.0, 18_000.0, 10), 2_000.0);
        assert_eq!(tick_step(0.0, 68.0, 10), 5.0);
    }

    #[test]
    fn sub_unit_steps_stay_exact() {
        let ticks = linear_ticks(0.0, 1.0, 10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[3], 0.3);
    }

    #[test]
    fn oversized_tick_requests_yield_nothing() {
        assert!(linear_ticks(0.0, 18_000.0, usize::MAX).is_empty());
        assert!(linear_ticks(0.0, 1.0, MAX_AXIS_TICKS * 10).is_empty());
        assert_eq!(linear_ticks(0.0, 10.0, MAX_AXIS_TICKS).len(), 1_001);
    }

    #[test]
    fn reversed_bounds_yield_reversed_ticks() {
        assert_eq!(linear_ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    }
}
