//! Shared calculation kernel.
//!
//! Every indicator follows the same shape: walk the history in index
//! order, reduce a trailing window per row, emit a row aligned to the
//! source index, then run a trend pass over the finished values.
//!
//! Windows are always selected by index range, never by slice offset, so a
//! chained indicator reading another indicator's rows stays aligned even
//! when the inner series starts with undefined values.

use std::cmp::Ordering;

use stockind_core::Indexed;

/// Minimum history for a windowed reduction over another series.
///
/// `inner` is the minimum history of the series being reduced (zero for raw
/// quotes) and `width` the reduction's window width.
#[inline]
pub const fn chained_min_history(inner: usize, width: usize) -> usize {
    inner + width
}

/// Rows whose index lies in `(index - width, index]`.
///
/// `rows` must be ordered by index.
pub fn window<R: Indexed>(rows: &[R], index: usize, width: usize) -> &[R] {
    let start = rows.partition_point(|r| r.index() + width <= index);
    let end = rows.partition_point(|r| r.index() <= index);
    &rows[start..end]
}

/// The row carrying `index`, if present.
pub fn row_at<R: Indexed>(rows: &[R], index: usize) -> Option<&R> {
    rows.binary_search_by_key(&index, Indexed::index)
        .ok()
        .map(|pos| &rows[pos])
}

/// Index at which `min_history` rows of `rows` have been seen.
///
/// Equal to `min_history` for a history starting at index 1; a series
/// starting later is offset by its first index.
pub fn first_index<R: Indexed>(rows: &[R], min_history: usize) -> usize {
    rows.first()
        .map_or(min_history, |r| r.index().saturating_sub(1) + min_history)
}

/// The full window ending at `index`, or `None` if fewer than `width` rows
/// fall inside it.
fn full_window<R: Indexed>(rows: &[R], index: usize, width: usize) -> Option<&[R]> {
    let rows = window(rows, index, width);
    (rows.len() == width).then_some(rows)
}

/// Mean of a full window ending at `index`.
///
/// `None` unless the window is full and every value in it is defined.
pub fn window_mean<R, F>(rows: &[R], index: usize, width: usize, value: F) -> Option<f64>
where
    R: Indexed,
    F: Fn(&R) -> Option<f64>,
{
    let rows = full_window(rows, index, width)?;
    let sum = rows.iter().try_fold(0.0, |sum, r| value(r).map(|v| sum + v))?;
    Some(sum / width as f64)
}

/// Position of the value at `index` within the min/max range of the full
/// window ending there, in `[0, 1]`.
///
/// `None` unless the window is full and every value in it is defined. A
/// zero-width range has no defined position and also yields `None`.
pub fn window_range_position<R, F>(rows: &[R], index: usize, width: usize, value: F) -> Option<f64>
where
    R: Indexed,
    F: Fn(&R) -> Option<f64>,
{
    let rows = full_window(rows, index, width)?;
    let current = rows.last().filter(|r| r.index() == index).and_then(&value)?;
    let (low, high) = rows
        .iter()
        .try_fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), r| {
            value(r).map(|v| (low.min(v), high.max(v)))
        })?;

    let range = high - low;
    if range == 0.0 {
        return None;
    }
    Some((current - low) / range)
}

/// Exponential smoothing of a series with multiplier `2 / (width + 1)`.
///
/// Rows with index below `first_index` stay undefined. The first defined
/// output is the mean of the full window ending at that row; each later
/// output blends the current value with the previous output. If the chain
/// is broken by an undefined value, it restarts from the next full window.
pub fn exponential_smoothing<R, F>(
    rows: &[R],
    width: usize,
    first_index: usize,
    value: F,
) -> Vec<Option<f64>>
where
    R: Indexed,
    F: Fn(&R) -> Option<f64>,
{
    let multiplier = 2.0 / (width as f64 + 1.0);
    let one_minus_mult = 1.0 - multiplier;

    let mut smoothed = Vec::with_capacity(rows.len());
    let mut previous: Option<f64> = None;

    for row in rows {
        let index = row.index();
        let current = if index < first_index {
            None
        } else {
            match (previous, value(row)) {
                (Some(prev), Some(v)) => Some(v * multiplier + prev * one_minus_mult),
                _ => window_mean(rows, index, width, &value),
            }
        };
        smoothed.push(current);
        previous = current;
    }

    smoothed
}

/// What a trend flag compares each value against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Baseline {
    /// The previous row's value.
    Previous,
    /// A fixed level, such as the zero line.
    Level(f64),
}

/// Directional flags for a series of values.
///
/// A value above its baseline flags `true`, below flags `false`. An equal
/// value carries the previous flag forward, so a run of ties keeps
/// whatever flag was active before the run started. Undefined rows are
/// unflagged and skipped: the next defined row compares against the last
/// defined value and carries its flag. The first defined row has nothing
/// to compare against under [`Baseline::Previous`] and stays unflagged.
pub fn trend_flags(values: &[Option<f64>], baseline: Baseline) -> Vec<Option<bool>> {
    let mut flags = Vec::with_capacity(values.len());
    let mut previous: Option<f64> = None;
    let mut last_flag: Option<bool> = None;

    for &value in values {
        let Some(current) = value else {
            flags.push(None);
            continue;
        };

        let reference = match baseline {
            Baseline::Previous => previous,
            Baseline::Level(level) => Some(level),
        };

        let flag = reference.and_then(|reference| match current.partial_cmp(&reference) {
            Some(Ordering::Greater) => Some(true),
            Some(Ordering::Less) => Some(false),
            _ => last_flag,
        });

        flags.push(flag);
        last_flag = flag;
        previous = Some(current);
    }

    flags
}
