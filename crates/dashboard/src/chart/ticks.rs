/// Series with at most this many rows show every tick.
pub const DENSE_SERIES_ROWS: usize = 40;

/// The number of tick labels a dense series is thinned down to.
pub const MAX_VISIBLE_TICKS: usize = 8;

/// Returns the tick stride for a series of `row_count` rows.
///
/// A stride of `0` shows every tick. A stride `n > 0` shows the tick at
/// zero-based index `i` only if `i % n == 0`, which keeps a dense series at
/// roughly [MAX_VISIBLE_TICKS] labels.
pub fn compute_tick_stride(row_count: usize) -> usize {
    if row_count <= DENSE_SERIES_ROWS {
        0
    } else {
        row_count.div_ceil(MAX_VISIBLE_TICKS)
    }
}

/// Returns `true` if the tick at `index` is shown for the given stride.
pub fn shows_tick(tick_stride: usize, index: usize) -> bool {
    tick_stride == 0 || index % tick_stride == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_series_show_every_tick() {
        assert_eq!(compute_tick_stride(0), 0);
        assert_eq!(compute_tick_stride(1), 0);
        assert_eq!(compute_tick_stride(40), 0);
    }

    #[test]
    fn dense_series_are_thinned() {
        assert_eq!(compute_tick_stride(41), 6);
        assert_eq!(compute_tick_stride(80), 10);
        assert_eq!(compute_tick_stride(81), 11);
        assert_eq!(compute_tick_stride(1000), 125);
    }

    #[test]
    fn dense_series_show_at_most_eight_ticks() {
        for row_count in 41..500 {
            let stride = compute_tick_stride(row_count);
            let visible = (0..row_count).filter(|&idx| shows_tick(stride, idx)).count();

            assert!(visible <= MAX_VISIBLE_TICKS, "{row_count} rows show {visible} ticks");
        }
    }

    #[test]
    fn tick_visibility() {
        assert!((0..10).all(|idx| shows_tick(0, idx)));

        let shown: Vec<usize> = (0..13).filter(|&idx| shows_tick(6, idx)).collect();
        assert_eq!(shown, vec![0, 6, 12]);
    }
}
