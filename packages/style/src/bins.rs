//! Discrete color bins for flow values.
//!
//! Six fixed ascending thresholds split the value range into seven
//! buckets. Each direction has its own sequential palette (ColorBrewer
//! 7-class ramps) so inflow and outflow maps read differently at a
//! glance.

use move_map_flow_models::Direction;

/// Ascending bin boundaries. A value lands in the bucket of the first
/// threshold strictly greater than it; values meeting or exceeding all
/// thresholds land in the last bucket.
pub const THRESHOLDS: [u64; 6] = [10, 50, 100, 500, 1000, 5000];

/// Number of buckets (one more than there are thresholds).
pub const BUCKET_COUNT: usize = THRESHOLDS.len() + 1;

/// Inflow palette: ColorBrewer `YlOrRd`, light to dark.
pub const IN_PALETTE: [&str; BUCKET_COUNT] = [
    "#ffffb2", "#fed976", "#feb24c", "#fd8d3c", "#fc4e2a", "#e31a1c", "#b10026",
];

/// Outflow palette: ColorBrewer `Blues`, light to dark.
pub const OUT_PALETTE: [&str; BUCKET_COUNT] = [
    "#eff3ff", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#084594",
];

/// Ordered palette for a direction.
#[must_use]
pub const fn palette(direction: Direction) -> &'static [&'static str; BUCKET_COUNT] {
    match direction {
        Direction::In => &IN_PALETTE,
        Direction::Out => &OUT_PALETTE,
    }
}

/// Bucket index for a flow value.
///
/// Scans thresholds in ascending order and returns the index of the
/// first one strictly greater than `value`. Boundary values therefore
/// land in the higher bucket: `9` is bucket 0, `10` is bucket 1,
/// `5000` is bucket 6.
#[must_use]
pub fn bucket_for(value: u64) -> usize {
    for (index, threshold) in THRESHOLDS.iter().enumerate() {
        if value < *threshold {
            return index;
        }
    }
    BUCKET_COUNT - 1
}

/// Color token for a flow value in a direction's palette.
#[must_use]
pub fn color_for(value: u64, direction: Direction) -> &'static str {
    palette(direction)[bucket_for(value)]
}

/// One legend row: a value-range label and its color token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// Range label (`< 10`, `10–50`, ..., `> 5000`).
    pub label: String,
    /// Color token for the bucket.
    pub color: &'static str,
}

/// Legend rows for a direction, lowest bucket first.
///
/// Labels invert the bucket test: bucket 0 is everything below the
/// first threshold, middle buckets are half-open `[lo, hi)` ranges,
/// and the last bucket is everything above the final threshold.
#[must_use]
pub fn legend(direction: Direction) -> Vec<LegendEntry> {
    let colors = palette(direction);
    let mut entries = Vec::with_capacity(BUCKET_COUNT);

    entries.push(LegendEntry {
        label: format!("< {}", THRESHOLDS[0]),
        color: colors[0],
    });
    for index in 1..THRESHOLDS.len() {
        entries.push(LegendEntry {
            label: format!("{}\u{2013}{}", THRESHOLDS[index - 1], THRESHOLDS[index]),
            color: colors[index],
        });
    }
    entries.push(LegendEntry {
        label: format!("> {}", THRESHOLDS[THRESHOLDS.len() - 1]),
        color: colors[BUCKET_COUNT - 1],
    });

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_land_in_higher_bucket() {
        assert_eq!(bucket_for(9), 0);
        assert_eq!(bucket_for(10), 1);
        assert_ne!(
            color_for(9, Direction::In),
            color_for(10, Direction::In),
            "crossing a threshold must change the color"
        );
        assert_eq!(color_for(10, Direction::In), IN_PALETTE[1]);
    }

    #[test]
    fn hundred_lands_in_bucket_three() {
        // 100 meets the third threshold, so the first strictly greater
        // one is 500: the [100, 500) bucket.
        assert_eq!(bucket_for(100), 3);
    }

    #[test]
    fn values_beyond_all_thresholds_use_last_bucket() {
        assert_eq!(bucket_for(5000), BUCKET_COUNT - 1);
        assert_eq!(bucket_for(u64::MAX), BUCKET_COUNT - 1);
    }

    #[test]
    fn zero_uses_first_bucket() {
        assert_eq!(bucket_for(0), 0);
    }

    #[test]
    fn buckets_cover_every_threshold_edge() {
        for (index, threshold) in THRESHOLDS.iter().enumerate() {
            assert_eq!(bucket_for(threshold - 1), index);
            assert_eq!(bucket_for(*threshold), index + 1);
        }
    }

    #[test]
    fn palettes_differ_per_direction() {
        assert_ne!(
            color_for(100, Direction::In),
            color_for(100, Direction::Out)
        );
    }

    #[test]
    fn legend_has_one_row_per_bucket() {
        let legend = legend(Direction::In);
        assert_eq!(legend.len(), BUCKET_COUNT);
        assert_eq!(legend[0].label, "< 10");
        assert_eq!(legend[1].label, "10\u{2013}50");
        assert_eq!(legend[6].label, "> 5000");
        for (index, entry) in legend.iter().enumerate() {
            assert_eq!(entry.color, IN_PALETTE[index]);
        }
    }
}
