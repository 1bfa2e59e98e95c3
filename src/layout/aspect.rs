use super::Item;

/// `max(w/h, h/w)`. A square yields 1; degenerate extents yield `+∞`,
/// so they always lose against any finite candidate.
pub fn aspect_ratio(width: f64, height: f64) -> f64 {
    if width <= 0.0 || height <= 0.0 {
        return f64::INFINITY;
    }
    (width / height).max(height / width)
}

/// Worst per-item aspect ratio if `row` were laid out as the next strip of
/// a `width`×`height` area holding `total_value` worth of items.
///
/// The strip runs along the shorter side: a vertical strip on the left when
/// `width >= height`, a horizontal strip on top otherwise. Its thickness is
/// proportional to `row_total / total_value`, and each item gets a slice of
/// the strip proportional to `weight / row_total`.
pub fn worst_aspect_ratio<T>(
    row: &[Item<T>],
    row_total: f64,
    width: f64,
    height: f64,
    total_value: f64,
) -> f64 {
    if row.is_empty() || !(total_value > 0.0 && total_value.is_finite()) || !(row_total > 0.0) {
        return f64::INFINITY;
    }
    let fraction = row_total / total_value;
    let vertical = width >= height;
    let (thickness, length) = if vertical {
        (width * fraction, height)
    } else {
        (height * fraction, width)
    };

    row.iter()
        .map(|item| {
            let slice = length * (item.weight / row_total);
            if vertical {
                aspect_ratio(thickness, slice)
            } else {
                aspect_ratio(slice, thickness)
            }
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(weights: &[f64]) -> Vec<Item<()>> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Item::bare(format!("i{i}"), w))
            .collect()
    }

    #[test]
    fn square_is_one_and_symmetric() {
        assert_eq!(aspect_ratio(5.0, 5.0), 1.0);
        assert_eq!(aspect_ratio(2.0, 8.0), 4.0);
        assert_eq!(aspect_ratio(8.0, 2.0), 4.0);
    }

    #[test]
    fn degenerate_extent_is_infinite() {
        assert_eq!(aspect_ratio(0.0, 3.0), f64::INFINITY);
        assert_eq!(aspect_ratio(3.0, 0.0), f64::INFINITY);
        assert_eq!(aspect_ratio(-1.0, 3.0), f64::INFINITY);
    }

    #[test]
    fn empty_row_or_zero_total_is_infinite() {
        assert_eq!(worst_aspect_ratio::<()>(&[], 0.0, 10.0, 10.0, 5.0), f64::INFINITY);
        let r = row(&[1.0]);
        assert_eq!(worst_aspect_ratio(&r, 1.0, 10.0, 10.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn overflowed_total_is_infinite_not_nan() {
        let r = row(&[f64::MAX, f64::MAX]);
        let worst = worst_aspect_ratio(&r, f64::INFINITY, 10.0, 10.0, f64::INFINITY);
        assert_eq!(worst, f64::INFINITY);
    }

    #[test]
    fn matches_hand_computed_strip() {
        // 30 and 26 out of 77 in a 100x100 box: strip 72.73 wide,
        // items 53.57 and 46.43 tall.
        let r = row(&[30.0, 26.0]);
        let worst = worst_aspect_ratio(&r, 56.0, 100.0, 100.0, 77.0);
        let strip = 100.0 * 56.0 / 77.0;
        let expected = strip / (100.0 * 26.0 / 56.0);
        assert!((worst - expected).abs() < 1e-12);
    }

    #[test]
    fn horizontal_strip_when_taller_than_wide() {
        // Whole area in one row: the strip is the full 10x40 box, the item
        // fills it.
        let r = row(&[4.0]);
        let worst = worst_aspect_ratio(&r, 4.0, 10.0, 40.0, 4.0);
        assert!((worst - 4.0).abs() < 1e-12);
    }
}
