use super::aspect::worst_aspect_ratio;
use super::Item;

/// A run of items from the front of the remaining slice that will be laid
/// out together as one strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    /// Number of items taken from the front of the slice.
    pub len: usize,
    /// Sum of their weights.
    pub total: f64,
    /// Worst aspect ratio of the committed row.
    pub worst: f64,
}

/// Greedily grow a row from the front of `items` while the worst aspect
/// ratio keeps improving.
///
/// `items` must be sorted by weight, descending, and hold at least one item.
/// `total` is the weight of all of `items`, not just the row. The returned
/// row always contains at least the first item.
pub fn build_row<T>(items: &[Item<T>], width: f64, height: f64, total: f64) -> Row {
    debug_assert!(!items.is_empty());

    let mut len = 1;
    let mut row_total = items[0].weight;
    let mut worst = worst_aspect_ratio(&items[..1], row_total, width, height, total);

    while len < items.len() {
        let candidate_total = row_total + items[len].weight;
        let candidate = worst_aspect_ratio(&items[..=len], candidate_total, width, height, total);
        // Ties stop the row: extending must strictly improve.
        if candidate >= worst {
            break;
        }
        len += 1;
        row_total = candidate_total;
        worst = candidate;
    }

    Row {
        len,
        total: row_total,
        worst,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(weights: &[f64]) -> Vec<Item<()>> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Item::bare(format!("i{i}"), w))
            .collect()
    }

    #[test]
    fn classic_example_takes_two_items() {
        let it = items(&[30.0, 26.0, 21.0]);
        let row = build_row(&it, 100.0, 100.0, 77.0);
        assert_eq!(row.len, 2);
        assert_eq!(row.total, 56.0);
    }

    #[test]
    fn dominant_item_stands_alone() {
        let mut weights = vec![95.0];
        weights.extend(std::iter::repeat(5.0 / 9.0).take(9));
        let it = items(&weights);
        let total: f64 = weights.iter().sum();
        let row = build_row(&it, 100.0, 100.0, total);
        assert_eq!(row.len, 1);
    }

    #[test]
    fn equal_weights_in_square_box_pair_up() {
        // 2x2 box, four unit items: one item alone is a 0.5x2 sliver,
        // two make a column of 1x1 squares, three get worse again.
        let it = items(&[1.0, 1.0, 1.0, 1.0]);
        let row = build_row(&it, 2.0, 2.0, 4.0);
        assert_eq!(row.len, 2);
        assert!((row.worst - 1.0).abs() < 1e-12);
    }

    #[test]
    fn equal_weights_in_long_box_go_one_per_row() {
        let it = items(&[1.0, 1.0, 1.0, 1.0]);
        let row = build_row(&it, 4.0, 1.0, 4.0);
        assert_eq!(row.len, 1);
        assert!((row.worst - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_item_row() {
        let it = items(&[7.0]);
        let row = build_row(&it, 10.0, 5.0, 7.0);
        assert_eq!(row.len, 1);
        assert_eq!(row.total, 7.0);
        assert!((row.worst - 2.0).abs() < 1e-12);
    }
}
