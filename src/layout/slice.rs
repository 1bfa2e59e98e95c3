use super::squarify::{compute_layout, Placement};
use super::{Item, LayoutAlgorithm, LayoutConfig, TreemapRect};

/// Naive proportional slicing: every item gets a full-height (or full-width)
/// slice along the longer axis. Kept as a baseline for the squarified layout.
pub fn slice_layout<T>(items: Vec<Item<T>>, width: f64, height: f64) -> Vec<TreemapRect<T>> {
    compute_layout(
        items,
        &LayoutConfig {
            width,
            height,
            algorithm: LayoutAlgorithm::Slice,
        },
    )
}

/// Slice `(x, y, width, height)` along its longer side, one slice per item.
/// `items` must be filtered already; order is kept as given.
pub fn slice<T>(
    items: &[Item<T>],
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    out: &mut Vec<Placement>,
) {
    if items.is_empty() || width <= 0.0 || height <= 0.0 {
        return;
    }
    let total: f64 = items.iter().map(|item| item.weight).sum();
    if total <= 0.0 {
        return;
    }

    let along_x = width >= height;
    let mut offset = 0.0;
    for (index, item) in items.iter().enumerate() {
        let share = item.weight / total;
        let p = if along_x {
            Placement {
                index,
                x: x + offset,
                y,
                w: width * share,
                h: height,
            }
        } else {
            Placement {
                index,
                x,
                y: y + offset,
                w: width,
                h: height * share,
            }
        };
        offset += if along_x { p.w } else { p.h };
        out.push(p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_run_along_the_longer_side() {
        let items = vec![Item::bare("a", 3.0), Item::bare("b", 1.0)];
        let rects = slice_layout(items.clone(), 200.0, 50.0);
        assert_eq!(rects.len(), 2);
        assert_eq!((rects[0].x, rects[0].width, rects[0].height), (0.0, 150.0, 50.0));
        assert_eq!((rects[1].x, rects[1].width), (150.0, 50.0));

        let tall = slice_layout(items, 50.0, 200.0);
        assert_eq!((tall[1].y, tall[1].height, tall[1].width), (150.0, 50.0, 50.0));
    }

    #[test]
    fn filters_and_sorts_like_squarified() {
        let items = vec![
            Item::bare("small", 1.0),
            Item::bare("gone", 0.0),
            Item::bare("large", 4.0),
        ];
        let rects = slice_layout(items, 100.0, 100.0);
        let ids: Vec<&str> = rects.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["large", "small"]);
        let area: f64 = rects.iter().map(|r| r.area()).sum();
        assert!((area - 10_000.0).abs() < 1e-9);
    }
}
