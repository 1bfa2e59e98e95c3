use super::row::build_row;
use super::slice::slice;
use super::{Item, LayoutAlgorithm, LayoutConfig, TreemapRect};

/// Where one item landed. `index` points into the sorted item slice that was
/// handed to [`squarify`] or [`slice`](super::slice::slice).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Lay out `items` inside a `width`×`height` container anchored at the origin.
///
/// Items with non-positive (or non-finite) weight are dropped. The rest are
/// sorted by weight, descending, ties keeping their input order, and then
/// subdivided with the squarified algorithm. Returns one rectangle per
/// surviving item, in layout order. Never fails: degenerate input just
/// yields fewer (or no) rectangles.
pub fn compute_treemap_layout<T>(
    items: Vec<Item<T>>,
    width: f64,
    height: f64,
) -> Vec<TreemapRect<T>> {
    compute_layout(
        items,
        &LayoutConfig {
            width,
            height,
            algorithm: LayoutAlgorithm::Squarified,
        },
    )
}

/// Same as [`compute_treemap_layout`], with size and algorithm from `config`.
pub fn compute_layout<T>(items: Vec<Item<T>>, config: &LayoutConfig) -> Vec<TreemapRect<T>> {
    let (width, height) = (config.width, config.height);
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        tracing::debug!(
            "Empty layout: container {}x{} has no area ({} items ignored)",
            width,
            height,
            items.len()
        );
        return Vec::new();
    }

    let (sorted, original) = prepare(items);
    if sorted.is_empty() {
        return Vec::new();
    }

    let mut placed = Vec::with_capacity(sorted.len());
    match config.algorithm {
        LayoutAlgorithm::Squarified => squarify(&sorted, 0.0, 0.0, width, height, &mut placed),
        LayoutAlgorithm::Slice => slice(&sorted, 0.0, 0.0, width, height, &mut placed),
    }

    tracing::debug!(
        "Laid out {} of {} items ({:?}) in {:.1}x{:.1}",
        placed.len(),
        sorted.len(),
        config.algorithm,
        width,
        height
    );

    attach(sorted, &original, &placed)
}

/// Filter out items that cannot take area and sort the rest by weight,
/// descending. `sort_by` is stable, so equal weights keep input order.
///
/// Weights are rescaled so the largest is 1.0; only ratios matter to the
/// layout, and this keeps sums of huge weights finite. The original weights
/// are returned alongside, in the same order.
pub(crate) fn prepare<T>(items: Vec<Item<T>>) -> (Vec<Item<T>>, Vec<f64>) {
    let mut kept: Vec<Item<T>> = items
        .into_iter()
        .filter(|item| {
            let ok = item.is_layoutable();
            if !ok {
                tracing::debug!("Skipping '{}' with weight {}", item.id, item.weight);
            }
            ok
        })
        .collect();
    kept.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let original: Vec<f64> = kept.iter().map(|item| item.weight).collect();
    if let Some(&max) = original.first() {
        for item in &mut kept {
            item.weight /= max;
        }
    }
    (kept, original)
}

/// Move each placed item's id and payload into its rectangle, restoring the
/// caller's weight.
pub(crate) fn attach<T>(
    sorted: Vec<Item<T>>,
    original: &[f64],
    placed: &[Placement],
) -> Vec<TreemapRect<T>> {
    // Placements cover a prefix of `sorted`, in order.
    sorted
        .into_iter()
        .zip(original)
        .zip(placed)
        .enumerate()
        .map(|(i, ((item, &weight), p))| {
            debug_assert_eq!(p.index, i);
            TreemapRect {
                id: item.id,
                x: p.x,
                y: p.y,
                width: p.w,
                height: p.h,
                weight,
                payload: item.payload,
            }
        })
        .collect()
}

/// Squarified subdivision of the area `(x, y, width, height)`.
///
/// `items` must already be filtered and sorted by weight, descending. Each
/// pass lays one row as a strip along the shorter side of the residual area
/// and continues on what is left, so stack depth stays constant no matter how
/// many items there are. The last remaining item takes the whole residual
/// area. Weights must sum to a finite value; [`compute_layout`] rescales
/// them to guarantee that.
pub fn squarify<T>(
    items: &[Item<T>],
    mut x: f64,
    mut y: f64,
    mut width: f64,
    mut height: f64,
    out: &mut Vec<Placement>,
) {
    let mut start = 0;

    while start < items.len() {
        // Residual area can collapse through floating-point drift
        if width <= 0.0 || height <= 0.0 {
            tracing::debug!(
                "Squarify: residual area {}x{} is empty, {} items dropped",
                width,
                height,
                items.len() - start
            );
            return;
        }

        let remaining = &items[start..];
        if remaining.len() == 1 {
            out.push(Placement {
                index: start,
                x,
                y,
                w: width,
                h: height,
            });
            return;
        }

        let total: f64 = remaining.iter().map(|item| item.weight).sum();
        if total <= 0.0 {
            return;
        }

        let row = build_row(remaining, width, height, total);
        let fraction = row.total / total;
        // Residual is sized by the unconsumed weight, not by subtraction, so
        // a tail absorbed into `total` still gets a positive extent.
        let rest: f64 = remaining[row.len..].iter().map(|item| item.weight).sum();
        let residual = rest / total;
        let vertical = width >= height;

        tracing::trace!(
            "Row of {} items ({} strip, fraction {:.4}, worst aspect {:.3})",
            row.len,
            if vertical { "vertical" } else { "horizontal" },
            fraction,
            row.worst
        );

        let mut offset = 0.0;
        if vertical {
            let thickness = width * fraction;
            for (k, item) in remaining[..row.len].iter().enumerate() {
                let length = height * (item.weight / row.total);
                out.push(Placement {
                    index: start + k,
                    x,
                    y: y + offset,
                    w: thickness,
                    h: length,
                });
                offset += length;
            }
            x += thickness;
            width *= residual;
        } else {
            let thickness = height * fraction;
            for (k, item) in remaining[..row.len].iter().enumerate() {
                let length = width * (item.weight / row.total);
                out.push(Placement {
                    index: start + k,
                    x: x + offset,
                    y,
                    w: length,
                    h: thickness,
                });
                offset += length;
            }
            y += thickness;
            height *= residual;
        }

        start += row.len;
    }
}
