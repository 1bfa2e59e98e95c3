use super::TreemapRect;

/// Summary numbers for a finished layout, used by the diagnostics tool and
/// handy in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutStats {
    pub count: usize,
    pub total_area: f64,
    /// `total_area / container area`; 1.0 for a complete partition.
    pub coverage: f64,
    pub worst_aspect: f64,
    pub mean_aspect: f64,
    /// Number of rect pairs whose interiors intersect (beyond `tolerance`).
    pub overlaps: usize,
}

impl LayoutStats {
    pub fn measure<T>(rects: &[TreemapRect<T>], width: f64, height: f64) -> Self {
        let count = rects.len();
        let total_area: f64 = rects.iter().map(|r| r.area()).sum();
        let container = width * height;
        let coverage = if container > 0.0 {
            total_area / container
        } else {
            0.0
        };

        let aspects = rects.iter().map(|r| r.aspect_ratio());
        let worst_aspect = aspects.clone().fold(0.0, f64::max);
        let mean_aspect = if count > 0 {
            aspects.sum::<f64>() / count as f64
        } else {
            0.0
        };

        // Shared edges are fine; only count real interior overlap.
        let tolerance = 1e-9 * width.abs().max(height.abs()).max(1.0);
        let mut overlaps = 0;
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                if interiors_overlap(a, b, tolerance) {
                    overlaps += 1;
                }
            }
        }

        Self {
            count,
            total_area,
            coverage,
            worst_aspect,
            mean_aspect,
            overlaps,
        }
    }

    pub fn is_partition(&self) -> bool {
        self.overlaps == 0 && (self.coverage - 1.0).abs() < 1e-6
    }
}

pub(crate) fn interiors_overlap<T, U>(a: &TreemapRect<T>, b: &TreemapRect<U>, tolerance: f64) -> bool {
    let ix = (a.x + a.width).min(b.x + b.width) - a.x.max(b.x);
    let iy = (a.y + a.height).min(b.y + b.height) - a.y.max(b.y);
    ix > tolerance && iy > tolerance
}
