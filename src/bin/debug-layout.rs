/// Diagnostic tool to verify records → items → layout pipeline
///
/// Usage: debug-layout <records.csv | -> [width] [height]
use anyhow::{Context, Result};
use spendmap::aggregate;
use spendmap::layout::{compute_layout, LayoutAlgorithm, LayoutConfig, LayoutStats, TreemapRect};
use std::io::Read;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spendmap=debug".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "-".to_string());
    let config = LayoutConfig::default();
    let width = match args.next() {
        Some(w) => w.parse().with_context(|| format!("bad width {w:?}"))?,
        None => config.width,
    };
    let height = match args.next() {
        Some(h) => h.parse().with_context(|| format!("bad height {h:?}"))?,
        None => config.height,
    };
    let config = config.with_size(width, height);

    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(&input).with_context(|| format!("reading {input}"))?
    };

    println!("=== DIAGNOSTIC: Records → Layout Pipeline ===");
    println!("Input: {}  Container: {}x{}", input, width, height);

    let records = aggregate::parse_records(&text)?;
    println!("\n[1] Parsed {} records", records.len());

    let items = aggregate::sum_by_category(records);
    let skipped = items.iter().filter(|i| !i.is_layoutable()).count();
    println!(
        "\n[2] Aggregated into {} categories ({} without positive total)",
        items.len(),
        skipped
    );

    let squarified = compute_layout(items.clone(), &config);
    let sliced = compute_layout(items, &config.clone().with_algorithm(LayoutAlgorithm::Slice));

    println!("\n[3] Squarified layout: {} rectangles", squarified.len());
    for (i, rect) in squarified.iter().enumerate() {
        print_rect(i, rect);
    }

    println!("\n[4] Checking for anomalies:");
    let stats = LayoutStats::measure(&squarified, width, height);
    let baseline = LayoutStats::measure(&sliced, width, height);
    println!("    Total rect area: {:.3}", stats.total_area);
    println!("    Container area:  {:.3}", width * height);
    println!("    Coverage: {:.4}%", stats.coverage * 100.0);
    println!("    Overlapping pairs: {}", stats.overlaps);
    if !stats.is_partition() && stats.count > 0 {
        println!("    ✗ layout is not an exact partition");
    }

    println!("\n[5] Aspect ratios (squarified vs slice):");
    println!(
        "    worst: {:.3} vs {:.3}",
        stats.worst_aspect, baseline.worst_aspect
    );
    println!(
        "    mean:  {:.3} vs {:.3}",
        stats.mean_aspect, baseline.mean_aspect
    );

    Ok(())
}

fn print_rect(i: usize, rect: &TreemapRect<usize>) {
    println!(
        "    [{}] '{}' - {:.2}x{:.2} at ({:.2}, {:.2}) - weight {:.2} from {} records (aspect {:.2})",
        i,
        rect.id,
        rect.width,
        rect.height,
        rect.x,
        rect.y,
        rect.weight,
        rect.payload,
        rect.aspect_ratio()
    );
}
