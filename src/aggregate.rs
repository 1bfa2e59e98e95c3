//! Upstream adapter: turn raw `(category, amount)` records into layout items.
//!
//! The layout engine never calls into this module; it only consumes the
//! `Item`s produced here.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use compact_str::CompactString;

use crate::layout::Item;

/// Sum amounts per category. Categories come out in first-seen order so that
/// equal totals stay stable across runs; the payload is the number of records
/// folded into each category. Non-finite amounts are skipped.
pub fn sum_by_category<I, K>(records: I) -> Vec<Item<usize>>
where
    I: IntoIterator<Item = (K, f64)>,
    K: AsRef<str>,
{
    let mut items: Vec<Item<usize>> = Vec::new();
    let mut index: HashMap<CompactString, usize> = HashMap::new();

    for (category, amount) in records {
        let category = category.as_ref();
        if !amount.is_finite() {
            tracing::debug!("Ignoring non-finite amount {} for '{}'", amount, category);
            continue;
        }
        match index.get(category) {
            Some(&i) => {
                items[i].weight += amount;
                items[i].payload += 1;
            }
            None => {
                index.insert(CompactString::new(category), items.len());
                items.push(Item::new(category, amount, 1));
            }
        }
    }

    items
}

/// Parse `category,amount` lines. Blank lines and `#` comments are ignored;
/// the amount is the text after the last comma, so categories may contain
/// commas.
pub fn parse_records(text: &str) -> Result<Vec<(CompactString, f64)>> {
    let mut records = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((category, amount)) = line.rsplit_once(',') else {
            bail!("line {}: expected `category,amount`, got {:?}", n + 1, line);
        };
        let category = category.trim();
        if category.is_empty() {
            bail!("line {}: empty category", n + 1);
        }
        let amount: f64 = amount
            .trim()
            .parse()
            .with_context(|| format!("line {}: bad amount {:?}", n + 1, amount.trim()))?;
        records.push((CompactString::new(category), amount));
    }
    Ok(records)
}
