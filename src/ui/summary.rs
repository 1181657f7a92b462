//! ui::summary
//!
//! Human-readable summaries of a prospective cell layout, used by the
//! preview and create commands.

use crate::core::aisles::AisleAssignment;
use crate::core::levels::LevelSet;
use crate::core::ranges::RangeSummary;
use crate::core::types::Side;

fn format_aisle_number(number: u32) -> String {
    format!("{:03}", number)
}

/// Summarize a cell's aisles: one line each for the boundary aisles, one
/// grouped line for the interior.
///
/// ```text
/// Aisle 003: even locations
/// Aisles from 004 to 015: both locations
/// Aisle 016: even locations
/// ```
pub fn aisle_summary(aisles: &[AisleAssignment]) -> String {
    let Some((first, rest)) = aisles.split_first() else {
        return String::new();
    };

    let mut middle = rest;
    let mut last = None;
    if let Some((tail, interior)) = rest.split_last() {
        middle = interior;
        last = Some(tail);
    }

    let mut parts = vec![format!(
        "Aisle {}: {} locations",
        format_aisle_number(first.number),
        first.sides
    )];
    if !middle.is_empty() {
        parts.push(format!(
            "Aisles from {} to {}: both locations",
            format_aisle_number(middle[0].number),
            format_aisle_number(middle[middle.len() - 1].number)
        ));
    }
    if let Some(last) = last {
        parts.push(format!(
            "Aisle {}: {} locations",
            format_aisle_number(last.number),
            last.sides
        ));
    }

    parts.join("\n")
}

/// Summarize a level set: `00 (picking), 10, 20, 30, 40`.
pub fn levels_summary(levels: &LevelSet, has_picking: bool) -> String {
    levels
        .iter()
        .map(|&level| {
            if has_picking && level == 0 {
                format!("{:02} (picking)", level)
            } else {
                format!("{:02}", level)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summarize odd/even position ranges.
pub fn ranges_summary(summary: &RangeSummary) -> String {
    let line = |label: &str, range: &crate::core::ranges::LocationRange| {
        if range.count == 0 {
            format!("{} positions: none", label)
        } else {
            format!(
                "{} positions: {} ({:04}-{:04})",
                label, range.count, range.start, range.end
            )
        }
    };
    format!(
        "{}\n{}",
        line("Odd", &summary.odd),
        line("Even", &summary.even)
    )
}

/// Total locations a cell will hold: positions per aisle side, summed
/// over every side, times the level count.
pub fn total_locations(
    aisles: &[AisleAssignment],
    locations_per_aisle: u32,
    levels_count: usize,
) -> u64 {
    let positions: u64 = aisles
        .iter()
        .map(|aisle| match aisle.sides {
            Side::Both => locations_per_aisle as u64,
            Side::Odd => locations_per_aisle.div_ceil(2) as u64,
            Side::Even => (locations_per_aisle / 2) as u64,
        })
        .sum();
    positions * levels_count as u64
}
