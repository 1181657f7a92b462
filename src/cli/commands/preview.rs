//! preview command - Show the layout of a prospective cell

use anyhow::Result;

use crate::cli::args::GeometryArgs;
use crate::core::aisles::generate_aisle_numbers;
use crate::core::levels::generate_levels;
use crate::core::ranges::calculate_location_ranges;
use crate::ui::{output, summary};

use super::Context;

/// Preview aisle assignments, levels, position ranges, and the total
/// location count for a prospective cell.
pub fn preview(ctx: &Context, geometry: &GeometryArgs) -> Result<()> {
    let start_side = geometry.start_side.into();
    let end_side = geometry.end_side.into();

    let aisles =
        generate_aisle_numbers(geometry.aisle_start, geometry.aisle_end, start_side, end_side)?;
    let levels = generate_levels(geometry.levels, geometry.picking)?;
    let ranges =
        calculate_location_ranges(geometry.locations_per_aisle, start_side, end_side)?;

    output::print(summary::aisle_summary(&aisles), ctx.verbosity);
    output::print("", ctx.verbosity);
    output::print(
        format!("Levels: {}", summary::levels_summary(&levels, geometry.picking)),
        ctx.verbosity,
    );
    output::print(summary::ranges_summary(&ranges), ctx.verbosity);
    output::print(
        format!(
            "Total locations: {}",
            summary::total_locations(&aisles, geometry.locations_per_aisle, levels.len())
        ),
        ctx.verbosity,
    );
    Ok(())
}
