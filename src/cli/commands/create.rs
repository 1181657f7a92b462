//! create command - Generate and persist a cell's location set

use std::path::Path;

use anyhow::Result;

use crate::cli::args::GeometryArgs;
use crate::engine::{self, CellSpec, LayoutPlan};
use crate::store::jsonl::JsonlStore;
use crate::ui::output;

use super::Context;

/// Create a cell: plan the layout and write it to a JSONL records file.
///
/// With `dry_run`, the plan is computed and summarized but nothing is
/// written.
pub fn create(
    ctx: &Context,
    cell: u32,
    geometry: &GeometryArgs,
    output_path: &Path,
    dry_run: bool,
) -> Result<()> {
    let spec = CellSpec {
        cell_number: cell,
        aisle_start: geometry.aisle_start,
        aisle_end: geometry.aisle_end,
        start_side: geometry.start_side.into(),
        end_side: geometry.end_side.into(),
        locations_per_aisle: geometry.locations_per_aisle,
        level_count: geometry.levels,
        has_picking: geometry.picking,
    };

    // Gate and plan up front so a dry run reports the same failures a
    // real run would.
    let plan = LayoutPlan::new(&spec)?;
    output::debug(format!("plan digest: {}", plan.digest()), ctx.verbosity);

    if dry_run {
        output::print(
            format!(
                "Would create cell {} with {} aisle sides, {} bays, and {} locations",
                spec.cell_number,
                plan.aisles.len(),
                plan.expected_bays(),
                plan.expected_locations()
            ),
            ctx.verbosity,
        );
        output::print(
            format!("Plan digest: {}", plan.digest().short(12)),
            ctx.verbosity,
        );
        return Ok(());
    }

    let store = JsonlStore::create(output_path)?;
    let rt = tokio::runtime::Runtime::new()?;
    let report = rt.block_on(engine::create_cell(&spec, &store))?;
    let manifest_path = store.write_manifest(&report.digest)?;

    output::print(
        format!(
            "Created cell {} with {} aisle sides, {} bays, and {} locations",
            report.cell_number, report.aisles, report.bays, report.locations
        ),
        ctx.verbosity,
    );
    output::print(
        format!(
            "Wrote {} (manifest {})",
            output_path.display(),
            manifest_path.display()
        ),
        ctx.verbosity,
    );
    Ok(())
}
