//! cells command - List the cell registry

use anyhow::Result;

use crate::ui::output;

use super::Context;

/// List the cells in the registry.
pub fn cells(ctx: &Context) -> Result<()> {
    output::debug(
        format!("registry source: {}", ctx.registry_source),
        ctx.verbosity,
    );

    for config in ctx.registry.cells() {
        output::print(
            format!(
                "cell {}: {} aisles, {} locations per aisle, {} levels",
                config.cell,
                config.aisles_count,
                config.locations_per_aisle,
                config.levels_per_location
            ),
            ctx.verbosity,
        );
    }
    Ok(())
}
