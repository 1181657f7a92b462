//! Address commands - parse, format, normalize, validate

use anyhow::Result;

use crate::core::address::{
    check_bounds, format_address, normalize_address, normalize_location, parse_full_address,
    validate_location,
};
use crate::core::types::FullAddress;
use crate::ui::output;

use super::Context;

/// Parse and validate a full address string.
///
/// With `check_bounds`, the referenced cell is looked up in the registry
/// and the aisle/position are checked against its geometry.
pub fn parse(ctx: &Context, address: &str, bounds: bool) -> Result<()> {
    let addr = parse_full_address(address)?;

    if bounds {
        let config = ctx.registry.get(addr.cell)?;
        check_bounds(&addr, config)?;
    }

    output::print(format_address(&addr), ctx.verbosity);
    output::print(
        format!(
            "cell: {}  aisle: {}  position: {}  level: {}",
            addr.cell, addr.aisle, addr.position, addr.level
        ),
        ctx.verbosity,
    );
    Ok(())
}

/// Format address components as a canonical address string.
pub fn format(ctx: &Context, cell: u32, aisle: u32, position: u32, level: u32) -> Result<()> {
    let addr = FullAddress {
        cell,
        aisle,
        position,
        level,
    };
    output::print(format_address(&addr), ctx.verbosity);
    Ok(())
}

/// Normalize an address or location string.
///
/// Four-part strings are treated as full addresses, two-part strings as
/// short locations; anything else passes through unchanged, as the codec
/// specifies.
pub fn normalize(ctx: &Context, value: &str) -> Result<()> {
    let normalized = match value.split('-').count() {
        4 => normalize_address(value),
        _ => normalize_location(value),
    };
    output::print(normalized, ctx.verbosity);
    Ok(())
}

/// Validate a short position-level location string.
pub fn validate(ctx: &Context, location: &str) -> Result<()> {
    let normalized = validate_location(location)?;
    output::print(normalized, ctx.verbosity);
    Ok(())
}
