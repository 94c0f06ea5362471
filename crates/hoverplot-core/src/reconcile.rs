// File: crates/hoverplot-core/src/reconcile.rs
// Summary: Full-replace reconciliation of a chart's shape group against its plot rows.

use tracing::debug;

use crate::scene::{ShapeId, ShapeSpec};
use crate::surface::Surface;
use crate::tooltip::TooltipController;

/// Outcome of one reconciliation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciled {
    /// Ids of the new shapes, in row order.
    pub created: Vec<ShapeId>,
    pub removed: usize,
}

/// Remove every shape in the group, then create exactly one shape per row in row order.
///
/// A tooltip shown for a removed shape is hidden first, so no hover state outlives its
/// shape. Geometry and style come from `encode` once, at creation.
pub fn reconcile<R, F>(
    surface: &mut Surface,
    rows: &[R],
    tooltip: &mut TooltipController,
    mut encode: F,
) -> Reconciled
where
    F: FnMut(&R) -> ShapeSpec,
{
    // every shape in the group goes, so any shown tooltip belongs to a removed shape
    tooltip.cancel(surface);

    let removed = surface.clear_shapes().len();
    let created: Vec<ShapeId> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| surface.push_shape(i, encode(row)))
        .collect();

    debug!(removed, created = created.len(), "reconciled shapes");
    Reconciled { created, removed }
}
