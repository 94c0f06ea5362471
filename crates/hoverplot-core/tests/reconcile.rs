// File: crates/hoverplot-core/tests/reconcile.rs
// Purpose: Full-replace reconciliation: idempotence, one shape per row, hover cleanup.

use hoverplot_core::geometry::Rect;
use hoverplot_core::scene::{Emphasis, Geometry, ShapeSpec, Style};
use hoverplot_core::{
    reconcile, Color, HoverState, MountPoint, PointerEvent, Size, SurfaceManager, TooltipController,
    TooltipHost,
};

fn manager() -> SurfaceManager {
    SurfaceManager::new(MountPoint::attached(Size::new(400.0, 300.0)), TooltipHost::new())
}

fn bar(v: &f64) -> ShapeSpec {
    ShapeSpec {
        geometry: Geometry::Rect(Rect::from_xywh(*v * 10.0, 0.0, 8.0, *v)),
        style: Style::filled(Color::rgb(10, 20, 30)),
        emphasis: Emphasis::Opacity { rest: 1.0, active: 0.5 },
        tooltip: format!("value {v}"),
    }
}

#[test]
fn reconcile_is_idempotent() {
    let mut mgr = manager();
    let mut tip = TooltipController::default();
    let rows = vec![3.0, 1.0, 4.0, 1.0, 5.0];
    let surface = mgr.surface_mut().expect("attached");

    let first = reconcile(surface, &rows, &mut tip, bar);
    let sig1: Vec<_> = surface.shapes().iter().map(|s| s.signature()).map(|(r, g, st, t)| (r, g, st, t.to_string())).collect();

    let second = reconcile(surface, &rows, &mut tip, bar);
    let sig2: Vec<_> = surface.shapes().iter().map(|s| s.signature()).map(|(r, g, st, t)| (r, g, st, t.to_string())).collect();

    assert_eq!(sig1, sig2);
    assert_eq!(second.removed, rows.len());
    // ids are fresh on every pass
    assert!(first.created.iter().all(|old| !second.created.contains(old)));
}

#[test]
fn one_shape_per_row_in_row_order() {
    let mut mgr = manager();
    let mut tip = TooltipController::default();
    let rows: Vec<f64> = (0..17).map(f64::from).collect();
    let surface = mgr.surface_mut().expect("attached");

    let out = reconcile(surface, &rows, &mut tip, bar);
    assert_eq!(out.created.len(), rows.len());
    assert_eq!(surface.shapes().len(), rows.len());
    let bound: Vec<usize> = surface.shapes().iter().map(|s| s.row).collect();
    assert_eq!(bound, (0..rows.len()).collect::<Vec<_>>());
}

#[test]
fn changed_rows_drop_every_prior_shape() {
    let mut mgr = manager();
    let mut tip = TooltipController::default();
    let surface = mgr.surface_mut().expect("attached");

    let before = reconcile(surface, &[1.0, 2.0, 3.0], &mut tip, bar);
    let after = reconcile(surface, &[9.0], &mut tip, bar);

    assert_eq!(after.removed, 3);
    assert_eq!(surface.shapes().len(), 1);
    for id in before.created {
        assert!(surface.shape(id).is_none(), "stale shape {id:?} survived");
    }
}

#[test]
fn removing_hovered_shape_hides_tooltip() {
    let mut mgr = manager();
    let mut tip = TooltipController::default();
    let surface = mgr.surface_mut().expect("attached");

    let out = reconcile(surface, &[1.0, 2.0], &mut tip, bar);
    tip.pointer_enter(surface, out.created[1], PointerEvent::at(25.0, 1.0));
    assert!(surface.tooltip().borrow().visible);

    reconcile(surface, &[7.0], &mut tip, bar);
    assert_eq!(tip.state(), HoverState::Hidden);
    assert!(!surface.tooltip().borrow().visible);
    assert!(surface.shapes().iter().all(|s| !surface.is_emphasized(s.id)));
    assert_eq!(surface.tooltip().borrow().owner, None);
}

#[test]
fn empty_rows_clear_the_group() {
    let mut mgr = manager();
    let mut tip = TooltipController::default();
    let surface = mgr.surface_mut().expect("attached");

    reconcile(surface, &[1.0, 2.0], &mut tip, bar);
    let out = reconcile(surface, &[] as &[f64], &mut tip, bar);
    assert!(out.created.is_empty());
    assert!(surface.shapes().is_empty());
}
