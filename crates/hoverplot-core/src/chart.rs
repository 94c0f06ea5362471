// File: crates/hoverplot-core/src/chart.rs
// Summary: ChartView trait and the Chart host that re-renders on explicit dependency changes.

use std::time::Duration;

use tracing::{debug, trace};

use crate::dataset::DatasetHandle;
use crate::reconcile::reconcile;
use crate::scene::{Decoration, ShapeId, ShapeSpec};
use crate::surface::{MountPoint, Surface, SurfaceManager};
use crate::tooltip::{
    HoverState, TooltipController, TooltipHost, TooltipPlacement, HOVER_TRANSITION,
};
use crate::types::{Point, PointerEvent, Size};

/// One chart type: how raw data becomes rows, scales, shapes and decorations.
pub trait ChartView {
    type Data;
    type Row;
    type Scales;

    fn name(&self) -> &'static str;
    /// Flat per-row projection of the raw dataset, in drawing order.
    fn plot_rows(&self, data: &Self::Data) -> Vec<Self::Row>;
    fn build_scales(&self, rows: &[Self::Row], size: Size) -> Self::Scales;
    /// Shape for one row, including its tooltip text and hover emphasis.
    fn encode(&self, row: &Self::Row, scales: &Self::Scales) -> ShapeSpec;
    fn decorations(&self, rows: &[Self::Row], scales: &Self::Scales, size: Size) -> Vec<Decoration>;

    fn hover_transition(&self) -> Duration {
        HOVER_TRANSITION
    }
}

/// The only signals that can trigger a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dependencies {
    pub surface_revision: u64,
    pub dataset_version: u64,
}

/// A mounted chart: surface, current dataset, hover state and render bookkeeping.
pub struct Chart<V: ChartView> {
    view: V,
    surface: SurfaceManager,
    dataset: Option<DatasetHandle<V::Data>>,
    tooltip: TooltipController,
    rendered: Option<Dependencies>,
    render_count: u64,
}

impl<V: ChartView> Chart<V> {
    pub fn new(view: V, mount: MountPoint, host: TooltipHost) -> Self {
        let tooltip = TooltipController::default().with_transition(view.hover_transition());
        Self {
            view,
            surface: SurfaceManager::new(mount, host),
            dataset: None,
            tooltip,
            rendered: None,
            render_count: 0,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.surface()
    }

    pub fn surface_manager(&self) -> &SurfaceManager {
        &self.surface
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Hidden as soon as another chart sharing the tooltip takes it over.
    pub fn hover_state(&self) -> HoverState {
        self.surface
            .surface()
            .map_or(HoverState::Hidden, |s| self.tooltip.current_state(s))
    }

    fn hovered(&self) -> Option<ShapeId> {
        match self.hover_state() {
            HoverState::Shown { shape, .. } => Some(shape),
            HoverState::Hidden => None,
        }
    }

    pub fn set_dataset(&mut self, dataset: DatasetHandle<V::Data>) {
        self.dataset = Some(dataset);
    }

    /// Swapping the positioning collaborator is not a render dependency.
    pub fn set_tooltip_placement(&mut self, placement: Box<dyn TooltipPlacement>) {
        self.tooltip.set_placement(placement);
    }

    pub fn attach(&mut self, size: Size) {
        self.surface.attach(size);
    }

    pub fn observe_resize(&mut self, size: Size) {
        self.surface.observe_resize(size);
    }

    /// Current dependency list, `None` while the surface or the dataset is missing.
    pub fn dependencies(&self) -> Option<Dependencies> {
        if !self.surface.is_ready() || self.dataset.is_none() {
            return None;
        }
        let dataset_version = self.dataset.as_ref().map(DatasetHandle::version)?;
        Some(Dependencies { surface_revision: self.surface.revision(), dataset_version })
    }

    /// Commit pending resizes, then render if the dependency list changed.
    /// Returns true when a render ran.
    pub fn update(&mut self) -> bool {
        self.surface.settle();
        let Some(deps) = self.dependencies() else {
            debug!(chart = self.view.name(), "not ready, skipping render");
            return false;
        };
        if self.rendered == Some(deps) {
            return false;
        }
        self.render();
        self.rendered = Some(deps);
        self.render_count += 1;
        true
    }

    fn render(&mut self) {
        let (Some(surface), Some(data)) = (self.surface.surface_mut(), self.dataset.as_ref()) else {
            return;
        };
        let size = surface.size();
        let rows = self.view.plot_rows(data);
        let scales = self.view.build_scales(&rows, size);
        let view = &self.view;
        let out = reconcile(surface, &rows, &mut self.tooltip, |row| view.encode(row, &scales));

        let decorations = if rows.is_empty() {
            Vec::new()
        } else {
            view.decorations(&rows, &scales, size)
        };
        surface.replace_decorations(decorations);
        debug!(
            chart = view.name(),
            width = size.width,
            height = size.height,
            shapes = out.created.len(),
            "rendered"
        );
    }

    pub fn pointer_enter(&mut self, id: ShapeId, event: PointerEvent) {
        if let Some(surface) = self.surface.surface_mut() {
            self.tooltip.pointer_enter(surface, id, event);
        }
    }

    pub fn pointer_move(&mut self, event: PointerEvent) {
        if let Some(surface) = self.surface.surface() {
            self.tooltip.pointer_move(surface, event);
        }
    }

    pub fn pointer_leave(&mut self, id: ShapeId, event: PointerEvent) {
        if let Some(surface) = self.surface.surface_mut() {
            self.tooltip.pointer_leave(surface, id, event);
        }
    }

    /// Route a raw pointer position into enter/move/leave on the shape under it.
    pub fn pointer_at(&mut self, x: f64, y: f64) {
        let event = PointerEvent::at(x, y);
        let hit = self.surface.surface().and_then(|s| s.hit_test(Point::new(x, y)));
        trace!(chart = self.view.name(), x, y, hit = ?hit.map(|h| h.0), "pointer");
        match (self.hovered(), hit) {
            (Some(old), Some(new)) if old == new => self.pointer_move(event),
            (old, new) => {
                if let Some(old) = old {
                    self.pointer_leave(old, event);
                }
                if let Some(new) = new {
                    self.pointer_enter(new, event);
                }
            }
        }
    }

    /// Pointer left the surface.
    pub fn pointer_exit(&mut self, event: PointerEvent) {
        if let Some(old) = self.hovered() {
            self.pointer_leave(old, event);
        }
    }

    /// Drop the surface; a tooltip this chart was showing is hidden first.
    pub fn unmount(&mut self) {
        if let Some(surface) = self.surface.surface() {
            self.tooltip.cancel(surface);
        }
        self.surface.unmount();
        self.rendered = None;
    }
}
