// File: crates/hoverplot-core/src/surface.rs
// Summary: Drawing surface lifecycle: acquisition from a mount point, debounced resize, teardown.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::scene::{Decoration, Shape, ShapeId, ShapeSpec, Style};
use crate::tooltip::{HoverOwner, TooltipHandle, TooltipHost};
use crate::types::{Point, Size};

/// The element a chart is mounted into. A detached mount point has no measured box.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MountPoint {
    measured: Option<Size>,
    surface_elements: usize,
}

impl MountPoint {
    pub fn attached(size: Size) -> Self {
        Self { measured: Some(size), surface_elements: 0 }
    }

    pub fn detached() -> Self {
        Self::default()
    }

    pub fn measured(&self) -> Option<Size> {
        self.measured
    }

    /// Drawing surface elements currently under this mount point (0 or 1).
    pub fn surface_elements(&self) -> usize {
        self.surface_elements
    }
}

static NEXT_SURFACE: AtomicU64 = AtomicU64::new(1);

/// Identity of one surface, unique across every chart sharing a tooltip host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// Drawing area of one mounted chart.
#[derive(Debug)]
pub struct Surface {
    id: SurfaceId,
    size: Size,
    shapes: Vec<Shape>,
    decorations: Vec<Decoration>,
    tooltip: TooltipHandle,
    next_id: u64,
}

impl Surface {
    fn new(size: Size, tooltip: TooltipHandle) -> Self {
        let id = SurfaceId(NEXT_SURFACE.fetch_add(1, Ordering::Relaxed));
        Self { id, size, shapes: Vec::new(), decorations: Vec::new(), tooltip, next_id: 0 }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn width(&self) -> f64 { self.size.width }
    pub fn height(&self) -> f64 { self.size.height }
    pub fn size(&self) -> Size { self.size }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Shared tooltip element; the surface holds a reference, the host owns it.
    pub fn tooltip(&self) -> TooltipHandle {
        TooltipHandle::clone(&self.tooltip)
    }

    /// True when the shared tooltip is currently owned by shape `id` of this surface.
    /// Ownership is global across the host, so at most one shape anywhere is emphasized.
    pub fn is_emphasized(&self, id: ShapeId) -> bool {
        self.tooltip.borrow().owner == Some(HoverOwner { surface: self.id, shape: id })
    }

    /// Style to paint `shape` with: its resting style, or the hovered one while emphasized.
    pub fn style_of(&self, shape: &Shape) -> Style {
        if self.is_emphasized(shape.id) {
            shape.emphasized_style()
        } else {
            shape.style
        }
    }

    /// Topmost shape under `p` (shapes later in paint order win).
    pub fn hit_test(&self, p: Point) -> Option<ShapeId> {
        self.shapes.iter().rev().find(|s| s.geometry.contains(p)).map(|s| s.id)
    }

    pub(crate) fn clear_shapes(&mut self) -> Vec<ShapeId> {
        self.shapes.drain(..).map(|s| s.id).collect()
    }

    pub(crate) fn push_shape(&mut self, row: usize, spec: ShapeSpec) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push(Shape::from_spec(id, row, spec));
        id
    }

    pub(crate) fn replace_decorations(&mut self, decorations: Vec<Decoration>) {
        self.decorations = decorations;
    }
}

/// Owns one chart's surface: creates it once the mount point is attached, keeps its size in
/// sync with the mount point, and drops it on unmount.
///
/// Every committed change (creation or a different size) bumps `revision` exactly once.
#[derive(Debug)]
pub struct SurfaceManager {
    mount: MountPoint,
    host: TooltipHost,
    surface: Option<Surface>,
    pending: Option<Size>,
    revision: u64,
}

impl SurfaceManager {
    pub fn new(mount: MountPoint, host: TooltipHost) -> Self {
        let mut mgr = Self { mount, host, surface: None, pending: None, revision: 0 };
        mgr.acquire();
        mgr
    }

    /// `(surface, height, width, tooltip)` once the mount point is attached, `None` before.
    /// Creates the surface element and (through the host) the tooltip element if absent.
    pub fn acquire(&mut self) -> Option<(&mut Surface, f64, f64, TooltipHandle)> {
        if self.surface.is_none() {
            let size = self.mount.measured.filter(Size::is_usable)?;
            let tooltip = self.host.get_or_create();
            if self.mount.surface_elements == 0 {
                self.mount.surface_elements = 1;
            }
            self.surface = Some(Surface::new(size, tooltip));
            self.revision += 1;
            info!(width = size.width, height = size.height, "surface created");
        }
        self.surface.as_mut().map(|s| {
            let (h, w) = (s.height(), s.width());
            let tip = s.tooltip();
            (s, h, w, tip)
        })
    }

    pub fn is_ready(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut Surface> {
        self.surface.as_mut()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn mount(&self) -> &MountPoint {
        &self.mount
    }

    pub fn tooltip_host(&self) -> &TooltipHost {
        &self.host
    }

    /// Attach the mount point with its first measured box.
    pub fn attach(&mut self, size: Size) {
        self.mount.measured = Some(size);
        self.acquire();
    }

    /// One measurement tick from the resize observer. Nothing is committed until [`settle`].
    ///
    /// [`settle`]: SurfaceManager::settle
    pub fn observe_resize(&mut self, size: Size) {
        self.mount.measured = Some(size);
        self.pending = Some(size);
    }

    /// Commit the latest measurement. Returns true when the surface changed.
    pub fn settle(&mut self) -> bool {
        let Some(size) = self.pending.take() else { return false };
        if !size.is_usable() {
            debug!(width = size.width, height = size.height, "ignoring unusable measurement");
            return false;
        }
        if self.surface.is_none() {
            return self.acquire().is_some();
        }
        let Some(s) = self.surface.as_mut() else { return false };
        if s.size == size {
            return false;
        }
        info!(
            from_w = s.size.width, from_h = s.size.height,
            to_w = size.width, to_h = size.height,
            "surface resized"
        );
        s.size = size;
        self.revision += 1;
        true
    }

    /// Tear the surface down and remove its element from the mount point.
    pub fn unmount(&mut self) -> Option<Surface> {
        self.mount.surface_elements = 0;
        self.pending = None;
        self.surface.take()
    }
}
