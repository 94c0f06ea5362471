// File: crates/hoverplot-core/src/tooltip.rs
// Summary: Shared tooltip element, its host, and the per-chart hover state machine.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use tracing::trace;

use crate::scene::ShapeId;
use crate::surface::{Surface, SurfaceId};
use crate::types::{Point, PointerEvent};

/// The shape whose hover currently holds the shared tooltip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverOwner {
    pub surface: SurfaceId,
    pub shape: ShapeId,
}

/// Overlay node shared by every chart under one host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipElement {
    pub visible: bool,
    pub html: String,
    pub position: Point,
    /// Set on enter, cleared on leave or cancel by the owning chart only.
    pub owner: Option<HoverOwner>,
}

impl TooltipElement {
    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    /// Content split on `<br>` style line breaks (`<br>`, `<br/>`, `</br>`).
    pub fn lines(&self) -> Vec<String> {
        let mut text = self.html.clone();
        for tag in ["<br/>", "<br />", "</br>", "<br>"] {
            text = text.replace(tag, "\n");
        }
        text.split('\n').map(str::to_owned).collect()
    }
}

pub type TooltipHandle = Rc<RefCell<TooltipElement>>;

/// Owner of the single tooltip element for a container; charts only borrow it.
#[derive(Clone, Default)]
pub struct TooltipHost {
    slot: Rc<RefCell<Option<TooltipHandle>>>,
    created: Rc<Cell<usize>>,
}

impl TooltipHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the existing element or create it; never creates a second one.
    pub fn get_or_create(&self) -> TooltipHandle {
        let mut slot = self.slot.borrow_mut();
        if let Some(tip) = slot.as_ref() {
            return Rc::clone(tip);
        }
        let tip: TooltipHandle = Rc::new(RefCell::new(TooltipElement::default()));
        *slot = Some(Rc::clone(&tip));
        self.created.set(self.created.get() + 1);
        tip
    }

    pub fn element(&self) -> Option<TooltipHandle> {
        self.slot.borrow().clone()
    }

    /// Number of elements this host has ever created (0 or 1).
    pub fn created_count(&self) -> usize {
        self.created.get()
    }
}

impl fmt::Debug for TooltipHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipHost").field("created", &self.created.get()).finish()
    }
}

/// Positioning collaborator: the only two operations the core calls besides content assignment.
pub trait TooltipPlacement {
    fn move_ttip_event(&self, tip: &mut TooltipElement, event: &PointerEvent);
    fn hide_ttip(&self, tip: &mut TooltipElement);
}

/// Places the tooltip at the pointer plus a fixed offset; no clamping to the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowPointer {
    pub offset: Point,
}

impl Default for FollowPointer {
    fn default() -> Self {
        Self { offset: Point::new(10.0, -20.0) }
    }
}

impl TooltipPlacement for FollowPointer {
    fn move_ttip_event(&self, tip: &mut TooltipElement, event: &PointerEvent) {
        tip.position = Point::new(event.x + self.offset.x, event.y + self.offset.y);
        tip.visible = true;
    }

    fn hide_ttip(&self, tip: &mut TooltipElement) {
        tip.visible = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverState {
    Hidden,
    /// `shape` is the shape whose emphasis is applied; it is the one reverted on leave.
    Shown { shape: ShapeId, row: usize },
}

/// Default duration of the hover emphasis tween.
pub const HOVER_TRANSITION: Duration = Duration::from_millis(50);

/// Hover state machine for one chart, writing into the surface's shared tooltip element.
pub struct TooltipController {
    state: HoverState,
    placement: Box<dyn TooltipPlacement>,
    transition: Duration,
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new(Box::new(FollowPointer::default()))
    }
}

impl fmt::Debug for TooltipController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipController")
            .field("state", &self.state)
            .field("transition", &self.transition)
            .finish()
    }
}

impl TooltipController {
    pub fn new(placement: Box<dyn TooltipPlacement>) -> Self {
        Self { state: HoverState::Hidden, placement, transition: HOVER_TRANSITION }
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Last state this controller set. Another chart may since have taken the tooltip;
    /// [`current_state`](Self::current_state) accounts for that.
    pub fn state(&self) -> HoverState {
        self.state
    }

    /// `Shown` only while this controller's shape still owns the shared tooltip.
    pub fn current_state(&self, surface: &Surface) -> HoverState {
        match self.state {
            HoverState::Shown { shape, .. } if surface.is_emphasized(shape) => self.state,
            _ => HoverState::Hidden,
        }
    }

    pub fn set_placement(&mut self, placement: Box<dyn TooltipPlacement>) {
        self.placement = placement;
    }

    /// Take the shared tooltip for shape `id`. Whatever shape held it before, on this
    /// chart or another, loses its emphasis in the same step.
    pub fn pointer_enter(&mut self, surface: &mut Surface, id: ShapeId, event: PointerEvent) {
        if surface.shape(id).is_none() {
            trace!(shape = id.0, "pointer enter on a shape that is no longer rendered");
            return;
        }
        let owner = HoverOwner { surface: surface.id(), shape: id };
        let tip = surface.tooltip();
        let previous = tip.borrow().owner;
        match previous {
            Some(prev) if prev.surface == owner.surface && prev.shape != id => self.revert(surface, prev.shape),
            Some(prev) if prev.surface != owner.surface => {
                trace!(from_surface = prev.surface.0, from_shape = prev.shape.0, "tooltip taken from another chart");
            }
            _ => {}
        }

        let transition = self.transition;
        let Some(shape) = surface.shape_mut(id) else { return };
        shape.begin_transition(true, transition);
        let row = shape.row;
        let html = shape.tooltip.clone();
        self.state = HoverState::Shown { shape: id, row };
        trace!(shape = id.0, row, x = event.x, y = event.y, "tooltip shown");

        let mut tip = tip.borrow_mut();
        tip.owner = Some(owner);
        self.placement.move_ttip_event(&mut tip, &event);
        tip.set_html(html);
    }

    pub fn pointer_move(&mut self, surface: &Surface, event: PointerEvent) {
        match self.current_state(surface) {
            HoverState::Shown { .. } => {
                let tip = surface.tooltip();
                self.placement.move_ttip_event(&mut tip.borrow_mut(), &event);
            }
            HoverState::Hidden => self.state = HoverState::Hidden,
        }
    }

    /// Hide regardless of which shape of this chart is named; the reverted shape is the
    /// current owner. A tooltip held by another chart is left alone.
    pub fn pointer_leave(&mut self, surface: &mut Surface, id: ShapeId, _event: PointerEvent) {
        self.state = HoverState::Hidden;
        let tip = surface.tooltip();
        let previous = tip.borrow().owner;
        match previous {
            Some(prev) if prev.surface != surface.id() => {
                trace!(left = id.0, owner_surface = prev.surface.0, "tooltip owned by another chart");
                return;
            }
            Some(prev) => {
                if prev.shape != id {
                    trace!(left = id.0, active = prev.shape.0, "out-of-order pointer leave");
                }
                self.revert(surface, prev.shape);
            }
            None => {}
        }
        let mut tip = tip.borrow_mut();
        tip.owner = None;
        self.placement.hide_ttip(&mut tip);
    }

    /// Drop hover state for shapes that are about to go; hides the tooltip only if this
    /// surface owns it.
    pub fn cancel(&mut self, surface: &Surface) {
        self.state = HoverState::Hidden;
        let tip = surface.tooltip();
        let mut tip = tip.borrow_mut();
        if let Some(prev) = tip.owner.filter(|o| o.surface == surface.id()) {
            trace!(shape = prev.shape.0, "hovered shape removed, hiding tooltip");
            tip.owner = None;
            self.placement.hide_ttip(&mut tip);
        }
    }

    fn revert(&self, surface: &mut Surface, id: ShapeId) {
        if let Some(shape) = surface.shape_mut(id) {
            shape.begin_transition(false, self.transition);
        }
    }
}
