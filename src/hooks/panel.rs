use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use super::hover::HoverSlot;
use crate::config::{HOVER_CLOSE_GRACE_MS, NAV_HEIGHT, PANEL_GAP};
use crate::dom::{self, ListenerGuard, Rect};
use crate::motion::{self, AnimationHandle, Ease, Position, Props, Timeline, Timing};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelOpenState {
    Closed,
    HoverOpen,
    PinnedOpen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction<K> {
    HoverEnter(K),
    HoverLeave(K),
    Click(K),
    Close(K),
    OutsideClick,
}

/// Open state of a set of mutually exclusive panels. Only one key can be open,
/// which the single slot enforces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelGroup<K> {
    open: Option<(K, PanelOpenState)>,
}

impl<K> Default for PanelGroup<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: Copy + PartialEq> PanelGroup<K> {
    pub fn state(&self, key: K) -> PanelOpenState {
        match self.open {
            Some((open, state)) if open == key => state,
            _ => PanelOpenState::Closed,
        }
    }

    pub fn is_open(&self, key: K) -> bool {
        self.state(key) != PanelOpenState::Closed
    }

    pub fn open_key(&self) -> Option<K> {
        self.open.map(|(key, _)| key)
    }

    pub fn apply(&mut self, action: PanelAction<K>) {
        self.open = match (self.open, action) {
            // A pinned panel ignores hovering over its siblings.
            (Some((open, PanelOpenState::PinnedOpen)), PanelAction::HoverEnter(_)) => {
                Some((open, PanelOpenState::PinnedOpen))
            }
            (_, PanelAction::HoverEnter(key)) => Some((key, PanelOpenState::HoverOpen)),
            (Some((open, PanelOpenState::HoverOpen)), PanelAction::HoverLeave(key)) if open == key => None,
            (current, PanelAction::HoverLeave(_)) => current,
            (Some((open, PanelOpenState::PinnedOpen)), PanelAction::Click(key)) if open == key => None,
            (_, PanelAction::Click(key)) => Some((key, PanelOpenState::PinnedOpen)),
            (Some((open, _)), PanelAction::Close(key)) if open == key => None,
            (current, PanelAction::Close(_)) => current,
            (_, PanelAction::OutsideClick) => None,
        };
    }
}

impl<K: Copy + PartialEq + 'static> Reducible for PanelGroup<K> {
    type Action = PanelAction<K>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Pointer handlers for hover-opened panels. Leaving a trigger or its panel
/// closes it after a short grace period, so the pointer can cross the gap
/// between them; entering either one again cancels the pending close.
pub struct HoverIntent<K: Copy + PartialEq + 'static> {
    pending: Rc<RefCell<Option<Timeout>>>,
    dispatcher: UseReducerDispatcher<PanelGroup<K>>,
}

impl<K: Copy + PartialEq + 'static> Clone for HoverIntent<K> {
    fn clone(&self) -> Self {
        Self { pending: self.pending.clone(), dispatcher: self.dispatcher.clone() }
    }
}

impl<K: Copy + PartialEq + 'static> HoverIntent<K> {
    pub fn enter(&self, key: K) -> Callback<MouseEvent> {
        let intent = self.clone();
        Callback::from(move |_| {
            intent.pending.borrow_mut().take();
            intent.dispatcher.dispatch(PanelAction::HoverEnter(key));
        })
    }

    /// Keeps the panel open while the pointer is over it.
    pub fn stay(&self) -> Callback<MouseEvent> {
        let pending = self.pending.clone();
        Callback::from(move |_| {
            pending.borrow_mut().take();
        })
    }

    pub fn leave(&self, key: K) -> Callback<MouseEvent> {
        let intent = self.clone();
        Callback::from(move |_| {
            let dispatcher = intent.dispatcher.clone();
            let close = Timeout::new(HOVER_CLOSE_GRACE_MS, move || dispatcher.dispatch(PanelAction::HoverLeave(key)));
            // Replacing a pending close cancels it.
            *intent.pending.borrow_mut() = Some(close);
        })
    }
}

#[hook]
pub fn use_hover_intent<K>(panels: &UseReducerHandle<PanelGroup<K>>) -> HoverIntent<K>
where
    K: Copy + PartialEq + 'static,
{
    let pending = use_mut_ref(|| None::<Timeout>);
    HoverIntent { pending, dispatcher: panels.dispatcher() }
}

/// Closes every panel of the group on a document click that lands outside
/// all of `zones` (triggers and panels).
#[hook]
pub fn use_outside_click<K>(panels: &UseReducerHandle<PanelGroup<K>>, zones: Vec<NodeRef>)
where
    K: Copy + PartialEq + 'static,
{
    let dispatcher = panels.dispatcher();
    use_effect_with_deps(
        move |zones| {
            let zones = zones.clone();
            let listener = ListenerGuard::on_document("click", move |event| {
                let inside: Vec<Element> = zones.iter().filter_map(motion::element).collect();
                if !dom::event_within(&event, &inside) {
                    dispatcher.dispatch(PanelAction::OutsideClick);
                }
            });
            let listener = match listener {
                Ok(guard) => Some(guard),
                Err(e) => {
                    warn!("Outside clicks will not close panels: {}", e);
                    None
                }
            };
            move || drop(listener)
        },
        zones,
    );
}

/// Decides whether an open/close change may animate. The first run only lays
/// down the baseline; until the zero-delay mount timer fires, changes snap.
#[derive(Debug, Default)]
pub struct EntranceGate {
    seen_first: bool,
    mounted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Baseline,
    Snap,
    Animate,
}

impl EntranceGate {
    pub fn mark_mounted(&mut self) {
        self.mounted = true;
    }

    pub fn decide(&mut self) -> GateDecision {
        if !self.seen_first {
            self.seen_first = true;
            GateDecision::Baseline
        } else if !self.mounted {
            GateDecision::Snap
        } else {
            GateDecision::Animate
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorPosition {
    pub x: f64,
    pub y: f64,
}

impl AnchorPosition {
    /// Left-aligned with the anchor, just below the fixed navigation bar.
    pub fn below_nav(anchor: Rect) -> Self {
        Self { x: anchor.left, y: NAV_HEIGHT + PANEL_GAP }
    }

    /// Horizontally centered on the anchor, `gap` below its bottom edge.
    pub fn below_center(anchor: Rect, gap: f64) -> Self {
        Self { x: anchor.center_x(), y: anchor.bottom() + gap }
    }

    pub fn apply(&self, element: &Element) {
        let left = dom::set_style(element, "left", &format!("{}px", self.x));
        let top = dom::set_style(element, "top", &format!("{}px", self.y));
        if let Err(e) = left.and(top) {
            debug!("Could not place panel: {}", e);
        }
    }
}

pub type Placement = fn(Rect) -> AnchorPosition;

/// Keeps `panel` placed against `anchor` while `open`, following scroll and
/// resize. Positions once on every open change.
#[hook]
pub fn use_anchored_position(anchor: NodeRef, panel: NodeRef, open: bool, placement: Placement) {
    use_effect_with_deps(
        move |(anchor, panel, open)| {
            let place = {
                let anchor = anchor.clone();
                let panel = panel.clone();
                move || {
                    if let (Some(anchor), Some(panel)) = (motion::element(&anchor), motion::element(&panel)) {
                        placement(dom::rect_of(&anchor)).apply(&panel);
                    }
                }
            };
            place();

            let mut guards = Vec::new();
            if *open {
                for event in ["resize", "scroll"] {
                    let place = place.clone();
                    match ListenerGuard::on_window(event, move |_| place()) {
                        Ok(guard) => guards.push(guard),
                        Err(e) => warn!("Panel will not follow {}: {}", event, e),
                    }
                }
            }
            move || drop(guards)
        },
        (anchor, panel, open),
    );
}

fn closed_overlay() -> Props {
    Props::new().opacity(0.0)
}

fn closed_content() -> Props {
    Props::new().opacity(0.0).y_px(-10.0)
}

fn open_overlay() -> Props {
    Props::new().opacity(1.0)
}

fn open_content() -> Props {
    Props::new().opacity(1.0).y_px(0.0)
}

/// Backdrop and content fading in sync: 0.3s ease-out in, 0.2s ease-in out.
pub fn panel_transition<T>(overlay: T, content: T, open: bool) -> Timeline<T> {
    let (timing, overlay_to, content_to) = if open {
        (Timing::new(0.3, Ease::Power2Out), open_overlay(), open_content())
    } else {
        (Timing::new(0.2, Ease::Power2In), closed_overlay(), closed_content())
    };
    Timeline::new()
        .to(overlay, overlay_to, timing)
        .to_at(content, content_to, timing, Position::WithPrevious(0.0))
}

/// Popover card growing out of its marker: explicit start on open, from the
/// current values on close.
pub fn popover_transition<T>(popover: T, open: bool) -> Timeline<T> {
    let hidden = Props::new().opacity(0.0).y_px(-10.0).scale(0.95);
    if open {
        Timeline::new().from_to(
            popover,
            hidden,
            Props::new().opacity(1.0).y_px(0.0).scale(1.0),
            Timing::new(0.3, Ease::Power2Out),
        )
    } else {
        Timeline::new().to(popover, hidden, Timing::new(0.2, Ease::Power2In))
    }
}

/// Open/close animation of a floating panel's backdrop and content.
#[hook]
pub fn use_panel_transition(open: bool, overlay: NodeRef, content: NodeRef) {
    let gate = use_mut_ref(EntranceGate::default);
    let slot = use_mut_ref(HoverSlot::<AnimationHandle>::new);

    {
        let gate = gate.clone();
        let slot = slot.clone();
        let overlay = overlay.clone();
        let content = content.clone();
        use_effect_with_deps(
            move |_| {
                if let (Some(overlay), Some(content)) = (motion::element(&overlay), motion::element(&content)) {
                    motion::set(&overlay, &closed_overlay());
                    motion::set(&content, &closed_content());
                }
                let timeout = Timeout::new(0, move || gate.borrow_mut().mark_mounted());
                move || {
                    drop(timeout);
                    slot.borrow_mut().clear();
                }
            },
            (),
        );
    }

    use_effect_with_deps(
        move |open| {
            let open = *open;
            if let (Some(overlay), Some(content)) = (motion::element(&overlay), motion::element(&content)) {
                let decision = gate.borrow_mut().decide();
                match decision {
                    GateDecision::Animate => {
                        slot.borrow_mut()
                            .restart(|| Some(panel_transition(overlay, content, open).play()));
                    }
                    GateDecision::Baseline | GateDecision::Snap => {
                        debug!("Panel {} without animation", if open { "opened" } else { "closed" });
                        slot.borrow_mut().clear();
                        let (overlay_props, content_props) = if open {
                            (open_overlay(), open_content())
                        } else {
                            (closed_overlay(), closed_content())
                        };
                        motion::set(&overlay, &overlay_props);
                        motion::set(&content, &content_props);
                    }
                }
            }
            || ()
        },
        open,
    );
}
