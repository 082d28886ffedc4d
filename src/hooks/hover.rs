use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::dom::ListenerGuard;
use crate::motion::{self, AnimationHandle, Ease, Position, Props, Timeline, Timing};

/// Holds at most one running sequence for a trigger.
pub struct HoverSlot<H> {
    current: Option<H>,
}

impl<H> Default for HoverSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H> HoverSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kills the running sequence, then installs whatever `build` produces.
    pub fn restart<F>(&mut self, build: F)
    where
        F: FnOnce() -> Option<H>,
    {
        self.current.take();
        self.current = build();
    }

    pub fn clear(&mut self) {
        self.current.take();
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

/// The element whose pointer events drive a hover timeline.
#[derive(Clone, PartialEq)]
pub enum HoverTrigger {
    Node(NodeRef),
    /// Closest ancestor of the node matching a selector, e.g. the card that
    /// contains an arrow.
    Closest(NodeRef, &'static str),
}

impl HoverTrigger {
    fn resolve(&self) -> Option<Element> {
        match self {
            HoverTrigger::Node(node) => motion::element(node),
            HoverTrigger::Closest(node, selector) => motion::element(node)?.closest(selector).ok().flatten(),
        }
    }
}

pub type TimelineBuilder = Rc<dyn Fn() -> Option<Timeline<Element>>>;

#[hook]
pub fn use_hover_timeline(trigger: HoverTrigger, enter: TimelineBuilder, leave: TimelineBuilder) {
    use_effect_with_deps(
        move |trigger| {
            let slot = Rc::new(RefCell::new(HoverSlot::<AnimationHandle>::new()));
            let mut guards = Vec::new();
            if let Some(target) = trigger.resolve() {
                for (event, builder) in [("mouseenter", enter), ("mouseleave", leave)] {
                    let slot = slot.clone();
                    let listener = ListenerGuard::new(target.as_ref(), event, move |_| {
                        slot.borrow_mut().restart(|| builder().map(Timeline::play));
                    });
                    match listener {
                        Ok(guard) => guards.push(guard),
                        Err(e) => warn!("Failed to attach {} listener: {}", event, e),
                    }
                }
            } else {
                debug!("Hover trigger not mounted, controller stays inactive");
            }

            move || {
                drop(guards);
                slot.borrow_mut().clear();
            }
        },
        trigger,
    );
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn shift(&self, props: Props, percent: f64) -> Props {
        match self {
            Axis::Horizontal => props.x_percent(percent),
            Axis::Vertical => props.y_percent(percent),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Roll {
    Enter,
    Leave,
}

/// Two stacked copies of the same content trading places: the visible one
/// rolls out while the hidden one rolls in 0.1s later.
///
/// `primary` is the copy shown at rest. With `fade` the outgoing copy also
/// fades to transparent.
pub fn roll_swap<T>(primary: T, secondary: T, axis: Axis, fade: bool, roll: Roll) -> Timeline<T> {
    let hidden = if fade { 0.0 } else { 1.0 };
    let timing = Timing::new(0.2, Ease::Power2InOut);
    let (leaving, leaving_to, arriving, arriving_from) = match roll {
        Roll::Enter => (primary, -100.0, secondary, 100.0),
        Roll::Leave => (secondary, 100.0, primary, -100.0),
    };
    Timeline::new()
        .from_to(
            leaving,
            axis.shift(Props::new().opacity(1.0), 0.0),
            axis.shift(Props::new().opacity(hidden), leaving_to),
            timing,
        )
        .from_to_at(
            arriving,
            axis.shift(Props::new().opacity(hidden), arriving_from),
            axis.shift(Props::new().opacity(1.0), 0.0),
            timing,
            Position::WithPrevious(0.1),
        )
}

/// Builder for `use_hover_timeline` that rolls two referenced nodes.
pub fn roll_builder(primary: NodeRef, secondary: NodeRef, axis: Axis, fade: bool, roll: Roll) -> TimelineBuilder {
    Rc::new(move || {
        let primary = motion::element(&primary)?;
        let secondary = motion::element(&secondary)?;
        Some(roll_swap(primary, secondary, axis, fade, roll))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct Probe {
        id: u32,
        live: Rc<Cell<u32>>,
        killed: Rc<RefCell<Vec<u32>>>,
    }

    impl Probe {
        fn new(id: u32, live: &Rc<Cell<u32>>, killed: &Rc<RefCell<Vec<u32>>>) -> Self {
            live.set(live.get() + 1);
            Probe { id, live: live.clone(), killed: killed.clone() }
        }
    }

    impl Drop for Probe {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
            self.killed.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn restart_kills_before_building() {
        let live = Rc::new(Cell::new(0));
        let killed = Rc::new(RefCell::new(Vec::new()));
        let mut slot = HoverSlot::new();

        slot.restart(|| Some(Probe::new(1, &live, &killed)));
        slot.restart(|| {
            assert_eq!(live.get(), 0, "previous sequence still alive while building");
            Some(Probe::new(2, &live, &killed))
        });

        assert_eq!(live.get(), 1);
        assert_eq!(*killed.borrow(), vec![1]);
    }

    #[test]
    fn rapid_alternation_leaves_only_last_sequence() {
        let live = Rc::new(Cell::new(0));
        let killed = Rc::new(RefCell::new(Vec::new()));
        let mut slot = HoverSlot::new();

        for id in 0..20 {
            slot.restart(|| Some(Probe::new(id, &live, &killed)));
            assert_eq!(live.get(), 1);
        }
        assert_eq!(killed.borrow().len(), 19);
        assert_eq!(slot.current.as_ref().map(|p| p.id), Some(19));

        slot.clear();
        assert_eq!(live.get(), 0);
        assert!(!slot.is_active());
    }

    #[test]
    fn missing_target_leaves_slot_empty() {
        let live = Rc::new(Cell::new(0));
        let killed = Rc::new(RefCell::new(Vec::new()));
        let mut slot = HoverSlot::new();
        slot.restart(|| Some(Probe::new(1, &live, &killed)));
        slot.restart(|| None::<Probe>);
        assert!(!slot.is_active());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn enter_roll_moves_primary_out_first() {
        let tl = roll_swap("top", "bottom", Axis::Vertical, false, Roll::Enter);
        let tweens = tl.tweens();
        assert_eq!(tweens[0].target, "top");
        assert_eq!(tweens[0].to.y, Some(crate::motion::Length::Percent(-100.0)));
        assert_eq!(tweens[1].target, "bottom");
        assert_eq!(tweens[1].from.as_ref().and_then(|p| p.y), Some(crate::motion::Length::Percent(100.0)));
        assert!((tweens[1].start - 0.1).abs() < 1e-9);
        // Every step states its starting values.
        assert!(tweens.iter().all(|t| t.from.is_some()));
    }

    #[test]
    fn leave_roll_reverses_and_fades() {
        let tl = roll_swap("right", "left", Axis::Horizontal, true, Roll::Leave);
        let tweens = tl.tweens();
        assert_eq!(tweens[0].target, "left");
        assert_eq!(tweens[0].to.x, Some(crate::motion::Length::Percent(100.0)));
        assert_eq!(tweens[0].to.opacity, Some(0.0));
        assert_eq!(tweens[1].target, "right");
        assert_eq!(tweens[1].from.as_ref().and_then(|p| p.opacity), Some(0.0));
        assert_eq!(tweens[1].to.x, Some(crate::motion::Length::Percent(0.0)));
    }
}
