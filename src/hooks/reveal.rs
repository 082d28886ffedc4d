use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::config::REVEAL_START;
use crate::dom::{self, ListenerGuard, Rect};
use crate::motion;

/// Fires once, the first time an element's top edge is at or above
/// `threshold` of the viewport height. Jumping past the threshold counts.
#[derive(Debug)]
pub struct RevealLatch {
    threshold: f64,
    fired: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, fired: false }
    }

    pub fn observe(&mut self, rect: Rect, viewport_height: f64) -> bool {
        if self.fired || rect.top > viewport_height * self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Calls `on_reveal` once when `node` scrolls to `threshold`, then stops
/// listening. Checks immediately on mount as well.
#[hook]
pub fn use_reveal_once(node: NodeRef, threshold: f64, on_reveal: Callback<()>) {
    use_effect_with_deps(
        move |(node, threshold)| {
            let destructor: Box<dyn FnOnce()> = if let Some(target) = motion::element(node) {
                let latch = Rc::new(RefCell::new(RevealLatch::new(*threshold)));
                let check = move || -> bool {
                    let Some(height) = dom::viewport_height() else {
                        return false;
                    };
                    let fired = latch.borrow_mut().observe(dom::rect_of(&target), height);
                    if fired {
                        on_reveal.emit(());
                    }
                    fired
                };

                if check() {
                    Box::new(|| ())
                } else {
                    let slot: Rc<RefCell<Option<ListenerGuard>>> = Rc::new(RefCell::new(None));
                    let listener = {
                        let slot = slot.clone();
                        ListenerGuard::on_window("scroll", move |_| {
                            if check() {
                                if let Some(guard) = slot.borrow().as_ref() {
                                    guard.detach();
                                }
                            }
                        })
                    };
                    match listener {
                        Ok(guard) => *slot.borrow_mut() = Some(guard),
                        Err(e) => warn!("Reveal observer not registered: {}", e),
                    }
                    Box::new(move || {
                        slot.borrow_mut().take();
                    })
                }
            } else {
                Box::new(|| ())
            };
            move || destructor()
        },
        (node, threshold),
    );
}

/// `true` once `node` has been revealed; never flips back.
#[hook]
pub fn use_revealed(node: NodeRef) -> bool {
    let revealed = use_state(|| false);
    let setter = revealed.setter();
    use_reveal_once(node, REVEAL_START, Callback::from(move |_| setter.set(true)));
    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(top: f64) -> Rect {
        Rect::new(0.0, top, 100.0, 200.0)
    }

    #[test]
    fn fires_when_top_crosses_threshold() {
        let mut latch = RevealLatch::new(0.8);
        assert!(!latch.observe(at(900.0), 1000.0));
        assert!(!latch.observe(at(801.0), 1000.0));
        assert!(latch.observe(at(800.0), 1000.0));
        assert!(latch.has_fired());
    }

    #[test]
    fn fires_exactly_once_across_recrossings() {
        let mut latch = RevealLatch::new(0.8);
        let tops = [950.0, 700.0, 950.0, 600.0, 1200.0, -400.0, 500.0];
        let fired = tops.iter().filter(|top| latch.observe(at(**top), 1000.0)).count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn already_scrolled_past_fires_immediately() {
        let mut latch = RevealLatch::new(0.8);
        assert!(latch.observe(at(-3000.0), 1000.0));
    }
}
