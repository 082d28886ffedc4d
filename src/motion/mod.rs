//! Timeline animations on top of the Web Animations API.
//!
//! A [`Timeline`] is built from tweens with relative positions, then played on
//! real elements, yielding an [`AnimationHandle`] that owns the running
//! animations.

mod ease;
mod handle;
mod props;
mod timeline;

pub use ease::Ease;
pub use handle::{set, AnimationHandle};
pub use props::{Keyframe, Length, Props};
pub use timeline::{Position, Timeline, Timing, Tween};

use web_sys::Element;
use yew::NodeRef;

/// Resolves a ref to its element, `None` while unmounted.
pub fn element(node: &NodeRef) -> Option<Element> {
    node.cast::<Element>()
}
