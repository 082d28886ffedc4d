//! Animation and positioning lifecycles shared by the storefront sections.

pub mod entrance;
pub mod hover;
pub mod intro;
pub mod panel;
pub mod reveal;

pub use entrance::{use_entrance, EntranceBuilder};
pub use hover::{roll_builder, use_hover_timeline, Axis, HoverSlot, HoverTrigger, Roll, TimelineBuilder};
pub use intro::{use_intro_ready, IntroAction, IntroContext, IntroState};
pub use panel::{
    popover_transition, use_anchored_position, use_hover_intent, use_outside_click, use_panel_transition,
    AnchorPosition, HoverIntent, PanelAction, PanelGroup, PanelOpenState,
};
pub use reveal::{use_reveal_once, use_revealed};
