use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::motion::{self, Timeline};

pub type EntranceBuilder = fn(Vec<Element>) -> Timeline<Element>;

/// Plays a section's entrance once `go` turns true. `build` receives the
/// elements of `nodes` in order. The animation stays owned until unmount.
#[hook]
pub fn use_entrance(nodes: Vec<NodeRef>, go: bool, build: EntranceBuilder) {
    use_effect_with_deps(
        move |go| {
            let mut handle = None;
            if *go {
                let elements: Vec<Element> = nodes.iter().filter_map(motion::element).collect();
                if elements.len() == nodes.len() {
                    handle = Some(build(elements).play());
                } else {
                    debug!("Entrance skipped, {} of {} targets mounted", elements.len(), nodes.len());
                }
            }
            move || drop(handle)
        },
        go,
    );
}
