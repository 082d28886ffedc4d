use std::rc::Rc;

use yew::prelude::*;

/// Whether the page is still playing its intro. Starts `Loading`, becomes
/// `Ready` once and stays there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroState {
    Loading,
    Ready,
}

pub enum IntroAction {
    Complete,
}

impl Default for IntroState {
    fn default() -> Self {
        IntroState::Loading
    }
}

impl Reducible for IntroState {
    type Action = IntroAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match (*self, action) {
            (IntroState::Loading, IntroAction::Complete) => Rc::new(IntroState::Ready),
            (IntroState::Ready, _) => self,
        }
    }
}

pub type IntroContext = UseReducerHandle<IntroState>;

/// `true` when the intro is over, or when no intro is mounted at all.
#[hook]
pub fn use_intro_ready() -> bool {
    use_context::<IntroContext>()
        .map(|intro| *intro == IntroState::Ready)
        .unwrap_or(true)
}
