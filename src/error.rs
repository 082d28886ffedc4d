use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the animation and DOM plumbing. None of these ever reach the
/// user: callers log them and the affected animation simply does not play.
#[derive(Debug, Error)]
pub enum MotionError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("element is not an HtmlElement")]
    NotStylable,
    #[error("failed to encode keyframes: {0}")]
    Encode(#[from] serde_wasm_bindgen::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for MotionError {
    fn from(value: JsValue) -> Self {
        MotionError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Reasons a newsletter address is turned away before it is logged.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Please enter your email address.")]
    Blank,
    #[error("That doesn't look like an email address.")]
    MissingAt,
}
