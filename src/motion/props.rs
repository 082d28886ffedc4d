use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    pub fn css(&self) -> String {
        match self {
            Length::Px(v) => format!("{}px", v),
            Length::Percent(v) => format!("{}%", v),
        }
    }
}

/// A set of animatable visual properties. Unset fields are left alone.
///
/// `x`, `y`, `scale` and `rotation` collapse into one CSS `transform`, so a
/// keyframe that sets any of them resets the others to their identity value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    pub opacity: Option<f64>,
    pub x: Option<Length>,
    pub y: Option<Length>,
    pub scale: Option<f64>,
    pub rotation: Option<f64>,
    pub blur: Option<f64>,
    pub clip_path: Option<&'static str>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn x_px(mut self, value: f64) -> Self {
        self.x = Some(Length::Px(value));
        self
    }

    pub fn x_percent(mut self, value: f64) -> Self {
        self.x = Some(Length::Percent(value));
        self
    }

    pub fn y_px(mut self, value: f64) -> Self {
        self.y = Some(Length::Px(value));
        self
    }

    pub fn y_percent(mut self, value: f64) -> Self {
        self.y = Some(Length::Percent(value));
        self
    }

    pub fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn blur(mut self, px: f64) -> Self {
        self.blur = Some(px);
        self
    }

    pub fn clip_path(mut self, polygon: &'static str) -> Self {
        self.clip_path = Some(polygon);
        self
    }

    pub fn transform(&self) -> Option<String> {
        if self.x.is_none() && self.y.is_none() && self.scale.is_none() && self.rotation.is_none() {
            return None;
        }
        let x = self.x.unwrap_or(Length::Px(0.0)).css();
        let y = self.y.unwrap_or(Length::Px(0.0)).css();
        let mut transform = format!("translate({}, {})", x, y);
        if let Some(scale) = self.scale {
            transform.push_str(&format!(" scale({})", scale));
        }
        if let Some(rotation) = self.rotation {
            transform.push_str(&format!(" rotate({}deg)", rotation));
        }
        Some(transform)
    }

    pub fn filter(&self) -> Option<String> {
        self.blur.map(|px| format!("blur({}px)", px))
    }

    pub fn keyframe(&self) -> Keyframe {
        Keyframe {
            opacity: self.opacity,
            transform: self.transform(),
            filter: self.filter(),
            clip_path: self.clip_path.map(str::to_string),
        }
    }

    /// CSS property/value pairs for writing the props as inline style.
    pub fn style_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(opacity) = self.opacity {
            pairs.push(("opacity", opacity.to_string()));
        }
        if let Some(transform) = self.transform() {
            pairs.push(("transform", transform));
        }
        if let Some(filter) = self.filter() {
            pairs.push(("filter", filter));
        }
        if let Some(clip) = self.clip_path {
            pairs.push(("clip-path", clip.to_string()));
        }
        pairs
    }
}

/// One Web Animations keyframe, as handed to `Element.animate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Keyframe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(rename = "clipPath", skip_serializing_if = "Option::is_none")]
    pub clip_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn transform_combines_translate_scale_rotate() {
        let props = Props::new().y_px(20.0).scale(0.3).rotation(-5.0);
        assert_eq!(
            props.transform().as_deref(),
            Some("translate(0px, 20px) scale(0.3) rotate(-5deg)")
        );
    }

    #[test]
    fn percent_translation() {
        let props = Props::new().y_percent(-100.0);
        assert_eq!(props.transform().as_deref(), Some("translate(0px, -100%)"));
    }

    #[test]
    fn opacity_only_has_no_transform() {
        let props = Props::new().opacity(0.0);
        assert_eq!(props.transform(), None);
        assert_eq!(props.style_pairs(), vec![("opacity", "0".to_string())]);
    }

    #[test]
    fn keyframe_carries_filter_and_clip() {
        let frame = Props::new()
            .blur(10.0)
            .clip_path("polygon(0 0, 100% 0, 100% 0, 0 0)")
            .keyframe();
        assert_eq!(frame.filter.as_deref(), Some("blur(10px)"));
        assert_eq!(frame.clip_path.as_deref(), Some("polygon(0 0, 100% 0, 100% 0, 0 0)"));
        assert_eq!(frame.opacity, None);
    }
}
