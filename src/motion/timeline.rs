use super::ease::Ease;
use super::props::Props;

/// Where a tween is placed on its timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Position {
    /// Appended after everything already on the timeline.
    #[default]
    End,
    /// Relative to the start of the most recently added tween (`"<"`, `"<0.1"`).
    WithPrevious(f64),
    /// Relative to the current end of the timeline (`"-=0.5"`, `"+=0.2"`).
    FromEnd(f64),
    /// Absolute time in seconds.
    At(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Timing {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self { duration, delay: 0.0, ease }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    pub target: T,
    /// Explicit starting values; `None` animates from whatever is current.
    pub from: Option<Props>,
    pub to: Props,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl<T> Tween<T> {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// An ordered, possibly overlapping, set of tweens with resolved start times.
///
/// Scheduling is independent of the target type; only `Timeline<Element>` can
/// be played.
pub struct Timeline<T> {
    tweens: Vec<Tween<T>>,
    end: f64,
    last_start: f64,
    pub(crate) on_complete: Option<Box<dyn FnOnce()>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            tweens: Vec::new(),
            end: 0.0,
            last_start: 0.0,
            on_complete: None,
        }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, position: Position) -> f64 {
        let at = match position {
            Position::End => self.end,
            Position::WithPrevious(offset) => self.last_start + offset,
            Position::FromEnd(offset) => self.end + offset,
            Position::At(time) => time,
        };
        at.max(0.0)
    }

    fn push(&mut self, target: T, from: Option<Props>, to: Props, timing: Timing, position: Position) {
        let start = self.resolve(position) + timing.delay;
        self.last_start = start;
        self.end = self.end.max(start + timing.duration);
        self.tweens.push(Tween {
            target,
            from,
            to,
            start,
            duration: timing.duration,
            ease: timing.ease,
        });
    }

    pub fn to(self, target: T, to: Props, timing: Timing) -> Self {
        self.to_at(target, to, timing, Position::End)
    }

    pub fn to_at(mut self, target: T, to: Props, timing: Timing, position: Position) -> Self {
        self.push(target, None, to, timing, position);
        self
    }

    pub fn from_to(self, target: T, from: Props, to: Props, timing: Timing) -> Self {
        self.from_to_at(target, from, to, timing, Position::End)
    }

    pub fn from_to_at(mut self, target: T, from: Props, to: Props, timing: Timing, position: Position) -> Self {
        self.push(target, Some(from), to, timing, position);
        self
    }

    /// Animates every target with the same props, each one `each` seconds
    /// after the previous. The group counts as one child for `"<"` offsets.
    pub fn stagger(
        mut self,
        targets: Vec<T>,
        from: Option<Props>,
        to: Props,
        timing: Timing,
        each: f64,
        position: Position,
    ) -> Self {
        let base = self.resolve(position) + timing.delay;
        for (i, target) in targets.into_iter().enumerate() {
            let start = base + each * i as f64;
            self.end = self.end.max(start + timing.duration);
            self.tweens.push(Tween {
                target,
                from: from.clone(),
                to: to.clone(),
                start,
                duration: timing.duration,
                ease: timing.ease,
            });
        }
        self.last_start = base;
        self
    }

    /// Empty space at the end of the timeline.
    pub fn hold(mut self, seconds: f64) -> Self {
        self.last_start = self.end;
        self.end += seconds.max(0.0);
        self
    }

    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn duration(&self) -> f64 {
        self.end
    }

    pub fn tweens(&self) -> &[Tween<T>] {
        &self.tweens
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<Tween<T>>, f64, Option<Box<dyn FnOnce()>>) {
        (self.tweens, self.end, self.on_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn quick() -> Timing {
        Timing::new(0.2, Ease::Power2InOut)
    }

    fn starts<T>(timeline: &Timeline<T>) -> Vec<f64> {
        timeline
            .tweens()
            .iter()
            .map(|t| (t.start * 1000.0).round() / 1000.0)
            .collect()
    }

    #[test]
    fn appends_sequentially_by_default() {
        let tl = Timeline::new()
            .to("a", Props::new().opacity(1.0), quick())
            .to("b", Props::new().opacity(1.0), quick());
        assert_eq!(starts(&tl), vec![0.0, 0.2]);
        assert!((tl.duration() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn with_previous_overlaps_the_roll() {
        // Outgoing text rolls away while the incoming one starts 0.1s in.
        let tl = Timeline::new()
            .from_to("top", Props::new().y_percent(0.0), Props::new().y_percent(-100.0), quick())
            .from_to_at(
                "bottom",
                Props::new().y_percent(100.0),
                Props::new().y_percent(0.0),
                quick(),
                Position::WithPrevious(0.1),
            );
        assert_eq!(starts(&tl), vec![0.0, 0.1]);
        assert!((tl.duration() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn same_start_runs_simultaneously() {
        let tl = Timeline::new()
            .to("image", Props::new().scale(1.05), Timing::new(0.3, Ease::Power2Out))
            .to_at("arrow", Props::new().x_px(5.0), Timing::new(0.3, Ease::Power2Out), Position::WithPrevious(0.0));
        assert_eq!(starts(&tl), vec![0.0, 0.0]);
        assert!((tl.duration() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn intro_sequence_offsets_and_hold() {
        let slow = Timing::new(0.8, Ease::Power2InOut);
        let tl = Timeline::new()
            .to("overlay", Props::new().opacity(1.0), slow)
            .from_to_at(
                "letter",
                Props::new().opacity(0.0).scale(0.85),
                Props::new().opacity(1.0).scale(1.0),
                Timing::new(0.6, Ease::BackOut(1.2)),
                Position::FromEnd(-0.5),
            )
            .hold(0.4)
            .to("overlay", Props::new().opacity(0.0), slow);
        assert_eq!(starts(&tl), vec![0.0, 0.3, 1.3]);
        assert!((tl.duration() - 2.1).abs() < 1e-9);
    }

    #[test]
    fn delay_shifts_start() {
        let tl = Timeline::new().to("x", Props::new().opacity(1.0), Timing::new(0.5, Ease::Power2Out).delay(0.2));
        assert_eq!(starts(&tl), vec![0.2]);
        assert!((tl.duration() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn stagger_spreads_starts() {
        let tl = Timeline::new().stagger(
            vec!['a', 'b', 'c'],
            Some(Props::new().opacity(0.0)),
            Props::new().opacity(1.0),
            Timing::new(1.4, Ease::Power3Out).delay(0.5),
            0.04,
            Position::End,
        );
        assert_eq!(starts(&tl), vec![0.5, 0.54, 0.58]);
        assert!((tl.duration() - 1.98).abs() < 1e-9);
    }

    #[test]
    fn offsets_never_go_negative() {
        let tl = Timeline::new().to_at("x", Props::new().opacity(1.0), quick(), Position::FromEnd(-3.0));
        assert_eq!(starts(&tl), vec![0.0]);
    }

    #[test]
    fn empty_stagger_schedules_nothing() {
        let tl: Timeline<char> = Timeline::new().stagger(
            Vec::new(),
            None,
            Props::new().opacity(1.0),
            quick(),
            0.04,
            Position::End,
        );
        assert!(tl.is_empty());
        assert_eq!(tl.duration(), 0.0);
    }
}
