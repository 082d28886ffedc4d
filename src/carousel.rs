use crate::config::{PARALLAX_BACKGROUND, PARALLAX_FOREGROUND};

/// Index into a ring of `len` slides. With no slides every move is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    /// Jumps to `index`; out-of-range requests are ignored.
    pub fn go_to(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }

    /// Horizontal offset of the slide strip, in percent of one slide.
    pub fn offset_percent(&self) -> f64 {
        0.0 - self.index as f64 * 100.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerOffsets {
    pub background: f64,
    pub foreground: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub background_factor: f64,
    pub foreground_factor: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            background_factor: PARALLAX_BACKGROUND,
            foreground_factor: PARALLAX_FOREGROUND,
        }
    }
}

impl Parallax {
    /// Vertical offsets for a scroll position. Negative scroll (overscroll
    /// bounce) is treated as zero.
    pub fn offsets(&self, scroll_y: f64) -> LayerOffsets {
        let scroll = scroll_y.max(0.0);
        LayerOffsets {
            background: scroll * self.background_factor,
            foreground: scroll * self.foreground_factor,
        }
    }
}

/// Horizontal slide position. Kept apart from the parallax shift so only the
/// slide change is eased by CSS.
pub fn strip_transform(carousel: &Carousel) -> String {
    format!("translate3d({}%, 0, 0)", carousel.offset_percent())
}

pub fn parallax_transform(offset: f64) -> String {
    format!("translate3d(0, {}px, 0)", offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_both_ways() {
        let c = Carousel::new(3);
        assert_eq!(c.prev().index(), 2);
        assert_eq!(c.next().next().next().index(), 0);
    }

    #[test]
    fn next_then_prev_n_times_returns_home() {
        for len in 1..6 {
            for start in 0..len {
                let home = Carousel::new(len).go_to(start);
                let mut c = home;
                for _ in 0..len {
                    c = c.next();
                }
                assert_eq!(c, home);
                for _ in 0..len {
                    c = c.prev();
                }
                assert_eq!(c, home);
            }
        }
    }

    #[test]
    fn index_stays_in_range() {
        let mut c = Carousel::new(4);
        let moves = [1usize, 0, 0, 2, 9, 1, 3, 0, 7, 1, 1, 1, 2];
        for (step, m) in moves.iter().enumerate() {
            c = match step % 3 {
                0 => c.next(),
                1 => c.prev(),
                _ => c.go_to(*m),
            };
            assert!(c.index() < c.len());
        }
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let c = Carousel::new(2).go_to(1);
        assert_eq!(c.go_to(2).index(), 1);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let c = Carousel::new(0);
        assert_eq!(c.next(), c);
        assert_eq!(c.prev(), c);
        assert_eq!(c.go_to(0), c);
        assert!(c.is_empty());
    }

    #[test]
    fn parallax_layers_scale_with_scroll() {
        let parallax = Parallax { background_factor: 0.4, foreground_factor: 0.15 };
        let offsets = parallax.offsets(200.0);
        assert_eq!(offsets, LayerOffsets { background: 80.0, foreground: 30.0 });
        assert_eq!(parallax.offsets(-50.0), LayerOffsets { background: 0.0, foreground: 0.0 });
    }

    #[test]
    fn transforms() {
        let c = Carousel::new(2).next();
        assert_eq!(strip_transform(&c), "translate3d(-100%, 0, 0)");
        assert_eq!(strip_transform(&c.next()), "translate3d(0%, 0, 0)");
        assert_eq!(parallax_transform(4.5), "translate3d(0, 4.5px, 0)");
    }
}
