//! Render contract between the playback controller and whatever draws bars
//!
//! The controller calls [`Renderer::draw`] after every mutation and after every
//! highlight change. Highlights carry explicit indices so a renderer never has
//! to look up its own drawn elements by position.

use std::time::Duration;

/// Why a pair of bars is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    /// The pair is about to be compared
    Compare,
    /// The pair has just been exchanged
    Swap,
}

/// A pair of adjacent bars to emphasize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub pair: (usize, usize),
    pub kind: HighlightKind,
}

impl Highlight {
    pub fn compare(pair: (usize, usize)) -> Self {
        Self {
            pair,
            kind: HighlightKind::Compare,
        }
    }

    pub fn swap(pair: (usize, usize)) -> Self {
        Self {
            pair,
            kind: HighlightKind::Swap,
        }
    }

    /// Whether bar `index` is part of this highlight
    pub fn contains(&self, index: usize) -> bool {
        self.pair.0 == index || self.pair.1 == index
    }
}

/// How the renderer should move from the previous frame to this one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Jump straight to the new values
    Instant,
    /// Interpolate bar heights over the given duration
    Animated(Duration),
}

/// Draws the dataset as one bar per element
pub trait Renderer {
    fn draw(&mut self, values: &[u32], highlight: Option<Highlight>, transition: Transition);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_contains_only_its_pair() {
        let highlight = Highlight::compare((3, 4));
        assert!(highlight.contains(3));
        assert!(highlight.contains(4));
        assert!(!highlight.contains(2));
        assert!(!highlight.contains(5));
        assert_eq!(Highlight::swap((3, 4)).kind, HighlightKind::Swap);
    }
}
