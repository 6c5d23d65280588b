//! Axis-aligned rectangle geometry for every entity
//!
//! Screen convention: origin top-left, x grows right, y grows down.
//! `pos` is the top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test: rects that merely share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Fully scrolled past the left edge of the screen
    #[inline]
    pub fn is_off_left(&self) -> bool {
        self.right() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        // Shares the bottom edge
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Corner contact
        assert!(!a.overlaps(&Rect::new(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_separated() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(50.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, -30.0, 10.0, 10.0)));
    }

    #[test]
    fn test_off_left() {
        assert!(Rect::new(-30.0, 0.0, 30.0, 10.0).is_off_left());
        assert!(Rect::new(-40.0, 0.0, 30.0, 10.0).is_off_left());
        assert!(!Rect::new(-29.0, 0.0, 30.0, 10.0).is_off_left());
    }
}
