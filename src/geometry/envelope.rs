use crate::math::{Point2, Vector2};

/// An axis-aligned rectangle in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Lower-left corner.
    pub min: Point2,
    /// Upper-right corner.
    pub max: Point2,
}

impl Envelope {
    /// Creates an envelope from two corners, normalising their order.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Grows the envelope to include `p`.
    pub fn include(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns a copy scaled about its centre by `factor`.
    ///
    /// `factor = 1` leaves the envelope unchanged; `factor = 2` doubles both
    /// width and height.
    #[must_use]
    pub fn expanded(&self, factor: f64) -> Self {
        let c = self.center();
        let half: Vector2 = (self.max - self.min) * (factor * 0.5);
        Self::new(c - half, c + half)
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalises_corners() {
        let e = Envelope::new(Point2::new(4.0, 1.0), Point2::new(0.0, 3.0));
        assert_eq!(e.min, Point2::new(0.0, 1.0));
        assert_eq!(e.max, Point2::new(4.0, 3.0));
        assert!((e.width() - 4.0).abs() < 1e-12);
        assert!((e.height() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn expanded_about_center() {
        let e = Envelope::new(Point2::new(0.0, 0.0), Point2::new(2.0, 4.0));
        let big = e.expanded(2.0);
        assert_eq!(big.center(), e.center());
        assert!((big.width() - 4.0).abs() < 1e-12);
        assert!((big.height() - 8.0).abs() < 1e-12);
        assert!(big.contains(&Point2::new(-0.5, -1.0)));
        assert!(!e.contains(&Point2::new(-0.5, -1.0)));
    }
}
