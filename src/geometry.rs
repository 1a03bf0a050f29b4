/// An axis-aligned rectangle: a position plus a size, all in unsigned integer
/// units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub(crate) pos: (u32, u32),
    pub(crate) size: (u32, u32),
}

impl Rect {
    pub(crate) fn new(pos: (u32, u32), size: (u32, u32)) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        self.pos
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn min(&self) -> (u32, u32) {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> (u32, u32) {
        (self.pos.0 + self.size.0, self.pos.1 + self.size.1)
    }

    /// Tells whether two rectangles overlap with strictly positive area.
    /// Rectangles that merely share an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();

        self.pos.0 < b_max.0 && other.pos.0 < a_max.0 && self.pos.1 < b_max.1 && other.pos.1 < a_max.1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn overlapping() {
        let a = Rect::new((0, 0), (10, 10));
        let b = Rect::new((5, 5), (10, 10));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new((0, 0), (10, 10));
        let b = Rect::new((10, 0), (10, 10));
        let c = Rect::new((0, 10), (10, 10));
        let d = Rect::new((10, 10), (1, 1));

        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&d));
    }

    #[test]
    fn contained() {
        let outer = Rect::new((0, 0), (100, 100));
        let inner = Rect::new((20, 30), (5, 5));

        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }
}
