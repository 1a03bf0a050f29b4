//! The free-space tree backing a single packing run.
//!
//! Each node covers a rectangular region of the bin. A node is either a free
//! leaf, or occupied with up to two children that carve up the space left over
//! after an item was placed into it. Splits happen along the *placed* item's
//! edges, so later, smaller items can reuse the leftover strips.

#[derive(Debug)]
pub(crate) struct Node {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub occupied: bool,
    pub right: Option<Box<Node>>,
    pub down: Option<Box<Node>>,
}

impl Node {
    pub fn free(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            occupied: false,
            right: None,
            down: None,
        }
    }

    /// An empty tree. The first growth replaces it with a node sized to the
    /// first item.
    pub fn empty() -> Self {
        Self::free(0, 0, 0, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Finds the first free region that can hold a `w` by `h` item.
    ///
    /// Depth-first, visiting `right` before `down`, which biases placements
    /// toward the top-left. The first sufficiently large free leaf wins; no
    /// attempt is made to find a tighter fit among later candidates.
    pub fn find_fit(&mut self, w: u32, h: u32) -> Option<&mut Node> {
        if self.occupied {
            let Node { right, down, .. } = self;

            if let Some(node) = right.as_deref_mut().and_then(|node| node.find_fit(w, h)) {
                return Some(node);
            }

            down.as_deref_mut().and_then(|node| node.find_fit(w, h))
        } else if w <= self.width && h <= self.height {
            Some(self)
        } else {
            None
        }
    }

    /// Assigns a `w` by `h` item to this free region and splits off whatever
    /// is left over. Returns the item's position.
    ///
    /// The leftover to the right spans only the placed item's height; the
    /// leftover below spans the region's full width. An exact fit along an
    /// axis produces no child on that axis.
    pub fn place(&mut self, w: u32, h: u32) -> (u32, u32) {
        debug_assert!(!self.occupied, "placing into an occupied region");
        debug_assert!(w <= self.width && h <= self.height);

        self.occupied = true;

        if w < self.width {
            self.right = Some(Box::new(Node::free(self.x + w, self.y, self.width - w, h)));
        }

        if h < self.height {
            self.down = Some(Box::new(Node::free(
                self.x,
                self.y + h,
                self.width,
                self.height - h,
            )));
        }

        (self.x, self.y)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_fit_leaves_no_children() {
        let mut root = Node::free(0, 0, 10, 10);

        let pos = root.find_fit(10, 10).unwrap().place(10, 10);

        assert_eq!(pos, (0, 0));
        assert!(root.occupied);
        assert!(root.right.is_none());
        assert!(root.down.is_none());
    }

    #[test]
    fn split_tiles_the_region() {
        let mut root = Node::free(0, 0, 100, 80);

        root.find_fit(30, 20).unwrap().place(30, 20);

        let right = root.right.as_deref().unwrap();
        assert_eq!((right.x, right.y), (30, 0));
        assert_eq!((right.width, right.height), (70, 20));

        let down = root.down.as_deref().unwrap();
        assert_eq!((down.x, down.y), (0, 20));
        assert_eq!((down.width, down.height), (100, 60));
    }

    #[test]
    fn leftovers_are_reused() {
        let mut root = Node::free(0, 0, 100, 10);

        root.find_fit(60, 10).unwrap().place(60, 10);
        let pos = root.find_fit(40, 10).unwrap().place(40, 10);

        assert_eq!(pos, (60, 0));
    }

    #[test]
    fn right_subtree_is_searched_first() {
        let mut root = Node::free(0, 0, 100, 100);

        root.find_fit(50, 50).unwrap().place(50, 50);

        // Both the right strip (50, 0) and the bottom strip (0, 50) could hold
        // a 10x10 item; the right one must win.
        let pos = root.find_fit(10, 10).unwrap().place(10, 10);
        assert_eq!(pos, (50, 0));
    }

    #[test]
    fn no_fit_in_a_full_tree() {
        let mut root = Node::free(0, 0, 10, 10);
        root.find_fit(10, 10).unwrap().place(10, 10);

        assert!(root.find_fit(1, 1).is_none());
    }

    #[test]
    fn empty_tree_fits_nothing() {
        let mut root = Node::empty();

        assert!(root.is_empty());
        assert!(root.find_fit(1, 1).is_none());
    }
}
