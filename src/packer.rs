use std::mem;

use crate::{
    error::Error,
    geometry::Rect,
    node::Node,
    order::packing_order,
    types::{InputItem, OutputItem, PackOutput},
};

/// Caller records that can be packed in place.
///
/// [`GrowingPacker::pack_in_place`] reads each record's size and writes the
/// assigned position back onto the record, without reordering the slice.
///
/// [`GrowingPacker::pack_in_place`]: struct.GrowingPacker.html#method.pack_in_place
pub trait PackItem {
    fn size(&self) -> (u32, u32);
    fn place_at(&mut self, position: (u32, u32));
}

/// A first-fit rectangle packer whose bin grows on demand.
///
/// The bin starts at the size of the first placed item. Whenever the next
/// item does not fit into any free region, the bin is extended to the right
/// or downward, re-rooting the free-space tree so that already-placed items
/// never move.
///
/// Growth can be bounded with `max_width` and/or `max_height`. The caps are
/// soft by default: they steer growth away from the capped direction, and are
/// exceeded only when a single item cannot fit otherwise, by the smallest
/// amount that admits it. Setting `strict_max` makes the width cap hard: the
/// bin never grows right past `max_width`, even when growing down wastes
/// space. The one exception is an item that is by itself wider than
/// `max_width`; it is placed flush at `x = 0` in a freshly grown row, and the
/// bin becomes exactly as wide as that item.
#[derive(Debug, Clone, Copy)]
pub struct GrowingPacker {
    max_width: Option<u32>,
    max_height: Option<u32>,
    strict_max: bool,
}

enum Growth {
    Right,
    Down,
}

impl GrowingPacker {
    pub fn new() -> Self {
        Self {
            max_width: None,
            max_height: None,
            strict_max: false,
        }
    }

    pub fn max_width(mut self, max_width: u32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn max_height(mut self, max_height: u32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn strict_max(mut self, strict_max: bool) -> Self {
        self.strict_max = strict_max;
        self
    }

    /// Packs a set of items, choosing a processing order appropriate for the
    /// configured caps.
    ///
    /// Accepts anything that can turn into an iterator of `InputItem`,
    /// `&InputItem`, or `(u32, u32)` sizes. The inputs themselves are not
    /// touched; placements are returned in the same order the items went in,
    /// regardless of the order they were packed in.
    pub fn pack<I>(&self, items: I) -> Result<PackOutput, Error>
    where
        I: IntoIterator,
        I::Item: Into<InputItem>,
    {
        let sizes: Vec<(u32, u32)> = items.into_iter().map(|item| item.into().size).collect();
        validate(&sizes)?;

        let order = packing_order(&sizes, self.max_width, self.max_height);
        Ok(self.run(&sizes, &order))
    }

    /// Packs items in exactly the order given, with no pre-sort.
    ///
    /// Any order yields a valid, non-overlapping packing; only density
    /// varies. Two calls with the same ordered items and the same caps
    /// produce identical placements.
    pub fn pack_ordered<I>(&self, items: I) -> Result<PackOutput, Error>
    where
        I: IntoIterator,
        I::Item: Into<InputItem>,
    {
        let sizes: Vec<(u32, u32)> = items.into_iter().map(|item| item.into().size).collect();
        validate(&sizes)?;

        let order: Vec<usize> = (0..sizes.len()).collect();
        Ok(self.run(&sizes, &order))
    }

    /// Packs the caller's own records, writing each assigned position back
    /// through [`PackItem`]. Returns the final bin size.
    ///
    /// The slice is never reordered. If any record has an invalid size, no
    /// position is written at all.
    ///
    /// [`PackItem`]: trait.PackItem.html
    pub fn pack_in_place<T: PackItem>(&self, items: &mut [T]) -> Result<(u32, u32), Error> {
        let sizes: Vec<(u32, u32)> = items.iter().map(|item| item.size()).collect();
        validate(&sizes)?;

        let order = packing_order(&sizes, self.max_width, self.max_height);
        let output = self.run(&sizes, &order);

        for (item, placed) in items.iter_mut().zip(&output.items) {
            item.place_at(placed.position());
        }

        Ok(output.size)
    }

    fn run(&self, sizes: &[(u32, u32)], order: &[usize]) -> PackOutput {
        log::trace!("Packing {} items", sizes.len());

        let mut root = Node::empty();
        let mut items = vec![
            OutputItem {
                rect: Rect::new((0, 0), (0, 0)),
            };
            sizes.len()
        ];

        for &index in order {
            let (w, h) = sizes[index];
            let pos = self.place_one(&mut root, w, h);
            items[index] = OutputItem {
                rect: Rect::new(pos, (w, h)),
            };
        }

        // The bin the tree grew to can over-allocate; report the tight
        // bounding box over the placements instead.
        let size = items.iter().fold((0, 0), |acc: (u32, u32), item| {
            let max = item.rect.max();
            (acc.0.max(max.0), acc.1.max(max.1))
        });

        log::trace!(
            "Finished packing {} items into a {}x{} bin",
            sizes.len(),
            size.0,
            size.1
        );

        PackOutput { size, items }
    }

    fn place_one(&self, root: &mut Node, w: u32, h: u32) -> (u32, u32) {
        if let Some(node) = root.find_fit(w, h) {
            log::trace!("{}x{} fits at ({}, {})", w, h, node.x, node.y);
            return node.place(w, h);
        }

        self.grow(root, w, h);

        match root.find_fit(w, h) {
            Some(node) => {
                log::trace!("{}x{} fits at ({}, {}) after growing", w, h, node.x, node.y);
                node.place(w, h)
            }
            None => unreachable!("the grown bin always admits the pending item"),
        }
    }

    /// Extends the bin so a `w` by `h` item is guaranteed to fit, re-rooting
    /// the tree so existing placements keep their coordinates.
    fn grow(&self, root: &mut Node, w: u32, h: u32) {
        if root.is_empty() {
            log::trace!("Seeding the bin at {}x{}", w, h);
            *root = Node::free(0, 0, w, h);
            return;
        }

        match self.choose_growth(root, w, h) {
            Growth::Right => {
                log::trace!("Growing right to {}x{}", root.width + w, root.height);

                let old = mem::replace(root, Node::empty());
                let strip = Node::free(old.width, 0, w, old.height);

                *root = Node {
                    x: 0,
                    y: 0,
                    width: old.width + w,
                    height: old.height,
                    occupied: true,
                    right: Some(Box::new(strip)),
                    down: Some(Box::new(old)),
                };
            }
            Growth::Down => {
                // Widening the fresh row to the item guarantees growth always
                // succeeds in one step, and is what lets an item wider than
                // the bin (or than a strict cap) land flush at x = 0.
                let width = root.width.max(w);
                log::trace!("Growing down to {}x{}", width, root.height + h);

                let old = mem::replace(root, Node::empty());
                let row = Node::free(0, old.height, width, h);

                *root = Node {
                    x: 0,
                    y: 0,
                    width,
                    height: old.height + h,
                    occupied: true,
                    right: Some(Box::new(old)),
                    down: Some(Box::new(row)),
                };
            }
        }
    }

    fn choose_growth(&self, root: &Node, w: u32, h: u32) -> Growth {
        let grown_right = (root.width + w, root.height);
        let grown_down = (root.width.max(w), root.height + h);

        // The fresh right strip spans the bin's height, so growing right can
        // only admit items no taller than the bin.
        let right_fits_item = h <= root.height;
        let right_within_cap = match self.max_width {
            Some(max) => grown_right.0 <= max,
            None => true,
        };
        let down_within_cap = match self.max_height {
            Some(max) => grown_down.1 <= max,
            None => true,
        };

        let can_grow_right = right_fits_item && right_within_cap;

        if can_grow_right && down_within_cap {
            if self.max_height.is_some() {
                Growth::Down
            } else if self.max_width.is_some() {
                Growth::Right
            } else if squarer(grown_right, grown_down) {
                Growth::Right
            } else {
                Growth::Down
            }
        } else if can_grow_right {
            Growth::Right
        } else if down_within_cap {
            Growth::Down
        } else if !self.strict_max && right_fits_item && squarer(grown_right, grown_down) {
            // Every direction breaks a cap. Without a hard cap, take
            // whichever keeps the bin squarer; under strict_max, never grow
            // right past the width cap.
            Growth::Right
        } else {
            Growth::Down
        }
    }
}

impl Default for GrowingPacker {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the result closer to square: compares the larger side of each
/// candidate bin, ties preferring `b` (growing down).
fn squarer(a: (u32, u32), b: (u32, u32)) -> bool {
    a.0.max(a.1) < b.0.max(b.1)
}

fn validate(sizes: &[(u32, u32)]) -> Result<(), Error> {
    for (index, &size) in sizes.iter().enumerate() {
        if size.0 == 0 || size.1 == 0 {
            return Err(Error::InvalidDimension { index, size });
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn grown(packer: &GrowingPacker, root_size: (u32, u32), item: (u32, u32)) -> (u32, u32) {
        let root = Node::free(0, 0, root_size.0, root_size.1);

        match packer.choose_growth(&root, item.0, item.1) {
            Growth::Right => (root.width + item.0, root.height),
            Growth::Down => (root.width.max(item.0), root.height + item.1),
        }
    }

    #[test]
    fn uncapped_growth_stays_square() {
        let packer = GrowingPacker::new();

        // Tie between 20x10 and 10x20 goes down.
        assert_eq!(grown(&packer, (10, 10), (10, 10)), (10, 20));
        // From a 10x20 bin, growing right to 20x20 beats 10x30.
        assert_eq!(grown(&packer, (10, 20), (10, 10)), (20, 20));
    }

    #[test]
    fn width_cap_steers_growth_down() {
        let packer = GrowingPacker::new().max_width(15);

        assert_eq!(grown(&packer, (10, 10), (10, 10)), (10, 20));
    }

    #[test]
    fn width_cap_allows_growing_right_within_it() {
        let packer = GrowingPacker::new().max_width(25);

        assert_eq!(grown(&packer, (10, 10), (10, 10)), (20, 10));
    }

    #[test]
    fn strict_cap_is_widened_only_by_an_oversized_item() {
        let packer = GrowingPacker::new().max_width(60).strict_max(true);

        // A 70-wide item forces the bin to exactly 70 wide.
        assert_eq!(grown(&packer, (60, 48), (70, 48)), (70, 96));
        // A 50-wide item must not.
        assert_eq!(grown(&packer, (60, 48), (50, 48)), (60, 96));
    }

    #[test]
    fn height_cap_prefers_growing_down_until_exceeded() {
        let packer = GrowingPacker::new().max_height(25);

        assert_eq!(grown(&packer, (10, 10), (10, 10)), (10, 20));
        assert_eq!(grown(&packer, (10, 20), (10, 10)), (20, 20));
    }
}
