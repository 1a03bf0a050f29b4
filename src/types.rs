use crate::geometry::Rect;

/// An input to the packing routines.
///
/// `InputItem` is just a 2D size. Placements come back from the packer in the
/// same order the inputs went in, so consumers can associate results back to
/// their own objects by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputItem {
    pub(crate) size: (u32, u32),
}

impl InputItem {
    #[inline]
    pub fn new(size: (u32, u32)) -> Self {
        Self { size }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl From<(u32, u32)> for InputItem {
    fn from(size: (u32, u32)) -> Self {
        Self::new(size)
    }
}

impl From<&InputItem> for InputItem {
    fn from(item: &InputItem) -> Self {
        *item
    }
}

/// An item that was placed by a packing function.
///
/// `OutputItem` values correspond 1:1, in order, to the `InputItem` values
/// that were passed into the packing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputItem {
    pub(crate) rect: Rect,
}

impl OutputItem {
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.rect.size
    }

    #[inline]
    pub fn min(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn max(&self) -> (u32, u32) {
        self.rect.max()
    }
}

/// The results from running a packing function: the final bin extent and one
/// placement per input item.
///
/// The bin extent is the tight bounding box over the placements, which may be
/// smaller than the space the bin grew to internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOutput {
    pub(crate) size: (u32, u32),
    pub(crate) items: Vec<OutputItem>,
}

impl PackOutput {
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.1
    }

    #[inline]
    pub fn items(&self) -> &[OutputItem] {
        &self.items
    }
}
