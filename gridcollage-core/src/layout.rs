//! Layout store: ordered (image, position) pairs.
//!
//! Insertion order is draw order. Later pairs are drawn on top and win hit
//! tests, so hit testing walks the sequence from last to first.

use crate::error::LayoutError;
use crate::geometry::{fit_within, hit_test, Point, Size};
use crate::grid::GridGeometry;
use crate::loader::ensure_capacity;

/// Decoded image with a known natural size.
pub trait ImageAsset {
    fn natural_size(&self) -> Size;
}

/// One image and the top-left of the cell (or freeform drag point) it occupies.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement<I> {
    pub image: I,
    pub position: Point,
}

#[derive(Clone, Debug)]
pub struct Layout<I> {
    placements: Vec<Placement<I>>,
    capacity: usize,
}

impl<I: ImageAsset> Layout<I> {
    pub fn new(capacity: usize) -> Self {
        Self {
            placements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Placement<I>> {
        self.placements.get(index)
    }

    /// Pair at `index`. Panics when out of range, like slice indexing.
    pub fn placement(&self, index: usize) -> &Placement<I> {
        &self.placements[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement<I>> {
        self.placements.iter()
    }

    pub fn natural_sizes(&self) -> impl Iterator<Item = Size> + '_ {
        self.placements.iter().map(|p| p.image.natural_size())
    }

    /// Reject adding `incoming` pairs to `existing` ones if that exceeds capacity.
    pub fn check_capacity(&self, existing: usize, incoming: usize) -> Result<(), LayoutError> {
        ensure_capacity(existing, incoming, self.capacity)
    }

    /// Replace every pair, placing images in grid order.
    ///
    /// Positions are left at the origin when `geometry` is `None`.
    pub fn set_all(
        &mut self,
        images: Vec<I>,
        geometry: Option<&GridGeometry>,
    ) -> Result<(), LayoutError> {
        self.check_capacity(0, images.len())?;

        self.placements = images
            .into_iter()
            .enumerate()
            .map(|(i, image)| Placement {
                image,
                position: geometry.map_or(Point::ORIGIN, |g| g.slot_origin(i)),
            })
            .collect();
        Ok(())
    }

    /// Add one pair at the end with a freeform initial position.
    pub fn append(&mut self, image: I, position: Point) -> Result<usize, LayoutError> {
        self.check_capacity(self.len(), 1)?;
        self.placements.push(Placement { image, position });
        Ok(self.placements.len() - 1)
    }

    pub fn set_position(&mut self, index: usize, position: Point) -> Result<(), LayoutError> {
        let len = self.len();
        let placement = self
            .placements
            .get_mut(index)
            .ok_or(LayoutError::IndexOutOfRange { index, len })?;
        placement.position = position;
        Ok(())
    }

    /// Exchange two pairs in the sequence (and therefore in draw order).
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), LayoutError> {
        let len = self.len();
        for index in [a, b] {
            if index >= len {
                return Err(LayoutError::IndexOutOfRange { index, len });
            }
        }
        self.swap_pairs(a, b);
        Ok(())
    }

    /// Swap two in-range pairs. Panics when out of range, like slice indexing.
    pub(crate) fn swap_pairs(&mut self, a: usize, b: usize) {
        self.placements.swap(a, b);
    }

    /// Move an in-range pair. Panics when out of range, like slice indexing.
    pub(crate) fn place(&mut self, index: usize, position: Point) {
        self.placements[index].position = position;
    }

    /// Reassign every position from sequence order.
    pub fn reflow(&mut self, geometry: &GridGeometry) {
        for (i, placement) in self.placements.iter_mut().enumerate() {
            placement.position = geometry.slot_origin(i);
        }
    }

    /// Topmost pair whose fitted image contains `pointer`.
    pub fn top_hit(&self, pointer: Point, cell: Size) -> Option<usize> {
        self.placements
            .iter()
            .enumerate()
            .rev()
            .find(|(_, p)| {
                let fitted = fit_within(p.image.natural_size(), cell);
                hit_test(pointer, p.position, &fitted)
            })
            .map(|(i, _)| i)
    }

    /// First pair other than `exclude`, in index order, within half a cell of `target`.
    pub fn occupant_near(&self, target: Point, cell: Size, exclude: usize) -> Option<usize> {
        let half_w = cell.width / 2.0;
        let half_h = cell.height / 2.0;

        self.placements
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != exclude)
            .find(|(_, p)| {
                (p.position.x - target.x).abs() < half_w && (p.position.y - target.y).abs() < half_h
            })
            .map(|(i, _)| i)
    }

    pub fn clear(&mut self) {
        self.placements.clear();
    }
}
