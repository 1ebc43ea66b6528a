use std::collections::VecDeque;

use super::types::{FieldSize, Point};

const INITIAL_LENGTH: usize = 3;

/// Segments in head-to-tail order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    /// Head at the field center, body extending to the left.
    pub fn new(field_size: &FieldSize) -> Self {
        // A 3-wide field puts the tail one cell past the left edge.
        let body = std::iter::successors(Some(field_size.center()), |point| Some(point.left()))
            .take(INITIAL_LENGTH)
            .map(|point| field_size.wrap(point))
            .collect();

        Self { body }
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: Vec<Point>) -> Self {
        assert!(segments.len() >= INITIAL_LENGTH);
        Self {
            body: segments.into(),
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    /// Segments behind the head.
    pub fn body(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().skip(1).copied()
    }

    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// Every segment takes its predecessor's place and the tail cell is vacated.
    pub fn advance(&mut self, new_head: Point) {
        self.body.push_front(new_head);
        self.body.pop_back();
    }

    pub fn grow(&mut self, point: Point) {
        self.body.push_back(point);
    }

    pub fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.body().any(|segment| segment == head)
    }
}
