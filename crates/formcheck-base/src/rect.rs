use crate::Vec2;
use std::ops::{Add, Mul, Sub};

/// Axis-aligned rectangle given by its top-left corner and its size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T> Rect<T> {
    pub fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl<T: Add<Output = T> + Copy> Rect<T> {
    pub fn max(&self) -> Vec2<T> {
        self.origin + self.size
    }
}

impl<T: Mul<Output = T> + Copy> Rect<T> {
    pub fn area(&self) -> T {
        self.size.x * self.size.y
    }
}

impl<T: Add<Output = T> + Sub<Output = T> + PartialOrd + Copy> Rect<T> {
    /// Overlapping region of two rectangles, or `None` if they only touch or
    /// do not meet at all.
    pub fn intersection(&self, other: Rect<T>) -> Option<Rect<T>> {
        let self_max = self.max();
        let other_max = other.max();

        let min_x = partial_max(self.origin.x, other.origin.x);
        let min_y = partial_max(self.origin.y, other.origin.y);
        let max_x = partial_min(self_max.x, other_max.x);
        let max_y = partial_min(self_max.y, other_max.y);

        if min_x < max_x && min_y < max_y {
            Some(Rect::new(
                Vec2::new(min_x, min_y),
                Vec2::new(max_x - min_x, max_y - min_y),
            ))
        } else {
            None
        }
    }
}

fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if a >= b { a } else { b }
}

fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if a <= b { a } else { b }
}
