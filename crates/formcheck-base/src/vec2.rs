use std::ops::{Add, Div, Sub};

/// A 2D vector or point. Pixel coordinates use the image convention:
/// origin at the top-left corner, `y` growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// Scalar divide
impl<T: Div<Output = T> + Copy> Div<T> for Vec2<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Vec2<f32> {
    /// Both coordinates are neither NaN nor infinite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_f64(self) -> Vec2<f64> {
        Vec2::new(self.x as f64, self.y as f64)
    }
}

impl Vec2<f64> {
    /// Direction of this vector measured from the +x axis, in radians (-π, π].
    pub fn heading(self) -> f64 {
        self.y.atan2(self.x)
    }
}
