use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// 二维点坐标
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// 创建新的点
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 长度的平方（把点当作向量）
    #[inline]
    pub fn length_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// 到另一点距离的平方
    #[inline]
    pub fn distance_sq(self, other: Point) -> f64 {
        (self - other).length_sq()
    }

    /// 二维叉积 `self.x * other.y - self.y * other.x`
    #[inline]
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// 两个坐标都是有限值
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// 顶点在三角剖分器顶点表中的稳定索引
///
/// 点的"同一性"只由索引决定，坐标相同但索引不同的两个顶点被视为不同的点。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VertexId(pub usize);

impl VertexId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_ops() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 1.0);
        assert_eq!(a - b, Point::new(2.0, 3.0));
        assert_eq!(a + b, Point::new(4.0, 5.0));
        assert_eq!(a.length_sq(), 25.0);
        assert_eq!(a.distance_sq(b), 13.0);
        assert_eq!(Point::new(1.0, 0.0).cross(Point::new(0.0, 1.0)), 1.0);
    }

    #[test]
    fn test_non_finite() {
        assert!(Point::new(0.0, 1.0).is_finite());
        assert!(!Point::new(f64::NAN, 1.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }
}
