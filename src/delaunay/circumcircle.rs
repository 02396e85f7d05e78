//! 外接圆判定
//!
//! 用垂直平分线交点公式求外心：
//!
//! ```text
//! v1 = B - A,  v2 = C - A
//! cross = 2 * (v1.x * v2.y - v1.y * v2.x)
//! q1 = |v1|²,  q2 = |v2|²
//! center = A + ((v2.y*q1 - v1.y*q2) / cross, (v1.x*q2 - v2.x*q1) / cross)
//! radius² = |center - A|²
//! ```
//!
//! 共线三角形（`cross == 0`）没有外接圆，判定为不包含任何点。

use crate::delaunay::point::Point;
use serde::{Deserialize, Serialize};

/// 外接圆：圆心与半径的平方
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circumcircle {
    pub center: Point,
    pub radius_sq: f64,
}

impl Circumcircle {
    /// 点是否严格位于圆内（恰好在圆上不算）
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.distance_sq(self.center) < self.radius_sq
    }
}

/// 计算三角形 `(a, b, c)` 的外接圆
///
/// 三点共线或结果不是有限值时返回 `None`。
pub fn circumcircle(a: Point, b: Point, c: Point) -> Option<Circumcircle> {
    let v1 = b - a;
    let v2 = c - a;

    let cross = 2.0 * v1.cross(v2);
    if cross == 0.0 {
        return None;
    }

    let q1 = v1.length_sq();
    let q2 = v2.length_sq();

    let offset = Point::new(
        (v2.y * q1 - v1.y * q2) / cross,
        (v1.x * q2 - v2.x * q1) / cross,
    );
    let center = a + offset;
    let radius_sq = offset.length_sq();

    if !center.is_finite() || !radius_sq.is_finite() {
        return None;
    }

    Some(Circumcircle { center, radius_sq })
}

/// 判断一个点是否严格位于三角形的外接圆内
///
/// 退化（共线）三角形永远返回 `false`。
pub fn point_in_circumcircle(point: Point, triangle: [Point; 3]) -> bool {
    let [a, b, c] = triangle;
    match circumcircle(a, b, c) {
        Some(circle) => circle.contains(point),
        None => {
            log::trace!("degenerate triangle {:?}, treated as empty circumcircle", triangle);
            false
        }
    }
}
