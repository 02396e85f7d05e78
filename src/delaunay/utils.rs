//! Delaunay 三角剖分工具函数模块
//!
//! 提供几何辅助计算和验证功能。

use crate::delaunay::circumcircle::point_in_circumcircle;
use crate::delaunay::point::{Point, VertexId};
use crate::delaunay::triangle::Triangle;
use crate::delaunay::triangulator::Triangulator;
use std::collections::HashSet;

// ============================================================================
// 几何辅助
// ============================================================================

/// 点集的轴对齐包围盒 `(min, max)`，空点集返回 `None`
pub fn bounding_box(points: &[Point]) -> Option<(Point, Point)> {
    let first = *points.first()?;
    let mut min = first;
    let mut max = first;

    for point in &points[1..] {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
    }

    Some((min, max))
}

/// 三角形的有向面积（逆时针为正）
#[inline]
pub fn signed_area(triangle: [Point; 3]) -> f64 {
    let [a, b, c] = triangle;
    0.5 * (b - a).cross(c - a)
}

/// 点是否严格位于三角形内部（在边上不算），与顶点顺序无关
pub fn point_strictly_in_triangle(point: Point, triangle: [Point; 3]) -> bool {
    let [a, b, c] = triangle;
    let d1 = (b - a).cross(point - a);
    let d2 = (c - b).cross(point - b);
    let d3 = (a - c).cross(point - c);

    (d1 > 0.0 && d2 > 0.0 && d3 > 0.0) || (d1 < 0.0 && d2 < 0.0 && d3 < 0.0)
}

// ============================================================================
// 验证
// ============================================================================

/// 找出所有违反 Delaunay 性质的 (三角形, 顶点) 组合
///
/// 只检查已插入的真实点：对每个三角形，任何不是其顶点的已插入点
/// 都不能严格位于其外接圆内。
pub fn find_delaunay_violations(triangulator: &Triangulator) -> Vec<(Triangle, VertexId)> {
    let inserted: Vec<(VertexId, Point)> = triangulator.inserted_vertices().collect();
    let mut violations = Vec::new();

    for triangle in triangulator.triangles() {
        let corners = triangulator.corners(triangle);
        for &(id, point) in &inserted {
            if triangle.contains_vertex(id) {
                continue;
            }
            if point_in_circumcircle(point, corners) {
                violations.push((*triangle, id));
            }
        }
    }

    violations
}

/// 验证三角剖分结果是否满足 Delaunay 性质
///
/// # 示例
/// ```ignore
/// let triangulator = triangulate(&points)?;
/// assert!(validate_delaunay(&triangulator));
/// ```
pub fn validate_delaunay(triangulator: &Triangulator) -> bool {
    let violations = find_delaunay_violations(triangulator);
    for (triangle, id) in &violations {
        log::warn!("{} lies inside the circumcircle of {:?}", id, triangle.vertices);
    }
    violations.is_empty()
}

/// 三角形列表中是否存在顶点集合相同的两个三角形
pub fn has_duplicate_triangles(triangles: &[Triangle]) -> bool {
    let mut seen = HashSet::with_capacity(triangles.len());
    triangles.iter().any(|t| !seen.insert(*t))
}

/// 计算点集凸包的边界点数量
///
/// 落在凸包边上的共线点也计入，重复坐标只算一次。
///
/// 理论上，对于 n 个点（其中 k 个在凸包边界上），
/// Delaunay 三角剖分产生的三角形数为 `2n - 2 - k`。
/// 全部共线的点集没有三角形，该公式不适用。
pub fn convex_hull_size(points: &[Point]) -> usize {
    let corners = hull_corners(points);
    if corners.len() < 2 {
        return corners.len();
    }

    let edges: Vec<(Point, Point)> = corners
        .iter()
        .zip(corners.iter().cycle().skip(1))
        .map(|(&a, &b)| (a, b))
        .collect();

    let mut seen = HashSet::new();
    points
        .iter()
        .filter(|p| seen.insert((p.x.to_bits(), p.y.to_bits())))
        .filter(|&&p| edges.iter().any(|&(a, b)| on_segment(p, a, b)))
        .count()
}

/// 点是否落在线段 `ab` 上（含端点）
fn on_segment(p: Point, a: Point, b: Point) -> bool {
    (b - a).cross(p - a) == 0.0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// 凸包的角点（逆时针），使用 Graham 扫描，共线点被剔除
fn hull_corners(points: &[Point]) -> Vec<Point> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    // 找到最下方（其次最左）的点作为参考点
    let mut origin = *first;
    for p in &points[1..] {
        if p.y < origin.y || (p.y == origin.y && p.x < origin.x) {
            origin = *p;
        }
    }

    // 按极角排序，极角相同时近的在前
    let mut others: Vec<Point> = points.iter().copied().filter(|p| *p != origin).collect();
    others.sort_by(|a, b| {
        let da = *a - origin;
        let db = *b - origin;
        da.y
            .atan2(da.x)
            .total_cmp(&db.y.atan2(db.x))
            .then(da.length_sq().total_cmp(&db.length_sq()))
    });

    let mut hull = vec![origin];
    for p in others {
        if hull.last() == Some(&p) {
            continue;
        }
        while hull.len() >= 2 {
            let n = hull.len();
            let turn = (hull[n - 1] - hull[n - 2]).cross(p - hull[n - 1]);
            if turn > 0.0 {
                break;
            }
            hull.pop();
        }
        hull.push(p);
    }

    hull
}
