use crate::delaunay::point::VertexId;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// 边：两个不同顶点组成的无序对
///
/// 相等性与顺序无关，`Edge::new(a, b) == Edge::new(b, a)`。
/// 存储顺序保留下来，用于保持新三角形的绕向。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self { a, b }
    }

    /// 规范化表示（小索引在前）
    #[inline]
    pub fn key(&self) -> (VertexId, VertexId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    /// 边是否以 `v` 为端点
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// 三角形：三个顶点索引的有序三元组
///
/// 顶点顺序只影响渲染，不影响相等性和哈希。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [VertexId; 3],
}

impl Triangle {
    /// 创建新的三角形
    pub fn new(vertices: [VertexId; 3]) -> Self {
        Self { vertices }
    }

    /// 按顶点索引排序后的表示，用于比较和哈希
    pub fn sorted(&self) -> [VertexId; 3] {
        let mut v = self.vertices;
        v.sort_unstable();
        v
    }

    /// 三角形是否以 `v` 为顶点
    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    /// 三条边 `(v0,v1)`, `(v1,v2)`, `(v2,v0)`
    pub fn edges(&self) -> [Edge; 3] {
        let [v0, v1, v2] = self.vertices;
        [Edge::new(v0, v1), Edge::new(v1, v2), Edge::new(v2, v0)]
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn v(i: usize) -> VertexId {
        VertexId(i)
    }

    #[test]
    fn test_edge_equality_ignores_order() {
        assert_eq!(Edge::new(v(1), v(2)), Edge::new(v(2), v(1)));
        assert_ne!(Edge::new(v(1), v(2)), Edge::new(v(1), v(3)));

        let mut set = HashSet::new();
        set.insert(Edge::new(v(4), v(7)));
        assert!(set.contains(&Edge::new(v(7), v(4))));
    }

    #[test]
    fn test_triangle_equality_ignores_order() {
        let t1 = Triangle::new([v(0), v(1), v(2)]);
        let t2 = Triangle::new([v(2), v(0), v(1)]);
        let t3 = Triangle::new([v(1), v(0), v(2)]);
        assert_eq!(t1, t2);
        assert_eq!(t1, t3);
        assert_ne!(t1, Triangle::new([v(0), v(1), v(3)]));

        let set: HashSet<Triangle> = [t1, t2, t3].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_triangle_edges_keep_winding() {
        let t = Triangle::new([v(5), v(3), v(9)]);
        let edges = t.edges();
        assert_eq!((edges[0].a, edges[0].b), (v(5), v(3)));
        assert_eq!((edges[1].a, edges[1].b), (v(3), v(9)));
        assert_eq!((edges[2].a, edges[2].b), (v(9), v(5)));
        assert!(t.contains_vertex(v(9)));
        assert!(!t.contains_vertex(v(4)));
    }
}
