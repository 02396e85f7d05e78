use crate::delaunay::triangle::{Edge, Triangle};

/// 提取一组三角形所围区域的边界边
///
/// 每个三角形贡献三条边；与已有边相同（忽略方向）的边两两抵消，
/// 留下的就是边界多边形。结果按首次出现的顺序排列，
/// 每条边保持其所属三角形中的方向。
pub fn boundary_of(triangles: &[Triangle]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = Vec::with_capacity(triangles.len() + 2);

    for triangle in triangles {
        for edge in triangle.edges() {
            add_or_cancel(&mut edges, edge);
        }
    }

    edges
}

// 共享边在边界上出现偶数次，直接抵消
fn add_or_cancel(edges: &mut Vec<Edge>, edge: Edge) {
    if let Some(pos) = edges.iter().position(|e| *e == edge) {
        edges.remove(pos);
    } else {
        edges.push(edge);
    }
}
