use crate::delaunay::boundary::boundary_of;
use crate::delaunay::circumcircle::point_in_circumcircle;
use crate::delaunay::config::TriangulatorConfig;
use crate::delaunay::error::{Result, TriangulationError};
use crate::delaunay::point::{Point, VertexId};
use crate::delaunay::triangle::Triangle;
use crate::delaunay::utils::{bounding_box, point_strictly_in_triangle};
use serde::{Deserialize, Serialize};

/// 三角剖分器的生命周期状态
///
/// ```text
/// Empty ──setup_super_triangle──▶ Seeded ──remove_super_triangle──▶ Finalized
///   ▲                                                                  │
///   └──────────────────────────── reset ◀──────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TriangulatorState {
    /// 没有任何三角形
    #[default]
    Empty,
    /// 超级三角形已就位，可以逐点插入
    Seeded,
    /// 超级三角形已移除，只剩真实点组成的三角形
    Finalized,
}

/// 增量 Delaunay 三角剖分器（Bowyer–Watson）
///
/// 拥有顶点表和当前的三角形网格。每次插入都会整体替换三角形列表，
/// 调用方只能通过 [`Triangulator::triangles`] 读取网格。
#[derive(Debug, Clone, Default)]
pub struct Triangulator {
    config: TriangulatorConfig,
    /// 顶点表，`VertexId` 即下标。超级三角形的三个顶点排在最前面
    vertices: Vec<Point>,
    triangles: Vec<Triangle>,
    super_triangle: Option<Triangle>,
    state: TriangulatorState,
}

impl Triangulator {
    /// 使用默认配置创建空的三角剖分器
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义配置创建空的三角剖分器
    pub fn with_config(config: TriangulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    // ========================================================================
    // 状态转换
    // ========================================================================

    /// 根据完整点集创建包含所有点的超级三角形
    ///
    /// 超级三角形以点集包围盒中心为中心，宽度约为
    /// `2 * super_triangle_scale * max(width, height)`，严格包含所有输入点。
    /// 只能在 `Empty` 状态下调用。
    pub fn setup_super_triangle(&mut self, points: &[Point]) -> Result<()> {
        self.expect_state("setup_super_triangle", TriangulatorState::Empty)?;

        if let Some(&point) = points.iter().find(|p| !p.is_finite()) {
            return Err(TriangulationError::NonFinitePoint(point));
        }
        let (min, max) = bounding_box(points).ok_or(TriangulationError::EmptyPointSet)?;

        let middle = Point::new(0.5 * min.x + 0.5 * max.x, 0.5 * min.y + 0.5 * max.y);
        let extent = (max.x - min.x).max(max.y - min.y);
        let delta = if extent > 0.0 {
            extent
        } else {
            self.config.min_extent
        };
        let reach = self.config.super_triangle_scale * delta;

        let corners = [
            Point::new(middle.x - reach, middle.y - reach),
            Point::new(middle.x, middle.y + reach),
            Point::new(middle.x + reach, middle.y - reach),
        ];
        if let Some(&corner) = corners.iter().find(|p| !p.is_finite()) {
            return Err(TriangulationError::NonFinitePoint(corner));
        }

        let first = self.vertices.len();
        self.vertices.extend(corners);
        let super_triangle =
            Triangle::new([VertexId(first), VertexId(first + 1), VertexId(first + 2)]);

        self.triangles = vec![super_triangle];
        self.super_triangle = Some(super_triangle);
        self.state = TriangulatorState::Seeded;

        log::info!(
            "super-triangle ready for {} points: {} {} {}",
            points.len(),
            corners[0],
            corners[1],
            corners[2]
        );
        Ok(())
    }

    /// 插入一个点（Bowyer–Watson 单步）
    ///
    /// 1. 外接圆严格包含该点的三角形为"坏"三角形，其余为"好"三角形
    /// 2. 求坏三角形区域的边界边
    /// 3. 每条边界边与新点组成一个新三角形
    /// 4. 新网格 = 好三角形 ∪ 新三角形
    ///
    /// 返回新顶点的索引。出错时网格保持不变。
    pub fn insert_point(&mut self, point: Point) -> Result<VertexId> {
        self.expect_state("insert_point", TriangulatorState::Seeded)?;

        if !point.is_finite() {
            return Err(TriangulationError::NonFinitePoint(point));
        }

        let super_triangle = self.super_triangle.ok_or(TriangulationError::InvalidState {
            operation: "insert_point",
            state: self.state,
        })?;
        if !point_strictly_in_triangle(point, self.corners(&super_triangle)) {
            return Err(TriangulationError::OutsideSuperTriangle(point));
        }

        if let Some(existing) = self.find_inserted_vertex(point) {
            return Err(TriangulationError::DuplicatePoint { point, existing });
        }

        let (bad, good): (Vec<Triangle>, Vec<Triangle>) = self
            .triangles
            .iter()
            .copied()
            .partition(|t| point_in_circumcircle(point, self.corners(t)));

        if bad.is_empty() {
            return Err(TriangulationError::NoEnclosingTriangle(point));
        }

        let boundary = boundary_of(&bad);

        let id = VertexId(self.vertices.len());
        self.vertices.push(point);

        let mut triangles = good;
        triangles.extend(boundary.iter().map(|e| Triangle::new([e.a, e.b, id])));

        log::debug!(
            "inserted {} at {}: {} bad, {} new, {} total",
            id,
            point,
            bad.len(),
            boundary.len(),
            triangles.len()
        );

        self.triangles = triangles;
        Ok(id)
    }

    /// 依次插入多个点，遇到第一个错误即停止
    ///
    /// 已成功插入的点保留在网格中。
    pub fn insert_points(&mut self, points: &[Point]) -> Result<Vec<VertexId>> {
        points.iter().map(|&p| self.insert_point(p)).collect()
    }

    /// 移除所有与超级三角形顶点相连的三角形
    ///
    /// 未初始化或已经移除过时不做任何事。
    pub fn remove_super_triangle(&mut self) {
        if self.state != TriangulatorState::Seeded {
            log::debug!("remove_super_triangle skipped in {:?} state", self.state);
            return;
        }
        let Some(super_triangle) = self.super_triangle else {
            return;
        };

        let before = self.triangles.len();
        self.triangles.retain(|t| {
            !super_triangle
                .vertices
                .iter()
                .any(|&v| t.contains_vertex(v))
        });
        self.state = TriangulatorState::Finalized;

        log::info!(
            "super-triangle removed: {} of {} triangles remain",
            self.triangles.len(),
            before
        );
    }

    /// 清空所有三角形、顶点和超级三角形，回到 `Empty` 状态
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.super_triangle = None;
        self.state = TriangulatorState::Empty;
        log::info!("triangulator reset");
    }

    // ========================================================================
    // 只读访问
    // ========================================================================

    /// 当前的三角形列表
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn state(&self) -> TriangulatorState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &TriangulatorConfig {
        &self.config
    }

    /// 超级三角形（`reset` 之前一直保留，便于识别其顶点）
    #[inline]
    pub fn super_triangle(&self) -> Option<Triangle> {
        self.super_triangle
    }

    /// 全部顶点，包括超级三角形的三个顶点
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// 按索引查找顶点坐标
    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<Point> {
        self.vertices.get(id.index()).copied()
    }

    /// 顶点是否属于超级三角形
    pub fn is_super_vertex(&self, id: VertexId) -> bool {
        self.super_triangle.is_some_and(|t| t.contains_vertex(id))
    }

    /// 已插入的真实点（不含超级三角形顶点）
    pub fn inserted_vertices(&self) -> impl Iterator<Item = (VertexId, Point)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, &p)| (VertexId(i), p))
            .filter(|&(id, _)| !self.is_super_vertex(id))
    }

    /// 三角形三个顶点的坐标
    ///
    /// 三角形引用了不属于本剖分器的顶点时返回 `None`。
    pub fn triangle_points(&self, triangle: &Triangle) -> Option<[Point; 3]> {
        let [a, b, c] = triangle.vertices;
        Some([self.vertex(a)?, self.vertex(b)?, self.vertex(c)?])
    }

    /// 用于渲染的三角形坐标快照
    pub fn triangle_coordinates(&self) -> Vec<[Point; 3]> {
        self.triangles.iter().map(|t| self.corners(t)).collect()
    }

    /// 网格内三角形的顶点坐标，顶点索引总是来自本剖分器的顶点表
    #[inline]
    pub(crate) fn corners(&self, triangle: &Triangle) -> [Point; 3] {
        triangle.vertices.map(|v| self.vertices[v.index()])
    }

    // ========================================================================
    // 内部辅助函数
    // ========================================================================

    fn expect_state(&self, operation: &'static str, expected: TriangulatorState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(TriangulationError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    fn find_inserted_vertex(&self, point: Point) -> Option<VertexId> {
        self.inserted_vertices()
            .find(|&(_, p)| p == point)
            .map(|(id, _)| id)
    }
}

/// 对点集执行完整的 Delaunay 三角剖分
///
/// 依次执行超级三角形初始化、逐点插入和超级三角形移除。
/// 与已插入点坐标重合的点会被跳过。
pub fn triangulate(points: &[Point]) -> Result<Triangulator> {
    triangulate_with_config(points, TriangulatorConfig::default())
}

/// 使用自定义配置执行完整的三角剖分
pub fn triangulate_with_config(
    points: &[Point],
    config: TriangulatorConfig,
) -> Result<Triangulator> {
    let mut triangulator = Triangulator::with_config(config)?;
    triangulator.setup_super_triangle(points)?;

    let mut skipped = 0;
    for &point in points {
        match triangulator.insert_point(point) {
            Ok(_) => {}
            Err(TriangulationError::DuplicatePoint { existing, .. }) => {
                log::warn!("skipping duplicate of {} at {}", existing, point);
                skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    triangulator.remove_super_triangle();

    log::info!(
        "triangulated {} points ({} duplicates skipped) into {} triangles",
        points.len() - skipped,
        skipped,
        triangulator.triangle_count()
    );
    Ok(triangulator)
}
