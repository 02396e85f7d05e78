//! 增量 Delaunay 三角剖分模块
//!
//! 本模块实现 Bowyer–Watson 增量插入算法：
//! - **外接圆判定**: 点是否严格位于三角形外接圆内
//! - **边界提取**: 通过边抵消求出待删除三角形区域的边界多边形
//! - **三角剖分器**: 超级三角形初始化、逐点插入、超级三角形移除
//!
//! # 架构概览
//!
//! ```text
//!   输入点集 (&[Point])
//!          │
//!          ▼
//! ┌────────────────────────┐
//! │ setup_super_triangle() │  ── 包含所有点的超级三角形
//! └───────────┬────────────┘
//!             │
//!             ▼  对每个点
//! ┌────────────────────────┐      ┌────────────────────────┐
//! │    insert_point()      │ ───▶ │ point_in_circumcircle  │ 坏 / 好 三角形
//! │                        │ ───▶ │ boundary_of            │ 边界边
//! └───────────┬────────────┘      └────────────────────────┘
//!             │
//!             ▼
//! ┌────────────────────────┐
//! │ remove_super_triangle()│  ── 删除与超级顶点相连的三角形
//! └───────────┬────────────┘
//!             │
//!             ▼
//!      三角形列表 (&[Triangle])
//! ```
//!
//! # 使用示例
//!
//! ```
//! use bowyer_watson::delaunay::{Point, Triangulator};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//! ];
//!
//! let mut triangulator = Triangulator::new();
//! triangulator.setup_super_triangle(&points)?;
//! for &point in &points {
//!     triangulator.insert_point(point)?;
//!     // 每一步之后都可以读取 triangulator.triangles() 用于渲染
//! }
//! triangulator.remove_super_triangle();
//!
//! assert_eq!(triangulator.triangles().len(), 2);
//! # Ok::<(), bowyer_watson::delaunay::TriangulationError>(())
//! ```
//!
//! # 模块结构
//!
//! - `point` / `triangle`: 点、顶点索引、边、三角形
//! - `circumcircle`: 外接圆判定
//! - `boundary`: 边界边提取
//! - `triangulator`: 三角剖分器状态机
//! - `utils`: 验证和辅助工具

mod boundary;
mod circumcircle;
mod config;
mod error;
mod point;
mod triangle;
mod triangulator;
mod utils;


// ============================================================================
// 公开 API
// ============================================================================

/// 几何基本类型
pub use point::{Point, VertexId};
pub use triangle::{Edge, Triangle};

/// 外接圆判定
pub use circumcircle::{circumcircle, point_in_circumcircle, Circumcircle};

/// 边界边提取
pub use boundary::boundary_of;

/// 三角剖分器及一次性剖分函数
pub use triangulator::{triangulate, triangulate_with_config, Triangulator, TriangulatorState};

/// 配置与错误类型
pub use config::TriangulatorConfig;
pub use error::{Result, TriangulationError};

/// Delaunay 验证与几何辅助函数
pub use utils::{
    bounding_box, convex_hull_size, find_delaunay_violations, has_duplicate_triangles,
    point_strictly_in_triangle, signed_area, validate_delaunay,
};
