use crate::delaunay::point::{Point, VertexId};
use crate::delaunay::triangulator::TriangulatorState;
use thiserror::Error;

/// 三角剖分操作的错误类型
///
/// 任何返回 `Err` 的操作都不会修改网格。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TriangulationError {
    /// 用空点集创建超级三角形
    #[error("cannot build a super-triangle from an empty point set")]
    EmptyPointSet,
    /// 坐标包含 NaN 或无穷大
    #[error("point {0} has a non-finite coordinate")]
    NonFinitePoint(Point),
    /// 在错误的状态下调用操作
    #[error("`{operation}` is not allowed while the triangulator is {state:?}")]
    InvalidState {
        operation: &'static str,
        state: TriangulatorState,
    },
    /// 插入点不在超级三角形内部
    #[error("point {0} is not strictly inside the super-triangle")]
    OutsideSuperTriangle(Point),
    /// 插入点与已插入的顶点坐标重合
    #[error("point {point} coincides with inserted vertex {existing}")]
    DuplicatePoint { point: Point, existing: VertexId },
    /// 没有任何三角形的外接圆包含插入点
    #[error("no triangle's circumcircle contains point {0}")]
    NoEnclosingTriangle(Point),
    /// 配置参数无效
    #[error("invalid triangulator config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T, E = TriangulationError> = std::result::Result<T, E>;
