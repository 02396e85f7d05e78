//! 在椭圆区域内随机撒点，逐帧插入并输出三角剖分统计
//!
//! 用法: `triangulate_disk [点数] [随机种子]`

use bowyer_watson::delaunay::{
    convex_hull_size, validate_delaunay, Point, Triangulator, TriangulationError,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const DEFAULT_POINT_COUNT: usize = 256;
const MIN_POINT_COUNT: usize = 3;
const MAX_POINT_COUNT: usize = 4096;

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 600.0;

/// 解析点数参数，四舍五入后限制在 [3, 4096]
///
/// 缺省或空字符串取默认值；只含空白的参数按 0 处理；无法解析的取默认值。
fn parse_point_count(arg: Option<&str>) -> usize {
    let value = match arg {
        None | Some("") => return DEFAULT_POINT_COUNT,
        Some(s) if s.trim().is_empty() => 0.0,
        Some(s) => match s.trim().parse::<f64>() {
            Ok(value) if !value.is_nan() => value,
            _ => return DEFAULT_POINT_COUNT,
        },
    };
    value
        .round()
        .clamp(MIN_POINT_COUNT as f64, MAX_POINT_COUNT as f64) as usize
}

/// 在画布内接椭圆中均匀采样，留出 2% 边距
fn sample_points(rng: &mut impl Rng, n: usize, width: f64, height: f64) -> Vec<Point> {
    let margin = 0.02 * width.min(height);
    let r = 0.5;
    let mut points = Vec::with_capacity(n);

    while points.len() < n {
        let x = margin + rng.random::<f64>() * (width - 2.0 * margin);
        let y = margin + rng.random::<f64>() * (height - 2.0 * margin);
        if (x / width - 0.5).powi(2) + (y / height - 0.5).powi(2) < r * r {
            points.push(Point::new(x, y));
        }
    }

    points
}

fn main() -> Result<(), TriangulationError> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let n = parse_point_count(args.get(1).map(String::as_str));
    let seed = args
        .get(2)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut points = sample_points(&mut rng, n, CANVAS_WIDTH, CANVAS_HEIGHT);
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    println!("Sampled {} points (seed {})", points.len(), seed);

    let mut triangulator = Triangulator::new();
    triangulator.setup_super_triangle(&points)?;

    for (frame, &point) in points.iter().enumerate() {
        triangulator.insert_point(point)?;
        log::debug!(
            "frame {}: {} triangles",
            frame + 1,
            triangulator.triangle_count()
        );
    }

    triangulator.remove_super_triangle();

    let hull = convex_hull_size(&points);
    let expected = 2 * points.len() - 2 - hull;
    println!("Triangles:          {}", triangulator.triangle_count());
    println!("Convex hull points: {}", hull);
    println!("Expected (2n-2-k):  {}", expected);
    println!("Delaunay valid:     {}", validate_delaunay(&triangulator));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_count_is_clamped() {
        assert_eq!(parse_point_count(None), 256);
        assert_eq!(parse_point_count(Some("abc")), 256);
        assert_eq!(parse_point_count(Some("1")), 3);
        assert_eq!(parse_point_count(Some("99999")), 4096);
        assert_eq!(parse_point_count(Some("10.6")), 11);
        assert_eq!(parse_point_count(Some("NaN")), 256);
    }

    #[test]
    fn blank_point_count_is_zero_not_default() {
        assert_eq!(parse_point_count(Some("")), 256);
        assert_eq!(parse_point_count(Some("  ")), 3);
        assert_eq!(parse_point_count(Some("\t")), 3);
        assert_eq!(parse_point_count(Some(" 42 ")), 42);
    }

    #[test]
    fn samples_stay_inside_ellipse() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let points = sample_points(&mut rng, 500, 800.0, 600.0);
        assert_eq!(points.len(), 500);
        for p in points {
            assert!((p.x / 800.0 - 0.5).powi(2) + (p.y / 600.0 - 0.5).powi(2) < 0.25);
        }
    }
}
