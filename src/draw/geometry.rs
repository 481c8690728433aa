//! Geometry normalization for polygon instructions.
//!
//! Callers pass polygon vertices as a list of `[x, y]` pairs whose components
//! may be integers or floats. [`normalize_points`] flattens that into an
//! ordered `Vec<PointF>` without altering, reordering or deduplicating any
//! coordinate. Degenerate polygons (0 or 1 vertex) pass through unchanged.

use crate::error::GfxError;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// A 2D point with floating-point coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer bounding box in device units: top-left corner plus extents.
///
/// Extents are kept as given; negative values are the canvas's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Converts a list of point-like values into polygon vertices.
///
/// # Errors
/// Returns [`GfxError::MalformedGeometry`] naming the first element that is
/// not a list of exactly two numbers.
pub fn normalize_points(vertices: &[Value]) -> Result<Vec<PointF>, GfxError> {
    vertices
        .iter()
        .enumerate()
        .map(|(index, vertex)| normalize_point(index, vertex))
        .collect()
}

fn normalize_point(index: usize, vertex: &Value) -> Result<PointF, GfxError> {
    let malformed = |reason: String| GfxError::MalformedGeometry { index, reason };

    let pair = vertex
        .as_list()
        .ok_or_else(|| malformed(format!("expected an [x, y] list, got {}", vertex.kind())))?;

    let [x, y] = pair else {
        return Err(malformed(format!(
            "expected 2 coordinates, got {}",
            pair.len()
        )));
    };

    let coord = |value: &Value, axis: &str| {
        value
            .as_number()
            .ok_or_else(|| malformed(format!("{axis} must be numeric, got {}", value.kind())))
    };

    Ok(PointF::new(coord(x, "x")?, coord(y, "y")?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_keeps_order_and_coordinates() {
        let input = Value::from(vec![vec![0, 0], vec![10, 0], vec![5, 10]]);
        let points = normalize_points(input.as_list().unwrap()).unwrap();
        assert_eq!(
            points,
            vec![
                PointF::new(0.0, 0.0),
                PointF::new(10.0, 0.0),
                PointF::new(5.0, 10.0)
            ]
        );
    }

    #[test]
    fn mixed_int_and_float_components() {
        let input = vec![Value::List(vec![Value::Float(1.5), Value::Int(-2)])];
        let points = normalize_points(&input).unwrap();
        assert_eq!(points, vec![PointF::new(1.5, -2.0)]);
    }

    #[test]
    fn degenerate_polygons_pass_through() {
        assert!(normalize_points(&[]).unwrap().is_empty());
        let single = vec![Value::from(vec![3, 4])];
        assert_eq!(normalize_points(&single).unwrap().len(), 1);
    }

    #[test]
    fn three_component_vertex_is_rejected() {
        let input = vec![Value::from(vec![0, 0]), Value::from(vec![1, 2, 3])];
        match normalize_points(&input) {
            Err(GfxError::MalformedGeometry { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected malformed geometry, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_component_is_rejected() {
        let input = vec![Value::List(vec![Value::Int(1), Value::from("two")])];
        assert!(matches!(
            normalize_points(&input),
            Err(GfxError::MalformedGeometry { index: 0, .. })
        ));
    }

    #[test]
    fn scalar_vertex_is_rejected() {
        let input = vec![Value::Int(5)];
        assert!(matches!(
            normalize_points(&input),
            Err(GfxError::MalformedGeometry { index: 0, .. })
        ));
    }
}
