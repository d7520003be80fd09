use serde::{Deserialize, Serialize};

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }
}

/// Axis aligned rectangle spanned by its lower-left and upper-right corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lower_left: Vector2D,
    pub upper_right: Vector2D,
}

impl BoundingBox {
    pub fn new(lower_left: Vector2D, upper_right: Vector2D) -> Self {
        BoundingBox {
            lower_left,
            upper_right,
        }
    }

    /// Smallest box containing every point, or `None` when there are no points
    pub fn enclosing<'a, I>(points: I) -> Option<BoundingBox>
    where
        I: IntoIterator<Item = &'a Vector2D>,
    {
        let mut points = points.into_iter();
        let first = *points.next()?;
        let (lower_left, upper_right) = points.fold((first, first), |(lo, hi), p| {
            (
                Vector2D::new(lo.x.min(p.x), lo.y.min(p.y)),
                Vector2D::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(BoundingBox::new(lower_left, upper_right))
    }
}
