use super::Point;

/// An infinite line in the plane.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Line {
    /// `x = x`
    Vertical { x: f64 },
    /// `y = y`
    Horizontal { y: f64 },
    /// `y = slope * x + intercept`
    Sloped { slope: f64, intercept: f64 },
}

impl Line {
    /// The line through two points, `None` if they coincide.
    ///
    /// Exact comparisons decide the axis-aligned forms, so a sloped line never has a zero run.
    pub fn through(p1: Point, p2: Point) -> Option<Self> {
        if p1 == p2 {
            return None;
        }
        if p1.x == p2.x {
            return Some(Self::Vertical { x: p1.x });
        }
        if p1.y == p2.y {
            return Some(Self::Horizontal { y: p1.y });
        }

        let slope = (p2.y - p1.y) / (p2.x - p1.x);
        let intercept = p1.y - slope * p1.x;
        Some(Self::Sloped { slope, intercept })
    }

    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            Self::Vertical { .. } => None,
            Self::Horizontal { y } => Some(y),
            Self::Sloped { slope, intercept } => Some(slope * x + intercept),
        }
    }

    pub fn x_at(&self, y: f64) -> Option<f64> {
        match *self {
            Self::Vertical { x } => Some(x),
            Self::Horizontal { .. } => None,
            Self::Sloped { slope, intercept } => Some((y - intercept) / slope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points_have_no_line() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(Line::through(p, p), None);
    }

    #[test]
    fn vertical_is_checked_first() {
        let l = Line::through(Point::new(500.0, 350.0), Point::new(500.0, 400.0)).unwrap();
        assert_eq!(l, Line::Vertical { x: 500.0 });
        assert_eq!(l.y_at(10.0), None);
        assert_eq!(l.x_at(10.0), Some(500.0));
    }

    #[test]
    fn horizontal() {
        let l = Line::through(Point::new(500.0, 350.0), Point::new(950.0, 350.0)).unwrap();
        assert_eq!(l, Line::Horizontal { y: 350.0 });
        assert_eq!(l.x_at(0.0), None);
        assert_eq!(l.y_at(1024.0), Some(350.0));
    }

    #[test]
    fn sloped_uses_first_point_for_intercept() {
        let l = Line::through(Point::new(500.0, 350.0), Point::new(100.0, 100.0)).unwrap();
        assert_eq!(
            l,
            Line::Sloped {
                slope: 0.625,
                intercept: 37.5
            }
        );
        assert_eq!(l.y_at(0.0), Some(37.5));
        assert_eq!(l.x_at(0.0), Some(-60.0));
    }
}
