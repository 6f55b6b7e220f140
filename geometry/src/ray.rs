use crate::{Bounds, Line, Point, Vector, find_intercept};

/// Ray in 2D space, travelling from `source` through `touch` and beyond.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub source: Point,
    pub touch: Point,
}

impl Ray {
    pub fn new(source: impl Into<Point>, touch: impl Into<Point>) -> Self {
        Self {
            source: source.into(),
            touch: touch.into(),
        }
    }

    pub fn delta(&self) -> Vector {
        self.touch - self.source
    }

    pub fn is_degenerate(&self) -> bool {
        self.source == self.touch
    }

    pub fn line(&self) -> Option<Line> {
        Line::through(self.source, self.touch)
    }

    /// Is `p` on the travel side of `source` along both axes?
    ///
    /// A non-negative delta keeps coordinates `>=` the source's, a negative delta keeps only
    /// those strictly `<`. A point sharing a coordinate with the source therefore counts as
    /// ahead when travelling up or right, but not when travelling down or left.
    pub fn is_ahead(&self, p: &Point) -> bool {
        let d = self.delta();
        let x_ahead = if d.x >= 0.0 {
            p.x >= self.source.x
        } else {
            p.x < self.source.x
        };
        let y_ahead = if d.y >= 0.0 {
            p.y >= self.source.y
        } else {
            p.y < self.source.y
        };
        x_ahead && y_ahead
    }

    pub fn exit_point(&self, bounds: &Bounds) -> Option<Point> {
        find_intercept(self.source, self.touch, bounds)
    }
}

impl From<(Point, Point)> for Ray {
    fn from((source, touch): (Point, Point)) -> Self {
        Self::new(source, touch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_and_degenerate() {
        let ray = Ray::new((500.0, 350.0), (100.0, 100.0));
        assert_eq!(ray.delta(), Vector::new(-400.0, -250.0));
        assert!(!ray.is_degenerate());
        assert!(Ray::new((1.0, 1.0), (1.0, 1.0)).is_degenerate());
        assert_eq!(Ray::new((1.0, 1.0), (1.0, 1.0)).line(), None);
    }

    #[test]
    fn ahead_up_right_includes_shared_coordinates() {
        let ray = Ray::new((500.0, 350.0), (600.0, 450.0));
        assert!(ray.is_ahead(&Point::new(1024.0, 874.0)));
        assert!(ray.is_ahead(&Point::new(500.0, 350.0)));
        assert!(ray.is_ahead(&Point::new(500.0, 768.0)));
        assert!(!ray.is_ahead(&Point::new(499.0, 768.0)));
        assert!(!ray.is_ahead(&Point::new(1024.0, 349.0)));
    }

    #[test]
    fn ahead_down_left_excludes_shared_coordinates() {
        let ray = Ray::new((500.0, 350.0), (400.0, 250.0));
        assert!(ray.is_ahead(&Point::new(0.0, 0.0)));
        assert!(!ray.is_ahead(&Point::new(500.0, 0.0)));
        assert!(!ray.is_ahead(&Point::new(0.0, 350.0)));
        assert!(!ray.is_ahead(&Point::new(500.0, 350.0)));
    }

    #[test]
    fn vertical_ray_leaves_x_unconstrained_at_source() {
        let up = Ray::new((500.0, 350.0), (500.0, 400.0));
        assert!(up.is_ahead(&Point::new(500.0, 768.0)));
        assert!(!up.is_ahead(&Point::new(500.0, 0.0)));

        let down = Ray::new((500.0, 350.0), (500.0, 300.0));
        assert!(down.is_ahead(&Point::new(500.0, 0.0)));
        assert!(!down.is_ahead(&Point::new(500.0, 768.0)));
    }

    #[test]
    fn exit_point_delegates() {
        let ray = Ray::new((500.0, 350.0), (950.0, 350.0));
        assert_eq!(
            ray.exit_point(&Bounds::SCREEN),
            Some(Point::new(1024.0, 350.0))
        );
    }
}
