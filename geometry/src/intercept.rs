//! Where a ray fired from a source point through a touch point leaves a rectangle.
//!
//! The ray's line is crossed with each boundary line of the bounds, the crossings that lie
//! outside the bounds or behind the source are dropped, and the first remaining one wins.
//! Crossings are produced in [`Edge::ALL`] order (left, right, bottom, top), which makes that
//! order the tie-break, for example when the ray passes exactly through a corner.

use log::{debug, trace};

use crate::{Bounds, Contains, Edge, Line, Point, Ray};

/// A point on the boundary of [`Bounds`] and the edge line it was computed from.
#[derive(Debug, Copy, Clone, PartialEq, derive_more::From)]
pub struct Intercept {
    pub point: Point,
    pub edge: Edge,
}

/// Returns the point on the boundary of `bounds` the ray from `source` through `touch`
/// crosses ahead of `source`.
///
/// `None` if `source` and `touch` coincide, so that no direction is defined, or if there is
/// no crossing ahead of `source`.
pub fn find_intercept(source: Point, touch: Point, bounds: &Bounds) -> Option<Point> {
    find_edge_intercept(source, touch, bounds).map(|intercept| intercept.point)
}

/// Like [`find_intercept`], but also reports the edge line of the intercept.
pub fn find_edge_intercept(source: Point, touch: Point, bounds: &Bounds) -> Option<Intercept> {
    let ray = Ray::new(source, touch);
    let Some(line) = ray.line() else {
        debug!("Source and touch coincide at {source}, no direction");
        return None;
    };

    let mut intercepts = candidates(&line, bounds);
    trace!("Candidates: {intercepts:?}");

    retain_within(&mut intercepts, bounds);
    trace!("Within bounds: {intercepts:?}");

    retain_ahead(&mut intercepts, &ray);
    trace!("Ahead of source: {intercepts:?}");

    intercepts.first().copied()
}

/// The crossings of `line` with every boundary line it is not parallel to, in edge order.
///
/// All crossings are computed, even though at most two of them can lie on the boundary.
fn candidates(line: &Line, bounds: &Bounds) -> Vec<Intercept> {
    Edge::ALL
        .into_iter()
        .filter_map(|edge| {
            let point = match edge {
                Edge::Left => Point::new(bounds.left, line.y_at(bounds.left)?),
                Edge::Right => Point::new(bounds.right, line.y_at(bounds.right)?),
                Edge::Bottom => Point::new(line.x_at(bounds.bottom)?, bounds.bottom),
                Edge::Top => Point::new(line.x_at(bounds.top)?, bounds.top),
            };
            Some(Intercept { point, edge })
        })
        .collect()
}

fn retain_within(intercepts: &mut Vec<Intercept>, bounds: &Bounds) {
    intercepts.retain(|i| bounds.contains(&i.point));
}

fn retain_ahead(intercepts: &mut Vec<Intercept>, ray: &Ray) {
    intercepts.retain(|i| ray.is_ahead(&i.point));
}
