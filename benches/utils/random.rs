use std::f64::consts::PI;

use geo::{Coordinate, Line, LineString, Polygon, Rect};

use rand::Rng;
use rand_distr::Standard;

/// A point drawn uniformly from `bounds`.
#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coordinate<f64> {
    let (min, max) = (bounds.min(), bounds.max());
    Coordinate {
        x: rng.gen_range(min.x..max.x),
        y: rng.gen_range(min.y..max.y),
    }
}

/// A segment between two points of `bounds`.
#[inline]
pub fn uniform_line<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Line<f64> {
    Line::new(uniform_point(rng, bounds), uniform_point(rng, bounds))
}

/// A star-shaped polygon around the origin with `steps` vertices,
/// listed clockwise, at random distances in `[50, 150)`.
pub fn circular_polygon<R: Rng>(mut rng: R, steps: usize) -> Polygon<f64> {
    let ring: LineString<f64> = (0..steps)
        .map(|i| {
            let angle = -2. * PI * i as f64 / steps as f64;
            let radius = 50. + 100. * rng.sample::<f64, _>(Standard);
            Coordinate {
                x: radius * angle.cos(),
                y: radius * angle.sin(),
            }
        })
        .collect();
    Polygon::new(ring, vec![])
}
