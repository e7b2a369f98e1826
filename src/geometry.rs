//! Adaptors exposing the segments of `geo` geometries to the turn
//! generator.
use geo::{
    winding_order::WindingOrder, Coordinate, Line, LineString, MultiLineString, MultiPolygon,
    Polygon,
};
use itertools::Itertools;

use crate::{utils::winding_inverse, ExactNum, Ring, SegmentId};

/// Whether a geometry is an open curve or a closed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Linear,
    Areal,
}

/// A segment of an input geometry, with its end points already in
/// the order the overlay expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: ExactNum> {
    pub id: SegmentId,
    pub line: Line<T>,
}

/// Interface for geometries that turns can be generated for.
pub trait TurnGeometry<T: ExactNum> {
    fn category(&self) -> Category;

    /// Order in which the points of the rings are declared. Defaults
    /// to clockwise, which is also the default order expected by the
    /// generator.
    fn point_order(&self) -> WindingOrder {
        WindingOrder::Clockwise
    }

    /// Append all segments to `out`, tagged with `source_index`. If
    /// `reverse` is set, every ring is walked backwards.
    fn push_segments(&self, source_index: usize, reverse: bool, out: &mut Vec<Segment<T>>);

    fn segments(&self, source_index: usize, reverse: bool) -> Vec<Segment<T>> {
        let mut out = vec![];
        self.push_segments(source_index, reverse, &mut out);
        out
    }
}

fn push_ring<'a, T, I>(coords: I, id: SegmentId, out: &mut Vec<Segment<T>>)
where
    T: ExactNum + 'a,
    I: Iterator<Item = &'a Coordinate<T>>,
{
    out.extend(
        coords
            .tuple_windows()
            .enumerate()
            .map(|(segment_index, (p, q))| Segment {
                id: SegmentId {
                    segment_index,
                    ..id
                },
                line: Line::new(*p, *q),
            }),
    );
}

fn push_line_string<T: ExactNum>(
    ls: &LineString<T>,
    id: SegmentId,
    reverse: bool,
    out: &mut Vec<Segment<T>>,
) {
    if reverse {
        push_ring(ls.0.iter().rev(), id, out);
    } else {
        push_ring(ls.0.iter(), id, out);
    }
}

fn push_polygon<T: ExactNum>(
    poly: &Polygon<T>,
    source_index: usize,
    multi_index: usize,
    reverse: bool,
    out: &mut Vec<Segment<T>>,
) {
    let id = SegmentId::new(source_index, multi_index, Ring::Exterior, 0);
    push_line_string(poly.exterior(), id, reverse, out);
    for (idx, hole) in poly.interiors().iter().enumerate() {
        let id = SegmentId::new(source_index, multi_index, Ring::Interior(idx), 0);
        push_line_string(hole, id, reverse, out);
    }
}

impl<T: ExactNum> TurnGeometry<T> for Line<T> {
    fn category(&self) -> Category {
        Category::Linear
    }

    fn push_segments(&self, source_index: usize, reverse: bool, out: &mut Vec<Segment<T>>) {
        let line = if reverse {
            Line::new(self.end, self.start)
        } else {
            *self
        };
        out.push(Segment {
            id: SegmentId::new(source_index, 0, Ring::Exterior, 0),
            line,
        });
    }
}

impl<T: ExactNum> TurnGeometry<T> for LineString<T> {
    fn category(&self) -> Category {
        Category::Linear
    }

    fn push_segments(&self, source_index: usize, reverse: bool, out: &mut Vec<Segment<T>>) {
        let id = SegmentId::new(source_index, 0, Ring::Exterior, 0);
        push_line_string(self, id, reverse, out);
    }
}

impl<T: ExactNum> TurnGeometry<T> for MultiLineString<T> {
    fn category(&self) -> Category {
        Category::Linear
    }

    fn push_segments(&self, source_index: usize, reverse: bool, out: &mut Vec<Segment<T>>) {
        for (multi_index, ls) in self.0.iter().enumerate() {
            let id = SegmentId::new(source_index, multi_index, Ring::Exterior, 0);
            push_line_string(ls, id, reverse, out);
        }
    }
}

impl<T: ExactNum> TurnGeometry<T> for Polygon<T> {
    fn category(&self) -> Category {
        Category::Areal
    }

    fn push_segments(&self, source_index: usize, reverse: bool, out: &mut Vec<Segment<T>>) {
        push_polygon(self, source_index, 0, reverse, out);
    }
}

impl<T: ExactNum> TurnGeometry<T> for MultiPolygon<T> {
    fn category(&self) -> Category {
        Category::Areal
    }

    fn push_segments(&self, source_index: usize, reverse: bool, out: &mut Vec<Segment<T>>) {
        for (multi_index, poly) in self.0.iter().enumerate() {
            push_polygon(poly, source_index, multi_index, reverse, out);
        }
    }
}

impl<'a, T: ExactNum, G: TurnGeometry<T> + ?Sized> TurnGeometry<T> for &'a G {
    fn category(&self) -> Category {
        (**self).category()
    }

    fn point_order(&self) -> WindingOrder {
        (**self).point_order()
    }

    fn push_segments(&self, source_index: usize, reverse: bool, out: &mut Vec<Segment<T>>) {
        (**self).push_segments(source_index, reverse, out)
    }
}

/// A geometry with an explicitly declared point order.
#[derive(Debug, Clone, PartialEq)]
pub struct Oriented<G> {
    geometry: G,
    order: WindingOrder,
}

impl<G> Oriented<G> {
    pub fn new(geometry: G, order: WindingOrder) -> Self {
        Oriented { geometry, order }
    }

    /// Declare the opposite point order.
    pub fn flip(self) -> Self {
        Oriented {
            order: winding_inverse(self.order),
            ..self
        }
    }

    /// Get a reference to the wrapped geometry.
    pub fn geometry(&self) -> &G {
        &self.geometry
    }
}

impl<T: ExactNum, G: TurnGeometry<T>> TurnGeometry<T> for Oriented<G> {
    fn category(&self) -> Category {
        self.geometry.category()
    }

    fn point_order(&self) -> WindingOrder {
        self.order.clone()
    }

    fn push_segments(&self, source_index: usize, reverse: bool, out: &mut Vec<Segment<T>>) {
        self.geometry.push_segments(source_index, reverse, out)
    }
}
