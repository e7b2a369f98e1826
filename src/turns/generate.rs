use std::ops::ControlFlow;

use geo::{winding_order::WindingOrder, Coordinate};
use log::{debug, trace};

use super::*;
use crate::{
    utils::do_reverse, AllPairs, CandidatePairs, CartesianIntersector, Category, FirstTurn,
    InterruptPolicy, IntersectionPoint, NoInterrupt, Segment, SegmentIntersector, TurnGeometry,
};

/// Settings of a [`TurnGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub struct TurnConfig {
    point_order: WindingOrder,
    skip_collapsed: bool,
}

impl Default for TurnConfig {
    fn default() -> Self {
        TurnConfig {
            point_order: WindingOrder::Clockwise,
            skip_collapsed: false,
        }
    }
}

impl TurnConfig {
    /// Point order expected by the consumer of the turns. Geometries
    /// declaring the other order are walked backwards.
    pub fn with_point_order(mut self, order: WindingOrder) -> Self {
        self.point_order = order;
        self
    }

    /// Drop zero-length segments before pairing them.
    pub fn with_skip_collapsed(mut self, skip: bool) -> Self {
        self.skip_collapsed = skip;
        self
    }

    /// Get a reference to the expected point order.
    pub fn point_order(&self) -> &WindingOrder {
        &self.point_order
    }

    /// Get the config's skip collapsed flag.
    pub fn skip_collapsed(&self) -> bool {
        self.skip_collapsed
    }
}

/// How a call to [`TurnGenerator::get_turns`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All candidate pairs were processed.
    Completed,
    /// The interrupt policy asked to stop.
    Interrupted,
}

/// Computes the turns between two geometries.
///
/// The intersector `I` relates candidate segment pairs; the
/// classifier `C` assigns operations to every intersection point
/// found. Turns are appended in the order the candidate pairs are
/// supplied; nothing is deduplicated or sorted.
#[derive(Debug, Clone, Default)]
pub struct TurnGenerator<I = CartesianIntersector, C = SideClassifier> {
    config: TurnConfig,
    intersector: I,
    classifier: C,
}

impl TurnGenerator {
    pub fn new(config: TurnConfig) -> Self {
        TurnGenerator {
            config,
            intersector: Default::default(),
            classifier: Default::default(),
        }
    }
}

impl<I, C> TurnGenerator<I, C> {
    pub fn with_strategies(config: TurnConfig, intersector: I, classifier: C) -> Self {
        TurnGenerator {
            config,
            intersector,
            classifier,
        }
    }

    /// Get a reference to the generator's config.
    pub fn config(&self) -> &TurnConfig {
        &self.config
    }

    /// Append the turns between `g1` (operand `0`) and `g2` (operand
    /// `1`) to `turns`.
    ///
    /// `interrupt` judges each turn once it is appended; the turn that
    /// stops generation stays in `turns`.
    pub fn get_turns<T, G1, G2, P, R>(
        &self,
        g1: &G1,
        g2: &G2,
        candidates: &P,
        turns: &mut Vec<Turn<T>>,
        interrupt: &mut R,
    ) -> Outcome
    where
        T: ExactNum,
        G1: TurnGeometry<T> + ?Sized,
        G2: TurnGeometry<T> + ?Sized,
        P: CandidatePairs<T>,
        R: InterruptPolicy<T>,
        I: SegmentIntersector<T>,
        C: Classifier<T>,
    {
        let expected = self.config.point_order.clone();
        let reverse = [
            do_reverse(g1.point_order(), expected.clone()),
            do_reverse(g2.point_order(), expected),
        ];
        let categories = [g1.category(), g2.category()];

        let mut first = g1.segments(0, reverse[0]);
        let mut second = g2.segments(1, reverse[1]);
        if self.config.skip_collapsed {
            first.retain(|s| s.line.start != s.line.end);
            second.retain(|s| s.line.start != s.line.end);
        }
        debug!(
            "get_turns: {n1} x {n2} segments, reverse: {reverse:?}, categories: {categories:?}",
            n1 = first.len(),
            n2 = second.len(),
        );

        let start = turns.len();
        let flow = candidates.for_each_pair(&first, &second, |a, b| {
            let relation = self.intersector.relate(&a.line, &b.line);
            trace!(
                "{ida:?} x {idb:?}: {n} points",
                ida = a.id,
                idb = b.id,
                n = relation.points.count()
            );
            for ip in relation.points.points() {
                let ctx = TurnContext {
                    segments: [&a.line, &b.line],
                    categories,
                    sides: &relation.sides,
                    direction: relation.direction,
                    intersection: ip,
                };
                let (method, ops) = self.classifier.classify(&ctx);
                let turn = Turn {
                    point: ip.point,
                    method,
                    operations: [
                        turn_operation(a, b, ip, 0, ops[0], categories[0]),
                        turn_operation(b, a, ip, 1, ops[1], categories[1]),
                    ],
                };
                trace!("turn: {turn:?}");
                turns.push(turn);
                let stop = turns.last().map_or(false, |t| interrupt.apply(t));
                if stop {
                    return ControlFlow::Break(());
                }
            }
            ControlFlow::Continue(())
        });

        debug!("get_turns: {n} turns", n = turns.len() - start);
        if flow.is_break() {
            Outcome::Interrupted
        } else {
            Outcome::Completed
        }
    }
}

fn turn_operation<T: ExactNum>(
    this: &Segment<T>,
    other: &Segment<T>,
    ip: &IntersectionPoint<T>,
    index: usize,
    operation: Operation,
    category: Category,
) -> TurnOperation<T> {
    let distance = match category {
        Category::Linear => Some(squared_distance(this.line.start, ip.point)),
        Category::Areal => None,
    };
    TurnOperation {
        seg_id: this.id,
        fraction: ip.fractions[index],
        other_id: other.id.ring_id(),
        operation,
        distance,
    }
}

#[inline]
fn squared_distance<T: ExactNum>(p: Coordinate<T>, q: Coordinate<T>) -> T {
    let d = q - p;
    d.x * d.x + d.y * d.y
}

/// All turns between `g1` and `g2`, with the default strategies and
/// a clockwise point order.
pub fn get_turns<T, G1, G2>(g1: &G1, g2: &G2) -> Vec<Turn<T>>
where
    T: ExactNum,
    G1: TurnGeometry<T> + ?Sized,
    G2: TurnGeometry<T> + ?Sized,
{
    let mut turns = vec![];
    TurnGenerator::new(TurnConfig::default()).get_turns(g1, g2, &AllPairs, &mut turns, &mut NoInterrupt);
    turns
}

/// Whether the boundaries of `g1` and `g2` meet anywhere. Stops at
/// the first turn found.
pub fn intersects<T, G1, G2>(g1: &G1, g2: &G2) -> bool
where
    T: ExactNum,
    G1: TurnGeometry<T> + ?Sized,
    G2: TurnGeometry<T> + ?Sized,
{
    let mut turns = vec![];
    let mut policy = FirstTurn::default();
    TurnGenerator::new(TurnConfig::default()).get_turns(g1, g2, &AllPairs, &mut turns, &mut policy);
    policy.found()
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeSet, error::Error};

    use geo::{Line, LineString, MultiPolygon, Polygon};
    use log::info;
    use wkt::TryFromWkt;

    use super::*;
    use crate::{turns::tests::init_log, Oriented, RTreePairs};

    fn lines(a: [(f64, f64); 2], b: [(f64, f64); 2]) -> Vec<Turn<f64>> {
        init_log();
        get_turns(&Line::new(a[0], a[1]), &Line::new(b[0], b[1]))
    }

    #[test]
    fn crossing_segments() {
        let turns = lines([(0., 0.), (10., 0.)], [(5., -5.), (5., 5.)]);
        assert_eq!(turns.len(), 1);
        let turn = &turns[0];
        assert_eq!(turn.point, Coordinate { x: 5., y: 0. });
        assert_eq!(turn.method, Method::Crosses);
        let half = SegmentRatio::new(1., 2.);
        assert_eq!(turn.operations[0].fraction, half);
        assert_eq!(turn.operations[1].fraction, half);
        assert_eq!(turn.operations[0].seg_id.source_index, 0);
        assert_eq!(turn.operations[1].seg_id.source_index, 1);
        assert_eq!(turn.operations[0].distance, Some(25.));
    }

    #[test]
    fn shared_end_point() {
        let turns = lines([(0., 0.), (10., 0.)], [(10., 0.), (10., 10.)]);
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].point, Coordinate { x: 10., y: 0. });
        assert!(turns[0].operations[0].fraction.is_one());
        assert!(turns[0].operations[1].fraction.is_zero());
    }

    #[test]
    fn collinear_overlap() {
        let turns = lines([(0., 0.), (10., 0.)], [(4., 0.), (14., 0.)]);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].point, Coordinate { x: 4., y: 0. });
        assert_eq!(turns[0].operations[0].fraction, SegmentRatio::new(2., 5.));
        assert_eq!(turns[1].point, Coordinate { x: 10., y: 0. });
        assert!(turns[1].operations[0].fraction.is_one());
        assert!(turns.iter().all(|t| t.is_collinear()));
    }

    #[test]
    fn disjoint_parallels() {
        let turns = lines([(0., 0.), (10., 0.)], [(0., 5.), (10., 5.)]);
        assert!(turns.is_empty());
    }

    #[test]
    fn integer_domain() {
        let a = Line::new((0i64, 0), (10, 0));
        let b = Line::new((5i64, -5), (5, 5));
        let turns = get_turns(&a, &b);
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].point, Coordinate { x: 5, y: 0 });
        assert_eq!(turns[0].operations[0].fraction, SegmentRatio::new(1, 2));
    }

    fn poly(wkt: &str) -> Result<Polygon<f64>, Box<dyn Error>> {
        Ok(Polygon::try_from_wkt_str(wkt)?)
    }

    #[test]
    fn overlapping_rects() -> Result<(), Box<dyn Error>> {
        init_log();
        let p1 = poly("POLYGON((0 0,0 10,10 10,10 0,0 0))")?;
        let p2 = poly("POLYGON((5 5,5 15,15 15,15 5,5 5))")?;
        let turns = get_turns(&p1, &p2);
        for t in turns.iter() {
            info!("{:?} {:?}", t.point, t.method);
        }
        let points: BTreeSet<_> = turns
            .iter()
            .map(|t| (t.point.x as i64, t.point.y as i64))
            .collect();
        assert_eq!(points, vec![(5, 10), (10, 5)].into_iter().collect());
        assert!(turns
            .iter()
            .all(|t| t.method == Method::Crosses && t.operations.iter().all(|o| o.fraction.in_segment())));
        assert!(turns
            .iter()
            .all(|t| t.combination(Operation::Union, Operation::Intersection)));
        Ok(())
    }

    #[test]
    fn every_ring_contributes() -> Result<(), Box<dyn Error>> {
        init_log();
        // A line crossing the exterior and the hole of a polygon.
        let p = poly("POLYGON((0 0,0 10,10 10,10 0,0 0),(3 3,7 3,7 7,3 7,3 3))")?;
        let ls: LineString<f64> = vec![(-1., 5.), (11., 5.)].into();
        let turns = get_turns(&ls, &p);
        assert_eq!(turns.len(), 4);
        let rings: Vec<_> = turns.iter().map(|t| t.operations[1].seg_id.ring).collect();
        assert_eq!(rings.iter().filter(|r| **r == Ring::Exterior).count(), 2);
        assert_eq!(rings.iter().filter(|r| **r == Ring::Interior(0)).count(), 2);
        assert!(turns
            .iter()
            .all(|t| t.operations[0].other_id.ring == t.operations[1].seg_id.ring));
        assert!(turns.iter().all(|t| t.operations[0].distance.is_some()));
        assert!(turns.iter().all(|t| t.operations[1].distance.is_none()));
        Ok(())
    }

    #[test]
    fn same_location_is_not_deduplicated() -> Result<(), Box<dyn Error>> {
        // Two components of a multi-polygon touching at (10, 10), with
        // a line passing through that point.
        let mp = MultiPolygon(vec![
            poly("POLYGON((0 0,0 10,10 10,10 0,0 0))")?,
            poly("POLYGON((10 10,10 20,20 20,20 10,10 10))")?,
        ]);
        let ls: LineString<f64> = vec![(0., 20.), (20., 0.)].into();
        let turns = get_turns(&ls, &mp);
        let at_corner = turns
            .iter()
            .filter(|t| t.point == Coordinate { x: 10., y: 10. })
            .count();
        assert_eq!(at_corner, 4);
        let multi: BTreeSet<_> = turns.iter().map(|t| t.operations[1].seg_id.multi_index).collect();
        assert_eq!(multi.len(), 2);
        Ok(())
    }

    #[test]
    fn interrupt_stops_early() -> Result<(), Box<dyn Error>> {
        let p1 = poly("POLYGON((0 0,0 10,10 10,10 0,0 0))")?;
        let p2 = poly("POLYGON((5 5,5 15,15 15,15 5,5 5))")?;
        let mut turns = vec![];
        let mut policy = FirstTurn::default();
        let outcome = TurnGenerator::new(TurnConfig::default()).get_turns(&p1, &p2, &AllPairs, &mut turns, &mut policy);
        assert_eq!(outcome, Outcome::Interrupted);
        assert_eq!(turns.len(), 1);
        assert!(policy.found());

        let mut turns = vec![];
        let mut seen = 0;
        let outcome = TurnGenerator::new(TurnConfig::default()).get_turns(
            &p1,
            &p2,
            &RTreePairs,
            &mut turns,
            &mut |_: &Turn<f64>| {
                seen += 1;
                false
            },
        );
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(seen, 2);
        assert_eq!(turns.len(), 2);

        let mut turns = vec![];
        let mut judged = None;
        let outcome = TurnGenerator::new(TurnConfig::default()).get_turns(
            &p1,
            &p2,
            &AllPairs,
            &mut turns,
            &mut |t: &Turn<f64>| {
                judged = Some(*t);
                true
            },
        );
        assert_eq!(outcome, Outcome::Interrupted);
        assert_eq!(judged, turns.last().copied());

        assert!(intersects(&p1, &p2));
        let far = poly("POLYGON((20 20,20 30,30 30,30 20,20 20))")?;
        assert!(!intersects(&p1, &far));
        Ok(())
    }

    #[test]
    fn reversal_complements_fractions() -> Result<(), Box<dyn Error>> {
        init_log();
        let p1 = poly("POLYGON((0 0,0 10,10 10,10 0,0 0))")?;
        let p2 = poly("POLYGON((5 4,5 15,15 15,15 4,5 4))")?;
        let forward = get_turns(&p1, &p2);
        let reversed = get_turns(&Oriented::new(&p1, WindingOrder::CounterClockwise), &p2);
        assert_eq!(forward.len(), reversed.len());

        for t in forward.iter() {
            let r = reversed
                .iter()
                .find(|r| r.point == t.point)
                .expect("same intersection points after reversal");
            assert_eq!(r.operations[0].fraction, t.operations[0].fraction.complement());
            assert_eq!(r.operations[1].fraction, t.operations[1].fraction);
            // Walking p1 backwards swaps sides, so the roles flip.
            assert_eq!(r.operations[0].operation, t.operations[1].operation);
        }
        Ok(())
    }

    #[test]
    fn expected_order_reverses_default_geometries() {
        let a = Line::new((0., 0.), (10., 0.));
        let b = Line::new((2., -5.), (2., 5.));
        let config = TurnConfig::default().with_point_order(WindingOrder::CounterClockwise);
        let mut turns = vec![];
        TurnGenerator::new(config).get_turns(&a, &b, &AllPairs, &mut turns, &mut NoInterrupt);
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].operations[0].fraction, SegmentRatio::new(4., 5.));
        assert_eq!(turns[0].operations[1].fraction, SegmentRatio::new(1., 2.));
    }

    #[test]
    fn collapsed_segments() {
        let a: LineString<f64> = vec![(0., 0.), (5., 0.), (5., 0.), (10., 0.)].into();
        let b = Line::new((5., -5.), (5., 5.));
        let turns = get_turns(&a, &b);
        // Arrival, collapsed segment and departure all meet at (5, 0).
        assert_eq!(turns.len(), 3);
        assert!(turns.iter().any(|t| t.method == Method::Degenerate));

        let mut turns = vec![];
        TurnGenerator::new(TurnConfig::default().with_skip_collapsed(true)).get_turns(
            &a,
            &b,
            &AllPairs,
            &mut turns,
            &mut NoInterrupt,
        );
        assert_eq!(turns.len(), 2);
    }

    #[test]
    fn ratios_stay_on_segment() {
        let mut rng = rand::thread_rng();
        let p1 = crate::random::circular_polygon(&mut rng, 64);
        let p2 = crate::random::circular_polygon(&mut rng, 32);
        let turns = get_turns(&p1, &p2);
        assert!(!turns.is_empty());
        assert!(turns
            .iter()
            .all(|t| t.operations.iter().all(|o| o.fraction.on_segment())));
    }
}
