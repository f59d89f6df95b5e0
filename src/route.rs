//! Candidate routes.
//!
//! A [`Route`] is a permutation of city indices into a point slice. The
//! route is an open path: its length is the sum of the legs `i → i + 1`
//! with no return leg to the start.

use crate::fitness::fitness_from_length;
use crate::point::Point;
use crate::random::shuffle;
use rand::Rng;
use std::fmt;

/// An ordering of every city exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    order: Vec<usize>,
}

impl Route {
    /// Wraps an index ordering.
    ///
    /// The ordering is not checked; use [`is_permutation_of`](Self::is_permutation_of)
    /// when it comes from an untrusted source.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// The route `0, 1, ..., n - 1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// A uniformly random permutation of `0..n`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        shuffle(&mut order, rng);
        Self { order }
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total forward-traversal distance through `points`.
    ///
    /// # Panics
    /// Panics if an index is out of bounds for `points`.
    pub fn path_length(&self, points: &[Point]) -> f64 {
        self.order
            .windows(2)
            .map(|leg| points[leg[0]].distance_to(&points[leg[1]]))
            .sum()
    }

    /// `1 / path_length`; a zero-length route scores `f64::INFINITY`.
    pub fn fitness(&self, points: &[Point]) -> f64 {
        fitness_from_length(self.path_length(points))
    }

    /// Whether the route visits each of `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.order {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }

    /// The points along the route, in visiting order.
    pub fn resolve(&self, points: &[Point]) -> Vec<Point> {
        self.order.iter().map(|&i| points[i]).collect()
    }

    /// Renders the route as `(x, y) -> (x, y) -> ...`.
    pub fn display<'a>(&'a self, points: &'a [Point]) -> RouteDisplay<'a> {
        RouteDisplay {
            route: self,
            points,
        }
    }
}

/// [`Display`](fmt::Display) adapter returned by [`Route::display`].
pub struct RouteDisplay<'a> {
    route: &'a Route,
    points: &'a [Point],
}

impl fmt::Display for RouteDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &city) in self.route.order.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", self.points[city])?;
        }
        Ok(())
    }
}
