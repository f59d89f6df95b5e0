//! One generation of candidate routes.

use crate::fitness::{fitness_from_length, FitnessCache};
use crate::point::Point;
use crate::route::Route;
use rand::Rng;

/// A generation's routes over a shared point set.
///
/// Populations are never edited in place: the evolution engine builds a new
/// one from bred children each generation.
///
/// # Examples
///
/// ```
/// use u_tsp::{Point, Population};
/// use u_tsp::random::create_rng;
///
/// let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
/// let mut rng = create_rng(42);
/// let population = Population::random(&points, 10, &mut rng);
///
/// assert_eq!(population.len(), 10);
/// let best = population.fittest().unwrap();
/// assert!(best.is_permutation_of(points.len()));
/// ```
#[derive(Debug, Clone)]
pub struct Population<'a> {
    points: &'a [Point],
    routes: Vec<Route>,
}

impl<'a> Population<'a> {
    /// Creates `size` independent, uniformly random permutations of `points`.
    pub fn random<R: Rng + ?Sized>(points: &'a [Point], size: usize, rng: &mut R) -> Self {
        let routes = (0..size)
            .map(|_| Route::random(points.len(), rng))
            .collect();
        Self { points, routes }
    }

    /// Wraps already-built routes.
    pub fn from_routes(points: &'a [Point], routes: Vec<Route>) -> Self {
        Self { points, routes }
    }

    pub fn points(&self) -> &'a [Point] {
        self.points
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Fitness of `route` over this population's points.
    pub fn fitness_of(&self, route: &Route) -> f64 {
        fitness_from_length(route.path_length(self.points))
    }

    /// The fittest route, scanning in order; the first maximum wins.
    ///
    /// Returns `None` for an empty population.
    pub fn fittest(&self) -> Option<&Route> {
        let mut best: Option<(&Route, f64)> = None;
        for route in &self.routes {
            let fitness = self.fitness_of(route);
            match best {
                Some((_, best_fitness)) if fitness <= best_fitness => {}
                _ => best = Some((route, fitness)),
            }
        }
        best.map(|(route, _)| route)
    }

    /// Evaluates every route once for this generation.
    pub fn evaluate(&self, parallel: bool) -> FitnessCache {
        FitnessCache::evaluate(&self.routes, self.points, parallel)
    }
}
