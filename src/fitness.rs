//! Route fitness evaluation.
//!
//! Fitness is the inverse of the open-path length, so **higher is better**.
//! A route of length zero (a single city, or only coincident cities) scores
//! `f64::INFINITY`. Relative comparisons between routes are done on lengths
//! via [`normalized_fitness`], which keeps infinities out of arithmetic and
//! never yields NaN.
//!
//! [`FitnessCache`] evaluates a whole generation once so that ranking and
//! mating-pool construction read stored values instead of re-walking
//! routes inside sort comparators.

use crate::point::Point;
use crate::route::Route;
use std::cmp::Ordering;

/// Converts a path length into a fitness score.
///
/// An infinite length scores `0.0`. Validated runs never produce one, since
/// point sets whose route lengths could overflow are rejected up front.
pub fn fitness_from_length(length: f64) -> f64 {
    if length > 0.0 {
        1.0 / length
    } else {
        f64::INFINITY
    }
}

/// Fitness of a route relative to the best route of its generation.
///
/// Equal to `fitness / best_fitness` written in terms of lengths:
/// `best_length / length`. Lies in `[0, 1]` when `best_length <= length`.
/// A zero-length route is itself a best route and scores `1.0`.
pub fn normalized_fitness(length: f64, best_length: f64) -> f64 {
    if length > 0.0 {
        best_length / length
    } else {
        1.0
    }
}

/// Length and fitness of one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub length: f64,
    pub fitness: f64,
}

impl Evaluation {
    pub fn of(route: &Route, points: &[Point]) -> Self {
        let length = route.path_length(points);
        Self {
            length,
            fitness: fitness_from_length(length),
        }
    }
}

/// Evaluations for one generation, aligned with its routes.
#[derive(Debug, Clone)]
pub struct FitnessCache {
    evaluations: Vec<Evaluation>,
}

impl FitnessCache {
    /// Evaluates every route once.
    ///
    /// With the `parallel` feature enabled and `parallel == true`, routes are
    /// evaluated with rayon. Results are collected in route order either way.
    pub fn evaluate(routes: &[Route], points: &[Point], parallel: bool) -> Self {
        Self {
            evaluations: evaluate_all(routes, points, parallel),
        }
    }

    pub fn get(&self, index: usize) -> Evaluation {
        self.evaluations[index]
    }

    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Evaluation> {
        self.evaluations.iter()
    }

    /// Route indices sorted by descending fitness.
    ///
    /// The sort is stable: equally fit routes keep their population order.
    ///
    /// # Complexity
    /// O(n log n) comparisons of cached values
    pub fn ranking(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.evaluations.len()).collect();
        indices.sort_by(|&a, &b| {
            self.evaluations[b]
                .fitness
                .partial_cmp(&self.evaluations[a].fitness)
                .unwrap_or(Ordering::Equal)
        });
        indices
    }

    /// Index of the fittest route; the first encountered maximum wins.
    pub fn fittest_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, eval) in self.evaluations.iter().enumerate() {
            match best {
                Some(b) if eval.fitness <= self.evaluations[b].fitness => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

#[cfg(feature = "parallel")]
fn evaluate_all(routes: &[Route], points: &[Point], parallel: bool) -> Vec<Evaluation> {
    use rayon::prelude::*;

    if parallel {
        routes
            .par_iter()
            .map(|route| Evaluation::of(route, points))
            .collect()
    } else {
        routes
            .iter()
            .map(|route| Evaluation::of(route, points))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all(routes: &[Route], points: &[Point], _parallel: bool) -> Vec<Evaluation> {
    routes
        .iter()
        .map(|route| Evaluation::of(route, points))
        .collect()
}
