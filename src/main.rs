//! Runs the solver on a fixed 20-city map and prints the fittest route.
//!
//! Set `TSP_SEED` to reproduce a run; otherwise a random seed is drawn and
//! logged.

use tracing::{warn, Level};
use u_tsp::{EvolutionConfig, EvolutionRunner, Point};

const CITIES: [Point; 20] = [
    Point::new(60.0, 200.0),
    Point::new(180.0, 200.0),
    Point::new(80.0, 180.0),
    Point::new(140.0, 180.0),
    Point::new(20.0, 160.0),
    Point::new(100.0, 160.0),
    Point::new(200.0, 160.0),
    Point::new(140.0, 140.0),
    Point::new(40.0, 120.0),
    Point::new(100.0, 120.0),
    Point::new(180.0, 100.0),
    Point::new(60.0, 80.0),
    Point::new(120.0, 80.0),
    Point::new(180.0, 60.0),
    Point::new(20.0, 40.0),
    Point::new(100.0, 40.0),
    Point::new(200.0, 40.0),
    Point::new(20.0, 20.0),
    Point::new(60.0, 20.0),
    Point::new(160.0, 20.0),
];

fn main() -> Result<(), u_tsp::Error> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut config = EvolutionConfig::default()
        .with_population_size(50)
        .with_generations(1000);

    if let Ok(raw) = std::env::var("TSP_SEED") {
        match raw.parse::<u64>() {
            Ok(seed) => config = config.with_seed(seed),
            Err(_) => warn!(value = %raw, "ignoring TSP_SEED: not an unsigned integer"),
        }
    }

    let result = EvolutionRunner::run(&CITIES, &config)?;
    println!("Fittest Route: {result}");
    Ok(())
}
