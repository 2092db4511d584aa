// Crossword layout engine.
// Grid model → validator → committer, driven by the randomized generator.
// Generation is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod committer;
pub mod generator;
pub mod grid;
pub mod handlers;
pub mod numbering;
pub mod validator;

// Re-export the public API consumed by handlers.
pub use generator::{generate, PlacementResult};
pub use grid::Orientation;
