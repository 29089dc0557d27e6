//! postman-route core
//!
//! Plans a single carrier's delivery walk from one depot to every drop point
//! on a 2-D grid, returning to the depot whenever its bag runs empty, and
//! breaks the walk into unit grid steps for playback.

pub mod traits;
pub mod error;
pub mod grid;
pub mod graph;
pub mod planner;
pub mod steps;
pub mod request;
pub mod playback;
