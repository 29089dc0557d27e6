//! Frame-by-frame playback of a planned route over its grid.

use std::thread;
use std::time::Duration;

use crate::grid::CellGrid;
use crate::steps::RouteStep;

/// Default pause between frames.
pub const DEFAULT_STEP_DELAY_MS: u64 = 200;

#[derive(Debug, Clone)]
pub struct PlaybackOptions {
    /// Pause after each rendered frame.
    pub step_delay: Duration,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
        }
    }
}

/// A grid snapshot with the carrier drawn on the current step's cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub step: RouteStep,
    pub grid: CellGrid,
}

/// Turns a step stream into frames. The base grid is never modified, so each
/// cell shows its own status again once the carrier has moved on.
#[derive(Debug, Clone)]
pub struct Playback<I> {
    grid: CellGrid,
    steps: I,
}

impl<I> Playback<I>
where
    I: Iterator<Item = RouteStep>,
{
    pub fn new(grid: CellGrid, steps: I) -> Self {
        Self { grid, steps }
    }

    /// Renders every frame, sleeping `step_delay` after each one. Returns the
    /// number of frames rendered.
    pub fn run<F>(self, options: &PlaybackOptions, mut render: F) -> usize
    where
        F: FnMut(&Frame),
    {
        let mut rendered = 0;
        for frame in self {
            render(&frame);
            rendered += 1;
            if !options.step_delay.is_zero() {
                thread::sleep(options.step_delay);
            }
        }
        rendered
    }
}

impl<I> Iterator for Playback<I>
where
    I: Iterator<Item = RouteStep>,
{
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let step = self.steps.next()?;
        // Steps come from grid nodes, so coordinates are never negative.
        let grid = match (usize::try_from(step.x), usize::try_from(step.y)) {
            (Ok(x), Ok(y)) => self.grid.with_carrier_at(x, y),
            _ => self.grid.clone(),
        };
        Some(Frame { step, grid })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}
