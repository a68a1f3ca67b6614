mod tracker;

pub use tracker::{ProgressTracker, ProgressTrackerBuilder, Tracker, TrackerBuilder};
