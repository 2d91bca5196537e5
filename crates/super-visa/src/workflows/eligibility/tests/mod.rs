mod classifier;
mod common;
mod thresholds;
