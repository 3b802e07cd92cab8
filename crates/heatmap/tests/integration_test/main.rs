/// Integration tests for the heat-map engine covering partitioning, category
/// purity, intensity bounds and summary statistics.

mod clustering;
mod helpers;
mod stats;
