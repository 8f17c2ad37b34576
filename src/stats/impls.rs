pub mod stats_metrics;
