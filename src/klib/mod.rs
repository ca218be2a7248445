mod cli;
pub use crate::klib::cli::ArgParser;

mod csvparser;
pub use crate::klib::csvparser::read_points;

mod csvwriter;
pub use crate::klib::csvwriter::ClusterWriter;

mod datapath;
pub use crate::klib::datapath::resolve_data_path;

mod errors;
pub use crate::klib::errors::ClusterError;

mod kmeans;
pub use crate::klib::kmeans::{
    assign_clusters, initialize_centroids, kmeans, update_centroids, ITERATIONS,
};

mod metrics;

mod point;
pub use crate::klib::point::Point;
