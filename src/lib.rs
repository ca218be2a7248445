#[macro_use]
extern crate log;

mod klib;
pub use self::{
    klib::assign_clusters, klib::initialize_centroids, klib::kmeans, klib::read_points,
    klib::resolve_data_path, klib::update_centroids, klib::ArgParser, klib::ClusterError,
    klib::ClusterWriter, klib::Point, klib::ITERATIONS,
};
