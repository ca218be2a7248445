use crate::klib::metrics;
use crate::klib::Point;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use ndarray::Array2;
use ordered_float::OrderedFloat;

/// Refinement rounds per run. There is no convergence check; every run
/// performs the full count.
pub const ITERATIONS: usize = 20;

/// Picks the starting centroids without a random source: centroid i copies
/// the features of the point at index `i mod N`. Callers uphold k <= N, so
/// this is the first k points' features.
pub fn initialize_centroids(points: &[Point], k: usize) -> Array2<f64> {
    let dim = points[0].features.len();
    Array2::from_shape_fn((k, dim), |(i, j)| points[i % points.len()].features[j])
}

/// Labels every point with the index of its nearest centroid under squared
/// Euclidean distance. Rows are scanned in ascending index order and only a
/// strictly smaller distance replaces the running minimum, so ties land on
/// the lowest centroid index.
pub fn assign_clusters(points: &mut [Point], centroids: &Array2<f64>) {
    for point in points.iter_mut() {
        point.cluster = centroids
            .rows()
            .into_iter()
            .map(|row| OrderedFloat(metrics::euclidean_sq(&point.features, row)))
            .position_min();
    }
}

/// Rebuilds every centroid as the componentwise mean of its members in a
/// single pass. A cluster that received no points keeps the accumulator's
/// zero vector.
pub fn update_centroids(points: &[Point], k: usize, dim: usize) -> Array2<f64> {
    let mut sums = Array2::<f64>::zeros((k, dim));
    let mut counts = vec![0usize; k];

    for point in points {
        let Some(cluster) = point.cluster else {
            continue;
        };
        for (acc, feat) in sums.row_mut(cluster).iter_mut().zip(&point.features) {
            *acc += feat;
        }
        counts[cluster] += 1;
    }

    for (cluster, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        sums.row_mut(cluster).mapv_inplace(|sum| sum / count as f64);
    }

    sums
}

/// Runs the full refinement loop over `points` and returns the final
/// centroids. Expects 1 <= k <= points.len() and a non-empty feature vector
/// on every point.
///
/// The loop ends on an update, so one more assignment runs afterwards; the
/// labels left on `points` always describe the returned centroid set.
pub fn kmeans(points: &mut [Point], k: usize) -> Array2<f64> {
    let mut centroids = initialize_centroids(points, k);
    debug!("initialized {} centroids", k);

    let sty = ProgressStyle::with_template(
        " [{elapsed_precise}] {bar:44.cyan/blue} > {pos} iterations",
    )
    .unwrap()
    .progress_chars("##-");
    let pbar = ProgressBar::new(ITERATIONS as u64).with_style(sty);

    for _ in 0..ITERATIONS {
        assign_clusters(points, &centroids);
        centroids = update_centroids(points, k, centroids.ncols());
        pbar.inc(1);
    }
    pbar.finish();

    assign_clusters(points, &centroids);
    centroids
}
