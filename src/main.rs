extern crate pretty_env_logger;

#[macro_use]
extern crate log;

use clap::Parser;
use std::path::PathBuf;

mod klib;

use klib::{
    kmeans, read_points, resolve_data_path, ArgParser, ClusterError, ClusterWriter, ITERATIONS,
};

const INPUT_NAME: &str = "features_for_clustering.csv";
const OUTPUT_NAME: &str = "cluster_output.csv";

fn main() {
    let args = ArgParser::parse();
    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    pretty_env_logger::formatted_timed_builder()
        .filter_level(level)
        .init();

    info!("starting");
    info!("params: {:#?}", args);
    if !args.validate() {
        error!("please fix arguments");
        std::process::exit(1);
    }

    if let Err(err) = run(&args) {
        error!("{}", err);
        std::process::exit(1);
    }
    info!("finished");
}

fn run(args: &ArgParser) -> Result<(), ClusterError> {
    let input_path = resolve_data_path(INPUT_NAME).map_err(|source| ClusterError::InputIo {
        path: PathBuf::from(INPUT_NAME),
        source,
    })?;
    info!("reading {}", input_path.display());

    let mut points = read_points(&input_path)?;
    if points.is_empty() {
        return Err(ClusterError::InputFormat("no data rows".into()));
    }

    let k = args.clusters as usize;
    if k > points.len() {
        return Err(ClusterError::InvalidArgument(format!(
            "clusters ({}) cannot exceed points ({})",
            k,
            points.len()
        )));
    }
    let dim = points[0].features.len();

    info!(
        "clustering {} points across {} features into {} clusters",
        points.len(),
        dim,
        k
    );
    let centroids = kmeans(&mut points, k);
    debug!("final centroids: {:?}", centroids);

    let output_path = resolve_data_path(OUTPUT_NAME).map_err(|source| ClusterError::OutputIo {
        path: PathBuf::from(OUTPUT_NAME),
        source,
    })?;
    let mut writer = ClusterWriter::from_path(&output_path, k)?;
    for point in &points {
        writer.write_point(point)?;
    }
    writer.finish()?;
    info!("cluster sizes: {:?}", writer.counts);

    println!("points: {}", points.len());
    println!("features per point: {}", dim);
    println!("clusters: {}", k);
    println!("iterations: {}", ITERATIONS);
    println!("wrote clusters to {}", output_path.display());

    Ok(())
}
