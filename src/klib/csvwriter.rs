use crate::klib::{ClusterError, Point};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Streams `game_id,cluster_id` rows while tallying how many points each
/// cluster received.
pub struct ClusterWriter<W: Write> {
    out: W,
    path: PathBuf,
    pub counts: Vec<usize>,
}

impl ClusterWriter<BufWriter<File>> {
    /// Create the output file and emit the header row.
    pub fn from_path(path: &Path, k: usize) -> Result<Self, ClusterError> {
        let file = File::create(path).map_err(|source| ClusterError::OutputIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(BufWriter::new(file), path, k)
    }
}

impl<W: Write> ClusterWriter<W> {
    pub fn new(out: W, path: &Path, k: usize) -> Result<Self, ClusterError> {
        let mut writer = Self {
            out,
            path: path.to_path_buf(),
            counts: vec![0; k],
        };
        writer.emit("game_id,cluster_id")?;
        Ok(writer)
    }

    /// Emit one point, in whatever order the caller iterates.
    pub fn write_point(&mut self, point: &Point) -> Result<(), ClusterError> {
        let cluster = point.cluster.expect("point written before assignment");
        self.counts[cluster] += 1;
        self.emit(&format!("{},{}", point.game_id, cluster))
    }

    pub fn finish(&mut self) -> Result<(), ClusterError> {
        self.out.flush().map_err(|source| ClusterError::OutputIo {
            path: self.path.clone(),
            source,
        })
    }

    fn emit(&mut self, line: &str) -> Result<(), ClusterError> {
        writeln!(self.out, "{}", line).map_err(|source| ClusterError::OutputIo {
            path: self.path.clone(),
            source,
        })
    }
}
