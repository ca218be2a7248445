use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(name = "kluster")]
#[command(about = "K-means cLUSTERing of game feature tables")]
#[command(version)]
pub struct ArgParser {
    /// Number of clusters
    #[arg(default_value_t = 5)]
    pub clusters: i64,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl ArgParser {
    /// Validate command line arguments
    pub fn validate(&self) -> bool {
        let mut is_ok = true;

        if self.clusters < 1 {
            error!("clusters must be at least 1");
            is_ok = false;
        }

        is_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_cluster_counts() {
        let mut args = ArgParser {
            clusters: 0,
            debug: false,
        };
        assert!(!args.validate());
        args.clusters = -4;
        assert!(!args.validate());
        args.clusters = 1;
        assert!(args.validate());
    }
}
