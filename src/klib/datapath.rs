use std::env;
use std::io;
use std::path::PathBuf;

/// Locates `filename` under a nearby `data/` directory, whether or not the
/// file itself exists yet (the same resolution serves input lookup and
/// output creation).
///
/// The working directory is checked first, then its parent; the first
/// existing `data/` directory wins. With neither present the fallback is
/// `<cwd>/data/<filename>`, which downstream opens will then reject.
pub fn resolve_data_path(filename: &str) -> io::Result<PathBuf> {
    let cwd = env::current_dir()?;
    let mut bases = vec![cwd.clone()];
    if let Some(parent) = cwd.parent() {
        bases.push(parent.to_path_buf());
    }
    for base in bases {
        let dir = base.join("data");
        if dir.is_dir() {
            return Ok(dir.join(filename));
        }
    }
    Ok(cwd.join("data").join(filename))
}
