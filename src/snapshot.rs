use super::*;
use crossbeam::thread;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Cannot access snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot encode snapshot {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
    #[error("Snapshot {} is not a cube: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
    #[error("Snapshot {} claims size {size} but its faces do not hold size*size stickers", .path.display())]
    Misshapen { path: PathBuf, size: usize },
    #[error("Checking snapshot {} aborted", .path.display())]
    Aborted { path: PathBuf },
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: usize,
    pub cube: CubeState,
}

impl Snapshot {
    pub fn new(size: usize, cube: CubeState) -> Self {
        Self { size, cube }
    }

    pub fn save(&self, file: &Path) -> Result<(), SnapshotError> {
        let bin = bincode::serialize(self).map_err(|source| SnapshotError::Encode {
            path: file.to_path_buf(),
            source,
        })?;

        fs::write(file, bin).map_err(|source| SnapshotError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        info!("saved {}x{} cube to {}", self.size, self.size, file.display());
        Ok(())
    }

    /// Snapshot files are untrusted. Only the size is checked against the face
    /// lengths here; stickers come back as written, foreign symbols included.
    pub fn load(file: &Path) -> Result<Self, SnapshotError> {
        let bin = fs::read(file).map_err(|source| SnapshotError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        let snapshot: Snapshot =
            bincode::deserialize(&bin).map_err(|source| SnapshotError::Decode {
                path: file.to_path_buf(),
                source,
            })?;

        if !snapshot.is_well_shaped() {
            return Err(SnapshotError::Misshapen {
                path: file.to_path_buf(),
                size: snapshot.size,
            });
        }
        info!(
            "loaded {}x{} cube from {}",
            snapshot.size,
            snapshot.size,
            file.display()
        );
        Ok(snapshot)
    }

    fn is_well_shaped(&self) -> bool {
        match self.size.checked_mul(self.size) {
            Some(len) => Face::FACE_SET
                .iter()
                .all(|face| self.cube.face(*face).len() == len),
            None => false,
        }
    }

    pub fn advise(&self) -> SolveResult {
        Advisor::new(&self.cube, self.size).solve()
    }

    // one thread per file, results in input order
    pub fn check_all(files: &[PathBuf]) -> Vec<(PathBuf, Result<SolveResult, SnapshotError>)> {
        thread::scope(|s| {
            let workers: Vec<_> = files
                .iter()
                .map(|file| {
                    (
                        file,
                        s.spawn(move |_| Self::load(file).map(|snap| snap.advise())),
                    )
                })
                .collect();

            workers
                .into_iter()
                .map(|(file, worker)| {
                    let outcome = worker.join().unwrap_or_else(|_| {
                        Err(SnapshotError::Aborted {
                            path: file.clone(),
                        })
                    });
                    (file.clone(), outcome)
                })
                .collect()
        })
        .unwrap_or_default()
    }
}
