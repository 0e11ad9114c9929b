// src/dataset/corpus.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::chart::BeatmapLoader;
use crate::error::{PipelineError, Result};

use super::labels::LabelIndex;
use super::sharding::{worker_subrange, TrackRange};
use super::windows::WindowIterator;

/// Enumerate all chart files for tracks in `range`.
///
/// Tracks are stored as `<root>/TrackNNNNN/beatmaps/*` with a 5-digit
/// zero-padded index. The listing is sorted so that successive passes
/// see the same order; a missing or unreadable track directory is
/// fatal.
pub fn track_files(root: &Path, range: TrackRange) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for track in range.start..range.end {
        let dir = root.join(format!("Track{track:05}")).join("beatmaps");
        let entries = std::fs::read_dir(&dir).map_err(|e| {
            PipelineError::chart_with_source(&dir, "failed to list track directory", e)
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| {
                PipelineError::chart_with_source(&dir, "failed to read directory entry", e)
            })?;
            files.push(entry.path());
        }
    }

    files.sort();
    Ok(files)
}

/// A re-entrant, shardable window stream over a range of tracks.
///
/// Each call to [`iter`](Self::iter) enumerates the chart files afresh
/// and returns an independent [`WindowIterator`], so one dataset value
/// supports any number of passes. Multi-worker runs hand each worker
/// its own dataset via [`shard`](Self::shard); workers never share a
/// range value.
#[derive(Clone)]
pub struct WindowDataset {
    loader: Arc<dyn BeatmapLoader>,
    labels: Arc<LabelIndex>,
    root: PathBuf,
    range: TrackRange,
    seq_len: usize,
    stride: usize,
    shuffle: bool,
    seed: Option<u64>,
}

impl WindowDataset {
    pub fn new(
        loader: Arc<dyn BeatmapLoader>,
        labels: Arc<LabelIndex>,
        root: impl Into<PathBuf>,
        range: TrackRange,
        seq_len: usize,
        stride: usize,
    ) -> Self {
        Self {
            loader,
            labels,
            root: root.into(),
            range,
            seq_len,
            stride,
            shuffle: false,
            seed: None,
        }
    }

    /// Shuffle the file order independently on every pass.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Seed the shuffle for reproducible passes.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn range(&self) -> TrackRange {
        self.range
    }

    /// A new dataset restricted to the sub-range worker `worker_id` of
    /// `num_workers` owns. The receiver is left untouched.
    #[must_use]
    pub fn shard(&self, num_workers: u32, worker_id: u32) -> Self {
        let mut shard = self.clone();
        shard.range = worker_subrange(self.range, num_workers, worker_id);
        shard
    }

    /// Start a fresh pass over the dataset.
    pub fn iter(&self) -> Result<WindowIterator> {
        let mut files = track_files(&self.root, self.range)?;

        if self.shuffle {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            files.shuffle(&mut rng);
        }

        tracing::debug!(
            files = files.len(),
            start = self.range.start,
            end = self.range.end,
            "starting dataset pass"
        );

        Ok(WindowIterator::new(
            self.loader.clone(),
            self.labels.clone(),
            files,
            self.seq_len,
            self.stride,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Beatmap, HitObject, LoadOptions, Position};
    use std::collections::HashMap;
    use std::fs;
    use std::sync::Mutex;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Mock loader keyed by file name, ignoring the directory.
    struct MockLoader {
        beatmaps: Mutex<HashMap<String, Beatmap>>,
    }

    impl MockLoader {
        fn new() -> Self {
            Self {
                beatmaps: Mutex::new(HashMap::new()),
            }
        }

        fn add(&self, name: &str, beatmap: Beatmap) {
            self.beatmaps
                .lock()
                .unwrap()
                .insert(name.to_string(), beatmap);
        }
    }

    impl BeatmapLoader for MockLoader {
        fn load(&self, path: &Path, _options: LoadOptions) -> Result<Beatmap> {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            self.beatmaps
                .lock()
                .unwrap()
                .get(&name)
                .cloned()
                .ok_or_else(|| PipelineError::chart(path, "parse failed"))
        }
    }

    fn circles(beatmap_id: u64, n: usize) -> Beatmap {
        Beatmap {
            beatmap_id,
            hit_objects: (0..n)
                .map(|i| HitObject::Circle {
                    time: Duration::from_millis(i as u64 * 100),
                    position: Position::new(i as f32, 0.0),
                })
                .collect(),
        }
    }

    /// Lay out `Track00000..Track<n>` with one chart file each.
    fn build_corpus(tracks: usize) -> (TempDir, Arc<MockLoader>, Arc<LabelIndex>) {
        let dir = TempDir::new().unwrap();
        let loader = Arc::new(MockLoader::new());
        let mut labels = HashMap::new();

        for track in 0..tracks {
            let beatmaps = dir.path().join(format!("Track{track:05}")).join("beatmaps");
            fs::create_dir_all(&beatmaps).unwrap();
            let name = format!("chart{track}.osu");
            fs::write(beatmaps.join(&name), b"").unwrap();

            let id = 1000 + track as u64;
            loader.add(&name, circles(id, 30));
            labels.insert(id, track as u32);
        }

        (dir, loader, Arc::new(LabelIndex::from_map(labels)))
    }

    #[test]
    fn test_track_files_enumeration() {
        let (dir, _loader, _labels) = build_corpus(3);
        let files = track_files(dir.path(), TrackRange::new(0, 3)).unwrap();
        assert_eq!(files.len(), 3);
        // Sorted, so track order is stable
        assert!(files[0].ends_with("Track00000/beatmaps/chart0.osu"));
        assert!(files[2].ends_with("Track00002/beatmaps/chart2.osu"));
    }

    #[test]
    fn test_track_files_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        assert!(track_files(dir.path(), TrackRange::new(0, 1)).is_err());
    }

    #[test]
    fn test_range_restricts_files() {
        let (dir, _loader, _labels) = build_corpus(5);
        let files = track_files(dir.path(), TrackRange::new(1, 3)).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("Track00001/beatmaps/chart1.osu"));
    }

    #[test]
    fn test_two_passes_identical_without_shuffle() {
        let (dir, loader, labels) = build_corpus(4);
        let dataset = WindowDataset::new(
            loader,
            labels,
            dir.path(),
            TrackRange::new(0, 4),
            10,
            5,
        );

        let first: Vec<_> = dataset.iter().unwrap().map(|w| w.unwrap()).collect();
        let second: Vec<_> = dataset.iter().unwrap().map(|w| w.unwrap()).collect();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_shuffle_reproducible() {
        let (dir, loader, labels) = build_corpus(6);
        let dataset = WindowDataset::new(
            loader,
            labels,
            dir.path(),
            TrackRange::new(0, 6),
            10,
            10,
        )
        .with_shuffle(true)
        .with_seed(Some(42));

        let first: Vec<u32> = dataset
            .iter()
            .unwrap()
            .map(|w| w.unwrap().label)
            .collect();
        let second: Vec<u32> = dataset
            .iter()
            .unwrap()
            .map(|w| w.unwrap().label)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shards_cover_dataset_once() {
        let (dir, loader, labels) = build_corpus(5);
        let dataset = WindowDataset::new(
            loader,
            labels,
            dir.path(),
            TrackRange::new(0, 5),
            10,
            10,
        );

        let full: Vec<u32> = dataset
            .iter()
            .unwrap()
            .map(|w| w.unwrap().label)
            .collect();

        let mut sharded = Vec::new();
        for worker_id in 0..2 {
            let shard = dataset.shard(2, worker_id);
            sharded.extend(shard.iter().unwrap().map(|w| w.unwrap().label));
        }

        assert_eq!(full, sharded);
        // The original dataset's range is untouched
        assert_eq!(dataset.range(), TrackRange::new(0, 5));
    }
}
