pub mod session_stats {

    use crate::detector::gesture_classifier::Gesture;
    use anyhow::{Context, Result};
    use std::collections::BTreeMap;
    use std::fs::{self, File};
    use std::io::{BufWriter, Write};
    use std::path::Path;

    /// Key the session length is stored under, next to the gesture counts.
    pub const DURATION_KEY: &str = "duration_sec";

    /// Per-gesture counters plus the session length.
    /// Counts whatever it is given; the caller decides which decisions are worth counting.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct SessionStats {
        counts: BTreeMap<Gesture, u64>,
        duration_sec: u64,
    }

    impl SessionStats {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn bump(&mut self, gesture: Gesture) {
            *self.counts.entry(gesture).or_insert(0) += 1;
        }

        pub fn set_duration(&mut self, seconds: u64) {
            self.duration_sec = seconds;
        }

        pub fn count(&self, gesture: Gesture) -> u64 {
            self.counts.get(&gesture).copied().unwrap_or(0)
        }

        pub fn duration_sec(&self) -> u64 {
            self.duration_sec
        }

        pub fn snapshot(&self) -> BTreeMap<String, u64> {
            let mut flat: BTreeMap<String, u64> = self
                .counts
                .iter()
                .map(|(gesture, count)| (gesture.to_string(), *count))
                .collect();
            flat.insert(DURATION_KEY.to_string(), self.duration_sec);
            flat
        }

        /// Writes the snapshot as indented JSON, creating parent directories as needed.
        pub fn save(&self, path: &Path) -> Result<()> {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }

            let file =
                File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &self.snapshot())?;
            writer.flush()?;

            Ok(())
        }
    }

}
