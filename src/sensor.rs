pub mod landmark_source {

    use crate::landmarks::hand::{HandObservation, Handedness, LandmarkSet};
    use anyhow::{Context, Result};
    use serde::Deserialize;
    use std::fs::File;
    use std::io::{BufRead, BufReader};
    use std::path::Path;

    /// Anything that can turn a frame into at most one hand.
    pub trait LandmarkSource {
        type Frame;

        fn detect(&mut self, frame: &Self::Frame) -> Result<Option<HandObservation>>;
    }

    /// Confidence gates handed to the source. Detection applies when no hand
    /// was seen on the previous frame, tracking while one is being followed.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DetectorSettings {
        pub min_detection_confidence: f32,
        pub min_tracking_confidence: f32,
    }

    impl Default for DetectorSettings {
        fn default() -> Self {
            Self {
                min_detection_confidence: 0.7,
                min_tracking_confidence: 0.6,
            }
        }
    }

    /// One line of a landmark recording.
    #[derive(Debug, Clone, PartialEq, Deserialize)]
    pub struct RecordedFrame {
        #[serde(default)]
        pub hand: Option<RecordedHand>,
    }

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    pub struct RecordedHand {
        pub handedness: Handedness,
        #[serde(default = "full_score")]
        pub score: f32,
        /// Normalized (x, y) pairs in [0, 1]
        pub landmarks: Vec<[f32; 2]>,
    }

    fn full_score() -> f32 {
        1.0
    }

    /// Reads a JSON Lines recording. Blank lines are ignored; lines that fail
    /// to parse are reported and skipped so one bad frame does not end the replay.
    pub fn read_recording<P: AsRef<Path>>(path: P) -> Result<Vec<RecordedFrame>> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

        let mut frames = Vec::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<RecordedFrame>(&line) {
                Ok(frame) => frames.push(frame),
                Err(e) => log::warn!("Skipping {}:{}: {}", path.display(), line_no + 1, e),
            }
        }

        log::info!("Loaded {} frames from {}", frames.len(), path.display());
        Ok(frames)
    }

    /// Replays recorded model output as if it came from a live detector.
    pub struct ReplaySource {
        settings: DetectorSettings,
        width: u32,
        height: u32,
        tracking: bool,
    }

    impl ReplaySource {
        pub fn new(settings: DetectorSettings, width: u32, height: u32) -> Self {
            Self {
                settings,
                width,
                height,
                tracking: false,
            }
        }

        fn threshold(&self) -> f32 {
            if self.tracking {
                self.settings.min_tracking_confidence
            } else {
                self.settings.min_detection_confidence
            }
        }
    }

    impl LandmarkSource for ReplaySource {
        type Frame = RecordedFrame;

        fn detect(&mut self, frame: &RecordedFrame) -> Result<Option<HandObservation>> {
            let hand = match &frame.hand {
                Some(hand) if hand.score >= self.threshold() => hand,
                _ => {
                    self.tracking = false;
                    return Ok(None);
                }
            };

            let data: Vec<f32> = hand.landmarks.iter().flatten().copied().collect();
            let landmarks = LandmarkSet::from_normalized(
                &[hand.landmarks.len(), 2],
                &data,
                self.width,
                self.height,
            )?;

            self.tracking = true;
            Ok(Some(HandObservation {
                landmarks,
                handedness: hand.handedness,
            }))
        }
    }

}
