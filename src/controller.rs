pub mod session {

    use crate::detector::gesture_classifier::{self, Gesture};
    use crate::landmarks::hand::HandObservation;
    use crate::smoother::decision_smoother::{DecisionSmoother, SmoothedDecision};
    use crate::stats::session_stats::SessionStats;
    use std::time::Instant;

    /// What one frame produced on its way through the pipeline.
    #[derive(Debug, PartialEq, Clone, Copy)]
    pub struct FrameOutcome {
        pub raw: Gesture,
        pub raw_confidence: f32,
        pub decision: SmoothedDecision,
        pub counted: bool,
    }

    /// Owns the smoothing window and the stats for one run, from start to shutdown.
    pub struct GestureSession {
        smoother: DecisionSmoother,
        stats: SessionStats,
        started: Instant,
    }

    impl GestureSession {
        pub fn new(window_size: usize) -> Self {
            Self {
                smoother: DecisionSmoother::new(window_size),
                stats: SessionStats::new(),
                started: Instant::now(),
            }
        }

        pub fn window_size(&self) -> usize {
            self.smoother.window_size()
        }

        pub fn stats(&self) -> &SessionStats {
            &self.stats
        }

        /// Runs one frame. A missing hand still feeds the smoother as `None`
        /// so a short dropout does not reset the vote, but is never counted.
        pub fn process(&mut self, observation: Option<&HandObservation>) -> FrameOutcome {
            let (raw, raw_confidence) = match observation {
                Some(hand) => gesture_classifier::classify(&hand.landmarks, hand.handedness),
                None => (Gesture::NoHand, 0.0),
            };

            let decision = self.smoother.update(raw, raw_confidence);

            let counted = observation.is_some() && decision.gesture.is_countable();
            if counted {
                self.stats.bump(decision.gesture);
            }

            FrameOutcome {
                raw,
                raw_confidence,
                decision,
                counted,
            }
        }

        /// Stamps the elapsed whole seconds and hands the stats over for persisting.
        pub fn finish(self) -> SessionStats {
            let mut stats = self.stats;
            stats.set_duration(self.started.elapsed().as_secs());
            stats
        }
    }

}
