pub mod status_overlay {

    use crate::detector::gesture_classifier::Gesture;
    use crate::landmarks::hand::LandmarkSet;
    use std::time::{Duration, Instant};

    const FPS_REFRESH: Duration = Duration::from_millis(500);

    /// Receives the per-frame result for display. Nothing flows back into the pipeline.
    pub trait Overlay {
        fn present(
            &mut self,
            landmarks: Option<&LandmarkSet>,
            gesture: Gesture,
            confidence: f32,
            fps: f32,
        );
    }

    pub fn status_line(gesture: Gesture, confidence: f32, fps: f32) -> String {
        format!("{} | conf={:.2} | FPS={:.1}", gesture, confidence, fps)
    }

    /// Frame rate averaged over half-second intervals.
    pub struct FpsMeter {
        since: Instant,
        frames: u32,
        value: f32,
    }

    impl FpsMeter {
        pub fn new() -> Self {
            Self {
                since: Instant::now(),
                frames: 0,
                value: 0.0,
            }
        }

        pub fn tick(&mut self) -> f32 {
            self.tick_at(Instant::now())
        }

        fn tick_at(&mut self, now: Instant) -> f32 {
            self.frames += 1;
            let elapsed = now.duration_since(self.since);
            if elapsed >= FPS_REFRESH {
                self.value = self.frames as f32 / elapsed.as_secs_f32();
                self.frames = 0;
                self.since = now;
            }
            self.value
        }
    }

    impl Default for FpsMeter {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Text-only overlay: logs the status line, and the stabilized label whenever it changes.
    #[derive(Default)]
    pub struct LogOverlay {
        last: Option<Gesture>,
    }

    impl Overlay for LogOverlay {
        fn present(
            &mut self,
            landmarks: Option<&LandmarkSet>,
            gesture: Gesture,
            confidence: f32,
            fps: f32,
        ) {
            if self.last != Some(gesture) {
                log::info!("Gesture: {} (conf={:.2})", gesture, confidence);
                self.last = Some(gesture);
            }

            match landmarks {
                Some(hand) => log::debug!(
                    "{} | wrist: {} {}",
                    status_line(gesture, confidence, fps),
                    hand.point(0).x,
                    hand.point(0).y
                ),
                None => log::debug!("{}", status_line(gesture, confidence, fps)),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn status_line_formats_like_the_banner() {
            assert_eq!(
                status_line(Gesture::Peace, 0.92857, 29.96),
                "Peace | conf=0.93 | FPS=30.0"
            );
            assert_eq!(
                status_line(Gesture::NoHand, 0.0, 0.0),
                "None | conf=0.00 | FPS=0.0"
            );
        }

        #[test]
        fn fps_refreshes_every_half_second() {
            let start = Instant::now();
            let mut meter = FpsMeter {
                since: start,
                frames: 0,
                value: 0.0,
            };

            for i in 1..15 {
                let reading = meter.tick_at(start + Duration::from_millis(i * 33));
                assert_eq!(reading, 0.0);
            }
            // 15th frame lands at 0.5 s
            let reading = meter.tick_at(start + Duration::from_millis(500));
            assert!((reading - 30.0).abs() < 1e-3);
            assert_eq!(meter.frames, 0);
        }

        #[test]
        fn log_overlay_tracks_label_changes() {
            let mut overlay = LogOverlay::default();
            overlay.present(None, Gesture::NoHand, 0.0, 0.0);
            assert_eq!(overlay.last, Some(Gesture::NoHand));
            overlay.present(None, Gesture::Hello, 1.0, 30.0);
            assert_eq!(overlay.last, Some(Gesture::Hello));
        }
    }
}
