pub mod decision_smoother {

    use crate::detector::gesture_classifier::Gesture;

    pub const DEFAULT_WINDOW: usize = 7;
    pub const MIN_WINDOW: usize = 3;

    /// Fixed-capacity circular buffer. Once full, each push overwrites the oldest slot.
    pub struct RingWindow<T> {
        slots: Vec<T>,
        capacity: usize,
        // Index of the oldest entry once the buffer has wrapped
        head: usize,
    }

    impl<T> RingWindow<T> {
        /// A capacity of zero is raised to one.
        pub fn with_capacity(capacity: usize) -> Self {
            let capacity = capacity.max(1);
            Self {
                slots: Vec::with_capacity(capacity),
                capacity,
                head: 0,
            }
        }

        pub fn push(&mut self, value: T) {
            if self.slots.len() < self.capacity {
                self.slots.push(value);
            } else {
                self.slots[self.head] = value;
                self.head = (self.head + 1) % self.capacity;
            }
        }

        /// Iterates from the oldest entry to the newest.
        pub fn iter(&self) -> impl Iterator<Item = &T> {
            let (newer, older) = self.slots.split_at(self.head);
            older.iter().chain(newer.iter())
        }

        pub fn len(&self) -> usize {
            self.slots.len()
        }

        pub fn is_empty(&self) -> bool {
            self.slots.is_empty()
        }

        pub fn capacity(&self) -> usize {
            self.capacity
        }
    }

    #[derive(Debug, PartialEq, Clone, Copy)]
    pub struct SmoothedDecision {
        pub gesture: Gesture,
        /// 0.5 * vote share + 0.5 * mean raw confidence
        pub confidence: f32,
        pub win_ratio: f32,
        pub mean_confidence: f32,
    }

    /// Majority vote over the most recent raw decisions.
    pub struct DecisionSmoother {
        window: RingWindow<(Gesture, f32)>,
    }

    impl DecisionSmoother {
        pub fn new(window_size: usize) -> Self {
            Self {
                window: RingWindow::with_capacity(window_size.max(MIN_WINDOW)),
            }
        }

        pub fn window_size(&self) -> usize {
            self.window.capacity()
        }

        pub fn update(&mut self, gesture: Gesture, confidence: f32) -> SmoothedDecision {
            self.window.push((gesture, confidence));

            // Counted in order of first appearance so ties go to the oldest label
            let mut counts: Vec<(Gesture, usize)> = Vec::with_capacity(self.window.len());
            for (label, _) in self.window.iter() {
                match counts.iter_mut().find(|(seen, _)| seen == label) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((*label, 1)),
                }
            }

            let mut winner = counts[0];
            for &candidate in &counts[1..] {
                if candidate.1 > winner.1 {
                    winner = candidate;
                }
            }

            let len = self.window.len() as f32;
            let win_ratio = winner.1 as f32 / len;
            let mean_confidence = self.window.iter().map(|(_, c)| c).sum::<f32>() / len;

            SmoothedDecision {
                gesture: winner.0,
                confidence: 0.5 * win_ratio + 0.5 * mean_confidence,
                win_ratio,
                mean_confidence,
            }
        }
    }

    impl Default for DecisionSmoother {
        fn default() -> Self {
            Self::new(DEFAULT_WINDOW)
        }
    }

}
