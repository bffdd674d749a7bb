pub mod gesture_classifier {

    use crate::landmarks::hand::{
        Handedness, LandmarkSet, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP,
        PINKY_TIP, RING_PIP, RING_TIP, THUMB_IP, THUMB_TIP,
    };
    use std::fmt;

    /// Pinch tolerance for "Okay", as a fraction of the hand bounding-box diagonal.
    const OK_CIRCLE_TOLERANCE: f64 = 0.06;

    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
    pub enum Gesture {
        Hello,
        Stop,
        Peace,
        Like,
        Okay,
        Unknown,
        /// No hand in the frame, reported as "None".
        NoHand,
    }

    impl Gesture {
        pub fn as_str(&self) -> &'static str {
            match self {
                Gesture::Hello => "Hello",
                Gesture::Stop => "Stop",
                Gesture::Peace => "Peace",
                Gesture::Like => "Like",
                Gesture::Okay => "Okay",
                Gesture::Unknown => "Unknown",
                Gesture::NoHand => "None",
            }
        }

        /// Whether a stabilized decision on this label should be counted in session stats.
        pub fn is_countable(&self) -> bool {
            !matches!(self, Gesture::Unknown | Gesture::NoHand)
        }
    }

    impl fmt::Display for Gesture {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    #[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
    pub struct FingerStates {
        pub thumb: bool,
        pub index: bool,
        pub middle: bool,
        pub ring: bool,
        pub pinky: bool,
    }

    impl FingerStates {
        pub fn all(&self) -> bool {
            self.thumb && self.index && self.middle && self.ring && self.pinky
        }

        pub fn none(&self) -> bool {
            !(self.thumb || self.index || self.middle || self.ring || self.pinky)
        }
    }

    pub fn finger_states(hand: &LandmarkSet, handedness: Handedness) -> FingerStates {
        // Image y grows downwards, so an extended finger has its tip above the PIP joint
        let extended = |tip: usize, pip: usize| hand.point(tip).y < hand.point(pip).y;

        let thumb_tip = hand.point(THUMB_TIP);
        let thumb_ip = hand.point(THUMB_IP);
        let thumb = match handedness {
            Handedness::Right => thumb_tip.x > thumb_ip.x,
            Handedness::Left => thumb_tip.x < thumb_ip.x,
        };

        FingerStates {
            thumb,
            index: extended(INDEX_TIP, INDEX_PIP),
            middle: extended(MIDDLE_TIP, MIDDLE_PIP),
            ring: extended(RING_TIP, RING_PIP),
            pinky: extended(PINKY_TIP, PINKY_PIP),
        }
    }

    /// Everything a rule may look at for one frame.
    pub struct RuleInput<'a> {
        pub hand: &'a LandmarkSet,
        pub fingers: FingerStates,
    }

    impl RuleInput<'_> {
        fn thumb_points_up(&self) -> bool {
            self.hand.point(THUMB_TIP).y < self.hand.point(THUMB_IP).y
        }

        fn ok_circle(&self) -> bool {
            let pinch = self
                .hand
                .point(THUMB_TIP)
                .distance(&self.hand.point(INDEX_TIP));
            pinch <= OK_CIRCLE_TOLERANCE * self.hand.bbox_diagonal()
        }
    }

    pub struct Rule {
        pub gesture: Gesture,
        pub matches: fn(&RuleInput) -> bool,
    }

    /// Evaluated in order; the first match wins.
    pub const RULES: [Rule; 5] = [
        Rule {
            gesture: Gesture::Hello,
            matches: |input| input.fingers.all(),
        },
        Rule {
            gesture: Gesture::Stop,
            matches: |input| input.fingers.none(),
        },
        Rule {
            gesture: Gesture::Peace,
            matches: |input| {
                let f = input.fingers;
                f.index && f.middle && !f.ring && !f.pinky
            },
        },
        Rule {
            gesture: Gesture::Like,
            matches: |input| {
                let f = input.fingers;
                input.thumb_points_up() && !f.index && !f.middle && !f.ring && !f.pinky
            },
        },
        Rule {
            gesture: Gesture::Okay,
            matches: |input| {
                let f = input.fingers;
                input.ok_circle() && (f.middle || f.ring || f.pinky)
            },
        },
    ];

    /// Picks the first matching rule, scoring it 1.0. Falls back to (Unknown, 0.0).
    pub fn select(rules: &[Rule], input: &RuleInput) -> (Gesture, f32) {
        rules
            .iter()
            .find(|rule| (rule.matches)(input))
            .map(|rule| (rule.gesture, 1.0))
            .unwrap_or((Gesture::Unknown, 0.0))
    }

    pub fn classify(hand: &LandmarkSet, handedness: Handedness) -> (Gesture, f32) {
        let input = RuleInput {
            hand,
            fingers: finger_states(hand, handedness),
        };
        select(&RULES, &input)
    }


    #[cfg(test)]
    mod tests {
        use super::fixtures::HandBuilder;
        use super::*;

        fn open_palm(handedness: Handedness) -> LandmarkSet {
            let thumb_x = match handedness {
                Handedness::Right => 90,
                Handedness::Left => 30,
            };
            HandBuilder::curled()
                .extend_all_fingers()
                .set(THUMB_TIP, thumb_x, 120)
                .build()
        }

        #[test]
        fn open_palm_is_hello_for_both_hands() {
            for handedness in [Handedness::Left, Handedness::Right] {
                let hand = open_palm(handedness);
                assert!(finger_states(&hand, handedness).all());
                assert_eq!(classify(&hand, handedness), (Gesture::Hello, 1.0));
            }
        }

        #[test]
        fn thumb_extension_is_mirrored_by_handedness() {
            let hand = open_palm(Handedness::Right);
            assert!(finger_states(&hand, Handedness::Right).thumb);
            assert!(!finger_states(&hand, Handedness::Left).thumb);
        }

        #[test]
        fn fist_is_stop() {
            let hand = HandBuilder::curled().build();
            let states = finger_states(&hand, Handedness::Right);
            assert!(states.none());
            assert!(!states.all());
            assert_eq!(classify(&hand, Handedness::Right), (Gesture::Stop, 1.0));
        }

        #[test]
        fn two_fingers_is_peace() {
            let hand = HandBuilder::curled().extend(8, 6).extend(12, 10).build();
            assert_eq!(classify(&hand, Handedness::Right), (Gesture::Peace, 1.0));
        }

        #[test]
        fn raised_thumb_is_like_only_when_extended() {
            // Thumb points up but sits on the palm side, so it does not count as extended
            let hand = HandBuilder::curled().set(THUMB_TIP, 55, 60).build();
            let states = finger_states(&hand, Handedness::Right);
            assert!(!states.thumb);
            // With no extended finger Stop comes first
            assert_eq!(classify(&hand, Handedness::Right), (Gesture::Stop, 1.0));

            // Once the thumb sticks out sideways the fist rule no longer applies
            let hand = HandBuilder::curled().set(THUMB_TIP, 70, 60).build();
            assert!(finger_states(&hand, Handedness::Right).thumb);
            assert_eq!(classify(&hand, Handedness::Right), (Gesture::Like, 1.0));
        }

        #[test]
        fn pinch_with_raised_fingers_is_okay() {
            let hand = HandBuilder::curled()
                .extend(12, 10)
                .extend(16, 14)
                .extend(20, 18)
                .set(THUMB_TIP, 82, 128)
                .build();
            assert_eq!(classify(&hand, Handedness::Right), (Gesture::Okay, 1.0));
        }

        #[test]
        fn pinch_with_curled_fingers_is_not_okay() {
            let hand = HandBuilder::curled()
                .set(THUMB_IP, 90, 120)
                .set(THUMB_TIP, 82, 128)
                .build();
            let input = RuleInput {
                hand: &hand,
                fingers: finger_states(&hand, Handedness::Right),
            };
            assert!(input.ok_circle());
            assert_eq!(classify(&hand, Handedness::Right), (Gesture::Stop, 1.0));

            // Same pinch seen as a left hand: the thumb now counts as extended
            assert_eq!(classify(&hand, Handedness::Left), (Gesture::Unknown, 0.0));
        }

        #[test]
        fn unmatched_hand_is_unknown() {
            // Index alone raised matches none of the rules
            let hand = HandBuilder::curled().extend(8, 6).build();
            assert_eq!(classify(&hand, Handedness::Right), (Gesture::Unknown, 0.0));
        }

        #[test]
        fn earlier_rule_wins_when_several_match() {
            // Open palm with the thumb touching the index tip satisfies Hello and Okay
            let hand = HandBuilder::curled()
                .extend_all_fingers()
                .set(THUMB_TIP, 84, 62)
                .build();
            let input = RuleInput {
                hand: &hand,
                fingers: finger_states(&hand, Handedness::Right),
            };
            let matching: Vec<Gesture> = RULES
                .iter()
                .filter(|rule| (rule.matches)(&input))
                .map(|rule| rule.gesture)
                .collect();
            assert_eq!(matching, vec![Gesture::Hello, Gesture::Okay]);
            assert_eq!(classify(&hand, Handedness::Right), (Gesture::Hello, 1.0));
        }

        #[test]
        fn select_honours_declaration_order() {
            // Degenerate rule list where Hello and Stop both always hold
            let rules = [
                Rule {
                    gesture: Gesture::Hello,
                    matches: |_| true,
                },
                Rule {
                    gesture: Gesture::Stop,
                    matches: |_| true,
                },
            ];
            let hand = HandBuilder::curled().build();
            let input = RuleInput {
                hand: &hand,
                fingers: FingerStates::default(),
            };
            assert_eq!(select(&rules, &input), (Gesture::Hello, 1.0));
            assert_eq!(select(&rules[1..], &input), (Gesture::Stop, 1.0));
            assert_eq!(select(&[], &input), (Gesture::Unknown, 0.0));
        }

        #[test]
        fn no_hand_label_reads_none() {
            assert_eq!(Gesture::NoHand.to_string(), "None");
            assert!(!Gesture::NoHand.is_countable());
            assert!(!Gesture::Unknown.is_countable());
            assert!(Gesture::Peace.is_countable());
        }
    }
}
