pub mod hand {

    use ndarray::{ArrayView, Ix2};
    use serde::Deserialize;
    use std::fmt;
    use thiserror::Error;

    // MediaPipe hand landmark layout
    pub const LANDMARK_COUNT: usize = 21;
    pub const THUMB_IP: usize = 2;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_PIP: usize = 14;
    pub const RING_TIP: usize = 16;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_TIP: usize = 20;

    #[derive(Error, Debug, PartialEq)]
    pub enum LandmarkError {
        #[error("Expected {expected} landmarks, got {actual}")]
        WrongCount { expected: usize, actual: usize },

        #[error("Landmark array has shape {shape:?}, expected [21, 2]")]
        BadShape { shape: Vec<usize> },

        #[error("Landmark {index} at ({x}, {y}) lies outside the frame")]
        NegativeCoordinate { index: usize, x: i32, y: i32 },

        #[error("Frame of {width}x{height} is too large for pixel coordinates")]
        FrameTooLarge { width: u32, height: u32 },
    }

    #[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
    pub struct Point {
        pub x: i32,
        pub y: i32,
    }

    impl Point {
        pub fn new(x: i32, y: i32) -> Self {
            Self { x, y }
        }

        pub fn distance(&self, other: &Point) -> f64 {
            let dx = self.x as f64 - other.x as f64;
            let dy = self.y as f64 - other.y as f64;
            (dx * dx + dy * dy).sqrt()
        }
    }

    #[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
    pub enum Handedness {
        Left,
        Right,
    }

    impl fmt::Display for Handedness {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Handedness::Left => write!(f, "Left"),
                Handedness::Right => write!(f, "Right"),
            }
        }
    }

    /// The 21 pixel-space landmarks of one detected hand.
    #[derive(Debug, Clone, PartialEq)]
    pub struct LandmarkSet {
        points: [Point; LANDMARK_COUNT],
    }

    impl LandmarkSet {
        pub fn from_points(points: &[Point]) -> Result<Self, LandmarkError> {
            let points: [Point; LANDMARK_COUNT] =
                points.try_into().map_err(|_| LandmarkError::WrongCount {
                    expected: LANDMARK_COUNT,
                    actual: points.len(),
                })?;

            if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| p.x < 0 || p.y < 0) {
                return Err(LandmarkError::NegativeCoordinate {
                    index,
                    x: p.x,
                    y: p.y,
                });
            }

            Ok(Self { points })
        }

        /// Scales a [21, 2] array of normalized (x, y) model outputs to pixel coordinates.
        /// Coordinates are truncated and clamped to the frame.
        pub fn from_normalized(
            shape: &[usize],
            data: &[f32],
            width: u32,
            height: u32,
        ) -> Result<Self, LandmarkError> {
            let bad_shape = || LandmarkError::BadShape {
                shape: shape.to_vec(),
            };

            let coords = ArrayView::from_shape(shape.to_vec(), data)
                .map_err(|_| bad_shape())?
                .into_dimensionality::<Ix2>()
                .map_err(|_| bad_shape())?;

            if coords.ncols() != 2 {
                return Err(bad_shape());
            }
            if coords.nrows() != LANDMARK_COUNT {
                return Err(LandmarkError::WrongCount {
                    expected: LANDMARK_COUNT,
                    actual: coords.nrows(),
                });
            }

            let too_large = || LandmarkError::FrameTooLarge { width, height };
            let max_x = i32::try_from(width.saturating_sub(1)).map_err(|_| too_large())?;
            let max_y = i32::try_from(height.saturating_sub(1)).map_err(|_| too_large())?;

            let mut points = [Point::default(); LANDMARK_COUNT];
            for (point, row) in points.iter_mut().zip(coords.rows()) {
                point.x = ((row[0] * width as f32) as i32).clamp(0, max_x);
                point.y = ((row[1] * height as f32) as i32).clamp(0, max_y);
            }

            Ok(Self { points })
        }

        pub fn point(&self, index: usize) -> Point {
            self.points[index]
        }

        pub fn points(&self) -> &[Point] {
            &self.points
        }

        /// Diagonal of the bounding box, each side padded by one pixel so it never collapses.
        pub fn bbox_diagonal(&self) -> f64 {
            let (mut min_x, mut max_x) = (i32::MAX, i32::MIN);
            let (mut min_y, mut max_y) = (i32::MAX, i32::MIN);
            for p in &self.points {
                min_x = min_x.min(p.x);
                max_x = max_x.max(p.x);
                min_y = min_y.min(p.y);
                max_y = max_y.max(p.y);
            }

            let w = max_x as f64 - min_x as f64 + 1.0;
            let h = max_y as f64 - min_y as f64 + 1.0;
            (w * w + h * h).sqrt()
        }
    }

    /// One detected hand as handed over by a landmark source.
    #[derive(Debug, Clone, PartialEq)]
    pub struct HandObservation {
        pub landmarks: LandmarkSet,
        pub handedness: Handedness,
    }

}
