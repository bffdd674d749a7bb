//! Static hand gesture recognition from 21-point hand landmarks.
//!
//! Per frame: a landmark source yields at most one hand, the rule classifier
//! labels it, the decision smoother takes a majority vote over recent frames,
//! and the session counts stable gestures until shutdown.

pub mod controller;
pub mod detector;
pub mod landmarks;
pub mod overlay;
pub mod sensor;
pub mod smoother;
pub mod stats;
