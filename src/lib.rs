//! Hand state classification from hand landmarks.
//!
//! This crate takes the 21 landmarks produced by a hand pose estimation network (such as
//! MediaPipe's hand landmark model), already mapped to pixel coordinates, and derives:
//!
//! * which hand is shown ([`HandSide`]), and whether its palm or its back faces the camera
//!   ([`HandOrientation`]),
//! * which of the five fingers are extended ([`FingerState`]).
//!
//! Every frame is classified on its own. Nothing is cached between calls, so classification can
//! be run on any number of threads at once.
//!
//! # Coordinates
//!
//! Landmark coordinates are pixel coordinates in the input image: X points to the right, Y points
//! *down*. If the image was mirrored before the landmarks were extracted (as is common for
//! front-facing cameras), pass `flipped = true` to the classification functions.
//!
//! # Environment Variables
//!
//! * `HANDSIGN_FLIP`: Sets the default mirroring for [`HandClassifier::from_env`]. `1`, `true`
//!   and `yes` mean the camera image is mirrored. Unset or `0`/`false`/`no` mean it isn't.
//!
//! [`HandSide`]: hand::orientation::HandSide
//! [`HandOrientation`]: hand::orientation::HandOrientation
//! [`FingerState`]: hand::finger::FingerState
//! [`HandClassifier::from_env`]: hand::HandClassifier::from_env

use log::LevelFilter;

pub mod error;
pub mod geometry;
pub mod hand;
pub mod landmark;

#[cfg(test)]
mod test;

pub use error::HandError;
pub use hand::{classify, HandClassifier, HandState};

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and `handsign` will log at *debug* level. `RUST_LOG` can be used to override
/// this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
