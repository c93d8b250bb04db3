//! Classification of hand side, palm orientation and finger extension.

pub mod finger;
pub mod orientation;
pub mod skeleton;

use std::env;

use crate::{error::HandError, landmark::LandmarkSet};

use self::{
    finger::{classify_fingers, FingerState},
    orientation::{classify_hand_orientation, HandOrientation, HandSide},
};

/// Environment variable read by [`HandClassifier::from_env`].
pub const FLIP_ENV_VAR: &str = "HANDSIGN_FLIP";

/// Everything derived from the landmarks of one hand in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandState {
    pub side: HandSide,
    pub orientation: HandOrientation,
    pub fingers: FingerState,
}

/// Classifies side, orientation and fingers of the hand in `landmarks`.
///
/// # Errors
///
/// Returns [`HandError::EmptyLandmarkSet`] if `landmarks` contains no hand.
pub fn classify(landmarks: &LandmarkSet, flipped: bool) -> Result<HandState, HandError> {
    let (side, orientation) = classify_hand_orientation(landmarks, flipped)?;
    let fingers = classify_fingers(landmarks, flipped)?;
    Ok(HandState {
        side,
        orientation,
        fingers,
    })
}

/// Classifies hands seen by a particular camera.
///
/// This only stores whether the camera image is mirrored, so a single [`HandClassifier`] can be
/// shared between threads freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandClassifier {
    flipped: bool,
}

impl HandClassifier {
    /// Creates a classifier for camera images that are not mirrored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classifier configured from the `HANDSIGN_FLIP` environment variable.
    ///
    /// Unrecognized values are logged and treated as "not mirrored".
    pub fn from_env() -> Self {
        let flipped = match env::var(FLIP_ENV_VAR) {
            Ok(value) => parse_flag(&value).unwrap_or_else(|| {
                log::warn!(
                    "ignoring unrecognized value {:?} for {}",
                    value,
                    FLIP_ENV_VAR
                );
                false
            }),
            Err(_) => false,
        };
        log::debug!("{}={}", FLIP_ENV_VAR, flipped);
        Self { flipped }
    }

    /// Sets whether the camera image is mirrored horizontally before landmarks are extracted.
    ///
    /// Front-facing cameras typically deliver mirrored images.
    pub fn flipped(self, flipped: bool) -> Self {
        Self { flipped }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn classify(&self, landmarks: &LandmarkSet) -> Result<HandState, HandError> {
        classify(landmarks, self.flipped)
    }

    pub fn hand_orientation(
        &self,
        landmarks: &LandmarkSet,
    ) -> Result<(HandSide, HandOrientation), HandError> {
        classify_hand_orientation(landmarks, self.flipped)
    }

    pub fn fingers(&self, landmarks: &LandmarkSet) -> Result<FingerState, HandError> {
        classify_fingers(landmarks, self.flipped)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "" | "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::open_right_hand;

    #[test]
    fn classify_open_hand() {
        let state = classify(&open_right_hand(), false).unwrap();
        assert_eq!(state.side, HandSide::Right);
        assert_eq!(state.orientation, HandOrientation::Front);
        assert_eq!(state.fingers, FingerState::ALL_EXTENDED);
    }

    #[test]
    fn classifier_matches_free_functions() {
        let hand = open_right_hand();
        for flipped in [false, true] {
            let classifier = HandClassifier::new().flipped(flipped);
            assert_eq!(classifier.is_flipped(), flipped);
            assert_eq!(classifier.classify(&hand), classify(&hand, flipped));
            assert_eq!(
                classifier.hand_orientation(&hand),
                classify_hand_orientation(&hand, flipped)
            );
            assert_eq!(
                classifier.fingers(&hand),
                classify_fingers(&hand, flipped)
            );
        }
    }

    #[test]
    fn empty_frame() {
        assert_eq!(
            HandClassifier::new().classify(&LandmarkSet::empty()),
            Err(HandError::EmptyLandmarkSet)
        );
    }

    #[test]
    fn flags() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("yes"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("mirrored"), None);
    }
}
