//! Error type shared by the classification and geometry functions.

use std::{error::Error, fmt};

use crate::landmark::LANDMARK_COUNT;

/// Errors returned when classifying a hand or converting measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandError {
    /// No hand was detected in this frame, so there is nothing to classify.
    ///
    /// This is expected to happen regularly. Callers should skip the frame.
    EmptyLandmarkSet,
    /// A landmark set had neither zero nor 21 entries.
    ///
    /// This means the pose estimation network does not produce the 21-point hand skeleton.
    MalformedLandmarkSet { len: usize },
    /// The landmark at position `index` carries identifier `id`.
    MisplacedLandmark { index: usize, id: u8 },
    /// A pixel width of zero was passed to
    /// [`pixels_to_real_world_width`][crate::geometry::pixels_to_real_world_width].
    ZeroPixelWidth,
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandError::EmptyLandmarkSet => f.write_str("no hand found in landmark set"),
            HandError::MalformedLandmarkSet { len } => write!(
                f,
                "expected 0 or {} hand landmarks, got {}",
                LANDMARK_COUNT, len
            ),
            HandError::MisplacedLandmark { index, id } => write!(
                f,
                "landmark at position {} has identifier {}",
                index, id
            ),
            HandError::ZeroPixelWidth => f.write_str("pixel width must not be zero"),
        }
    }
}

impl Error for HandError {}
