//! Hand side and palm orientation.

use std::fmt;

use crate::{error::HandError, hand::skeleton::LandmarkIdx, landmark::LandmarkSet};

/// Which hand is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandSide {
    Left,
    Right,
}

/// Which side of the hand faces the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOrientation {
    /// The palm faces the camera.
    Front,
    /// The back of the hand faces the camera.
    Back,
}

impl fmt::Display for HandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HandSide::Left => "Left",
            HandSide::Right => "Right",
        })
    }
}

impl fmt::Display for HandOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HandOrientation::Front => "Front",
            HandOrientation::Back => "Back",
        })
    }
}

/// Determines which hand `landmarks` belong to and which way it is facing.
///
/// `flipped` indicates that the camera image was mirrored before the landmarks were extracted.
///
/// The side is first guessed from the horizontal order of thumb, pinky knuckle, wrist and index
/// knuckle. That guess cannot tell a right palm from the back of a left hand, so it is then
/// corrected using the orientation test: a raw "right, back" becomes a left hand, a raw
/// "left, front" becomes the back of a right hand, and a raw "left, back" becomes a left palm.
///
/// Note that the "thumb" X coordinate used here is the thumb's IP joint, not its tip, and that the
/// orientation test compares the wrist's X coordinate against the palm center's Y coordinate.
/// The correction step depends on both.
///
/// # Errors
///
/// Returns [`HandError::EmptyLandmarkSet`] if `landmarks` contains no hand.
pub fn classify_hand_orientation(
    landmarks: &LandmarkSet,
    flipped: bool,
) -> Result<(HandSide, HandOrientation), HandError> {
    landmarks.require_hand()?;

    let wrist_x = landmarks[LandmarkIdx::Wrist].x();
    let thumb_x = landmarks[LandmarkIdx::ThumbIp].x();
    let index_x = landmarks[LandmarkIdx::IndexFingerMcp].x();
    let pinky_x = landmarks[LandmarkIdx::PinkyMcp].x();
    let palm_center_y =
        (landmarks[LandmarkIdx::Wrist].y() + landmarks[LandmarkIdx::MiddleFingerMcp].y()) / 2.0;

    let right = if flipped {
        thumb_x < pinky_x && wrist_x > index_x
    } else {
        thumb_x > pinky_x && wrist_x < index_x
    };
    let side = if right {
        HandSide::Right
    } else {
        HandSide::Left
    };

    let front = if flipped {
        wrist_x > palm_center_y
    } else {
        wrist_x < palm_center_y
    };
    let orientation = if front {
        HandOrientation::Front
    } else {
        HandOrientation::Back
    };

    let result = reconcile(side, orientation);
    log::trace!(
        "raw side={} orientation={} (flipped={}) -> {} {}",
        side,
        orientation,
        flipped,
        result.0,
        result.1,
    );
    Ok(result)
}

/// Corrects the raw side guess using the raw orientation.
fn reconcile(side: HandSide, orientation: HandOrientation) -> (HandSide, HandOrientation) {
    use HandOrientation::*;
    use HandSide::*;

    match (side, orientation) {
        (Right, Front) => (Right, Front),
        (Right, Back) => (Left, Back),
        (Left, Front) => (Right, Back),
        (Left, Back) => (Left, Front),
    }
}
