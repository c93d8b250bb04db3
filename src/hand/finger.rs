//! Finger extension classification.

use std::{fmt, ops::Index};

use crate::{
    error::HandError,
    geometry::pixel_distance,
    hand::{
        orientation::{classify_hand_orientation, HandOrientation, HandSide},
        skeleton::{Finger, LandmarkIdx, FINGER_JOINTS},
    },
    landmark::LandmarkSet,
};

/// Which fingers are extended (`true`) and which are curled (`false`).
///
/// Entries are ordered thumb, index, middle, ring, pinky (see [`Finger::ALL`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FingerState([bool; 5]);

impl FingerState {
    pub const ALL_EXTENDED: Self = Self([true; 5]);

    pub fn new(extended: [bool; 5]) -> Self {
        Self(extended)
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        self.0[finger as usize]
    }

    /// Returns the number of extended fingers.
    pub fn extended_count(&self) -> usize {
        self.0.iter().filter(|ext| **ext).count()
    }

    pub fn as_array(&self) -> [bool; 5] {
        self.0
    }

    /// Returns an iterator over all fingers and whether they are extended, starting with the thumb.
    pub fn iter(&self) -> impl Iterator<Item = (Finger, bool)> + '_ {
        Finger::ALL.into_iter().zip(self.0)
    }

    fn set_curled(&mut self, finger: Finger) {
        self.0[finger as usize] = false;
    }
}

impl Index<Finger> for FingerState {
    type Output = bool;

    fn index(&self, finger: Finger) -> &bool {
        &self.0[finger as usize]
    }
}

/// Formats the state as five `0`/`1` digits, thumb first.
impl fmt::Display for FingerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ext in self.0 {
            f.write_str(if ext { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Determines which fingers of the hand in `landmarks` are extended.
///
/// `flipped` indicates that the camera image was mirrored before the landmarks were extracted. It
/// only affects the thumb.
///
/// The thumb is judged by the horizontal position of its tip relative to its IP joint. Which
/// direction counts as "curled" depends on the hand side and orientation computed by
/// [`classify_hand_orientation`].
///
/// Every other finger is considered curled when its tip is closer to the wrist than its PIP joint
/// (see [`FINGER_JOINTS`]).
///
/// # Errors
///
/// Returns [`HandError::EmptyLandmarkSet`] if `landmarks` contains no hand. No partial result is
/// produced in that case.
pub fn classify_fingers(landmarks: &LandmarkSet, flipped: bool) -> Result<FingerState, HandError> {
    landmarks.require_hand()?;

    let (side, orientation) = classify_hand_orientation(landmarks, flipped)?;
    let mut state = FingerState::ALL_EXTENDED;

    if thumb_curled(landmarks, flipped, side, orientation) {
        state.set_curled(Finger::Thumb);
    }

    let wrist = landmarks[LandmarkIdx::Wrist];
    for joints in FINGER_JOINTS {
        let base = pixel_distance(&wrist, &landmarks[joints.base]);
        let tip = pixel_distance(&landmarks[joints.tip], &wrist);
        log::trace!(
            "{:?}: wrist->base={:.1} wrist->tip={:.1}",
            joints.finger,
            base,
            tip,
        );
        if base > tip {
            state.set_curled(joints.finger);
        }
    }

    Ok(state)
}

fn thumb_curled(
    landmarks: &LandmarkSet,
    flipped: bool,
    side: HandSide,
    orientation: HandOrientation,
) -> bool {
    let ip_x = landmarks[LandmarkIdx::ThumbIp].x();
    let tip_x = landmarks[LandmarkIdx::ThumbTip].x();

    let closed_front = if flipped { tip_x > ip_x } else { tip_x < ip_x };
    let closed_back = !closed_front;

    match (side, orientation) {
        (HandSide::Right, HandOrientation::Front) => closed_front,
        (HandSide::Right, HandOrientation::Back) => closed_back,
        (HandSide::Left, HandOrientation::Front) => closed_back,
        (HandSide::Left, HandOrientation::Back) => closed_front,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{open_right_hand, with_position};

    #[test]
    fn open_hand() {
        let fingers = classify_fingers(&open_right_hand(), false).unwrap();
        assert_eq!(fingers, FingerState::ALL_EXTENDED);
        assert_eq!(fingers.extended_count(), 5);
        assert_eq!(fingers.to_string(), "11111");
    }

    #[test]
    fn closed_front_thumb() {
        let hand = open_right_hand();
        let ip = hand[LandmarkIdx::ThumbIp];
        let hand = with_position(&hand, LandmarkIdx::ThumbTip, [ip.x() - 5.0, ip.y() - 20.0]);
        let fingers = classify_fingers(&hand, false).unwrap();
        assert_eq!(
            fingers.as_array(),
            [false, true, true, true, true],
            "{}",
            fingers
        );
    }

    #[test]
    fn thumb_tip_level_with_ip_is_extended() {
        let hand = open_right_hand();
        let ip = hand[LandmarkIdx::ThumbIp];
        let hand = with_position(&hand, LandmarkIdx::ThumbTip, [ip.x(), 290.0]);
        assert!(classify_fingers(&hand, false).unwrap()[Finger::Thumb]);
    }

    #[test]
    fn thumb_rules() {
        use HandOrientation::*;
        use HandSide::*;

        let hand = open_right_hand();
        // Tip is to the right of the IP joint, so the thumb is not "closed front".
        assert!(!thumb_curled(&hand, false, Right, Front));
        assert!(thumb_curled(&hand, false, Right, Back));
        assert!(thumb_curled(&hand, false, Left, Front));
        assert!(!thumb_curled(&hand, false, Left, Back));
        // Mirroring swaps the meaning of "closed front".
        assert!(thumb_curled(&hand, true, Right, Front));
        assert!(!thumb_curled(&hand, true, Left, Front));
    }

    #[test]
    fn curled_index() {
        let hand = with_position(
            &open_right_hand(),
            LandmarkIdx::IndexFingerTip,
            [322.0, 300.0],
        );
        let fingers = classify_fingers(&hand, false).unwrap();
        assert_eq!(fingers.to_string(), "10111");
        assert!(!fingers.is_extended(Finger::Index));
        assert_eq!(fingers.extended_count(), 4);
    }

    #[test]
    fn fist() {
        let mut hand = open_right_hand();
        let wrist = hand[LandmarkIdx::Wrist].position();
        // Pull every tip halfway between the wrist and its original position.
        for joints in FINGER_JOINTS {
            let tip = hand[joints.tip].position();
            hand = with_position(
                &hand,
                joints.tip,
                [(tip[0] + wrist[0]) / 2.0, (tip[1] + wrist[1]) / 2.0],
            );
        }
        let fingers = classify_fingers(&hand, false).unwrap();
        assert_eq!(fingers.as_array(), [true, false, false, false, false]);
    }

    #[test]
    fn empty() {
        assert_eq!(
            classify_fingers(&LandmarkSet::empty(), false),
            Err(HandError::EmptyLandmarkSet)
        );
    }

    #[test]
    fn iter_order() {
        let state = FingerState::new([true, false, true, false, true]);
        let fingers = state.iter().collect::<Vec<_>>();
        assert_eq!(
            fingers,
            [
                (Finger::Thumb, true),
                (Finger::Index, false),
                (Finger::Middle, true),
                (Finger::Ring, false),
                (Finger::Pinky, true),
            ]
        );
    }
}
