//! The 21-point hand skeleton.

/// Names for the hand landmarks.
///
/// The discriminant of each variant is the landmark identifier used by the pose estimation
/// network.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **IP**: Interphalangeal joint, the thumb's only joint between its MCP and its tip.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// The five fingers, in the order used by [`FingerState`][super::finger::FingerState].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Returns the landmarks compared against the wrist to decide whether this finger is curled.
    ///
    /// The thumb is classified by a different rule and has no entry, so this returns [`None`] for
    /// [`Finger::Thumb`].
    pub fn extension_joints(self) -> Option<FingerJoints> {
        FINGER_JOINTS
            .iter()
            .find(|joints| joints.finger == self)
            .copied()
    }
}

/// The base and tip landmark of a finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerJoints {
    pub finger: Finger,
    pub base: LandmarkIdx,
    pub tip: LandmarkIdx,
}

/// Base and tip landmarks of the four non-thumb fingers.
///
/// The "base" is the middle (PIP) joint, not the knuckle: a finger counts as curled when its tip
/// is closer to the wrist than that joint.
pub const FINGER_JOINTS: &[FingerJoints] = {
    use LandmarkIdx::*;
    &[
        FingerJoints {
            finger: Finger::Index,
            base: IndexFingerPip,
            tip: IndexFingerTip,
        },
        FingerJoints {
            finger: Finger::Middle,
            base: MiddleFingerPip,
            tip: MiddleFingerTip,
        },
        FingerJoints {
            finger: Finger::Ring,
            base: RingFingerPip,
            tip: RingFingerTip,
        },
        FingerJoints {
            finger: Finger::Pinky,
            base: PinkyPip,
            tip: PinkyTip,
        },
    ]
};
