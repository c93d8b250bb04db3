use crate::{
    hand::skeleton::LandmarkIdx,
    landmark::{Landmark, LandmarkSet},
};

/// An open right hand with the palm facing an unmirrored camera, fingers pointing up.
pub fn open_right_hand() -> LandmarkSet {
    LandmarkSet::from_positions(OPEN_RIGHT_HAND).unwrap()
}

/// Returns a copy of `hand` with one landmark moved to `pos`.
pub fn with_position(hand: &LandmarkSet, idx: LandmarkIdx, pos: [f32; 2]) -> LandmarkSet {
    let landmarks = hand
        .iter()
        .map(|lm| {
            if lm.id() == idx as u8 {
                Landmark::new(lm.id(), pos)
            } else {
                lm
            }
        })
        .collect();
    LandmarkSet::new(landmarks).unwrap()
}

const OPEN_RIGHT_HAND: [[f32; 2]; 21] = [
    [300.0, 400.0], // wrist
    [340.0, 380.0],
    [365.0, 350.0],
    [380.0, 320.0], // thumb IP
    [410.0, 300.0], // thumb tip
    [320.0, 260.0], // index MCP
    [325.0, 210.0],
    [328.0, 180.0],
    [330.0, 150.0],
    [290.0, 250.0], // middle MCP
    [290.0, 195.0],
    [290.0, 165.0],
    [290.0, 135.0],
    [255.0, 258.0],
    [250.0, 210.0],
    [247.0, 182.0],
    [245.0, 155.0],
    [220.0, 275.0], // pinky MCP
    [212.0, 235.0],
    [208.0, 212.0],
    [205.0, 190.0],
];
