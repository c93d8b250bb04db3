//! Hand landmarks in pixel coordinates.

use std::ops::Index;

use nalgebra::Point2;

use crate::{error::HandError, hand::skeleton::LandmarkIdx};

/// Number of landmarks in a hand skeleton.
pub const LANDMARK_COUNT: usize = 21;

type Position = [f32; 2];

/// A single hand landmark: its identifier in the hand skeleton and its position in pixels.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Landmark {
    id: u8,
    pos: Position,
}

impl Landmark {
    pub fn new(id: u8, position: Position) -> Self {
        Self { id, pos: position }
    }

    /// Returns the landmark identifier (0-20).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos[1]
    }

    #[inline]
    pub fn point(&self) -> Point2<f32> {
        Point2::new(self.pos[0], self.pos[1])
    }
}

/// The landmarks of one hand in one frame.
///
/// A [`LandmarkSet`] is either empty (no hand was detected) or contains exactly
/// [`LANDMARK_COUNT`] landmarks, ordered by their identifier. The constructors enforce this, so
/// code receiving a non-empty set can index it with any [`LandmarkIdx`].
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    landmarks: Box<[Landmark]>,
}

impl LandmarkSet {
    /// Creates a [`LandmarkSet`] that contains no hand.
    pub fn empty() -> Self {
        Self {
            landmarks: Vec::new().into_boxed_slice(),
        }
    }

    /// Creates a [`LandmarkSet`] from a list of landmarks.
    ///
    /// `landmarks` must be empty or contain [`LANDMARK_COUNT`] entries, and the landmark at
    /// position `i` must have identifier `i`.
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self, HandError> {
        if !landmarks.is_empty() && landmarks.len() != LANDMARK_COUNT {
            return Err(HandError::MalformedLandmarkSet {
                len: landmarks.len(),
            });
        }
        if let Some((index, lm)) = landmarks
            .iter()
            .enumerate()
            .find(|(i, lm)| usize::from(lm.id) != *i)
        {
            return Err(HandError::MisplacedLandmark { index, id: lm.id });
        }

        Ok(Self {
            landmarks: landmarks.into_boxed_slice(),
        })
    }

    /// Creates a [`LandmarkSet`] from pixel positions, assigning identifiers in order.
    pub fn from_positions<I>(positions: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = Position>,
    {
        let positions = positions.into_iter().collect::<Vec<_>>();
        if !positions.is_empty() && positions.len() != LANDMARK_COUNT {
            return Err(HandError::MalformedLandmarkSet {
                len: positions.len(),
            });
        }

        Ok(Self {
            landmarks: positions
                .into_iter()
                .enumerate()
                .map(|(i, pos)| Landmark::new(i as u8, pos))
                .collect(),
        })
    }

    /// Creates a [`LandmarkSet`] from normalized coordinates in range 0.0 to 1.0.
    ///
    /// Coordinates are scaled by the image size and truncated to whole pixels.
    pub fn from_normalized<I>(positions: I, width: u32, height: u32) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = Position>,
    {
        let (w, h) = (width as f32, height as f32);
        Self::from_positions(
            positions
                .into_iter()
                .map(|[x, y]| [(x * w).trunc(), (y * h).trunc()]),
        )
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Returns `true` if no hand was detected.
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn get(&self, idx: LandmarkIdx) -> Option<Landmark> {
        self.landmarks.get(idx as usize).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Landmark> + Clone + '_ {
        self.landmarks.iter().copied()
    }

    /// Returns an error if this set contains no hand.
    pub(crate) fn require_hand(&self) -> Result<(), HandError> {
        if self.is_empty() {
            Err(HandError::EmptyLandmarkSet)
        } else {
            Ok(())
        }
    }

    /// Returns a copy of this set, mirrored horizontally in an image that is `width` pixels wide.
    ///
    /// Every X coordinate `x` is replaced with `width - x`.
    pub fn mirrored(&self, width: f32) -> Self {
        Self {
            landmarks: self
                .landmarks
                .iter()
                .map(|lm| Landmark::new(lm.id, [width - lm.x(), lm.y()]))
                .collect(),
        }
    }

    /// Applies `f` to every landmark position in-place.
    pub fn map_positions(&mut self, mut f: impl FnMut(Position) -> Position) {
        for lm in self.landmarks.iter_mut() {
            lm.pos = f(lm.pos);
        }
    }
}

/// Indexing panics if the set is empty.
impl Index<LandmarkIdx> for LandmarkSet {
    type Output = Landmark;

    fn index(&self, idx: LandmarkIdx) -> &Landmark {
        &self.landmarks[idx as usize]
    }
}
