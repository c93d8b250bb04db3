//! Geometric helpers working on pixel coordinates.

use crate::{error::HandError, landmark::Landmark};

/// Returns the straight-line distance between two landmarks, in pixels.
pub fn pixel_distance(a: &Landmark, b: &Landmark) -> f32 {
    nalgebra::distance(&a.point(), &b.point())
}

/// Estimates the real-world width of an object from its width in the image.
///
/// Uses the pinhole camera model: `known_object_width_cm * focal_length_cm / pixel_width`.
///
/// # Errors
///
/// Returns [`HandError::ZeroPixelWidth`] if `pixel_width` is zero.
pub fn pixels_to_real_world_width(
    pixel_width: f32,
    focal_length_cm: f32,
    known_object_width_cm: f32,
) -> Result<f32, HandError> {
    if pixel_width == 0.0 {
        return Err(HandError::ZeroPixelWidth);
    }
    Ok(known_object_width_cm * focal_length_cm / pixel_width)
}
