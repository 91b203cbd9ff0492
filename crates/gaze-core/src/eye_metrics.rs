//! Eye metrics
//!
//! Per eye: aperture (eyelid gap) and pupil offset from the contour centroid,
//! both in normalized image units. The blink threshold is tuned for this
//! scale, so nothing here converts to pixels.

use serde::Serialize;

use crate::error::FrameSkip;
use crate::landmarks::{EyeLandmarks, EyeLayout, LandmarkFrame, LandmarkPoint};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EyeSample {
    /// Distance between upper and lower eyelid landmarks, >= 0.
    pub aperture: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EyePair {
    pub left: EyeSample,
    pub right: EyeSample,
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Extracts both eye samples from one face.
///
/// Frames shorter than the layout needs are skipped as a whole; nothing from a
/// previous frame is reused.
pub fn extract(frame: &LandmarkFrame, layout: &EyeLayout) -> Result<EyePair, FrameSkip> {
    let skip = FrameSkip::InsufficientLandmarks {
        required: layout.required_landmarks(),
        actual: frame.len(),
    };
    if frame.len() < layout.required_landmarks() {
        return Err(skip);
    }

    let left = sample_eye(frame, &layout.left, Side::Left).ok_or(skip)?;
    let right = sample_eye(frame, &layout.right, Side::Right).ok_or(skip)?;

    Ok(EyePair { left, right })
}

fn sample_eye(frame: &LandmarkFrame, eye: &EyeLandmarks, side: Side) -> Option<EyeSample> {
    let upper = frame.get(eye.upper_lid)?;
    let lower = frame.get(eye.lower_lid)?;
    let pupil = frame.get(eye.pupil)?;
    let center = centroid(frame, &eye.contour)?;

    // Right eye is mirrored; the gaze mapper reads its sign inverted.
    let (offset_x, offset_y) = match side {
        Side::Left => (pupil.x - center.x, pupil.y - center.y),
        Side::Right => (center.x - pupil.x, center.y - pupil.y),
    };

    Some(EyeSample {
        aperture: upper.distance(lower),
        offset_x,
        offset_y,
    })
}

fn centroid(frame: &LandmarkFrame, ids: &[usize]) -> Option<LandmarkPoint> {
    if ids.is_empty() {
        return None;
    }
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for &id in ids {
        let p = frame.get(id)?;
        sum_x += p.x;
        sum_y += p.y;
    }
    let n = ids.len() as f64;
    Some(LandmarkPoint::new(sum_x / n, sum_y / n))
}
