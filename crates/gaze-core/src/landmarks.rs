//! Landmark frame adapter and eye landmark role table
//!
//! Points are normalized to [0,1] relative to the source frame's width and
//! height. Ids follow the MediaPipe face mesh numbering; the 478-point refined
//! mesh appends the iris centres (468 left, 473 right) to the 468-point base.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
}

impl LandmarkPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &LandmarkPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<[f64; 2]> for LandmarkPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Landmarks of the first detected face in one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandmarkFrame {
    points: Vec<LandmarkPoint>,
}

impl LandmarkFrame {
    pub fn new(points: Vec<LandmarkPoint>) -> Self {
        Self { points }
    }

    /// Builds a frame from `[x0, y0, x1, y1, ...]`. A trailing odd value is ignored.
    pub fn from_flat(coords: &[f64]) -> Self {
        let points = coords
            .chunks_exact(2)
            .map(|pair| LandmarkPoint::new(pair[0], pair[1]))
            .collect();
        Self { points }
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        Self {
            points: pairs.into_iter().map(LandmarkPoint::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&LandmarkPoint> {
        self.points.get(id)
    }

    pub fn points(&self) -> &[LandmarkPoint] {
        &self.points
    }
}

/// Semantic landmark roles for one eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EyeLandmarks {
    pub upper_lid: usize,
    pub lower_lid: usize,
    /// Landmark whose displacement from the contour centroid stands in for the pupil.
    pub pupil: usize,
    /// Contour subset averaged into the eye centroid.
    pub contour: [usize; 6],
}

impl EyeLandmarks {
    fn max_id(&self) -> usize {
        self.contour
            .iter()
            .copied()
            .chain([self.upper_lid, self.lower_lid, self.pupil])
            .max()
            .unwrap_or(0)
    }
}

const LEFT_CONTOUR: [usize; 6] = [33, 160, 158, 133, 153, 144];
const RIGHT_CONTOUR: [usize; 6] = [362, 385, 387, 263, 373, 380];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EyeLayoutPreset {
    /// 478-point mesh, iris centres as pupil landmarks.
    #[default]
    Refined,
    /// 468-point mesh, inner lower-lid points as pupil proxies.
    Basic,
}

impl EyeLayoutPreset {
    pub fn layout(self) -> EyeLayout {
        match self {
            Self::Refined => EyeLayout::refined(),
            Self::Basic => EyeLayout::basic(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Refined => "refined",
            Self::Basic => "basic",
        }
    }
}

impl std::str::FromStr for EyeLayoutPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "refined" => Ok(Self::Refined),
            "basic" => Ok(Self::Basic),
            other => Err(format!("unknown eye layout '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EyeLayout {
    pub left: EyeLandmarks,
    pub right: EyeLandmarks,
}

impl Default for EyeLayout {
    fn default() -> Self {
        Self::refined()
    }
}

impl EyeLayout {
    pub fn refined() -> Self {
        Self {
            left: EyeLandmarks {
                upper_lid: 159,
                lower_lid: 145,
                pupil: 468,
                contour: LEFT_CONTOUR,
            },
            right: EyeLandmarks {
                upper_lid: 386,
                lower_lid: 374,
                pupil: 473,
                contour: RIGHT_CONTOUR,
            },
        }
    }

    pub fn basic() -> Self {
        Self {
            left: EyeLandmarks {
                pupil: 155,
                ..Self::refined().left
            },
            right: EyeLandmarks {
                pupil: 382,
                ..Self::refined().right
            },
        }
    }

    /// Minimum frame length that covers every id this layout reads.
    pub fn required_landmarks(&self) -> usize {
        self.left.max_id().max(self.right.max_id()) + 1
    }

    /// Checks the layout against the landmark count a detector promises to deliver.
    pub fn validate(&self, landmark_count: usize) -> Result<(), LayoutError> {
        let required = self.required_landmarks();
        if landmark_count < required {
            return Err(LayoutError::InsufficientLandmarks {
                required,
                actual: landmark_count,
            });
        }
        Ok(())
    }
}
