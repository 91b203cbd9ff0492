use gaze_control::source::FrameRecord;
use gaze_core::LandmarkFrame;

/// Landmarks in a refined (iris) face mesh.
pub const REFINED_MESH_LEN: usize = 478;

pub const OPEN_APERTURE: f64 = 0.03;
pub const CLOSED_APERTURE: f64 = 0.004;

const LEFT_LOWER_LID: usize = 145;
const LEFT_IRIS: usize = 468;
const RIGHT_LOWER_LID: usize = 374;
const RIGHT_IRIS: usize = 473;

/// Builds one face.
///
/// Every point rests at the image centre, so both eye contours have their
/// centroid there and the upper lids sit on it too. Offsets are image-space
/// shifts of each iris, the way a real pupil moves: `gaze(0.02, 0.0)` moves
/// both irises +x and reads as "look left".
#[derive(Debug, Clone, Copy)]
pub struct FaceBuilder {
    left_offset: (f64, f64),
    right_offset: (f64, f64),
    left_aperture: f64,
    right_aperture: f64,
}

impl Default for FaceBuilder {
    fn default() -> Self {
        Self {
            left_offset: (0.0, 0.0),
            right_offset: (0.0, 0.0),
            left_aperture: OPEN_APERTURE,
            right_aperture: OPEN_APERTURE,
        }
    }
}

impl FaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gaze(self, x: f64, y: f64) -> Self {
        self.left_offset(x, y).right_offset(x, y)
    }

    pub fn left_offset(mut self, x: f64, y: f64) -> Self {
        self.left_offset = (x, y);
        self
    }

    pub fn right_offset(mut self, x: f64, y: f64) -> Self {
        self.right_offset = (x, y);
        self
    }

    pub fn blink(mut self) -> Self {
        self.left_aperture = CLOSED_APERTURE;
        self.right_aperture = CLOSED_APERTURE;
        self
    }

    pub fn left_aperture(mut self, aperture: f64) -> Self {
        self.left_aperture = aperture;
        self
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        let (cx, cy) = (0.5, 0.5);
        let mut points = vec![[cx, cy]; REFINED_MESH_LEN];

        points[LEFT_LOWER_LID] = [cx, cy + self.left_aperture];
        points[RIGHT_LOWER_LID] = [cx, cy + self.right_aperture];

        points[LEFT_IRIS] = [cx + self.left_offset.0, cy + self.left_offset.1];
        points[RIGHT_IRIS] = [cx + self.right_offset.0, cy + self.right_offset.1];
        points
    }

    pub fn frame(&self) -> LandmarkFrame {
        LandmarkFrame::from_pairs(self.points())
    }

    pub fn record(&self, timestamp: f64) -> FrameRecord {
        FrameRecord::new(timestamp, vec![self.points()])
    }
}

/// One step right per frame on the default mapping.
pub fn look_right() -> FaceBuilder {
    FaceBuilder::new().gaze(-0.02, 0.0)
}

pub fn look_left() -> FaceBuilder {
    FaceBuilder::new().gaze(0.02, 0.0)
}

pub fn look_down() -> FaceBuilder {
    FaceBuilder::new().gaze(0.0, -0.02)
}

/// One JSON object per line, newline terminated.
pub fn to_jsonl(records: &[FrameRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record).expect("serialize frame record"));
        out.push('\n');
    }
    out
}
