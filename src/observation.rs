use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::error::Error;

/// The landmarks consumed by the tracker: the wrist plus a tip and base
/// joint per finger.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum JointName {
    Wrist = 0,
    ThumbMp = 1,
    ThumbTip = 2,
    IndexMcp = 3,
    IndexTip = 4,
    MiddleMcp = 5,
    MiddleTip = 6,
    RingMcp = 7,
    RingTip = 8,
    LittleMcp = 9,
    LittleTip = 10,
}

impl JointName {
    pub const COUNT: usize = 11;

    pub const ALL: [JointName; Self::COUNT] = [
        JointName::Wrist,
        JointName::ThumbMp,
        JointName::ThumbTip,
        JointName::IndexMcp,
        JointName::IndexTip,
        JointName::MiddleMcp,
        JointName::MiddleTip,
        JointName::RingMcp,
        JointName::RingTip,
        JointName::LittleMcp,
        JointName::LittleTip,
    ];
}

/// A single named landmark: location in normalized [0,1]x[0,1] image
/// coordinates and a detection confidence in [0,1].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    pub x: f32,
    pub y: f32,
    #[serde(rename = "p")]
    pub confidence: f32,
}

impl Joint {
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }

    #[inline]
    pub fn location(&self) -> na::Point2<f32> {
        na::Point2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_confident(&self, threshold: f32) -> bool {
        self.confidence > threshold
    }
}

/// One frame's landmark set. Any subset of joints may be absent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct HandObservation {
    joints: [Option<Joint>; JointName::COUNT],
}

impl HandObservation {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds an observation from a flat `[x, y, confidence]` buffer in
    /// `JointName::ALL` order, the layout landmark services deliver.
    pub fn from_flat(values: &[f32]) -> Result<Self, Error> {
        if values.len() != JointName::COUNT * 3 {
            return Err(Error::LandmarkBuffer {
                expected: JointName::COUNT * 3,
                got: values.len(),
            });
        }

        let mut observation = Self::default();
        for (slot, chunk) in observation.joints.iter_mut().zip(values.chunks_exact(3)) {
            *slot = Some(Joint::new(chunk[0], chunk[1], chunk[2]));
        }

        Ok(observation)
    }

    #[inline]
    pub fn set(&mut self, name: JointName, joint: Joint) {
        self.joints[name as usize] = Some(joint);
    }

    #[inline]
    pub fn joint(&self, name: JointName) -> Option<Joint> {
        self.joints[name as usize]
    }

    /// Location of a joint, if present with confidence strictly above
    /// `threshold`.
    #[inline]
    pub fn confident_location(&self, name: JointName, threshold: f32) -> Option<na::Point2<f32>> {
        self.joint(name)
            .filter(|joint| joint.is_confident(threshold))
            .map(|joint| joint.location())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.joints.iter().flatten().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.joints.iter().all(Option::is_none)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (JointName, &Joint)> {
        JointName::ALL
            .iter()
            .copied()
            .zip(self.joints.iter())
            .filter_map(|(name, joint)| Some((name, joint.as_ref()?)))
    }
}
