use nalgebra as na;
use tracing::{debug, trace};

use crate::finger::{Finger, FingerMap};
use crate::math;
use crate::observation::{HandObservation, JointName};
use crate::CountObserver;

const CONFIDENCE_THRESHOLD: f32 = 0.5;
const THUMB_PROJECTION_THRESHOLD: f32 = 1.5;
const FINGER_PROJECTION_THRESHOLD: f32 = 1.2;

pub struct TrackerConfig {
    /// Joints at or below this confidence are treated as absent.
    pub confidence_threshold: f32,
    /// Per-finger projection-factor thresholds. The thumb's is the highest:
    /// its geometry is the least collinear with the wrist-to-knuckle axis.
    pub projection_thresholds: FingerMap<f32>,
}

impl TrackerConfig {
    pub fn new() -> Self {
        Self {
            confidence_threshold: CONFIDENCE_THRESHOLD,
            projection_thresholds: FingerMap::from_fn(|finger| match finger {
                Finger::Thumb => THUMB_PROJECTION_THRESHOLD,
                _ => FINGER_PROJECTION_THRESHOLD,
            }),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns one hand-landmark observation per frame into a per-finger
/// extended/retracted signal and notifies the registered observer exactly
/// when the extended count changes.
///
/// All derived state is recomputed from scratch on every `update_pose`; the
/// previous count is the only cross-frame memory.
pub struct HandPoseTracker {
    config: TrackerConfig,
    wrist: Option<na::Point2<f32>>,
    bases: FingerMap<Option<na::Point2<f32>>>,
    tips: FingerMap<Option<na::Point2<f32>>>,
    base_vectors: FingerMap<Option<na::Vector2<f32>>>,
    tip_vectors: FingerMap<Option<na::Vector2<f32>>>,
    extended: FingerMap<bool>,
    count: usize,
    observer: Option<Box<dyn CountObserver>>,
}

impl HandPoseTracker {
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::new())
    }

    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            config,
            wrist: None,
            bases: FingerMap::default(),
            tips: FingerMap::default(),
            base_vectors: FingerMap::default(),
            tip_vectors: FingerMap::default(),
            extended: FingerMap::default(),
            count: 0,
            observer: None,
        }
    }

    /// Registers the single observer receiving count-change notifications.
    /// It is invoked synchronously on whichever thread calls
    /// `update_pose`/`clear`.
    pub fn set_observer(&mut self, observer: Box<dyn CountObserver>) {
        self.observer = Some(observer);
    }

    /// Consumes one frame's observation, overwriting all derived state.
    ///
    /// Missing or low-confidence joints never fail; they degrade to
    /// "absent" and the affected fingers to "not extended".
    pub fn update_pose(&mut self, observation: &HandObservation) {
        self.extract_points(observation);
        self.vectorize();

        for finger in Finger::ALL {
            let extended = self.assess_extended(finger);
            self.extended.set(finger, extended);
        }

        self.refresh_count();
    }

    /// Resets every slot to its absent/false default. Called by the frame
    /// loop when the vision step reports no hand at all.
    pub fn clear(&mut self) {
        self.wrist = None;
        self.bases = FingerMap::default();
        self.tips = FingerMap::default();
        self.base_vectors = FingerMap::default();
        self.tip_vectors = FingerMap::default();
        self.extended = FingerMap::default();

        self.refresh_count();
    }

    fn extract_points(&mut self, observation: &HandObservation) {
        let threshold = self.config.confidence_threshold;

        self.wrist = observation.confident_location(JointName::Wrist, threshold);
        if self.wrist.is_none() {
            trace!("wrist below confidence threshold, no vectors this frame");
        }

        for finger in Finger::ALL {
            let tip = observation.confident_location(finger.tip_joint(), threshold);
            let base = observation.confident_location(finger.base_joint(), threshold);

            // A finger with half its pair missing has no usable geometry.
            let (tip, base) = match (tip, base) {
                (Some(tip), Some(base)) => (Some(tip), Some(base)),
                _ => (None, None),
            };

            self.tips.set(finger, tip);
            self.bases.set(finger, base);
        }
    }

    fn vectorize(&mut self) {
        for finger in Finger::ALL {
            let vectors = match (self.wrist, self.tips[finger], self.bases[finger]) {
                (Some(wrist), Some(tip), Some(base)) => (Some(tip - wrist), Some(base - wrist)),
                _ => (None, None),
            };

            self.tip_vectors.set(finger, vectors.0);
            self.base_vectors.set(finger, vectors.1);
        }
    }

    fn assess_extended(&self, finger: Finger) -> bool {
        let (tip_vec, base_vec) = match (self.tip_vectors[finger], self.base_vectors[finger]) {
            (Some(tip_vec), Some(base_vec)) => (tip_vec, base_vec),
            _ => return false,
        };

        let p = match math::projection_factor(&tip_vec, &base_vec) {
            Some(p) => p,
            None => return false,
        };

        if p <= self.config.projection_thresholds[finger] {
            return false;
        }

        if finger == Finger::Thumb {
            return self.thumb_clears_index_base(tip_vec, base_vec);
        }

        true
    }

    // The projection test alone mistakes a thumb resting across the palm for
    // an extended one; an actually extended thumb tip ends up farther from
    // the index base than from its own base.
    fn thumb_clears_index_base(
        &self,
        tip_vec: na::Vector2<f32>,
        thumb_base_vec: na::Vector2<f32>,
    ) -> bool {
        let index_base_vec = match self.base_vectors[Finger::Index] {
            Some(vec) => vec,
            None => return false,
        };

        (tip_vec - index_base_vec).norm() > (tip_vec - thumb_base_vec).norm()
    }

    fn refresh_count(&mut self) {
        let count = self.extended.iter().filter(|(_, extended)| **extended).count();

        if count != self.count {
            self.count = count;
            debug!(count, "extended finger count changed");

            if let Some(observer) = &mut self.observer {
                observer.finger_count_changed(count);
            }
        }
    }

    #[inline]
    pub fn count_extended(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_extended(&self, finger: Finger) -> bool {
        self.extended[finger]
    }

    #[inline]
    pub fn extended_fingers(&self) -> &FingerMap<bool> {
        &self.extended
    }

    #[inline]
    pub fn wrist(&self) -> Option<na::Point2<f32>> {
        self.wrist
    }

    #[inline]
    pub fn tips(&self) -> &FingerMap<Option<na::Point2<f32>>> {
        &self.tips
    }

    #[inline]
    pub fn bases(&self) -> &FingerMap<Option<na::Point2<f32>>> {
        &self.bases
    }

    #[inline]
    pub fn tip_vectors(&self) -> &FingerMap<Option<na::Vector2<f32>>> {
        &self.tip_vectors
    }

    #[inline]
    pub fn base_vectors(&self) -> &FingerMap<Option<na::Vector2<f32>>> {
        &self.base_vectors
    }
}

impl Default for HandPoseTracker {
    fn default() -> Self {
        Self::new()
    }
}
