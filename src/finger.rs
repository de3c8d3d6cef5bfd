use crate::observation::JointName;

/// The five fingers, in fixed enumeration order.
///
/// Ordering is only used for deterministic iteration, it carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Finger {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Little = 4,
}

impl Finger {
    pub const COUNT: usize = 5;

    pub const ALL: [Finger; Self::COUNT] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Little,
    ];

    /// Distal tip landmark for this finger.
    #[inline]
    pub fn tip_joint(self) -> JointName {
        match self {
            Finger::Thumb => JointName::ThumbTip,
            Finger::Index => JointName::IndexTip,
            Finger::Middle => JointName::MiddleTip,
            Finger::Ring => JointName::RingTip,
            Finger::Little => JointName::LittleTip,
        }
    }

    /// Knuckle landmark for this finger (MP for the thumb, MCP for the rest).
    #[inline]
    pub fn base_joint(self) -> JointName {
        match self {
            Finger::Thumb => JointName::ThumbMp,
            Finger::Index => JointName::IndexMcp,
            Finger::Middle => JointName::MiddleMcp,
            Finger::Ring => JointName::RingMcp,
            Finger::Little => JointName::LittleMcp,
        }
    }
}

/// Exactly one slot per finger, indexable by `Finger`.
///
/// "No data" is an explicit empty slot (e.g. `FingerMap<Option<T>>`), never
/// a missing key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerMap<T>([T; Finger::COUNT]);

impl<T> FingerMap<T> {
    #[inline]
    pub fn from_fn(mut f: impl FnMut(Finger) -> T) -> Self {
        Self(Finger::ALL.map(|finger| f(finger)))
    }

    #[inline]
    pub fn set(&mut self, finger: Finger, value: T) {
        self.0[finger as usize] = value;
    }

    /// Iterates all five slots in `Finger::ALL` order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Finger, &T)> {
        Finger::ALL.iter().copied().zip(self.0.iter())
    }
}

impl<T: Default> Default for FingerMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> std::ops::Index<Finger> for FingerMap<T> {
    type Output = T;

    #[inline]
    fn index(&self, finger: Finger) -> &T {
        &self.0[finger as usize]
    }
}

impl<T> std::ops::IndexMut<Finger> for FingerMap<T> {
    #[inline]
    fn index_mut(&mut self, finger: Finger) -> &mut T {
        &mut self.0[finger as usize]
    }
}
