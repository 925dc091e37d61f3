//! Effort Input Module
//!
//! Turns face-landmark measurements into a normalized 0..1 effort score and
//! maps effort onto the throw power range. Landmark capture itself happens
//! outside the engine; this module only sees landmark positions, with depth
//! in `z` when the tracker provides it.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Landmark indices in the 468-point face mesh.
pub mod landmark {
    pub const UPPER_LIP: usize = 13;
    pub const LOWER_LIP: usize = 14;
    pub const LEFT_EYE_TOP: usize = 159;
    pub const LEFT_EYE_BOTTOM: usize = 145;
    pub const RIGHT_EYE_TOP: usize = 386;
    pub const RIGHT_EYE_BOTTOM: usize = 374;
    pub const FOREHEAD: usize = 10;
    pub const CHIN: usize = 152;
}

/// Mouth opening where the mouth score starts rising
const MOUTH_OPEN_START: f32 = 0.05;
/// Mouth opening span from start to full score
const MOUTH_OPEN_SPAN: f32 = 0.25;
/// Eye opening where the eye score starts rising
const EYE_OPEN_START: f32 = 0.05;
/// Eye opening span from start to full score
const EYE_OPEN_SPAN: f32 = 0.05;
/// Share of the mouth score in the total effort
const MOUTH_WEIGHT: f32 = 0.7;
/// Share of the eye score in the total effort
const EYE_WEIGHT: f32 = 0.3;

/// Mouth and eye openness, each normalized by face height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExpressionMetrics {
    pub mouth_open: f32,
    pub eye_open: f32,
}

impl ExpressionMetrics {
    /// Measure openness from one frame of face landmarks.
    ///
    /// Returns `None` when a required landmark is missing or the face height
    /// is degenerate, so the caller can skip the frame.
    pub fn from_landmarks(points: &[Vec3]) -> Option<Self> {
        let at = |i: usize| points.get(i).copied();

        let face_height = at(landmark::FOREHEAD)?.distance(at(landmark::CHIN)?);
        if !face_height.is_finite() || face_height <= f32::EPSILON {
            return None;
        }

        let mouth = at(landmark::UPPER_LIP)?.distance(at(landmark::LOWER_LIP)?);
        let left_eye = at(landmark::LEFT_EYE_TOP)?.distance(at(landmark::LEFT_EYE_BOTTOM)?);
        let right_eye = at(landmark::RIGHT_EYE_TOP)?.distance(at(landmark::RIGHT_EYE_BOTTOM)?);

        Some(Self {
            mouth_open: mouth / face_height,
            eye_open: (left_eye + right_eye) * 0.5 / face_height,
        })
    }

    /// Mouth score in 0..1
    pub fn mouth_score(&self) -> f32 {
        ((self.mouth_open - MOUTH_OPEN_START) / MOUTH_OPEN_SPAN).clamp(0.0, 1.0)
    }

    /// Eye score in 0..1
    pub fn eye_score(&self) -> f32 {
        ((self.eye_open - EYE_OPEN_START) / EYE_OPEN_SPAN).clamp(0.0, 1.0)
    }

    /// Combined effort in 0..1, weighted toward the mouth
    pub fn effort_score(&self) -> f32 {
        self.mouth_score() * MOUTH_WEIGHT + self.eye_score() * EYE_WEIGHT
    }
}

/// Linear mapping from effort (0..1) to throw power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerRange {
    /// Power at zero effort
    pub min: f32,
    /// Power at full effort
    pub max: f32,
}

impl Default for PowerRange {
    fn default() -> Self {
        Self { min: 10.0, max: 35.0 }
    }
}

impl PowerRange {
    /// Map an effort sample onto the power range. Effort is clamped to 0..1;
    /// a non-finite sample counts as zero effort.
    pub fn power_for_effort(&self, effort: f32) -> f32 {
        let effort = if effort.is_finite() { effort.clamp(0.0, 1.0) } else { 0.0 };
        self.min + (self.max - self.min) * effort
    }

    /// Uniform random power in the range, for play without a face tracker.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }
}
