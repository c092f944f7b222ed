//! Guided exercise catalog.
//!
//! The catalog is a closed set. Its order is the listing order used by the
//! exercise list and by the log viewer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the four guided exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Exercise {
    #[serde(rename = "Breathing Exercise")]
    Breathing,
    #[serde(rename = "Stretching Exercise")]
    Stretching,
    #[serde(rename = "Sensory Touch Exercise")]
    SensoryTouch,
    #[serde(rename = "Eye Contact Exercise")]
    EyeContact,
}

impl Exercise {
    /// All exercises in listing order.
    pub const ALL: [Exercise; 4] = [
        Exercise::Breathing,
        Exercise::Stretching,
        Exercise::SensoryTouch,
        Exercise::EyeContact,
    ];

    /// Name as persisted in the completion log.
    pub fn name(self) -> &'static str {
        match self {
            Exercise::Breathing => "Breathing Exercise",
            Exercise::Stretching => "Stretching Exercise",
            Exercise::SensoryTouch => "Sensory Touch Exercise",
            Exercise::EyeContact => "Eye Contact Exercise",
        }
    }

    /// Short command-line friendly name.
    pub fn slug(self) -> &'static str {
        match self {
            Exercise::Breathing => "breathing",
            Exercise::Stretching => "stretching",
            Exercise::SensoryTouch => "sensory-touch",
            Exercise::EyeContact => "eye-contact",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Exercise::Breathing => "A calming exercise to reduce stress and improve focus.",
            Exercise::Stretching => "Improves flexibility and reduces muscle tension.",
            Exercise::SensoryTouch => "Enhances sensory awareness and exploration.",
            Exercise::EyeContact => "Improves eye contact and social interaction.",
        }
    }

    /// Step-by-step instructions, in order.
    pub fn steps(self) -> &'static [&'static str] {
        match self {
            Exercise::Breathing => &[
                "Find a quiet space.",
                "Sit or lie down comfortably.",
                "Close your eyes.",
                "Breathe in deeply through your nose for 4 seconds.",
                "Hold your breath for 4 seconds.",
                "Exhale slowly through your mouth for 6 seconds.",
                "Repeat for 5-10 minutes.",
            ],
            Exercise::Stretching => &[
                "Stand with feet shoulder-width apart.",
                "Reach your arms overhead.",
                "Bend forward from your hips.",
                "Try to touch your toes (or as far as comfortable).",
                "Hold for 15-30 seconds.",
                "Repeat 2-3 times.",
            ],
            Exercise::SensoryTouch => &[
                "Gather objects with different textures (soft, rough, smooth).",
                "Close your eyes.",
                "Feel each object and describe its texture.",
                "Focus on the sensations.",
                "Repeat with each object.",
            ],
            Exercise::EyeContact => &[
                "Sit facing a partner.",
                "Gently make eye contact.",
                "Hold eye contact for a few seconds.",
                "Take breaks and repeat.",
                "Gradually increase the duration.",
            ],
        }
    }

    /// Illustration asset bundled with the app.
    pub fn image_name(self) -> &'static str {
        match self {
            Exercise::Breathing => "breathing",
            Exercise::Stretching => "stretch3",
            Exercise::SensoryTouch => "sens",
            Exercise::EyeContact => "eye",
        }
    }

    pub fn detail(self) -> ExerciseDetail {
        ExerciseDetail {
            exercise: self,
            name: self.name(),
            description: self.description(),
            steps: self.steps().to_vec(),
            image_name: self.image_name(),
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Exercise {
    type Err = ValidationError;

    /// Accepts the persisted name (any case) or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(needle) || e.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownExercise(s.to_string()))
    }
}

/// Everything the detail page shows for one exercise.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseDetail {
    pub exercise: Exercise,
    pub name: &'static str,
    pub description: &'static str,
    pub steps: Vec<&'static str>,
    pub image_name: &'static str,
}
