//! Label wire format

use fatigue_fusion::EyeState;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Provenance block carried on every label.
///
/// The text fields are fixed placeholders from the labeling contract;
/// only seed and steps vary, randomized per label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDetails {
    pub seed: u32,
    pub steps: u32,
    pub prompt: String,
    pub response: String,
    pub view_point: String,
    pub object_name: String,
    pub time_of_day: String,
    pub sky_condition: String,
    pub weather_condition: String,
}

impl Default for PromptDetails {
    fn default() -> Self {
        Self {
            seed: 0,
            steps: 0,
            prompt: "Lorem ipsum...".to_string(),
            response: "Lorem ipsum...".to_string(),
            view_point: "front".to_string(),
            object_name: "person".to_string(),
            time_of_day: "morning".to_string(),
            sky_condition: "clear".to_string(),
            weather_condition: "sunny".to_string(),
        }
    }
}

impl PromptDetails {
    /// Provenance with a freshly randomized seed and step count
    pub fn randomized() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            seed: rng.gen_range(1..=1_000_000),
            steps: rng.gen_range(1..=100),
            ..Self::default()
        }
    }
}

/// Actor block of the label. `face_characteristics` serializes under the
/// contract key `face`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorLabel {
    pub actor_id: Uuid,
    pub eye_state: EyeState,
    pub age: i64,
    #[serde(rename = "face")]
    pub face_characteristics: String,
    pub sex: String,
    pub demographic: String,
    pub accessories: String,
    pub bounding_box: String,
    pub bounding_polygon: String,
}

/// One emitted label artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub prompt_details: PromptDetails,
    #[serde(rename = "label")]
    pub actor: ActorLabel,
}
