//! HTTP DTOs for profile endpoints.

use serde::Serialize;

use crate::domain::profile::{EthicalProfile, VisualData};

use super::super::session::AnsweredDilemmaResponse;

/// Aggregated view over the answered dilemmas.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_data: Option<VisualData>,
    pub answered_dilemmas: Vec<AnsweredDilemmaResponse>,
}

impl From<EthicalProfile> for ProfileResponse {
    fn from(profile: EthicalProfile) -> Self {
        Self {
            summary: profile.summary,
            visual_data: profile.visual_data,
            answered_dilemmas: profile
                .answered_dilemmas
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{generate_profile, EMPTY_PROFILE_SUMMARY};

    #[test]
    fn empty_profile_omits_visual_data() {
        let response = ProfileResponse::from(generate_profile(&[]));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["summary"], EMPTY_PROFILE_SUMMARY);
        assert!(json.get("visual_data").is_none());
        assert_eq!(json["answered_dilemmas"], serde_json::json!([]));
    }
}
