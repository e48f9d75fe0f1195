use serde::Deserialize;

use crate::nutrition::validation::RawHealthProfile;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub health: RawHealthProfile,
}

impl PutProfileRequest {
    /// Trimmed name, `None` when blank.
    pub fn clean(name: Option<String>) -> Option<String> {
        name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
    }
}
