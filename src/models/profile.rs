use serde::{Deserialize, Serialize};

/// Encyclopedia entry for a single disease or pest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseProfile {
    pub disease: String,
    pub symptoms: Vec<String>,
    pub treatments: Vec<String>,
}

/// Query string for the profile endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileQuery {
    pub disease: String,
}
