use serde::{Deserialize, Serialize};
use services::attendance::RegisterOutcome;

#[derive(Debug, Deserialize)]
pub struct RegisterReq {
    pub token: String,
    pub member_id: i64,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub outcome: RegisterOutcome,
}

#[derive(Debug, Default, Deserialize)]
pub struct RosterQuery {
    #[serde(default)]
    pub token: String,
}
