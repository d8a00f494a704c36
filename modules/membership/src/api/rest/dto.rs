use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::model::NewMember;

/// Signup request. Field names mirror the public site contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupReq {
    pub name: String,
    pub email: String,
    #[serde(rename = "phoneNo", default)]
    pub phone_no: String,
    pub password: String,
    pub role: String,
    #[serde(default)]
    pub department: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResp {
    pub success: bool,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginReq {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResp {
    pub success: bool,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResp {
    pub success: bool,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
}

impl From<SignupReq> for NewMember {
    fn from(req: SignupReq) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone_no,
            password: req.password,
            role: req.role,
            department: req.department,
        }
    }
}
