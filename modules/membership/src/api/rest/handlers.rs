use std::sync::Arc;

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::Json,
    Extension,
};
use tracing::info;

use crate::api::rest::dto::{LoginReq, LoginResp, MeResp, SignupReq, SignupResp};
use crate::api::rest::error::AuthError;
use crate::contract::error::MembershipError;
use crate::domain::service::MembershipService;

pub async fn signup(
    Extension(svc): Extension<Arc<MembershipService>>,
    Json(req): Json<SignupReq>,
) -> Result<(StatusCode, Json<SignupResp>), AuthError> {
    info!("Signup request for {}", req.email);

    let session = svc.signup(req.into()).await?;
    let resp = SignupResp {
        success: true,
        user_id: session.member.id,
        email: session.member.email,
        role: session.member.role.as_str().to_string(),
        token: session.token,
    };
    Ok((StatusCode::CREATED, Json(resp)))
}

pub async fn login(
    Extension(svc): Extension<Arc<MembershipService>>,
    Json(req): Json<LoginReq>,
) -> Result<Json<LoginResp>, AuthError> {
    info!("Login request for {}", req.email);

    let session = svc.login(&req.email, &req.password).await?;
    Ok(Json(LoginResp {
        success: true,
        token: session.token,
    }))
}

/// Resolve the caller's identity from a `Bearer` token.
pub async fn me(
    Extension(svc): Extension<Arc<MembershipService>>,
    headers: HeaderMap,
) -> Result<Json<MeResp>, AuthError> {
    let token = bearer_token(&headers).ok_or(MembershipError::InvalidCredentials)?;
    let claims = svc.verify_token(token)?;
    Ok(Json(MeResp {
        success: true,
        user_id: claims.sub,
        email: claims.email,
        role: claims.role,
    }))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
