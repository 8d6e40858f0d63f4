use salonbook_core::models::user::{LoginRequest, User};
use tracing::info;

use crate::{ClientResult, SharedSession, api::SalonApi};

/// Logs in against the backend and stores the user and token in `session`.
pub async fn sign_in<A: SalonApi + ?Sized>(
    api: &A,
    session: &SharedSession,
    email: &str,
    password: &str,
) -> ClientResult<User> {
    let response = api
        .login(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;

    info!(user_id = response.user.user_id, "Signed in");
    session
        .write()
        .await
        .login(response.user.clone(), response.token);

    Ok(response.user)
}

pub async fn sign_out(session: &SharedSession) {
    session.write().await.logout();
    info!("Signed out");
}
