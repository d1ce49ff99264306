use std::sync::Arc;

use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, handlers::with_request_timeout,
    models::dto::request::AdminLoginRequest,
};

#[post("/admin-login")]
pub async fn admin_login(
    state: web::Data<Arc<AppState>>,
    request: web::Json<AdminLoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    let response = with_request_timeout(
        state.request_timeout(),
        state.auth_service.verify(&request.identifier, &request.secret),
    )
    .await?;

    Ok(HttpResponse::Ok().json(response))
}
