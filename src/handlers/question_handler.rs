use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, handlers::with_request_timeout,
    models::dto::request::QuestionRequest,
};

#[post("/quiz/{quiz_id}/questions")]
pub async fn create_question(
    state: web::Data<Arc<AppState>>,
    quiz_id: web::Path<i64>,
    request: web::Json<QuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = with_request_timeout(
        state.request_timeout(),
        state
            .question_service
            .create_question(quiz_id.into_inner(), request.into_inner()),
    )
    .await?;

    Ok(HttpResponse::Created().json(question))
}

#[get("/quiz/{quiz_id}/questions")]
pub async fn get_questions(
    state: web::Data<Arc<AppState>>,
    quiz_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let questions = with_request_timeout(
        state.request_timeout(),
        state.question_service.list_questions(quiz_id.into_inner()),
    )
    .await?;

    Ok(HttpResponse::Ok().json(questions))
}

#[put("/question/{id}")]
pub async fn update_question(
    state: web::Data<Arc<AppState>>,
    id: web::Path<i64>,
    request: web::Json<QuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let ack = with_request_timeout(
        state.request_timeout(),
        state
            .question_service
            .update_question(id.into_inner(), request.into_inner()),
    )
    .await?;

    Ok(HttpResponse::Ok().json(ack))
}

#[delete("/question/{id}")]
pub async fn delete_question(
    state: web::Data<Arc<AppState>>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let ack = with_request_timeout(
        state.request_timeout(),
        state.question_service.delete_question(id.into_inner()),
    )
    .await?;

    Ok(HttpResponse::Ok().json(ack))
}
