use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, handlers::with_request_timeout,
    models::dto::request::QuizRequest,
};

#[post("/quiz")]
pub async fn create_quiz(
    state: web::Data<Arc<AppState>>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = with_request_timeout(
        state.request_timeout(),
        state.quiz_service.create_quiz(request.into_inner()),
    )
    .await?;

    Ok(HttpResponse::Created().json(quiz))
}

#[get("/quizzes")]
pub async fn get_quizzes(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let quizzes =
        with_request_timeout(state.request_timeout(), state.quiz_service.list_quizzes()).await?;

    Ok(HttpResponse::Ok().json(quizzes))
}

#[put("/quiz/{id}")]
pub async fn update_quiz(
    state: web::Data<Arc<AppState>>,
    id: web::Path<i64>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let ack = with_request_timeout(
        state.request_timeout(),
        state
            .quiz_service
            .update_quiz(id.into_inner(), request.into_inner()),
    )
    .await?;

    Ok(HttpResponse::Ok().json(ack))
}

#[delete("/quiz/{id}")]
pub async fn delete_quiz(
    state: web::Data<Arc<AppState>>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let ack = with_request_timeout(
        state.request_timeout(),
        state.quiz_service.delete_quiz(id.into_inner()),
    )
    .await?;

    Ok(HttpResponse::Ok().json(ack))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::test_utils::test_helpers::seeded_test_state;

    macro_rules! quiz_app {
        () => {{
            let state = Arc::new(seeded_test_state());
            test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .service(create_quiz)
                    .service(get_quizzes)
                    .service(update_quiz)
                    .service(delete_quiz),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_create_then_list_round_trip() {
        let app = quiz_app!();

        let req = test::TestRequest::post()
            .uri("/quiz")
            .set_json(serde_json::json!({"title": "Math", "description": "Basic"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["title"], "Math");
        assert_eq!(created["description"], "Basic");

        let req = test::TestRequest::get().uri("/quizzes").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let listed: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(listed.as_array().map(|a| a.len()), Some(1));
        assert_eq!(listed[0], created);
    }

    #[actix_web::test]
    async fn test_create_quiz_missing_title_is_400() {
        let app = quiz_app!();

        let req = test::TestRequest::post()
            .uri("/quiz")
            .set_json(serde_json::json!({"title": "", "description": "Basic"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_missing_quiz_is_404() {
        let app = quiz_app!();

        let req = test::TestRequest::put()
            .uri("/quiz/999")
            .set_json(serde_json::json!({"title": "Math", "description": "Basic"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_missing_quiz_is_404() {
        let app = quiz_app!();

        let req = test::TestRequest::delete().uri("/quiz/999").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
