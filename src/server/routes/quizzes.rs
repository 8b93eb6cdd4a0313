use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::db::queries::questions;
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::deserializers::digits_to_i64;
use crate::server::quiz;

use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct QuizQuery {
    quiz_category: Option<String>,
    previous_questions: Option<String>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    Query(query): Query<QuizQuery>,
) -> ApiResponse<Json<Question>> {
    // empty strings count as absent, same as omitting the parameter
    let quiz_category = query.quiz_category.filter(|v| !v.is_empty());
    let previous_questions = query.previous_questions.filter(|v| !v.is_empty());
    if quiz_category.is_none() && previous_questions.is_none() {
        return Err(ApiError::BadRequest(
            "category and previous are required parameters".to_owned(),
        ));
    }

    // a category that is not a digit string widens the pool to all questions
    let category = quiz_category.as_deref().and_then(digits_to_i64);
    let mut candidates = questions::quiz_candidates(&pool, category).await?;

    if let Some(previous) = previous_questions.as_deref() {
        let previous = quiz::parse_previous(previous).map_err(|_| {
            ApiError::Unprocessable(
                "previous_questions must be a comma-separated list of question ids".to_owned(),
            )
        })?;
        candidates = quiz::exclude_previous(candidates, &previous);
    }

    let question = quiz::pick_random(candidates).ok_or_else(|| {
        ApiError::NotFound("no questions found for the above arguments".to_owned())
    })?;
    Ok(Json(question))
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes/", get(play_quiz))
        .with_state(state)
}
