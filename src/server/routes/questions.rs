use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::error::DatabaseError;
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::{Category, Question};
use crate::server::app::AppState;
use crate::server::deserializers::{digits_to_i64, Page};
use crate::server::pagination::page_window;

use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct ListQuery {
    #[serde(default)]
    page: Page,
}

#[derive(Deserialize)]
struct NewQuestion {
    question: Option<String>,
    answer: Option<String>,
    category: Option<String>,
    difficulty: Option<String>,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
    #[serde(default)]
    page: Page,
}

#[derive(Serialize)]
struct QuestionsIndex {
    count: i64,
    questions: Vec<Question>,
    categories: Vec<Category>,
}

async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResponse<Json<QuestionsIndex>> {
    let count = questions::count_questions(&state.pool).await?;
    let window = page_window(query.page.0, state.page_size, count)?;
    let questions = questions::get_questions(&state.pool, window.limit, window.offset).await?;
    // the caller uses the first page of categories as a lookup table; the
    // category field of each question stays a raw id
    let categories = categories::get_categories(&state.pool, state.page_size, 0).await?;
    Ok(Json(QuestionsIndex {
        count,
        questions,
        categories,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Form(form): Form<NewQuestion>,
) -> ApiResponse<Json<Value>> {
    let fields = (
        form.question.filter(|v| !v.is_empty()),
        form.answer.filter(|v| !v.is_empty()),
        form.category.filter(|v| !v.is_empty()),
        form.difficulty.filter(|v| !v.is_empty()),
    );
    let (Some(question), Some(answer), Some(raw_category), Some(raw_difficulty)) = fields else {
        return Err(ApiError::NotFound("Data is not correct".to_owned()));
    };
    let (Some(category), Some(difficulty)) = (
        digits_to_i64(&raw_category),
        digits_to_i64(&raw_difficulty),
    ) else {
        return Err(ApiError::NotFound("Data is not correct".to_owned()));
    };

    match questions::create_question(&pool, &question, &answer, category, difficulty).await {
        Ok(id) => {
            let created = questions::get_question(&pool, id).await?;
            Ok(Json(json!({ "result": created })))
        }
        // an unknown category is reported to the user, not propagated
        Err(error) if is_foreign_key_violation(&error) => Ok(Json(
            json!({ "result": format!("category id {raw_category} doesn't exists") }),
        )),
        Err(error) => Err(error.into()),
    }
}

fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db_error) if db_error.is_foreign_key_violation())
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<Json<Value>> {
    questions::get_question(&pool, id).await?;
    questions::delete_question(&pool, id).await?;
    Ok(Json(json!({ "result": format!("question {id} deleted") })))
}

async fn search_questions(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResponse<Json<Value>> {
    let Some(term) = query.search_term.filter(|term| !term.is_empty()) else {
        return Ok(Json(json!({ "results": "no questions found" })));
    };
    let total = questions::count_search_matches(&state.pool, &term).await?;
    let window = page_window(query.page.0, state.page_size, total)?;
    let questions =
        questions::search_questions(&state.pool, &term, window.limit, window.offset).await?;
    Ok(Json(json!({ "questions": questions })))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions/", get(list_questions).post(create_question))
        .route("/questions/search", get(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
