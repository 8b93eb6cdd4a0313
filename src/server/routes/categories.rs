use axum::{
    extract::{Path, Query, State},
    routing::get,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::{Category, Question};
use crate::server::app::AppState;
use crate::server::deserializers::Page;
use crate::server::pagination::page_window;

use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct ListQuery {
    #[serde(default)]
    page: Page,
}

#[derive(Deserialize)]
struct NewCategory {
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Serialize)]
struct CategoriesPage {
    categories: Vec<Category>,
}

// existing clients expect the filtered questions under the "categories" key
#[derive(Serialize)]
struct CategoryQuestions {
    categories: Vec<Question>,
}

async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResponse<Json<CategoriesPage>> {
    let total = categories::count_categories(&state.pool).await?;
    let window = page_window(query.page.0, state.page_size, total)?;
    let categories = categories::get_categories(&state.pool, window.limit, window.offset).await?;
    Ok(Json(CategoriesPage { categories }))
}

async fn create_category(
    State(pool): State<SqlitePool>,
    Form(new_category): Form<NewCategory>,
) -> ApiResponse<Json<Value>> {
    let kind = new_category
        .kind
        .filter(|kind| !kind.is_empty())
        .ok_or_else(|| ApiError::NotFound("data not correct".to_owned()))?;

    let id = categories::create_category(&pool, &kind).await?;
    let category = categories::get_category(&pool, id).await?;
    Ok(Json(json!({ "result": category })))
}

async fn questions_for_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> ApiResponse<Json<CategoryQuestions>> {
    let total = questions::count_questions_for_category(&state.pool, id).await?;
    if total == 0 {
        return Err(ApiError::NotFound(format!(
            "no questions in category {id}"
        )));
    }
    let window = page_window(query.page.0, state.page_size, total)?;
    let questions =
        questions::get_questions_for_category(&state.pool, id, window.limit, window.offset).await?;
    Ok(Json(CategoryQuestions {
        categories: questions,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories/", get(list_categories).post(create_category))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
