use axum::extract::{Path, State};
use axum::response::Html;
use guide_core::Category;
use std::sync::Arc;

use crate::AppState;
use crate::blocking::blocking_page;
use crate::page_error::PageError;
use crate::render;

pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let content = Arc::clone(&state.content);
    let page = blocking_page(move || content.home()).await?;
    Ok(Html(render::home(&page)))
}

async fn category_listing(
    state: &AppState,
    category: Category,
) -> Result<Html<String>, PageError> {
    let content = Arc::clone(&state.content);
    let page = blocking_page(move || content.category_page(category)).await?;
    Ok(Html(render::category(&page)))
}

pub async fn culture(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    category_listing(&state, Category::Culture).await
}

pub async fn history(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    category_listing(&state, Category::History).await
}

pub async fn nature(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    category_listing(&state, Category::Nature).await
}

pub async fn cuisine(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let content = Arc::clone(&state.content);
    let menu = blocking_page(move || content.cuisine_menu()).await?;
    Ok(Html(render::cuisine_menu(&menu)))
}

pub async fn cuisine_style(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>, PageError> {
    let content = Arc::clone(&state.content);
    let page = blocking_page(move || content.cuisine_style(&slug)).await?;
    Ok(Html(render::cuisine_style(&page)))
}

pub async fn details(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<Html<String>, PageError> {
    let content = Arc::clone(&state.content);
    let page = blocking_page(move || content.details(&title)).await?;
    Ok(Html(render::details(&page)))
}

pub async fn about(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let content = Arc::clone(&state.content);
    let page = blocking_page(move || content.about()).await?;
    Ok(Html(render::about(&page)))
}

pub async fn plan() -> Html<String> {
    Html(render::plan())
}

pub async fn privacy() -> Html<String> {
    Html(render::privacy())
}

pub async fn terms() -> Html<String> {
    Html(render::terms())
}

pub async fn fallback() -> PageError {
    PageError::NotFound("The page you asked for does not exist.".to_owned())
}
