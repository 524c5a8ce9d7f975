//! Post resource handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::PageRequest;
use quill_shared::{ListPostsQuery, PostPageResponse, PostPayload, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Page size when only `page` is given.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// GET /api/posts
///
/// A plain array, or a `PostPageResponse` when `page` or `limit` is present.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    if query.is_paginated() {
        let request = PageRequest::new(
            query.page.unwrap_or(1),
            query.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        );
        let page = state.posts.list_page(request).await?;
        return Ok(HttpResponse::Ok().json(PostPageResponse::from(page)));
    }

    let posts: Vec<PostResponse> = state
        .posts
        .list_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, id: web::Path<i64>) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let (title, content) = body.into_inner().into_fields();
    let post = state.posts.create(title, content).await?;
    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let (title, content) = body.into_inner().into_fields();
    let post = state.posts.update(id.into_inner(), title, content).await?;
    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    if !state.posts.delete(id).await? {
        return Err(AppError::from(quill_core::DomainError::post_not_found(id)));
    }

    Ok(HttpResponse::NoContent().finish())
}
