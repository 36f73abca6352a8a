//! Blog post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, NewBlogPost, PostPatch};
use blog_core::error::DomainError;
use blog_shared::dto::{AuthorUpdate, CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// API representation. The author is always the derived display name.
pub fn to_response(post: BlogPost) -> PostResponse {
    PostResponse {
        id: post.id,
        author: post.author.display_name(),
        title: post.title,
        content: post.content,
        created: post.created,
    }
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::BadRequest(format!("`{raw}` is not a valid post id")))
}

fn new_post_from_request(req: CreatePostRequest) -> AppResult<NewBlogPost> {
    let author = req.author.unwrap_or_default();

    let post = match (req.title, req.content, author.first_name, author.last_name) {
        (Some(title), Some(content), Some(first_name), Some(last_name)) => {
            NewBlogPost::new(Author::new(first_name, last_name), title, content)
        }
        (title, content, first_name, last_name) => {
            let missing = [
                ("title", title.is_none()),
                ("content", content.is_none()),
                ("author.firstName", first_name.is_none()),
                ("author.lastName", last_name.is_none()),
            ];
            return Err(AppError::Validation(
                missing
                    .iter()
                    .filter(|(_, absent)| *absent)
                    .map(|(field, _)| format!("Missing `{field}` in request body"))
                    .collect(),
            ));
        }
    };

    post.validate()?;
    Ok(post)
}

fn patch_from_request(id: Uuid, req: UpdatePostRequest) -> AppResult<PostPatch> {
    if let Some(body_id) = req.id {
        if body_id != id {
            return Err(AppError::BadRequest(format!(
                "Request path id ({id}) and request body id ({body_id}) must match"
            )));
        }
    }

    let mut patch = PostPatch {
        title: req.title,
        content: req.content,
        ..Default::default()
    };
    match req.author {
        Some(AuthorUpdate::Name(name)) => {
            patch = patch.with_author(Author::from_display_name(&name));
        }
        Some(AuthorUpdate::Parts(parts)) => {
            patch.author_first_name = parts.first_name;
            patch.author_last_name = parts.last_name;
        }
        None => {}
    }

    patch.validate()?;
    Ok(patch)
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let input = new_post_from_request(body.into_inner())?;

    let post = state
        .posts
        .insert_many(vec![input])
        .await?
        .pop()
        .ok_or_else(|| AppError::Internal("store returned no post".to_string()))?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let patch = patch_from_request(id, body.into_inner())?;

    let post = state.posts.update_by_id(id, patch).await?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Post updated");
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.posts.delete_by_id(id).await?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}
