//! # rf-api Handlers
//!
//! This module turns HTTP requests into use-case payloads and wraps the
//! results in the `{"status": "success", "data": ...}` envelope.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use rf_core::traits::{CommentRepository, ReplyRepository, ThreadRepository};
use rf_core::use_cases::{
    CreateCommentUseCase, CreateReplyUseCase, CreateThreadUseCase, DeleteCommentUseCase, DeleteReplyUseCase,
    DetailThreadUseCase,
};
use serde_json::{json, Value};

use crate::auth::AuthUser;
use crate::error::ApiError;

/// State shared across all Actix-web workers: every use case, already
/// wired to its repositories.
pub struct AppState {
    pub create_thread: CreateThreadUseCase,
    pub detail_thread: DetailThreadUseCase,
    pub create_comment: CreateCommentUseCase,
    pub delete_comment: DeleteCommentUseCase,
    pub create_reply: CreateReplyUseCase,
    pub delete_reply: DeleteReplyUseCase,
}

impl AppState {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        replies: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            create_thread: CreateThreadUseCase::new(threads.clone()),
            detail_thread: DetailThreadUseCase::new(threads.clone(), comments.clone(), replies.clone()),
            create_comment: CreateCommentUseCase::new(comments.clone(), threads.clone()),
            delete_comment: DeleteCommentUseCase::new(comments.clone(), threads.clone()),
            create_reply: CreateReplyUseCase::new(replies.clone(), comments.clone(), threads.clone()),
            delete_reply: DeleteReplyUseCase::new(replies, comments, threads),
        }
    }
}

fn success() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "success" }))
}

/// POST /threads
pub async fn post_thread(
    data: web::Data<AppState>,
    user: AuthUser,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let payload = json!({
        "title": body.get("title"),
        "body": body.get("body"),
        "owner": user.id,
    });
    let added_thread = data.create_thread.execute(&payload).await?;

    Ok(HttpResponse::Created().json(json!({
        "status": "success",
        "data": { "addedThread": added_thread },
    })))
}

/// GET /threads/{threadId}
pub async fn get_thread(data: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let thread_id = path.into_inner();
    let thread = data.detail_thread.execute(&thread_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "data": { "thread": thread },
    })))
}

/// POST /threads/{threadId}/comments
pub async fn post_comment(
    data: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let payload = json!({
        "threadId": path.into_inner(),
        "content": body.get("content"),
        "owner": user.id,
    });
    let added_comment = data.create_comment.execute(&payload).await?;

    Ok(HttpResponse::Created().json(json!({
        "status": "success",
        "data": { "addedComment": added_comment },
    })))
}

/// DELETE /threads/{threadId}/comments/{commentId}
pub async fn delete_comment(
    data: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (thread_id, comment_id) = path.into_inner();
    let payload = json!({
        "threadId": thread_id,
        "commentId": comment_id,
        "owner": user.id,
    });
    data.delete_comment.execute(&payload).await?;

    Ok(success())
}

/// POST /threads/{threadId}/comments/{commentId}/replies
pub async fn post_reply(
    data: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<(String, String)>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let (thread_id, comment_id) = path.into_inner();
    let payload = json!({
        "threadId": thread_id,
        "commentId": comment_id,
        "content": body.get("content"),
        "owner": user.id,
    });
    let added_reply = data.create_reply.execute(&payload).await?;

    Ok(HttpResponse::Created().json(json!({
        "status": "success",
        "data": { "addedReply": added_reply },
    })))
}

/// DELETE /threads/{threadId}/comments/{commentId}/replies/{replyId}
pub async fn delete_reply(
    data: web::Data<AppState>,
    user: AuthUser,
    path: web::Path<(String, String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (thread_id, comment_id, reply_id) = path.into_inner();
    let payload = json!({
        "threadId": thread_id,
        "commentId": comment_id,
        "replyId": reply_id,
        "owner": user.id,
    });
    data.delete_reply.execute(&payload).await?;

    Ok(success())
}
