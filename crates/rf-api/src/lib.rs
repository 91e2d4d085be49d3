//! # rf-api
//!
//! The web routing and orchestration layer for Rusty-Forum.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod middleware;

use actix_web::web;

/// Configures the routes for the forum.
///
/// # Developer Note
/// We use a scoped configuration to allow the main binary to mount
/// the API under different paths if needed (e.g., /api/v1/).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/threads")
            .app_data(error::json_config())
            .route("", web::post().to(handlers::post_thread))
            .route("/{thread_id}", web::get().to(handlers::get_thread))
            .route("/{thread_id}/comments", web::post().to(handlers::post_comment))
            .route(
                "/{thread_id}/comments/{comment_id}",
                web::delete().to(handlers::delete_comment),
            )
            .route(
                "/{thread_id}/comments/{comment_id}/replies",
                web::post().to(handlers::post_reply),
            )
            .route(
                "/{thread_id}/comments/{comment_id}/replies/{reply_id}",
                web::delete().to(handlers::delete_reply),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Claims, TokenVerifier};
    use crate::handlers::AppState;
    use actix_web::{http::StatusCode, test, App};
    use chrono::{TimeZone, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use mockall::predicate::eq;
    use rf_core::entities::CreatedThread;
    use rf_core::error::AppError;
    use rf_core::models::{CommentRow, ThreadRow};
    use rf_core::traits::{MockCommentRepository, MockReplyRepository, MockThreadRepository};
    use serde_json::{json, Value};
    use std::sync::Arc;

    const KEY: &[u8] = b"test-access-token-key";

    fn bearer(user_id: &str) -> (&'static str, String) {
        let exp = (Utc::now() + chrono::Duration::hours(1)).timestamp() as u64;
        let claims = Claims { id: user_id.to_string(), exp: Some(exp), iat: None };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(KEY)).unwrap();
        ("Authorization", format!("Bearer {token}"))
    }

    macro_rules! app {
        ($threads:expr, $comments:expr, $replies:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new(
                        Arc::new($threads),
                        Arc::new($comments),
                        Arc::new($replies),
                    )))
                    .app_data(web::Data::new(TokenVerifier::new(KEY, 3000)))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn post_thread_returns_added_thread() {
        let mut threads = MockThreadRepository::new();
        threads.expect_create_thread().times(1).returning(|thread| {
            CreatedThread::new(&json!({
                "id": "thread-123",
                "title": thread.title(),
                "owner": thread.owner(),
            }))
        });
        let app = app!(threads, MockCommentRepository::new(), MockReplyRepository::new());

        let req = test::TestRequest::post()
            .uri("/threads")
            .insert_header(bearer("user-123"))
            .set_json(json!({ "title": "Example Title", "body": "Example Body" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
        assert_eq!(
            body["data"]["addedThread"],
            json!({ "id": "thread-123", "title": "Example Title", "owner": "user-123" })
        );
    }

    #[actix_web::test]
    async fn post_thread_without_token_is_unauthorized() {
        let mut threads = MockThreadRepository::new();
        threads.expect_create_thread().never();
        let app = app!(threads, MockCommentRepository::new(), MockReplyRepository::new());

        let req = test::TestRequest::post()
            .uri("/threads")
            .set_json(json!({ "title": "Example Title", "body": "Example Body" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn post_thread_with_missing_body_is_bad_request() {
        let app = app!(
            MockThreadRepository::new(),
            MockCommentRepository::new(),
            MockReplyRepository::new()
        );

        let req = test::TestRequest::post()
            .uri("/threads")
            .insert_header(bearer("user-123"))
            .set_json(json!({ "title": "Example Title" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "fail");
        assert_eq!(
            body["message"],
            "cannot create a new thread because a required property is missing"
        );
    }

    #[actix_web::test]
    async fn unparseable_body_gets_fail_envelope() {
        let mut threads = MockThreadRepository::new();
        threads.expect_create_thread().never();
        let app = app!(threads, MockCommentRepository::new(), MockReplyRepository::new());

        let req = test::TestRequest::post()
            .uri("/threads")
            .insert_header(bearer("user-123"))
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "fail", "message": "request body must be a JSON object" }));
    }

    #[actix_web::test]
    async fn get_thread_returns_nested_detail() {
        let date = Utc.with_ymd_and_hms(2021, 8, 8, 7, 19, 9).unwrap();
        let mut threads = MockThreadRepository::new();
        threads
            .expect_get_thread_by_id()
            .with(eq("thread-123"))
            .returning(move |_| {
                Ok(ThreadRow {
                    id: "thread-123".into(),
                    title: "Example Title".into(),
                    body: "Example Body".into(),
                    date,
                    username: "dicoding".into(),
                })
            });
        let mut comments = MockCommentRepository::new();
        comments.expect_get_comments_by_thread_id().returning(move |_| {
            Ok(vec![CommentRow {
                id: "comment-123".into(),
                content: "secret".into(),
                date,
                username: "johndoe".into(),
                is_delete: true,
            }])
        });
        let mut replies = MockReplyRepository::new();
        replies.expect_get_replies_by_thread_id().returning(|_| Ok(vec![]));
        let app = app!(threads, comments, replies);

        let req = test::TestRequest::get().uri("/threads/thread-123").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let thread = &body["data"]["thread"];
        assert_eq!(thread["id"], "thread-123");
        assert_eq!(thread["username"], "dicoding");
        assert_eq!(thread["date"], "2021-08-08T07:19:09.000Z");
        assert_eq!(thread["comments"][0]["content"], "**komentar telah dihapus**");
        assert_eq!(thread["comments"][0]["date"], "2021-08-08T07:19:09.000Z");
        assert_eq!(thread["comments"][0]["replies"], json!([]));
    }

    #[actix_web::test]
    async fn get_missing_thread_is_not_found() {
        let mut threads = MockThreadRepository::new();
        threads
            .expect_get_thread_by_id()
            .returning(|_| Err(AppError::NotFound("thread not found".into())));
        let app = app!(threads, MockCommentRepository::new(), MockReplyRepository::new());

        let req = test::TestRequest::get().uri("/threads/thread-404").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "fail", "message": "thread not found" }));
    }

    #[actix_web::test]
    async fn delete_comment_by_other_user_is_forbidden() {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_available_thread_by_id().returning(|_| Ok(()));
        let mut comments = MockCommentRepository::new();
        comments.expect_verify_available_comment_by_id().returning(|_| Ok(()));
        comments
            .expect_verify_comment_by_owner()
            .with(eq("comment-123"), eq("user-456"))
            .returning(|_, _| Err(AppError::Authorization("you are not the owner of this comment".into())));
        comments.expect_soft_delete_comment_by_id().never();
        let app = app!(threads, comments, MockReplyRepository::new());

        let req = test::TestRequest::delete()
            .uri("/threads/thread-123/comments/comment-123")
            .insert_header(bearer("user-456"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn delete_reply_by_owner_succeeds() {
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_available_thread_by_id().returning(|_| Ok(()));
        let mut comments = MockCommentRepository::new();
        comments.expect_verify_available_comment_by_id().returning(|_| Ok(()));
        let mut replies = MockReplyRepository::new();
        replies.expect_verify_available_reply_by_id().returning(|_| Ok(()));
        replies.expect_verify_reply_by_owner().returning(|_, _| Ok(()));
        replies
            .expect_soft_delete_reply_by_id()
            .with(eq("reply-123"))
            .times(1)
            .returning(|_| Ok(()));
        let app = app!(threads, comments, replies);

        let req = test::TestRequest::delete()
            .uri("/threads/thread-123/comments/comment-123/replies/reply-123")
            .insert_header(bearer("user-123"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "success" }));
    }
}
