//! Comment endpoints.

use studymate_shared::types::{Comment, CommentCreate, Slice};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /posts/{id}/comments`: one comment page, oldest first.
    pub async fn comments(
        &self,
        post_id: i64,
        current_user_email: Option<&str>,
        page: u32,
        size: u32,
    ) -> Result<Slice<Comment>, ApiError> {
        let mut request = self
            .http()
            .get(self.url(&format!("/posts/{post_id}/comments")))
            .query(&[("page", page.to_string()), ("size", size.to_string())]);
        if let Some(email) = current_user_email {
            request = request.query(&[("currentUserEmail", email)]);
        }
        self.execute(request).await
    }

    /// `POST /posts/{id}/comments`.
    pub async fn create_comment(
        &self,
        post_id: i64,
        author_email: &str,
        body: &CommentCreate,
    ) -> Result<Comment, ApiError> {
        let request = self
            .http()
            .post(self.url(&format!("/posts/{post_id}/comments")))
            .query(&[("authorEmail", author_email)])
            .json(body);
        self.execute(request).await
    }

    /// `PUT /comments/{id}`.
    pub async fn update_comment(
        &self,
        comment_id: i64,
        author_email: &str,
        body: &CommentCreate,
    ) -> Result<Comment, ApiError> {
        let request = self
            .http()
            .put(self.url(&format!("/comments/{comment_id}")))
            .query(&[("authorEmail", author_email)])
            .json(body);
        self.execute(request).await
    }

    /// `DELETE /comments/{id}`.
    pub async fn delete_comment(
        &self,
        comment_id: i64,
        user_email: &str,
    ) -> Result<String, ApiError> {
        let request = self
            .http()
            .delete(self.url(&format!("/comments/{comment_id}")))
            .query(&[("userEmail", user_email)]);
        self.execute(request).await
    }
}
