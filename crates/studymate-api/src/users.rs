//! User endpoints: listing for the leaderboard, profile pages.

use studymate_shared::constants::USER_EMAIL_HEADER;
use studymate_shared::types::{Page, Post, User};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /users`: every user with the counters the leaderboard
    /// scores on.
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.execute(self.http().get(self.url("/users"))).await
    }

    /// `GET /users/{email}`.
    pub async fn user(&self, email: &str) -> Result<User, ApiError> {
        self.execute(self.http().get(self.url(&format!("/users/{email}"))))
            .await
    }

    /// `GET /users/me/liked-posts`: numbered pagination, identity via
    /// the `X-User-Email` header.
    pub async fn liked_posts(
        &self,
        user_email: &str,
        page: u32,
        size: u32,
    ) -> Result<Page<Post>, ApiError> {
        let request = self
            .http()
            .get(self.url("/users/me/liked-posts"))
            .header(USER_EMAIL_HEADER, user_email)
            .query(&[
                ("page", page.to_string()),
                ("size", size.to_string()),
                ("sort", "desc".to_string()),
            ]);
        self.execute(request).await
    }

    /// `GET /users/me/posts`: the acting user's own posts.
    pub async fn my_posts(
        &self,
        user_email: &str,
        page: u32,
        size: u32,
    ) -> Result<Page<Post>, ApiError> {
        let request = self
            .http()
            .get(self.url("/users/me/posts"))
            .header(USER_EMAIL_HEADER, user_email)
            .query(&[
                ("page", page.to_string()),
                ("size", size.to_string()),
                ("sort", "desc".to_string()),
            ]);
        self.execute(request).await
    }
}
