//! Post endpoints: listing, detail, CRUD, likes.

use studymate_feed::PostSource;
use studymate_shared::types::{Post, PostCreate, PostUpdate, Slice, SortMode};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /posts`: one infinite-scroll feed page.  `page` is 1-based.
    pub async fn posts(
        &self,
        page: u32,
        size: u32,
        sort: SortMode,
        keyword: Option<&str>,
    ) -> Result<Slice<Post>, ApiError> {
        let mut request = self.http().get(self.url("/posts")).query(&[
            ("page", page.to_string()),
            ("size", size.to_string()),
            ("orderCondition", sort.order_condition().to_string()),
        ]);
        if let Some(keyword) = keyword {
            request = request.query(&[("searchKeyword", keyword)]);
        }
        self.execute(request).await
    }

    /// `GET /posts/{id}`: post detail.  Passing the viewer's email lets
    /// the server fill viewer-specific flags.
    pub async fn post(
        &self,
        post_id: i64,
        current_user_email: Option<&str>,
    ) -> Result<Post, ApiError> {
        let mut request = self.http().get(self.url(&format!("/posts/{post_id}")));
        if let Some(email) = current_user_email {
            request = request.query(&[("currentUserEmail", email)]);
        }
        self.execute(request).await
    }

    /// `POST /posts`: create a post.
    pub async fn create_post(
        &self,
        author_email: &str,
        body: &PostCreate,
    ) -> Result<Post, ApiError> {
        let request = self
            .http()
            .post(self.url("/posts"))
            .query(&[("authorEmail", author_email)])
            .json(body);
        self.execute(request).await
    }

    /// `PUT /posts/{id}`: update a post.
    pub async fn update_post(
        &self,
        post_id: i64,
        author_email: &str,
        body: &PostUpdate,
    ) -> Result<Post, ApiError> {
        let request = self
            .http()
            .put(self.url(&format!("/posts/{post_id}")))
            .query(&[("authorEmail", author_email)])
            .json(body);
        self.execute(request).await
    }

    /// `DELETE /posts/{id}`.
    pub async fn delete_post(&self, post_id: i64, author_email: &str) -> Result<String, ApiError> {
        let request = self
            .http()
            .delete(self.url(&format!("/posts/{post_id}")))
            .query(&[("authorEmail", author_email)]);
        self.execute(request).await
    }

    /// `POST /posts/{id}/likes`.
    pub async fn like_post(&self, post_id: i64, user_email: &str) -> Result<String, ApiError> {
        let request = self
            .http()
            .post(self.url(&format!("/posts/{post_id}/likes")))
            .query(&[("userEmail", user_email)]);
        self.execute(request).await
    }

    /// `DELETE /posts/{id}/likes`.
    pub async fn unlike_post(&self, post_id: i64, user_email: &str) -> Result<String, ApiError> {
        let request = self
            .http()
            .delete(self.url(&format!("/posts/{post_id}/likes")))
            .query(&[("userEmail", user_email)]);
        self.execute(request).await
    }

    /// `GET /posts/users/{email}`: posts authored by one user,
    /// newest first.  `page` starts at 1 like every other listing here.
    pub async fn user_posts(
        &self,
        author_email: &str,
        current_user_email: Option<&str>,
        page: u32,
        size: u32,
    ) -> Result<Slice<Post>, ApiError> {
        self.execute(self.user_posts_request(author_email, current_user_email, page, size))
            .await
    }

    /// This endpoint takes Spring-Pageable zero-based pages, unlike the
    /// 1-based `/posts` and `/users/me/*` listings, so the caller's page
    /// number is shifted down before the request goes out.
    fn user_posts_request(
        &self,
        author_email: &str,
        current_user_email: Option<&str>,
        page: u32,
        size: u32,
    ) -> reqwest::RequestBuilder {
        let mut request = self
            .http()
            .get(self.url(&format!("/posts/users/{author_email}")))
            .query(&[
                ("page", page.saturating_sub(1).to_string()),
                ("size", size.to_string()),
                ("sort", "createdAt,desc".to_string()),
            ]);
        if let Some(email) = current_user_email {
            request = request.query(&[("currentUserEmail", email)]);
        }
        request
    }
}

impl PostSource for ApiClient {
    type Error = ApiError;

    async fn posts_page(
        &self,
        page: u32,
        size: u32,
        sort: SortMode,
        keyword: Option<&str>,
    ) -> Result<Slice<Post>, ApiError> {
        self.posts(page, size, sort, keyword).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig::default()).unwrap()
    }

    #[test]
    fn user_posts_page_one_maps_to_zero_based_query() {
        let request = client()
            .user_posts_request("mina@example.com", Some("viewer@example.com"), 1, 10)
            .build()
            .unwrap();
        let query = request.url().query().unwrap().to_string();
        assert!(query.contains("page=0"), "query was: {query}");
        assert!(query.contains("size=10"));
        assert!(query.contains("currentUserEmail=viewer%40example.com"));
    }

    #[test]
    fn user_posts_later_pages_shift_down_by_one() {
        let request = client()
            .user_posts_request("mina@example.com", None, 3, 10)
            .build()
            .unwrap();
        assert!(request.url().query().unwrap().contains("page=2"));
    }
}
