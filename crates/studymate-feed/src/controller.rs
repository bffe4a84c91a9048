//! Feed paging state machine.

use studymate_shared::constants::FEED_PAGE_SIZE;
use studymate_shared::types::{Post, Slice, SortMode};

/// Seam to the post listing endpoint.  Implemented by the API client;
/// tests substitute a scripted mock.
#[allow(async_fn_in_trait)]
pub trait PostSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch one feed page.  `page` starts at 1.
    async fn posts_page(
        &self,
        page: u32,
        size: u32,
        sort: SortMode,
        keyword: Option<&str>,
    ) -> Result<Slice<Post>, Self::Error>;
}

/// Result of one [`FeedController::load_next`] call.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched; `appended` posts joined the list.
    Loaded { appended: usize },
    /// Nothing to do: a load is in flight or the query is exhausted.
    Skipped,
    /// The fetch failed; state is exactly as before the attempt.
    Failed,
}

/// Accumulating, resettable view over the post feed.
pub struct FeedController {
    posts: Vec<Post>,
    /// Next page to request, 1-based.
    page: u32,
    page_size: u32,
    sort: SortMode,
    keyword: Option<String>,
    exhausted: bool,
    loading: bool,
}

impl FeedController {
    pub fn new() -> Self {
        Self::with_page_size(FEED_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            posts: Vec::new(),
            page: 1,
            page_size,
            sort: SortMode::default(),
            keyword: None,
            exhausted: false,
            loading: false,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Clear the accumulated list and cursor and re-arm the exhausted
    /// flag.  Called whenever sort mode or keyword changes.
    pub fn reset(&mut self, sort: SortMode, keyword: Option<&str>) {
        tracing::debug!(sort = %sort, keyword = ?keyword, "feed reset");
        self.posts.clear();
        self.page = 1;
        self.sort = sort;
        self.keyword = keyword
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);
        self.exhausted = false;
        self.loading = false;
    }

    /// Load the next page from `source`.
    ///
    /// No-op while a load is in flight or once the server reported the
    /// last page.  The first page after a reset replaces the list;
    /// later pages append.  A failed fetch is logged and leaves the
    /// cursor, list, and flags untouched; the caller may simply call
    /// again.
    pub async fn load_next<S: PostSource>(&mut self, source: &S) -> LoadOutcome {
        if self.loading || self.exhausted {
            return LoadOutcome::Skipped;
        }
        self.loading = true;

        let result = source
            .posts_page(self.page, self.page_size, self.sort, self.keyword())
            .await;
        self.loading = false;

        let slice = match result {
            Ok(slice) => slice,
            Err(err) => {
                tracing::warn!(page = self.page, error = %err, "feed page load failed");
                return LoadOutcome::Failed;
            }
        };

        let appended = slice.content.len();
        if self.page == 1 {
            self.posts = slice.content;
        } else {
            self.posts.extend(slice.content);
        }
        self.exhausted = slice.last;
        self.page += 1;

        tracing::debug!(
            appended,
            total = self.posts.len(),
            exhausted = self.exhausted,
            "feed page loaded"
        );
        LoadOutcome::Loaded { appended }
    }
}

impl Default for FeedController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct FetchFailed;

    impl std::fmt::Display for FetchFailed {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "fetch failed")
        }
    }

    impl std::error::Error for FetchFailed {}

    fn post(id: i64) -> Post {
        Post {
            id,
            image_url: None,
            content: format!("<p>post {id}</p>"),
            author_name: "tester".into(),
            author_email: "tester@example.com".into(),
            author_profile_image_url: None,
            visibility: studymate_shared::types::Visibility::Public,
            like_count: 0,
            comment_count: 0,
            view_count: 0,
            hashtags: None,
            created_at: Utc::now(),
            modified_at: Utc::now(),
        }
    }

    fn slice(ids: &[i64], number: u32, last: bool) -> Slice<Post> {
        Slice {
            content: ids.iter().copied().map(post).collect(),
            number,
            size: ids.len() as u32,
            number_of_elements: ids.len() as u32,
            first: number == 0,
            last,
            empty: ids.is_empty(),
        }
    }

    /// Records every request and replays scripted pages.
    struct ScriptedSource {
        requests: Mutex<Vec<(u32, String, Option<String>)>>,
        pages: Vec<Result<Slice<Post>, ()>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<Result<Slice<Post>, ()>>) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                pages,
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl PostSource for ScriptedSource {
        type Error = FetchFailed;

        async fn posts_page(
            &self,
            page: u32,
            _size: u32,
            sort: SortMode,
            keyword: Option<&str>,
        ) -> Result<Slice<Post>, FetchFailed> {
            let mut requests = self.requests.lock().unwrap();
            let index = requests.len();
            requests.push((
                page,
                sort.order_condition().to_string(),
                keyword.map(str::to_string),
            ));
            self.pages
                .get(index)
                .cloned()
                .unwrap_or(Err(()))
                .map_err(|_| FetchFailed)
        }
    }

    #[tokio::test]
    async fn first_page_replaces_then_appends() {
        let source = ScriptedSource::new(vec![
            Ok(slice(&[1, 2], 0, false)),
            Ok(slice(&[3], 1, true)),
        ]);
        let mut feed = FeedController::with_page_size(2);

        assert_eq!(
            feed.load_next(&source).await,
            LoadOutcome::Loaded { appended: 2 }
        );
        assert_eq!(
            feed.load_next(&source).await,
            LoadOutcome::Loaded { appended: 1 }
        );

        let ids: Vec<_> = feed.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(feed.is_exhausted());
    }

    #[tokio::test]
    async fn reset_to_popular_refetches_page_one_under_like_order() {
        let source = ScriptedSource::new(vec![
            Ok(slice(&[1], 0, true)),
            Ok(slice(&[9], 0, true)),
        ]);
        let mut feed = FeedController::with_page_size(20);

        feed.load_next(&source).await;
        assert!(feed.is_exhausted());

        feed.reset(SortMode::Popular, None);
        assert!(feed.posts().is_empty());
        assert!(!feed.is_exhausted());

        feed.load_next(&source).await;

        let requests = source.requests.lock().unwrap();
        assert_eq!(requests[0], (1, "CREATED_AT_DESC".to_string(), None));
        assert_eq!(requests[1], (1, "LIKE_COUNT_DESC".to_string(), None));
        drop(requests);
        assert_eq!(feed.posts()[0].id, 9);
    }

    #[tokio::test]
    async fn exhausted_feed_makes_no_further_requests() {
        let source = ScriptedSource::new(vec![Ok(slice(&[1], 0, true))]);
        let mut feed = FeedController::with_page_size(20);

        feed.load_next(&source).await;
        assert!(feed.is_exhausted());

        assert_eq!(feed.load_next(&source).await, LoadOutcome::Skipped);
        assert_eq!(feed.load_next(&source).await, LoadOutcome::Skipped);
        assert_eq!(source.request_count(), 1);

        // A reset re-arms the query.
        feed.reset(SortMode::Latest, None);
        assert_ne!(feed.load_next(&source).await, LoadOutcome::Skipped);
    }

    #[tokio::test]
    async fn failed_page_leaves_state_untouched() {
        let source = ScriptedSource::new(vec![
            Ok(slice(&[1], 0, false)),
            Err(()),
            Ok(slice(&[2], 1, true)),
        ]);
        let mut feed = FeedController::with_page_size(20);

        feed.load_next(&source).await;
        assert_eq!(feed.load_next(&source).await, LoadOutcome::Failed);

        // Cursor did not advance, list unchanged, not exhausted.
        assert_eq!(feed.posts().len(), 1);
        assert!(!feed.is_exhausted());

        // The retry asks for the same page again.
        feed.load_next(&source).await;
        let requests = source.requests.lock().unwrap();
        assert_eq!(requests[1].0, 2);
        assert_eq!(requests[2].0, 2);
    }

    #[tokio::test]
    async fn keyword_passed_through_and_blank_keyword_dropped() {
        let source = ScriptedSource::new(vec![
            Ok(slice(&[1], 0, true)),
            Ok(slice(&[1], 0, true)),
        ]);
        let mut feed = FeedController::with_page_size(20);

        feed.reset(SortMode::Latest, Some("알고리즘"));
        feed.load_next(&source).await;

        feed.reset(SortMode::Latest, Some("   "));
        feed.load_next(&source).await;

        let requests = source.requests.lock().unwrap();
        assert_eq!(requests[0].2.as_deref(), Some("알고리즘"));
        assert_eq!(requests[1].2, None);
    }
}
