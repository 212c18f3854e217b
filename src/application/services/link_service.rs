//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{LinkStats, NewLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved};
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Upper bound on insert attempts for one shorten request.
pub const MAX_ATTEMPTS: usize = 10;

/// Service for creating and retrieving shortened links.
///
/// Handles URL normalization, collision-free code generation and the click
/// counter.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Creates a short link for `original_url`.
    ///
    /// # Code Generation
    ///
    /// - Generates a random 6-character alphanumeric code
    /// - Reserved route segments are skipped without touching the store
    /// - The insert itself enforces uniqueness; on conflict a new code is drawn
    /// - Gives up after [`MAX_ATTEMPTS`] attempts
    ///
    /// Every request creates a new link, even for a URL that was shortened
    /// before.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or invalid.
    /// Returns [`AppError::Internal`] if no free code was found or on
    /// database errors.
    pub async fn create_short_link(&self, original_url: &str) -> Result<ShortLink, AppError> {
        let original_url = normalize_url(original_url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "url": original_url }))
        })?;

        for attempt in 1..=MAX_ATTEMPTS {
            let short_code = generate_code();

            if is_reserved(&short_code) {
                continue;
            }

            let new_link = NewLink {
                short_code,
                original_url: original_url.clone(),
            };

            match self.repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    tracing::debug!("Short code collision on attempt {}", attempt);
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link_by_code(&self, short_code: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))
    }

    /// Records one redirect and returns the new click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn increment_clicks(&self, short_code: &str) -> Result<i64, AppError> {
        self.repository
            .increment_clicks(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))
    }

    /// Returns the counter snapshot for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_stats(&self, short_code: &str) -> Result<LinkStats, AppError> {
        self.get_link_by_code(short_code).await.map(LinkStats::from)
    }

    /// Lists the newest links, newest first.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        self.repository.list_recent(limit).await
    }

    /// Counts all links.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn not_found(short_code: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "short_code": short_code }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn create_test_link(id: i64, code: &str, url: &str) -> ShortLink {
        ShortLink::new(id, url.to_string(), code.to_string(), Utc::now(), 0)
    }

    #[tokio::test]
    async fn test_create_short_link_success() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_link| {
                new_link.original_url == "https://example.com" && new_link.short_code.len() == 6
            })
            .times(1)
            .returning(|new_link| {
                Ok(create_test_link(1, &new_link.short_code, &new_link.original_url))
            });

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service.create_short_link("example.com").await.unwrap();

        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.short_code.len(), 6);
        assert_eq!(link.click_count, 0);
    }

    #[tokio::test]
    async fn test_create_short_link_retries_on_conflict() {
        let mut mock_repo = MockLinkRepository::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        mock_repo.expect_create().returning(move |new_link| {
            if calls_clone.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(AppError::conflict("duplicate", json!({})))
            } else {
                Ok(create_test_link(1, &new_link.short_code, &new_link.original_url))
            }
        });

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("https://example.com").await;

        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_create_short_link_gives_up_after_cap() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .returning(|_| Err(AppError::conflict("duplicate", json!({}))));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("https://example.com").await;

        match result {
            Err(AppError::Internal { message, .. }) => {
                assert_eq!(message, "Failed to generate unique code");
            }
            other => panic!("expected internal error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_short_link_propagates_database_error() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("https://example.com").await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_create_short_link_rejects_invalid_url() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.create_short_link("   ").await,
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            service.create_short_link("ftp://example.com").await,
            Err(AppError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_link_by_code_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "nope42")
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let err = service.get_link_by_code("nope42").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Short URL not found");
    }

    #[tokio::test]
    async fn test_increment_clicks() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_increment_clicks()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(Some(5)));

        let service = LinkService::new(Arc::new(mock_repo));

        assert_eq!(service.increment_clicks("abc123").await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_increment_clicks_unknown_code() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_increment_clicks()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.increment_clicks("nope42").await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_stats() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_find_by_code().times(1).returning(|code| {
            let mut link = create_test_link(3, code, "https://rust-lang.org");
            link.click_count = 9;
            Ok(Some(link))
        });

        let service = LinkService::new(Arc::new(mock_repo));

        let stats = service.get_stats("abc123").await.unwrap();

        assert_eq!(stats.short_code, "abc123");
        assert_eq!(stats.original_url, "https://rust-lang.org");
        assert_eq!(stats.click_count, 9);
    }
}
