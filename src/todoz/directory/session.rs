use super::client::{PageResponse, UsersClient};
use super::view::{email_domains, process_users, DomainFilter, SortField, ViewOptions};
use crate::model::User;
use tracing::debug;

const FETCH_FALLBACK_ERROR: &str = "Failed to fetch users";

/// Handle for one in-flight fetch. Only the most recently issued token may
/// complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    id: u64,
    page: u32,
}

impl FetchToken {
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// View state of the user directory: the raw page cache plus everything the
/// user can change.
#[derive(Debug, Clone)]
pub struct DirectorySession {
    page: u32,
    total_pages: u32,
    users: Vec<User>,
    domains: Vec<String>,
    options: ViewOptions,
    loading: bool,
    error: Option<String>,
    status: Option<u16>,
    latest_token: u64,
}

impl Default for DirectorySession {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectorySession {
    pub fn new() -> Self {
        Self {
            page: 1,
            total_pages: 1,
            users: Vec::new(),
            domains: Vec::new(),
            options: ViewOptions::default(),
            loading: false,
            error: None,
            status: None,
            latest_token: 0,
        }
    }

    pub fn with_options(mut self, options: ViewOptions) -> Self {
        self.options = options;
        self
    }

    /// Start on `page` instead of 1. The page count stays at 1 until a fetch
    /// reports the real one.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Rows to display: the loaded page after search, domain filter and sort.
    pub fn visible_users(&self) -> Vec<User> {
        process_users(&self.users, &self.options)
    }

    /// Start a fetch of the current page. Any previously issued token becomes
    /// stale.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.latest_token += 1;
        self.loading = true;
        self.error = None;
        FetchToken {
            id: self.latest_token,
            page: self.page,
        }
    }

    /// Apply a finished fetch. Returns `false` and leaves state untouched when
    /// `token` has been superseded.
    pub fn complete_fetch(&mut self, token: FetchToken, response: PageResponse) -> bool {
        if token.id != self.latest_token {
            debug!(
                page = token.page,
                token = token.id,
                latest = self.latest_token,
                "discarding stale user page"
            );
            return false;
        }

        self.loading = false;
        if let Some(status) = response.status {
            self.status = Some(status);
        }

        match response.page {
            Ok(page) => {
                self.total_pages = page.page_count();
                self.set_users(page.data);
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(if message.is_empty() {
                    FETCH_FALLBACK_ERROR.to_string()
                } else {
                    message
                });
                self.set_users(Vec::new());
            }
        }
        true
    }

    /// Fetch the current page and apply it.
    pub async fn refresh(&mut self, client: &UsersClient) -> bool {
        let token = self.begin_fetch();
        let response = client.fetch_page(token.page()).await;
        self.complete_fetch(token, response)
    }

    /// Returns `true` when the page changed and a fetch is due.
    pub fn prev_page(&mut self) -> bool {
        self.set_page(self.page.saturating_sub(1).max(1))
    }

    /// Returns `true` when the page changed and a fetch is due.
    pub fn next_page(&mut self) -> bool {
        if self.page >= self.total_pages {
            return false;
        }
        self.set_page(self.page.saturating_add(1).min(self.total_pages))
    }

    /// Jump to `page` if it lies in `1..=total_pages`. Returns `true` when the page
    /// changed and a fetch is due.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages {
            return false;
        }
        self.set_page(page)
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.options.toggle_sort(field);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.options.search = term.into();
    }

    pub fn set_domain_filter(&mut self, filter: DomainFilter) {
        self.options.domain = filter;
    }

    fn set_page(&mut self, page: u32) -> bool {
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    fn set_users(&mut self, users: Vec<User>) {
        self.domains = email_domains(&users);
        self.users = users;
    }
}
