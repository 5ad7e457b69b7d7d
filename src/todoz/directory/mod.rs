//! # User Directory
//!
//! Client side of the remote user listing: fetch one page, then search, filter,
//! sort and page through it locally.
//!
//! ## Pipeline
//!
//! ```text
//! page change ──► UsersClient::fetch_page ──► DirectorySession (raw page cache)
//!                                                   │
//!                                   email_domains ◄─┤
//!                                                   ▼
//!                               view::process_users(users, &ViewOptions)
//!                                                   │
//!                                                   ▼
//!                                                render
//! ```
//!
//! Each stage is a pure function of the previous stage plus the current view
//! options. Only the session holds state. The domain set is recomputed from scratch
//! whenever a new page lands, and the visible rows are recomputed on every read.
//!
//! ## Stale Responses
//!
//! Every fetch started through [`DirectorySession::begin_fetch`] receives a
//! [`FetchToken`] with a monotonically increasing id. Completing a fetch whose token
//! is no longer the latest is a no-op, so a slow response for an old page can never
//! overwrite a newer one.

pub mod client;
pub mod session;
pub mod view;

pub use client::{PageResponse, UsersClient};
pub use session::{DirectorySession, FetchToken};
pub use view::{email_domains, process_users, DomainFilter, SortField, SortOrder, ViewOptions};
