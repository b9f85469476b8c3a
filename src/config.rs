//! Build Configuration
//!
//! Compile-time settings for the API endpoint, session cookie and layout.

use crate::pagination::{Breakpoint, PageSize};

/// API base URL, overridable at build time with `PORTFOLIO_API_URL`
pub const API_URL: &str = match option_env!("PORTFOLIO_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080/api/v1",
};

/// Cookie holding the bearer token
pub const TOKEN_COOKIE: &str = "JWT";

/// Token cookie lifetime in days
pub const TOKEN_COOKIE_DAYS: i64 = 1;

/// How long an alert banner stays visible
pub const ALERT_DURATION_MS: u32 = 4_000;

/// About page starts with this many cards per page until the first resize check
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Viewport breakpoints for the About gallery, widest first
pub const GALLERY_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint::new(1400, PageSize::Fixed(6)),
    Breakpoint::new(1200, PageSize::Fixed(5)),
    Breakpoint::new(992, PageSize::Fixed(4)),
    Breakpoint::new(768, PageSize::Fixed(3)),
    Breakpoint::new(575, PageSize::Fixed(2)),
    Breakpoint::new(0, PageSize::All),
];
