//! UI layer: the app shell and its chrome.

pub mod app;

pub use app::SiteApp;
