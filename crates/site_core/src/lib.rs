//! Core interactivity logic for the informational site, kept free of any
//! GUI dependency: the contact form controller, cancellable scheduled
//! tasks, navigation and menu state, the back-to-top threshold, and the
//! site content document with its load-time validation.

pub mod content;
pub mod form;
pub mod nav;
pub mod schedule;
pub mod scroll;

pub use content::{ContentError, PageContent, SiteContent};
pub use form::{ContactForm, FieldError, FieldId, SubmissionState};
pub use nav::{MenuIcon, MenuState, PageId};
pub use schedule::{TaskId, TaskQueue};
