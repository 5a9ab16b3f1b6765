//! Every reactive binding in the shell, named as an explicit event.

use site_core::{FieldId, PageId};

/// One user interaction the shell reacts to. Events are collected while
/// the frame is drawn and applied afterwards, so the complete set of
/// bindings is auditable in [`apply_event`](crate::controller::apply_event).
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    NavClicked(PageId),
    MenuToggled,
    BackToTopClicked,
    PrivacyOpened,
    PrivacyDismissed,
    FieldEdited(FieldId, String),
    SubmitRequested,
}
