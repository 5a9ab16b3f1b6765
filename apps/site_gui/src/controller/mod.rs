//! Controller layer: the event table and the single reducer applying it
//! to the app state.

pub mod events;

use std::time::Instant;

use events::SiteEvent;

use crate::ui::app::SiteApp;

/// Applies one user interaction to the shell. Every reactive binding in
/// the app flows through this match.
pub fn apply_event(app: &mut SiteApp, event: SiteEvent) {
    match event {
        SiteEvent::NavClicked(page) => {
            tracing::debug!(page = %page, "nav link activated");
            app.menu.note_navigation();
            app.open_page(page);
        }
        SiteEvent::MenuToggled => {
            let open = app.menu.toggle();
            tracing::debug!(open, "menu toggled");
        }
        SiteEvent::BackToTopClicked => {
            app.begin_scroll_to_top();
        }
        SiteEvent::PrivacyOpened => {
            app.privacy_open = true;
        }
        SiteEvent::PrivacyDismissed => {
            app.privacy_open = false;
        }
        SiteEvent::FieldEdited(field, value) => {
            app.form.edit(field, value);
        }
        SiteEvent::SubmitRequested => {
            app.form.submit(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_event, events::SiteEvent};
    use crate::ui::app::SiteApp;
    use site_core::{FieldId, PageId, SiteContent, SubmissionState};

    fn test_app() -> SiteApp {
        let mut text = String::from(
            "privacy_notice = \"Nothing is collected.\"\n\n[site]\nname = \"Test Site\"\ntagline = \"Testing\"\n",
        );
        for id in PageId::ALL {
            text.push_str(&format!(
                "\n[[pages]]\nid = \"{id}\"\nnav_label = \"{id}\"\ntitle = \"{id}\"\n"
            ));
        }
        let content = SiteContent::from_toml(&text).expect("test content");
        SiteApp::from_parts(content, PageId::Home, 1.0)
    }

    #[test]
    fn nav_click_switches_page_and_closes_the_menu() {
        let mut app = test_app();
        apply_event(&mut app, SiteEvent::MenuToggled);
        assert!(app.menu.is_open());

        apply_event(&mut app, SiteEvent::NavClicked(PageId::Contact));
        assert_eq!(app.current_page, PageId::Contact);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn menu_toggle_round_trips() {
        let mut app = test_app();
        apply_event(&mut app, SiteEvent::MenuToggled);
        apply_event(&mut app, SiteEvent::MenuToggled);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn privacy_dialog_opens_and_dismisses() {
        let mut app = test_app();
        apply_event(&mut app, SiteEvent::PrivacyOpened);
        assert!(app.privacy_open);
        apply_event(&mut app, SiteEvent::PrivacyDismissed);
        assert!(!app.privacy_open);
    }

    #[test]
    fn field_edits_flow_into_the_form_controller() {
        let mut app = test_app();
        apply_event(&mut app, SiteEvent::SubmitRequested);
        assert!(app.form.error(FieldId::Name).is_some());

        apply_event(
            &mut app,
            SiteEvent::FieldEdited(FieldId::Name, "Alice".to_string()),
        );
        assert_eq!(app.form.value(FieldId::Name), "Alice");
        assert!(app.form.error(FieldId::Name).is_none());
    }

    #[test]
    fn a_valid_submit_starts_the_submission_sequence() {
        let mut app = test_app();
        for (field, value) in [
            (FieldId::Name, "Alice"),
            (FieldId::Email, "alice@example.com"),
            (FieldId::Subject, "Hello"),
            (FieldId::Message, "A message."),
        ] {
            apply_event(&mut app, SiteEvent::FieldEdited(field, value.to_string()));
        }
        apply_event(&mut app, SiteEvent::SubmitRequested);
        assert_eq!(app.form.state(), SubmissionState::Submitting);
        assert!(!app.form.submit_enabled());
    }
}
