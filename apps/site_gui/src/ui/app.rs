//! App shell: navigation chrome, page rendering, the floating
//! back-to-top control, the privacy dialog, and the contact form page.

use std::time::Instant;

use chrono::{Datelike, Local};
use eframe::egui;
use egui::RichText;
use serde::{Deserialize, Serialize};
use site_core::{
    nav::{link_accessible_label, link_is_active},
    scroll::back_to_top_visible,
    ContactForm, FieldId, MenuState, PageId, SiteContent,
};

use crate::controller::{self, events::SiteEvent};

/// Window width below which the nav collapses behind the menu toggle.
const COMPACT_BREAKPOINT: f32 = 720.0;
/// Widest the page column gets on large windows.
const PAGE_COLUMN_WIDTH: f32 = 760.0;

const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(0xb0, 0x2a, 0x37);
const SUCCESS_FILL: egui::Color32 = egui::Color32::from_rgb(0xd1, 0xe7, 0xdd);
const SUCCESS_TEXT: egui::Color32 = egui::Color32::from_rgb(0x0f, 0x51, 0x32);

pub const SETTINGS_STORAGE_KEY: &str = "site_gui.settings";

/// Presentation preferences kept across runs. Form data is never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSettings {
    pub text_scale: f32,
}

pub struct SiteApp {
    content: SiteContent,
    pub(crate) current_page: PageId,
    pub(crate) menu: MenuState,
    pub(crate) form: ContactForm,
    pub(crate) privacy_open: bool,
    scroll_offset: f32,
    forced_scroll_offset: Option<f32>,
    scroll_to_top_active: bool,
    footer_year: i32,
    text_scale: f32,
}

fn is_compact(window_width: f32) -> bool {
    window_width < COMPACT_BREAKPOINT
}

fn footer_line(year: i32, site_name: &str) -> String {
    format!("\u{a9} {year} {site_name}. All rights reserved.")
}

impl SiteApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        content: SiteContent,
        start_page: PageId,
        text_scale_override: Option<f32>,
    ) -> Self {
        let persisted = cc.storage.and_then(|storage| {
            storage
                .get_string(SETTINGS_STORAGE_KEY)
                .and_then(|text| serde_json::from_str::<PersistedSettings>(&text).ok())
        });
        let text_scale = text_scale_override
            .or(persisted.map(|settings| settings.text_scale))
            .unwrap_or(1.0)
            .clamp(0.5, 2.0);

        cc.egui_ctx.set_visuals(egui::Visuals::light());
        cc.egui_ctx.set_zoom_factor(text_scale);

        Self::from_parts(content, start_page, text_scale)
    }

    /// Constructor without the eframe context, shared with the reducer
    /// tests.
    pub(crate) fn from_parts(content: SiteContent, start_page: PageId, text_scale: f32) -> Self {
        Self {
            content,
            current_page: start_page,
            menu: MenuState::default(),
            form: ContactForm::new(),
            privacy_open: false,
            scroll_offset: 0.0,
            forced_scroll_offset: None,
            scroll_to_top_active: false,
            footer_year: Local::now().year(),
            text_scale,
        }
    }

    pub(crate) fn open_page(&mut self, page: PageId) {
        self.current_page = page;
        // Jump straight to the top so navigation reads like loading a
        // fresh page.
        self.forced_scroll_offset = Some(0.0);
        self.scroll_to_top_active = false;
        self.scroll_offset = 0.0;
    }

    pub(crate) fn begin_scroll_to_top(&mut self) {
        self.scroll_to_top_active = true;
    }

    fn show_nav_bar(&self, ctx: &egui::Context, compact: bool, events: &mut Vec<SiteEvent>) {
        egui::TopBottomPanel::top("site-nav").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(&self.content.site.name).strong().size(18.0));
                if !compact {
                    ui.weak(&self.content.site.tagline);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if compact {
                        let toggle = egui::Button::new(
                            RichText::new(self.menu.icon().glyph()).size(16.0),
                        )
                        .min_size(egui::vec2(36.0, 30.0));
                        let response = ui.add(toggle).on_hover_text(self.menu.toggle_label());
                        if response.clicked() {
                            events.push(SiteEvent::MenuToggled);
                        }
                    } else {
                        // Laid out right-to-left, so walk the pages in
                        // reverse to keep their reading order.
                        for page in PageId::ALL.into_iter().rev() {
                            self.nav_link(ui, page, events);
                        }
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn nav_link(&self, ui: &mut egui::Ui, page: PageId, events: &mut Vec<SiteEvent>) {
        let label = &self.content.page(page).nav_label;
        let active = link_is_active(page, self.current_page);
        let response = ui
            .selectable_label(active, label)
            .on_hover_text(link_accessible_label(label, page, self.current_page));
        if response.clicked() {
            events.push(SiteEvent::NavClicked(page));
        }
    }

    fn show_compact_menu(&self, ctx: &egui::Context, events: &mut Vec<SiteEvent>) {
        egui::TopBottomPanel::top("site-nav-menu").show(ctx, |ui| {
            ui.add_space(4.0);
            for page in PageId::ALL {
                let label = &self.content.page(page).nav_label;
                let active = link_is_active(page, self.current_page);
                let text = link_accessible_label(label, page, self.current_page);
                if ui.selectable_label(active, text).clicked() {
                    events.push(SiteEvent::NavClicked(page));
                }
            }
            ui.add_space(4.0);
        });
    }

    fn show_page(&mut self, ctx: &egui::Context, events: &mut Vec<SiteEvent>) {
        let forced_offset = self.forced_scroll_offset.take();
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll = egui::ScrollArea::vertical().id_salt(self.current_page.as_str());
            if let Some(offset) = forced_offset {
                scroll = scroll.vertical_scroll_offset(offset);
            }
            let output = scroll.show(ui, |ui| {
                ui.set_width(ui.available_width());
                let column = ui.available_width().min(PAGE_COLUMN_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.set_width(column);
                    self.show_page_body(ui, events);
                    ui.add_space(24.0);
                    self.show_footer(ui, events);
                    ui.add_space(16.0);
                });
            });
            self.scroll_offset = output.state.offset.y;
        });
    }

    fn show_page_body(&self, ui: &mut egui::Ui, events: &mut Vec<SiteEvent>) {
        let page = self.content.page(self.current_page);
        ui.add_space(18.0);
        ui.heading(RichText::new(&page.title).size(26.0).strong());
        if !page.intro.is_empty() {
            ui.add_space(6.0);
            ui.label(RichText::new(&page.intro).size(15.0));
        }
        for section in &page.sections {
            ui.add_space(14.0);
            ui.label(RichText::new(&section.heading).strong().size(17.0));
            ui.add_space(2.0);
            ui.label(&section.body);
        }
        if self.current_page == PageId::Contact {
            ui.add_space(18.0);
            self.show_contact_form(ui, events);
        }
    }

    fn contact_text_field(
        &self,
        ui: &mut egui::Ui,
        field: FieldId,
        multiline: bool,
        events: &mut Vec<SiteEvent>,
    ) {
        ui.label(RichText::new(field.label()).strong());
        let mut buf = self.form.value(field).to_string();
        let edit = if multiline {
            egui::TextEdit::multiline(&mut buf).desired_rows(6)
        } else {
            egui::TextEdit::singleline(&mut buf)
        }
        .id_salt(field.as_str())
        .desired_width(f32::INFINITY);
        let response = ui.add(edit);

        if response.changed() {
            events.push(SiteEvent::FieldEdited(field, buf));
        }
        // Enter in a single-line field submits, like the form it mirrors.
        if !multiline
            && response.lost_focus()
            && ui.input(|input| input.key_pressed(egui::Key::Enter))
        {
            events.push(SiteEvent::SubmitRequested);
        }

        if let Some(error) = self.form.error(field) {
            ui.label(RichText::new(error.message()).color(ERROR_TEXT).small());
        }
        ui.add_space(8.0);
    }

    fn show_contact_form(&self, ui: &mut egui::Ui, events: &mut Vec<SiteEvent>) {
        self.contact_text_field(ui, FieldId::Name, false, events);
        self.contact_text_field(ui, FieldId::Email, false, events);
        self.contact_text_field(ui, FieldId::Subject, false, events);
        self.contact_text_field(ui, FieldId::Message, true, events);

        ui.horizontal(|ui| {
            let submit = egui::Button::new(RichText::new("Send message").strong())
                .min_size(egui::vec2(150.0, 34.0));
            if ui.add_enabled(self.form.submit_enabled(), submit).clicked() {
                events.push(SiteEvent::SubmitRequested);
            }
            if self.form.is_submitting() {
                ui.add(egui::Spinner::new().size(16.0));
                ui.weak("Sending your message\u{2026}");
            }
        });

        if self.form.notice_visible() {
            ui.add_space(10.0);
            egui::Frame::NONE
                .fill(SUCCESS_FILL)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new("Thank you! Your message has been sent.")
                            .color(SUCCESS_TEXT),
                    );
                });
        }
    }

    fn show_footer(&self, ui: &mut egui::Ui, events: &mut Vec<SiteEvent>) {
        ui.separator();
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            ui.small(footer_line(self.footer_year, &self.content.site.name));
            if ui.link(RichText::new("Privacy Policy").small()).clicked() {
                events.push(SiteEvent::PrivacyOpened);
            }
        });
    }

    fn show_back_to_top(&self, ctx: &egui::Context, events: &mut Vec<SiteEvent>) {
        if !back_to_top_visible(self.scroll_offset) {
            return;
        }
        egui::Area::new(egui::Id::new("back-to-top"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-18.0, -18.0))
            .show(ctx, |ui| {
                let button = egui::Button::new(RichText::new("\u{2b06}").size(18.0))
                    .min_size(egui::vec2(40.0, 40.0))
                    .corner_radius(20.0);
                if ui.add(button).on_hover_text("Back to top").clicked() {
                    events.push(SiteEvent::BackToTopClicked);
                }
            });
    }

    fn show_privacy_dialog(&self, ctx: &egui::Context, events: &mut Vec<SiteEvent>) {
        let modal = egui::Modal::new(egui::Id::new("privacy-notice")).show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.heading("Privacy Policy");
            ui.add_space(6.0);
            ui.label(&self.content.privacy_notice);
            ui.add_space(10.0);
            if ui.button("Close").clicked() {
                events.push(SiteEvent::PrivacyDismissed);
            }
        });
        if modal.should_close() {
            events.push(SiteEvent::PrivacyDismissed);
        }
    }

    fn step_scroll_animation(&mut self, ctx: &egui::Context) {
        if !self.scroll_to_top_active {
            return;
        }
        // Exponential ease toward the origin, snapping the last step.
        let next = self.scroll_offset * 0.82 - 4.0;
        if next <= 0.5 {
            self.forced_scroll_offset = Some(0.0);
            self.scroll_to_top_active = false;
        } else {
            self.forced_scroll_offset = Some(next);
        }
        ctx.request_repaint();
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.form.tick(now);
        if let Some(deadline) = self.form.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }

        let compact = is_compact(ctx.screen_rect().width());
        let mut events = Vec::new();

        self.show_nav_bar(ctx, compact, &mut events);
        if compact && self.menu.is_open() {
            self.show_compact_menu(ctx, &mut events);
        }
        self.show_page(ctx, &mut events);
        self.show_back_to_top(ctx, &mut events);
        if self.privacy_open {
            self.show_privacy_dialog(ctx, &mut events);
        }

        for event in events {
            controller::apply_event(self, event);
        }
        self.step_scroll_animation(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSettings {
            text_scale: self.text_scale,
        };
        if let Ok(text) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, text);
        }
    }
}
