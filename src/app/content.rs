//! Content-area rendering for `ReaderApp`.
//!
//! Contains two methods and one shared widget:
//!
//! - `draw_sidebar`: sticky table of contents for wide windows
//! - `draw_content`: the scrollable book; measures section offsets
//! - `toc_entry`: one table-of-contents row, also used by the menu drawer

use eframe::egui;
use saju_book::scroll::SectionLayout;

use super::ReaderApp;
use crate::ui::{
    render_block, render_cover, render_epilogue, render_section_title, ACCENT, MUTED,
};

/// Reading column width.
const MAX_CONTENT_WIDTH: f32 = 768.0;

/// Label for a table-of-contents row. Titles are shown whole.
fn toc_text(title: &str, active: bool, size: f32) -> egui::RichText {
    let text = egui::RichText::new(title).size(size);
    if active {
        text.strong().color(ACCENT)
    } else {
        text.color(MUTED)
    }
}

/// A table-of-contents row. Exactly one row per list is drawn `active`.
/// Long titles wrap onto further lines.
pub fn toc_entry(ui: &mut egui::Ui, title: &str, active: bool, size: f32) -> egui::Response {
    let response = ui.add(
        egui::Button::new(toc_text(title, active, size))
            .wrap()
            .frame(active)
            .fill(ACCENT.gamma_multiply(0.08))
            .stroke(egui::Stroke::NONE)
            .min_size(egui::vec2(ui.available_width(), 32.0)),
    );
    if active {
        let rect = response.rect;
        ui.painter()
            .vline(rect.left(), rect.y_range(), egui::Stroke::new(2.0, ACCENT));
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

impl ReaderApp {
    pub fn draw_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(32.0);
        ui.label(
            egui::RichText::new("목차 (Contents)")
                .size(13.0)
                .strong()
                .color(MUTED),
        );
        ui.add_space(12.0);

        let mut clicked: Option<String> = None;
        egui::ScrollArea::vertical()
            .id_salt("toc")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for chapter in self.registry.iter() {
                    let active = self.state.active_chapter_id.as_deref() == Some(chapter.id.as_str());
                    if toc_entry(ui, &chapter.title, active, 14.0).clicked() {
                        clicked = Some(chapter.id.clone());
                    }
                }
            });
        if let Some(id) = clicked {
            self.go_to_chapter(&id);
        }
    }

    /// Draw the book and rebuild `self.layout` from what was drawn.
    pub fn draw_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut area = egui::ScrollArea::vertical()
            .id_salt("book")
            .auto_shrink([false, false]);
        if let Some(offset) = self.pending_scroll.take() {
            area = area.vertical_scroll_offset(offset);
        }

        let book = &self.book;
        let mut layout = SectionLayout::new();

        let output = area.show_viewport(ui, |ui, _viewport| {
            // document coordinates are relative to the top of the content
            let origin = ui.min_rect().top();
            let width = ui.available_width();
            let side = ((width - MAX_CONTENT_WIDTH) / 2.0).max(0.0) + 24.0;

            egui::Frame::none()
                .inner_margin(egui::Margin {
                    left: side,
                    right: side,
                    top: 32.0,
                    bottom: 0.0,
                })
                .show(ui, |ui| {
                    render_cover(ui, &book.cover);
                    for section in &book.sections {
                        ui.add_space(40.0);
                        layout.record(&section.id, ui.cursor().top() - origin);
                        render_section_title(ui, &section.title);
                        for block in &section.blocks {
                            render_block(ui, block);
                        }
                    }
                    render_epilogue(ui, &book.epilogue);
                });
        });

        self.layout = layout;
        let screen = ctx.screen_rect();
        self.observe_viewport(output.state.offset.y, screen.width(), screen.height());
    }
}
