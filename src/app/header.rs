//! Header rendering for `ReaderApp`.
//!
//! Draws the brand (click scrolls back to the cover), the search button,
//! and on narrow windows the menu toggle.

use eframe::egui;
use saju_book::nav::Overlay;

use super::ReaderApp;
use crate::ui::{ACCENT, MUTED, SUB_ACCENT};

pub const HEADER_HEIGHT: f32 = 64.0;

/// Below this window width the brand uses its short form.
const FULL_BRAND_MIN_WIDTH: f32 = 640.0;

fn brand_label(window_width: f32) -> &'static str {
    if window_width >= FULL_BRAND_MIN_WIDTH {
        "📖 사주명리학 입문"
    } else {
        "📖 사주 입문"
    }
}

impl ReaderApp {
    /// Render the fixed header strip.
    pub fn draw_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let wide = self.wide_layout(ctx);

        ui.horizontal_centered(|ui| {
            ui.add_space(16.0);

            // Brand
            let brand = ui
                .add(
                    egui::Label::new(
                        egui::RichText::new(brand_label(ctx.screen_rect().width()))
                            .size(20.0)
                            .strong()
                            .color(SUB_ACCENT),
                    )
                    .sense(egui::Sense::click()),
                )
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if brand.clicked() {
                self.go_to_top();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(16.0);

                if !wide {
                    let icon = if self.state.menu_open { "✕" } else { "☰" };
                    if ui
                        .add(
                            egui::Button::new(egui::RichText::new(icon).size(20.0))
                                .frame(false),
                        )
                        .clicked()
                    {
                        self.state.toggle(Overlay::Menu);
                    }
                }

                let search_width = if wide { 256.0 } else { 128.0 };
                let search = ui.add(
                    egui::Button::new(
                        egui::RichText::new("🔍 검색하기...").color(MUTED),
                    )
                    .min_size(egui::vec2(search_width, 36.0))
                    .rounding(18.0)
                    .fill(egui::Color32::from_rgb(245, 245, 244)),
                );
                if search.clicked() {
                    self.state.open(Overlay::Search);
                    self.focus_search = true;
                }
            });
        });

        // Accent underline
        let rect = ui.max_rect();
        ui.painter().hline(
            rect.x_range(),
            rect.bottom(),
            egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.15)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_shortens_only_on_small_windows() {
        assert_eq!(brand_label(1280.0), "📖 사주명리학 입문");
        // between the brand and sidebar breakpoints
        assert_eq!(brand_label(800.0), "📖 사주명리학 입문");
        assert_eq!(brand_label(640.0), "📖 사주명리학 입문");
        assert_eq!(brand_label(639.0), "📖 사주 입문");
        assert_eq!(brand_label(360.0), "📖 사주 입문");
    }
}
