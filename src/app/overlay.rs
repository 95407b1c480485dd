//! Overlay rendering for `ReaderApp`.
//!
//! Both overlays sit above the page on a dimmed backdrop. Clicking the
//! backdrop, pressing the close control, or navigating all close them the
//! same way.

use eframe::egui;
use saju_book::nav::{CloseTrigger, Overlay};
use saju_book::search::{ChapterSearch, SearchOutcome};

use super::content::toc_entry;
use super::ReaderApp;
use crate::ui::{ACCENT, MUTED, SUB_ACCENT};

const SEARCH_PLACEHOLDER: &str = "검색어를 입력하세요 (예: 도화살, 오행, 만세력...)";
const SEARCH_HINT: &str = "궁금한 키워드를 입력해보세요.";
const SEARCH_EMPTY: &str = "검색 결과가 없습니다.";

/// Paint a dimming layer over the whole screen. Returns `true` if it was
/// clicked.
fn backdrop(ctx: &egui::Context, id: &str, alpha: u8) -> bool {
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(alpha));
            response.clicked()
        })
        .inner
}

impl ReaderApp {
    /// Escape closes whatever is open, search first.
    pub fn handle_overlay_keys(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            return;
        }
        if self.state.search_open {
            self.state.close(Overlay::Search, CloseTrigger::CloseButton);
        } else if self.state.menu_open {
            self.state.close(Overlay::Menu, CloseTrigger::CloseButton);
        }
    }

    /// The floating menu button belongs to narrow windows and hides while
    /// the search dialog covers the page.
    pub fn menu_fab_visible(&self, wide: bool) -> bool {
        !wide && !self.state.search_open
    }

    /// Round button in the bottom-right corner that opens the menu drawer.
    pub fn draw_menu_fab(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("menu_fab"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let button = egui::Button::new(
                    egui::RichText::new("☰").size(22.0).color(egui::Color32::WHITE),
                )
                .min_size(egui::vec2(56.0, 56.0))
                .rounding(28.0)
                .fill(SUB_ACCENT);
                if ui.add(button).on_hover_text("목차 열기").clicked() {
                    self.state.open(Overlay::Menu);
                }
            });
    }

    /// Slide-in table of contents for narrow windows.
    pub fn draw_menu_overlay(&mut self, ctx: &egui::Context) {
        if !self.state.menu_open {
            return;
        }
        if backdrop(ctx, "menu_backdrop", 128) {
            self.state.close(Overlay::Menu, CloseTrigger::Backdrop);
            return;
        }

        let screen = ctx.screen_rect();
        let width = self.config.sidebar_width.min(screen.width());
        let mut clicked: Option<String> = None;

        egui::Area::new(egui::Id::new("menu_drawer"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(screen.right() - width, screen.top()))
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(egui::Color32::WHITE)
                    .shadow(egui::epaint::Shadow {
                        offset: egui::vec2(-4.0, 0.0),
                        blur: 16.0,
                        spread: 0.0,
                        color: egui::Color32::from_black_alpha(60),
                    })
                    .inner_margin(egui::Margin::same(24.0))
                    .show(ui, |ui| {
                        ui.set_width(width - 48.0);
                        ui.set_min_height(screen.height() - 48.0);
                        ui.label(
                            egui::RichText::new("목차")
                                .size(22.0)
                                .strong()
                                .color(SUB_ACCENT),
                        );
                        ui.add_space(20.0);
                        egui::ScrollArea::vertical()
                            .id_salt("menu_toc")
                            .show(ui, |ui| {
                                for chapter in self.registry.iter() {
                                    let active = self.state.active_chapter_id.as_deref()
                                        == Some(chapter.id.as_str());
                                    if toc_entry(ui, &chapter.title, active, 16.0).clicked() {
                                        clicked = Some(chapter.id.clone());
                                    }
                                    ui.add_space(6.0);
                                }
                            });
                    });
            });

        if let Some(id) = clicked {
            self.go_to_chapter(&id);
        }
    }

    /// Search dialog with live results.
    pub fn draw_search_overlay(&mut self, ctx: &egui::Context) {
        if !self.state.search_open {
            return;
        }
        if backdrop(ctx, "search_backdrop", 153) {
            self.state.close(Overlay::Search, CloseTrigger::Backdrop);
            return;
        }

        let screen = ctx.screen_rect();
        let width = (screen.width() - 32.0).min(672.0);
        let mut clicked: Option<String> = None;
        let mut close = false;

        egui::Area::new(egui::Id::new("search_dialog"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(screen.center().x - width / 2.0, screen.top() + 80.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(egui::Color32::WHITE)
                    .rounding(12.0)
                    .inner_margin(egui::Margin::same(16.0))
                    .show(ui, |ui| {
                        ui.set_width(width - 32.0);

                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("🔍").size(18.0).color(MUTED));
                            let input = ui.add(
                                egui::TextEdit::singleline(&mut self.state.search_query)
                                    .hint_text(SEARCH_PLACEHOLDER)
                                    .font(egui::FontId::proportional(18.0))
                                    .frame(false)
                                    .desired_width(ui.available_width() - 32.0),
                            );
                            if self.focus_search {
                                input.request_focus();
                                self.focus_search = false;
                            }
                            if ui
                                .add(egui::Button::new(egui::RichText::new("✕").size(16.0)).frame(false))
                                .clicked()
                            {
                                close = true;
                            }
                        });
                        ui.separator();

                        let max_height = screen.height() * 0.6;
                        egui::ScrollArea::vertical()
                            .id_salt("search_results")
                            .max_height(max_height)
                            .show(ui, |ui| {
                                let search = ChapterSearch::new(&self.registry);
                                match search.outcome(&self.state.search_query) {
                                    SearchOutcome::Hint => empty_state(ui, SEARCH_HINT),
                                    SearchOutcome::NoResults => empty_state(ui, SEARCH_EMPTY),
                                    SearchOutcome::Results(found) => {
                                        for chapter in found {
                                            if result_row(ui, &chapter.title, chapter.subtitle.as_deref())
                                                .clicked()
                                            {
                                                clicked = Some(chapter.id.clone());
                                            }
                                        }
                                    }
                                }
                            });
                    });
            });

        if close {
            self.state.close(Overlay::Search, CloseTrigger::CloseButton);
        }
        if let Some(id) = clicked {
            self.go_to_chapter(&id);
        }
    }
}

fn empty_state(ui: &mut egui::Ui, text: &str) {
    ui.add_space(32.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(text).size(14.0).color(MUTED));
    });
    ui.add_space(32.0);
}

fn result_row(ui: &mut egui::Ui, title: &str, subtitle: Option<&str>) -> egui::Response {
    let response = egui::Frame::none()
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(title).size(16.0).strong().color(SUB_ACCENT));
                    if let Some(sub) = subtitle {
                        ui.label(egui::RichText::new(sub).size(13.0).color(MUTED));
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new("›").size(18.0).color(MUTED));
                });
            });
        })
        .response
        .interact(egui::Sense::click());
    if response.hovered() {
        ui.painter().rect_stroke(
            response.rect,
            8.0,
            egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.3)),
        );
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}
