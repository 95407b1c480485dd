//! Generic egui UI helpers for the book.
//!
//! Stateless functions that translate parsed content blocks into egui
//! widgets, plus the paper-and-ink palette shared by every panel.

use saju_book::book::content::{Block, Card, Cover, Epilogue, Inline, Tone};

// ─── Palette ──────────────────────────────────────────────────────────────────

pub const PAPER: egui::Color32 = egui::Color32::from_rgb(253, 251, 247);
pub const INK: egui::Color32 = egui::Color32::from_rgb(41, 37, 36);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(166, 77, 50);
pub const SUB_ACCENT: egui::Color32 = egui::Color32::from_rgb(74, 55, 40);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(120, 113, 108);
pub const RULE: egui::Color32 = egui::Color32::from_rgb(231, 229, 228);
pub const HIGHLIGHT_BG: egui::Color32 = egui::Color32::from_rgb(243, 236, 231);
pub const TIP_BG: egui::Color32 = egui::Color32::from_rgb(240, 253, 244);
pub const TIP_BORDER: egui::Color32 = egui::Color32::from_rgb(187, 247, 208);
pub const TIP_TITLE: egui::Color32 = egui::Color32::from_rgb(21, 128, 61);

/// Fill colour for a toned card, with white text on top.
pub fn tone_fill(tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Wood => egui::Color32::from_rgb(74, 124, 89),
        Tone::Fire => egui::Color32::from_rgb(192, 57, 43),
        Tone::Earth => egui::Color32::from_rgb(196, 154, 60),
        Tone::Metal => egui::Color32::from_rgb(140, 140, 140),
        Tone::Water => egui::Color32::from_rgb(44, 62, 80),
        Tone::Calm => egui::Color32::from_rgb(239, 246, 255),
        Tone::Clash => egui::Color32::from_rgb(254, 242, 242),
    }
}

fn tone_text(tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Calm => egui::Color32::from_rgb(30, 64, 175),
        Tone::Clash => egui::Color32::from_rgb(153, 27, 27),
        _ => egui::Color32::WHITE,
    }
}

/// Apply the light paper theme.
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = PAPER;
    visuals.window_fill = egui::Color32::WHITE;
    visuals.override_text_color = Some(INK);
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.2);
    ctx.set_visuals(visuals);
}

// ─── Layout math ──────────────────────────────────────────────────────────────

/// How many card columns fit into `available` width.
pub fn card_columns(available: f32, min_card_width: f32, max_columns: usize) -> usize {
    if min_card_width <= 0.0 {
        return max_columns.max(1);
    }
    ((available / min_card_width).floor() as usize).clamp(1, max_columns.max(1))
}


// ─── Block rendering ──────────────────────────────────────────────────────────

pub fn render_cover(ui: &mut egui::Ui, cover: &Cover) {
    egui::Frame::none()
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(6.0, ACCENT))
        .inner_margin(egui::Margin::symmetric(16.0, 72.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(&cover.kicker).size(14.0).color(MUTED));
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new(&cover.title)
                        .size(44.0)
                        .strong()
                        .color(SUB_ACCENT),
                );
                ui.add_space(20.0);
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(96.0, 4.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 0.0, ACCENT);
                ui.add_space(20.0);
                ui.label(
                    egui::RichText::new(&cover.tagline)
                        .size(20.0)
                        .italics()
                        .color(MUTED),
                );
            });
        });
    ui.add_space(64.0);
}

/// Section heading with its top rule.
pub fn render_section_title(ui: &mut egui::Ui, title: &str) {
    ui.add(egui::Separator::default().spacing(24.0));
    ui.label(egui::RichText::new(title).size(28.0).strong().color(SUB_ACCENT));
    ui.add_space(20.0);
}

pub fn render_block(ui: &mut egui::Ui, block: &Block) {
    match block {
        Block::SubTitle(text) => {
            ui.add_space(28.0);
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(6.0, 22.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 3.0, ACCENT);
                ui.label(egui::RichText::new(text).size(20.0).strong().color(ACCENT));
            });
            ui.add_space(12.0);
        }
        Block::Paragraph(runs) => {
            render_paragraph(ui, runs);
            ui.add_space(16.0);
        }
        Block::Highlight(text) => {
            egui::Frame::none()
                .fill(HIGHLIGHT_BG)
                .inner_margin(egui::Margin::same(24.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(text).size(18.0).italics());
                });
            ui.add_space(28.0);
        }
        Block::Tip { title, body } => {
            egui::Frame::none()
                .fill(TIP_BG)
                .stroke(egui::Stroke::new(1.0, TIP_BORDER))
                .rounding(8.0)
                .inner_margin(egui::Margin::same(24.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(format!("✦ {}", title)).strong().color(TIP_TITLE));
                    ui.add_space(6.0);
                    ui.label(body);
                });
            ui.add_space(28.0);
        }
        Block::Cards(cards) => {
            render_cards(ui, cards);
            ui.add_space(24.0);
        }
        Block::Steps { title, items } => {
            render_steps(ui, title, items);
            ui.add_space(28.0);
        }
        Block::Chips(items) => {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
                for item in items {
                    egui::Frame::none()
                        .fill(egui::Color32::WHITE)
                        .stroke(egui::Stroke::new(1.0, RULE))
                        .rounding(4.0)
                        .inner_margin(egui::Margin::symmetric(14.0, 8.0))
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(item).color(MUTED));
                        });
                }
            });
            ui.add_space(24.0);
        }
        Block::Bullets(items) => {
            for item in items {
                ui.horizontal_wrapped(|ui| {
                    ui.label("  \u{2022}");
                    ui.label(item);
                });
            }
            ui.add_space(16.0);
        }
    }
}

fn render_paragraph(ui: &mut egui::Ui, runs: &[Inline]) {
    let style = ui.style().clone();
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = ui.available_width();
    for run in runs {
        let rt = egui::RichText::new(&run.text).size(17.0);
        let rt = if run.strong {
            rt.strong().color(SUB_ACCENT)
        } else {
            rt.color(INK)
        };
        rt.append_to(
            &mut job,
            &style,
            egui::FontSelection::Default,
            egui::Align::Center,
        );
    }
    ui.label(job);
}

fn render_card(ui: &mut egui::Ui, card: &Card) {
    let (fill, text, stroke) = match card.tone {
        Some(tone) => (tone_fill(tone), tone_text(tone), egui::Stroke::NONE),
        None => (egui::Color32::WHITE, INK, egui::Stroke::new(1.0, RULE)),
    };
    egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(8.0)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&card.title).size(17.0).strong().color(
                if card.tone.is_some() { text } else { SUB_ACCENT },
            ));
            if !card.lines.is_empty() {
                ui.add_space(6.0);
            }
            for line in &card.lines {
                ui.label(egui::RichText::new(line).size(14.0).color(text));
            }
        });
}

fn render_cards(ui: &mut egui::Ui, cards: &[Card]) {
    let cols = card_columns(ui.available_width(), 200.0, 4);
    for row in cards.chunks(cols) {
        ui.columns(cols, |columns| {
            for (col, card) in columns.iter_mut().zip(row) {
                render_card(col, card);
            }
        });
        ui.add_space(8.0);
    }
}

fn render_steps(ui: &mut egui::Ui, title: &str, items: &[Card]) {
    egui::Frame::none()
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(2.0, ACCENT.gamma_multiply(0.25)))
        .rounding(12.0)
        .inner_margin(egui::Margin::same(24.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(title).size(20.0).strong().color(ACCENT));
            });
            ui.add_space(16.0);
            for (idx, item) in items.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 20.0, ACCENT);
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        format!("{}", idx + 1),
                        egui::FontId::proportional(15.0),
                        egui::Color32::WHITE,
                    );
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(format!("STEP {}", idx + 1))
                                .size(12.0)
                                .strong()
                                .color(ACCENT),
                        );
                        ui.label(egui::RichText::new(&item.title).size(18.0).strong());
                        for line in &item.lines {
                            ui.label(egui::RichText::new(line).size(14.0).color(MUTED));
                        }
                    });
                });
                ui.add_space(14.0);
            }
        });
}

pub fn render_epilogue(ui: &mut egui::Ui, epilogue: &Epilogue) {
    ui.add_space(80.0);
    ui.vertical_centered(|ui| {
        for line in &epilogue.lines {
            ui.label(egui::RichText::new(line).italics().color(MUTED));
        }
        ui.add_space(24.0);
        ui.label(egui::RichText::new(&epilogue.copyright).size(12.0).color(MUTED));
    });
    ui.add_space(80.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_columns_fit_width() {
        assert_eq!(card_columns(900.0, 200.0, 4), 4);
        assert_eq!(card_columns(450.0, 200.0, 4), 2);
        assert_eq!(card_columns(120.0, 200.0, 4), 1);
        assert_eq!(card_columns(5000.0, 200.0, 5), 5);
        assert_eq!(card_columns(100.0, 0.0, 3), 3);
    }
}
