mod app;
mod ui;

use eframe::egui;

use app::header::HEADER_HEIGHT;
use app::ReaderApp;
use saju_book::ReaderConfig;

/// Korean-capable system fonts, tried in order.
const KOREAN_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/System/Library/Fonts/Supplemental/AppleGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ReaderConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title("가장 쉬운 사주명리학 입문"),
        ..Default::default()
    };

    eframe::run_native(
        "saju-book",
        options,
        Box::new(move |cc| {
            install_korean_font(&cc.egui_ctx);
            ui::apply_theme(&cc.egui_ctx);
            Ok(Box::new(ReaderApp::new(config)?))
        }),
    )
}

fn install_korean_font(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    for path in KOREAN_FONT_PATHS {
        let Ok(data) = std::fs::read(path) else {
            continue;
        };
        log::info!("using font {}", path);
        fonts
            .font_data
            .insert("korean".to_owned(), egui::FontData::from_owned(data));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            if let Some(list) = fonts.families.get_mut(&family) {
                list.push("korean".to_owned());
            }
        }
        ctx.set_fonts(fonts);
        return;
    }
    log::warn!("no Korean font found; Hangul will render as boxes");
}

impl eframe::App for ReaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_overlay_keys(ctx);
        self.step_animation(ctx);

        let wide = self.wide_layout(ctx);

        egui::TopBottomPanel::top("header")
            .exact_height(HEADER_HEIGHT)
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                self.draw_header(ui, ctx);
            });

        if wide {
            egui::SidePanel::left("toc")
                .exact_width(self.config.sidebar_width)
                .resizable(false)
                .frame(
                    egui::Frame::none()
                        .fill(ui::PAPER)
                        .inner_margin(egui::Margin::symmetric(16.0, 0.0)),
                )
                .show(ctx, |ui| {
                    self.draw_sidebar(ui);
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ui::PAPER))
            .show(ctx, |ui| {
                self.draw_content(ui, ctx);
            });

        if self.menu_fab_visible(wide) {
            self.draw_menu_fab(ctx);
        }
        if !wide {
            self.draw_menu_overlay(ctx);
        }
        self.draw_search_overlay(ctx);

        // Layout for this frame is known now; resolve clicks against it.
        let now = ctx.input(|i| i.time);
        self.drain_host_events();
        self.apply_pending_nav(now);
        if self.animator.is_running() || self.pending_scroll.is_some() {
            ctx.request_repaint();
        }
    }
}
