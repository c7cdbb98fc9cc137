// src/gui/components/card_grid.rs
use eframe::egui;

use crate::config::consts::labels;
use crate::gui::app::App;

const CARD_W: f32 = 240.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(app.status_text());
        });
        return;
    }

    ui.label(format!("{}/{}", app.visible_count(), app.cards.len()));
    ui.separator();

    if app.visible_count() == 0 {
        ui.label(labels::NO_TRIPS);
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("cards_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for card in &app.cards {
                    if !app.visible.get(card.index).copied().unwrap_or(false) {
                        continue;
                    }
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(CARD_W);
                        ui.vertical(|ui| {
                            match &card.url {
                                Some(url) => { ui.hyperlink_to(egui::RichText::new(&card.title).strong(), url); }
                                None => { ui.strong(&card.title); }
                            }
                            ui.label(&card.meta);
                            if !card.countries.is_empty() {
                                ui.label(&card.countries);
                            }
                            if !card.tags.is_empty() {
                                ui.weak(&card.tags);
                            }
                        });
                    });
                }
            });
        });
}
