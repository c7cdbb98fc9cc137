// src/gui/components/filter_panel.rs
//
// Left panel: continent checkboxes, country query with suggestions, the two
// range sliders and the clear button. Every change re-filters right away.

use eframe::egui;

use crate::config::consts::labels;
use crate::filter::Dimension;
use crate::gui::app::App;

use super::range_slider;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let status = app.status_text();
    let App { filter, visible, country_text, suggestions, .. } = app;

    let Some(ctl) = filter.as_mut() else {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(status);
        });
        return;
    };

    egui::ScrollArea::vertical()
        .id_salt("filters_scroll")
        .show(ui, |ui| {
            ui.heading(labels::CONTINENT);
            let names = ctl.continents().to_vec();
            for name in &names {
                let mut on = ctl.is_continent_selected(name);
                if ui.checkbox(&mut on, name).changed() {
                    ctl.on_continent_toggle(name, visible);
                }
            }

            ui.separator();

            ui.heading(labels::COUNTRY);
            let edit = egui::TextEdit::singleline(country_text)
                .hint_text(labels::COUNTRY_PLACEHOLDER)
                .desired_width(f32::INFINITY);
            let edit_resp = ui.add(edit);
            if edit_resp.changed() {
                *suggestions = ctl.on_country_text_change(country_text, visible);
            }

            let mut picked = None;
            let list_rect = ui
                .vertical(|ui| {
                    for s in suggestions.iter() {
                        if ui.small_button(s).clicked() {
                            picked = Some(s.clone());
                        }
                    }
                })
                .response
                .rect;
            if let Some(pick) = picked {
                *country_text = ctl.on_suggestion_pick(&pick, visible);
                suggestions.clear();
            }

            let (escape, press) = ui.input(|i| {
                let press = i.pointer.any_pressed().then(|| i.pointer.interact_pos()).flatten();
                (i.key_pressed(egui::Key::Escape), press)
            });
            if suggestions_dismissed(escape, press, &[edit_resp.rect, list_rect]) {
                suggestions.clear();
            }

            ui.separator();
            range_slider::draw(ui, labels::DAYS, ctl, Dimension::Days, visible);
            ui.add_space(6.0);
            range_slider::draw(ui, labels::BUDGET, ctl, Dimension::Budget, visible);
            ui.separator();

            let filtered = !ctl.state().is_unfiltered();
            if ui.add_enabled(filtered, egui::Button::new(labels::CLEAR_FILTERS)).clicked() {
                ctl.reset_filters(visible);
                country_text.clear();
                suggestions.clear();
            }

            ui.add_space(8.0);
            ui.weak(status);
        });
}

/// The suggestion list closes on Escape or on a press outside the field
/// and the list itself.
pub fn suggestions_dismissed(escape: bool, press: Option<egui::Pos2>, keep: &[egui::Rect]) -> bool {
    escape || press.is_some_and(|p| !keep.iter().any(|r| r.contains(p)))
}
