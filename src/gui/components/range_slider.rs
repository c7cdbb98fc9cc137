// src/gui/components/range_slider.rs
//
// Dual-handle slider over a `RangeSelector`. Pointer input goes through the
// controller so every committed move re-filters the cards.

use eframe::egui::{self, Color32, CornerRadius, Sense, Stroke};

use crate::config::consts::{ACTIVE_RGB, INACTIVE_RGB};
use crate::filter::{CardSurface, Dimension, FilterController, Handle, RangeSelector};

const TRACK_H: f32 = 4.0;
const KNOB_R: f32 = 7.0;
const HEIGHT: f32 = 22.0;

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

pub fn draw(
    ui: &mut egui::Ui,
    heading: &str,
    ctl: &mut FilterController,
    dim: Dimension,
    surface: &mut dyn CardSurface,
) {
    ui.label(egui::RichText::new(heading).strong());

    let width = ui.available_width().max(4.0 * KNOB_R);
    let (rect, resp) = ui.allocate_exact_size(egui::vec2(width, HEIGHT), Sense::click_and_drag());

    // usable span keeps the knobs inside the rect
    let x0 = rect.left() + KNOB_R;
    let x1 = rect.right() - KNOB_R;

    if let Some(pos) = resp.interact_pointer_pos() {
        let v = value_at_x(ctl.selector(dim), pos.x, x0, x1);
        if resp.drag_started() {
            // the pointer is already past the drag threshold; grab by where it went down
            let origin = ui.input(|i| i.pointer.press_origin()).map_or(pos.x, |p| p.x);
            let handle = grab_handle(ctl.selector(dim), origin, x0, x1);
            ctl.on_drag_start(dim, handle);
            ctl.on_drag(dim, v, surface);
        } else if resp.dragged() && ctl.selector(dim).dragging().is_some() {
            ctl.on_drag(dim, v, surface);
        } else if resp.clicked() {
            let handle = grab_handle(ctl.selector(dim), pos.x, x0, x1);
            ctl.on_handle_move(dim, handle, v, surface);
        }
    }
    if resp.drag_stopped() {
        ctl.on_drag_end(dim);
    }

    if ui.is_rect_visible(rect) {
        let sel = ctl.selector(dim);
        let painter = ui.painter();
        let cy = rect.center().y;
        let active = rgb(ACTIVE_RGB);
        let track = egui::Rect::from_min_max(
            egui::pos2(x0, cy - TRACK_H / 2.0),
            egui::pos2(x1, cy + TRACK_H / 2.0),
        );
        painter.rect_filled(track, CornerRadius::same(2), rgb(INACTIVE_RGB));

        let (a, b) = sel.fill();
        let xa = egui::lerp(x0..=x1, a);
        let xb = egui::lerp(x0..=x1, b);
        let fill = egui::Rect::from_min_max(
            egui::pos2(xa, track.top()),
            egui::pos2(xb, track.bottom()),
        );
        painter.rect_filled(fill, CornerRadius::same(2), active);

        let knob_fill = ui.visuals().panel_fill;
        for x in [xa, xb] {
            painter.circle(egui::pos2(x, cy), KNOB_R, knob_fill, Stroke::new(2.0, active));
        }
    }

    let (lo, hi) = ctl.labels(dim);
    ui.horizontal(|ui| {
        ui.label(lo);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(hi);
        });
    });
}

/// Selector value under track position `x`, with the track spanning `x0..=x1`.
pub fn value_at_x(sel: &RangeSelector, x: f32, x0: f32, x1: f32) -> u64 {
    sel.value_at(((x - x0) / (x1 - x0).max(1.0)).clamp(0.0, 1.0))
}

/// Handle a press at track position `x` takes hold of.
pub fn grab_handle(sel: &RangeSelector, x: f32, x0: f32, x1: f32) -> Handle {
    sel.nearest_handle(value_at_x(sel, x, x0, x1))
}
