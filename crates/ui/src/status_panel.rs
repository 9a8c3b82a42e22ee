//! Top status panel: per-zone counters, buy buttons (stock variant), the
//! reset control, and a hovered-cell readout. Display only — every mutation
//! goes through an event.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::input::CursorGridPos;
use simulation::capacity::CapacityPolicy;
use simulation::grid::{PaintGrid, Zone};
use simulation::reset::ClearBoardEvent;

use crate::purchase_dialog::PendingPurchase;

pub fn status_panel_ui(
    mut contexts: EguiContexts,
    grid: Res<PaintGrid>,
    policy: Res<CapacityPolicy>,
    cursor: Res<CursorGridPos>,
    mut pending: ResMut<PendingPurchase>,
    mut clear_events: EventWriter<ClearBoardEvent>,
) {
    let ctx = contexts.ctx_mut();

    egui::TopBottomPanel::top("status_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for zone in [Zone::Side, Zone::Middle] {
                let placed = grid.count_in_zone(zone);
                let remaining = policy.remaining(&grid, zone);
                match policy.limit(zone) {
                    Some(limit) => {
                        ui.label(format!(
                            "{}: {placed}/{limit} blocks ({remaining} remaining)",
                            zone.label()
                        ));
                    }
                    None => {
                        ui.label(format!(
                            "{}: {placed} placed, {remaining} in stock",
                            zone.label()
                        ));
                        if ui.button(format!("Buy {}", zone.label())).clicked() {
                            pending.0 = Some(zone);
                        }
                    }
                }
                ui.separator();
            }

            if ui.button("Reset Board").clicked() {
                clear_events.send(ClearBoardEvent);
            }

            if cursor.valid {
                ui.separator();
                ui.label(format!(
                    "({}, {}) — {} zone",
                    cursor.grid_x,
                    cursor.grid_y,
                    Zone::of_column(cursor.grid_x as usize).label()
                ));
            }
        });
    });
}
