//! Purchase confirmation dialog for the stock capacity variant.
//!
//! The status panel's buy buttons set [`PendingPurchase`] instead of firing
//! the purchase directly. This system renders the modal and, on
//! confirmation, fires a [`PurchaseEvent`] crediting one pack to the chosen
//! zone.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::capacity::PurchaseEvent;
use simulation::config::STOCK_PACK_SIZE;
use simulation::grid::Zone;

/// Zone awaiting purchase confirmation. Which zone is selected is UI state;
/// the core only ever sees the confirmed event.
#[derive(Resource, Default)]
pub struct PendingPurchase(pub Option<Zone>);

pub fn purchase_dialog_ui(
    mut contexts: EguiContexts,
    mut pending: ResMut<PendingPurchase>,
    mut purchases: EventWriter<PurchaseEvent>,
) {
    let Some(zone) = pending.0 else {
        return;
    };

    let ctx = contexts.ctx_mut();

    // Semi-transparent backdrop to block board interaction under the dialog.
    let screen_rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new("purchase_dialog_backdrop"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let painter = ui.painter();
            painter.rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(120),
            );
            ui.allocate_rect(screen_rect, egui::Sense::click());
        });

    let mut should_clear = false;

    egui::Window::new("Buy Blocks")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(280.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.spacing_mut().item_spacing.y = 8.0;
                ui.add_space(10.0);

                ui.heading("Buy Blocks");
                ui.add_space(4.0);
                ui.label(format!(
                    "Add {STOCK_PACK_SIZE} blocks to the {} zone?",
                    zone.label()
                ));
                ui.add_space(10.0);

                let button_size = egui::Vec2::new(110.0, 28.0);

                ui.horizontal(|ui| {
                    let total_width = button_size.x * 2.0 + 12.0;
                    let avail = ui.available_width();
                    if avail > total_width {
                        ui.add_space((avail - total_width) / 2.0);
                    }

                    if ui
                        .add_sized(button_size, egui::Button::new("Confirm"))
                        .clicked()
                    {
                        purchases.send(PurchaseEvent {
                            zone,
                            amount: STOCK_PACK_SIZE,
                        });
                        should_clear = true;
                    }

                    ui.add_space(12.0);

                    if ui
                        .add_sized(button_size, egui::Button::new("Cancel"))
                        .clicked()
                    {
                        should_clear = true;
                    }
                });

                ui.add_space(10.0);
            });
        });

    if should_clear {
        pending.0 = None;
    }
}
