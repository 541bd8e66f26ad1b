//! Dashboard: stats grid, action items, quick actions and recent
//! activities, all backed by static mock data.

use depot_business::{
    DASHBOARD_STATS, PENDING_TASKS, Page, QUICK_ACTIONS, RECENT_ACTIVITIES, RouteState, StatCard,
};
use egui::{Frame, Margin, RichText, ScrollArea, Ui};

use crate::state::State;
use crate::widgets::stats_card;

pub fn dashboard_page(state: &mut State, ui: &mut Ui) {
    let mut nav_target: Option<Page> = None;

    ui.heading("Dashboard");
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        for stat in DASHBOARD_STATS {
            stats_card(
                ui,
                &StatCard {
                    title: stat.title,
                    icon: stat.icon,
                    value: stat.value.to_owned(),
                    description: format!("{} {}", stat.trend, stat.period),
                },
            );
        }
    });
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        action_items(&mut columns[0], &mut nav_target);
        quick_actions(&mut columns[1], &mut nav_target);
    });
    ui.add_space(12.0);

    recent_activities(ui);

    if let Some(page) = nav_target {
        state.ctx.update::<RouteState>(|route| route.goto(page));
    }
}

fn action_items(ui: &mut Ui, nav_target: &mut Option<Page>) {
    Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.strong(format!("Action Items ({})", PENDING_TASKS.len()));
            ui.add_space(8.0);
            ScrollArea::vertical()
                .id_salt("action_items")
                .max_height(220.0)
                .show(ui, |ui| {
                    for task in PENDING_TASKS {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(task.title).strong().small());
                                ui.weak(RichText::new(task.description).small());
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button(task.action_label).clicked() {
                                        *nav_target = Some(task.target);
                                    }
                                },
                            );
                        });
                        ui.add_space(6.0);
                    }
                });
        });
}

fn quick_actions(ui: &mut Ui, nav_target: &mut Option<Page>) {
    Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.strong("Quick Actions");
            ui.add_space(8.0);
            for action in QUICK_ACTIONS {
                if ui
                    .button(format!("{}  {}", action.icon, action.label))
                    .clicked()
                {
                    *nav_target = Some(action.target);
                }
            }
        });
}

fn recent_activities(ui: &mut Ui) {
    Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.strong(format!(
                "Inventory Activities ({})",
                RECENT_ACTIVITIES.len()
            ));
            ui.add_space(8.0);
            ScrollArea::vertical()
                .id_salt("recent_activities")
                .max_height(180.0)
                .show(ui, |ui| {
                    for activity in RECENT_ACTIVITIES {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(activity.kind).strong().small());
                            ui.weak(RichText::new(format!(
                                "{} • {}",
                                activity.counterpart, activity.time_ago
                            ))
                            .small());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.weak(activity.amount);
                                },
                            );
                        });
                        ui.add_space(4.0);
                    }
                });
        });
}
