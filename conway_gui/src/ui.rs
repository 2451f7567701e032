// ui.rs - Drawing and input for the Game of Life window
// Every click is forwarded as a named action; the controller decides whether it counts

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use conway::{Grid, GRID_HEIGHT, GRID_WIDTH, PATTERNS};
use crate::GameOfLife;

const BOX_SIZE: f32 = 18.0;
const SPACING: f32 = 1.0;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                if snapshot.is_playing() {
                    if ui.button("⏹ Stop").clicked() {
                        self.controller.stop_requested();
                    }
                } else {
                    if ui.button("▶ Start").clicked() {
                        self.controller.start_requested();
                    }
                    if ui.button("🎲 Random").clicked() {
                        self.controller.randomize_requested();
                    }
                    if ui.button("Clear").clicked() {
                        self.controller.clear_requested();
                    }
                }

                ui.separator();

                if ui.button("💾 Save").clicked() {
                    self.save();
                }
                if ui.button("📂 Load").clicked() {
                    self.load();
                }

                ui.separator();

                ui.label(format!("Generation: {}", snapshot.generation));
            });

            // Pattern dropdown, only useful while editing
            ui.add_enabled_ui(!snapshot.is_playing(), |ui| {
                ui.horizontal(|ui| {
                    ui.label("Pattern:");
                    egui::ComboBox::from_id_source("pattern_selector")
                        .selected_text(PATTERNS[self.selected_pattern].name)
                        .show_ui(ui, |ui| {
                            for (i, pattern) in PATTERNS.iter().enumerate() {
                                ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                            }
                        });

                    if ui.button("Apply Pattern").clicked() {
                        self.controller.pattern_requested(self.selected_pattern);
                    }

                    ui.separator();

                    ui.label("Live:");
                    ui.color_edit_button_srgba(&mut self.live_color);
                    ui.label("Dead:");
                    ui.color_edit_button_srgba(&mut self.dead_color);
                });
            });

            if let Some(status) = &self.status {
                ui.label(status.as_str());
            }

            ui.separator();

            let start_pos = ui.cursor().min;
            let pitch = BOX_SIZE + SPACING;
            let total_size = Vec2::new(
                pitch * GRID_WIDTH as f32 - SPACING,
                pitch * GRID_HEIGHT as f32 - SPACING,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            for y in 0..GRID_HEIGHT {
                for x in 0..GRID_WIDTH {
                    let rect = Rect::from_min_size(
                        egui::pos2(start_pos.x + x as f32 * pitch, start_pos.y + y as f32 * pitch),
                        Vec2::splat(BOX_SIZE),
                    );
                    let cell_color = if snapshot.grid.get(x, y) {
                        self.live_color
                    } else {
                        self.dead_color
                    };
                    painter.rect_filled(rect, 1.0, cell_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - start_pos;
                    let (x, y) = ((offset.x / pitch).floor(), (offset.y / pitch).floor());
                    if x >= 0.0 && y >= 0.0 && Grid::contains(x as usize, y as usize) {
                        self.controller.cell_clicked(x as usize, y as usize);
                    }
                }
            }

            ui.separator();

            let live_cells = snapshot.live_cells();
            let total = GRID_WIDTH * GRID_HEIGHT;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });
    }
}
