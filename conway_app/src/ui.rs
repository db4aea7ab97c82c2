// ui.rs - egui host: draws the board and turns input into session commands

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use conway::{grid, patterns, Command, Session, GRID_SIZE};

use crate::config::AppConfig;

pub struct ConwayApp {
    session: Session,
    live_color: Color32,
    dead_color: Color32,
    cell_size: f32,
    selected_pattern: usize,
    seed: u64,
}

impl ConwayApp {
    pub fn new(cfg: &AppConfig) -> Self {
        let [lr, lg, lb] = cfg.live_color;
        let [dr, dg, db] = cfg.dead_color;
        let seed = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);

        Self {
            session: Session::new(cfg.interval(), cfg.evaluator),
            live_color: Color32::from_rgb(lr, lg, lb),
            dead_color: Color32::from_rgb(dr, dg, db),
            cell_size: cfg.cell_size,
            selected_pattern: 0,
            seed,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let running = self.session.is_running();

        ui.horizontal(|ui| {
            let (button_text, command) = if running { ("⏸ Pause", Command::Pause) } else { ("▶ Start", Command::Start) };
            if ui.button(button_text).clicked() {
                self.session.dispatch(command);
            }

            if ui.button("⏹ Reset").clicked() {
                self.session.dispatch(Command::Reset);
            }

            ui.separator();

            // Board edits only make sense while editing
            ui.add_enabled_ui(!running, |ui| {
                if ui.button("🎲 Random").clicked() {
                    self.seed = self.seed.wrapping_add(1);
                    self.session.dispatch(Command::Randomize(self.seed));
                }

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.session.dispatch(Command::LoadPattern(self.selected_pattern));
                }
            });

            ui.separator();

            ui.label(format!("Generation: {}", self.session.generation()));
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1000.0 / self.session.interval().as_millis().max(1) as f32;
            if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                let millis = (1000.0 / speed).round().max(1.0) as u64;
                self.session.dispatch(Command::SetInterval(Duration::from_millis(millis)));
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let spacing = 1.0;
        let total_size = Vec2::splat(self.cell_size * GRID_SIZE as f32);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let board = response.rect;

        painter.rect_filled(board, 0.0, Color32::BLACK);

        let cells = self.session.grid();
        for (row, cells_in_row) in cells.iter().enumerate() {
            for (col, &alive) in cells_in_row.iter().enumerate() {
                let min = board.min + Vec2::new(col as f32, row as f32) * self.cell_size;
                let rect = Rect::from_min_size(min, Vec2::splat(self.cell_size - spacing));

                let cell_color = if alive { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        // One click per frame, mapped to fractional board coordinates
        if response.clicked() && !self.session.is_running() {
            if let Some(pos) = response.interact_pointer_pos() {
                let x = (pos.x - board.min.x) / board.width();
                let y = (pos.y - board.min.y) / board.height();
                self.session.dispatch(Command::Click { x, y });
            }
        }
    }

    fn statistics(&self, ui: &mut egui::Ui) {
        let total = GRID_SIZE * GRID_SIZE;
        let live_cells = grid::live_cells(self.session.grid());

        ui.horizontal(|ui| {
            ui.label(format!("Live cells: {}", live_cells));
            ui.label(format!("Dead cells: {}", total - live_cells));
            ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            if self.session.cycle_detected() {
                ui.label("↻ Repeating pattern");
            }
        });
    }
}

impl eframe::App for ConwayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Timer check once per frame; the session decides whether a step is due
        self.session.dispatch(Command::Tick(Instant::now()));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            self.controls(ui);

            ui.separator();

            ui.label("Click cells to toggle them while paused. Use Start/Pause to run the simulation.");

            ui.separator();

            self.board(ui);

            ui.separator();

            self.statistics(ui);
        });

        // Keep frames coming so ticks keep firing while running
        if self.session.is_running() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
