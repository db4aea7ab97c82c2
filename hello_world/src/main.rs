// main.rs - Number toy: pick a number, press the button, see its square and cube

use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hello_world::{cube, square, MAX_NUMBER, MIN_NUMBER};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hello, world!",
        options,
        Box::new(|_cc| Box::new(NumberApp::default())),
    )
}

#[derive(Default)]
struct NumberApp {
    number: u32,
    answered: Option<u32>,  // Number the button was last pressed for
}

impl eframe::App for NumberApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Hello, world!");
            ui.label("Testing some quick stuff");

            ui.separator();
            ui.heading("A simple box");

            ui.horizontal(|ui| {
                ui.label("Enter a number");
                let input = ui.add(egui::DragValue::new(&mut self.number).clamp_range(MIN_NUMBER..=MAX_NUMBER).speed(1));
                if input.changed() {
                    self.answered = None;  // Answers only show for the number they were asked about
                }
            });

            if ui.button("Click me").clicked() {
                info!(number = self.number, "button clicked");
                self.answered = Some(self.number);
            }

            if let Some(number) = self.answered {
                ui.label(format!("You've clicked the button! Square of the number you entered is: {}", square(number)));
                ui.label(format!("You've clicked the button! Cube of the number you entered is: {}", cube(number)));
            }
        });
    }
}
