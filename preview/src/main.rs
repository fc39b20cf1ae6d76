//! Desktop preview for the serpentine show engine
//!
//! Plays the part of the LED strip and the serial line: frames are drawn as
//! a matrix in a window and the buttons push command bytes into the queue.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serpentine_show::{
    CommandQueue, CommandReader, ConfigError, EngineConfig, FrameScheduler, Instant, OutputDriver,
    PatternId, PixelGrid, Renderer, Rgb,
};

/// Matrix the engine was built for
const WIDTH: usize = 30;
const HEIGHT: usize = 37;
const LED_COUNT: usize = WIDTH * HEIGHT;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

const COMMAND_QUEUE_SIZE: usize = 16;

/// Stands in for the UART between the trigger and the controller
static COMMANDS: CommandQueue<COMMAND_QUEUE_SIZE> = CommandQueue::new();

type Scheduler = FrameScheduler<
    WindowSink,
    CommandReader<'static, COMMAND_QUEUE_SIZE>,
    SmallRng,
    LED_COUNT,
    WIDTH,
    HEIGHT,
>;

/// Keeps the last frame for the painter
struct WindowSink {
    frame: Vec<Rgb>,
}

impl OutputDriver for WindowSink {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_title("Serpentine Show Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "serpentine-show-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()?))),
    )
}

struct PreviewApp {
    scheduler: Scheduler,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// LED pixel size for display
    led_size: f32,
    /// Raw byte for the "send" button
    raw_command: u8,
    /// Last rejected command byte
    dropped: Option<u8>,
}

impl PreviewApp {
    fn new() -> Result<Self, ConfigError> {
        let renderer = Renderer::new(
            &EngineConfig::default(),
            SmallRng::from_entropy(),
            Instant::from_millis(0),
        )?;
        let sink = WindowSink {
            frame: Vec::with_capacity(LED_COUNT),
        };

        Ok(Self {
            scheduler: FrameScheduler::new(renderer, COMMANDS.reader(), sink),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            led_size: LED_SIZE,
            raw_command: 2,
            dropped: None,
        })
    }

    fn send(&mut self, byte: u8) {
        if let Err(full) = COMMANDS.writer().push(byte) {
            self.dropped = Some(full.0);
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        let now = Instant::from_millis(self.t_ms);
        if self.playing {
            self.scheduler.tick(now);
        }

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }
                let secs = self.t_ms / 1000;
                let ms = self.t_ms % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.button("Show (1)").clicked() {
                    self.send(1);
                }
                if ui.button("Idle (0)").clicked() {
                    self.send(0);
                }
                ui.add(egui::DragValue::new(&mut self.raw_command).range(0u8..=255u8));
                if ui.button("Send").clicked() {
                    self.send(self.raw_command);
                }
                if let Some(byte) = self.dropped {
                    ui.label(format!("queue full, dropped {byte}"));
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let current = self.scheduler.renderer().patterns().current();
                let mut selected = current;
                egui::ComboBox::from_id_salt("pattern_selector")
                    .selected_text(current.as_str())
                    .show_ui(ui, |ui| {
                        for raw in 0..=PatternId::Life as u8 {
                            if let Some(id) = PatternId::from_raw(raw) {
                                ui.selectable_value(&mut selected, id, id.as_str());
                            }
                        }
                    });
                if selected != current {
                    self.scheduler.renderer_mut().patterns_mut().select(selected);
                }

                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
            });

            ui.add_space(4.0);
            ui.label(self.scheduler.renderer().status(now).to_string());
            ui.add_space(8.0);

            let led_pitch = self.led_size + LED_GAP;
            #[allow(clippy::cast_precision_loss)]
            let (response, painter) = ui.allocate_painter(
                egui::vec2(WIDTH as f32 * led_pitch, HEIGHT as f32 * led_pitch),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;
            let frame = &self.scheduler.output().frame;

            #[allow(clippy::cast_precision_loss)]
            for x in 0..WIDTH {
                for y in 0..HEIGHT {
                    let Some(pixel) = frame.get(PixelGrid::<LED_COUNT, WIDTH, HEIGHT>::index(x, y))
                    else {
                        continue;
                    };
                    // Row 0 is the bottom of the matrix
                    let left = origin.x + x as f32 * led_pitch;
                    let top = origin.y + (HEIGHT - 1 - y) as f32 * led_pitch;
                    let rect = egui::Rect::from_min_size(
                        egui::pos2(left, top),
                        egui::vec2(self.led_size, self.led_size),
                    );
                    painter.rect_filled(rect, 3.0, egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b));
                }
            }
        });
    }
}
