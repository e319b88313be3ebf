use std::time::Duration;

use eframe::{CreationContext, Frame};
use egui::{Color32, Context, Key, Pos2, Rect, Sense, Stroke, ViewportCommand, vec2};
use game_of_life::{Config, SimulationEngine};
use log::{debug, error, info};

pub const TITLE: &str = "Conway's Game of Life";

const TILE_SIZE: f32 = 5.;
const GRID_THICKNESS: f32 = 1.;
const FPS: f64 = 60.;
// Frames drawn per generation while playing.
const UPDATE_FREQ: u32 = 2;

const GRAY: Color32 = Color32::from_rgb(128, 128, 128);
const BLACK: Color32 = Color32::BLACK;
const GREEN: Color32 = Color32::from_rgb(0, 255, 0);

pub fn window_size() -> (f32, f32) {
    let config = Config::default();
    (
        config.width as f32 * TILE_SIZE,
        config.height as f32 * TILE_SIZE,
    )
}

pub struct App {
    engine: SimulationEngine,
    playing: bool,
    frames: u32,
    title: String,
}

impl App {
    /// Called once before the first frame.
    pub fn new(_cc: &CreationContext<'_>) -> anyhow::Result<Self> {
        let engine = SimulationEngine::new(Config::default())?;
        info!("space: play/pause, c: clear, r: random, p: pattern, click: toggle");
        Ok(Self {
            engine,
            playing: false,
            frames: 0,
            title: String::new(),
        })
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let (space, c, r, p) = ctx.input(|i| {
            (
                i.key_pressed(Key::Space),
                i.key_pressed(Key::C),
                i.key_pressed(Key::R),
                i.key_pressed(Key::P),
            )
        });
        if space {
            self.playing = !self.playing;
        }
        if c {
            self.engine.clear();
            self.playing = false;
            self.frames = 0;
        }
        if r {
            let density = self.engine.config().density;
            if let Err(e) = self.engine.seed(density, rand::random()) {
                error!("cannot seed grid: {e}");
            }
        }
        if p {
            self.engine.showcase();
            self.playing = false;
        }
    }

    fn tick(&mut self) {
        if !self.playing {
            return;
        }
        self.frames += 1;
        if self.frames >= UPDATE_FREQ {
            self.frames = 0;
            self.engine.advance();
        }
    }

    fn update_title(&mut self, ctx: &Context) {
        let title = if self.playing {
            format!("{TITLE} - Playing - Generation {}", self.engine.generation())
        } else {
            format!("{TITLE} - Paused")
        };
        if title != self.title {
            ctx.send_viewport_cmd(ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }

    fn draw(&mut self, ui: &mut egui::Ui) {
        let (width, height) = self.engine.grid().dimensions();
        let size = vec2(width as f32 * TILE_SIZE, height as f32 * TILE_SIZE);
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let origin = response.rect.min;
        painter.rect_filled(response.rect, 0., GRAY);

        let stroke = Stroke::new(GRID_THICKNESS, BLACK);
        for row in 0..height {
            let y = origin.y + row as f32 * TILE_SIZE;
            let ends = [Pos2::new(origin.x, y), Pos2::new(origin.x + size.x, y)];
            painter.line_segment(ends, stroke);
        }
        for col in 0..width {
            let x = origin.x + col as f32 * TILE_SIZE;
            let ends = [Pos2::new(x, origin.y), Pos2::new(x, origin.y + size.y)];
            painter.line_segment(ends, stroke);
        }
        for (x, y) in self.engine.grid().live_cells() {
            let min = origin + vec2(x as f32, y as f32) * TILE_SIZE;
            let tile = Rect::from_min_size(min, vec2(TILE_SIZE, TILE_SIZE));
            painter.rect_filled(tile, 0., GREEN);
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = (pos - origin) / TILE_SIZE;
                let (x, y) = (offset.x.floor() as isize, offset.y.floor() as isize);
                if let Err(e) = self.engine.toggle(x, y) {
                    debug!("ignoring click: {e}");
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.tick();
        self.handle_keys(ctx);
        self.update_title(ctx);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw(ui));
        ctx.request_repaint_after(Duration::from_secs_f64(1. / FPS));
    }
}
