mod app;

use anyhow::anyhow;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let (width, height) = app::window_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        app::TITLE,
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)?))),
    )
    .map_err(|e| anyhow!("{e}"))
}
