use digipsych::config::Config;
use digipsych::logger;
use digipsych::ui::DigiPsychApp;
use eframe::NativeOptions;

fn main() -> anyhow::Result<()> {
    logger::init();
    log::info!("🚀 DigiPsych starting");

    // Tokio runtime для фоновых запросов
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let config = Config::default();
    log::info!("📁 Config loaded (chatbot mode: {:?})", config.chatbot_mode);
    let app_name = config.app_name.clone();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([800.0, 600.0])
            .with_title(&app_name),
        ..Default::default()
    };

    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(DigiPsychApp::new(cc, config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    log::info!("👋 DigiPsych closed");
    Ok(())
}
