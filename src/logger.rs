/// Модуль для инициализации логирования
/// Пишет в digipsych.log в каталоге данных пользователя, при ошибке в stderr

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use log::LevelFilter;

const LOG_FILE: &str = "digipsych.log";

/// Каталог логов: ~/.local/share/digipsych/logs или ./logs
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("digipsych").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

fn open_log_file() -> anyhow::Result<File> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;
    Ok(file)
}

pub fn init() {
    let mut builder = env_logger::Builder::new();

    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(LevelFilter::Info);
        // Зависимости слишком многословны
        builder.filter_module("eframe", LevelFilter::Warn);
        builder.filter_module("egui", LevelFilter::Warn);
        builder.filter_module("wgpu", LevelFilter::Warn);
        builder.filter_module("reqwest", LevelFilter::Warn);
        builder.filter_module("hyper", LevelFilter::Warn);
    }

    // [HH:MM:SS LEVEL] модуль - сообщение
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    let file_error = match open_log_file() {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            None
        }
        Err(e) => {
            builder.target(env_logger::Target::Stderr);
            Some(e)
        }
    };

    if builder.try_init().is_err() {
        return;
    }

    match file_error {
        None => log::info!("Logging initialised ✓ ({})", log_dir().join(LOG_FILE).display()),
        Some(e) => log::warn!("⚠️ Log file unavailable, logging to stderr: {}", e),
    }
}
