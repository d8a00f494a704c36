use std::{
    io::Write,
    path::Path,
    sync::{Arc, Mutex},
};

use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    ContentLimit, FileRotate,
};
use tracing_subscriber::{filter::LevelFilter, fmt, layer::SubscriberExt, Layer};

use crate::config::LoggingConfig;

fn parse_level_filter(s: &str) -> LevelFilter {
    match s.to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" | "none" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

// -------- rotating writer for the file layer --------

#[derive(Clone)]
struct RotWriter(Arc<Mutex<FileRotate<AppendTimestamp>>>);

struct RotWriterHandle(Arc<Mutex<FileRotate<AppendTimestamp>>>);

impl<'a> fmt::MakeWriter<'a> for RotWriter {
    type Writer = RotWriterHandle;
    fn make_writer(&'a self) -> Self::Writer {
        RotWriterHandle(self.0.clone())
    }
}

impl Write for RotWriterHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.lock().unwrap().flush()
    }
}

fn rotating_writer(cfg: &LoggingConfig, path: &Path) -> RotWriter {
    let max_bytes = cfg.max_size_mb.unwrap_or(50) * 1024 * 1024;
    let keep = cfg.max_backups.unwrap_or(3);
    RotWriter(Arc::new(Mutex::new(FileRotate::new(
        path,
        AppendTimestamp::default(FileLimit::MaxFiles(keep)),
        ContentLimit::Bytes(max_bytes as usize),
        Compression::None,
        None,
    ))))
}

/// Install the global tracing subscriber from config: a console layer plus an
/// optional rotating file layer. Safe to call more than once; only the first
/// call wins.
pub fn init_logging(cfg: &LoggingConfig) {
    // Route `log` crate records (from dependencies) into tracing.
    let _ = tracing_log::LogTracer::init();

    let console = fmt::layer()
        .with_target(true)
        .with_filter(parse_level_filter(&cfg.console_level));

    let file = cfg.file.as_ref().map(|file| {
        if let Some(dir) = Path::new(file).parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(rotating_writer(cfg, Path::new(file)))
            .with_filter(parse_level_filter(&cfg.file_level))
    });

    let subscriber = tracing_subscriber::registry().with(console).with(file);
    let _ = tracing::subscriber::set_global_default(subscriber);
}
