use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the console log filter.
pub const CONSOLE_FILTER_ENV: &str = "CONSOLE_LOG";
/// Environment variable holding the log file filter.
pub const FILE_FILTER_ENV: &str = "FILE_LOG";

#[derive(Default)]
pub struct TracingBuilder {
  console_filter: Option<EnvFilter>,
  log_file_path: Option<PathBuf>,
}
impl TracingBuilder {
  /// Overrides the console filter (otherwise read from [`CONSOLE_FILTER_ENV`]) with `directives`, e.g. `"debug"`.
  pub fn with_console_filter(mut self, directives: impl AsRef<str>) -> Self {
    self.console_filter = Some(EnvFilter::new(directives));
    self
  }

  pub fn with_log_file_path_opt(mut self, log_file_path: Option<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }

  /// Installs the global subscriber. Keep the returned [`Tracing`] alive until the end of `main` so that buffered log
  /// lines are flushed to the log file.
  pub fn build(self) -> Tracing {
    let console_filter = self.console_filter.unwrap_or_else(|| filter_from_env(CONSOLE_FILTER_ENV));
    let file = self.log_file_path.map(|path| (path, filter_from_env(FILE_FILTER_ENV)));
    Tracing::new(console_filter, file)
  }
}

fn filter_from_env(key: &str) -> EnvFilter {
  EnvFilter::try_from_env(key).unwrap_or_default()
}


/// Guard of the installed subscriber.
pub struct Tracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing(Option<tracing_appender::non_blocking::WorkerGuard>);
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl Tracing {
  fn new(console_filter: EnvFilter, file: Option<(PathBuf, EnvFilter)>) -> Self {
    let layered = tracing_subscriber::registry()
      .with(
        tracing_subscriber::fmt::layer()
          .with_writer(std::io::stderr)
          .with_filter(console_filter)
      );

    let _file_tracing = match file {
      #[cfg(feature = "app_tracing_file")]
      Some((file_path, filter)) => match create_log_file(&file_path) {
        Err(e) => {
          layered.init();
          tracing::warn!("Cannot log to file; could not truncate/create and open log file '{}' for writing: {}", file_path.display(), e);
          FileTracing::default()
        }
        Ok(log_file) => {
          let (non_blocking, guard) = tracing_appender::non_blocking(std::io::BufWriter::new(log_file));
          layered.with(
            tracing_subscriber::fmt::layer()
              .with_writer(non_blocking)
              .with_ansi(false)
              .with_filter(filter)
          ).init();
          FileTracing(Some(guard))
        }
      },
      #[cfg(not(feature = "app_tracing_file"))]
      Some((file_path, _)) => {
        layered.init();
        tracing::warn!("Cannot log to file '{}'; file logging is not enabled", file_path.display());
        FileTracing::default()
      }
      None => {
        layered.init();
        FileTracing::default()
      }
    };

    Self { _file_tracing }
  }
}

#[cfg(feature = "app_tracing_file")]
fn create_log_file(file_path: &std::path::Path) -> std::io::Result<std::fs::File> {
  if let Some(parent) = file_path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::File::create(file_path)
}
