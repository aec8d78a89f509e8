use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr; stdout carries only the inspection report.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let fallback = if verbose {
        "filename_inspector=debug".to_string()
    } else {
        match level {
            Some(level) => format!("filename_inspector={}", level),
            None => "filename_inspector=warn".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
