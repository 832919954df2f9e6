use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins; otherwise `--verbose` means debug, then the configured level, then info.
fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            return EnvFilter::new("portfolio_export=debug,info");
        }
        level
            .and_then(|level| EnvFilter::try_new(format!("portfolio_export={}", level)).ok())
            .unwrap_or_else(|| EnvFilter::new("portfolio_export=info"))
    })
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

pub fn init_json_logger(level: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(false, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // one object per line for log shippers
        )
        .try_init();
}
