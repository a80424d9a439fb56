use crate::api::{self, AppState, ServerOptions};
use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use tracing_subscriber::EnvFilter;

fn init_tracing(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // a subscriber may already be installed (e.g. by an embedding binary)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        init_tracing(cfg);

        let pool = open_pool(cfg)?;
        let pass_hash = auth::resolve_hash(cfg);
        if pass_hash.is_none() {
            warning(format!(
                "No login password hash configured (app_pass_hash / {}): login will fail.",
                auth::PASS_HASH_ENV
            ));
        }

        let opts = ServerOptions {
            bind: bind.clone().unwrap_or_else(|| cfg.bind.clone()),
            cors_allow_any: cfg.cors_allow_any,
        };
        info(format!(
            "Serving {} on http://{} (Ctrl-C to stop)",
            cfg.database, opts.bind
        ));

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::Server(format!("cannot start runtime: {e}")))?;

        runtime.block_on(api::serve(AppState::new(pool, pass_hash), opts))?;
    }
    Ok(())
}
