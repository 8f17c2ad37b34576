use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use peer_ban_wave::common::common::setup_logging;
use peer_ban_wave::config::structs::configuration::Configuration;
use peer_ban_wave::downloader::traits::downloader::Downloader;
use peer_ban_wave::server::structs::peer_ban_server::PeerBanServer;
use peer_ban_wave::stats::structs::stats_metrics::StatsMetrics;
use peer_ban_wave::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_path(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.sentry_config.environment.clone().into()),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .thread_name("core")
        .enable_all()
        .build()?
        .block_on(async {
            let metrics = Arc::new(StatsMetrics::new());
            // Connectors for concrete clients are supplied by the embedding application.
            let downloaders: Vec<Arc<dyn Downloader>> = Vec::new();
            if downloaders.is_empty() {
                warn!("[BOOT] No downloaders configured, ban waves will only expire bans");
            }
            let server = Arc::new(PeerBanServer::new(config.clone(), downloaders, metrics.clone(), Vec::new()));

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(error) => {
                    error!("[BOOT] Unable to install the shutdown handler: {error}");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let ban_wave = tokio::spawn(server.clone().start_ban_wave_loop(tokio_shutdown.clone()));

            let stats_handler = tokio_shutdown.clone();
            let stats_server = server.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = metrics.get_stats();
                            info!(
                                "[STATS] Checks: {} - Last check: {} - Banned: {} - Bans: {} - Unbans: {}",
                                stats.checks, stats.timestamp_run_check, stats_server.ban_list.len(), stats.bans, stats.unbans
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            match tokio::signal::ctrl_c().await {
                Ok(_) => info!("Shutdown request received, shutting down..."),
                Err(error) => error!("Unable to listen for the shutdown signal: {error}")
            }

            tokio_shutdown.handle().await;
            if let Err(error) = ban_wave.await {
                sentry::capture_error(&error);
                error!("Ban wave stopped abnormally: {error}");
            }
            server.shutdown().await;

            info!("Server shutting down completed");
            Ok(())
        })
}
