//! Telegram bot recording group activity, with statistics and interest reports
//!
//! (c) Softlandia 2025

use group_insights_bot::bot::handlers;
use group_insights_bot::config::Config;
use group_insights_bot::core::services::MyChatService;
use group_insights_bot::core::traits::ChatService;
use group_insights_bot::infrastructure::database::DatabaseConnection;
use group_insights_bot::infrastructure::repositories::DbChatRepository;

use anyhow::anyhow;
use di::{Injectable, Ref, ServiceCollection, singleton_factory};
use log::{error, info};
use tokio::runtime::{Builder, Runtime};

fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return Err(e.into());
        }
    };

    let runtime: Runtime = Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(bot_task(config))
}

async fn bot_task(config: Config) -> anyhow::Result<()> {
    let registered = config.clone();
    let provider = ServiceCollection::new()
        .add(singleton_factory(move |_| Ref::new(registered.clone())))
        .add(DatabaseConnection::singleton())
        .add(DbChatRepository::singleton())
        .add(MyChatService::singleton())
        .build_provider()
        .map_err(|e| anyhow!("invalid service registrations: {e}"))?;

    provider
        .get_required::<DatabaseConnection>()
        .ensure_schema()
        .await?;
    info!("using database {}", config.database_url);

    let service = provider.get_required::<dyn ChatService>();
    handlers::run(config, service).await?;

    Ok(())
}
