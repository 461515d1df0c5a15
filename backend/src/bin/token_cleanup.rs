use catalog_backend::{
    config::Config, db::connection::create_pool, repositories::refresh_tokens,
};
use chrono::Utc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let pool = create_pool(&config.database_url).await?;

    let deleted_count = refresh_tokens::delete_expired(&pool, Utc::now())
        .await
        .expect("cleanup expired refresh tokens");

    if deleted_count > 0 {
        tracing::info!("Deleted {} expired refresh tokens", deleted_count);
    }

    sqlx::query("VACUUM (ANALYZE) refresh_tokens")
        .execute(&pool)
        .await
        .expect("vacuum refresh_tokens table");

    Ok(())
}
