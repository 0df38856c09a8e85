// consensus-client/demos/session.rs
// 会话示例: 登录 → 项目列表 → 结果
//
// Usage:
//   CONSENSUS_API_URL=http://localhost:8000 \
//   cargo run -p consensus-client --example session -- <email> <password>

use std::sync::Arc;

use consensus_client::{ClientConfig, ConsensusClient, TracingNavigator};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "consensus_client=info,session=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(email), Some(password)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: session <email> <password>");
    };

    let config = ClientConfig::from_env();
    info!("Connecting to {}", config.base_url);
    let client = ConsensusClient::builder()
        .config(config)
        .navigator(Arc::new(TracingNavigator))
        .build()?;

    if !client.is_authenticated() {
        client.login(&email, &password).await?;
    }

    let me = client.current_user().await?;
    info!(
        "Logged in as {} ({})",
        me.full_name.as_deref().unwrap_or("-"),
        me.email
    );

    let invitations = client.invitations().await?;
    if !invitations.is_empty() {
        info!("{} pending invitation(s)", invitations.len());
    }

    for project in client.projects().await? {
        match client.result(project.id).await? {
            Some(result) => info!(
                "#{} {}: best compromise ({:.2}, {:.2}, {:.2}), centroid {:.2}, max error {:.2}",
                project.id,
                project.name,
                result.best_compromise.lower,
                result.best_compromise.peak,
                result.best_compromise.upper,
                result.centroid,
                result.max_error,
            ),
            None => warn!("#{} {}: no result yet", project.id, project.name),
        }
    }

    Ok(())
}
