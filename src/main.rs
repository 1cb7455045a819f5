use anyhow::{Context, Result, bail};
use devscout::core::config::AppConfig;
use devscout::core::models::ProjectRecord;
use devscout::{ChatAssistant, ResumeGenerator};
use tokio::io::AsyncReadExt;
use tracing::error;

const USAGE: &str = "usage: devscout resume < project.json\n       devscout chat <message...>";

#[tokio::main]
async fn main() -> Result<()> {
    devscout::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        e
    })?;

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("resume") => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("Failed to read project JSON from stdin")?;
            let project: ProjectRecord =
                serde_json::from_str(&input).context("Failed to parse project JSON")?;

            let content = ResumeGenerator::new(config.resume).generate(&project).await?;
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
        Some("chat") => {
            let message = args.collect::<Vec<_>>().join(" ");
            if message.trim().is_empty() {
                bail!("{USAGE}");
            }

            let reply = ChatAssistant::new(config.chat).send(&message, &[]).await?;
            println!("{reply}");
        }
        _ => bail!("{USAGE}"),
    }

    Ok(())
}
