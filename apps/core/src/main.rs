// Heartwell CLI Entry Point
// One-shot advice (`ask`) and an interactive session (`chat`)

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use heartwell_core::brain::{ClassificationResult, RenderMode, ResponseBundle};
use heartwell_core::config::{RemoteSettings, SecretStore};
use heartwell_core::fs_manager::PortablePathManager;
use heartwell_core::transcript::{ChatTranscript, Role};
use heartwell_core::Counselor;
use serde::Serialize;
use std::io::{Read, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Commands that end an interactive session.
const EXIT_COMMANDS: &[&str] = &["/exit", "退出"];

/// Heartwell: warm, structured emotional support in Chinese.
#[derive(Parser, Debug)]
#[command(name = "heartwell", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer a single message and exit.
    Ask {
        #[arg(long, value_enum, default_value_t = ModeArg::Sectioned)]
        mode: ModeArg,
        /// Never contact the remote service.
        #[arg(long, default_value_t = false)]
        local_only: bool,
        /// Session secrets file (dotenv format).
        #[arg(long)]
        secrets: Option<PathBuf>,
        /// Print keyword scores and the structured result as JSON instead of rendered text.
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Message text; read from stdin when omitted.
        text: Vec<String>,
    },
    /// Start an interactive session (end with /exit, 退出 or EOF).
    Chat {
        #[arg(long, default_value_t = false)]
        local_only: bool,
        #[arg(long)]
        secrets: Option<PathBuf>,
        /// Save the transcript when the session ends.
        #[arg(long, default_value_t = false)]
        export: bool,
    },
}

/// `ask --json` output: keyword scores plus the composed bundle.
#[derive(Serialize)]
struct AskReport {
    classification: ClassificationResult,
    bundle: ResponseBundle,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Sectioned,
    Chat,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sectioned => RenderMode::Sectioned,
            ModeArg::Chat => RenderMode::Conversational,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Ask {
            mode,
            local_only,
            secrets,
            json,
            text,
        } => {
            let counselor = build_counselor(local_only, secrets)?;
            let message = if text.is_empty() {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read message from stdin")?;
                buf
            } else {
                text.join(" ")
            };
            run_ask(&counselor, &message, mode.into(), json).await
        }
        Command::Chat {
            local_only,
            secrets,
            export,
        } => {
            let counselor = build_counselor(local_only, secrets)?;
            run_chat(&counselor, export).await
        }
    }
}

fn build_counselor(local_only: bool, secrets: Option<PathBuf>) -> anyhow::Result<Counselor> {
    if local_only {
        info!("Local-only mode");
        return Ok(Counselor::local_only());
    }

    let path = secrets.unwrap_or_else(PortablePathManager::secrets_path);
    let store = SecretStore::load_optional(&path)
        .with_context(|| format!("Failed to load secrets from {}", path.display()))?;
    let settings = RemoteSettings::resolve(&store);
    debug!(?settings, "Resolved remote settings");

    Ok(Counselor::from_settings(&settings)?)
}

async fn run_ask(
    counselor: &Counselor,
    message: &str,
    mode: RenderMode,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let report = AskReport {
            classification: counselor.classify(message),
            bundle: counselor.analyze(message),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", counselor.respond(message, mode).await);
    }
    Ok(())
}

async fn run_chat(counselor: &Counselor, export: bool) -> anyhow::Result<()> {
    println!("Heartwell v{}", env!("CARGO_PKG_VERSION"));
    println!("说说你现在的感受吧（输入 /exit 或 退出 结束）。");

    let mut transcript = ChatTranscript::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\n你：");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let message = line.trim();
        if EXIT_COMMANDS.contains(&message) {
            break;
        }
        if message.is_empty() {
            continue;
        }

        let reply = counselor.chat_reply(message).await;
        println!("\n助手：{}", reply);

        transcript.push(Role::User, message);
        transcript.push(Role::Assistant, reply);
    }

    if export && !transcript.is_empty() {
        PortablePathManager::init()?;
        let path = transcript.export_to(&PortablePathManager::transcripts_dir())?;
        println!("\n对话已保存到 {}", path.display());
    }

    Ok(())
}
