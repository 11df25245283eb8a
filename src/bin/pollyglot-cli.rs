//! Terminal front end for the translator: one submit per invocation.

use std::io::Read;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pollyglot::client::{ApiClient, Banner, BannerKind, CharCounter, Controller, SystemClipboard, UiState};

#[derive(Parser, Debug)]
#[command(name = "pollyglot-cli", version, about = "Translate text through a PollyGlot server")]
struct Cli {
    /// Server base URL
    #[arg(short, long, env = "POLLYGLOT_SERVER", default_value = "http://localhost:3000")]
    server: String,

    /// Target language, e.g. French
    #[arg(short, long)]
    language: Option<String>,

    /// Print only the translated text
    #[arg(long)]
    raw: bool,

    /// Copy the translated text to the system clipboard
    #[arg(long)]
    copy: bool,

    /// Text to translate; read from stdin when omitted
    text: Option<String>,
}

fn print_banner(banner: Option<&Banner>) {
    if let Some(b) = banner {
        match b.kind {
            BannerKind::Success => eprintln!("[ok] {}", b.message),
            BannerKind::Error => eprintln!("[error] {}", b.message),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            buf
        }
    };

    let mut controller = Controller::new(ApiClient::new(cli.server));

    if !cli.raw {
        controller.check_health().await;
        print_banner(controller.banner());
        let counter = CharCounter::for_text(text.trim());
        eprintln!("{counter}{}", if counter.warn { " (approaching limit)" } else { "" });
    }

    let submitted = controller.submit(&text, cli.language.as_deref()).await.map(UiState::clone);
    let state = match submitted {
        Ok(state) => state,
        Err(_) => {
            print_banner(controller.banner());
            std::process::exit(2);
        }
    };

    if cli.copy && matches!(state, UiState::Success(_)) {
        controller.copy_result(&mut SystemClipboard);
        if cli.raw {
            print_banner(controller.banner().filter(|b| b.kind == BannerKind::Error));
        }
    }

    let code = match &state {
        UiState::Success(view) if cli.raw => {
            println!("{}", view.translated);
            0
        }
        UiState::Success(view) => {
            println!("Original:\n{}\n", view.original);
            println!("{}:\n{}\n", view.language_label, view.translated);
            println!("Translated at: {}", view.translated_at);
            print_banner(controller.banner());
            0
        }
        _ => {
            print_banner(controller.banner());
            1
        }
    };

    controller.reset();
    std::process::exit(code);
}
