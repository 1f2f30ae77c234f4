//! Docpick - CLI harness for the model picker selection controller.
//!
//! Loads a JSON page description, activates the picker against it, applies
//! a scripted sequence of interactions, and prints the resulting URL,
//! selection, and page attribute state. Stands in for clicking around a
//! browser when checking markup changes.

use anyhow::{Context, Result, bail};
use clap::Parser;
use docpick::{Interaction, Key, Location, Page, Picker, Target, Trigger};
use std::path::PathBuf;

/// Exercise the model picker against a page description.
#[derive(Parser)]
#[command(name = "docpick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file describing the page's controls and documentation blocks
    page: PathBuf,

    /// Initial query string, e.g. "model=pyt_vllm_llama-3.1-8b"
    #[arg(long, default_value = "")]
    query: String,

    /// Path component of the page URL
    #[arg(long, default_value = "/docs/index.html")]
    path: String,

    /// Interactions to apply in document order: "model:TAG" or "group:TAG",
    /// with an optional "@key" suffix for keyboard activation
    actions: Vec<String>,
}

fn main() -> Result<()> {
    // Log to /tmp/docpick.log - tail with: tail -f /tmp/docpick.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender = tracing_appender::rolling::never("/tmp", "docpick.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.page)
        .with_context(|| format!("failed to read page file {}", cli.page.display()))?;
    let mut page: Page =
        serde_json::from_str(&raw).context("page file is not a valid page description")?;
    let mut location = Location::new(cli.path, cli.query);

    let Some(mut picker) = Picker::install(&mut page, &mut location) else {
        bail!("picker did not activate: required markup is missing");
    };

    for action in &cli.actions {
        let interaction = parse_action(&page, action)?;
        let consumed = picker.handle(&interaction, &mut page, &mut location);
        if consumed {
            tracing::debug!(%action, "default action suppressed");
        }
    }

    let report = serde_json::json!({
        "url": location.href(),
        "selection": {
            "model": picker.selection().model,
            "group": picker.selection().group,
        },
        "page": page,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Parse one scripted action into an interaction, resolving the target
/// control from the page the way event delegation would.
fn parse_action(page: &Page, action: &str) -> Result<Interaction> {
    let (selector, trigger) = match action.split_once('@') {
        Some((selector, "key")) => (selector, Trigger::Key(Key::Enter)),
        Some((_, other)) => bail!("unknown trigger {other:?} in action {action:?}"),
        None => (action, Trigger::Click),
    };

    let target = match selector.split_once(':') {
        Some(("model", tag)) => page.find_model(tag).map(Target::from_model_control),
        Some(("group", tag)) => page.find_group(tag).map(Target::from_group_control),
        _ => bail!("action {action:?} must look like model:TAG or group:TAG"),
    };

    // Unknown tags resolve to no target, like clicking dead space.
    Ok(Interaction { trigger, target })
}
