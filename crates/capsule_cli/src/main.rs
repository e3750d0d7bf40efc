//! Interactive terminal frontend for Memory Capsule.
//!
//! # Responsibility
//! - Open the store under the platform data directory and drive the view
//!   state machine over a stdin/stdout loop.
//! - Await submissions on the tokio runtime; no input is read while a
//!   submission is pending, so resubmission is impossible.

use capsule_core::view::render;
use capsule_core::{CapsuleService, Mode, SqliteSlotStore, SubmitRequest, ViewState};
use chrono::Local;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "memory-capsule";
const DB_FILE_NAME: &str = "capsules.db";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let data_dir = app_data_dir();
    std::fs::create_dir_all(&data_dir)?;

    // Logging is best-effort; the app stays usable without it.
    if let Some(log_dir) = data_dir.join("logs").to_str() {
        if let Err(err) = capsule_core::init_logging(capsule_core::default_log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let store = SqliteSlotStore::open(data_dir.join(DB_FILE_NAME))?;
    let service = CapsuleService::new(store);
    let mut view = ViewState::new();

    println!("Memory Capsule v{}", capsule_core::core_version());

    loop {
        match view.mode {
            Mode::Browsing => {
                println!("{}", render::render_browse(&service.list()));
                match prompt("> ")?.as_str() {
                    "w" => view.begin_compose(),
                    "q" => break,
                    _ => {}
                }
            }
            Mode::Composing => {
                compose_once(&service, &mut view).await?;
                if let Some(notice) = view.take_notice() {
                    println!("\n{notice}");
                }
            }
        }
    }

    Ok(())
}

/// Runs one pass of the compose form: field entry, then save or cancel.
///
/// A validation failure leaves the view in `Composing` with the draft kept,
/// so the caller loops back into this form.
async fn compose_once(
    service: &CapsuleService<SqliteSlotStore>,
    view: &mut ViewState,
) -> Result<(), Box<dyn Error>> {
    println!("{}", render::render_compose(&view.draft, view.busy));

    let title = prompt("Title: ")?;
    if !title.is_empty() {
        view.draft.title = title;
    }
    let message = prompt("Message: ")?;
    if !message.is_empty() {
        view.draft.message = message;
    }

    loop {
        let input = prompt("Open on (YYYY-MM-DD, blank for none): ")?;
        match view.draft.set_open_date(&input, Local::now().date_naive()) {
            Ok(()) => break,
            Err(err) => println!("{err}"),
        }
    }

    let action = loop {
        let input = prompt("[s] save / [c] cancel > ")?;
        if let Some(action) = compose_action(&input) {
            break action;
        }
    };

    match action {
        ComposeAction::Cancel => {
            view.cancel_compose();
            Ok(())
        }
        ComposeAction::Save => {
            if !view.begin_save() {
                return Ok(());
            }
            println!("{}", render::render_compose(&view.draft, view.busy));

            let request = SubmitRequest {
                title: view.draft.title.clone(),
                message: view.draft.message.clone(),
                date_to_open: view.draft.open_date,
            };
            let outcome = service.submit(&request).await;
            view.finish_save(&outcome);
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComposeAction {
    Save,
    Cancel,
}

/// Maps save/cancel prompt input; anything else means "ask again".
fn compose_action(input: &str) -> Option<ComposeAction> {
    match input.trim() {
        "s" => Some(ComposeAction::Save),
        "c" => Some(ComposeAction::Cancel),
        _ => None,
    }
}

fn prompt(label: &str) -> Result<String, io::Error> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}
