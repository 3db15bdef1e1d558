//! Headless board tool.
//!
//! ```text
//! ideaboard summary          task progress per job
//! ideaboard export [dir]     write idea-board-YYYY-MM-DD.json
//! ideaboard import <file>    replace the board with a document
//! ideaboard clear            remove all notes and strokes
//! ideaboard watch            reprint the summary whenever the board file changes
//! ```

use anyhow::{Context as _, bail};
use ideaboard::dashboard::{job_progress, overall_progress};
use ideaboard::persistence::FileBackend;
use ideaboard::session::Session;
use ideaboard::settings::Settings;
use ideaboard::{logging, transfer};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const USAGE: &str = "usage: ideaboard <summary | export [dir] | import <file> | clear | watch>";

const WATCH_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> anyhow::Result<()> {
    let settings = Settings::load();
    logging::init(&settings.log_filter);

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "summary".to_string());

    let dir = settings
        .storage_dir()
        .context("no data directory available; set storage_dir in settings.json")?;
    let backend = FileBackend::new(&dir);
    let mut session = Session::start(settings, backend);

    match command.as_str() {
        "summary" => print_summary(&session),
        "export" => {
            let target = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
            let path = transfer::export_to_dir(session.board(), &target)?;
            println!("{}", path.display());
        }
        "import" => {
            let Some(file) = args.next() else {
                bail!(USAGE);
            };
            transfer::import_file(session.board_mut(), &PathBuf::from(file))?;
            println!("imported {} notes", session.board().notes().len());
        }
        "clear" => {
            session.board_mut().clear_board();
            println!("board cleared");
        }
        "watch" => watch(&mut session),
        _ => bail!(USAGE),
    }

    session.shutdown();
    Ok(())
}

/// Runs until the process is interrupted
fn watch(session: &mut Session<FileBackend>) {
    print_summary(session);
    let mut seen = session.board().revision();
    loop {
        std::thread::sleep(WATCH_INTERVAL);
        session.tick(Instant::now());
        let revision = session.board().revision();
        if revision != seen {
            seen = revision;
            print_summary(session);
        }
    }
}

fn print_summary<B: ideaboard::persistence::BoardBackend>(session: &Session<B>) {
    let board = session.board();
    println!(
        "{} notes, {} strokes",
        board.notes().len(),
        board.strokes().len()
    );
    for row in job_progress(board) {
        println!(
            "  {:<20} {:>3}/{:<3} {:>3}%",
            row.name, row.done, row.total, row.percent
        );
    }
    let (done, total, percent) = overall_progress(board);
    println!("  {:<20} {:>3}/{:<3} {:>3}%", "all", done, total, percent);
}
