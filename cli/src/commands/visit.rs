//! Visit command: click through a list of pages and print the result

use crate::config::LoadedLayout;
use crate::session::{Command, Flow, Session};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

/// Navigate to each page in turn, step back `back` times, print the page
pub async fn visit_command(
    loaded: LoadedLayout,
    fragment: String,
    pages: Vec<String>,
    back: usize,
) -> Result<()> {
    info!(source = %loaded.source, pages = pages.len(), back, "visiting");

    let (tx, _search_results) = mpsc::unbounded_channel();
    let mut session = Session::new(loaded.layout, &fragment, tx);

    let commands = pages
        .into_iter()
        .map(Command::Go)
        .chain(std::iter::repeat(Command::Back).take(back));
    for command in commands {
        if let Flow::Quit = session.execute(command) {
            break;
        }
    }

    print!("{}", session.view());
    Ok(())
}
