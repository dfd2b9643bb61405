//! Browse command: the interactive prompt

use crate::config::LoadedLayout;
use crate::output::render_notice;
use crate::session::{Command, Flow, Session};
use anyhow::Result;
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;

const PROMPT: &str = "tieba> ";

/// Load the page and read commands from stdin until `quit` or EOF
pub async fn browse_command(loaded: LoadedLayout, fragment: String) -> Result<()> {
    info!(source = %loaded.source, "browsing");

    let (tx, mut search_results) = mpsc::unbounded_channel();
    let mut session = Session::new(loaded.layout, &fragment, tx);

    if let Some(welcome) = session.notices().current() {
        println!("{}", render_notice(welcome));
    }
    print!("{}", session.view());
    println!("type `help` for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    println!();
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => match session.execute(command) {
                        Flow::Continue(text) => print!("{}", text),
                        Flow::Quit => break,
                    },
                    Err(e) => println!("{}", e),
                }
            }
            Some(notice) = search_results.recv() => {
                println!();
                println!("{}", session.post_notice(notice));
            }
        }
    }

    Ok(())
}
