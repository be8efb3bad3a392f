//! Full-screen New Year countdown.
//!
//! Run with `--compact` for small rings. Set `RUST_LOG` (for example
//! `RUST_LOG=newyear_countdown=debug`) to write logs to `countdown.log`.

use bubbletea_rs::{Cmd, Model, Msg, Program};
use newyear_countdown::prelude::*;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "countdown.log";

struct App {
    countdown: Countdown,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let theme = if std::env::args().any(|arg| arg == "--compact") {
            Theme::compact()
        } else {
            Theme::large()
        };

        let mut countdown = Countdown::local(theme);
        let cmd = countdown.init();
        (Self { countdown }, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.countdown.update(msg)
    }

    fn view(&self) -> String {
        format!(
            "\n{}\n\n  {}",
            self.countdown.view(),
            self.countdown.keymap.quit.help_line()
        )
    }
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = File::create(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let program = Program::<App>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()?;

    program.run().await?;
    Ok(())
}
