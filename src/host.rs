//! Terminal host: turns stdin lines into component events and redraws the
//! root view on stdout.
//!
//! | Line | Event |
//! |------|-------|
//! | `:click <col> <row>` | pointer event at that cell |
//! | `:quit`, `:q` | unmount and exit |
//! | `::text` | input value `:text` |
//! | anything else | new value of the search input |
//!
//! At end of input the host keeps redrawing until no redraw has been
//! requested for `debounce + request timeout`, so piped input still sees its
//! fetches resolve.

use std::error::Error;
use std::io::IsTerminal;
use std::rc::Rc;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use crate::api::NewsApi;
use crate::components::app::App;
use crate::components::search::SearchOptions;
use crate::config::Settings;
use crate::events::{EventTarget, PointerEvent};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Input(String),
    Click(PointerEvent),
    Quit,
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Input(line.to_string());
        };
        if rest.starts_with(':') {
            return Command::Input(rest.to_string());
        }

        let mut words = rest.split_whitespace();
        match words.next() {
            Some("q") | Some("quit") => Command::Quit,
            Some("click") => {
                let coords: Vec<&str> = words.collect();
                match coords.as_slice() {
                    [col, row] => match (col.parse::<u16>(), row.parse::<u16>()) {
                        (Ok(col), Ok(row)) => Command::Click(PointerEvent::at(col, row)),
                        _ => Command::Invalid(format!("bad coordinates in '{}'", line)),
                    },
                    _ => Command::Invalid("usage: :click <col> <row>".to_string()),
                }
            }
            _ => Command::Invalid(format!("unknown command '{}'", line)),
        }
    }
}

/// Run the interactive session until `:quit` or end of input.
#[instrument(level = "info", skip_all)]
pub async fn run<A: NewsApi + 'static>(api: Rc<A>, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let target = EventTarget::new();
    let mut app = App::new(api, SearchOptions::from(settings));
    app.mount(&target);

    let mut stdout = tokio::io::stdout();
    let clear = std::io::stdout().is_terminal();
    let grace = settings.debounce + settings.request_timeout;
    let result = session(
        &app,
        &target,
        BufReader::new(tokio::io::stdin()),
        &mut stdout,
        grace,
        clear,
    )
    .await;

    app.unmount();
    info!("Session finished");
    result
}

/// Feed `input` lines to a mounted `app` and draw a frame after every event.
///
/// Lines are decoded lossily, so a stray non-UTF-8 byte becomes U+FFFD
/// instead of ending the session.
async fn session<A, R, W>(
    app: &App<A>,
    target: &EventTarget,
    mut input: R,
    out: &mut W,
    grace: Duration,
    clear: bool,
) -> Result<(), Box<dyn Error>>
where
    A: NewsApi + 'static,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let redraw = app.redraw();
    // Partial reads stay here if the redraw branch wins the select.
    let mut buf = Vec::new();

    draw(out, app, clear).await?;
    loop {
        tokio::select! {
            read = input.read_until(b'\n', &mut buf) => {
                if read? == 0 && buf.is_empty() {
                    debug!("Input closed");
                    settle(out, app, &redraw, grace, clear).await?;
                    return Ok(());
                }
                let line = decode_line(&buf);
                buf.clear();
                match Command::parse(&line) {
                    Command::Input(value) => app.header().input(&value),
                    Command::Click(event) => {
                        target.dispatch(event);
                    }
                    Command::Quit => return Ok(()),
                    Command::Invalid(reason) => {
                        warn!(%reason, "Ignoring input line");
                        continue;
                    }
                }
            }
            _ = redraw.notified() => {}
        }
        draw(out, app, clear).await?;
    }
}

/// Strip the line terminator and replace invalid UTF-8 with U+FFFD.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = String::from_utf8_lossy(raw);
    if let std::borrow::Cow::Owned(_) = line {
        warn!(bytes = raw.len(), "Input line was not valid UTF-8; decoded lossily");
    }
    line.into_owned()
}

async fn settle<A, W>(
    out: &mut W,
    app: &App<A>,
    redraw: &tokio::sync::Notify,
    grace: Duration,
    clear: bool,
) -> Result<(), Box<dyn Error>>
where
    A: NewsApi + 'static,
    W: AsyncWrite + Unpin,
{
    while timeout(grace, redraw.notified()).await.is_ok() {
        draw(out, app, clear).await?;
    }
    Ok(())
}

async fn draw<A, W>(out: &mut W, app: &App<A>, clear: bool) -> Result<(), Box<dyn Error>>
where
    A: NewsApi + 'static,
    W: AsyncWrite + Unpin,
{
    let mut frame = String::new();
    if clear {
        frame.push_str(CLEAR_SCREEN);
    }
    frame.push_str(&app.render());
    out.write_all(frame.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}
