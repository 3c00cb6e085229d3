//! The interactive loop.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use super::render::Renderer;
use super::{Reply, Session};
use crate::element::Element;
use crate::error::Result;

/// Prompts for lines from `input`, runs them and writes the rendered replies to `output`.
/// Stops at `exit`, `quit` or end of input. Failed commands are reported and the loop goes on.
///
/// # Examples
///
/// ```
/// use bst::config::Settings;
/// use bst::session::{repl, Session};
///
/// let settings = Settings {
///     colors: false,
///     ..Settings::default()
/// };
/// let mut session: Session<i64> = Session::new(&settings);
/// let mut output = Vec::new();
///
/// repl::run(&mut session, "create\ninsert 7\nsearch 7\n".as_bytes(), &mut output).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("Value '7' was FOUND in the tree"));
/// ```
pub fn run<T, R, W>(session: &mut Session<T>, input: R, mut output: W) -> Result<()>
where
    T: Element,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", Renderer::new(session.colors()).banner())?;

    let mut lines = input.lines();
    loop {
        write!(
            output,
            "{}",
            Renderer::new(session.colors()).prompt(session.current())
        )?;
        output.flush()?;

        let Some(line) = lines.next() else {
            info!("input closed");
            writeln!(output)?;
            break;
        };
        let line = line?;

        // Rendered after executing, so `colors` shows its own message in the new mode.
        match session.execute(&line) {
            Ok(reply) => {
                write!(output, "{}", Renderer::new(session.colors()).reply(&reply))?;
                if matches!(reply, Reply::Exit) {
                    break;
                }
            }
            Err(err) => {
                warn!(%err, line = %line.trim(), "command failed");
                write!(output, "{}", Renderer::new(session.colors()).error(&err))?;
            }
        }
    }

    output.flush()?;
    Ok(())
}
