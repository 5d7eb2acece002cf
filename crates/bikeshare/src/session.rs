//! One interactive session: select, load, report, browse, repeat.

use std::io::{BufRead, Write};
use std::path::Path;

use bikeshare_core::{BikeshareError, Result};
use bikeshare_data::analysis::analyze_trips;
use bikeshare_data::table::load_data;
use bikeshare_ui::browser::browse;
use bikeshare_ui::console::Console;
use bikeshare_ui::report::{render_report, render_selection};
use bikeshare_ui::resolver::resolve_filters;

const RESTART_PROMPT: &str = "\nWould you like to explore another city? yes/no \n";
const FAREWELL: &str = "That was fun! Thank you.";

/// What a single round asks of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    Restart,
    Quit,
}

/// Run analysis rounds until the user declines to restart or input ends.
///
/// Returns the number of rounds that produced a report.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, data_dir: &Path) -> Result<usize> {
    let mut reports = 0;
    loop {
        match round(console, data_dir) {
            Ok(Some(next)) => {
                reports += 1;
                if next == Next::Quit {
                    console.say(FAREWELL)?;
                    return Ok(reports);
                }
            }
            // Load failed; back to city selection.
            Ok(None) => {}
            Err(BikeshareError::InputClosed) => {
                tracing::info!("Input closed after {} report(s)", reports);
                return Ok(reports);
            }
            Err(e) => return Err(e),
        }
    }
}

/// `Ok(None)` means the data could not be loaded and the round was abandoned.
fn round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    data_dir: &Path,
) -> Result<Option<Next>> {
    let selection = resolve_filters(console)?;

    let data = match load_data(data_dir, selection) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Load failed for {}: {}", selection.city, e);
            console.say(&format!("\nCould not load {} data: {}\n", selection.city, e))?;
            return Ok(None);
        }
    };

    render_selection(console.output(), &data)?;
    let report = analyze_trips(&data.filtered);
    render_report(console.output(), &report)?;

    browse(console, &data.unfiltered)?;

    let next = if console.confirm(RESTART_PROMPT)? {
        Next::Restart
    } else {
        Next::Quit
    };
    Ok(Some(next))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
