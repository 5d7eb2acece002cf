//! Paged display of raw trip rows.

use std::io::{BufRead, Write};

use bikeshare_core::models::Trip;
use bikeshare_core::Result;
use bikeshare_data::table::TripTable;

use crate::console::Console;
use crate::table_view::render_trips;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

const RAW_PROMPT: &str = "Would you like to display 5 rows of raw data? yes/no \n";

/// Cursor over consecutive pages of a table.
#[derive(Debug)]
pub struct RawDataBrowser<'a> {
    table: &'a TripTable,
    cursor: usize,
}

impl<'a> RawDataBrowser<'a> {
    pub fn new(table: &'a TripTable) -> Self {
        Self { table, cursor: 0 }
    }

    pub fn has_more(&self) -> bool {
        self.cursor < self.table.len()
    }

    /// The next page, which is empty once the table is exhausted.
    pub fn next_page(&mut self) -> &'a [Trip] {
        let page = self.table.page(self.cursor, PAGE_SIZE);
        self.cursor += page.len();
        page
    }
}

/// Offer pages of `table` until the user declines or rows run out.
///
/// Returns the number of pages shown.
pub fn browse<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<usize> {
    let mut browser = RawDataBrowser::new(table);
    let mut shown = 0;

    while browser.has_more() {
        if !console.confirm(RAW_PROMPT)? {
            break;
        }
        let page = browser.next_page();
        console.say(&render_trips(page, table.city()))?;
        shown += 1;
    }

    tracing::debug!("Displayed {} raw data page(s)", shown);
    Ok(shown)
}
