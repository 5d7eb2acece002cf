//! Interactive city/month/day selection.

use std::io::{BufRead, Write};

use bikeshare_core::catalog::{City, DayFilter, FilterSelection, MonthFilter};
use bikeshare_core::Result;

use crate::console::Console;
use crate::report::SEPARATOR;

const CITY_PROMPT: &str =
    "Please enter the name of the city to explore \n(Chicago, New York City, Washington): ";
const MONTH_PROMPT: &str = "Please enter the name of the month to filter by (january, february, ... , june)\nor enter 'all' to apply no month filter: ";
const DAY_PROMPT: &str = "Please enter the name of the day of week to filter by (monday, tuesday, ... , sunday)\nor enter 'all' to apply no day filter: ";

/// Greet the user and ask for a city, a month and a day, re-asking each
/// until it names a member of its catalog.
pub fn resolve_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<FilterSelection> {
    console.say("Hello! Let's explore some US bikeshare data!")?;

    let city: City =
        console.ask_until_valid(CITY_PROMPT, "Sorry, Please enter a valid city name.")?;
    let month: MonthFilter =
        console.ask_until_valid(MONTH_PROMPT, "Sorry, Please enter a valid month name.")?;
    let day: DayFilter =
        console.ask_until_valid(DAY_PROMPT, "Sorry, Please enter a valid day name.")?;

    console.say(SEPARATOR)?;
    tracing::info!("Selected city={} month={} day={}", city, month, day);

    Ok(FilterSelection { city, month, day })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::BikeshareError;
    use chrono::{Month, Weekday};
    use std::io::Cursor;

    fn run(input: &str) -> (Result<FilterSelection>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = resolve_filters(&mut console);
        (result, String::from_utf8(console.output().clone()).unwrap())
    }

    #[test]
    fn test_resolve_filters_valid_first_time() {
        let (result, out) = run("Chicago\njune\nall\n");
        let selection = result.unwrap();

        assert_eq!(selection.city, City::Chicago);
        assert_eq!(selection.month, MonthFilter::Only(Month::June));
        assert_eq!(selection.day, DayFilter::All);
        assert!(out.starts_with("Hello! Let's explore some US bikeshare data!\n"));
        assert!(out.ends_with(&format!("{}\n", SEPARATOR)));
        assert!(!out.contains("Sorry"));
    }

    #[test]
    fn test_resolve_filters_reprompts_each_field() {
        let (result, out) = run("paris\n new york city \njuly\nALL\nsomeday\nFriday\n");
        let selection = result.unwrap();

        assert_eq!(selection.city, City::NewYorkCity);
        assert_eq!(selection.month, MonthFilter::All);
        assert_eq!(selection.day, DayFilter::Only(Weekday::Fri));
        assert_eq!(out.matches("Sorry, Please enter a valid city name.").count(), 1);
        assert_eq!(out.matches("Sorry, Please enter a valid month name.").count(), 1);
        assert_eq!(out.matches("Sorry, Please enter a valid day name.").count(), 1);
    }

    #[test]
    fn test_resolve_filters_reprompts_on_undecodable_bytes() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"chicago\nall\nall\n");
        let mut console = Console::new(Cursor::new(input), Vec::new());

        let selection = resolve_filters(&mut console).unwrap();
        let out = String::from_utf8(console.output().clone()).unwrap();

        assert_eq!(selection.city, City::Chicago);
        assert_eq!(out.matches("Sorry, Please enter a valid city name.").count(), 1);
    }

    #[test]
    fn test_resolve_filters_input_closed() {
        let (result, _) = run("washington\n");
        assert!(matches!(result, Err(BikeshareError::InputClosed)));
    }
}
