//! Month calendar: a Monday-first grid of calculated days.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::domain::period::month_key;
use crate::domain::{total, Amount, CalculatedDay};

/// One date of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// The calculated day recorded for `date`, if any.
    pub day: Option<CalculatedDay>,
}

/// A month laid out Monday to Sunday.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCalendar {
    pub month: String,
    /// Empty slots before the 1st so it lands on its weekday column.
    pub leading_blanks: usize,
    pub cells: Vec<CalendarCell>,
    pub pl_dollar: Amount,
    pub winning_days: usize,
    pub losing_days: usize,
}

impl MonthCalendar {
    /// Build the grid for the month containing `first`.
    #[must_use]
    pub fn build(days: &[CalculatedDay], first: NaiveDate) -> Self {
        let first = first.with_day(1).unwrap_or(first);
        let month = month_key(first);

        let cells: Vec<CalendarCell> = (0..)
            .map(|offset| first + Duration::days(offset))
            .take_while(|date| date.month() == first.month())
            .map(|date| CalendarCell {
                date,
                day: days.iter().find(|day| day.date == date).cloned(),
            })
            .collect();

        let recorded = || cells.iter().filter_map(|cell| cell.day.as_ref());
        let pl_dollar = total(recorded().map(|day| day.pl_daily_dollar));
        let winning_days = recorded()
            .filter(|day| day.pl_daily_dollar > Amount::ZERO)
            .count();
        let losing_days = recorded()
            .filter(|day| day.pl_daily_dollar < Amount::ZERO)
            .count();

        Self {
            month,
            leading_blanks: first.weekday().num_days_from_monday() as usize,
            cells,
            pl_dollar,
            winning_days,
            losing_days,
        }
    }

    /// Grid rows of seven slots; `None` pads before the 1st and after the
    /// last day.
    #[must_use]
    pub fn weeks(&self) -> Vec<Vec<Option<&CalendarCell>>> {
        let mut slots: Vec<Option<&CalendarCell>> = vec![None; self.leading_blanks];
        slots.extend(self.cells.iter().map(Some));
        while slots.len() % 7 != 0 {
            slots.push(None);
        }
        slots.chunks(7).map(<[_]>::to_vec).collect()
    }
}
