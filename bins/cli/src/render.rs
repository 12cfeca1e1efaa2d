//! Plain-text rendering of calendar views.

use std::io::{self, Write};

use chrono::{Datelike, NaiveDate};
use ledgerview_core::view::{AnnualView, CalendarCell, DailyView, MonthlyView, WeeklyView};
use ledgerview_core::{Movement, MovementType, PeriodSummary, ViewModel};
use ledgerview_shared::AmountFormat;

const CELL_WIDTH: usize = 8;
const AMOUNT_WIDTH: usize = 12;
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Writes `view` as text: title, range, body, then the period totals.
pub fn write_view<W: Write>(
    out: &mut W,
    view: &ViewModel,
    format: &AmountFormat,
) -> io::Result<()> {
    writeln!(out, "{}", view.title())?;
    writeln!(out, "{}", view.range())?;
    writeln!(out)?;

    match view {
        ViewModel::Daily(daily) => write_daily(out, daily, format)?,
        ViewModel::Weekly(weekly) => write_weekly(out, weekly, format)?,
        ViewModel::Monthly(monthly) => write_monthly(out, monthly, format)?,
        ViewModel::Annual(annual) => write_annual(out, annual, format)?,
    }

    writeln!(out)?;
    write_summary(out, view.summary(), format)
}

fn write_summary<W: Write>(
    out: &mut W,
    summary: &PeriodSummary,
    format: &AmountFormat,
) -> io::Result<()> {
    writeln!(
        out,
        "income {}  expense {}  balance {}",
        format.grouped(summary.income),
        format.grouped(summary.expense),
        format.grouped(summary.balance)
    )
}

fn signed(movement: &Movement, format: &AmountFormat) -> String {
    let sign = match movement.movement_type {
        MovementType::Income => '+',
        MovementType::Expense => '-',
        MovementType::Unknown => '?',
    };
    format!("{sign}{}", format.grouped(movement.amount))
}

fn write_daily<W: Write>(out: &mut W, view: &DailyView, format: &AmountFormat) -> io::Result<()> {
    if view.movements.is_empty() {
        return writeln!(out, "  no movements");
    }

    for movement in &view.movements {
        write!(
            out,
            "  {:>width$}  {}",
            signed(movement, format),
            movement.concept,
            width = AMOUNT_WIDTH
        )?;
        if let Some(category) = &movement.category {
            write!(out, " [{category}]")?;
        }
        writeln!(out)?;
    }

    // A single group repeats the period totals.
    if view.categories.len() > 1 {
        writeln!(out)?;
        for total in &view.categories {
            let label = total.category.as_deref().unwrap_or("uncategorized");
            writeln!(
                out,
                "  {label:<16}{:>width$}",
                format.grouped(total.summary.balance),
                width = AMOUNT_WIDTH
            )?;
        }
    }
    Ok(())
}

fn write_weekly<W: Write>(
    out: &mut W,
    view: &WeeklyView,
    format: &AmountFormat,
) -> io::Result<()> {
    writeln!(
        out,
        "        {:>width$} {:>width$} {:>width$}  count",
        "income",
        "expense",
        "balance",
        width = AMOUNT_WIDTH
    )?;
    for day in &view.days {
        let marker = if day.is_today { '*' } else { ' ' };
        writeln!(
            out,
            "{marker} {} {:>width$} {:>width$} {:>width$}  {}",
            day.date.format("%a %d"),
            format.grouped(day.summary.income),
            format.grouped(day.summary.expense),
            format.grouped(day.summary.balance),
            day.count,
            width = AMOUNT_WIDTH
        )?;
    }
    Ok(())
}

fn write_monthly<W: Write>(
    out: &mut W,
    view: &MonthlyView,
    format: &AmountFormat,
) -> io::Result<()> {
    writeln!(out, "{}", padded_row(WEEKDAYS.iter().copied()))?;
    for row in view.rows() {
        writeln!(out, "{}", padded_row(row.iter().map(day_label)))?;
        let amounts = padded_row(row.iter().map(|cell| cell_amount(cell, format)));
        if !amounts.is_empty() {
            writeln!(out, "{amounts}")?;
        }
    }
    Ok(())
}

fn padded_row<S: AsRef<str>>(cells: impl Iterator<Item = S>) -> String {
    let mut line = String::new();
    for cell in cells {
        let cell = cell.as_ref();
        line.push_str(cell);
        let padding = CELL_WIDTH.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat_n(' ', padding));
    }
    line.trim_end().to_string()
}

fn day_label(cell: &CalendarCell) -> String {
    let day = cell.date.day();
    if cell.is_today {
        format!("[{day}]")
    } else if cell.belongs_to_current_month {
        day.to_string()
    } else {
        format!("({day})")
    }
}

fn cell_amount(cell: &CalendarCell, format: &AmountFormat) -> String {
    if cell.belongs_to_current_month && cell.count > 0 {
        format.compact(cell.summary.balance)
    } else {
        String::new()
    }
}

fn write_annual<W: Write>(
    out: &mut W,
    view: &AnnualView,
    format: &AmountFormat,
) -> io::Result<()> {
    let year = view.range.start_date().year();
    for month in &view.months {
        let label = NaiveDate::from_ymd_opt(year, month.month_index + 1, 1).map_or_else(
            || (month.month_index + 1).to_string(),
            |first| first.format("%b").to_string(),
        );
        writeln!(
            out,
            "  {label:<4}{:>width$} {:>width$} {:>width$}  {}",
            format.grouped(month.summary.income),
            format.grouped(month.summary.expense),
            format.grouped(month.summary.balance),
            month.count,
            width = AMOUNT_WIDTH
        )?;
    }
    Ok(())
}
