//! Range selection on a month calendar, bounded to the bookable window

use chrono::{Datelike, Days, Months, NaiveDate};

use super::filters::DateRange;

/// Cursor and in-progress range for the calendar section.
///
/// Selectable days run from `today` through the last day of the following
/// month.
#[derive(Clone, Debug)]
pub struct DatePicker {
    first_day: NaiveDate,
    last_day: NaiveDate,
    cursor: NaiveDate,
    pending: DateRange,
}

impl DatePicker {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            first_day: today,
            last_day: end_of_next_month(today),
            cursor: today,
            pending: DateRange::default(),
        }
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn pending(&self) -> DateRange {
        self.pending
    }

    pub fn is_selectable(&self, day: NaiveDate) -> bool {
        self.first_day <= day && day <= self.last_day
    }

    pub fn can_add(&self) -> bool {
        self.pending.is_complete()
    }

    /// Move the cursor by a signed number of days, clamped to the bounds.
    pub fn move_days(&mut self, delta: i64) {
        let moved = if delta >= 0 {
            self.cursor.checked_add_days(Days::new(delta.unsigned_abs()))
        } else {
            self.cursor.checked_sub_days(Days::new(delta.unsigned_abs()))
        };
        let moved = moved.unwrap_or(self.cursor);
        self.cursor = moved.clamp(self.first_day, self.last_day);
    }

    pub fn move_weeks(&mut self, delta: i64) {
        self.move_days(delta * 7);
    }

    /// Pick the day under the cursor.
    ///
    /// The first pick sets `from`; the second completes the range, swapping
    /// ends if it lands before `from`. Picking after a complete range starts
    /// a new one.
    pub fn pick(&mut self) {
        let day = self.cursor;
        if !self.is_selectable(day) {
            return;
        }
        self.pending = match (self.pending.from, self.pending.to) {
            (Some(from), None) if day < from => DateRange::new(day, from),
            (Some(from), None) => DateRange::new(from, day),
            _ => DateRange::starting(day),
        };
    }

    /// Hand over the pending range if it is complete, resetting the picker.
    pub fn take_completed(&mut self) -> Option<DateRange> {
        if !self.pending.is_complete() {
            return None;
        }
        Some(std::mem::take(&mut self.pending))
    }

    pub fn clear_pending(&mut self) {
        self.pending = DateRange::default();
    }

    /// Weeks of the cursor's month, Monday first. Days outside the month are `None`.
    pub fn month_grid(&self) -> Vec<[Option<NaiveDate>; 7]> {
        month_grid(self.cursor.year(), self.cursor.month())
    }
}

fn end_of_next_month(today: NaiveDate) -> NaiveDate {
    today
        .with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(2)))
        .and_then(|first_after| first_after.pred_opt())
        .unwrap_or(today)
}

pub fn month_grid(year: i32, month: u32) -> Vec<[Option<NaiveDate>; 7]> {
    let mut weeks = Vec::new();
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return weeks;
    };

    let mut week = [None; 7];
    let mut slot = first.weekday().num_days_from_monday() as usize;
    let mut day = first;
    while day.month() == month {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bounds_end_with_next_month() {
        let picker = DatePicker::new(day(2026, 1, 17));
        assert!(!picker.is_selectable(day(2026, 1, 16)));
        assert!(picker.is_selectable(day(2026, 1, 17)));
        assert!(picker.is_selectable(day(2026, 2, 28)));
        assert!(!picker.is_selectable(day(2026, 3, 1)));

        let picker = DatePicker::new(day(2026, 12, 31));
        assert!(picker.is_selectable(day(2027, 1, 31)));
        assert!(!picker.is_selectable(day(2027, 2, 1)));
    }

    #[test]
    fn cursor_stays_within_bounds() {
        let mut picker = DatePicker::new(day(2026, 1, 17));
        picker.move_days(-3);
        assert_eq!(picker.cursor(), day(2026, 1, 17));

        picker.move_weeks(20);
        assert_eq!(picker.cursor(), day(2026, 2, 28));

        picker.move_weeks(-1);
        assert_eq!(picker.cursor(), day(2026, 2, 21));
    }

    #[test]
    fn two_picks_complete_a_range() {
        let mut picker = DatePicker::new(day(2026, 1, 17));
        picker.pick();
        assert!(!picker.can_add());
        assert!(picker.take_completed().is_none());

        picker.move_days(1);
        picker.pick();
        assert!(picker.can_add());
        assert_eq!(
            picker.take_completed(),
            Some(DateRange::new(day(2026, 1, 17), day(2026, 1, 18)))
        );
        assert_eq!(picker.pending(), DateRange::default());
    }

    #[test]
    fn picking_same_day_twice_gives_single_day() {
        let mut picker = DatePicker::new(day(2026, 1, 17));
        picker.pick();
        picker.pick();
        assert_eq!(
            picker.pending(),
            DateRange::new(day(2026, 1, 17), day(2026, 1, 17))
        );
    }

    #[test]
    fn earlier_second_pick_swaps_ends() {
        let mut picker = DatePicker::new(day(2026, 1, 17));
        picker.move_days(5);
        picker.pick();
        picker.move_days(-3);
        picker.pick();
        assert_eq!(
            picker.pending(),
            DateRange::new(day(2026, 1, 19), day(2026, 1, 22))
        );
    }

    #[test]
    fn pick_after_complete_starts_over() {
        let mut picker = DatePicker::new(day(2026, 1, 17));
        picker.pick();
        picker.move_days(2);
        picker.pick();
        picker.pick();
        assert_eq!(picker.pending(), DateRange::starting(day(2026, 1, 19)));
    }

    #[test]
    fn month_grid_is_monday_first() {
        // 1 January 2026 is a Thursday.
        let grid = month_grid(2026, 1);
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0][..3], [None, None, None]);
        assert_eq!(grid[0][3], Some(day(2026, 1, 1)));
        assert_eq!(grid[4][5], Some(day(2026, 1, 31)));
        assert_eq!(grid[4][6], None);
    }
}
