//! Wall-clock adapter.

use chrono::{Local, NaiveDate};

use crate::ports::Clock;

/// Reads today's date from the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn today_is_a_plausible_date() {
        assert!(SystemClock.today().year() >= 2024);
    }
}
