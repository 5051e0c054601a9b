use chrono::{Local, NaiveDateTime};

/// Per-invocation context captured once when a run starts.
///
/// The same instant names every artifact a run writes and stamps every
/// cross-reference it creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    pub started_at: NaiveDateTime,
}

impl RunContext {
    /// Capture the current local wall-clock time.
    pub fn now() -> Self {
        Self {
            started_at: Local::now().naive_local(),
        }
    }

    /// Use a fixed instant (tests, replays).
    pub fn at(started_at: NaiveDateTime) -> Self {
        Self { started_at }
    }

    /// Run date as used in artifact file names: `YYYY_MM_DD`.
    pub fn date_stamp(&self) -> String {
        self.started_at.format("%Y_%m_%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn date_stamp_uses_underscores() {
        let ctx = RunContext::at(
            NaiveDate::from_ymd_opt(2024, 3, 7)
                .unwrap()
                .and_hms_opt(23, 59, 1)
                .unwrap(),
        );
        assert_eq!(ctx.date_stamp(), "2024_03_07");
    }
}
