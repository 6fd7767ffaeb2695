use chrono::{Datelike, Days, Months, NaiveDate};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::date_range::DateRange;
use crate::error::RangeError;

/// A named span of the calendar, always resolved relative to "today".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, AsRefStr, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Period {
    Today,
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl Period {
    /// Resolves the period to the inclusive range that contains `today`.
    ///
    /// Weeks run Sunday through Saturday. Quarters start on months 0, 3, 6
    /// and 9 (January, April, July, October). Fails only when the frame
    /// around `today` leaves the calendar chrono can represent, which can
    /// happen for a week at its first or last date.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use rango_core::period::Period;
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(); // Friday
    /// let week = Period::Week.range_on(today).unwrap();
    ///
    /// assert_eq!(week.start(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    /// assert_eq!(week.end(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
    /// ```
    pub fn range_on(self, today: NaiveDate) -> Result<DateRange, RangeError> {
        let (start, end) = self.bounds_on(today).ok_or(RangeError::OutOfRange {
            period: self,
            date: today,
        })?;
        Ok(DateRange::spanning(start, end))
    }

    fn bounds_on(self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Period::Today => Some((today, today)),
            Period::Week => {
                let days_from_sunday = today.weekday().num_days_from_sunday();
                let start = today.checked_sub_days(Days::new(days_from_sunday as u64))?;
                Some((start, start.checked_add_days(Days::new(6))?))
            }
            Period::Month => {
                let start = today.with_day(1)?;
                Some((start, last_of_month(start)?))
            }
            Period::Quarter => {
                let start = today.with_day(1)?.with_month0(today.month0() / 3 * 3)?;
                let last_month = start.with_month0(start.month0() + 2)?;
                Some((start, last_of_month(last_month)?))
            }
            Period::Year => Some((
                NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
                NaiveDate::from_ymd_opt(today.year(), 12, 31)?,
            )),
        }
    }
}

/// Last day of the month `date` falls in: the day before the first of the
/// next month.
fn last_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let first = date.with_day(1)?;
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.pred_opt(),
        // December of chrono's last year has no next month to step back from.
        None => NaiveDate::from_ymd_opt(first.year(), 12, 31),
    }
}

pub struct Periods;

impl Periods {
    /// Returns the **global period registry** (input → period).
    ///
    /// The registry is initialized once on first access, is guarded by a
    /// [`RwLock`] and stores lowercased keys only. It is seeded with the
    /// canonical names plus the Spanish labels of the filter buttons.
    fn registry() -> &'static RwLock<HashMap<String, Period>> {
        static REGISTRY: Lazy<RwLock<HashMap<String, Period>>> = Lazy::new(|| {
            let mut m = HashMap::new();
            for period in Period::iter() {
                m.insert(period.as_ref().to_string(), period);
            }
            m.insert("hoy".to_string(), Period::Today);
            m.insert("dia".to_string(), Period::Today);
            m.insert("día".to_string(), Period::Today);
            m.insert("semana".to_string(), Period::Week);
            m.insert("mes".to_string(), Period::Month);
            m.insert("trimestre".to_string(), Period::Quarter);
            m.insert("año".to_string(), Period::Year);
            m.insert("anio".to_string(), Period::Year);

            RwLock::new(m)
        });
        &REGISTRY
    }

    /// Extends the global registry with user-defined **synonyms**.
    ///
    /// Each pair is `(alias, target)`; `target` must already be known to the
    /// registry, otherwise the pair is ignored. Aliases that spell a
    /// canonical period name are ignored too, so `week = "year"` can never
    /// redefine `week`.
    pub fn extend(synonyms: &[(String, String)]) {
        let mut reg = match Self::registry().write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (alias, target) in synonyms {
            let alias = alias.to_lowercase();
            if Self::is_canonical(&alias) {
                tracing::warn!(%alias, "ignoring synonym that shadows a period name");
                continue;
            }
            match reg.get(&target.to_lowercase()).copied() {
                Some(period) => {
                    reg.insert(alias, period);
                }
                None => tracing::warn!(%alias, %target, "ignoring synonym for unknown period"),
            }
        }
    }

    /// Returns `true` if `word` is a canonical period name (eg "week").
    pub fn is_canonical(word: &str) -> bool {
        Period::iter().any(|period| period.as_ref() == word)
    }

    /// Looks `input` up case-insensitively among names and synonyms.
    pub fn find(input: &str) -> Option<Period> {
        let reg = match Self::registry().read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        reg.get(&input.trim().to_lowercase()).copied()
    }
}
