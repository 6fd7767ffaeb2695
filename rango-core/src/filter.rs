//! Entry points behind the date-filter buttons.

use crate::clock::{Clock, SystemClock};
use crate::date_range::{DateRange, compute};
use crate::error::{FilterError, FormError, RangeError};
use crate::form::FormBinding;
use crate::period::Period;

/// Computes ranges from an injected clock and hands them to a form binding.
///
/// Each `filter_*` call reads the clock once, so the start and end of a
/// range always come from the same instant.
#[derive(Debug, Clone, Default)]
pub struct RangeFilter<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> RangeFilter<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The range `period` covers right now, without touching any form.
    pub fn range(&self, period: Period) -> Result<DateRange, RangeError> {
        compute(period, self.clock.now())
    }

    /// Computes the range of `period` and applies it. Nothing is written to
    /// the form when the range cannot be computed.
    pub fn filter<B: FormBinding + ?Sized>(
        &self,
        period: Period,
        binding: &mut B,
    ) -> Result<DateRange, FilterError> {
        let range = self.range(period)?;
        binding.apply(range)?;
        Ok(range)
    }

    /// Applies a range the user picked by hand.
    pub fn filter_custom<B: FormBinding + ?Sized>(
        &self,
        range: DateRange,
        binding: &mut B,
    ) -> Result<DateRange, FormError> {
        binding.apply(range)?;
        Ok(range)
    }

    pub fn filter_today<B: FormBinding + ?Sized>(&self, binding: &mut B) -> Result<DateRange, FilterError> {
        self.filter(Period::Today, binding)
    }

    pub fn filter_week<B: FormBinding + ?Sized>(&self, binding: &mut B) -> Result<DateRange, FilterError> {
        self.filter(Period::Week, binding)
    }

    pub fn filter_month<B: FormBinding + ?Sized>(&self, binding: &mut B) -> Result<DateRange, FilterError> {
        self.filter(Period::Month, binding)
    }

    pub fn filter_quarter<B: FormBinding + ?Sized>(&self, binding: &mut B) -> Result<DateRange, FilterError> {
        self.filter(Period::Quarter, binding)
    }

    pub fn filter_year<B: FormBinding + ?Sized>(&self, binding: &mut B) -> Result<DateRange, FilterError> {
        self.filter(Period::Year, binding)
    }
}
