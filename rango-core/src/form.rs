//! Writing a range into a date-filter form and submitting it.
//!
//! [`FormBinding`] is the seam between range computation and whatever owns
//! the form. [`FormDocument`] is a plain in-memory form whose submission is
//! the GET request URL a browser would navigate to.

use chrono::NaiveDate;
use url::Url;

use crate::date_range::{DateRange, iso};
use crate::error::FormError;

/// Write access to the two date fields of a filter form, plus its submit.
pub trait FormBinding {
    fn set_start(&mut self, date: NaiveDate) -> Result<(), FormError>;
    fn set_end(&mut self, date: NaiveDate) -> Result<(), FormError>;
    fn submit(&mut self) -> Result<(), FormError>;

    /// Writes `range.start` then `range.end`, then submits exactly once.
    ///
    /// Stops at the first failure, so a form is never submitted with only one
    /// of its bounds rewritten.
    fn apply(&mut self, range: DateRange) -> Result<(), FormError> {
        self.set_start(range.start())?;
        self.set_end(range.end())?;
        self.submit()
    }
}

/// Identifiers the binder uses to address the form and its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTarget {
    pub form_id: String,
    pub start_field: String,
    pub end_field: String,
}

impl Default for FormTarget {
    fn default() -> Self {
        Self {
            form_id: "formFiltroFechas".to_string(),
            start_field: "fecha_inicio".to_string(),
            end_field: "fecha_fin".to_string(),
        }
    }
}

/// A GET form: named inputs in document order and the URL it submits to.
#[derive(Debug, Clone)]
pub struct FormDocument {
    id: String,
    action: Url,
    fields: Vec<(String, String)>,
    submissions: Vec<Url>,
}

impl FormDocument {
    pub fn new(id: impl Into<String>, action: Url) -> Self {
        Self {
            id: id.into(),
            action,
            fields: Vec::new(),
            submissions: Vec::new(),
        }
    }

    /// A form with empty start and end inputs, as the filter page renders it.
    pub fn for_target(target: &FormTarget, action: Url) -> Self {
        Self::new(&target.form_id, action)
            .with_field(&target.start_field, "")
            .with_field(&target.end_field, "")
    }

    /// Adds an input, or overwrites it if `name` already exists.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.field_mut(&name) {
            Some(existing) => *existing = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        self.fields
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Encodes every field into the action's query string, replacing any
    /// query the action carried, and records the resulting request.
    pub fn submit(&mut self) -> &Url {
        let mut url = self.action.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str())));
        tracing::info!(form = %self.id, %url, "submitting form");
        self.submissions.push(url);
        &self.submissions[self.submissions.len() - 1]
    }

    /// Every request produced so far, oldest first.
    pub fn submissions(&self) -> &[Url] {
        &self.submissions
    }
}

/// Binds a [`FormTarget`] to a [`FormDocument`], resolving ids on each call.
pub struct DocumentBinding<'a> {
    document: &'a mut FormDocument,
    target: &'a FormTarget,
}

impl<'a> DocumentBinding<'a> {
    pub fn new(document: &'a mut FormDocument, target: &'a FormTarget) -> Self {
        Self { document, target }
    }

    /// Checks that the form and both date fields exist before anything is
    /// written, so a failed apply leaves the document untouched.
    fn check(&self) -> Result<(), FormError> {
        if self.document.id() != self.target.form_id {
            return Err(FormError::MissingForm(self.target.form_id.clone()));
        }
        for name in [&self.target.start_field, &self.target.end_field] {
            if self.document.field(name).is_none() {
                return Err(FormError::MissingField(name.clone()));
            }
        }
        Ok(())
    }

    fn write(&mut self, name: &str, date: NaiveDate) -> Result<(), FormError> {
        let slot = self
            .document
            .field_mut(name)
            .ok_or_else(|| FormError::MissingField(name.to_string()))?;
        *slot = iso(date);
        tracing::debug!(field = name, value = %slot, "wrote field");
        Ok(())
    }
}

impl FormBinding for DocumentBinding<'_> {
    fn set_start(&mut self, date: NaiveDate) -> Result<(), FormError> {
        let target = self.target;
        self.write(&target.start_field, date)
    }

    fn set_end(&mut self, date: NaiveDate) -> Result<(), FormError> {
        let target = self.target;
        self.write(&target.end_field, date)
    }

    fn submit(&mut self) -> Result<(), FormError> {
        if self.document.id() != self.target.form_id {
            return Err(FormError::MissingForm(self.target.form_id.clone()));
        }
        self.document.submit();
        Ok(())
    }

    fn apply(&mut self, range: DateRange) -> Result<(), FormError> {
        self.check()?;
        self.set_start(range.start())?;
        self.set_end(range.end())?;
        self.submit()
    }
}
