use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::model::{CategoryColor, NodeId, NodeKind};

use super::chain::Chain;

/// Error type for rejected field edits. A rejected edit leaves the node untouched.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("not an 8-bit color index: {0}")]
    InvalidAnsiColor(String),
    #[error("not a hex RGB color: {0}")]
    InvalidHexColor(String),
    #[error("not a day count: {0}")]
    InvalidDayCount(String),
    #[error("day {0} has already passed this month")]
    DayPassed(u32),
    #[error("not a date: {0}")]
    InvalidDate(String),
    #[error("field does not apply to this node")]
    NotApplicable,
}

/// An editable field of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Note,
    DueDate,
    Color,
}

/// A field paired with the label shown next to the input widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field: Field,
}

pub const ITEM_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title: ",
        field: Field::Title,
    },
    FieldSpec {
        name: "text: ",
        field: Field::Note,
    },
    FieldSpec {
        name: "date: ",
        field: Field::DueDate,
    },
];

pub const CATEGORY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title: ",
        field: Field::Title,
    },
    FieldSpec {
        name: "colour: ",
        field: Field::Color,
    },
];

impl Chain {
    /// The editable fields of a node, in display order
    pub fn fields(&self, id: NodeId) -> &'static [FieldSpec] {
        if self.node(id).is_category() {
            CATEGORY_FIELDS
        } else {
            ITEM_FIELDS
        }
    }

    /// Validate `raw` for `field` and store it on the node.
    ///
    /// `today` anchors the relative date forms.
    pub fn set_field(
        &mut self,
        id: NodeId,
        field: Field,
        raw: &str,
        today: NaiveDate,
    ) -> Result<(), FieldError> {
        let result = self.apply_field(id, field, raw, today);
        if let Err(e) = &result {
            debug!(%id, ?field, input = raw, error = %e, "rejected edit");
        }
        result
    }

    fn apply_field(
        &mut self,
        id: NodeId,
        field: Field,
        raw: &str,
        today: NaiveDate,
    ) -> Result<(), FieldError> {
        match (&mut self.node_mut(id).kind, field) {
            (NodeKind::Item(item), Field::Title) => item.title = raw.to_string(),
            (NodeKind::Item(item), Field::Note) => item.note = raw.to_string(),
            (NodeKind::Item(item), Field::DueDate) => {
                if let Some(date) = parse_due_date(raw, today)? {
                    item.due = Some(date);
                }
            }
            (NodeKind::Category(cat), Field::Title) => cat.title = raw.to_string(),
            (NodeKind::Category(cat), Field::Color) => {
                if let Some(color) = parse_color(raw)? {
                    cat.color = color;
                }
            }
            _ => return Err(FieldError::NotApplicable),
        }
        Ok(())
    }
}

/// Parse a category color.
///
/// - 3 characters: an 8-bit ANSI index, kept raw (`"042"`)
/// - 6 characters: a hex RGB triple, stored as `#rrggbb`
/// - any other length: accepted, but `Ok(None)` leaves the color as it was
pub fn parse_color(raw: &str) -> Result<Option<CategoryColor>, FieldError> {
    match raw.len() {
        3 => {
            raw.parse::<i64>()
                .map_err(|_| FieldError::InvalidAnsiColor(raw.to_string()))?;
            Ok(Some(CategoryColor(raw.to_string())))
        }
        6 => {
            if !raw.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(FieldError::InvalidHexColor(raw.to_string()));
            }
            Ok(Some(CategoryColor(format!("#{}", raw))))
        }
        _ => Ok(None),
    }
}

/// Parse a due date relative to `today`.
///
/// - `+n`: n days from today
/// - `dd`: that day of the current month; fails if it has already passed
/// - `dd/mm`: that day in the current year
/// - `dd/mm/yy`: fully explicit
/// - any other length: accepted, but `Ok(None)` leaves the date as it was
pub fn parse_due_date(raw: &str, today: NaiveDate) -> Result<Option<NaiveDate>, FieldError> {
    match raw.len() {
        2 => {
            if let Some(count) = raw.strip_prefix('+') {
                let days: u64 = count
                    .parse()
                    .map_err(|_| FieldError::InvalidDayCount(raw.to_string()))?;
                return add_days(today, days, raw).map(Some);
            }
            let day: i64 = raw
                .parse()
                .map_err(|_| FieldError::InvalidDayCount(raw.to_string()))?;
            let offset = day - i64::from(today.day());
            if offset < 0 {
                return Err(FieldError::DayPassed(day.max(0) as u32));
            }
            // Days past the end of the month roll into the next one
            add_days(today, offset as u64, raw).map(Some)
        }
        5 => {
            let with_year = format!("{}/{}", raw, today.year());
            NaiveDate::parse_from_str(&with_year, "%d/%m/%Y")
                .map(Some)
                .map_err(|_| FieldError::InvalidDate(raw.to_string()))
        }
        8 => NaiveDate::parse_from_str(raw, "%d/%m/%y")
            .map(Some)
            .map_err(|_| FieldError::InvalidDate(raw.to_string())),
        _ => Ok(None),
    }
}

fn add_days(date: NaiveDate, days: u64, raw: &str) -> Result<NaiveDate, FieldError> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| FieldError::InvalidDate(raw.to_string()))
}
