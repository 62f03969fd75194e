// src/application/admin/config.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::blog::{BlogOrdering, SearchField},
};
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminColumn {
    pub field: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct AdminConfig {
    pub list_display: &'static [AdminColumn],
    pub search_fields: &'static [SearchField],
    pub list_filter: &'static [&'static str],
    pub ordering: BlogOrdering,
}

impl AdminConfig {
    /// Ordering in `-field` notation.
    pub const fn ordering_label(&self) -> &'static str {
        match self.ordering {
            BlogOrdering::IdAsc => "id",
            BlogOrdering::CreatedAtDesc => "-created_at",
        }
    }
}

pub const BLOG_ADMIN: AdminConfig = AdminConfig {
    list_display: &[
        AdminColumn {
            field: "title",
            label: "Title",
        },
        AdminColumn {
            field: "author",
            label: "Author",
        },
        AdminColumn {
            field: "created_at",
            label: "Created at",
        },
    ],
    search_fields: &[SearchField::Title, SearchField::Author, SearchField::Content],
    list_filter: &["created_at", "author"],
    ordering: BlogOrdering::CreatedAtDesc,
};

/// Choices of the `created_at` sidebar filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    Any,
    Today,
    Past7Days,
    ThisMonth,
    ThisYear,
}

impl DateRange {
    pub const ALL: [Self; 5] = [
        Self::Any,
        Self::Today,
        Self::Past7Days,
        Self::ThisMonth,
        Self::ThisYear,
    ];

    /// `None` and blank select [`DateRange::Any`].
    pub fn parse(value: Option<&str>) -> ApplicationResult<Self> {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self::Any);
        };
        Self::ALL
            .into_iter()
            .find(|range| range.value() == Some(value) || (value == "any" && *range == Self::Any))
            .ok_or_else(|| {
                ApplicationError::validation(format!("unknown created_at filter: {value}"))
            })
    }

    pub const fn value(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Today => Some("today"),
            Self::Past7Days => Some("past_7_days"),
            Self::ThisMonth => Some("this_month"),
            Self::ThisYear => Some("this_year"),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "Any date",
            Self::Today => "Today",
            Self::Past7Days => "Past 7 days",
            Self::ThisMonth => "This month",
            Self::ThisYear => "This year",
        }
    }

    /// Half-open `[from, before)` window in UTC, or `None` for no restriction.
    pub fn bounds(self, now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start_of = |day: NaiveDate| day.and_time(NaiveTime::MIN).and_utc();
        let today = now.date_naive();
        let tomorrow = today.succ_opt()?;

        match self {
            Self::Any => None,
            Self::Today => Some((start_of(today), start_of(tomorrow))),
            Self::Past7Days => {
                let from = today.checked_sub_days(Days::new(7))?;
                Some((start_of(from), start_of(tomorrow)))
            }
            Self::ThisMonth => {
                let first = today.with_day(1)?;
                let next = if today.month() == 12 {
                    NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)?
                } else {
                    NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)?
                };
                Some((start_of(first), start_of(next)))
            }
            Self::ThisYear => {
                let first = NaiveDate::from_ymd_opt(today.year(), 1, 1)?;
                let next = NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)?;
                Some((start_of(first), start_of(next)))
            }
        }
    }
}
