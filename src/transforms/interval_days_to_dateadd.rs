//! Transform `CURRENT_TIMESTAMP - INTERVAL 'N days'` into `DATEADD`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Transform;

static INTERVAL_DAYS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"CURRENT_TIMESTAMP - INTERVAL '(\d+) days?'").unwrap());

/// Transform `CURRENT_TIMESTAMP - INTERVAL 'N days'` (or `'N day'`) into
/// `DATEADD(day, -N, GETDATE())`.
pub struct IntervalDaysToDateadd;

impl Transform for IntervalDaysToDateadd {
    fn name(&self) -> &'static str {
        "IntervalDaysToDateadd"
    }

    fn transform<'sql>(&self, sql: &'sql str, _database: &str) -> Cow<'sql, str> {
        INTERVAL_DAYS_RE.replace_all(sql, "DATEADD(day, -${1}, GETDATE())")
    }
}
