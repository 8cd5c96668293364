//! Transform `CURRENT_DATE - N` into `DATEADD`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Transform;

static CURRENT_DATE_MINUS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"CURRENT_DATE - (\d+)").unwrap());

/// Transform `CURRENT_DATE - N` into
/// `DATEADD(day, -N, CAST(GETDATE() AS DATE))`. SQL Server has no
/// `CURRENT_DATE`, so we truncate `GETDATE()` to a date.
pub struct CurrentDateMinusToDateadd;

impl Transform for CurrentDateMinusToDateadd {
    fn name(&self) -> &'static str {
        "CurrentDateMinusToDateadd"
    }

    fn transform<'sql>(&self, sql: &'sql str, _database: &str) -> Cow<'sql, str> {
        CURRENT_DATE_MINUS_RE.replace_all(sql, "DATEADD(day, -${1}, CAST(GETDATE() AS DATE))")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_date_subtraction() {
        for n in ["0", "1", "7", "90"] {
            assert_eq!(
                CurrentDateMinusToDateadd.transform(&format!("CURRENT_DATE - {}", n), "db"),
                format!("DATEADD(day, -{}, CAST(GETDATE() AS DATE))", n)
            );
        }
    }

    #[test]
    fn rewrites_inside_larger_statement() {
        assert_eq!(
            CurrentDateMinusToDateadd.transform(
                "WHERE d BETWEEN CURRENT_DATE - 14 AND CURRENT_DATE - 7",
                "db"
            ),
            "WHERE d BETWEEN DATEADD(day, -14, CAST(GETDATE() AS DATE)) \
             AND DATEADD(day, -7, CAST(GETDATE() AS DATE))"
        );
    }

    #[test]
    fn bare_current_date_is_untouched() {
        let sql = "SELECT CURRENT_DATE AS today";
        assert!(matches!(
            CurrentDateMinusToDateadd.transform(sql, "db"),
            Cow::Borrowed(_)
        ));
    }
}
