//! Input validation helpers
//!
//! Field rules live on the payload types (`validator` derives); these
//! helpers run them and cover the rules that span several fields.

use chrono::{DateTime, Utc};
use shared::{AppError, AppResult, ErrorCode};
use validator::Validate;

/// Run the payload's field rules, aggregating every failure into one error
pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate().map_err(AppError::from)
}

/// Unwrap a field that the payload rules already marked as required
pub fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| {
        AppError::validation(format!("{field} is required")).with_detail("fields", vec![field])
    })
}

/// A menu validity window may only be (re)set while it is running
/// (`start < now < end`). The rule applies only when both bounds are
/// supplied; a lone bound is ignored by the update.
pub fn validate_menu_window(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> AppResult<()> {
    match (start, end) {
        (Some(start), Some(end)) if !(start < now && now < end) => {
            Err(AppError::new(ErrorCode::MenuPeriodInvalid)
                .with_detail("fields", vec!["start_date", "end_date"]))
        }
        _ => Ok(()),
    }
}
