use crate::models::*;
use crate::numeric::parse_finite;

const MILLISECONDS_PER_HOUR: f64 = 3_600_000.0;
const POINTS_FIELD: &str = "points";

pub fn normalize_tasks(raw_tasks: Vec<RawTask>) -> Vec<NormalizedTask> {
    raw_tasks.into_iter().map(normalize_task).collect()
}

/// Reshapes one upstream task. Malformed fields come out as `None`.
pub fn normalize_task(raw: RawTask) -> NormalizedTask {
    let (status, status_color) = match raw.status {
        Some(status) => (status.status, status.color),
        None => (None, None),
    };

    NormalizedTask {
        points: find_points(&raw.custom_fields),
        time_estimate_hours: to_hours(raw.time_estimate.as_ref()),
        time_spent_hours: to_hours(raw.time_spent.as_ref()),
        due_date: to_due_date(raw.due_date.as_ref()),
        assignees: raw
            .assignees
            .into_iter()
            .map(|assignee| Assignee {
                id: assignee.id,
                username: assignee.username,
                email: assignee.email,
                color: assignee.color,
            })
            .collect(),
        id: raw.id,
        name: raw.name,
        status,
        status_color,
        url: raw.url,
    }
}

fn to_hours(milliseconds: Option<&serde_json::Value>) -> Option<f64> {
    let hours = parse_finite(milliseconds)? / MILLISECONDS_PER_HOUR;
    hours.is_finite().then_some(hours)
}

fn find_points(custom_fields: &[RawCustomField]) -> Option<f64> {
    let field = custom_fields.iter().find(|field| {
        field
            .name
            .as_deref()
            .is_some_and(|name| name.trim().eq_ignore_ascii_case(POINTS_FIELD))
    })?;
    parse_finite(field.value.as_ref())
}

// Zero means "no due date" upstream; fractional or out-of-range
// timestamps are not dates.
fn to_due_date(value: Option<&serde_json::Value>) -> Option<i64> {
    let millis = parse_finite(value)?;
    if millis == 0.0 || millis.fract() != 0.0 || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(millis as i64)
}
