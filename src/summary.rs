use crate::models::*;
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use itertools::Itertools;

pub fn compute_summary(tasks: &[NormalizedTask]) -> Summary {
    compute_summary_at(tasks, Utc::now())
}

/// Rolls tasks up into grand totals and a per-developer breakdown.
///
/// Every assignee of a task is credited with the task's full hours and
/// points. Developers are ordered by points, then task count, then first
/// appearance.
pub fn compute_summary_at(tasks: &[NormalizedTask], generated_at: DateTime<Utc>) -> Summary {
    let mut developers: IndexMap<AssigneeId, DeveloperSummary> = IndexMap::new();
    let mut total_estimate_hours = 0.0;
    let mut total_tracked_hours = 0.0;
    let mut total_points = 0.0;

    for task in tasks {
        let estimate = task.time_estimate_hours.unwrap_or(0.0);
        let tracked = task.time_spent_hours.unwrap_or(0.0);

        total_estimate_hours += estimate;
        total_tracked_hours += tracked;
        if let Some(points) = task.points {
            total_points += points;
        }

        for assignee in &task.assignees {
            let Some(id) = assignee.id.as_ref().filter(|id| id.is_present()) else {
                continue;
            };

            let developer = developers
                .entry(id.clone())
                .or_insert_with(|| DeveloperSummary {
                    id: id.clone(),
                    username: non_empty(&assignee.username),
                    email: non_empty(&assignee.email),
                    color: non_empty(&assignee.color),
                    task_count: 0,
                    total_estimate_hours: 0.0,
                    total_tracked_hours: 0.0,
                    total_points: 0.0,
                });

            developer.task_count += 1;
            developer.total_estimate_hours += estimate;
            developer.total_tracked_hours += tracked;
            if let Some(points) = task.points {
                developer.total_points += points;
            }
        }
    }

    Summary {
        total_tasks: tasks.len(),
        total_estimate_hours,
        total_tracked_hours,
        total_points,
        developers: developers
            .into_values()
            .sorted_by(|a, b| {
                a.total_points
                    .total_cmp(&b.total_points)
                    .then(a.task_count.cmp(&b.task_count))
            })
            .collect(),
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|value| !value.is_empty()).cloned()
}
