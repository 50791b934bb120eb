use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Upstream (ClickUp) shapes. Every field is optional and a field of the
// wrong JSON type reads as absent, so one odd task never sinks the batch.

#[derive(Debug, Default, Deserialize)]
pub struct RawTask {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<RawStatus>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub assignees: Vec<RawAssignee>,
    /// Milliseconds, as a number or a numeric string.
    #[serde(default)]
    pub time_estimate: Option<Value>,
    /// Milliseconds, as a number or a numeric string.
    #[serde(default)]
    pub time_spent: Option<Value>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub custom_fields: Vec<RawCustomField>,
    /// Unix milliseconds, usually sent as a string.
    #[serde(default)]
    pub due_date: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawStatus {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAssignee {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<AssigneeId>,
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCustomField {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Opaque assignee identifier. ClickUp sends integers, but strings are
/// accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssigneeId {
    Number(i64),
    Text(String),
}

impl AssigneeId {
    /// Zero and the empty string do not identify anybody.
    pub fn is_present(&self) -> bool {
        match self {
            AssigneeId::Number(id) => *id != 0,
            AssigneeId::Text(id) => !id.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignee {
    pub id: Option<AssigneeId>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTask {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub status_color: Option<String>,
    pub assignees: Vec<Assignee>,
    pub time_estimate_hours: Option<f64>,
    pub time_spent_hours: Option<f64>,
    pub points: Option<f64>,
    pub due_date: Option<i64>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperSummary {
    pub id: AssigneeId,
    pub username: Option<String>,
    pub email: Option<String>,
    pub color: Option<String>,
    pub task_count: u64,
    pub total_estimate_hours: f64,
    pub total_tracked_hours: f64,
    pub total_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_tasks: usize,
    pub total_estimate_hours: f64,
    pub total_tracked_hours: f64,
    pub total_points: f64,
    pub developers: Vec<DeveloperSummary>,
    pub generated_at: String,
}

/// Body of a successful `GET /api/tasks`.
#[derive(Debug, Serialize)]
pub struct TaskReport {
    pub tasks: Vec<NormalizedTask>,
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_task_tolerates_wrong_field_types() {
        let task: RawTask = serde_json::from_value(json!({
            "id": "abc",
            "name": 17,
            "status": "open",
            "assignees": [{"id": 1, "username": "ana"}, null, {"id": {"nested": true}}],
            "custom_fields": {"not": "a list"},
            "url": null
        }))
        .unwrap();

        assert_eq!(task.id.as_deref(), Some("abc"));
        assert!(task.name.is_none());
        assert!(task.status.is_none());
        assert_eq!(task.assignees.len(), 2);
        assert_eq!(task.assignees[0].id, Some(AssigneeId::Number(1)));
        assert!(task.assignees[1].id.is_none());
        assert!(task.custom_fields.is_empty());
        assert!(task.url.is_none());
    }

    #[test]
    fn raw_task_from_non_object_fails() {
        assert!(serde_json::from_value::<RawTask>(Value::Null).is_err());
    }

    #[test]
    fn assignee_id_keeps_its_wire_form() {
        let number: AssigneeId = serde_json::from_value(json!(42)).unwrap();
        let text: AssigneeId = serde_json::from_value(json!("u-42")).unwrap();
        assert_eq!(serde_json::to_value(&number).unwrap(), json!(42));
        assert_eq!(serde_json::to_value(&text).unwrap(), json!("u-42"));
        assert!(!AssigneeId::Number(0).is_present());
        assert!(!AssigneeId::Text(String::new()).is_present());
    }

    #[test]
    fn normalized_task_serializes_camel_case_with_nulls() {
        let task = NormalizedTask {
            id: Some("t1".to_string()),
            name: Some("Write docs".to_string()),
            status: None,
            status_color: None,
            assignees: Vec::new(),
            time_estimate_hours: Some(1.5),
            time_spent_hours: None,
            points: None,
            due_date: Some(1_700_000_000_000),
            url: None,
        };
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({
                "id": "t1",
                "name": "Write docs",
                "status": null,
                "statusColor": null,
                "assignees": [],
                "timeEstimateHours": 1.5,
                "timeSpentHours": null,
                "points": null,
                "dueDate": 1_700_000_000_000i64,
                "url": null
            })
        );
    }
}
