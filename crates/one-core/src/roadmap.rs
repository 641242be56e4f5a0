use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Roadmap
// ---------------------------------------------------------------------------

/// A plan returned by the external suggestion service, stored verbatim.
/// The store does not validate or reshape the payload beyond defaulting
/// absent fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub objective_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub milestones: Vec<RoadmapMilestone>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub stored_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapMilestone {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The wire shape of a roadmap as the suggestion service returns it:
/// everything optional, no objective binding yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoadmapPayload {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub milestones: Vec<RoadmapMilestone>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_payload_deserializes_with_defaults() {
        // Only a title per milestone, everything else absent: the shape a
        // suggestion API actually returns.
        let json = format!(
            r#"{{
                "objective_id": "{}",
                "milestones": [{{"title": "first draft"}}],
                "stored_at": "2026-01-01T00:00:00Z"
            }}"#,
            Uuid::new_v4()
        );
        let r: Roadmap = serde_json::from_str(&json).unwrap();
        assert!(r.summary.is_none());
        assert_eq!(r.milestones.len(), 1);
        assert!(r.milestones[0].target_date.is_none());
        assert!(r.risks.is_empty());
        assert!(r.recommendations.is_empty());
    }
}
