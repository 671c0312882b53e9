//! Domain core for the fitness-club page: the exercise-plan wire types
//! exchanged with the recommendations endpoint and the pure formatting
//! rules the UI renders from. No DOM or framework types live here.

use serde::{Deserialize, Serialize};

/// Metrics submitted by the user, serialized as the POST body.
///
/// Unparseable weight/height inputs arrive here as NaN; serde_json emits
/// those as `null`, which the server rejects with a field error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRequest {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub goal: String,
}

/// Top-level envelope returned by the endpoint.
///
/// `success: true` carries `data`; `success: false` carries `error`.
/// Both payload fields are optional on the wire so a malformed envelope
/// still deserializes and can be rejected explicitly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<PlanData>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Successful payload: the user's computed BMI plus the weekly plan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanData {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmi: f64,
    pub category: String,
    pub plan: ExercisePlan,
    #[serde(default)]
    pub disclaimer: Option<String>,
}

/// A weekly exercise plan as produced by the recommendation engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExercisePlan {
    pub category: String,
    pub focus: String,
    pub weekly_frequency: String,
    pub weekly_plan: Vec<DayPlan>,
    #[serde(default)]
    pub nutrition_focus: Option<String>,
    #[serde(default)]
    pub important_notes: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DayPlan {
    pub day: String,
    pub focus: String,
    pub exercises: Vec<Exercise>,
}

/// A single exercise entry. Sets/reps/duration are each optional and
/// independent of one another.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

/// Format the detail fragments that follow an exercise name:
/// ` - N sets`, then ` x REPS`, then ` (DURATION)`, each appended only
/// when present, in that fixed order.
///
/// `sets == 0` and empty reps/duration strings count as absent, matching
/// how the server omits them.
pub fn exercise_detail(exercise: &Exercise) -> String {
    let mut out = String::new();
    if let Some(sets) = exercise.sets.filter(|&s| s > 0) {
        out.push_str(&format!(" - {} sets", sets));
    }
    if let Some(reps) = exercise.reps.as_deref().filter(|r| !r.is_empty()) {
        out.push_str(&format!(" x {}", reps));
    }
    if let Some(duration) = exercise.duration.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!(" ({})", duration));
    }
    out
}
