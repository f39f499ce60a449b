use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::catalog::Budget;

/// One step of a roadmap, e.g. "Class 12 with PCM".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStage {
    /// `None` when the model left it out or sent `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entrance_exams: Vec<String>,
}

/// The roadmap object the model is asked to produce.
///
/// Every field is optional on the wire. Missing or `null` fields take their
/// default. A blank budget preference is absent; any other value is kept, even
/// when it names no fee tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredRoadmap {
    #[serde(default, deserialize_with = "null_as_default")]
    pub career_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_stage: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub next_stages: Vec<RoadmapStage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub college_keywords: Vec<String>,
    #[serde(default, deserialize_with = "lenient_budget")]
    pub budget_preference: Option<BudgetPreference>,
}

/// Budget preference as the model stated it.
///
/// `Unrecognized` holds a non-blank value that is not low/medium/high, trimmed
/// and lowercased. No fee tier equals it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetPreference {
    Tier(Budget),
    Unrecognized(String),
}

impl BudgetPreference {
    /// Whether a college in fee tier `budget` satisfies this preference.
    pub fn admits(&self, budget: Budget) -> bool {
        match self {
            BudgetPreference::Tier(tier) => *tier == budget,
            BudgetPreference::Unrecognized(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BudgetPreference::Tier(tier) => tier.as_str(),
            BudgetPreference::Unrecognized(raw) => raw,
        }
    }
}

impl Serialize for BudgetPreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Display form of a stage, numbered from 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageCard {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub exams_text: Option<String>,
}

impl StructuredRoadmap {
    pub fn stage_cards(&self) -> Vec<StageCard> {
        self.next_stages
            .iter()
            .enumerate()
            .map(|(i, stage)| {
                let index = i + 1;
                let title = stage
                    .title
                    .clone()
                    .unwrap_or_else(|| format!("Stage {index}"));
                let exams_text = (!stage.entrance_exams.is_empty())
                    .then(|| format!("Entrance exams: {}", stage.entrance_exams.join(", ")));
                StageCard {
                    index,
                    title,
                    description: stage.description.clone(),
                    exams_text,
                }
            })
            .collect()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_budget<'de, D>(deserializer: D) -> Result<Option<BudgetPreference>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(match trimmed.parse::<Budget>() {
        Ok(tier) => BudgetPreference::Tier(tier),
        Err(_) => BudgetPreference::Unrecognized(trimmed.to_lowercase()),
    }))
}
