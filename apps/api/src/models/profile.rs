use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Where the user currently is in her studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    Tenth,
    TwelfthInter,
    Degree,
    Working,
}

impl EducationLevel {
    /// The label users pick and the text matched against program haystacks.
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Tenth => "10th",
            EducationLevel::TwelfthInter => "12th / Inter",
            EducationLevel::Degree => "Degree",
            EducationLevel::Working => "Working",
        }
    }
}

impl FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "10th" => Ok(EducationLevel::Tenth),
            "12th / inter" | "12th" | "inter" => Ok(EducationLevel::TwelfthInter),
            "degree" => Ok(EducationLevel::Degree),
            "working" => Ok(EducationLevel::Working),
            _ => Err(format!(
                "unknown education level '{s}' (expected 10th, 12th / Inter, Degree or Working)"
            )),
        }
    }
}

/// How much the family can spend on education.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinancialConstraint {
    LowBudget,
    Moderate,
    HigherFees,
}

impl FinancialConstraint {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinancialConstraint::LowBudget => "Need low-budget options",
            FinancialConstraint::Moderate => "Moderate",
            FinancialConstraint::HigherFees => "Can afford higher fees",
        }
    }
}

impl FromStr for FinancialConstraint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "need low-budget options" | "low" => Ok(FinancialConstraint::LowBudget),
            "moderate" | "medium" => Ok(FinancialConstraint::Moderate),
            "can afford higher fees" | "high" => Ok(FinancialConstraint::HigherFees),
            _ => Err(format!("unknown financial situation '{s}'")),
        }
    }
}

macro_rules! label_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

label_serde!(EducationLevel);
label_serde!(FinancialConstraint);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Other,
}

/// The user's profile. Every field is optional free text or an optional enum;
/// an empty profile is the starting state, not fake defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// 0 means not set.
    pub age: u32,
    #[serde(deserialize_with = "empty_as_none")]
    pub education_level: Option<EducationLevel>,
    pub interests: String,
    pub location: String,
    #[serde(deserialize_with = "empty_as_none")]
    pub financial_constraint: Option<FinancialConstraint>,
    pub goals: String,
    pub college: String,
    pub degree: String,
    pub branch: String,
    pub cgpa: String,
    pub experience_summary: String,
    pub projects_summary: String,
    pub skills_summary: String,
    pub certifications_summary: String,
    pub extra_summary: String,
}

impl Profile {
    pub const MIN_AGE: u32 = 10;
    pub const MAX_AGE: u32 = 60;

    pub fn validate(&self) -> Result<(), String> {
        if self.age != 0 && !(Self::MIN_AGE..=Self::MAX_AGE).contains(&self.age) {
            return Err(format!(
                "age must be between {} and {}",
                Self::MIN_AGE,
                Self::MAX_AGE
            ));
        }
        Ok(())
    }

    /// Education level as filter input; empty when unset.
    pub fn education_label(&self) -> &'static str {
        self.education_level.map_or("", |e| e.as_str())
    }

    pub fn financial_label(&self) -> &'static str {
        self.financial_constraint.map_or("", |f| f.as_str())
    }

    pub fn age_label(&self) -> String {
        if self.age == 0 {
            "Not set".to_string()
        } else {
            self.age.to_string()
        }
    }
}

/// Prompt-friendly rendering of an optional text field.
pub fn or_not_set(value: &str) -> &str {
    if value.trim().is_empty() {
        "Not set"
    } else {
        value
    }
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = String>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}
