//! College matcher: filters the college catalog by a structured roadmap.
//!
//! No scoring here: a college either passes both the keyword and the budget
//! check or it is dropped, and survivors keep catalog order.

use serde::{Deserialize, Serialize};

use crate::catalog::Budget;
use crate::roadmap::StructuredRoadmap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeRecord {
    pub name: String,
    pub course: String,
    pub budget: Budget,
    #[serde(default)]
    pub link: String,
}

/// Colleges whose course mentions any roadmap keyword and whose fee tier
/// equals the roadmap's budget preference.
///
/// An empty keyword list or an absent budget preference disables that check.
/// A preference naming no fee tier excludes every college.
/// A missing roadmap matches nothing.
pub fn match_colleges<'a>(
    catalog: &'a [CollegeRecord],
    roadmap: Option<&StructuredRoadmap>,
) -> Vec<&'a CollegeRecord> {
    let Some(roadmap) = roadmap else {
        return Vec::new();
    };

    let keywords: Vec<String> = roadmap
        .college_keywords
        .iter()
        .map(|k| k.to_lowercase())
        .collect();

    catalog
        .iter()
        .filter(|college| {
            if keywords.is_empty() {
                return true;
            }
            let course = college.course.to_lowercase();
            keywords.iter().any(|k| course.contains(k.as_str()))
        })
        .filter(|college| {
            roadmap
                .budget_preference
                .as_ref()
                .map_or(true, |preference| preference.admits(college.budget))
        })
        .collect()
}

/// Knowledge-base context handed to the guidance prompt. Empty when nothing matched.
pub fn format_colleges_for_context(colleges: &[&CollegeRecord]) -> String {
    if colleges.is_empty() {
        return String::new();
    }

    let mut lines = vec!["Some example colleges or training places you could search for:".to_string()];
    for c in colleges {
        lines.push(format!("- {} ({}) – approx budget: {}", c.name, c.course, c.budget));
        lines.push(format!("  Link: {}", c.link));
    }
    lines.join("\n")
}
