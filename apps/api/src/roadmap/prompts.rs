// Prompt text for structured roadmap generation.

use crate::models::profile::{or_not_set, Profile};

/// System prompt for roadmap generation. The request also sets the JSON-only
/// response format flag.
pub const ROADMAP_SYSTEM: &str = "You are a structured JSON generator for career roadmaps.";

/// Roadmap prompt template.
/// Replace: {age}, {education_level}, {interests}, {location},
///          {financial_constraint}, {goals}, {user_input}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are an AI career architect for girls and young women in India.

Generate a structured career roadmap in STRICT JSON format.
Return ONLY valid JSON. No explanation. No markdown.

Profile:
- Age: {age}
- Education: {education_level}
- Interests: {interests}
- Location: {location}
- Financial constraint: {financial_constraint}
- Goals: {goals}

User message:
"""{user_input}"""

Output JSON format:

{
  "career_path": "short title like 'B.Tech in CSE then ML engineer' or 'BA then civil services'",
  "current_stage": "where she is now (e.g., 10th, 12th, degree, working, etc.)",
  "next_stages": [
    {
      "title": "stage name",
      "description": "1-3 sentence description of this stage",
      "entrance_exams": ["example exam 1", "example exam 2"]
    }
  ],
  "college_keywords": ["engineering", "arts", "medical", "dance", "law"],
  "budget_preference": "low"
}

budget_preference must be one of "low", "medium" or "high"."#;

pub fn build_roadmap_prompt(profile: &Profile, user_input: &str) -> String {
    // user_input goes last so placeholders typed by the user are left alone
    ROADMAP_PROMPT_TEMPLATE
        .replace("{age}", &profile.age_label())
        .replace("{education_level}", or_not_set(profile.education_label()))
        .replace("{interests}", or_not_set(&profile.interests))
        .replace("{location}", or_not_set(&profile.location))
        .replace("{financial_constraint}", or_not_set(profile.financial_label()))
        .replace("{goals}", or_not_set(&profile.goals))
        .replace("{user_input}", user_input)
}
