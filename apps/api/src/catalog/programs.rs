//! Program filter: keyword-scored retrieval over the women-focused program catalog.
//!
//! Algorithm:
//! 1. Optional category gate.
//! 2. Haystack = lowercase `summary focus good_for`.
//! 3. Score = distinct interest tokens found in the haystack,
//!    +1 if the education level is found in the haystack.
//! 4. Keep score > 0; if nothing survives and a category was asked for,
//!    list that whole category unranked instead.
//! 5. Stable sort by score, descending.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Shown when there is nothing to list.
pub const EMPTY_PROGRAMS_MESSAGE: &str = "No women-focused opportunities available right now. \
    You can still ask HerPath Mentor for general guidance.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub name: String,
    #[serde(default)]
    pub who: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub activities: String,
    #[serde(default)]
    pub good_for: String,
    pub category: Category,
    #[serde(default)]
    pub link: Option<String>,
}

impl ProgramRecord {
    /// Lowercase text the interest tokens are matched against.
    pub fn haystack(&self) -> String {
        format!("{} {} {}", self.summary, self.focus, self.good_for).to_lowercase()
    }
}

/// Ranks `catalog` against free-text interests and an education level.
///
/// Returns borrowed records; the catalog itself is never copied or mutated.
pub fn filter_programs<'a>(
    catalog: &'a [ProgramRecord],
    interests: &str,
    education_level: &str,
    category: Option<Category>,
) -> Vec<&'a ProgramRecord> {
    let interests_lower = interests.to_lowercase();
    let mut tokens: Vec<&str> = Vec::new();
    for token in interests_lower.split_whitespace() {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    let education_lower = education_level.to_lowercase();

    let mut scored: Vec<(usize, &ProgramRecord)> = catalog
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .filter_map(|p| {
            let score = score_program(p, &tokens, &education_lower);
            (score > 0).then_some((score, p))
        })
        .collect();

    if scored.is_empty() {
        if let Some(category) = category {
            return catalog.iter().filter(|p| p.category == category).collect();
        }
    }

    // sort_by is stable: equal scores keep catalog order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, p)| p).collect()
}

fn score_program(program: &ProgramRecord, tokens: &[&str], education_lower: &str) -> usize {
    let haystack = program.haystack();

    let mut score = tokens.iter().filter(|t| haystack.contains(**t)).count();
    if !education_lower.is_empty() && haystack.contains(education_lower) {
        score += 1;
    }
    score
}

/// Renders programs as markdown blocks, in the order given.
pub fn format_programs_for_display(programs: &[&ProgramRecord]) -> String {
    if programs.is_empty() {
        return EMPTY_PROGRAMS_MESSAGE.to_string();
    }

    let mut lines: Vec<String> = Vec::new();

    for p in programs {
        lines.push(format!("### {}", p.name));
        lines.push(format!("**Who it's for:** {}", p.who));
        lines.push(format!("**Summary:** {}", p.summary));
        lines.push(format!("**Focus:** {}", p.focus));
        lines.push(format!("**Activities:** {}", p.activities));
        lines.push(format!("**Good for:** {}", p.good_for));

        if let Some(link) = p.link.as_deref().filter(|l| !l.is_empty()) {
            lines.push(format!("🔗 [Click here to apply or learn more]({link})"));
        }

        lines.push("\n---\n".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(name: &str, category: Category, summary: &str, focus: &str, good_for: &str) -> ProgramRecord {
        ProgramRecord {
            name: name.to_string(),
            who: "Women students".to_string(),
            summary: summary.to_string(),
            focus: focus.to_string(),
            activities: "Workshops".to_string(),
            good_for: good_for.to_string(),
            category,
            link: None,
        }
    }

    fn names(programs: &[&ProgramRecord]) -> Vec<String> {
        programs.iter().map(|p| p.name.clone()).collect()
    }

    fn catalog() -> Vec<ProgramRecord> {
        vec![
            program("Code First", Category::Tech, "Coding scholarship", "web development", "12th / inter students"),
            program("Data Women", Category::Tech, "Data science mentorship", "machine learning and data", "degree students"),
            program("Civil Prep", Category::NonTech, "Government exam coaching", "upsc preparation", "degree graduates"),
            program("Art Grant", Category::NonTech, "Fine arts grant", "painting and design", "10th students"),
        ]
    }

    #[test]
    fn test_scores_and_ranks_by_matching_tokens() {
        let kb = catalog();
        let result = filter_programs(&kb, "data machine coding", "", None);
        // Data Women matches "data" + "machine", Code First matches "coding"
        assert_eq!(names(&result), vec!["Data Women", "Code First"]);
    }

    #[test]
    fn test_education_level_adds_one_point() {
        let kb = catalog();
        // "design" hits Art Grant; "degree" hits Data Women and Civil Prep
        let result = filter_programs(&kb, "design", "Degree", None);
        assert_eq!(names(&result), vec!["Data Women", "Civil Prep", "Art Grant"]);
    }

    #[test]
    fn test_category_gate_excludes_other_track() {
        let kb = catalog();
        let result = filter_programs(&kb, "data upsc", "", Some(Category::NonTech));
        assert_eq!(names(&result), vec!["Civil Prep"]);
    }

    #[test]
    fn test_category_fallback_lists_whole_category_in_order() {
        let kb = catalog();
        let result = filter_programs(&kb, "astronomy", "", Some(Category::Tech));
        assert_eq!(names(&result), vec!["Code First", "Data Women"]);
    }

    #[test]
    fn test_empty_inputs_with_category_fall_back() {
        let kb = catalog();
        let result = filter_programs(&kb, "", "", Some(Category::NonTech));
        assert_eq!(names(&result), vec!["Civil Prep", "Art Grant"]);
    }

    #[test]
    fn test_no_category_no_match_is_empty() {
        let kb = catalog();
        assert!(filter_programs(&kb, "zzz-nomatch", "", None).is_empty());
        assert!(filter_programs(&kb, "", "", None).is_empty());
    }

    #[test]
    fn test_fallback_on_category_absent_from_catalog_is_empty() {
        let kb = vec![program("Only Tech", Category::Tech, "coding", "", "")];
        assert!(filter_programs(&kb, "painting", "", Some(Category::NonTech)).is_empty());
    }

    #[test]
    fn test_empty_catalog_is_empty() {
        assert!(filter_programs(&[], "data", "Degree", Some(Category::Tech)).is_empty());
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let kb = vec![
            program("First", Category::Tech, "python course", "", ""),
            program("Second", Category::Tech, "rust and python", "", ""),
            program("Third", Category::Tech, "python bootcamp", "", ""),
        ];
        let result = filter_programs(&kb, "python", "", None);
        assert_eq!(names(&result), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_extra_matching_token_never_lowers_rank() {
        let base = vec![
            program("Alpha", Category::Tech, "python", "", ""),
            program("Beta", Category::Tech, "python", "", ""),
        ];
        let before = filter_programs(&base, "python sql", "", None);
        let beta_before = before.iter().position(|p| p.name == "Beta").unwrap();

        let boosted = vec![
            program("Alpha", Category::Tech, "python", "", ""),
            program("Beta", Category::Tech, "python", "sql", ""),
        ];
        let after = filter_programs(&boosted, "python sql", "", None);
        let beta_after = after.iter().position(|p| p.name == "Beta").unwrap();

        assert!(beta_after <= beta_before);
        assert_eq!(beta_after, 0);
    }

    #[test]
    fn test_repeated_token_counts_once() {
        let kb = vec![
            program("Repeat", Category::Tech, "data", "", ""),
            program("Both", Category::Tech, "data", "ai", ""),
        ];
        let result = filter_programs(&kb, "data data data ai", "", None);
        assert_eq!(names(&result), vec!["Both", "Repeat"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let kb = vec![program("Caps", Category::Tech, "MACHINE Learning", "", "")];
        assert_eq!(filter_programs(&kb, "Machine", "", None).len(), 1);
    }

    #[test]
    fn test_haystack_ignores_name_and_activities() {
        let kb = vec![program("Robotics Club", Category::Tech, "after school", "", "")];
        assert!(filter_programs(&kb, "robotics workshops", "", None).is_empty());
    }

    #[test]
    fn test_format_empty_shows_message() {
        assert_eq!(format_programs_for_display(&[]), EMPTY_PROGRAMS_MESSAGE);
    }

    #[test]
    fn test_format_renders_blocks_in_order_with_link() {
        let mut first = program("Code First", Category::Tech, "Coding", "web", "all");
        first.link = Some("https://codefirst.example".to_string());
        let second = program("Art Grant", Category::NonTech, "Arts", "design", "10th");

        let text = format_programs_for_display(&[&first, &second]);

        assert!(text.starts_with("### Code First\n**Who it's for:** Women students"));
        assert!(text.contains("🔗 [Click here to apply or learn more](https://codefirst.example)"));
        assert_eq!(text.matches("[Click here").count(), 1);
        assert!(text.find("### Code First").unwrap() < text.find("### Art Grant").unwrap());
        assert_eq!(text.matches("\n---\n").count(), 2);
    }

    #[test]
    fn test_format_skips_blank_link() {
        let mut p = program("No Link", Category::Tech, "", "", "");
        p.link = Some(String::new());
        assert!(!format_programs_for_display(&[&p]).contains("Click here"));
    }
}
