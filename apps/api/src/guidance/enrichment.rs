//! Keyword-driven steering for chat prompts.
//!
//! Plain lowercase substring containment, no NLU: a question mentioning
//! "dance" gets an arts paragraph appended, "doctor" a medical one, and so on.

/// Topic a guidance question can lean towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Arts,
    Tech,
    Medical,
    Law,
    Government,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Arts,
        Topic::Tech,
        Topic::Medical,
        Topic::Law,
        Topic::Government,
    ];

    fn words(&self) -> &'static [&'static str] {
        match self {
            Topic::Arts => &[
                "art", "arts", "craft", "crafts", "dance", "sing", "singing", "design", "fashion",
                "music", "drama", "painting", "drawing",
            ],
            Topic::Tech => &[
                "engineering",
                "engineer",
                "software",
                "coding",
                "programming",
                "ml",
                "machine learning",
                "ai",
                "data science",
                "developer",
                "scientist",
                "cs",
                "computer science",
            ],
            Topic::Medical => &[
                "doctor",
                "mbbs",
                "dentist",
                "dental",
                "nurse",
                "nursing",
                "pharmacy",
                "pharmacist",
                "physiotherapist",
                "medical",
            ],
            Topic::Law => &["law", "lawyer", "advocate", "llb", "judge", "legal", "clat"],
            Topic::Government => &[
                "government job",
                "govt job",
                "group 1",
                "group 2",
                "upsc",
                "civil services",
                "ias",
                "ips",
                "ifs",
                "psc",
            ],
        }
    }

    fn focus_paragraph(&self) -> &'static str {
        match self {
            Topic::Arts => {
                "She is especially interested in arts or creative fields. \
                Talk mainly about creative courses, diplomas, degrees and careers \
                (fine arts, design, animation, fashion, music, theatre, etc.), \
                not software engineering."
            }
            Topic::Tech => {
                "She is especially interested in technology. \
                Talk mainly about engineering, computer science, data, AI/ML, and related paths. \
                Mention common entrance exams and budget-friendly options."
            }
            Topic::Medical => {
                "She is especially interested in medical fields. \
                Talk about MBBS, BDS, nursing, pharmacy, paramedical and related options, \
                with entrance exams and realistic challenges."
            }
            Topic::Law => {
                "She is especially interested in law. \
                Explain paths like 5-year integrated law after 12th, 3-year LLB after degree, \
                important exams (like CLAT), and common law careers."
            }
            Topic::Government => {
                "She is especially interested in government jobs. \
                Talk clearly about realistic paths (state PSC, UPSC, banking exams, SSC, etc.) \
                and how to prepare over multiple years from her current stage."
            }
        }
    }
}

const FRESH_ROADMAP_INSTRUCTION: &str = "You must give a fresh roadmap each time in paragraph form, not bullet points. \
    Adapt strongly to what she typed now. \
    If she mentions arts, dance, singing, crafts, design, theatre, or similar, \
    focus mainly on creative and arts paths (fine arts, design, animation, fashion, etc.). \
    If she says engineering, ML, AI, data science, coding, or similar, \
    focus mainly on tech paths. \
    Include realistic Indian examples (e.g., entrance exams, common degrees, scholarship searches) \
    and keep it budget-aware where needed.";

/// Phrases that trigger the emergency footer on a support reply.
const CRISIS_PHRASES: [&str; 5] = [
    "end my life",
    "kill myself",
    "suicide",
    "don't want to live",
    "hurt myself",
];

pub const EMERGENCY_FOOTER: &str = "\n\n⚠️ If you feel you might hurt yourself or are in immediate danger, \
    please contact local emergency services or a trusted adult right now. \
    This tool cannot handle emergencies.";

/// Topics whose word lists hit `text`, in `Topic::ALL` order.
pub fn detect_topics(text: &str) -> Vec<Topic> {
    let lowered = text.to_lowercase();
    Topic::ALL
        .into_iter()
        .filter(|topic| topic.words().iter().any(|w| lowered.contains(w)))
        .collect()
}

/// The question as sent to the guidance model: the user's words, the standing
/// paragraph-form instruction, then one focus paragraph per detected topic.
pub fn enrich_question(question: &str) -> String {
    let mut enriched = format!("User question: {question}\n\n{FRESH_ROADMAP_INSTRUCTION}");
    for topic in detect_topics(question) {
        enriched.push_str("\n\n");
        enriched.push_str(topic.focus_paragraph());
    }
    enriched
}

pub fn mentions_crisis(message: &str) -> bool {
    let lowered = message.to_lowercase();
    CRISIS_PHRASES.iter().any(|p| lowered.contains(p))
}

pub fn add_emergency_footer(reply: &str) -> String {
    format!("{reply}{EMERGENCY_FOOTER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_arts_from_dance() {
        assert_eq!(detect_topics("I love Dance and singing"), vec![Topic::Arts]);
    }

    #[test]
    fn test_detects_multiple_topics_in_fixed_order() {
        let topics = detect_topics("Should I do MBBS or CLAT for law?");
        assert_eq!(topics, vec![Topic::Medical, Topic::Law]);
    }

    #[test]
    fn test_substring_matching_is_loose() {
        // "ai" inside "again" still counts; containment only
        assert!(detect_topics("tell me again").contains(&Topic::Tech));
    }

    #[test]
    fn test_no_topics_for_unrelated_text() {
        assert!(detect_topics("hello there").is_empty());
    }

    #[test]
    fn test_enrich_appends_focus_paragraphs() {
        let enriched = enrich_question("I want to crack UPSC");
        assert!(enriched.starts_with("User question: I want to crack UPSC\n\nYou must give a fresh roadmap"));
        assert!(enriched.contains("especially interested in government jobs"));
        assert!(!enriched.contains("especially interested in law"));
    }

    #[test]
    fn test_enrich_without_topics_has_only_base_instruction() {
        let enriched = enrich_question("hello");
        assert!(!enriched.contains("especially interested"));
        assert!(enriched.ends_with("keep it budget-aware where needed."));
    }

    #[test]
    fn test_crisis_detection_is_case_insensitive() {
        assert!(mentions_crisis("Sometimes I want to END MY LIFE"));
        assert!(mentions_crisis("I don't want to live like this"));
        assert!(!mentions_crisis("I feel stressed about exams"));
    }

    #[test]
    fn test_emergency_footer_is_appended() {
        let reply = add_emergency_footer("You matter.");
        assert!(reply.starts_with("You matter.\n\n⚠️"));
        assert!(reply.ends_with("This tool cannot handle emergencies."));
    }
}
