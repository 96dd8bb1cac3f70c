//! Static knowledge base for career skill suggestions and prerequisites.
//!
//! Table order is load-bearing: career matching takes the first bucket that
//! matches (see [`crate::suggest`]), and prerequisite conflicts are emitted
//! in the order the rules are declared here.

use skillpilot_types::{Priority, SkillSuggestion};

/// A knowledge-base suggestion entry. Converted to an owned
/// [`SkillSuggestion`] when returned to callers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SuggestionEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub estimated_weeks: u32,
    pub priority: Priority,
    pub reason: &'static str,
}

impl SuggestionEntry {
    pub(crate) fn to_suggestion(self) -> SkillSuggestion {
        SkillSuggestion {
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            estimated_weeks: self.estimated_weeks,
            priority: self.priority,
            reason: self.reason.to_string(),
        }
    }
}

const FRONTEND_DEVELOPER: &[SuggestionEntry] = &[
    SuggestionEntry {
        name: "HTML & CSS",
        description: "Core web markup and styling",
        category: "Web Fundamentals",
        estimated_weeks: 4,
        priority: Priority::High,
        reason: "Foundation for all web development",
    },
    SuggestionEntry {
        name: "JavaScript",
        description: "Core programming language for the web",
        category: "Programming",
        estimated_weeks: 8,
        priority: Priority::High,
        reason: "Essential for interactive web applications",
    },
    SuggestionEntry {
        name: "React",
        description: "Popular UI library for building interfaces",
        category: "Frameworks",
        estimated_weeks: 6,
        priority: Priority::High,
        reason: "Most in-demand frontend framework",
    },
    SuggestionEntry {
        name: "TypeScript",
        description: "Typed JavaScript for better code quality",
        category: "Programming",
        estimated_weeks: 4,
        priority: Priority::Medium,
        reason: "Industry standard for larger projects",
    },
    SuggestionEntry {
        name: "Next.js",
        description: "React framework for production",
        category: "Frameworks",
        estimated_weeks: 4,
        priority: Priority::Medium,
        reason: "Full-stack React capabilities",
    },
    SuggestionEntry {
        name: "CSS Frameworks",
        description: "Tailwind, Bootstrap, etc.",
        category: "Styling",
        estimated_weeks: 2,
        priority: Priority::Low,
        reason: "Faster styling workflow",
    },
];

const BACKEND_DEVELOPER: &[SuggestionEntry] = &[
    SuggestionEntry {
        name: "Node.js",
        description: "JavaScript runtime for servers",
        category: "Runtime",
        estimated_weeks: 6,
        priority: Priority::High,
        reason: "Popular backend runtime",
    },
    SuggestionEntry {
        name: "Databases",
        description: "SQL and NoSQL databases",
        category: "Data",
        estimated_weeks: 6,
        priority: Priority::High,
        reason: "Essential for data persistence",
    },
    SuggestionEntry {
        name: "REST APIs",
        description: "Design and build RESTful services",
        category: "Architecture",
        estimated_weeks: 4,
        priority: Priority::High,
        reason: "Standard API architecture",
    },
    SuggestionEntry {
        name: "Authentication",
        description: "OAuth, JWT, sessions",
        category: "Security",
        estimated_weeks: 3,
        priority: Priority::High,
        reason: "Critical for secure applications",
    },
    SuggestionEntry {
        name: "Docker",
        description: "Containerization platform",
        category: "DevOps",
        estimated_weeks: 3,
        priority: Priority::Medium,
        reason: "Industry standard deployment",
    },
];

const DATA_SCIENTIST: &[SuggestionEntry] = &[
    SuggestionEntry {
        name: "Python",
        description: "Primary language for data science",
        category: "Programming",
        estimated_weeks: 8,
        priority: Priority::High,
        reason: "Most used language in data science",
    },
    SuggestionEntry {
        name: "Statistics",
        description: "Statistical analysis fundamentals",
        category: "Math",
        estimated_weeks: 6,
        priority: Priority::High,
        reason: "Foundation for data analysis",
    },
    SuggestionEntry {
        name: "Machine Learning",
        description: "ML algorithms and models",
        category: "AI/ML",
        estimated_weeks: 10,
        priority: Priority::High,
        reason: "Core skill for data scientists",
    },
    SuggestionEntry {
        name: "SQL",
        description: "Database querying",
        category: "Data",
        estimated_weeks: 4,
        priority: Priority::High,
        reason: "Essential for data retrieval",
    },
    SuggestionEntry {
        name: "Data Visualization",
        description: "Charts, dashboards, storytelling",
        category: "Visualization",
        estimated_weeks: 4,
        priority: Priority::Medium,
        reason: "Communicate insights effectively",
    },
];

const FULL_STACK_DEVELOPER: &[SuggestionEntry] = &[
    SuggestionEntry {
        name: "HTML & CSS",
        description: "Core web markup and styling",
        category: "Web Fundamentals",
        estimated_weeks: 4,
        priority: Priority::High,
        reason: "Foundation for all web development",
    },
    SuggestionEntry {
        name: "JavaScript",
        description: "Core programming language for the web",
        category: "Programming",
        estimated_weeks: 8,
        priority: Priority::High,
        reason: "Essential for both frontend and backend",
    },
    SuggestionEntry {
        name: "React",
        description: "Popular UI library",
        category: "Frontend",
        estimated_weeks: 6,
        priority: Priority::High,
        reason: "Most in-demand frontend framework",
    },
    SuggestionEntry {
        name: "Node.js",
        description: "JavaScript runtime for servers",
        category: "Backend",
        estimated_weeks: 6,
        priority: Priority::High,
        reason: "Use JS for full stack",
    },
    SuggestionEntry {
        name: "Databases",
        description: "SQL and NoSQL",
        category: "Data",
        estimated_weeks: 6,
        priority: Priority::High,
        reason: "Essential for data persistence",
    },
    SuggestionEntry {
        name: "Git",
        description: "Version control",
        category: "Tools",
        estimated_weeks: 2,
        priority: Priority::High,
        reason: "Industry standard for collaboration",
    },
];

/// Career buckets in matching order.
pub(crate) const KNOWLEDGE_BASE: &[(&str, &[SuggestionEntry])] = &[
    ("Frontend Developer", FRONTEND_DEVELOPER),
    ("Backend Developer", BACKEND_DEVELOPER),
    ("Data Scientist", DATA_SCIENTIST),
    ("Full Stack Developer", FULL_STACK_DEVELOPER),
];

/// Bucket used when no career title matches.
pub(crate) const DEFAULT_CAREER: &str = "Full Stack Developer";

/// The default suggestion bucket. Empty if the default career is ever
/// removed from the table, so callers degrade to no suggestions rather
/// than panicking.
pub(crate) fn default_bucket() -> &'static [SuggestionEntry] {
    KNOWLEDGE_BASE
        .iter()
        .find(|(career, _)| *career == DEFAULT_CAREER)
        .map(|(_, entries)| *entries)
        .unwrap_or(&[])
}

/// Prerequisite rules, keyed by lowercase skill name, in emission order.
pub(crate) const PREREQUISITES: &[(&str, &[&str])] = &[
    ("react", &["javascript", "html & css"]),
    ("next.js", &["react", "javascript"]),
    ("machine learning", &["python", "statistics"]),
    ("node.js", &["javascript"]),
    ("typescript", &["javascript"]),
];
