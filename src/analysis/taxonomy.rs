//! Static skill and keyword tables
//!
//! All terms are stored lowercase; matching happens against lowercased text.
//! The tables are immutable after construction and safe for concurrent reads.

/// Skill categories in declaration order, which also defines the order of
/// findings in reports.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python", "javascript", "java", "c#", "c++", "php", "ruby", "go", "rust", "swift",
            "kotlin", "typescript", "scala", "r", "matlab", "perl", "shell", "bash",
        ],
    ),
    (
        "web_frontend",
        &[
            "react", "vue", "angular", "html", "css", "sass", "less", "bootstrap", "tailwind",
            "jquery", "webpack", "vite", "next.js", "nuxt.js", "svelte",
        ],
    ),
    (
        "web_backend",
        &[
            "node.js", "express", "django", "flask", "spring", "laravel", "rails", "asp.net",
            "fastapi", "nestjs", "koa", "gin", "echo",
        ],
    ),
    (
        "databases",
        &[
            "mysql", "postgresql", "mongodb", "redis", "sqlite", "oracle", "sql server",
            "cassandra", "elasticsearch", "dynamodb", "firebase",
        ],
    ),
    (
        "cloud_devops",
        &[
            "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "gitlab ci",
            "github actions", "terraform", "ansible", "vagrant", "helm", "prometheus", "grafana",
        ],
    ),
    (
        "data_science",
        &[
            "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "keras", "matplotlib",
            "seaborn", "plotly", "jupyter", "spark", "hadoop", "tableau", "power bi",
        ],
    ),
    (
        "mobile",
        &[
            "react native", "flutter", "ionic", "xamarin", "android", "ios", "swift ui",
            "kotlin multiplatform",
        ],
    ),
    (
        "tools",
        &[
            "git", "github", "gitlab", "bitbucket", "jira", "confluence", "slack", "teams",
            "figma", "sketch", "adobe xd", "photoshop", "illustrator",
        ],
    ),
    (
        "methodologies",
        &[
            "agile", "scrum", "kanban", "lean", "devops", "ci/cd", "tdd", "bdd", "ddd",
            "microservices", "rest", "graphql", "soap",
        ],
    ),
];

/// Seniority level keywords: role titles and descriptors.
pub const JUNIOR_KEYWORDS: &[&str] = &[
    "estagiário", "trainee", "junior", "iniciante", "aprendiz", "assistente",
];

pub const PLENO_KEYWORDS: &[&str] = &[
    "pleno", "analista", "desenvolvedor", "especialista", "consultor",
];

pub const SENIOR_KEYWORDS: &[&str] = &[
    "senior", "sênior", "líder", "coordenador", "gerente", "supervisor", "tech lead", "arquiteto",
];

/// Education tier keywords, matched by substring containment.
pub const TECHNICAL_KEYWORDS: &[&str] = &["técnico", "tecnólogo"];

pub const HIGHER_KEYWORDS: &[&str] = &["bacharelado", "licenciatura", "graduação", "superior"];

pub const POSTGRADUATE_KEYWORDS: &[&str] = &[
    "pós", "especialização", "mba", "mestrado", "doutorado", "phd",
];

/// Iterate over every skill term in every category.
pub fn all_skill_terms() -> impl Iterator<Item = &'static str> {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|(_, terms)| terms.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_terms_are_lowercase() {
        for term in all_skill_terms() {
            assert_eq!(term, term.to_lowercase(), "term not lowercase: {}", term);
        }
    }

    #[test]
    fn test_category_order_is_stable() {
        let names: Vec<&str> = SKILL_CATEGORIES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names[0], "programming");
        assert_eq!(names[names.len() - 1], "methodologies");
        assert_eq!(names.len(), 9);
    }
}
