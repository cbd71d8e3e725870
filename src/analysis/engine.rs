//! Analysis orchestrator combining all engine stages into one report

use crate::analysis::compatibility::CompatibilityScorer;
use crate::analysis::education::{Education, EducationClassifier};
use crate::analysis::experience::ExperienceEstimator;
use crate::analysis::narrative;
use crate::analysis::seniority::{Seniority, SeniorityClassifier};
use crate::analysis::skills::{SkillExtractor, SkillFindings};
use crate::analysis::taxonomy;
use crate::error::{Result, ScreenerError};
use crate::input::text_extractor::extract_text;
use aho_corasick::AhoCorasick;
use chrono::{Datelike, Local};
use log::info;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Instant;

const MAX_TOP_SKILLS: usize = 10;
const MIN_SCORE: u32 = 60;
const MAX_SCORE: u32 = 95;
const BASE_SCORE: u32 = 50;

/// Full screening report for one resume. Owned entirely by the caller; the
/// engine keeps no reference to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Overall candidate score in [60, 95]
    pub overall_score: u8,

    /// Estimated years of experience in [0, 25]
    pub experience_years: u8,

    pub seniority: Seniority,
    pub education: Education,

    /// Percentage fit against the job description, present only when one was
    /// supplied
    pub compatibility: Option<u8>,

    /// Ranked strength statements, at most 5
    pub strengths: Vec<String>,

    /// Flattened skill list in category order, at most 10
    pub top_skills: Vec<String>,

    /// Full findings grouped by taxonomy category
    pub skills_by_category: SkillFindings,

    /// Suggested interview questions, at most 5
    pub interview_questions: Vec<String>,

    pub summary: String,
    pub recommendation: String,

    /// RFC 3339 local timestamp of the analysis
    pub processed_at: String,

    pub processing_time_ms: u64,
}

/// Lightweight 0-10 assessment with a textual rationale. Independent of
/// [`AnalysisReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleAssessment {
    /// Grade in [0, 10] with one decimal place
    pub grade: f64,
    pub rationale: String,
}

/// The resume analysis engine. Stateless per call: all tables are built once
/// at construction and only read afterwards, so a single instance can serve
/// concurrent callers.
pub struct ResumeAnalyzer {
    skills: SkillExtractor,
    experience: ExperienceEstimator,
    seniority: SeniorityClassifier,
    education: EducationClassifier,
    compatibility: CompatibilityScorer,
    term_counter: AhoCorasick,
    structure_pattern: Regex,
}

impl ResumeAnalyzer {
    pub fn new() -> Self {
        Self::with_reference_year(Local::now().year())
    }

    /// Build an analyzer with a fixed reference year for open-ended date
    /// ranges ("2015 - presente").
    pub fn with_reference_year(reference_year: i32) -> Self {
        let terms: Vec<&str> = taxonomy::all_skill_terms().collect();
        let term_counter = AhoCorasick::new(&terms).expect("invalid skill term set");

        Self {
            skills: SkillExtractor::new(),
            experience: ExperienceEstimator::new(reference_year),
            seniority: SeniorityClassifier::new(),
            education: EducationClassifier::new(),
            compatibility: CompatibilityScorer::new(),
            term_counter,
            structure_pattern: Regex::new(r"\b[a-z]{3,}\s+[a-z]{3,}\b")
                .expect("invalid structure pattern"),
        }
    }

    /// Run the full pipeline over raw document bytes.
    ///
    /// Fails only when the extracted text is blank after trimming; every
    /// analysis stage is total over any string input.
    pub fn analyze(
        &self,
        bytes: &[u8],
        filename: &str,
        job_description: Option<&str>,
    ) -> Result<AnalysisReport> {
        let started = Instant::now();

        let text = extract_text(bytes, filename);
        if text.trim().is_empty() {
            return Err(ScreenerError::EmptyDocument);
        }

        let findings = self.skills.extract(&text);
        let experience_years = self.experience.estimate(&text);
        let seniority = self.seniority.classify(&text, experience_years);
        let education = self.education.classify(&text);

        let overall_score = overall_score(&findings, experience_years, education, seniority);

        let compatibility = job_description
            .and_then(|jd| self.compatibility.score(&self.skills, &text, jd));

        let interview_questions = narrative::interview_questions(&findings, seniority);
        let strengths = narrative::strengths(&findings, experience_years, education);
        let summary = narrative::executive_summary(overall_score, seniority, experience_years, &findings);
        let recommendation = narrative::recommendation(overall_score, compatibility);

        let mut top_skills = findings.flatten();
        top_skills.truncate(MAX_TOP_SKILLS);

        info!(
            "Analyzed '{}': score {}, {} skills, seniority {}",
            filename,
            overall_score,
            findings.total_skills(),
            seniority
        );

        Ok(AnalysisReport {
            overall_score,
            experience_years,
            seniority,
            education,
            compatibility,
            strengths,
            top_skills,
            skills_by_category: findings,
            interview_questions,
            summary,
            recommendation,
            processed_at: Local::now().to_rfc3339(),
            processing_time_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Alternate lightweight mode: grade the raw text from 0 to 10 with a
    /// one-sentence rationale per rule. Total over any input, including the
    /// empty string.
    pub fn quick_assess(&self, text: &str) -> SimpleAssessment {
        let lower = text.to_lowercase();
        let mut grade = 0.0f64;
        let mut rationale: Vec<&str> = Vec::new();

        // Raw term occurrences summed across categories, overlaps included,
        // mirroring independent per-term substring counts
        let term_hits = self.term_counter.find_overlapping_iter(&lower).count();
        if term_hits >= 10 {
            grade += 4.0;
            rationale.push("Possui várias habilidades técnicas relevantes.");
        } else if term_hits >= 5 {
            grade += 2.5;
            rationale.push("Possui algumas habilidades técnicas, mas pode aprofundar.");
        } else {
            grade += 1.0;
            rationale.push("Poucas habilidades técnicas identificadas.");
        }

        if lower.contains("experiência") || lower.contains("trabalhei") || lower.contains("emprego")
        {
            grade += 2.0;
            rationale.push("Apresenta histórico de experiência profissional.");
        } else {
            rationale.push("Não apresenta experiência profissional clara.");
        }

        if text.split_whitespace().count() > 200 {
            grade += 2.0;
            rationale.push("Currículo tem bom volume de conteúdo.");
        } else {
            grade += 0.5;
            rationale.push("Currículo curto, poderia ser mais detalhado.");
        }

        if self.structure_pattern.is_match(text) {
            grade += 1.0;
            rationale.push("Texto bem estruturado.");
        } else {
            rationale.push("Texto com estrutura fraca.");
        }

        let grade = ((grade * 10.0).round() / 10.0).min(10.0);
        SimpleAssessment {
            grade,
            rationale: format!("Nota: {:.1} — {}", grade, rationale.join(" ")),
        }
    }
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Overall candidate score: base 50 plus capped skill, experience, education
/// and seniority contributions, clamped to [60, 95].
fn overall_score(
    findings: &SkillFindings,
    experience_years: u8,
    education: Education,
    seniority: Seniority,
) -> u8 {
    let mut score = BASE_SCORE;

    score += (findings.total_skills() as u32 * 2).min(25);
    score += (u32::from(experience_years) * 2).min(20);

    score += match education {
        Education::PostGraduate => 10,
        Education::Higher => 8,
        Education::Technical => 5,
        Education::NotInformed => 0,
    };

    score += match seniority {
        Seniority::Senior => 10,
        Seniority::Pleno => 7,
        Seniority::Junior => 5,
    };

    score.clamp(MIN_SCORE, MAX_SCORE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "\
Maria Silva
Desenvolvedora de software sênior

Experiência:
2016 - 2022: Desenvolvedora na Empresa A
2022 - presente: Tech lead na Empresa B

Skills: Python, JavaScript, React, Docker, AWS, PostgreSQL, Scrum

Formação: Bacharelado em Ciência da Computação, MBA em Gestão
";

    fn analyzer() -> ResumeAnalyzer {
        ResumeAnalyzer::with_reference_year(2024)
    }

    #[test]
    fn test_analyze_report_bounds() {
        let report = analyzer()
            .analyze(SAMPLE_RESUME.as_bytes(), "cv.txt", Some("Vaga para python e react"))
            .unwrap();

        assert!((60..=95).contains(&report.overall_score));
        assert!(report.experience_years <= 25);
        assert!(report.strengths.len() <= 5);
        assert!(report.interview_questions.len() <= 5);
        assert!(report.top_skills.len() <= 10);
        let compat = report.compatibility.unwrap();
        assert!((60..=95).contains(&compat));
    }

    #[test]
    fn test_analyze_fields() {
        let report = analyzer().analyze(SAMPLE_RESUME.as_bytes(), "cv.txt", None).unwrap();

        assert_eq!(report.experience_years, 6);
        assert_eq!(report.seniority, Seniority::Senior);
        assert_eq!(report.education, Education::PostGraduate);
        assert_eq!(report.compatibility, None);
        assert!(report.top_skills.contains(&"Python".to_string()));
        assert!(report.skills_by_category.has("cloud_devops"));
    }

    #[test]
    fn test_analyze_empty_document() {
        let result = analyzer().analyze(b"   \n\t  ", "cv.txt", None);
        assert!(matches!(result, Err(ScreenerError::EmptyDocument)));
    }

    #[test]
    fn test_analyze_is_idempotent_modulo_timestamp() {
        let analyzer = analyzer();
        let a = analyzer.analyze(SAMPLE_RESUME.as_bytes(), "cv.txt", Some("python")).unwrap();
        let b = analyzer.analyze(SAMPLE_RESUME.as_bytes(), "cv.txt", Some("python")).unwrap();

        assert_eq!(a.overall_score, b.overall_score);
        assert_eq!(a.experience_years, b.experience_years);
        assert_eq!(a.seniority, b.seniority);
        assert_eq!(a.education, b.education);
        assert_eq!(a.compatibility, b.compatibility);
        assert_eq!(a.strengths, b.strengths);
        assert_eq!(a.top_skills, b.top_skills);
        assert_eq!(a.interview_questions, b.interview_questions);
        assert_eq!(a.summary, b.summary);
        assert_eq!(a.recommendation, b.recommendation);
    }

    #[test]
    fn test_overall_score_floor() {
        let findings = SkillFindings::default();
        let score = overall_score(&findings, 0, Education::NotInformed, Seniority::Junior);
        assert_eq!(score, 60);
    }

    #[test]
    fn test_overall_score_ceiling() {
        let findings = SkillExtractor::new()
            .extract("python java ruby go rust php perl scala kotlin swift typescript javascript bash shell");
        let score = overall_score(&findings, 25, Education::PostGraduate, Seniority::Senior);
        assert_eq!(score, 95);
    }

    #[test]
    fn test_quick_assess_low_signal_text() {
        let assessment = analyzer().quick_assess("oi ok");
        assert!(assessment.grade <= 1.5 + f64::EPSILON);
        assert!(assessment.rationale.contains("Poucas habilidades técnicas identificadas."));
        assert!(assessment.rationale.contains("Currículo curto, poderia ser mais detalhado."));
        assert!(assessment.rationale.starts_with("Nota: "));
    }

    #[test]
    fn test_quick_assess_empty_text() {
        let assessment = analyzer().quick_assess("");
        assert!(assessment.grade >= 0.0 && assessment.grade <= 10.0);
        assert!(assessment.rationale.contains("Texto com estrutura fraca."));
    }

    #[test]
    fn test_quick_assess_rich_text() {
        let body = "Tenho experiência com python javascript java react docker aws mysql. ";
        let filler = "palavra ".repeat(210);
        let assessment = analyzer().quick_assess(&format!("{}{}", body, filler));
        assert!(assessment.grade >= 8.0);
        assert!(assessment.rationale.contains("Apresenta histórico de experiência profissional."));
        assert!(assessment.rationale.contains("Currículo tem bom volume de conteúdo."));
    }

    #[test]
    fn test_quick_assess_grade_capped_at_ten() {
        let text = format!(
            "Minha experiência trabalhei {} {}",
            "python docker aws react mysql ".repeat(10),
            "texto corrido sobre projetos ".repeat(50)
        );
        let assessment = analyzer().quick_assess(&text);
        assert!(assessment.grade <= 10.0);
    }
}
