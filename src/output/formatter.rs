//! Rendering of analysis reports to console, JSON and Markdown

use crate::analysis::engine::{AnalysisReport, SimpleAssessment};
use crate::config::OutputFormat;
use crate::error::Result;
use colored::Colorize;

pub struct OutputFormatter {
    detailed: bool,
}

impl OutputFormatter {
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }

    pub fn format_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => Ok(self.format_console(report)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Markdown => Ok(self.format_markdown(report)),
        }
    }

    fn format_console(&self, report: &AnalysisReport) -> String {
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", "═══ Análise de Currículo ═══".bold()));
        out.push_str(&format!(
            "{} {}\n",
            "Pontuação geral:".bold(),
            score_colored(report.overall_score)
        ));
        out.push_str(&format!(
            "{} {} anos\n",
            "Experiência:".bold(),
            report.experience_years
        ));
        out.push_str(&format!("{} {}\n", "Senioridade:".bold(), report.seniority));
        out.push_str(&format!("{} {}\n", "Formação:".bold(), report.education));

        if let Some(compatibility) = report.compatibility {
            out.push_str(&format!(
                "{} {}\n",
                "Compatibilidade com a vaga:".bold(),
                score_colored(compatibility)
            ));
        }

        if !report.top_skills.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                "Principais skills:".bold(),
                report.top_skills.join(", ")
            ));
        }

        if self.detailed {
            out.push_str(&format!("\n{}\n", "Skills por categoria:".bold()));
            for category in &report.skills_by_category.categories {
                out.push_str(&format!(
                    "  {}: {}\n",
                    category.name,
                    category.skills.join(", ")
                ));
            }
        }

        out.push_str(&format!("\n{}\n", "Pontos fortes:".bold()));
        for strength in &report.strengths {
            out.push_str(&format!("  • {}\n", strength));
        }

        out.push_str(&format!("\n{}\n", "Perguntas para entrevista:".bold()));
        for (i, question) in report.interview_questions.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, question));
        }

        out.push_str(&format!("\n{}\n{}\n", "Resumo:".bold(), report.summary));
        out.push_str(&format!(
            "\n{} {}\n",
            "Recomendação:".bold(),
            report.recommendation.as_str().green()
        ));

        out
    }

    fn format_markdown(&self, report: &AnalysisReport) -> String {
        let mut out = String::new();

        out.push_str("# Análise de Currículo\n\n");
        out.push_str(&format!("- **Pontuação geral:** {}\n", report.overall_score));
        out.push_str(&format!("- **Experiência:** {} anos\n", report.experience_years));
        out.push_str(&format!("- **Senioridade:** {}\n", report.seniority));
        out.push_str(&format!("- **Formação:** {}\n", report.education));
        if let Some(compatibility) = report.compatibility {
            out.push_str(&format!("- **Compatibilidade com a vaga:** {}%\n", compatibility));
        }

        out.push_str("\n## Skills\n\n");
        for category in &report.skills_by_category.categories {
            out.push_str(&format!("- {}: {}\n", category.name, category.skills.join(", ")));
        }

        out.push_str("\n## Pontos fortes\n\n");
        for strength in &report.strengths {
            out.push_str(&format!("- {}\n", strength));
        }

        out.push_str("\n## Perguntas para entrevista\n\n");
        for (i, question) in report.interview_questions.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, question));
        }

        out.push_str(&format!("\n## Resumo\n\n{}\n", report.summary));
        out.push_str(&format!("\n## Recomendação\n\n{}\n", report.recommendation));
        out.push_str(&format!("\n---\nProcessado em {} ({} ms)\n", report.processed_at, report.processing_time_ms));

        out
    }

    pub fn format_assessment(&self, assessment: &SimpleAssessment) -> String {
        format!(
            "\n{} {}\n\n{}\n",
            "Nota:".bold(),
            format!("{:.1}/10", assessment.grade).as_str().cyan(),
            assessment.rationale
        )
    }
}

fn score_colored(score: u8) -> colored::ColoredString {
    let text = format!("{}/100", score);
    if score >= 80 {
        text.as_str().green()
    } else if score >= 70 {
        text.as_str().yellow()
    } else {
        text.as_str().red()
    }
}
