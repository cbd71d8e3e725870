//! Integration tests for the cv screener

use cv_screener::{extract_text, ResumeAnalyzer, ScreenerError};
use std::io::Write;

async fn read_fixture(name: &str) -> Vec<u8> {
    tokio::fs::read(format!("tests/fixtures/{}", name))
        .await
        .expect("fixture should exist")
}

#[tokio::test]
async fn test_full_analysis_from_fixture() {
    let bytes = read_fixture("sample_resume.txt").await;
    let analyzer = ResumeAnalyzer::with_reference_year(2024);

    let report = analyzer.analyze(&bytes, "sample_resume.txt", None).unwrap();

    assert_eq!(report.experience_years, 4);
    assert_eq!(report.seniority.to_string(), "Pleno");
    assert_eq!(report.education.to_string(), "Ensino Superior");
    assert_eq!(report.overall_score, 85);
    assert!(report.compatibility.is_none());
    assert!(report.top_skills.contains(&"Python".to_string()));
    assert!(report.top_skills.contains(&"Django".to_string()));
    assert!(report.skills_by_category.has("methodologies"));
    assert!(!report.summary.is_empty());
    assert!(!report.recommendation.is_empty());
}

#[tokio::test]
async fn test_analysis_with_job_description() {
    let resume = read_fixture("sample_resume.txt").await;
    let job_bytes = read_fixture("sample_job.txt").await;
    let job_text = extract_text(&job_bytes, "sample_job.txt");

    let analyzer = ResumeAnalyzer::with_reference_year(2024);
    let report = analyzer
        .analyze(&resume, "sample_resume.txt", Some(&job_text))
        .unwrap();

    // All four job skills are present in the resume
    assert_eq!(report.compatibility, Some(95));
    assert!(report.recommendation.contains("fit para a vaga"));
}

#[tokio::test]
async fn test_unrecognizable_job_gets_default_compatibility() {
    let resume = read_fixture("sample_resume.txt").await;
    let analyzer = ResumeAnalyzer::with_reference_year(2024);

    let report = analyzer
        .analyze(&resume, "sample_resume.txt", Some("vaga aberta para talentos"))
        .unwrap();

    assert_eq!(report.compatibility, Some(85));
}

#[tokio::test]
async fn test_report_bounds_hold_for_pathological_input() {
    let giant = "python docker aws react mysql scrum 2000 - 2024 gerente coordenador sênior "
        .repeat(500);
    let analyzer = ResumeAnalyzer::new();

    let report = analyzer
        .analyze(giant.as_bytes(), "cv.txt", Some(&giant))
        .unwrap();

    assert!((60..=95).contains(&report.overall_score));
    assert!(report.experience_years <= 25);
    assert!(report.strengths.len() <= 5);
    assert!(report.interview_questions.len() <= 5);
    assert!(report.top_skills.len() <= 10);
    assert!((60..=95).contains(&report.compatibility.unwrap()));
}

#[tokio::test]
async fn test_empty_document_is_rejected() {
    let analyzer = ResumeAnalyzer::new();
    let result = analyzer.analyze(b"  \n\t ", "cv.txt", None);
    assert!(matches!(result, Err(ScreenerError::EmptyDocument)));
}

#[tokio::test]
async fn test_corrupt_pdf_falls_back_to_raw_text() {
    // A file with a .pdf extension but plain-text content must still be
    // analyzed through the decode fallback
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    write!(file, "Desenvolvedora com experiência de 6 anos em python").unwrap();

    let bytes = tokio::fs::read(file.path()).await.unwrap();
    let analyzer = ResumeAnalyzer::with_reference_year(2024);
    let report = analyzer.analyze(&bytes, "cv.pdf", None).unwrap();

    assert_eq!(report.experience_years, 6);
    assert!(report.top_skills.contains(&"Python".to_string()));
}

#[tokio::test]
async fn test_quick_assess_from_fixture() {
    let bytes = read_fixture("sample_resume.txt").await;
    let text = extract_text(&bytes, "sample_resume.txt");

    let analyzer = ResumeAnalyzer::with_reference_year(2024);
    let assessment = analyzer.quick_assess(&text);

    assert!(assessment.grade >= 0.0 && assessment.grade <= 10.0);
    assert!(assessment.rationale.starts_with("Nota: "));
    // The fixture mentions "experiência"
    assert!(assessment
        .rationale
        .contains("Apresenta histórico de experiência profissional."));
}
