//! Narrative synthesis: strengths, interview questions, summary and
//! recommendation texts (Portuguese, matching the product's audience)

use crate::analysis::education::Education;
use crate::analysis::seniority::Seniority;
use crate::analysis::skills::SkillFindings;

const MAX_STRENGTHS: usize = 5;
const MAX_QUESTIONS: usize = 5;

const GENERIC_STRENGTHS: &[&str] = &[
    "Capacidade de adaptação a novas tecnologias",
    "Histórico profissional progressivo",
    "Perfil técnico alinhado com demandas do mercado",
];

const GENERAL_QUESTIONS: &[&str] = &[
    "Como você lida com prazos apertados e pressão?",
    "Conte sobre um erro que você cometeu e como aprendeu com ele",
    "Como você se mantém atualizado com as tendências da sua área?",
    "Descreva uma situação onde você teve que trabalhar em equipe para resolver um problema complexo",
];

/// Ranked strength statements, at most five, padded with up to two generic
/// entries when few specific ones were earned.
pub fn strengths(
    findings: &SkillFindings,
    experience_years: u8,
    education: Education,
) -> Vec<String> {
    let mut strengths: Vec<String> = Vec::new();

    if findings.category_count() >= 3 {
        strengths.push("Amplo conhecimento técnico em múltiplas áreas".to_string());
    }
    if findings.get("programming").map_or(false, |s| s.len() >= 3) {
        strengths.push("Sólida experiência em linguagens de programação".to_string());
    }
    if findings.has("cloud_devops") {
        strengths.push("Conhecimento em infraestrutura e DevOps".to_string());
    }
    if findings.has("methodologies") {
        strengths.push("Experiência com metodologias ágeis".to_string());
    }

    if experience_years >= 5 {
        strengths.push("Experiência profissional sólida e consistente".to_string());
    }
    if experience_years >= 8 {
        strengths.push("Perfil sênior com capacidade de liderança".to_string());
    }

    if matches!(education, Education::Higher | Education::PostGraduate) {
        strengths.push("Boa formação acadêmica".to_string());
    }

    strengths.extend(GENERIC_STRENGTHS.iter().take(2).map(|s| s.to_string()));
    strengths.truncate(MAX_STRENGTHS);
    strengths
}

/// Interview questions tailored to seniority and detected skill areas, at
/// most five.
pub fn interview_questions(findings: &SkillFindings, seniority: Seniority) -> Vec<String> {
    let level_bank: &[&str] = match seniority {
        Seniority::Junior => &[
            "Conte sobre algum projeto pessoal ou acadêmico que você desenvolveu",
            "Como você costuma aprender novas tecnologias?",
            "Descreva uma situação onde você teve que resolver um problema técnico",
        ],
        Seniority::Pleno => &[
            "Descreva um projeto complexo que você liderou ou participou ativamente",
            "Como você aborda a revisão de código e mentoria de desenvolvedores junior?",
            "Conte sobre uma vez que você teve que otimizar performance de uma aplicação",
        ],
        Seniority::Senior => &[
            "Como você define a arquitetura de um novo sistema?",
            "Descreva sua experiência liderando equipes técnicas",
            "Como você toma decisões sobre escolha de tecnologias em um projeto?",
        ],
    };

    let mut questions: Vec<String> = level_bank.iter().map(|q| q.to_string()).collect();

    if findings.has("programming") {
        questions.push("Explique as melhores práticas de desenvolvimento que você segue".to_string());
    }
    if findings.has("cloud_devops") {
        questions.push("Descreva sua experiência com deploy e infraestrutura em nuvem".to_string());
    }
    if findings.has("data_science") {
        questions.push("Como você aborda um novo problema de análise de dados?".to_string());
    }

    questions.extend(GENERAL_QUESTIONS.iter().take(2).map(|q| q.to_string()));
    questions.truncate(MAX_QUESTIONS);
    questions
}

/// One-paragraph executive summary of the candidate.
pub fn executive_summary(
    score: u8,
    seniority: Seniority,
    experience_years: u8,
    findings: &SkillFindings,
) -> String {
    let quality = if score >= 85 {
        "excelente"
    } else if score >= 75 {
        "boa"
    } else {
        "adequada"
    };

    let closing = if score >= 80 {
        "Altamente recomendado para processo seletivo."
    } else if score >= 70 {
        "Recomendado para entrevista."
    } else {
        "Candidato a ser considerado com ressalvas."
    };

    format!(
        "Candidato com perfil {} e {} anos de experiência. \
         Apresenta {} qualificação técnica com {} competências identificadas. {}",
        seniority.to_string().to_lowercase(),
        experience_years,
        quality,
        findings.total_skills(),
        closing
    )
}

/// Final recommendation, branching on job compatibility when available.
pub fn recommendation(score: u8, compatibility: Option<u8>) -> String {
    let text = match compatibility {
        Some(fit) => {
            if fit >= 85 && score >= 80 {
                "Altamente recomendado - Excelente fit para a vaga"
            } else if fit >= 75 && score >= 70 {
                "Recomendado - Bom fit para a vaga"
            } else if fit >= 65 {
                "Considerar - Fit parcial para a vaga"
            } else {
                "Não recomendado - Baixo fit para a vaga"
            }
        }
        None => {
            if score >= 85 {
                "Altamente recomendado para entrevista"
            } else if score >= 75 {
                "Recomendado para entrevista"
            } else if score >= 65 {
                "Considerar para entrevista"
            } else {
                "Não recomendado"
            }
        }
    };
    text.to_string()
}
