// src/data.rs

use crate::model::{Question, QuizInfo};
use thiserror::Error;

/// Banco de preguntas de un capítulo concreto.
#[derive(Debug, Clone)]
pub struct ChapterBank {
    pub id: String, // "chapter5" … "chapter9"
    pub questions: Vec<Question>,
}

/// Todos los bancos cargados, en orden fijo de capítulo (5 → 9).
#[derive(Debug, Clone, Default)]
pub struct QuestionBanks {
    pub chapters: Vec<ChapterBank>,
}

impl QuestionBanks {
    pub fn chapter(&self, quiz_id: &str) -> Option<&ChapterBank> {
        self.chapters.iter().find(|c| c.id == quiz_id)
    }

    pub fn total_questions(&self) -> usize {
        self.chapters.iter().map(|c| c.questions.len()).sum()
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("no se pudo parsear el banco {bank}: {source}")]
    Parse {
        bank: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("pregunta {question_id} del banco {bank}: {reason}")]
    Invalid {
        bank: String,
        question_id: u32,
        reason: String,
    },
}

/// Carga los bancos de preguntas desde los YAML embebidos y los valida.
pub fn read_banks_embedded() -> Result<QuestionBanks, DataError> {
    let sources: [(&str, &str); 5] = [
        ("chapter5", include_str!("data/chapter5.yaml")),
        ("chapter6", include_str!("data/chapter6.yaml")),
        ("chapter7", include_str!("data/chapter7.yaml")),
        ("chapter8", include_str!("data/chapter8.yaml")),
        ("chapter9", include_str!("data/chapter9.yaml")),
    ];

    let mut chapters = Vec::with_capacity(sources.len());
    for (id, yaml) in sources {
        let questions: Vec<Question> =
            serde_yaml::from_str(yaml).map_err(|source| DataError::Parse {
                bank: id.to_string(),
                source,
            })?;
        validate_bank(id, &questions)?;
        log::debug!("banco {id} cargado: {} preguntas", questions.len());
        chapters.push(ChapterBank {
            id: id.to_string(),
            questions,
        });
    }
    Ok(QuestionBanks { chapters })
}

/// Carga el catálogo de quizzes (metadatos) desde el YAML embebido.
pub fn read_quizzes_embedded() -> Result<Vec<QuizInfo>, DataError> {
    serde_yaml::from_str(include_str!("data/quizzes.yaml")).map_err(|source| DataError::Parse {
        bank: "quizzes".to_string(),
        source,
    })
}

/// Invariantes del modelo de datos: opciones no vacías, ids de opción
/// únicos dentro de la pregunta y `correct_answer` apuntando a una opción.
fn validate_bank(bank: &str, questions: &[Question]) -> Result<(), DataError> {
    for q in questions {
        if q.options.is_empty() {
            return Err(invalid(bank, q.id, "sin opciones"));
        }
        for (i, opt) in q.options.iter().enumerate() {
            if q.options[i + 1..].iter().any(|o| o.id == opt.id) {
                return Err(invalid(bank, q.id, &format!("opción '{}' repetida", opt.id)));
            }
        }
        if q.correct_option().is_none() {
            return Err(invalid(
                bank,
                q.id,
                &format!("correct_answer '{}' no es ninguna opción", q.correct_answer),
            ));
        }
    }
    Ok(())
}

fn invalid(bank: &str, question_id: u32, reason: &str) -> DataError {
    DataError::Invalid {
        bank: bank.to_string(),
        question_id,
        reason: reason.to_string(),
    }
}
