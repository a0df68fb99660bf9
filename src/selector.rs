// src/selector.rs

use crate::data::QuestionBanks;
use crate::model::{Question, QuizInfo};
use crate::shuffle::shuffle;

/// Id del modo agregado: muestra aleatoria sobre todos los capítulos.
pub const RANDOM_QUIZ_ID: &str = "random-100";
/// Tamaño máximo de la muestra aleatoria.
pub const RANDOM_SAMPLE_SIZE: usize = 100;

/// Resuelve el conjunto de preguntas para un quiz.
///
/// - Capítulo concreto: su banco tal cual, sin barajar (la sesión baraja).
/// - `random-100`: concatena los capítulos en orden fijo (5 → 9), baraja
///   la concatenación y se queda con `min(100, total)`. Cada llamada
///   redibuja una muestra independiente.
/// - Id desconocido: conjunto vacío; el llamador no debe iniciar sesión.
pub fn resolve_question_set(quiz_id: &str, banks: &QuestionBanks) -> Vec<Question> {
    if quiz_id == RANDOM_QUIZ_ID {
        let all: Vec<Question> = banks
            .chapters
            .iter()
            .flat_map(|c| c.questions.iter().cloned())
            .collect();
        let mut sample = shuffle(&all);
        sample.truncate(RANDOM_SAMPLE_SIZE.min(all.len()));
        return sample;
    }

    match banks.chapter(quiz_id) {
        Some(bank) => bank.questions.clone(),
        None => {
            log::warn!("quiz_id desconocido: {quiz_id}");
            Vec::new()
        }
    }
}

/// Busca los metadatos del quiz en el catálogo. Que no estén no es error.
pub fn resolve_quiz_info<'a>(quiz_id: &str, quizzes: &'a [QuizInfo]) -> Option<&'a QuizInfo> {
    quizzes.iter().find(|q| q.id == quiz_id)
}

/// Título a mostrar: el del catálogo o, si falta, uno genérico del id.
pub fn display_name(quiz_id: &str, quizzes: &[QuizInfo]) -> String {
    match resolve_quiz_info(quiz_id, quizzes) {
        Some(info) => info.name.clone(),
        None => format!("Quiz {quiz_id}"),
    }
}
