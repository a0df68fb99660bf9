// src/view_models.rs

use crate::model::AnswerOption;

/// Tarjeta del catálogo en la pantalla de inicio.
#[derive(Clone, Debug)]
pub struct QuizCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub question_count: usize,
    pub difficulty: String,
    pub timed: bool,
    pub featured: bool, // el modo aleatorio va destacado
}

impl QuizCard {
    pub fn count_label(&self) -> String {
        let unit = if self.question_count == 1 {
            "pregunta"
        } else {
            "preguntas"
        };
        if self.featured {
            format!("{} {unit} (selección aleatoria)", self.question_count)
        } else {
            format!("{} {unit}", self.question_count)
        }
    }

    pub fn badge_label(&self) -> String {
        if self.timed {
            format!("{} ⏱", self.difficulty)
        } else {
            self.difficulty.clone()
        }
    }
}

/// Fila de la vista de estudio: una pregunta del capítulo con su estado
/// de desplegado.
#[derive(Clone, Debug)]
pub struct BrowseQuestion {
    pub number: usize, // 1-based, en el orden del banco
    pub id: u32,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub expanded: bool,
}

impl BrowseQuestion {
    pub fn header_label(&self) -> String {
        let icon = if self.expanded { "▼" } else { "▶" };
        format!("{icon} {}. {}", self.number, self.prompt)
    }
}
