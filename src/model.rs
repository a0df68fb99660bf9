use serde::{Deserialize, Serialize};

/// Una opción de respuesta dentro de una pregunta tipo test.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub id: String, // etiqueta corta: "a", "b", "c", "d"
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: u32,
    pub prompt: String, // Enunciado
    pub options: Vec<AnswerOption>,
    pub correct_answer: String, // id de la opción correcta
    #[serde(default)]
    pub explanation: Option<String>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.option(&self.correct_answer)
    }
}

/// Metadatos estáticos de un quiz del catálogo (quizzes.yaml).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub question_count: usize,
    pub difficulty: String,
    /// Límite de tiempo en segundos; None = sin cuenta atrás.
    #[serde(default)]
    pub time_limit: Option<u32>,
}

/// Registro de respuesta, alineado por índice con la pregunta que le toca.
///
/// `selected_answer == None && is_skipped == false` significa "sin tocar":
/// ni respondida ni saltada explícitamente.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub question_id: u32,
    pub selected_answer: Option<String>,
    pub is_correct: Option<bool>,
    pub is_skipped: bool,
}

impl Answer {
    pub fn untouched(question_id: u32) -> Self {
        Self {
            question_id,
            selected_answer: None,
            is_correct: None,
            is_skipped: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    Browse,
    Quiz,
    Results,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home
    }
}
