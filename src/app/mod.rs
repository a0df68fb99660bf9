use crate::data::{QuestionBanks, read_banks_embedded, read_quizzes_embedded};
use crate::model::{AppState, QuizInfo};
use crate::session::QuizSession;
use std::collections::HashSet;

// Submódulos
pub mod actions;
pub mod queries;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{BrowseQuestion, QuizCard};

pub struct QuizApp {
    pub banks: QuestionBanks,
    pub quizzes: Vec<QuizInfo>,
    pub state: AppState,
    /// Id del quiz elegido en el catálogo (necesario para reiniciar:
    /// el modo aleatorio redibuja su muestra en cada intento).
    pub selected_quiz: Option<String>,
    pub session: Option<QuizSession>,
    /// Capítulo abierto en la vista de estudio (repaso sin sesión).
    pub browse_chapter: Option<String>,
    /// Ids de pregunta desplegados en la vista de estudio.
    pub expanded_questions: HashSet<u32>,
    pub message: String,
    /// Referencia del último tick entregado a la sesión, en segundos de
    /// reloj de egui. None = reloj sin arrancar.
    pub(crate) last_tick: Option<f64>,
}

impl QuizApp {
    pub fn new() -> Self {
        let banks = match read_banks_embedded() {
            Ok(banks) => banks,
            Err(e) => {
                log::error!("banco de preguntas inválido: {e}");
                QuestionBanks::default()
            }
        };
        let quizzes = match read_quizzes_embedded() {
            Ok(quizzes) => quizzes,
            Err(e) => {
                log::error!("catálogo de quizzes inválido: {e}");
                Vec::new()
            }
        };
        log::info!(
            "{} capítulos, {} preguntas, {} quizzes en catálogo",
            banks.chapters.len(),
            banks.total_questions(),
            quizzes.len()
        );

        Self {
            banks,
            quizzes,
            state: AppState::Home,
            selected_quiz: None,
            session: None,
            browse_chapter: None,
            expanded_questions: HashSet::new(),
            message: String::new(),
            last_tick: None,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
