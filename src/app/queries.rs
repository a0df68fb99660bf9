use super::*;
use crate::results::{QuizResults, build_results};
use crate::selector::display_name;

impl QuizApp {
    /// Título a mostrar del quiz en curso o del capítulo en estudio
    /// (o un genérico si el catálogo no lo conoce).
    pub fn quiz_title(&self) -> String {
        let id = self.selected_quiz.as_deref().or(self.browse_chapter.as_deref());
        match id {
            Some(id) => display_name(id, &self.quizzes),
            None => "Quiz".to_string(),
        }
    }

    /// Resultados de la sesión terminada; None si no hay sesión o sigue
    /// en curso (la puntuación sólo se calcula sobre sesiones completas).
    pub fn results(&self) -> Option<QuizResults> {
        let session = self.session.as_ref()?;
        if !session.is_complete() {
            return None;
        }
        Some(build_results(session.questions(), session.answers()))
    }
}
