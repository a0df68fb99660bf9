use super::*;
use crate::selector::RANDOM_QUIZ_ID;

impl QuizApp {
    pub fn quiz_cards(&self) -> Vec<QuizCard> {
        self.quizzes
            .iter()
            .map(|info| QuizCard {
                id: info.id.clone(),
                name: info.name.clone(),
                description: info.description.clone(),
                question_count: info.question_count,
                difficulty: info.difficulty.clone(),
                timed: info.time_limit.is_some(),
                featured: info.id == RANDOM_QUIZ_ID,
            })
            .collect()
    }

    /// Filas de la vista de estudio del capítulo abierto, en el orden
    /// del banco (aquí no se baraja nada).
    pub fn browse_rows(&self) -> Vec<BrowseQuestion> {
        let Some(id) = self.browse_chapter.as_deref() else {
            return Vec::new();
        };
        let Some(bank) = self.banks.chapter(id) else {
            return Vec::new();
        };
        bank.questions
            .iter()
            .enumerate()
            .map(|(i, q)| BrowseQuestion {
                number: i + 1,
                id: q.id,
                prompt: q.prompt.clone(),
                options: q.options.clone(),
                correct_answer: q.correct_answer.clone(),
                explanation: q.explanation.clone(),
                expanded: self.expanded_questions.contains(&q.id),
            })
            .collect()
    }
}
