// src/results.rs

use crate::model::{Answer, AnswerOption, Question};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Correct,
    Incorrect,
    Skipped,
}

/// Resumen por pregunta para la vista de repaso.
#[derive(Debug, Clone)]
pub struct ReviewEntry {
    pub number: usize, // 1-based, en el orden barajado de la sesión
    pub prompt: String,
    pub status: ReviewStatus,
    pub selected: Option<AnswerOption>,
    /// None sólo si los datos venían mal (correct_answer colgante); la
    /// vista lo pinta como diagnóstico en vez de reventar.
    pub correct: Option<AnswerOption>,
    pub explanation: Option<String>,
}

/// Vista derivada y de sólo lectura sobre una sesión terminada.
#[derive(Debug, Clone)]
pub struct QuizResults {
    pub total: usize,
    pub correct_count: usize,
    pub incorrect_count: usize,
    pub skipped_count: usize,
    pub score_percentage: u32,
    pub review: Vec<ReviewEntry>,
}

/// Calcula recuentos, porcentaje y repaso a partir de la sesión acabada.
/// Toda respuesta ni correcta ni saltada cuenta como incorrecta, incluidas
/// las que nunca se tocaron.
pub fn build_results(questions: &[Question], answers: &[Answer]) -> QuizResults {
    debug_assert_eq!(questions.len(), answers.len());
    let total = questions.len();

    let correct_count = answers.iter().filter(|a| a.is_correct == Some(true)).count();
    let skipped_count = answers.iter().filter(|a| a.is_skipped).count();
    let incorrect_count = total - correct_count - skipped_count;

    let score_percentage = if total == 0 {
        0 // indefinido según contrato; el llamador no debe llegar aquí
    } else {
        (100.0 * correct_count as f64 / total as f64).round() as u32
    };

    let review = questions
        .iter()
        .zip(answers)
        .enumerate()
        .map(|(i, (q, a))| {
            let status = if a.is_correct == Some(true) {
                ReviewStatus::Correct
            } else if a.is_skipped {
                ReviewStatus::Skipped
            } else {
                ReviewStatus::Incorrect
            };
            ReviewEntry {
                number: i + 1,
                prompt: q.prompt.clone(),
                status,
                selected: a
                    .selected_answer
                    .as_deref()
                    .and_then(|id| q.option(id))
                    .cloned(),
                correct: q.correct_option().cloned(),
                explanation: q.explanation.clone(),
            }
        })
        .collect();

    QuizResults {
        total,
        correct_count,
        incorrect_count,
        skipped_count,
        score_percentage,
        review,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32) -> Question {
        Question {
            id,
            prompt: format!("pregunta {id}"),
            options: vec![
                AnswerOption {
                    id: "a".into(),
                    text: "verdadero".into(),
                },
                AnswerOption {
                    id: "b".into(),
                    text: "falso".into(),
                },
            ],
            correct_answer: "a".into(),
            explanation: Some(format!("porque sí ({id})")),
        }
    }

    fn answered(id: u32, selected: &str, correct: bool) -> Answer {
        Answer {
            question_id: id,
            selected_answer: Some(selected.into()),
            is_correct: Some(correct),
            is_skipped: false,
        }
    }

    fn skipped(id: u32) -> Answer {
        Answer {
            question_id: id,
            selected_answer: None,
            is_correct: None,
            is_skipped: true,
        }
    }

    #[test]
    fn all_correct_scores_one_hundred() {
        let qs: Vec<Question> = (1..=3).map(question).collect();
        let answers: Vec<Answer> = qs.iter().map(|q| answered(q.id, "a", true)).collect();
        let r = build_results(&qs, &answers);
        assert_eq!(r.score_percentage, 100);
        assert_eq!((r.correct_count, r.incorrect_count, r.skipped_count), (3, 0, 0));
    }

    #[test]
    fn all_incorrect_scores_zero() {
        let qs: Vec<Question> = (1..=3).map(question).collect();
        let answers: Vec<Answer> = qs.iter().map(|q| answered(q.id, "b", false)).collect();
        let r = build_results(&qs, &answers);
        assert_eq!(r.score_percentage, 0);
        assert_eq!((r.correct_count, r.incorrect_count, r.skipped_count), (0, 3, 0));
    }

    #[test]
    fn three_correct_one_skipped_of_four_is_seventy_five() {
        let qs: Vec<Question> = (1..=4).map(question).collect();
        let mut answers: Vec<Answer> = qs[..3].iter().map(|q| answered(q.id, "a", true)).collect();
        answers.push(skipped(qs[3].id));
        let r = build_results(&qs, &answers);
        assert_eq!(r.correct_count, 3);
        assert_eq!(r.skipped_count, 1);
        assert_eq!(r.incorrect_count, 0);
        assert_eq!(r.score_percentage, 75);
    }

    #[test]
    fn untouched_answers_count_as_incorrect() {
        let qs: Vec<Question> = (1..=2).map(question).collect();
        let answers = vec![answered(1, "a", true), Answer::untouched(2)];
        let r = build_results(&qs, &answers);
        assert_eq!(r.incorrect_count, 1);
        assert_eq!(r.skipped_count, 0);
        assert_eq!(r.review[1].status, ReviewStatus::Incorrect);
        assert_eq!(r.review[1].selected, None);
    }

    #[test]
    fn review_entries_carry_options_and_explanation() {
        let qs = vec![question(1)];
        let answers = vec![answered(1, "b", false)];
        let r = build_results(&qs, &answers);
        let entry = &r.review[0];
        assert_eq!(entry.number, 1);
        assert_eq!(entry.status, ReviewStatus::Incorrect);
        assert_eq!(entry.selected.as_ref().unwrap().id, "b");
        assert_eq!(entry.correct.as_ref().unwrap().id, "a");
        assert!(entry.explanation.is_some());
    }

    #[test]
    fn dangling_correct_answer_does_not_panic() {
        let mut q = question(1);
        q.correct_answer = "z".into();
        let r = build_results(&[q], &[skipped(1)]);
        assert_eq!(r.review[0].correct, None);
        assert_eq!(r.review[0].status, ReviewStatus::Skipped);
    }

    #[test]
    fn rounding_is_to_nearest_percent() {
        // 1 de 3 → 33.33 → 33 ; 2 de 3 → 66.67 → 67
        let qs: Vec<Question> = (1..=3).map(question).collect();
        let answers = vec![answered(1, "a", true), answered(2, "b", false), answered(3, "b", false)];
        assert_eq!(build_results(&qs, &answers).score_percentage, 33);
        let answers = vec![answered(1, "a", true), answered(2, "a", true), answered(3, "b", false)];
        assert_eq!(build_results(&qs, &answers).score_percentage, 67);
    }
}
