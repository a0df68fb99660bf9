// src/session.rs

use crate::model::{Answer, Question};
use crate::shuffle::shuffle;
use thiserror::Error;

/// Errores de la sesión. Todos locales y recuperables: ninguna operación
/// que falla deja la sesión a medias.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no hay preguntas para este quiz")]
    EmptyQuestionSet,
    #[error("la opción '{0}' no existe en la pregunta actual")]
    InvalidSelection(String),
    #[error("la sesión ya ha terminado")]
    SessionFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress,
    CompletedNormally,
    CompletedByTimeout,
}

/// Un intento de quiz: preguntas barajadas, respuestas alineadas por
/// índice, posición actual y cuenta atrás opcional.
///
/// La sesión no tiene reloj propio: el anfitrión llama a [`tick`] una vez
/// por segundo mientras está en curso. Reiniciar un quiz es construir una
/// sesión nueva, nunca mutar ésta.
///
/// [`tick`]: QuizSession::tick
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: Vec<Answer>,
    current: usize,
    phase: SessionPhase,
    time_remaining: Option<u32>,
    elapsed_secs: u32,
}

impl QuizSession {
    /// Crea la sesión barajando el conjunto resuelto y dejando todas las
    /// respuestas "sin tocar". Falla si el conjunto viene vacío.
    pub fn new(questions: Vec<Question>, time_limit: Option<u32>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyQuestionSet);
        }
        let questions = shuffle(&questions);
        let answers = questions.iter().map(|q| Answer::untouched(q.id)).collect();
        Ok(Self {
            questions,
            answers,
            current: 0,
            phase: SessionPhase::InProgress,
            time_remaining: time_limit,
            elapsed_secs: 0,
        })
    }

    // ----- Consultas ---------------------------------------------------

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn current_answer(&self) -> &Answer {
        &self.answers[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn can_retreat(&self) -> bool {
        self.current > 0
    }

    pub fn can_advance(&self) -> bool {
        self.current + 1 < self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        !matches!(self.phase, SessionPhase::InProgress)
    }

    pub fn timed_out(&self) -> bool {
        matches!(self.phase, SessionPhase::CompletedByTimeout)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    // ----- Transiciones ------------------------------------------------

    /// Responde la pregunta actual. Volver a seleccionar antes de avanzar
    /// sobrescribe la selección anterior; no avanza sola.
    pub fn select_answer(&mut self, option_id: &str) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::SessionFinished);
        }
        let question = &self.questions[self.current];
        if question.option(option_id).is_none() {
            return Err(SessionError::InvalidSelection(option_id.to_string()));
        }
        self.answers[self.current] = Answer {
            question_id: question.id,
            selected_answer: Some(option_id.to_string()),
            is_correct: Some(option_id == question.correct_answer),
            is_skipped: false,
        };
        Ok(())
    }

    /// Marca la pregunta actual como saltada y avanza. También vale en la
    /// última pregunta: saltar sin responder puede terminar el quiz.
    pub fn skip(&mut self) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::SessionFinished);
        }
        let question_id = self.questions[self.current].id;
        self.answers[self.current] = Answer {
            question_id,
            selected_answer: None,
            is_correct: None,
            is_skipped: true,
        };
        self.advance()
    }

    /// Pasa a la siguiente pregunta; en la última, termina la sesión
    /// (`CompletedNormally`).
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::SessionFinished);
        }
        if self.can_advance() {
            self.current += 1;
        } else {
            self.phase = SessionPhase::CompletedNormally;
        }
        Ok(())
    }

    /// Vuelve a la pregunta anterior sin tocar ninguna respuesta.
    pub fn retreat(&mut self) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::SessionFinished);
        }
        if self.can_retreat() {
            self.current -= 1;
        }
        Ok(())
    }

    /// Un segundo de reloj. Acumula el tiempo transcurrido y, si hay
    /// cuenta atrás, la descuenta; al llegar a cero termina la sesión
    /// (`CompletedByTimeout`) esté donde esté el índice.
    ///
    /// Tras completarse es un no-op: la cancelación del reloj es cosa del
    /// anfitrión, esto es sólo la red de seguridad.
    pub fn tick(&mut self) {
        if self.is_complete() {
            return;
        }
        self.elapsed_secs += 1;
        if let Some(remaining) = self.time_remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.phase = SessionPhase::CompletedByTimeout;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerOption;

    fn question(id: u32, correct: &str) -> Question {
        Question {
            id,
            prompt: format!("pregunta {id}"),
            options: ["a", "b", "c"]
                .iter()
                .map(|o| AnswerOption {
                    id: o.to_string(),
                    text: format!("opción {o}"),
                })
                .collect(),
            correct_answer: correct.to_string(),
            explanation: None,
        }
    }

    fn session(n: u32, time_limit: Option<u32>) -> QuizSession {
        let questions = (1..=n).map(|i| question(i, "a")).collect();
        QuizSession::new(questions, time_limit).expect("sesión no vacía")
    }

    #[test]
    fn empty_question_set_is_rejected() {
        assert_eq!(
            QuizSession::new(vec![], None).unwrap_err(),
            SessionError::EmptyQuestionSet
        );
    }

    #[test]
    fn initialization_shuffles_but_keeps_the_set() {
        let s = session(10, None);
        assert_eq!(s.total_questions(), 10);
        assert_eq!(s.answers().len(), 10);
        let mut ids: Vec<u32> = s.questions().iter().map(|q| q.id).collect();
        ids.sort();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
        // respuestas alineadas y sin tocar
        for (q, a) in s.questions().iter().zip(s.answers()) {
            assert_eq!(a, &Answer::untouched(q.id));
        }
        assert_eq!(s.current_index(), 0);
        assert!(!s.can_retreat());
        assert!(!s.is_complete());
    }

    #[test]
    fn select_answer_marks_correctness_without_advancing() {
        let mut s = session(3, None);
        s.select_answer("a").unwrap();
        assert_eq!(s.current_index(), 0);
        let a = s.current_answer();
        assert_eq!(a.selected_answer.as_deref(), Some("a"));
        assert_eq!(a.is_correct, Some(true));
        assert!(!a.is_skipped);

        s.select_answer("b").unwrap();
        assert_eq!(s.current_answer().is_correct, Some(false));
    }

    #[test]
    fn reselecting_overwrites_the_previous_choice() {
        let mut s = session(2, None);
        s.select_answer("b").unwrap();
        s.select_answer("a").unwrap();
        // una sola respuesta para la pregunta, y refleja la última
        assert_eq!(s.current_answer().selected_answer.as_deref(), Some("a"));
        assert_eq!(s.current_answer().is_correct, Some(true));
        assert_eq!(
            s.answers().iter().filter(|a| a.selected_answer.is_some()).count(),
            1
        );
    }

    #[test]
    fn invalid_option_is_rejected_without_mutation() {
        let mut s = session(2, None);
        let before = s.current_answer().clone();
        assert_eq!(
            s.select_answer("z").unwrap_err(),
            SessionError::InvalidSelection("z".into())
        );
        assert_eq!(s.current_answer(), &before);
    }

    #[test]
    fn skip_records_the_skip_and_advances() {
        let mut s = session(3, None);
        s.skip().unwrap();
        assert_eq!(s.current_index(), 1);
        let skipped = &s.answers()[0];
        assert!(skipped.is_skipped);
        assert_eq!(skipped.selected_answer, None);
        assert_eq!(skipped.is_correct, None);
    }

    #[test]
    fn skip_overwrites_a_previous_selection() {
        let mut s = session(2, None);
        s.select_answer("a").unwrap();
        s.skip().unwrap();
        let a = &s.answers()[0];
        assert!(a.is_skipped);
        assert_eq!(a.selected_answer, None);
        assert_eq!(a.is_correct, None);
    }

    #[test]
    fn completion_takes_exactly_n_advances() {
        let n = 4;
        let mut s = session(n, None);
        for i in 0..n - 1 {
            assert_eq!(s.current_index(), i as usize);
            s.advance().unwrap();
            assert!(!s.is_complete());
        }
        s.advance().unwrap();
        assert_eq!(s.phase(), SessionPhase::CompletedNormally);
        assert!(!s.timed_out());
    }

    #[test]
    fn last_question_can_be_skipped_to_finish() {
        let mut s = session(1, None);
        s.skip().unwrap();
        assert_eq!(s.phase(), SessionPhase::CompletedNormally);
        assert!(s.answers()[0].is_skipped);
    }

    #[test]
    fn retreat_moves_back_and_is_noop_at_zero() {
        let mut s = session(3, None);
        s.retreat().unwrap();
        assert_eq!(s.current_index(), 0);
        s.advance().unwrap();
        s.advance().unwrap();
        s.retreat().unwrap();
        assert_eq!(s.current_index(), 1);
        assert!(s.can_retreat());
        // retroceder nunca toca respuestas
        s.select_answer("a").unwrap();
        let saved = s.answers().to_vec();
        s.retreat().unwrap();
        assert_eq!(s.answers(), &saved[..]);
    }

    #[test]
    fn timeout_completes_wherever_the_index_is() {
        let mut s = session(10, Some(5));
        s.advance().unwrap();
        s.advance().unwrap();
        for i in 0..5 {
            assert!(!s.is_complete(), "tick {i}");
            s.tick();
        }
        assert_eq!(s.phase(), SessionPhase::CompletedByTimeout);
        assert!(s.timed_out());
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.time_remaining(), Some(0));
        assert_eq!(s.elapsed_secs(), 5);
    }

    #[test]
    fn tick_without_countdown_only_accumulates_elapsed() {
        let mut s = session(2, None);
        for _ in 0..7 {
            s.tick();
        }
        assert!(!s.is_complete());
        assert_eq!(s.time_remaining(), None);
        assert_eq!(s.elapsed_secs(), 7);
    }

    #[test]
    fn mutations_after_completion_are_rejected_and_harmless() {
        let mut s = session(2, Some(30));
        s.select_answer("a").unwrap();
        s.advance().unwrap();
        s.select_answer("b").unwrap();
        s.advance().unwrap();
        assert!(s.is_complete());

        let answers = s.answers().to_vec();
        let elapsed = s.elapsed_secs();
        assert_eq!(s.select_answer("a").unwrap_err(), SessionError::SessionFinished);
        assert_eq!(s.skip().unwrap_err(), SessionError::SessionFinished);
        assert_eq!(s.advance().unwrap_err(), SessionError::SessionFinished);
        assert_eq!(s.retreat().unwrap_err(), SessionError::SessionFinished);
        s.tick(); // red de seguridad: no-op
        assert_eq!(s.answers(), &answers[..]);
        assert_eq!(s.elapsed_secs(), elapsed);
        assert_eq!(s.phase(), SessionPhase::CompletedNormally);
    }
}
