use super::*;
use crate::selector::{display_name, resolve_question_set, resolve_quiz_info};

impl QuizApp {
    /// Arranca un quiz del catálogo: resuelve su conjunto de preguntas y
    /// construye una sesión nueva. Con conjunto vacío no se entra al quiz.
    pub fn empezar_quiz(&mut self, quiz_id: &str) {
        let questions = resolve_question_set(quiz_id, &self.banks);
        let time_limit =
            resolve_quiz_info(quiz_id, &self.quizzes).and_then(|info| info.time_limit);

        match QuizSession::new(questions, time_limit) {
            Ok(session) => {
                log::info!(
                    "quiz '{quiz_id}': {} preguntas, límite {:?}",
                    session.total_questions(),
                    time_limit
                );
                self.session = Some(session);
                self.selected_quiz = Some(quiz_id.to_string());
                self.state = AppState::Quiz;
                self.last_tick = None;
                self.message.clear();
            }
            Err(e) => {
                log::warn!("no se pudo iniciar '{quiz_id}': {e}");
                self.session = None;
                self.selected_quiz = None;
                self.state = AppState::Home;
                self.message = format!(
                    "⚠ {} todavía no tiene preguntas.",
                    display_name(quiz_id, &self.quizzes)
                );
            }
        }
    }

    pub fn seleccionar_respuesta(&mut self, option_id: &str) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(e) = session.select_answer(option_id) {
            // Error de programación del llamador: la UI sólo debería
            // pasar ids de la pregunta actual.
            log::warn!("selección rechazada: {e}");
        }
    }

    pub fn saltar_pregunta(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if let Err(e) = session.skip() {
                log::warn!("salto rechazado: {e}");
            }
        }
        self.check_completion();
    }

    pub fn avanzar(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if let Err(e) = session.advance() {
                log::warn!("avance rechazado: {e}");
            }
        }
        self.check_completion();
    }

    pub fn retroceder(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if let Err(e) = session.retreat() {
                log::warn!("retroceso rechazado: {e}");
            }
        }
    }

    /// Reintenta el quiz actual descartando la sesión vieja: barajado
    /// nuevo, respuestas limpias y cuenta atrás al valor configurado.
    /// En el modo aleatorio eso implica un sorteo independiente.
    pub fn reiniciar_quiz(&mut self) {
        let Some(quiz_id) = self.selected_quiz.clone() else {
            return;
        };
        self.empezar_quiz(&quiz_id);
    }

    pub fn volver_al_inicio(&mut self) {
        self.session = None;
        self.selected_quiz = None;
        self.browse_chapter = None;
        self.expanded_questions.clear();
        self.last_tick = None;
        self.state = AppState::Home;
        self.message.clear();
    }

    /// Abre la vista de estudio de un capítulo: todas las preguntas con
    /// su respuesta correcta y explicación, desplegadas de entrada.
    pub fn abrir_capitulo(&mut self, quiz_id: &str) {
        let expanded: HashSet<u32> = match self.banks.chapter(quiz_id) {
            Some(bank) if !bank.questions.is_empty() => {
                bank.questions.iter().map(|q| q.id).collect()
            }
            _ => {
                log::warn!("capítulo sin preguntas: {quiz_id}");
                self.state = AppState::Home;
                self.message = format!(
                    "⚠ {} todavía no tiene preguntas.",
                    display_name(quiz_id, &self.quizzes)
                );
                return;
            }
        };
        self.expanded_questions = expanded;
        self.browse_chapter = Some(quiz_id.to_string());
        self.state = AppState::Browse;
        self.message.clear();
    }

    /// Despliega o pliega una pregunta de la vista de estudio.
    pub fn alternar_pregunta(&mut self, question_id: u32) {
        if !self.expanded_questions.remove(&question_id) {
            self.expanded_questions.insert(question_id);
        }
    }

    pub fn desplegar_todo(&mut self) {
        let Some(id) = self.browse_chapter.as_deref() else {
            return;
        };
        if let Some(bank) = self.banks.chapter(id) {
            self.expanded_questions = bank.questions.iter().map(|q| q.id).collect();
        }
    }

    pub fn plegar_todo(&mut self) {
        self.expanded_questions.clear();
    }

    /// Reloj a 1 Hz sobre el tiempo de egui: entrega a la sesión un tick
    /// por cada segundo entero transcurrido desde el último entregado.
    /// El anfitrión deja de llamar cuando la sesión se completa.
    pub fn tick_clock(&mut self, now: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.is_complete() {
            return;
        }
        let last = self.last_tick.get_or_insert(now);
        while now - *last >= 1.0 {
            *last += 1.0;
            session.tick();
            if session.is_complete() {
                break;
            }
        }
        self.check_completion();
    }

    /// Si la sesión acaba de terminar (por avance o por tiempo), pasa a
    /// la vista de resultados y suelta el reloj.
    fn check_completion(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if session.is_complete() && self.state == AppState::Quiz {
            log::info!(
                "sesión completada ({}) en {} s",
                if session.timed_out() { "por tiempo" } else { "normal" },
                session.elapsed_secs()
            );
            self.last_tick = None;
            self.state = AppState::Results;
        }
    }
}
