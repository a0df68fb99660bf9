mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTÓN SUPERIOR DE VOLVER AL INICIO (fuera de la pantalla principal)
        if matches!(
            self.state,
            AppState::Quiz | AppState::Results | AppState::Browse
        ) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Reloj de la sesión: un tick por segundo mientras está en curso.
        // Al completarse deja de pedirse el repintado periódico.
        if matches!(self.state, AppState::Quiz) {
            let now = ctx.input(|i| i.time);
            self.tick_clock(now);
            if matches!(self.state, AppState::Quiz) {
                ctx.request_repaint_after(std::time::Duration::from_secs(1));
            }
        }

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Browse => views::browse::ui_browse(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
        }
    }
}
