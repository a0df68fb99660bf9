use crate::QuizApp;
use crate::model::AppState;
use crate::ui::helpers::option_button;
use crate::ui::layout::{color_tiempo, formato_tiempo};
use egui::{Button, CentralPanel, Context, ProgressBar, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Copia del estado a pintar: los clicks mutan `app` más abajo y no
    // podemos retener préstamos de la sesión mientras tanto.
    let (question, answer, index, total, can_retreat, can_advance, time_remaining) =
        match app.session.as_ref() {
            Some(s) => (
                s.current_question().clone(),
                s.current_answer().clone(),
                s.current_index(),
                s.total_questions(),
                s.can_retreat(),
                s.can_advance(),
                s.time_remaining(),
            ),
            None => {
                app.state = AppState::Home;
                return;
            }
        };

    let show_feedback = answer.selected_answer.is_some() && answer.is_correct.is_some();

    // Intenciones del usuario; se aplican al final del frame.
    let mut clicked_option: Option<String> = None;
    let mut clicked_skip = false;
    let mut clicked_prev = false;
    let mut clicked_next = false;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 12))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    // Cabecera: barra de progreso, contador y cuenta atrás
                    ui.add(ProgressBar::new((index + 1) as f32 / total as f32).desired_height(8.0));
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label(format!("Pregunta {} de {}", index + 1, total));
                        if let Some(secs) = time_remaining {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        RichText::new(format!("⏱ {}", formato_tiempo(secs)))
                                            .color(color_tiempo(secs))
                                            .strong(),
                                    );
                                },
                            );
                        }
                    });
                    ui.add_space(10.0);

                    // Enunciado con scroll acotado
                    ScrollArea::vertical().max_height(140.0).show(ui, |ui| {
                        ui.heading(&question.prompt);
                    });
                    ui.add_space(8.0);

                    // Feedback inmediato tras responder
                    if show_feedback {
                        let correcta = answer.is_correct == Some(true);
                        let feedback = if correcta {
                            RichText::new("✔ ¡Correcto!")
                                .color(egui::Color32::from_rgb(0x4c, 0xaf, 0x50))
                        } else {
                            RichText::new("❌ Incorrecto")
                                .color(egui::Color32::from_rgb(0xf4, 0x43, 0x36))
                        };
                        ui.label(feedback.strong());
                        if let Some(explanation) = &question.explanation {
                            ui.add_space(4.0);
                            ui.label(format!("💡 {explanation}"));
                        }
                        ui.add_space(6.0);
                    }

                    // Opciones: tras responder se bloquean y se colorean
                    for option in &question.options {
                        let selected = answer.selected_answer.as_deref() == Some(option.id.as_str());
                        let is_correct_option = option.id == question.correct_answer;
                        let show_as_correct = show_feedback && is_correct_option;
                        let show_as_incorrect =
                            show_feedback && selected && answer.is_correct == Some(false);
                        if option_button(
                            ui,
                            &option.id,
                            &option.text,
                            panel_width,
                            selected,
                            show_as_correct,
                            show_as_incorrect,
                            !show_feedback,
                        ) {
                            clicked_option = Some(option.id.clone());
                        }
                        ui.add_space(4.0);
                    }

                    ui.add_space(10.0);

                    // Acciones: saltar / anterior / siguiente-terminar
                    ui.horizontal(|ui| {
                        if ui.add(Button::new("⏩ Saltar pregunta")).clicked() {
                            clicked_skip = true;
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let next_label = if can_advance {
                                    "Siguiente ▶"
                                } else {
                                    "Terminar quiz 🏁"
                                };
                                // En la última pregunta, terminar exige
                                // respuesta; saltar queda como salida.
                                let next_enabled = can_advance || answer.selected_answer.is_some();
                                if ui.add_enabled(next_enabled, Button::new(next_label)).clicked()
                                {
                                    clicked_next = true;
                                }
                                if ui
                                    .add_enabled(can_retreat, Button::new("◀ Anterior"))
                                    .clicked()
                                {
                                    clicked_prev = true;
                                }
                            },
                        );
                    });
                });
        });
    });

    if let Some(option_id) = clicked_option {
        app.seleccionar_respuesta(&option_id);
    }
    if clicked_skip {
        app.saltar_pregunta();
    }
    if clicked_prev {
        app.retroceder();
    }
    if clicked_next {
        app.avanzar();
    }
}
