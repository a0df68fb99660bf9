use crate::QuizApp;
use crate::model::AppState;
use crate::results::ReviewStatus;
use crate::ui::layout::formato_tiempo;
use egui::{Button, CentralPanel, Color32, Context, RichText, ScrollArea};

fn color_puntuacion(pct: u32) -> Color32 {
    if pct >= 80 {
        Color32::from_rgb(0x4c, 0xaf, 0x50)
    } else if pct >= 60 {
        Color32::from_rgb(0xff, 0x98, 0x00)
    } else {
        Color32::from_rgb(0xf4, 0x43, 0x36)
    }
}

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(results) = app.results() else {
        // Sin sesión terminada no hay nada que enseñar
        app.state = AppState::Home;
        return;
    };
    let (elapsed, timed_out) = match app.session.as_ref() {
        Some(s) => (s.elapsed_secs(), s.timed_out()),
        None => (0, false),
    };

    let mut clicked_restart = false;
    let mut clicked_home = false;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 620.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let button_width = panel_width / 3.0;
        let button_height = 36.0;

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading("🏁 ¡Quiz terminado!");
                    if timed_out {
                        ui.label(
                            RichText::new("⏱ Se acabó el tiempo")
                                .color(Color32::from_rgb(0xf4, 0x43, 0x36))
                                .strong(),
                        );
                    }
                    ui.label(format!("Tiempo empleado: {}", formato_tiempo(elapsed)));
                    ui.add_space(8.0);

                    ui.label(
                        RichText::new(format!("{}%", results.score_percentage))
                            .size(48.0)
                            .color(color_puntuacion(results.score_percentage))
                            .strong(),
                    );
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("✔ {} correctas", results.correct_count))
                                .color(Color32::from_rgb(0x4c, 0xaf, 0x50)),
                        );
                        ui.label(
                            RichText::new(format!("❌ {} incorrectas", results.incorrect_count))
                                .color(Color32::from_rgb(0xf4, 0x43, 0x36)),
                        );
                        ui.label(
                            RichText::new(format!("⏩ {} saltadas", results.skipped_count))
                                .color(Color32::from_rgb(0xff, 0x98, 0x00)),
                        );
                    });
                    ui.add_space(12.0);

                    ui.heading("Repaso");
                    ui.add_space(4.0);
                    ScrollArea::vertical().max_height(380.0).show(ui, |ui| {
                        for entry in &results.review {
                            let (icon, color) = match entry.status {
                                ReviewStatus::Correct => ("✔", Color32::from_rgb(0x4c, 0xaf, 0x50)),
                                ReviewStatus::Incorrect => {
                                    ("❌", Color32::from_rgb(0xf4, 0x43, 0x36))
                                }
                                ReviewStatus::Skipped => {
                                    ("⏩", Color32::from_rgb(0xff, 0x98, 0x00))
                                }
                            };
                            egui::Frame::group(ui.style())
                                .inner_margin(egui::Margin::symmetric(12, 8))
                                .show(ui, |ui| {
                                    ui.set_width(panel_width - 24.0);
                                    ui.label(
                                        RichText::new(format!(
                                            "{icon} {}. {}",
                                            entry.number, entry.prompt
                                        ))
                                        .color(color)
                                        .strong(),
                                    );
                                    match entry.status {
                                        ReviewStatus::Skipped => {
                                            ui.label("Saltada");
                                        }
                                        _ => {
                                            if let Some(sel) = &entry.selected {
                                                ui.label(format!(
                                                    "Tu respuesta: {}. {}",
                                                    sel.id.to_uppercase(),
                                                    sel.text
                                                ));
                                            } else {
                                                ui.label("Sin responder");
                                            }
                                            if entry.status == ReviewStatus::Incorrect {
                                                match &entry.correct {
                                                    Some(c) => {
                                                        ui.label(format!(
                                                            "Respuesta correcta: {}. {}",
                                                            c.id.to_uppercase(),
                                                            c.text
                                                        ));
                                                    }
                                                    None => {
                                                        ui.label("⚠ Pregunta con datos inválidos");
                                                    }
                                                }
                                            }
                                        }
                                    }
                                    if let Some(explanation) = &entry.explanation {
                                        ui.label(format!("💡 {explanation}"));
                                    }
                                });
                            ui.add_space(6.0);
                        }
                    });

                    ui.add_space(12.0);
                    ui.horizontal_centered(|ui| {
                        let volver = ui.add_sized(
                            [button_width, button_height],
                            Button::new("🏠 Volver al inicio"),
                        );
                        let retomar = ui.add_sized(
                            [button_width, button_height],
                            Button::new("🔄 Repetir quiz"),
                        );
                        if volver.clicked() {
                            clicked_home = true;
                        }
                        if retomar.clicked() {
                            clicked_restart = true;
                        }
                    });
                });
        });
    });

    if clicked_restart {
        app.reiniciar_quiz();
    }
    if clicked_home {
        app.volver_al_inicio();
    }
}
