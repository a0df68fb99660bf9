use crate::QuizApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Color32, Context, RichText, ScrollArea};

pub fn ui_browse(app: &mut QuizApp, ctx: &Context) {
    // Copia del estado a pintar; los clicks mutan `app` al final.
    let rows = app.browse_rows();
    if rows.is_empty() {
        app.state = AppState::Home;
        return;
    }
    let title = app.quiz_title();
    let quiz_id = app.browse_chapter.clone();

    // Intenciones del usuario
    let mut clicked_toggle: Option<u32> = None;
    let mut clicked_expand_all = false;
    let mut clicked_collapse_all = false;
    let mut clicked_start = false;

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

                    ui.heading(format!("📖 {title}"));
                    ui.label("Todas las preguntas con su respuesta y explicación.");
                    ui.add_space(6.0);

                    ui.horizontal(|ui| {
                        if ui.add(Button::new("▼ Desplegar todo")).clicked() {
                            clicked_expand_all = true;
                        }
                        if ui.add(Button::new("▶ Plegar todo")).clicked() {
                            clicked_collapse_all = true;
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.add(Button::new("🏁 Hacer el quiz")).clicked() {
                                    clicked_start = true;
                                }
                            },
                        );
                    });
                    ui.add_space(10.0);

                    ScrollArea::vertical().show(ui, |ui| {
                        for row in &rows {
                            egui::Frame::group(ui.style())
                                .inner_margin(egui::Margin::symmetric(12, 8))
                                .show(ui, |ui| {
                                    ui.set_width(panel_width - 24.0);

                                    // Cabecera clicable para desplegar/plegar
                                    if ui
                                        .add(
                                            Button::new(
                                                RichText::new(row.header_label()).strong(),
                                            )
                                            .frame(false)
                                            .wrap(),
                                        )
                                        .clicked()
                                    {
                                        clicked_toggle = Some(row.id);
                                    }

                                    if row.expanded {
                                        ui.add_space(4.0);
                                        for option in &row.options {
                                            let es_correcta = option.id == row.correct_answer;
                                            let mut line = format!(
                                                "{}. {}",
                                                option.id.to_uppercase(),
                                                option.text
                                            );
                                            if es_correcta {
                                                line.push_str("  ✔ Correcta");
                                            }
                                            let mut rich = RichText::new(line);
                                            if es_correcta {
                                                rich = rich
                                                    .color(Color32::from_rgb(0x4c, 0xaf, 0x50))
                                                    .strong();
                                            }
                                            ui.label(rich);
                                        }
                                        if let Some(explanation) = &row.explanation {
                                            ui.add_space(4.0);
                                            ui.label(format!("💡 {explanation}"));
                                        }
                                    }
                                });
                            ui.add_space(6.0);
                        }
                    });
                });
        });
    });

    if let Some(question_id) = clicked_toggle {
        app.alternar_pregunta(question_id);
    }
    if clicked_expand_all {
        app.desplegar_todo();
    }
    if clicked_collapse_all {
        app.plegar_todo();
    }
    if clicked_start {
        if let Some(id) = quiz_id {
            app.empezar_quiz(&id);
        }
    }
}
