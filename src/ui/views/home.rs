use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use egui::{Align, CentralPanel, Context, RichText, ScrollArea};

pub fn ui_home(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 560.0;
        let content_width = (ui.available_width() * 0.97).min(max_width);

        ui.add_space(16.0);
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("📚 Chapter Quiz");
            ui.label("Pon a prueba lo que sabes, capítulo a capítulo.");
            ui.add_space(8.0);

            if !app.message.is_empty() {
                ui.label(RichText::new(&app.message).color(egui::Color32::YELLOW));
                ui.add_space(8.0);
            }

            let cards = app.quiz_cards();
            if cards.is_empty() {
                ui.add_space(24.0);
                ui.label("No hay quizzes disponibles ahora mismo.");
                return;
            }

            ScrollArea::vertical().show(ui, |ui| {
                for card in &cards {
                    egui::Frame::group(ui.style())
                        .inner_margin(egui::Margin::symmetric(16, 12))
                        .show(ui, |ui| {
                            ui.set_width(content_width);
                            ui.horizontal(|ui| {
                                let name = if card.featured {
                                    RichText::new(format!("⭐ {}", card.name)).heading()
                                } else {
                                    RichText::new(&card.name).heading()
                                };
                                ui.label(name);
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(card.badge_label());
                                    },
                                );
                            });
                            ui.label(&card.description);
                            ui.add_space(4.0);
                            ui.horizontal(|ui| {
                                ui.label(card.count_label());
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        let enabled = card.question_count > 0;
                                        if big_list_button(
                                            ui,
                                            "▶ Empezar".to_string(),
                                            110.0,
                                            32.0,
                                            enabled,
                                        ) {
                                            app.empezar_quiz(&card.id);
                                        }
                                        // El reto aleatorio no tiene banco propio que repasar
                                        if !card.featured
                                            && big_list_button(
                                                ui,
                                                "📖 Ver preguntas".to_string(),
                                                140.0,
                                                32.0,
                                                enabled,
                                            )
                                        {
                                            app.abrir_capitulo(&card.id);
                                        }
                                    },
                                );
                            });
                        });
                    ui.add_space(8.0);
                }
            });
        });
    });
}
