use crate::QuizApp;
use egui::{Color32, Context, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🏠 Volver al inicio").clicked() {
                app.volver_al_inicio();
                ctx.request_repaint();
            }
            ui.label(app.quiz_title());
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Formatea segundos como M:SS para la cuenta atrás.
pub fn formato_tiempo(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Color de la cuenta atrás: rojo en el último minuto, ámbar bajo cinco.
pub fn color_tiempo(secs: u32) -> Color32 {
    if secs <= 60 {
        Color32::from_rgb(0xf4, 0x43, 0x36)
    } else if secs <= 300 {
        Color32::from_rgb(0xff, 0x98, 0x00)
    } else {
        Color32::from_rgb(0x4c, 0xaf, 0x50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formato_tiempo_pads_seconds() {
        assert_eq!(formato_tiempo(0), "0:00");
        assert_eq!(formato_tiempo(65), "1:05");
        assert_eq!(formato_tiempo(600), "10:00");
    }
}
