// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Botón de opción de respuesta con estados de feedback.
/// Devuelve true si se ha pulsado (solo posible mientras `enabled`).
pub fn option_button(
    ui: &mut Ui,
    letter: &str,
    text: &str,
    width: f32,
    selected: bool,
    show_as_correct: bool,
    show_as_incorrect: bool,
    enabled: bool,
) -> bool {
    let suffix = if show_as_correct {
        "  ✔"
    } else if show_as_incorrect {
        "  ❌"
    } else {
        ""
    };
    let mut rich = RichText::new(format!("{}. {text}{suffix}", letter.to_uppercase()));
    if show_as_correct {
        rich = rich.color(Color32::from_rgb(0x4c, 0xaf, 0x50)).strong();
    } else if show_as_incorrect {
        rich = rich.color(Color32::from_rgb(0xf4, 0x43, 0x36)).strong();
    } else if selected {
        rich = rich.strong();
    }

    let mut button = Button::new(rich)
        .min_size(Vec2::new(width, 36.0))
        .wrap();
    if selected {
        button = button.stroke(Stroke::new(2.0, ui.visuals().hyperlink_color));
    }
    ui.add_enabled(enabled, button).clicked()
}
