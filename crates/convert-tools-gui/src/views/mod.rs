pub mod assemble;
pub mod split;

pub use assemble::AssembleState;
pub use split::SplitState;

use eframe::egui;
use pdf_assemble::{Notification, Severity};

/// Inline status banner; replaced wholesale on every operation
pub fn notification_banner(ui: &mut egui::Ui, notification: &Notification) {
    let color = match notification.severity {
        Severity::Success => egui::Color32::from_rgb(70, 160, 70),
        Severity::Error => egui::Color32::from_rgb(200, 70, 70),
        Severity::Info => ui.visuals().text_color(),
    };
    ui.colored_label(color, &notification.message);
}
