use eframe::egui;
use pdf_assemble::Notification;
use pdf_async_runtime::ConvertCommand;
use pdf_split::PageSet;
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Default)]
pub struct SplitState {
    pub input: Option<PathBuf>,
    pub page_count: Option<usize>,
    pub selection: String,
}

pub fn show(
    ui: &mut egui::Ui,
    state: &mut SplitState,
    command_tx: &mpsc::UnboundedSender<ConvertCommand>,
    busy: &mut bool,
) -> Option<Notification> {
    let mut notification = None;

    ui.heading("Split PDF");
    ui.label("Pick a PDF, then choose the pages to extract.");
    ui.separator();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!*busy, egui::Button::new("📂 Open PDF…"))
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new().add_filter("PDF", &["pdf"]).pick_file() {
                *busy = true;
                let _ = command_tx.send(ConvertCommand::SplitLoad { path });
            }
        }

        match (&state.input, state.page_count) {
            (Some(path), Some(pages)) => {
                ui.label(format!("{} — {} page(s)", path.display(), pages));
            }
            _ => {
                ui.label("No PDF loaded");
            }
        }
    });

    ui.add_space(5.0);

    ui.horizontal(|ui| {
        ui.label("Pages:");
        ui.add(egui::TextEdit::singleline(&mut state.selection).hint_text("e.g. 1,3-5,8"));
    });

    ui.add_space(10.0);

    let ready = state.input.is_some() && !*busy;
    if ui
        .add_enabled(ready, egui::Button::new("✂ Extract Pages…"))
        .clicked()
    {
        // Validation failures surface immediately; nothing is sent
        match PageSet::parse(&state.selection) {
            Err(e) => notification = Some(Notification::error(e.to_string())),
            Ok(selection) => {
                let known_pages = state.page_count.unwrap_or(0) as u32;
                if selection.max_page() > known_pages {
                    notification = Some(Notification::error(format!(
                        "Selection goes past page {known_pages}"
                    )));
                } else if let Some(input) = state.input.clone() {
                    if let Some(output) = rfd::FileDialog::new()
                        .add_filter("PDF", &["pdf"])
                        .set_file_name("split.pdf")
                        .save_file()
                    {
                        *busy = true;
                        let _ = command_tx.send(ConvertCommand::SplitGenerate {
                            input_path: input,
                            selection: state.selection.clone(),
                            output_path: output,
                        });
                    }
                }
            }
        }
    }

    notification
}
