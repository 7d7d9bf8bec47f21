use eframe::egui;
use pdf_assemble::{
    CandidateImage, EntryId, ImageCollection, MARGIN_RANGE_MM, MAX_IMAGES, MoveDirection,
    Notification, Orientation, PageSettings, QUALITY_RANGE,
};
use pdf_async_runtime::ConvertCommand;
use std::path::PathBuf;
use tokio::sync::mpsc;

const THUMBNAIL_EDGE: u32 = 160;

/// Preview resource attached to each list entry. The entry owns it, so
/// removing the entry releases the texture with it.
pub struct EntryPreview {
    pub texture: Option<egui::TextureHandle>,
}

pub struct AssembleState {
    pub collection: ImageCollection<EntryPreview>,
    pub settings: PageSettings,
}

impl Default for AssembleState {
    fn default() -> Self {
        Self {
            collection: ImageCollection::new(),
            settings: PageSettings::default(),
        }
    }
}

/// Read the given paths and feed them through collection intake.
pub fn intake_paths(
    state: &mut AssembleState,
    ctx: &egui::Context,
    paths: Vec<PathBuf>,
) -> Notification {
    let mut batch = Vec::new();
    for path in paths {
        match std::fs::read(&path) {
            Ok(data) => {
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("image")
                    .to_string();
                batch.push(CandidateImage { name, data });
            }
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }
    }

    state.collection.add_images(batch, |candidate, _kind| EntryPreview {
        texture: load_thumbnail(ctx, &candidate.name, &candidate.data),
    })
}

/// Decode a downscaled preview texture. A failed decode leaves the slot
/// empty rather than rejecting the entry.
fn load_thumbnail(ctx: &egui::Context, name: &str, data: &[u8]) -> Option<egui::TextureHandle> {
    let decoded = image::load_from_memory(data).ok()?;
    let thumb = decoded.thumbnail(THUMBNAIL_EDGE, THUMBNAIL_EDGE).to_rgba8();
    let size = [thumb.width() as usize, thumb.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, thumb.as_raw());
    Some(ctx.load_texture(format!("thumb-{name}"), color_image, egui::TextureOptions::default()))
}

pub fn show(
    ui: &mut egui::Ui,
    state: &mut AssembleState,
    command_tx: &mpsc::UnboundedSender<ConvertCommand>,
    busy: &mut bool,
) -> Option<Notification> {
    let mut notification = None;

    ui.heading("Images → PDF");
    ui.label("Drop image files anywhere, or add them below. Drag rows to reorder.");
    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("➕ Add Images").clicked() {
            if let Some(paths) = rfd::FileDialog::new()
                .add_filter("Images", &["jpg", "jpeg", "png", "webp", "gif"])
                .pick_files()
            {
                notification = Some(intake_paths(state, ui.ctx(), paths));
            }
        }

        if ui
            .add_enabled(!state.collection.is_empty(), egui::Button::new("🗑 Clear All"))
            .clicked()
        {
            notification = Some(state.collection.clear());
        }

        ui.label(format!("{}/{} images", state.collection.len(), MAX_IMAGES));
    });

    ui.add_space(5.0);

    if let Some(n) = show_image_list(ui, state) {
        notification = Some(n);
    }

    ui.add_space(10.0);
    ui.separator();
    show_settings(ui, state, command_tx);
    ui.add_space(10.0);

    show_generate_button(ui, state, command_tx, busy);

    notification
}

fn show_image_list(ui: &mut egui::Ui, state: &mut AssembleState) -> Option<Notification> {
    if state.collection.is_empty() {
        ui.label("No images yet");
        return None;
    }

    let mut notification = None;
    let mut to_move = None;
    let mut to_remove = None;
    let mut to_relocate = None;

    egui::ScrollArea::vertical().max_height(380.0).show(ui, |ui| {
        let last = state.collection.len() - 1;
        for (index, entry) in state.collection.iter().enumerate() {
            let row_id = egui::Id::new(("assemble-row", entry.id));
            let response = ui
                .dnd_drag_source(row_id, entry.id, |ui| {
                    ui.horizontal(|ui| {
                        if let Some(texture) = &entry.preview.texture {
                            ui.add(
                                egui::Image::new(texture).fit_to_exact_size(egui::vec2(48.0, 48.0)),
                            );
                        } else {
                            ui.label("🖼");
                        }

                        ui.label(format!("{}. {}", index + 1, entry.name));
                        ui.weak(entry.kind.label());

                        if index > 0 && ui.small_button("▲").clicked() {
                            to_move = Some((index, MoveDirection::Up));
                        }
                        if index < last && ui.small_button("▼").clicked() {
                            to_move = Some((index, MoveDirection::Down));
                        }
                        if ui.small_button("✖").clicked() {
                            to_remove = Some(entry.id);
                        }
                    });
                })
                .response;

            // A row being dragged over this one relocates to just above it
            if response.dnd_hover_payload::<EntryId>().is_some() {
                let rect = response.rect;
                ui.painter().hline(
                    rect.x_range(),
                    rect.top(),
                    egui::Stroke::new(2.0, ui.visuals().selection.bg_fill),
                );
            }
            if let Some(source) = response.dnd_release_payload::<EntryId>() {
                to_relocate = Some((*source, entry.id));
            }
        }
    });

    if let Some((index, direction)) = to_move {
        state.collection.move_entry(index, direction);
    }
    if let Some((source, target)) = to_relocate {
        state.collection.reorder(source, target);
    }
    if let Some(id) = to_remove {
        notification = state.collection.remove(id);
    }

    notification
}

fn show_settings(
    ui: &mut egui::Ui,
    state: &mut AssembleState,
    command_tx: &mpsc::UnboundedSender<ConvertCommand>,
) {
    egui::CollapsingHeader::new("📐 Page Settings")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Orientation:");
                ui.selectable_value(
                    &mut state.settings.orientation,
                    Orientation::Portrait,
                    "Portrait",
                );
                ui.selectable_value(
                    &mut state.settings.orientation,
                    Orientation::Landscape,
                    "Landscape",
                );
            });

            ui.add(
                egui::Slider::new(&mut state.settings.margin_mm, MARGIN_RANGE_MM)
                    .text("Margin")
                    .suffix(" mm"),
            );
            ui.add(
                egui::Slider::new(&mut state.settings.quality, QUALITY_RANGE)
                    .text("JPEG quality")
                    .suffix(" %"),
            );

            ui.add_space(5.0);
            ui.horizontal(|ui| {
                if ui.button("💾 Save Settings").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON", &["json"])
                        .set_file_name("page_settings.json")
                        .save_file()
                    {
                        let _ = command_tx.send(ConvertCommand::SettingsSave {
                            settings: state.settings.clone(),
                            path,
                        });
                    }
                }
                if ui.button("📂 Load Settings").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON", &["json"])
                        .pick_file()
                    {
                        let _ = command_tx.send(ConvertCommand::SettingsLoad { path });
                    }
                }
            });
        });
}

fn show_generate_button(
    ui: &mut egui::Ui,
    state: &AssembleState,
    command_tx: &mpsc::UnboundedSender<ConvertCommand>,
    busy: &mut bool,
) {
    let can_generate = !state.collection.is_empty() && !*busy;

    if ui
        .add_enabled(can_generate, egui::Button::new("📄 Create PDF…"))
        .clicked()
    {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name(pdf_assemble::default_output_name())
            .save_file()
        {
            log::info!(
                "Assembling {} image(s) to {}",
                state.collection.len(),
                path.display()
            );
            *busy = true;
            let _ = command_tx.send(ConvertCommand::AssembleGenerate {
                images: state.collection.to_sources(),
                settings: state.settings.clone(),
                output_path: path,
            });
        }
    }
}
