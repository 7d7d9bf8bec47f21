use eframe::egui;
use pdf_assemble::Notification;
use pdf_async_runtime::{ConvertCommand, ConvertUpdate};
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views::{self, AssembleState, SplitState};

#[derive(Default, PartialEq)]
enum Mode {
    #[default]
    Assemble,
    Split,
}

pub struct ConvertApp {
    mode: Mode,
    assemble: AssembleState,
    split: SplitState,

    /// Most recent notification; each operation replaces it outright
    notification: Option<Notification>,
    /// Set while the worker is running a job; gates the trigger buttons
    busy: bool,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<ConvertCommand>,
    update_rx: mpsc::UnboundedReceiver<ConvertUpdate>,

    logger: AppLogger,

    // Runtime handle kept alive for the worker task
    _tokio_handle: tokio::runtime::Handle,
}

impl ConvertApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            mode: Mode::default(),
            assemble: AssembleState::default(),
            split: SplitState::default(),
            notification: None,
            busy: false,
            command_tx,
            update_rx,
            logger,
            _tokio_handle: tokio_handle,
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    fn process_updates(&mut self, ctx: &egui::Context) {
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                ConvertUpdate::Progress {
                    operation,
                    current,
                    total,
                } => {
                    log::info!("{} ({}/{})", operation, current, total);
                    ctx.request_repaint();
                }
                ConvertUpdate::AssembleComplete { path, page_count } => {
                    self.busy = false;
                    self.notify(Notification::success(format!(
                        "Created a {} page PDF → {}",
                        page_count,
                        path.display()
                    )));
                }
                ConvertUpdate::SettingsLoaded { settings } => {
                    self.assemble.settings = settings;
                    self.notify(Notification::info("Settings loaded"));
                }
                ConvertUpdate::SplitLoaded { path, page_count } => {
                    self.busy = false;
                    self.split.input = Some(path);
                    self.split.page_count = Some(page_count);
                    self.notify(Notification::info(format!(
                        "Loaded PDF with {} page(s)",
                        page_count
                    )));
                }
                ConvertUpdate::SplitComplete { path, page_count } => {
                    self.busy = false;
                    self.notify(Notification::success(format!(
                        "Extracted {} page(s) → {}",
                        page_count,
                        path.display()
                    )));
                }
                ConvertUpdate::Error { message } => {
                    self.busy = false;
                    log::error!("{message}");
                    self.notify(Notification::error(message));
                }
            }
        }
    }
}

impl eframe::App for ConvertApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Files dropped onto the window feed the image list
        let dropped: Vec<std::path::PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.mode = Mode::Assemble;
            let notification = views::assemble::intake_paths(&mut self.assemble, ctx, dropped);
            self.notify(notification);
        }

        self.process_updates(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.mode, Mode::Assemble, "🖼 Images → PDF");
                ui.selectable_value(&mut self.mode, Mode::Split, "✂ Split PDF");
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            if self.busy {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Working…");
                });
                ctx.request_repaint();
            }

            if let Some(notification) = &self.notification {
                views::notification_banner(ui, notification);
            }

            egui::CollapsingHeader::new("Activity")
                .default_open(false)
                .show(ui, |ui| {
                    for line in self.logger.lines().iter().rev().take(8) {
                        ui.weak(format!(
                            "{} [{}] {}",
                            line.timestamp.format("%H:%M:%S"),
                            line.level,
                            line.message
                        ));
                    }
                });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let notification = match self.mode {
                Mode::Assemble => {
                    views::assemble::show(ui, &mut self.assemble, &self.command_tx, &mut self.busy)
                }
                Mode::Split => {
                    views::split::show(ui, &mut self.split, &self.command_tx, &mut self.busy)
                }
            };
            if let Some(n) = notification {
                self.notify(n);
            }
        });
    }
}
