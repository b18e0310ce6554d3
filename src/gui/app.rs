use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::image::Handle;
use iced::{Element, Task, Theme};
use image::{DynamicImage, RgbImage};
use rfd::AsyncFileDialog;
use tracing::warn;

use crate::context::AppContext;
use crate::detection::{TumorDetector, ingest};
use crate::models::{DetectionResult, UploadedImage};
use crate::session::Session;

use super::message::{Message, PickedFile};
use super::view;

/// Whether the one-time model load has finished.
pub enum ModelStatus {
    Loading,
    Ready(AppContext),
}

pub struct TumorscanApp {
    pub session: Session,
    pub model: ModelStatus,
    /// Cached render handles for the current upload and result.
    pub original: Option<Handle>,
    pub annotated: Option<Handle>,
}

/// Launch the interactive application.
pub fn run(model_path: PathBuf) -> iced::Result {
    iced::application(
        move || TumorscanApp::boot(model_path.clone()),
        TumorscanApp::update,
        TumorscanApp::view,
    )
    .title(TumorscanApp::title)
    .theme(TumorscanApp::theme)
    .run()
}

impl TumorscanApp {
    pub fn boot(model_path: PathBuf) -> (Self, Task<Message>) {
        let app = Self {
            session: Session::new(),
            model: ModelStatus::Loading,
            original: None,
            annotated: None,
        };
        let load = Task::perform(
            async move {
                tokio::task::spawn_blocking(move || AppContext::initialize(&model_path))
                    .await
                    .unwrap_or_else(|e| AppContext::failed(format!("model loader task failed: {e}")))
            },
            Message::ModelLoaded,
        );
        (app, load)
    }

    pub fn title(&self) -> String {
        "Brain Tumor Detection".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ModelLoaded(context) => {
                self.model = ModelStatus::Ready(context);
                Task::none()
            }
            Message::PickImage => Task::perform(pick_image(), Message::ImagePicked),
            Message::ImagePicked(None) => Task::none(),
            Message::ImagePicked(Some(file)) => {
                self.ingest(file);
                Task::none()
            }
            Message::DetectRequested => self.start_detection(),
            Message::DetectionFinished(Ok(result)) => {
                self.annotated = Some(rgb_handle(&result.annotated));
                self.session.complete_detection(result);
                Task::none()
            }
            Message::DetectionFinished(Err(message)) => {
                self.session.report_error(message);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn ingest(&mut self, file: PickedFile) {
        match ingest::decode_image(&file.bytes, &file.extension) {
            Ok(image) => {
                let handle = rgb_handle(&image);
                let uploaded = UploadedImage {
                    file_name: file.file_name,
                    image,
                };
                if self.session.upload(uploaded) {
                    self.original = Some(handle);
                    self.annotated = None;
                }
            }
            Err(e) => {
                warn!("upload rejected: {e}");
                self.session.report_error(e.to_string());
            }
        }
    }

    fn start_detection(&mut self) -> Task<Message> {
        let ModelStatus::Ready(context) = &self.model else {
            return Task::none();
        };
        let Some(detector) = context.detector() else {
            self.session.report_error(
                "Model loading failed. Please check the model file and dependencies.",
            );
            return Task::none();
        };
        let Some(uploaded) = self.session.begin_detection() else {
            return Task::none();
        };
        // A re-run must not leave the previous annotation on screen.
        self.annotated = None;
        Task::perform(
            run_detection(detector, uploaded),
            Message::DetectionFinished,
        )
    }
}

async fn pick_image() -> Option<PickedFile> {
    let handle = AsyncFileDialog::new()
        .set_title("Choose an MRI image...")
        .add_filter("MRI image", &ingest::SUPPORTED_EXTENSIONS)
        .pick_file()
        .await?;

    let extension = handle
        .path()
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();

    Some(PickedFile {
        file_name: handle.file_name(),
        extension,
        bytes: handle.read().await,
    })
}

async fn run_detection(
    detector: Arc<TumorDetector>,
    uploaded: UploadedImage,
) -> Result<DetectionResult, String> {
    tokio::task::spawn_blocking(move || {
        detector.detect(&uploaded.image).map_err(|e| e.to_string())
    })
    .await
    .unwrap_or_else(|e| Err(format!("detection task failed: {e}")))
}

fn rgb_handle(image: &RgbImage) -> Handle {
    let rgba = DynamicImage::ImageRgb8(image.clone()).into_rgba8();
    Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_raw())
}
