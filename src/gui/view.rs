use iced::widget::{button, column, container, image as picture, row, text};
use iced::{Element, Length};

use crate::gui::app::{ModelStatus, TumorscanApp};
use crate::gui::message::Message;

/// Two-column results layout with the upload and detect controls in a
/// sidebar, mirroring the interaction flow: pick an image, inspect it, then
/// explicitly trigger detection.
pub fn view(app: &TumorscanApp) -> Element<'_, Message> {
    row![sidebar(app), main_panel(app)]
        .spacing(20)
        .padding(20)
        .into()
}

fn sidebar(app: &TumorscanApp) -> Element<'_, Message> {
    let mut pick = button("Choose an MRI image...");
    if !app.session.is_detecting() {
        pick = pick.on_press(Message::PickImage);
    }

    let model_ready = matches!(&app.model, ModelStatus::Ready(context) if context.can_detect());
    let mut detect = button("Detect Tumor");
    if model_ready && app.session.can_request_detection() {
        detect = detect.on_press(Message::DetectRequested);
    }

    let mut items = column![text("Upload MRI Image").size(20), pick, detect].spacing(20);

    match &app.model {
        ModelStatus::Loading => {
            items = items.push(text("Loading model..."));
        }
        ModelStatus::Ready(context) => {
            if let Some(error) = context.model_error() {
                items = items.push(text(error));
                items = items.push(text(
                    "Model loading failed. Please check the model file and dependencies.",
                ));
            }
        }
    }

    container(items).width(Length::Fixed(260.0)).into()
}

fn main_panel(app: &TumorscanApp) -> Element<'_, Message> {
    let mut content = column![
        text("Brain Tumor Detection").size(32),
        text("Upload your MRI scan and run detection to see annotated results."),
    ]
    .spacing(20);

    if let Some(error) = app.session.error() {
        content = content.push(text(error));
    }

    if app.session.is_detecting() {
        content = content.push(text("Detecting..."));
    }

    if let Some(original) = &app.original {
        let left = column![
            picture(original.clone()).width(Length::Fill),
            text("Uploaded MRI Image"),
        ]
        .spacing(10);

        let mut columns = row![left].spacing(20);
        if let Some(annotated) = &app.annotated {
            let right = column![
                picture(annotated.clone()).width(Length::Fill),
                text("Detection Results"),
            ]
            .spacing(10);
            columns = columns.push(right);
        }

        content = content.push(text("Uploaded and Detected Images").size(20));
        content = content.push(columns);
    }

    if let Some(result) = app.session.result() {
        let mut report = column![].spacing(5);
        if result.regions.is_empty() {
            report = report.push(text("No tumor regions reported."));
        }
        for region in &result.regions {
            report = report.push(text(format!("Detected: {}", region.label)));
            report = report.push(text(format!(
                "Detection Confidence: {}",
                region.confidence_percent()
            )));
        }
        content = content.push(report);
    }

    container(content).width(Length::Fill).into()
}
