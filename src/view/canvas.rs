// SPDX-License-Identifier: GPL-3.0-or-later
// src/view/canvas.rs
//
// Render the center canvas area: the image with the selection overlay on top.

use cosmic::iced::{ContentFit, Length};
use cosmic::iced_widget::stack;
use cosmic::widget::{container, text};
use cosmic::Element;

use super::overlay::selection_overlay;
use crate::app::{AppMessage, AppModel};
use crate::config::AppConfig;
use crate::fl;

pub fn view<'a>(model: &'a AppModel, config: &'a AppConfig) -> Element<'a, AppMessage> {
    let Some(doc) = &model.document else {
        return container(text(fl!("no-image")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into();
    };

    let (width, height) = doc.dimensions();
    let zoom = model.zoom_factor();

    // The overlay recomputes the same layout from its bounds, so the image
    // widget must stay centered on both axes in every mode.
    let image: Element<'a, AppMessage> = match zoom {
        None => cosmic::widget::image(doc.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(z) => container(
            cosmic::widget::image(doc.handle.clone())
                .content_fit(ContentFit::Fill)
                .width(Length::Fixed(width as f32 * z))
                .height(Length::Fixed(height as f32 * z)),
        )
        .center(Length::Fill)
        .into(),
    };

    let overlay = selection_overlay(
        width,
        height,
        &model.selector,
        zoom,
        model.scale_ctx,
        config.show_grid,
    );

    stack![image, overlay].into()
}
