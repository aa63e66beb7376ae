// SPDX-License-Identifier: GPL-3.0-or-later
// src/view/mod.rs
//
// View layer: toolbar, canvas, and status footer.

pub mod canvas;
pub mod overlay;

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, checkbox, column, container, dropdown, horizontal_space, row, text};
use cosmic::Element;

use crate::app::{AppMessage, AppModel};
use crate::config::AppConfig;
use crate::fl;

pub fn view<'a>(model: &'a AppModel, config: &'a AppConfig) -> Element<'a, AppMessage> {
    column::with_children(vec![
        toolbar(model, config),
        canvas::view(model, config),
        footer(model),
    ])
    .spacing(4)
    .padding(4)
    .into()
}

fn toolbar<'a>(model: &'a AppModel, config: &'a AppConfig) -> Element<'a, AppMessage> {
    let has_doc = model.document.is_some();
    let has_siblings = model.folder_entries.len() > 1;
    let has_selection = model.selector.can_draw_selection();
    let ratio = model.selector.ratio();

    let mut prev = button::standard(fl!("prev"));
    let mut next = button::standard(fl!("next"));
    if has_siblings {
        prev = prev.on_press(AppMessage::PrevImage);
        next = next.on_press(AppMessage::NextImage);
    }

    let mut zoom_out = button::standard("−");
    let mut zoom_in = button::standard("+");
    let mut zoom_fit = button::standard(fl!("zoom-fit"));
    let mut zoom_actual = button::standard(fl!("zoom-actual"));
    if has_doc {
        zoom_out = zoom_out.on_press(AppMessage::ZoomOut);
        zoom_in = zoom_in.on_press(AppMessage::ZoomIn);
        zoom_fit = zoom_fit.on_press(AppMessage::ZoomFit);
        zoom_actual = zoom_actual.on_press(AppMessage::ZoomActualSize);
    }

    let mut center = button::standard(fl!("center"));
    let mut maximize = button::standard(fl!("maximize"));
    let mut reset = button::standard(fl!("reset"));
    if has_selection {
        center = center.on_press(AppMessage::CenterSelection);
        reset = reset.on_press(AppMessage::ResetSelection);
    }
    if has_doc {
        maximize = maximize.on_press(AppMessage::MaximizeSelection);
    }

    let mut crop = button::suggested(fl!("crop"));
    if model.selection_region().is_some() {
        crop = crop.on_press(AppMessage::ApplyCrop);
    }

    let mut save_as = button::standard(fl!("save-as"));
    if has_doc {
        save_as = save_as.on_press(AppMessage::SaveAs);
    }

    row::with_children(vec![
        button::standard(fl!("open"))
            .on_press(AppMessage::OpenFileDialog)
            .into(),
        prev.into(),
        next.into(),
        zoom_out.into(),
        zoom_in.into(),
        zoom_fit.into(),
        zoom_actual.into(),
        checkbox(fl!("lock-ratio"), ratio.enabled)
            .on_toggle(AppMessage::RatioLockToggled)
            .into(),
        dropdown(
            &model.ratio_labels,
            Some(model.ratio_choice),
            AppMessage::RatioPresetSelected,
        )
        .into(),
        cosmic::widget::spin_button(
            fl!("ratio-width"),
            ratio.width,
            1.0,
            1.0,
            100.0,
            AppMessage::RatioWidthChanged,
        )
        .into(),
        cosmic::widget::spin_button(
            fl!("ratio-height"),
            ratio.height,
            1.0,
            1.0,
            100.0,
            AppMessage::RatioHeightChanged,
        )
        .into(),
        checkbox(fl!("grid"), config.show_grid)
            .on_toggle(|_| AppMessage::ToggleGrid)
            .into(),
        horizontal_space().into(),
        center.into(),
        maximize.into(),
        reset.into(),
        crop.into(),
        save_as.into(),
    ])
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn footer<'a>(model: &'a AppModel) -> Element<'a, AppMessage> {
    let mut children: Vec<Element<'a, AppMessage>> = Vec::new();

    if let Some(doc) = &model.document {
        let (w, h) = doc.dimensions();
        let name = doc
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        children.push(text(format!("{name}  {w} × {h} px")).into());

        if let Some(region) = model.selection_region() {
            children.push(
                text(format!(
                    "{} × {} px @ ({}, {})",
                    region.width, region.height, region.x, region.y
                ))
                .into(),
            );
        }
    }

    children.push(horizontal_space().into());

    if let Some(error) = &model.error {
        children.push(text(error.clone()).into());
        children.push(
            button::text(fl!("dismiss"))
                .on_press(AppMessage::ClearError)
                .into(),
        );
    }

    container(
        row::with_children(children)
            .spacing(12)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .into()
}
