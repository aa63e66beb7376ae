// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message dispatch: mutate application state in response to messages.

use std::path::{Path, PathBuf};

use crate::app::message::AppMessage;
use crate::app::model::ViewMode;
use crate::app::TaleaApp;
use crate::constant::{OFFSET_EPSILON, SCALE_EPSILON};
use crate::document::{is_supported_image, RasterDocument};
use crate::select::{clamp_axis, preset_index, Rect, COMMON_RATIOS};

pub fn update(app: &mut TaleaApp, message: &AppMessage) {
    match message {
        AppMessage::OpenFileDialog => {
            let start_dir = app
                .model
                .document
                .as_ref()
                .and_then(|doc| doc.path().parent().map(Path::to_path_buf))
                .or_else(|| app.config.default_image_dir.clone());

            let mut dialog = rfd::FileDialog::new().add_filter(
                "Images",
                &["png", "jpg", "jpeg", "bmp", "gif", "webp", "tif", "tiff"],
            );
            if let Some(dir) = start_dir {
                dialog = dialog.set_directory(dir);
            }

            if let Some(path) = dialog.pick_file() {
                open_path(app, &path);
            }
        }

        AppMessage::OpenPath(path) => open_path(app, path),

        AppMessage::NextImage => step_folder(app, 1),
        AppMessage::PrevImage => step_folder(app, -1),

        AppMessage::SaveAs => {
            let Some(doc) = &app.model.document else {
                return;
            };

            let mut dialog = rfd::FileDialog::new();
            if let Some(parent) = doc.path().parent() {
                dialog = dialog.set_directory(parent);
            }
            if let Some(name) = doc.path().file_name() {
                dialog = dialog.set_file_name(name.to_string_lossy());
            }

            if let Some(target) = dialog.save_file() {
                match doc.save_as(&target) {
                    Ok(()) => app.model.clear_error(),
                    Err(e) => {
                        log::error!("save as failed: {e:#}");
                        app.model.set_error(e.to_string());
                    }
                }
            }
        }

        AppMessage::ZoomIn => {
            let step = app.config.scale_step;
            zoom_by(app, step);
        }
        AppMessage::ZoomOut => {
            let step = app.config.scale_step;
            zoom_by(app, -step);
        }

        AppMessage::ZoomFit => {
            app.model.view_mode = ViewMode::Fit;
            app.model.selector.reset();
        }

        AppMessage::ZoomActualSize => {
            app.model.view_mode = ViewMode::ActualSize;
            app.model.selector.reset();
        }

        AppMessage::ViewerStateChanged { scale, offset_x } => {
            let ctx = &mut app.model.scale_ctx;
            let changed = (scale - ctx.image_scale).abs() > SCALE_EPSILON
                || (offset_x - ctx.horizontal_offset).abs() > OFFSET_EPSILON;
            if !changed {
                return;
            }

            ctx.image_scale = *scale;
            ctx.horizontal_offset = *offset_x;

            if let Some(doc) = &app.model.document {
                let (w, h) = doc.dimensions();
                app.model.display =
                    Rect::new(*offset_x, 0.0, w as f32 * scale, h as f32 * scale);
            }

            // Stale display geometry would desync the pixel mapping, so any
            // layout change discards the selection.
            app.model.selector.reset();
        }

        AppMessage::SelectionPointer { event, display } => {
            app.model.display = *display;
            app.model.selector.handle_pointer_event(*event, *display);
        }

        AppMessage::CenterSelection => {
            center_selection(&mut app.model.selector, app.model.display);
        }

        AppMessage::MaximizeSelection => {
            maximize_selection(&mut app.model.selector, app.model.display);
        }

        AppMessage::ResetSelection => app.model.selector.reset(),

        AppMessage::RatioLockToggled(enabled) => {
            let mut ratio = app.model.selector.ratio();
            ratio.enabled = *enabled;
            app.model.selector.set_ratio(ratio);
        }

        AppMessage::RatioPresetSelected(index) => {
            app.model.ratio_choice = *index;
            if let Some(preset) = COMMON_RATIOS.get(*index) {
                let mut ratio = app.model.selector.ratio();
                ratio.width = preset.width;
                ratio.height = preset.height;
                app.model.selector.set_ratio(ratio);
            }
        }

        AppMessage::RatioWidthChanged(value) => {
            let mut ratio = app.model.selector.ratio();
            ratio.width = *value;
            app.model.selector.set_ratio(ratio);
            sync_ratio_choice(app);
        }

        AppMessage::RatioHeightChanged(value) => {
            let mut ratio = app.model.selector.ratio();
            ratio.height = *value;
            app.model.selector.set_ratio(ratio);
            sync_ratio_choice(app);
        }

        AppMessage::ApplyCrop => {
            let Some(region) = app.model.selection_region() else {
                return;
            };
            let Some(doc) = &mut app.model.document else {
                return;
            };

            match doc.crop_and_save(region) {
                Ok(()) => {
                    app.model.selector.reset();
                    app.model.view_mode = ViewMode::Fit;
                    app.model.clear_error();
                }
                Err(e) => {
                    log::error!("crop failed: {e:#}");
                    app.model.set_error(e.to_string());
                }
            }
        }

        AppMessage::ClearError => app.model.clear_error(),

        // Handled in the application shell (persists config).
        AppMessage::ToggleGrid => {}
    }
}

/// Open an image and rebuild the sibling list for folder navigation.
pub fn open_path(app: &mut TaleaApp, path: &Path) {
    match RasterDocument::open(path) {
        Ok(doc) => {
            app.model.folder_entries = scan_folder(path);
            app.model.current_index = app
                .model
                .folder_entries
                .iter()
                .position(|entry| entry == path);
            app.model.document = Some(doc);
            app.model.view_mode = ViewMode::Fit;
            app.model.selector.reset();
            app.model.clear_error();
            log::info!("opened {}", path.display());
        }
        Err(e) => {
            log::error!("failed to open {}: {e:#}", path.display());
            app.model.set_error(e.to_string());
        }
    }
}

/// Supported images in the same directory, sorted by file name.
fn scan_folder(path: &Path) -> Vec<PathBuf> {
    let Some(parent) = path.parent() else {
        return Vec::new();
    };
    let Ok(entries) = std::fs::read_dir(parent) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && is_supported_image(p))
        .collect();
    files.sort();
    files
}

fn step_folder(app: &mut TaleaApp, direction: isize) {
    let len = app.model.folder_entries.len();
    let Some(index) = app.model.current_index else {
        return;
    };
    if len == 0 {
        return;
    }

    let next = (index as isize + direction).rem_euclid(len as isize) as usize;
    if next != index {
        let path = app.model.folder_entries[next].clone();
        open_path(app, &path);
    }
}

fn zoom_by(app: &mut TaleaApp, step: f32) {
    if app.model.document.is_none() {
        return;
    }
    let current = app.model.scale_ctx.image_scale;
    let next = clamp_axis(current + step, app.config.min_scale, app.config.max_scale);
    if (next - current).abs() > f32::EPSILON {
        app.model.view_mode = ViewMode::Custom(next);
        app.model.selector.reset();
    }
}

/// Recenter the selection on the displayed image, size unchanged.
fn center_selection(selector: &mut crate::select::RangeSelector, display: Rect) {
    let selection = selector.selection();
    if selection.is_empty() || display.is_empty() {
        return;
    }
    let center_x = display.x + display.width / 2.0;
    let center_y = display.height / 2.0;
    selector.set_selection_position(
        center_x - selection.width / 2.0,
        center_y - selection.height / 2.0,
    );
}

/// Grow the selection to the largest rectangle of its aspect that fits the
/// displayed image, centered.
fn maximize_selection(selector: &mut crate::select::RangeSelector, display: Rect) {
    if display.is_empty() {
        return;
    }

    let selection = selector.selection();
    let aspect = selector
        .ratio()
        .target_ratio()
        .or_else(|| (selection.height > 0.0).then(|| selection.width / selection.height))
        .unwrap_or(display.width / display.height);

    let display_aspect = display.width / display.height;
    let (width, height) = if display_aspect > aspect {
        (display.height * aspect, display.height)
    } else {
        (display.width, display.width / aspect)
    };

    selector.set_selection(Rect::new(
        display.x + (display.width - width) / 2.0,
        (display.height - height) / 2.0,
        width,
        height,
    ));
}

fn sync_ratio_choice(app: &mut TaleaApp) {
    let ratio = app.model.selector.ratio();
    app.model.ratio_choice =
        preset_index(ratio.width, ratio.height).unwrap_or(COMMON_RATIOS.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::{RangeSelector, RatioConstraint};

    #[test]
    fn center_keeps_size_and_recenters() {
        let display = Rect::new(20.0, 0.0, 400.0, 300.0);
        let mut selector = RangeSelector::new();
        selector.set_selection(Rect::new(30.0, 10.0, 100.0, 50.0));

        center_selection(&mut selector, display);

        let sel = selector.selection();
        assert_eq!(sel.x, 20.0 + 200.0 - 50.0);
        assert_eq!(sel.y, 150.0 - 25.0);
        assert_eq!(sel.width, 100.0);
        assert_eq!(sel.height, 50.0);
    }

    #[test]
    fn center_without_selection_is_a_no_op() {
        let display = Rect::new(0.0, 0.0, 400.0, 300.0);
        let mut selector = RangeSelector::new();

        center_selection(&mut selector, display);

        assert_eq!(selector.selection(), Rect::ZERO);
    }

    #[test]
    fn maximize_with_locked_ratio_fills_the_limiting_axis() {
        // Wide display, tall ratio: height is the limit.
        let display = Rect::new(10.0, 0.0, 400.0, 200.0);
        let mut selector = RangeSelector::new();
        selector.set_selection(Rect::new(50.0, 50.0, 10.0, 10.0));
        selector.set_ratio(RatioConstraint::new(true, 1.0, 2.0));

        maximize_selection(&mut selector, display);

        let sel = selector.selection();
        assert_eq!(sel.height, 200.0);
        assert_eq!(sel.width, 100.0);
        // Centered: 10 + (400 - 100) / 2.
        assert_eq!(sel.x, 160.0);
        assert_eq!(sel.y, 0.0);
    }

    #[test]
    fn maximize_unlocked_uses_the_selection_aspect() {
        let display = Rect::new(0.0, 0.0, 300.0, 300.0);
        let mut selector = RangeSelector::new();
        selector.set_selection(Rect::new(0.0, 0.0, 40.0, 20.0));

        maximize_selection(&mut selector, display);

        let sel = selector.selection();
        assert_eq!(sel.width, 300.0);
        assert_eq!(sel.height, 150.0);
        assert_eq!(sel.y, 75.0);
    }

    #[test]
    fn maximize_without_selection_fills_the_display() {
        let display = Rect::new(5.0, 0.0, 320.0, 240.0);
        let mut selector = RangeSelector::new();

        maximize_selection(&mut selector, display);

        assert_eq!(selector.selection(), display);
    }
}
