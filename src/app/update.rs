// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message handling: apply user actions and crop view events to the model.

use std::path::{Path, PathBuf};

use crate::app::message::{AppMessage, CropEdge};
use crate::app::model::{AppModel, CropInputs};
use crate::config::AppConfig;
use crate::constant::{CROPPED_FALLBACK_EXT, CROPPED_SUFFIX};
use crate::fl;

pub fn update(model: &mut AppModel, config: &AppConfig, message: AppMessage) {
    match message {
        AppMessage::OpenPath(path) => open_path(model, config, path),
        AppMessage::PathInput(text) => model.path_input = text,
        AppMessage::LoadPath => {
            let path = PathBuf::from(model.path_input.trim());
            open_path(model, config, path);
        }
        AppMessage::SaveCropped => save_cropped(model),

        AppMessage::CropInput(edge, text) => apply_crop_input(model, config, edge, text),
        AppMessage::SetEnabled(enabled) => model.view.set_enabled(enabled),

        AppMessage::CropLayoutChanged(size) => model.view.layout_changed(size),
        AppMessage::CropPressed { position, button } => {
            model.view.pointer_pressed(position, button);
        }
        AppMessage::CropMoved(position) => {
            model.view.pointer_moved(position);
        }
        AppMessage::CropReleased(position) => model.view.pointer_released(position),
        AppMessage::CropPointerLost => model.view.pointer_lost(),

        AppMessage::ClearError => model.clear_error(),
    }

    // The crop view changed: bring the fields in line before the next frame.
    if model.view.take_redraw() {
        model.drain_crop_updates();
    }
}

fn open_path(model: &mut AppModel, config: &AppConfig, path: PathBuf) {
    match model.view.load_image(&path) {
        Ok(()) => {
            model.path_input = path.display().to_string();
            model.current_path = Some(path);
            model.clear_error();
            model.status = None;
            if config.enable_on_load {
                model.view.set_enabled(true);
            }
        }
        Err(e) => {
            log::error!("Failed to open {}: {e:#}", path.display());
            model.set_error(format!("{e:#}"));
        }
    }
}

fn apply_crop_input(model: &mut AppModel, config: &AppConfig, edge: CropEdge, text: String) {
    let parsed = text.trim().parse::<i32>();
    model.crop_inputs.set(edge, text);

    // Keep partial input (e.g. "-" or "") in the field without touching the view.
    let Ok(value) = parsed else {
        return;
    };

    let mut margins = model.view.margins();
    match edge {
        CropEdge::Left => margins.left = value,
        CropEdge::Right => margins.right = value,
        CropEdge::Top => margins.top = value,
        CropEdge::Bottom => margins.bottom = value,
    }

    if config.clamp_crop_values {
        if let Some((width, height)) = model.view.image_size() {
            let clamped = margins.clamped(width, height);
            if clamped != margins {
                // Clamping can move the opposite edge too.
                model.crop_inputs = CropInputs::from_margins(clamped);
                model.view.set_margins(clamped);
                return;
            }
        }
    }

    match edge {
        CropEdge::Left => model.view.set_left_crop(value),
        CropEdge::Right => model.view.set_right_crop(value),
        CropEdge::Top => model.view.set_top_crop(value),
        CropEdge::Bottom => model.view.set_bottom_crop(value),
    }
}

fn save_cropped(model: &mut AppModel) {
    let (Some(source), Some(raster)) = (model.current_path.as_ref(), model.view.image()) else {
        return;
    };

    let (width, height) = raster.dimensions();
    let Some(region) = model.view.margins().to_region(width, height) else {
        model.set_error(format!("nothing left to save: {}", model.view.margins()));
        return;
    };

    let target = cropped_path(source);
    match raster.save_region(region, &target) {
        Ok(()) => {
            log::info!("Saved crop {region:?} to {}", target.display());
            model.status = Some(fl!("saved-to", path = target.display().to_string()));
            model.clear_error();
        }
        Err(e) => {
            log::error!("Failed to save {}: {e:#}", target.display());
            model.set_error(format!("{e:#}"));
        }
    }
}

/// `dir/name.ext` becomes `dir/name-cropped.ext`.
pub fn cropped_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = source
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| CROPPED_FALLBACK_EXT.to_string());
    source.with_file_name(format!("{stem}{CROPPED_SUFFIX}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::crop::PointerButton;
    use crate::domain::crop::{CropMargins, Point, Size};
    use image::{DynamicImage, GenericImageView, RgbaImage};

    fn config() -> AppConfig {
        AppConfig {
            default_image_dir: None,
            clamp_crop_values: false,
            dim_alpha: 0.5,
            enable_on_load: true,
        }
    }

    fn model_with_image(dir: &Path) -> (AppModel, AppConfig) {
        let path = dir.join("wide.png");
        DynamicImage::ImageRgba8(RgbaImage::new(800, 400))
            .save(&path)
            .unwrap();

        let config = config();
        let mut model = AppModel::new(&config);
        update(&mut model, &config, AppMessage::CropLayoutChanged(Size::new(400.0, 300.0)));
        update(&mut model, &config, AppMessage::OpenPath(path));
        (model, config)
    }

    #[test]
    fn test_open_enables_view() {
        let dir = tempfile::tempdir().unwrap();
        let (model, _) = model_with_image(dir.path());
        assert!(model.view.is_enabled());
        assert!(model.error.is_none());
        assert_eq!(model.view.image_size(), Some((800, 400)));
    }

    #[test]
    fn test_open_missing_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let (mut model, config) = model_with_image(dir.path());
        update(
            &mut model,
            &config,
            AppMessage::OpenPath(dir.path().join("nope.png")),
        );
        assert!(model.error.is_some());
        assert_eq!(model.view.image_size(), Some((800, 400)));
        assert_eq!(model.current_path, Some(dir.path().join("wide.png")));
    }

    #[test]
    fn test_drag_updates_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let (mut model, config) = model_with_image(dir.path());

        update(
            &mut model,
            &config,
            AppMessage::CropPressed {
                position: Point::new(10.0, 60.0),
                button: PointerButton::Primary,
            },
        );
        update(&mut model, &config, AppMessage::CropMoved(Point::new(390.0, 240.0)));
        update(&mut model, &config, AppMessage::CropReleased(Point::new(390.0, 240.0)));

        assert_eq!(model.crop_inputs, CropInputs::from_margins(CropMargins::new(20, 20, 20, 20)));
        assert!(!model.view.wants_pointer_history());
    }

    #[test]
    fn test_crop_input_sets_margin() {
        let dir = tempfile::tempdir().unwrap();
        let (mut model, config) = model_with_image(dir.path());

        update(&mut model, &config, AppMessage::CropInput(CropEdge::Left, "10".into()));
        assert_eq!(model.view.margins(), CropMargins::new(10, 0, 0, 0));
        assert_eq!(model.view.marker_rect().left, 5.0);

        update(&mut model, &config, AppMessage::CropInput(CropEdge::Left, "-".into()));
        assert_eq!(model.crop_inputs.get(CropEdge::Left), "-");
        assert_eq!(model.view.margins(), CropMargins::new(10, 0, 0, 0));
    }

    #[test]
    fn test_crop_input_is_permissive_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let (mut model, config) = model_with_image(dir.path());
        update(&mut model, &config, AppMessage::CropInput(CropEdge::Top, "5000".into()));
        assert_eq!(model.view.margins().top, 5000);
    }

    #[test]
    fn test_crop_input_clamps_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        let (mut model, mut config) = model_with_image(dir.path());
        config.clamp_crop_values = true;

        update(&mut model, &config, AppMessage::CropInput(CropEdge::Top, "5000".into()));
        assert_eq!(model.view.margins().top, 400);
        assert_eq!(model.crop_inputs.get(CropEdge::Top), "400");
    }

    #[test]
    fn test_save_cropped_writes_region() {
        let dir = tempfile::tempdir().unwrap();
        let (mut model, config) = model_with_image(dir.path());
        model.view.set_margins(CropMargins::new(100, 100, 50, 50));

        update(&mut model, &config, AppMessage::SaveCropped);

        assert!(model.error.is_none());
        let saved = image::open(dir.path().join("wide-cropped.png")).unwrap();
        assert_eq!(saved.dimensions(), (600, 300));
    }

    #[test]
    fn test_update_consumes_redraw_request() {
        let dir = tempfile::tempdir().unwrap();
        let (mut model, config) = model_with_image(dir.path());
        assert!(!model.view.take_redraw());

        update(&mut model, &config, AppMessage::SetEnabled(false));
        assert!(!model.view.take_redraw());
        assert!(!model.view.is_enabled());
    }

    #[test]
    fn test_cropped_path() {
        assert_eq!(
            cropped_path(Path::new("/tmp/photo.jpeg")),
            PathBuf::from("/tmp/photo-cropped.jpeg")
        );
        assert_eq!(
            cropped_path(Path::new("/tmp/photo")),
            PathBuf::from("/tmp/photo-cropped.png")
        );
    }
}
