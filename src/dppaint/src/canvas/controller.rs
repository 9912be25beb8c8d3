// This file is part of Drawpile.
// Copyright (C) 2020 Calle Laakkonen
//
// Drawpile is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// As additional permission under section 7, you are allowed to distribute
// the software through an app store, even if that store has restrictive
// terms and conditions that are incompatible with the GPL, provided that
// the source is also available under the GPL with or without this permission
// through a channel without those restrictive terms and conditions.
//
// Drawpile is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Drawpile.  If not, see <https://www.gnu.org/licenses/>.

use super::history::History;
use super::layout::{self, Action, Key, Layout};
use super::snapshot::Snapshot;
use crate::brush::{BrushMode, BrushState};
use crate::config::CanvasConfig;
use crate::paint::{Color, Image, PixelSurface, Rectangle};
use crate::palette::picker::default_gradient;
use crate::palette::{ColorPicker, PaletteModel, Slot};
use crate::PaintError;

use tracing::{debug, info, warn};

/// Requests the controller cannot handle by itself.
/// Persistence is up to the host application.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HostRequest {
    /// Save the current canvas image (see `Controller::canvas_image`)
    SaveCanvas,
    /// Pick an image and pass it to `Controller::load_image`
    OpenImage,
}

/// Owns the canvas surface and all the editing state, and turns
/// pointer and keyboard input into edits.
pub struct Controller<S = Image> {
    surface: S,
    config: CanvasConfig,
    layout: Layout,
    brush: BrushState,
    palette: PaletteModel,
    picker: Option<ColorPicker>,
    gradient: Option<Image>,
    history: History,
    /// primary button is down
    pointer_held: bool,
    /// an undo snapshot has been recorded for the stroke in progress
    stroke_open: bool,
    /// area changed since the host last asked
    dirty: Option<Rectangle>,
}

impl Controller<Image> {
    /// Create a controller with a fresh window sized surface
    pub fn new(config: CanvasConfig) -> Result<Self, PaintError> {
        let surface = Image::filled(
            config.window_width as usize,
            config.window_height as usize,
            config.background,
        );
        Controller::with_surface(surface, config)
    }
}

impl<S: PixelSurface> Controller<S> {
    pub fn with_surface(surface: S, config: CanvasConfig) -> Result<Self, PaintError> {
        let layout = Layout::new(&config)?;
        let covers_canvas = surface
            .bounds()
            .map_or(false, |b| b.contains(layout.canvas()));
        if !covers_canvas {
            return Err(PaintError::SurfaceTooSmall {
                width: surface.width(),
                height: surface.height(),
            });
        }

        let brush = BrushState::with_size(config.default_brush_size)?;
        let history = History::new(config.undo_depth);

        Ok(Controller {
            surface,
            config,
            layout,
            brush,
            palette: PaletteModel::new(),
            picker: None,
            gradient: None,
            history,
            pointer_held: false,
            stroke_open: false,
            dirty: None,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn canvas_rect(&self) -> Rectangle {
        *self.layout.canvas()
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn palette(&self) -> &PaletteModel {
        &self.palette
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Take the area changed since the last call
    pub fn take_dirty(&mut self) -> Option<Rectangle> {
        self.dirty.take()
    }

    fn mark_dirty(&mut self, area: Option<Rectangle>) {
        if let Some(a) = area {
            self.dirty = Some(match self.dirty {
                Some(d) => d.union(&a),
                None => a,
            });
        }
    }

    /// Copy of the drawing area, e.g. for saving
    pub fn canvas_image(&self) -> Image {
        self.surface.copy_region(self.layout.canvas())
    }

    /// Primary button pressed.
    ///
    /// Presses on the palette or toolbar trigger their action, presses
    /// on the canvas start a stroke. Ignored while the picker is open.
    pub fn pointer_down(&mut self, x: i32, y: i32) -> Option<HostRequest> {
        if self.picker.is_some() {
            return None;
        }

        if let Some(action) = self.layout.hit(x, y) {
            return self.perform(action);
        }

        self.pointer_held = true;
        self.sample(x, y);
        None
    }

    /// Pointer moved. Only does something while the button is held.
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        if self.pointer_held && self.picker.is_none() {
            self.sample(x, y);
        }
    }

    pub fn pointer_up(&mut self) {
        self.pointer_held = false;
        self.stroke_open = false;
        self.brush.end_stroke();
    }

    fn sample(&mut self, x: i32, y: i32) {
        let canvas = *self.layout.canvas();
        if !canvas.contains_point(x, y) {
            self.brush.break_stroke();
            self.stroke_open = false;
            return;
        }

        if !self.stroke_open {
            // A fill that would not change anything is not an edit
            if self.brush.mode() == BrushMode::Fill && !self.brush.needs_fill(&self.surface, x, y) {
                return;
            }
            debug!("Starting {:?} stroke at ({}, {})", self.brush.mode(), x, y);
            self.record_edit();
            self.stroke_open = true;
        }

        let changed = self.brush.apply_at(&mut self.surface, &canvas, x, y);
        self.mark_dirty(changed);
    }

    fn record_edit(&mut self) {
        self.history
            .record(Snapshot::capture(&self.surface, self.layout.canvas()));
    }

    /// Interrupt the stroke in progress. The next sample starts a new
    /// stroke with its own undo snapshot.
    fn break_stroke(&mut self) {
        self.stroke_open = false;
        self.brush.break_stroke();
    }

    pub fn key_pressed(&mut self, key: Key, ctrl: bool, shift: bool) -> Option<HostRequest> {
        let action = layout::shortcut(key, ctrl, shift)?;
        if self.picker.is_some()
            && !matches!(
                action,
                Action::TogglePicker | Action::GrowBrush | Action::ShrinkBrush
            )
        {
            return None;
        }
        self.perform(action)
    }

    pub fn perform(&mut self, action: Action) -> Option<HostRequest> {
        match action {
            Action::Save => return Some(HostRequest::SaveCanvas),
            Action::Open => return Some(HostRequest::OpenImage),
            Action::Clear => self.clear(),
            Action::ToggleFill => self.toggle_fill(),
            Action::ToggleRainbow => self.toggle_rainbow(),
            Action::Undo => {
                self.undo();
            }
            Action::Redo => {
                self.redo();
            }
            Action::TogglePicker => {
                if self.picker.is_some() {
                    self.cancel_picker();
                } else {
                    self.open_picker();
                }
            }
            Action::SetBrushSize(size) => {
                if let Err(e) = self.set_brush_size(size) {
                    warn!("{}", e);
                }
            }
            Action::GrowBrush => self.step_brush_size(true),
            Action::ShrinkBrush => self.step_brush_size(false),
            Action::SelectSlot(slot) => self.select_slot(slot),
        }
        None
    }

    pub fn toggle_fill(&mut self) {
        self.break_stroke();
        self.brush.toggle_fill();
    }

    pub fn toggle_rainbow(&mut self) {
        self.break_stroke();
        self.brush.toggle_rainbow();
    }

    /// Pick a palette color for the brush
    pub fn select_slot(&mut self, slot: Slot) {
        let color = self.palette.select(slot);
        self.brush.select_color(color);
    }

    pub fn set_brush_size(&mut self, size: u32) -> Result<(), PaintError> {
        self.brush.set_size(size)
    }

    /// Move to the next larger or smaller toolbar brush size
    fn step_brush_size(&mut self, grow: bool) {
        let current = self.brush.size();
        let sizes = &self.config.brush_sizes;
        let next = if grow {
            sizes.iter().copied().filter(|&s| s > current).min()
        } else {
            sizes.iter().copied().filter(|&s| s < current).max()
        };
        if let Some(s) = next {
            // toolbar sizes are validated to be positive
            let _ = self.brush.set_size(s);
        }
    }

    /// Undo the latest edit. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.break_stroke();
        let done = self.history.undo(&mut self.surface);
        if done {
            info!("Undo ({} steps left)", self.history.undo_stack().len());
            self.mark_dirty(Some(*self.layout.canvas()));
        }
        done
    }

    /// Redo the latest undone edit. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.break_stroke();
        let done = self.history.redo(&mut self.surface);
        if done {
            info!("Redo ({} steps left)", self.history.redo_stack().len());
            self.mark_dirty(Some(*self.layout.canvas()));
        }
        done
    }

    /// Wipe the canvas and return the tools to their startup state
    pub fn clear(&mut self) {
        self.record_edit();
        self.reset_canvas();
        info!("Canvas cleared");
    }

    fn reset_canvas(&mut self) {
        let canvas = *self.layout.canvas();
        let bg = self.config.background;
        for y in canvas.y..=canvas.bottom() {
            self.surface
                .fill_span(y as u32, canvas.x as u32, canvas.right() as u32, bg);
        }

        self.pointer_held = false;
        self.stroke_open = false;
        if let Err(e) = self.brush.reset(self.config.default_brush_size) {
            warn!("Couldn't reset brush: {}", e);
        }
        self.palette.select(Slot { row: 0, col: 0 });
        self.mark_dirty(Some(canvas));
    }

    /// Replace the canvas content with an image.
    ///
    /// The canvas is cleared and the image is centered on it. Parts that
    /// do not fit are cropped away.
    pub fn load_image(&mut self, image: &Image) -> Result<(), PaintError> {
        if image.is_null() {
            return Err(PaintError::EmptyImage);
        }

        self.record_edit();
        self.reset_canvas();

        let canvas = *self.layout.canvas();
        let x = canvas.x + (canvas.w - image.width as i32) / 2;
        let y = canvas.y + (canvas.h - image.height as i32) / 2;
        let target = Rectangle::new(x, y, image.width as i32, image.height as i32);
        if let Some(visible) = target.intersected(&canvas) {
            let part = image.cropped(&visible.offset(-x, -y));
            self.surface.blit(visible.x, visible.y, &part);
        }

        info!("Loaded a {}x{} image", image.width, image.height);
        Ok(())
    }

    /// Use this image as the picker's color grid instead of the generated one
    pub fn set_gradient(&mut self, gradient: Image) {
        self.gradient = Some(gradient);
    }

    pub fn is_picking(&self) -> bool {
        self.picker.is_some()
    }

    pub fn picker(&self) -> Option<&ColorPicker> {
        self.picker.as_ref()
    }

    pub fn picker_mut(&mut self) -> Option<&mut ColorPicker> {
        self.picker.as_mut()
    }

    /// Open the palette editor. Fill and rainbow modes are left first.
    pub fn open_picker(&mut self) {
        if self.picker.is_some() {
            return;
        }
        self.pointer_up();
        self.brush.exit_modes();

        let canvas = self.layout.canvas();
        let gradient = match &self.gradient {
            Some(g) => g.clone(),
            None => default_gradient(canvas.h as usize, canvas.h as usize),
        };
        self.picker = Some(ColorPicker::open(&self.palette, gradient));
        debug!("Color picker opened");
    }

    /// Commit the picker's palette and close it.
    ///
    /// If the brush was using a color that got edited, the brush follows
    /// the edit. Returns false if the picker wasn't open.
    pub fn save_picker(&mut self) -> bool {
        let picker = match self.picker.take() {
            Some(p) => p,
            None => return false,
        };

        let brush_color = self.brush.color();
        let changes = self.palette.replace(picker.into_slots());
        if let Some(&(_, _, new)) = changes.iter().find(|(_, old, _)| *old == brush_color) {
            self.brush.set_color(new);
        }

        debug!("Color picker saved: {} slots changed", changes.len());
        true
    }

    /// Close the picker without touching the palette
    pub fn cancel_picker(&mut self) -> bool {
        let closed = self.picker.take().is_some();
        if closed {
            debug!("Color picker cancelled");
        }
        closed
    }

    /// The current brush color
    pub fn color(&self) -> Color {
        self.brush.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> Controller {
        Controller::new(CanvasConfig::default()).unwrap()
    }

    #[test]
    fn test_surface_must_cover_canvas() {
        let small = Image::filled(100, 100, Color::WHITE);
        assert!(matches!(
            Controller::with_surface(small, CanvasConfig::default()),
            Err(PaintError::SurfaceTooSmall { .. })
        ));
    }

    #[test]
    fn test_toolbar_requests() {
        let mut c = controller();
        let save = c.layout().button_rect(Action::Save).unwrap();
        let open = c.layout().button_rect(Action::Open).unwrap();
        assert_eq!(c.pointer_down(save.x + 1, save.y + 1), Some(HostRequest::SaveCanvas));
        assert_eq!(c.pointer_down(open.x + 1, open.y + 1), Some(HostRequest::OpenImage));
    }

    #[test]
    fn test_brush_size_steps() {
        let mut c = controller();
        assert_eq!(c.brush().size(), 8);
        c.key_pressed(Key::Plus, false, false);
        assert_eq!(c.brush().size(), 10);
        c.key_pressed(Key::Plus, false, false);
        assert_eq!(c.brush().size(), 10);
        c.key_pressed(Key::Minus, false, false);
        c.key_pressed(Key::Minus, false, false);
        c.key_pressed(Key::Minus, false, false);
        c.key_pressed(Key::Minus, false, false);
        assert_eq!(c.brush().size(), 4);
    }

    #[test]
    fn test_dirty_area() {
        let mut c = controller();
        assert_eq!(c.take_dirty(), None);
        c.pointer_down(500, 300);
        c.pointer_up();
        assert_eq!(c.take_dirty(), Some(Rectangle::new(492, 292, 17, 17)));
        assert_eq!(c.take_dirty(), None);
    }
}
