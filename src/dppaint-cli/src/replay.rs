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

use crate::impex::{load_image, save_image, scale_to_height};
use crate::script::{parse_script, Command, PickerCommand};

use dppaint::canvas::{Action, Controller, HostRequest};
use dppaint::CanvasConfig;

use anyhow::{anyhow, Context, Result};
use tracing::{info, warn};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct ReplayOpts<'a> {
    /// Script to run
    pub script_file: &'a str,

    /// Where to save the final canvas (derived from the script name if empty.)
    /// Save requests made by the script insert a sequence number before the suffix.
    pub output_file: &'a str,

    /// Image to load before running the script
    pub input_file: Option<&'a str>,

    /// Color picker gradient image
    pub gradient_file: Option<&'a str>,

    pub config: CanvasConfig,
}

pub fn replay_script(opts: &ReplayOpts) -> Result<()> {
    let start = Instant::now();

    let text = fs::read_to_string(opts.script_file)
        .with_context(|| format!("Couldn't read {}", opts.script_file))?;
    let commands = parse_script(&text)?;

    let output = if opts.output_file.is_empty() {
        default_output(opts.script_file)
    } else {
        PathBuf::from(opts.output_file)
    };

    let mut replayer = Replayer::new(opts.config.clone(), output.clone())?;

    if let Some(gradient) = opts.gradient_file {
        let img = load_image(gradient).with_context(|| format!("Couldn't load {}", gradient))?;
        replayer.controller_mut().set_gradient(img);
    }

    if let Some(input) = opts.input_file {
        replayer.open(Path::new(input))?;
    }

    for (line, cmd) in &commands {
        replayer
            .execute(cmd)
            .with_context(|| format!("Script line {}", line))?;
    }

    replayer.save_to(&output)?;

    info!(
        "Replayed {} commands in {:.3} s",
        commands.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Runs script commands on a controller, taking care of the
/// host side requests (opening and saving images.)
pub struct Replayer {
    controller: Controller,
    output: PathBuf,
    saved: Vec<PathBuf>,
}

impl Replayer {
    pub fn new(config: CanvasConfig, output: PathBuf) -> Result<Self> {
        Ok(Replayer {
            controller: Controller::new(config)?,
            output,
            saved: Vec::new(),
        })
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Files written so far
    pub fn saved_files(&self) -> &[PathBuf] {
        &self.saved
    }

    pub fn execute(&mut self, cmd: &Command) -> Result<()> {
        let c = &mut self.controller;
        let request = match cmd {
            Command::Down(x, y) => c.pointer_down(*x, *y),
            Command::Move(x, y) => {
                c.pointer_moved(*x, *y);
                None
            }
            Command::Up => {
                c.pointer_up();
                None
            }
            Command::Click(x, y) => {
                let r = c.pointer_down(*x, *y);
                c.pointer_up();
                r
            }
            Command::Key { key, ctrl, shift } => c.key_pressed(*key, *ctrl, *shift),
            Command::Fill => c.perform(Action::ToggleFill),
            Command::Rainbow => c.perform(Action::ToggleRainbow),
            Command::Undo => {
                if !c.undo() {
                    warn!("Nothing to undo");
                }
                None
            }
            Command::Redo => {
                if !c.redo() {
                    warn!("Nothing to redo");
                }
                None
            }
            Command::Clear => c.perform(Action::Clear),
            Command::Size(size) => {
                c.set_brush_size(*size)?;
                None
            }
            Command::Slot(slot) => c.perform(Action::SelectSlot(*slot)),
            Command::Open(path) => {
                self.open(path)?;
                None
            }
            Command::Save(Some(path)) => {
                self.save_to(path)?;
                None
            }
            Command::Save(None) => Some(HostRequest::SaveCanvas),
            Command::Picker(p) => {
                self.picker(p)?;
                None
            }
        };

        match request {
            Some(HostRequest::SaveCanvas) => self.save_numbered(),
            Some(HostRequest::OpenImage) => {
                warn!("Open button pressed: use the 'open PATH' command to load images");
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Load an image scaled to the canvas height
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let img = load_image(path).with_context(|| format!("Couldn't load {}", path.display()))?;
        let canvas = self.controller.canvas_rect();
        let img = scale_to_height(&img, canvas.h as u32)?;
        self.controller.load_image(&img)?;
        info!("Opened {}", path.display());
        Ok(())
    }

    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        info!("Saving {}", path.display());
        save_image(path, &self.controller.canvas_image())
            .with_context(|| format!("Couldn't save {}", path.display()))?;
        self.saved.push(path.to_path_buf());
        Ok(())
    }

    fn save_numbered(&mut self) -> Result<()> {
        let path = numbered_filename(&self.output, self.saved.len() + 1);
        self.save_to(&path)
    }

    fn picker(&mut self, cmd: &PickerCommand) -> Result<()> {
        let c = &mut self.controller;
        match cmd {
            PickerCommand::Open => c.open_picker(),
            PickerCommand::Save => {
                if !c.save_picker() {
                    return Err(anyhow!("Color picker is not open"));
                }
            }
            PickerCommand::Cancel => {
                if !c.cancel_picker() {
                    return Err(anyhow!("Color picker is not open"));
                }
            }
            edit => {
                let picker = c
                    .picker_mut()
                    .ok_or_else(|| anyhow!("Color picker is not open"))?;
                match edit {
                    PickerCommand::Default => picker.reset_to_default(),
                    PickerCommand::Commit => {
                        if !picker.commit_slot() {
                            warn!("No palette slot selected");
                        }
                    }
                    PickerCommand::Slot(slot) => picker.select_slot(*slot),
                    PickerCommand::Color(color) => picker.set_hover_color(*color),
                    PickerCommand::Grid(x, y) => {
                        if !picker.drag_grid(*x, *y) {
                            warn!("({}, {}) is outside the color grid", x, y);
                        }
                    }
                    PickerCommand::Slider(channel, value) => picker.drag_slider(*channel, *value),
                    PickerCommand::Open | PickerCommand::Save | PickerCommand::Cancel => {}
                }
            }
        }
        Ok(())
    }
}

fn default_output(script_file: &str) -> PathBuf {
    Path::new(script_file).with_extension("png")
}

/// Insert a sequence number before the file suffix: `out.png` -> `out-0001.png`
pub fn numbered_filename(path: &Path, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}-{:04}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}-{:04}", stem, index),
    };
    path.with_file_name(name)
}
