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

use clap::{Parser, Subcommand};
use tracing::Level;

use dppaint::config::DEFAULT_UNDO_DEPTH;
use dppaint::paint::Color;
use dppaint::CanvasConfig;
use dppaint_cli::bucket::{fill_image, FillOpts};
use dppaint_cli::replay::{replay_script, ReplayOpts};

#[derive(Parser)]
#[clap(version, about)]
struct Cli {
    /// Show debug messages
    #[clap(short, long)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a paint script and save the result
    Replay {
        /// Script file
        #[clap(value_parser)]
        script: String,

        /// Output file
        #[clap(short, long, value_parser)]
        output: Option<String>,

        /// Image to open before running the script
        #[clap(short, long, value_parser)]
        input: Option<String>,

        /// Color picker gradient image
        #[clap(long, value_parser)]
        gradient: Option<String>,

        /// Number of undo steps to keep
        #[clap(long, value_parser, default_value_t = DEFAULT_UNDO_DEPTH)]
        undo_depth: usize,

        /// Canvas background color (#rrggbb)
        #[clap(long, value_parser, default_value = "#ffffff")]
        background: Color,
    },
    /// Flood fill an image file
    Fill {
        /// Input file
        #[clap(value_parser)]
        input: String,

        /// Output file
        #[clap(value_parser)]
        output: String,

        /// Seed point X coordinate
        #[clap(short, value_parser)]
        x: i32,

        /// Seed point Y coordinate
        #[clap(short, value_parser)]
        y: i32,

        /// Fill color (#rrggbb)
        #[clap(short, long, value_parser, default_value = "#000000")]
        color: Color,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    match cli.command {
        Commands::Replay {
            script,
            output,
            input,
            gradient,
            undo_depth,
            background,
        } => {
            let opts = ReplayOpts {
                script_file: &script,
                output_file: output.as_deref().unwrap_or_default(),
                input_file: input.as_deref(),
                gradient_file: gradient.as_deref(),
                config: CanvasConfig {
                    undo_depth,
                    background,
                    ..CanvasConfig::default()
                },
            };

            replay_script(&opts)
        }
        Commands::Fill {
            input,
            output,
            x,
            y,
            color,
        } => fill_image(&FillOpts {
            input_file: &input,
            output_file: &output,
            x,
            y,
            color,
        }),
    }
}
