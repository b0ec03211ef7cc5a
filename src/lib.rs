//! `lorasmith` builds LoRA training datasets from a folder of sample images.
//!
//! For each sample, the pipeline:
//!
//! - Sends the sample plus up to two identity reference images to a vision
//!   provider (Gemini, OpenAI, or xAI/Grok) to generate a detailed scene
//!   prompt ([`adapter`], [`chat`]).
//! - Sends that prompt with the same images to the Wavespeed generation API
//!   to produce an edited image or a video, with bounded retry ([`mediagen`]).
//! - Optionally captions each generated image and packs the image/caption
//!   pairs into a training-ready zip archive ([`pipeline`]).
//!
//! Provider choices come from a `config.json` file and can differ per content
//! class (`normal/` vs `nsfw/` subfolders); see [`config`]. All outbound HTTP
//! flows through the [`webc::Transport`] seam.

// region:    --- Modules

mod common;
mod error;

pub mod adapter;
pub mod chat;
pub mod config;
pub mod files;
pub mod mediagen;
pub mod pipeline;
pub mod prompts;
pub mod resolver;
pub mod texts;
pub mod webc;

// -- Flatten
pub use common::*;
pub use error::{Error, Result};

// endregion: --- Modules
