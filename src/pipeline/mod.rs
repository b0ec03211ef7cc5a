//! The dataset pipeline: for each sample image, describe the scene, generate
//! the edited image (or video), and optionally caption and archive the results.

// region:    --- Modules

mod caption;

// endregion: --- Modules

use crate::adapter::exec_describe;
use crate::chat::{DescribeRequest, ImagePart};
use crate::common::ContentClass;
use crate::config::{RunConfig, RunMode};
use crate::files::{self, unique_file_path, SampleFile};
use crate::mediagen::{generate_media, to_media_request_data, GenerationKind};
use crate::texts::tr;
use crate::webc::Transport;
use crate::{prompts, Error, ModelIden, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// One successfully generated image, recorded for the caption pass.
/// Videos are never recorded (captions apply to images only).
#[derive(Debug)]
pub struct GeneratedArtifact {
	pub path: PathBuf,
	pub original_name: String,
	/// 1-based, contiguous over recorded artifacts; drives the
	/// `{trigger}_{index:04}` naming.
	pub index: usize,
	/// Caption model resolved from the sample's content class at generation
	/// time, so the caption pass needs no re-resolution.
	pub caption: ModelIden,
}

pub struct DatasetPipeline<T: Transport> {
	config: RunConfig,
	transport: T,
	artifacts: Vec<GeneratedArtifact>,
}

impl<T: Transport> DatasetPipeline<T> {
	pub fn new(config: RunConfig, transport: T) -> Self {
		Self {
			config,
			transport,
			artifacts: Vec::new(),
		}
	}

	/// Process the run end to end. Per-item failures are logged and skipped;
	/// only setup errors (folders, configuration) abort the whole run.
	pub async fn run(mut self) -> Result<Vec<GeneratedArtifact>> {
		// Configuration problems must surface here, before any provider call
		// is billed. Per-content override blocks are re-resolved per sample.
		self.config.profile_for(ContentClass::Unclassified)?;
		let api_key = self.config.wavespeed_key()?;

		fs::create_dir_all(&self.config.output_folder)?;

		info!("{}", tr("loading_ref_images"));
		let ref_files = files::list_image_files(&self.config.influencer_ref_folder, self.config.limit_ref_images, true)?;
		info!("{}: {}", tr("found_ref_images"), ref_files.len());

		// Only the first two references are transmitted (identity anchors).
		let mut ref_images: Vec<Arc<[u8]>> = Vec::new();
		for ref_file in ref_files.iter().take(2) {
			ref_images.push(Arc::from(files::read_file(&ref_file.path)?));
		}

		info!("{}", tr("loading_sample_images"));
		self.log_empty_subfolders()?;
		let samples = match self.config.run_mode {
			RunMode::Detailed => match self.selected_sample()? {
				Some(sample) => vec![sample],
				None => {
					info!("{}", tr("image_not_selected"));
					return Ok(self.artifacts);
				}
			},
			RunMode::Bulk => files::list_image_files(
				&self.config.sample_dataset_folder,
				self.config.limit_sample_images,
				self.config.nsfw_enabled,
			)?,
		};
		info!("{}: {}", tr("found_sample_images"), samples.len());

		for (current, sample) in samples.iter().enumerate() {
			info!("{} {}/{}: {}", tr("processing_image"), current + 1, samples.len(), sample.name);

			if sample.content == ContentClass::Nsfw && !self.config.nsfw_enabled {
				info!("{}: {}", tr("nsfw_skipped"), sample.name);
				continue;
			}

			if let Err(err) = self.process_sample(&ref_images, sample, &api_key).await {
				warn!("{}: {}: {err}", tr("error_processing_image"), sample.name);
			}
		}

		if self.config.generate_captions {
			if self.config.trigger_name.trim().is_empty() {
				warn!("{}", tr("trigger_name_not_set"));
			} else if !self.artifacts.is_empty() {
				info!("{}", tr("generating_captions"));
				caption::run_caption_pass(&self.transport, &self.config, &mut self.artifacts).await?;
			}
		}

		info!("{}: {}", tr("processing_completed"), self.config.output_folder.display());
		Ok(self.artifacts)
	}

	async fn process_sample(&mut self, ref_images: &[Arc<[u8]>], sample: &SampleFile, api_key: &str) -> Result<()> {
		let profile = self.config.profile_for(sample.content)?;
		let sample_data = files::read_file(&sample.path)?;

		// -- Describe the scene
		info!("{} ({})", tr("generating_prompt"), profile.prompt);
		let mut describe_req =
			DescribeRequest::new(prompts::scene_instruction(&profile.media_model), prompts::DESCRIBE_MAX_TOKENS);
		for ref_image in ref_images {
			describe_req = describe_req.append_image(ImagePart::jpeg(ref_image.clone()));
		}
		describe_req = describe_req.append_image(ImagePart::jpeg(sample_data.clone()));

		let target = self.config.service_target(profile.prompt.clone());
		let generated = exec_describe(&self.transport, target, describe_req).await?;
		let final_prompt = prompts::finalize_scene_prompt(&generated);
		info!("{} ({} chars)", tr("prompt_generated"), final_prompt.len());

		// -- Persist the prompt
		let stem = sample.path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
		let prompt_path = unique_file_path(&self.config.output_folder.join(format!("{stem}_prompt.txt")));
		fs::write(&prompt_path, &final_prompt)?;

		// -- Generate the media
		let kind = GenerationKind::from_model(&profile.media_model);
		let ext = kind.default_ext();
		let captions_active =
			self.config.generate_captions && !self.config.trigger_name.trim().is_empty() && !kind.is_video();
		let output_path = if captions_active {
			// LoRA naming straight away; indices stay contiguous over
			// recorded artifacts.
			let lora_dir = self.config.output_folder.join("lora_dataset");
			fs::create_dir_all(&lora_dir)?;
			lora_dir.join(format!("{}_{:04}.{ext}", self.config.trigger_name, self.artifacts.len() + 1))
		} else {
			unique_file_path(&self.config.output_folder.join(format!("{stem}_generated.{ext}")))
		};

		let media_req = to_media_request_data(&profile, api_key, ref_images, &sample_data, &final_prompt)?;
		info!("{} ({})", tr("generating_media"), profile.media_model);
		let outcome = generate_media(&self.transport, &media_req, &output_path).await?;

		if kind.is_video() {
			info!("{}: {}", tr("video_saved"), outcome.path.display());
		} else {
			info!("{}: {}", tr("image_saved"), outcome.path.display());
			self.artifacts.push(GeneratedArtifact {
				path: outcome.path,
				original_name: sample.name.clone(),
				index: self.artifacts.len() + 1,
				caption: profile.caption.clone(),
			});
		}

		Ok(())
	}

	/// A content subfolder that exists but holds no images is usually a
	/// misplaced-files mistake; call it out before processing starts.
	fn log_empty_subfolders(&self) -> Result<()> {
		for sub in ["normal", "nsfw"] {
			if sub == "nsfw" && !self.config.nsfw_enabled {
				continue;
			}
			let dir = self.config.sample_dataset_folder.join(sub);
			if dir.is_dir() && !files::folder_has_images(&dir)? {
				info!("{}: {sub}/", tr("folder_empty"));
			}
		}
		Ok(())
	}

	/// The detailed-mode sample, as placed in the config by the interactive
	/// selection. `None` means the selection was cancelled.
	fn selected_sample(&self) -> Result<Option<SampleFile>> {
		let Some(path) = &self.config.selected_sample else {
			return Ok(None);
		};
		if !path.is_file() {
			return Err(Error::FileNotFound { path: path.clone() });
		}
		let meta = fs::metadata(path)?;
		let name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
		Ok(Some(SampleFile {
			path: path.clone(),
			name,
			size: meta.len(),
			content: ContentClass::from_path(path),
		}))
	}
}
