//! Caption pass: one caption per generated image, normalized file names, and
//! a final zip archive ready for LoRA training upload.

use crate::adapter::exec_describe;
use crate::chat::{DescribeRequest, ImagePart};
use crate::config::RunConfig;
use crate::pipeline::GeneratedArtifact;
use crate::texts::tr;
use crate::webc::Transport;
use crate::{files, prompts, Result};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Generate captions for every recorded artifact, normalize the images into
/// `lora_dataset/`, and archive the pairs.
///
/// A caption failure skips that artifact only; the archive is built from
/// whatever pairs succeeded.
pub(super) async fn run_caption_pass<T: Transport>(
	transport: &T,
	config: &RunConfig,
	artifacts: &mut [GeneratedArtifact],
) -> Result<()> {
	let trigger = &config.trigger_name;
	let lora_dir = config.output_folder.join("lora_dataset");
	fs::create_dir_all(&lora_dir)?;

	let mut pairs: Vec<(PathBuf, String)> = Vec::new();

	for artifact in artifacts.iter_mut() {
		let display_name = artifact
			.path
			.file_name()
			.map(|n| n.to_string_lossy().to_string())
			.unwrap_or_default();
		info!("{}: {display_name}", tr("generating_caption_for"));

		// Any failure in the caption/write/relocate sequence drops this
		// artifact only; the archive is still built from the rest.
		match caption_artifact(transport, config, artifact, trigger, &lora_dir).await {
			Ok(pair) => pairs.extend(pair),
			Err(err) => warn!("{}: {display_name}: {err}", tr("error_generating_caption_for")),
		}
	}

	if !pairs.is_empty() {
		let zip_path = config.output_folder.join(format!("{trigger}_lora_dataset.zip"));
		info!("{}: {}", tr("creating_zip"), zip_path.display());
		write_zip(&zip_path, &pairs)?;
		info!("{}: {}", tr("zip_created"), zip_path.display());
	}

	Ok(())
}

/// Caption one artifact and settle its files: the `.txt` sidecar, then the
/// image itself under its normalized name. Returns the two archive entries.
async fn caption_artifact<T: Transport>(
	transport: &T,
	config: &RunConfig,
	artifact: &mut GeneratedArtifact,
	trigger: &str,
	lora_dir: &Path,
) -> Result<[(PathBuf, String); 2]> {
	let caption = generate_caption(transport, config, artifact).await?;

	let caption_filename = format!("{trigger}_{:04}.txt", artifact.index);
	let caption_path = lora_dir.join(&caption_filename);
	fs::write(&caption_path, &caption)?;
	info!("{}: {caption_filename}", tr("caption_saved"));

	let image_path = normalize_image_location(artifact, trigger, lora_dir)?;
	let image_filename = image_path
		.file_name()
		.map(|n| n.to_string_lossy().to_string())
		.unwrap_or_default();

	Ok([(image_path, image_filename), (caption_path, caption_filename)])
}

async fn generate_caption<T: Transport>(
	transport: &T,
	config: &RunConfig,
	artifact: &GeneratedArtifact,
) -> Result<String> {
	let image_data = files::read_file(&artifact.path)?;
	let describe_req = DescribeRequest::new(prompts::caption_instruction(&config.trigger_name), prompts::CAPTION_MAX_TOKENS)
		.append_image(ImagePart::jpeg(image_data));
	let target = config.service_target(artifact.caption.clone());
	exec_describe(transport, target, describe_req).await
}

/// Ensure the artifact lives in `lora_dir` under `{trigger}_{index:04}{ext}`.
/// Images generated straight into place are left alone; strays are copied in
/// and the original removed.
fn normalize_image_location(artifact: &mut GeneratedArtifact, trigger: &str, lora_dir: &Path) -> Result<PathBuf> {
	let ext = artifact
		.path
		.extension()
		.map(|e| format!(".{}", e.to_string_lossy()))
		.unwrap_or_default();
	let expected_name = format!("{trigger}_{:04}{ext}", artifact.index);
	let expected_path = lora_dir.join(&expected_name);

	if artifact.path != expected_path {
		fs::copy(&artifact.path, &expected_path)?;
		if artifact.path.parent() != Some(lora_dir) {
			// Best effort; a leftover original is not worth failing the pass.
			let _ = fs::remove_file(&artifact.path);
		}
		artifact.path = expected_path.clone();
	}

	Ok(expected_path)
}

fn write_zip(zip_path: &Path, pairs: &[(PathBuf, String)]) -> Result<()> {
	let file = fs::File::create(zip_path)?;
	let mut zip = ZipWriter::new(file);
	let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

	for (path, filename) in pairs {
		zip.start_file(filename.as_str(), options)?;
		zip.write_all(&fs::read(path)?)?;
	}

	zip.finish()?;
	Ok(())
}
