//! Central table of user-facing message texts.
//!
//! Log statements and the progress output look the messages up by key so that
//! the wording lives in one place. Unknown keys echo back unchanged, which
//! makes a missing entry visible in the output instead of panicking.

pub fn tr(key: &'static str) -> &'static str {
	match key {
		// -- Process
		"loading_ref_images" => "Loading reference images",
		"loading_sample_images" => "Loading sample images",
		"found_ref_images" => "Found reference images",
		"found_sample_images" => "Found sample images for processing",
		"folder_empty" => "Sample subfolder contains no images",
		"processing_image" => "Processing image",
		"generating_prompt" => "Generating prompt",
		"prompt_generated" => "Prompt generated",
		"generating_media" => "Generating media",
		"image_saved" => "Image saved",
		"video_saved" => "Video saved",
		"processing_completed" => "Processing completed, results saved",
		"error_processing_image" => "Error processing image, skipping",
		"nsfw_skipped" => "NSFW content disabled, skipping",

		// -- Captions
		"generating_captions" => "Generating captions for LoRA training",
		"generating_caption_for" => "Generating caption for",
		"caption_saved" => "Caption saved",
		"error_generating_caption_for" => "Error generating caption, skipping",
		"caption_generation_skipped" => "Caption generation will be skipped",
		"trigger_name_not_set" => "Trigger name not specified, caption generation will be skipped",
		"creating_zip" => "Creating zip archive",
		"zip_created" => "Zip archive created",

		// -- Providers
		"response_truncated" => "Response was truncated by the output token limit",
		"empty_describe_content" => "Provider returned no text content",
		"media_api_error" => "Generation API returned error",
		"retry_attempt" => "Retrying generation",
		"waiting_before_retry" => "Waiting before retry",
		"unknown_error" => "Unknown error",

		// -- Selection
		"image_not_selected" => "Image not selected, processing cancelled",
		"image_selected" => "Selected image",

		other => other,
	}
}

// region:    --- Tests


// endregion: --- Tests
