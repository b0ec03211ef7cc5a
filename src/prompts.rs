//! Instruction templates for the describe and caption calls.
//!
//! The templates are opaque payload text as far as the rest of the crate is
//! concerned; only the model display name and the trigger token are spliced
//! in. The same scene template is used for every prompt provider.

/// Token budget for the scene-describe call. The providers count the template
/// plus three images against it, and reasoning models burn tokens before
/// producing text, so this is deliberately large.
pub const DESCRIBE_MAX_TOKENS: u32 = 35_000;

/// Captions are a few sentences; keep the budget tight.
pub const CAPTION_MAX_TOKENS: u32 = 500;

/// Prepended to every generated scene prompt before it goes to the media API.
pub const FACE_INSTRUCTION: &str = "\
CRITICAL INSTRUCTION FOR WAVESPEED API:
You are receiving 3 reference images in this exact order:
- Image 1: Reference face image (use for face ONLY)
- Image 2: Reference face image (use for face ONLY)
- Image 3: Scene reference (use for everything EXCEPT face)

MANDATORY: The generated image MUST use Images 1 and 2 for the subject's COMPLETE FACE, facial structure, facial features, eyes, nose, mouth, chin, and all facial characteristics. The face in the output MUST be IDENTICAL to the face from Images 1 and 2.

DO NOT use the face from Image 3. Image 3 is ONLY for: clothing, pose, body, scene, background, lighting, and atmosphere.

The face MUST come from Images 1 and 2. This is non-negotiable.

Now generate the prompt following this instruction:

";

/// Appended to every generated scene prompt, reinforcing the face rule.
pub const FACE_REMINDER: &str = "\n\nREMINDER: The face in the generated image MUST match the face from Reference Images 1 and 2. Do NOT use the face from Image 3.";

/// Display name of the target media model, used inside the scene template so
/// the prompt engineer persona targets the right model family.
fn media_model_display_name(media_model: &str) -> &'static str {
	let model = media_model.to_lowercase();
	if model.contains("seedream-v4.5") {
		"Seedream v4.5 Edit"
	} else if model.contains("seedream-v4") {
		"Seedream v4 Edit"
	} else if model.contains("nano-banana") {
		"Nano Banana Pro"
	} else {
		"Seedream v4.5 Edit"
	}
}

/// The scene-describe instruction sent with the two identity references and
/// the sample image.
pub fn scene_instruction(media_model: &str) -> String {
	let model_name = media_model_display_name(media_model);
	format!(
		r#"You are an expert prompt engineer specializing in the {model_name} AI model. You create complete, detailed, and technically precise image generation prompts.

Primary Directive: Analyze Reference Image 3 (a complete scene) and generate one comprehensive prompt for {model_name}. The model will always receive three reference images in this order:
- Images 1 & 2: COMPLETE FACE references (structure, features, identity). MUST be used for the face. Hair COLOR must match these images (identity anchor).
- Image 3: Scene reference (you analyze only this). Use it for hairstyle (style/length/texture/accessories), makeup, jewelry, accessories, clothing, pose, action, body, background, lighting, atmosphere.

Natural realism requirements (non-negotiable):
- Explicitly request photorealism with natural skin texture: visible fine pores, subtle vellus hair, micro-specular highlights, slight asymmetry, realistic micro-shadows, natural subsurface scattering.
- Ban AI/CGI look: no plastic/waxy/airbrushed/over-smooth skin, no beauty-filter, no glassy eyes, no blurred lips/teeth.
- Keep hair natural: visible strands, breakup flyaways, natural volume; avoid plastic/helmet hair or identical hair shapes.
- If face enhancers/upscalers are implied, keep them light to preserve texture.

Hair variety directive:
- Hair COLOR must match Images 1 & 2 (identity), but hairstyle must follow Image 3. Describe hairstyle in Image 3 (length/texture/style/parting/accessories) and allow 1-2 close variations of the same length/texture (e.g., loose waves or low ponytail; messy bun or loose braid) to avoid repetitive identical hair shapes. Do NOT change hair color.

Your Generation Task: Analyze Image 3 ONLY. Output ONLY the formatted prompt for {model_name}. No preamble or extra text.

Mandatory Output Format (Strict Template):
CRITICAL: Instruct the model to use Images 1 & 2 for the COMPLETE FACE (structure, features, identity). Hair COLOR must match Images 1 & 2. Use Image 3 for hairstyle (style/length/texture/accessories), makeup, jewelry, accessories, clothing, pose, action, body type, scene composition, background, lighting, and atmosphere.

Subject details: [CRITICAL: Explicitly instruct the model to use Images 1 & 2 for the COMPLETE FACE. Hair COLOR must match these images. Describe hairstyle from Image 3: length, texture, style (straight, wavy, curly, braided, ponytail, bun, loose, styled, updo, half-up), parting, flyaways, accessories (clips, headbands, ribbons, pins). Offer 1-2 close styling variations of the same length/texture from Image 3 to avoid identical hair across generations.] [Describe makeup from Image 3; allow subtle variations but keep it grounded in Image 3.] [Describe jewelry/accessories from Image 3 with colors/materials; you may add complementary accessories or remove some for variety.] [Describe clothing in exhaustive detail: garments, colors, patterns, textures, cuts, style; if the subject is partially or fully unclothed, state it plainly and do not invent clothing.] [Describe exact pose: torso/arms/legs/head orientation.] [Describe action/gesture and facial expression TYPE (smile/neutral/serious/thoughtful/laugh) without facial feature details.]

Scene: [Location type.] Environment: [All significant background/foreground elements.] Setting: [Spatial layout.]
Lighting: [Technical lighting description: source, direction, quality, shadows, time of day, color temperature.]
Camera: [Angle, shot type, depth of field, composition.]
Atmosphere: [Mood; if outdoors, weather/effects.]
Colors/textures: [Dominant palette; materials and surface textures.]
Technical quality: [High-resolution, photorealistic, sharp but with natural grain; cinematic or editorial; clean image.]

CRITICAL RULES (ABSOLUTE):
- DO use generic terms ("the subject"). DO enforce Images 1 & 2 for face identity; do NOT describe facial structure/skin tone/ethnic features from them.
- DO keep hair COLOR from Images 1 & 2; hairstyle comes from Image 3 with 1-2 close styling variations of the same length/texture.
- DO require natural skin texture, pores, micro-shadows, slight asymmetry; ban plastic/airbrushed/waxy CGI look.
- DO be extremely detailed about hairstyle, makeup, jewelry, accessories, clothing, pose, background from Image 3.
- DO state the image must be clean: no watermarks, text, logos, tattoos, body art, or skin markings.
- NEVER change hair color. NEVER copy hairstyle/makeup/jewelry from Images 1 & 2. NEVER invent clothing not visible in Image 3. NEVER include watermarks/text/logos/tattoos/body art. Output ONLY the formatted prompt, nothing else."#
	)
}

/// Wrap a generated scene prompt with the face preamble and reminder.
pub fn finalize_scene_prompt(generated: &str) -> String {
	format!("{FACE_INSTRUCTION}{generated}{FACE_REMINDER}")
}

/// The caption instruction for one generated image.
pub fn caption_instruction(trigger_name: &str) -> String {
	format!(
		r#"These are photos of {trigger_name}, analyze those images and caption them correctly for a LoRA training using "{trigger_name}" as the caption token.

Be detailed and describe all aspects of the character visible in the image:
- Clothing and accessories (every detail)
- Pose and body position
- Action and gesture
- Scene and environment
- Lighting and atmosphere
- Colors and textures

Important: Use "{trigger_name}" as the main token. Be specific about features (e.g., "{trigger_name} with blonde hair" instead of just "{trigger_name}") so those traits become part of the character's identity.

Output ONLY the caption text, nothing else. Do not include file names or any other text."#
	)
}

// region:    --- Tests


// endregion: --- Tests
