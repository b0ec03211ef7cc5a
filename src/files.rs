//! Local filesystem access for reference and sample images.
//!
//! Sample folders may hold a `normal/` and a `nsfw/` subfolder; loose files in
//! the folder root are still picked up. Listings are name-sorted within each
//! folder so that runs are deterministic. Also hosts the unique-output-path
//! resolver used wherever generation results land on disk.

use crate::common::ContentClass;
use crate::{Error, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// One listed sample image.
#[derive(Debug, Clone)]
pub struct SampleFile {
	pub path: PathBuf,
	pub name: String,
	pub size: u64,
	pub content: ContentClass,
}

/// List up to `limit` image files under `folder`.
///
/// Scan order: `normal/` subfolder, then `nsfw/` (only when `include_nsfw`),
/// then the folder root. Missing subfolders are simply skipped; a missing
/// `folder` itself is an error.
pub fn list_image_files(folder: &Path, limit: usize, include_nsfw: bool) -> Result<Vec<SampleFile>> {
	if !folder.is_dir() {
		return Err(Error::FolderNotFound {
			path: folder.to_path_buf(),
		});
	}

	let mut search_paths: Vec<PathBuf> = Vec::new();
	let normal = folder.join("normal");
	if normal.is_dir() {
		search_paths.push(normal);
	}
	if include_nsfw {
		let nsfw = folder.join("nsfw");
		if nsfw.is_dir() {
			search_paths.push(nsfw);
		}
	}
	search_paths.push(folder.to_path_buf());

	let mut files: Vec<SampleFile> = Vec::new();
	for search_path in search_paths {
		for path in sorted_image_paths(&search_path)? {
			if files.len() >= limit {
				return Ok(files);
			}
			let content = ContentClass::from_path(&path);
			if !include_nsfw && content == ContentClass::Nsfw {
				continue;
			}
			let meta = fs::metadata(&path)?;
			let name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
			files.push(SampleFile {
				path,
				name,
				size: meta.len(),
				content,
			});
		}
	}

	Ok(files)
}

/// True when `dir` directly contains at least one image file.
pub fn folder_has_images(dir: &Path) -> Result<bool> {
	Ok(!sorted_image_paths(dir)?.is_empty())
}

/// Read the raw bytes of one file.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
	if !path.is_file() {
		return Err(Error::FileNotFound { path: path.to_path_buf() });
	}
	Ok(fs::read(path)?)
}

/// Return a path that does not exist yet, derived from `base_path`.
///
/// A fresh path comes back unchanged. An occupied path gets a
/// `_{YYYYMMDD_HHMMSS}` suffix; if that also exists (several generations in
/// the same second) a counter is appended on top.
pub fn unique_file_path(base_path: &Path) -> PathBuf {
	if !base_path.exists() {
		return base_path.to_path_buf();
	}

	let dir = base_path.parent().unwrap_or_else(|| Path::new(""));
	let stem = base_path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
	let ext = base_path.extension().map(|e| e.to_string_lossy().to_string());

	let with_name = |name: String| -> PathBuf {
		match &ext {
			Some(ext) => dir.join(format!("{name}.{ext}")),
			None => dir.join(name),
		}
	};

	let timestamp = Local::now().format("%Y%m%d_%H%M%S");
	let mut candidate = with_name(format!("{stem}_{timestamp}"));
	let mut counter = 1u32;
	while candidate.exists() {
		candidate = with_name(format!("{stem}_{timestamp}_{counter}"));
		counter += 1;
	}

	candidate
}

fn sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
	let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
		.filter_map(std::result::Result::ok)
		.map(|entry| entry.path())
		.filter(|path| path.is_file() && has_image_extension(path))
		.collect();
	paths.sort();
	Ok(paths)
}

fn has_image_extension(path: &Path) -> bool {
	path.extension()
		.and_then(|ext| ext.to_str())
		.is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	fn touch(path: &Path) {
		fs::write(path, b"x").unwrap();
	}

	#[test]
	fn test_list_image_files_scan_order_and_filter() {
		let dir = tempfile::tempdir().unwrap();
		let root = dir.path();
		fs::create_dir(root.join("normal")).unwrap();
		fs::create_dir(root.join("nsfw")).unwrap();
		touch(&root.join("normal/b.png"));
		touch(&root.join("normal/a.jpg"));
		touch(&root.join("nsfw/c.webp"));
		touch(&root.join("loose.jpeg"));
		touch(&root.join("notes.txt"));

		let files = list_image_files(root, 10, true).unwrap();
		let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
		// normal (name-sorted), then nsfw, then root; non-images excluded
		assert_eq!(names, ["a.jpg", "b.png", "c.webp", "loose.jpeg"]);
		assert_eq!(files[2].content, ContentClass::Nsfw);
		assert_eq!(files[0].content, ContentClass::Normal);
	}

	#[test]
	fn test_list_image_files_nsfw_excluded_and_limit() {
		let dir = tempfile::tempdir().unwrap();
		let root = dir.path();
		fs::create_dir(root.join("normal")).unwrap();
		fs::create_dir(root.join("nsfw")).unwrap();
		touch(&root.join("normal/a.jpg"));
		touch(&root.join("normal/b.jpg"));
		touch(&root.join("nsfw/c.jpg"));

		let files = list_image_files(root, 10, false).unwrap();
		assert!(files.iter().all(|f| f.content != ContentClass::Nsfw));
		assert_eq!(files.len(), 2);

		let files = list_image_files(root, 1, true).unwrap();
		assert_eq!(files.len(), 1);
		assert_eq!(files[0].name, "a.jpg");
	}

	#[test]
	fn test_missing_folder_and_file() {
		let dir = tempfile::tempdir().unwrap();
		let missing_dir = dir.path().join("nope");
		assert!(matches!(
			list_image_files(&missing_dir, 10, true),
			Err(Error::FolderNotFound { .. })
		));
		assert!(matches!(
			read_file(&dir.path().join("nope.png")),
			Err(Error::FileNotFound { .. })
		));
	}

	#[test]
	fn test_unique_file_path_fresh_is_unchanged() {
		let dir = tempfile::tempdir().unwrap();
		let base = dir.path().join("sample_prompt.txt");
		assert_eq!(unique_file_path(&base), base);
	}

	#[test]
	fn test_unique_file_path_existing_gets_suffix() {
		let dir = tempfile::tempdir().unwrap();
		let base = dir.path().join("sample_generated.png");
		fs::write(&base, b"x").unwrap();

		let unique = unique_file_path(&base);
		assert_ne!(unique, base);
		assert!(!unique.exists());
		let name = unique.file_name().unwrap().to_string_lossy().to_string();
		assert!(name.starts_with("sample_generated_"));
		assert!(name.ends_with(".png"));

		// occupying the suffixed path pushes the next call to a counter
		fs::write(&unique, b"x").unwrap();
		let next = unique_file_path(&base);
		assert_ne!(next, unique);
		assert!(!next.exists());
	}
}

// endregion: --- Tests
