//! Barcode scanning: sharpen the capture, then hand it to zbarimg.

use std::path::Path;
use std::process::Command;

use image::DynamicImage;

use crate::domain::{BarcodeDecoder, DomainError};

/// Fixed sharpening kernel applied once before decoding.
const SHARPEN_KERNEL: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];

/// Apply the 3x3 sharpening convolution. Output dimensions match the input.
pub fn sharpen(image: &DynamicImage) -> DynamicImage {
    image.filter3x3(&SHARPEN_KERNEL)
}

/// Decoder backed by the zbar CLI.
pub struct ZbarDecoder;

impl BarcodeDecoder for ZbarDecoder {
    fn decode(&self, image_data: &[u8]) -> Result<Vec<String>, DomainError> {
        // Bytes that don't decode into a pixel grid count as "no barcode",
        // same as a readable image with no symbol in it.
        let image = match image::load_from_memory(image_data) {
            Ok(image) => image,
            Err(_) => return Ok(Vec::new()),
        };

        let sharpened = sharpen(&image);

        let temp_path = std::env::temp_dir().join(format!("scan_{}.png", uuid::Uuid::new_v4()));
        sharpened
            .save(&temp_path)
            .map_err(|e| DomainError::Internal(format!("Failed to write scan image: {}", e)))?;

        let result = run_zbarimg(&temp_path);

        // Cleanup
        let _ = std::fs::remove_file(&temp_path);

        result
    }
}

fn run_zbarimg(path: &Path) -> Result<Vec<String>, DomainError> {
    // Execute zbarimg CLI
    // zbarimg --quiet --raw <path>
    let output = Command::new("zbarimg")
        .arg("--quiet")
        .arg("--raw")
        .arg(path)
        .output()
        .map_err(|e| DomainError::External(format!("Failed to execute zbarimg: {}", e)))?;

    match output.status.code() {
        Some(0) => {
            let text = String::from_utf8_lossy(&output.stdout);
            Ok(text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect())
        }
        // Exit code 4: scanned fine, no symbol found
        Some(4) => Ok(Vec::new()),
        _ => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(DomainError::External(format!(
                "zbarimg failed: {}",
                stderr.trim()
            )))
        }
    }
}
