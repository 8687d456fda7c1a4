//! Compact placeholder decoding.
//!
//! Placeholders are BlurHash strings: a base83-encoded grid of DCT
//! coefficients that expands into a blurred thumbnail of any size.

use std::f32::consts::PI;
use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

const BASE83: &[u8; 83] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz#$%*+,-.:;=?@[]^_{|}~";

/// Why a placeholder could not be turned into pixels.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlaceholderError {
    #[error("placeholder is {0} characters, need at least 6")]
    TooShort(usize),

    #[error("placeholder contains invalid character {0:?}")]
    InvalidCharacter(char),

    #[error("placeholder length {actual} does not match its {expected}-character header")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("cannot decode placeholder into a {width}x{height} raster")]
    InvalidSize { width: u32, height: u32 },

    #[error("failed to encode placeholder raster: {0}")]
    Encode(String),
}

/// Straight-alpha RGBA8 pixels, row-major, tightly packed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Raster {
    /// Encodes the raster as an inline `data:image/png;base64,...` URL.
    pub fn to_data_url(&self) -> Result<String, PlaceholderError> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
            .ok_or_else(|| PlaceholderError::Encode("pixel buffer does not match dimensions".into()))?;

        let mut png = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .map_err(|e| PlaceholderError::Encode(e.to_string()))?;

        Ok(format!("data:image/png;base64,{}", BASE64_STANDARD.encode(png)))
    }
}

/// Turns a compact placeholder code into pixels.
///
/// `punch` scales the AC components; values above 1 increase contrast.
pub trait PlaceholderDecoder {
    fn decode(&self, code: &str, width: u32, height: u32, punch: f32) -> Result<Raster, PlaceholderError>;
}

/// Reference BlurHash decoder.
#[derive(Debug, Copy, Clone, Default)]
pub struct BlurHashDecoder;

impl PlaceholderDecoder for BlurHashDecoder {
    fn decode(&self, code: &str, width: u32, height: u32, punch: f32) -> Result<Raster, PlaceholderError> {
        if width == 0 || height == 0 {
            return Err(PlaceholderError::InvalidSize { width, height });
        }
        // Byte slicing below relies on one byte per character.
        if let Some(c) = code.chars().find(|c| !c.is_ascii()) {
            return Err(PlaceholderError::InvalidCharacter(c));
        }
        if code.len() < 6 {
            return Err(PlaceholderError::TooShort(code.len()));
        }

        let size_flag = decode83(&code[0..1])? as usize;
        let num_y = size_flag / 9 + 1;
        let num_x = size_flag % 9 + 1;
        let expected = 4 + 2 * num_x * num_y;
        if code.len() != expected {
            return Err(PlaceholderError::LengthMismatch { expected, actual: code.len() });
        }

        let quantised_max = decode83(&code[1..2])?;
        let max_value = (quantised_max + 1) as f32 / 166.0 * punch;

        let mut colors = Vec::with_capacity(num_x * num_y);
        colors.push(decode_dc(decode83(&code[2..6])?));
        for i in 1..num_x * num_y {
            let start = 4 + i * 2;
            colors.push(decode_ac(decode83(&code[start..start + 2])?, max_value));
        }

        let (w, h) = (width as usize, height as usize);
        let cos_x = cosine_table(w, num_x);
        let cos_y = cosine_table(h, num_y);

        let mut rgba = Vec::with_capacity(w * h * 4);
        for y in 0..h {
            for x in 0..w {
                let mut acc = [0.0f32; 3];
                for j in 0..num_y {
                    for i in 0..num_x {
                        let basis = cos_x[x * num_x + i] * cos_y[y * num_y + j];
                        let c = colors[i + j * num_x];
                        acc[0] += c[0] * basis;
                        acc[1] += c[1] * basis;
                        acc[2] += c[2] * basis;
                    }
                }
                rgba.extend_from_slice(&[
                    linear_to_srgb(acc[0]),
                    linear_to_srgb(acc[1]),
                    linear_to_srgb(acc[2]),
                    255,
                ]);
            }
        }

        Ok(Raster { width, height, rgba })
    }
}

fn decode83(s: &str) -> Result<u32, PlaceholderError> {
    s.chars().try_fold(0u32, |acc, c| {
        let digit = BASE83
            .iter()
            .position(|&b| b as char == c)
            .ok_or(PlaceholderError::InvalidCharacter(c))?;
        Ok(acc * 83 + digit as u32)
    })
}

/// `cos(PI * p * k / len)` for every pixel `p` and component `k`, laid out `[p * n + k]`.
fn cosine_table(len: usize, n: usize) -> Vec<f32> {
    let mut table = Vec::with_capacity(len * n);
    for p in 0..len {
        for k in 0..n {
            table.push((PI * p as f32 * k as f32 / len as f32).cos());
        }
    }
    table
}

fn decode_dc(value: u32) -> [f32; 3] {
    [
        srgb_to_linear(value >> 16),
        srgb_to_linear((value >> 8) & 255),
        srgb_to_linear(value & 255),
    ]
}

fn decode_ac(value: u32, max_value: f32) -> [f32; 3] {
    let quant = [value / (19 * 19), (value / 19) % 19, value % 19];
    quant.map(|q| sign_pow((q as f32 - 9.0) / 9.0, 2.0) * max_value)
}

fn sign_pow(v: f32, exp: f32) -> f32 {
    v.signum() * v.abs().powf(exp)
}

fn srgb_to_linear(value: u32) -> f32 {
    let v = value as f32 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(value: f32) -> u8 {
    let v = value.clamp(0.0, 1.0);
    if v <= 0.003_130_8 {
        (v * 12.92 * 255.0 + 0.5) as u8
    } else {
        ((1.055 * v.powf(1.0 / 2.4) - 0.055) * 255.0 + 0.5) as u8
    }
}
