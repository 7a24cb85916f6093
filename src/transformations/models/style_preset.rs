use std::{fmt, str::FromStr};

use crate::transformations::errors::TransformError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylePreset {
    Modern,
    Rustic,
    Minimalist,
    Luxury,
    Scandinavian,
    Industrial,
}

#[derive(Debug, PartialEq)]
pub struct StyleConfig {
    pub prompt: &'static str,
    pub negative_prompt: &'static str,
    pub guidance_scale: f64,
    pub prompt_strength: f64,
}

impl StylePreset {
    pub const ALL: [StylePreset; 6] = [
        Self::Modern,
        Self::Rustic,
        Self::Minimalist,
        Self::Luxury,
        Self::Scandinavian,
        Self::Industrial,
    ];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Modern => "modern",
            Self::Rustic => "rustic",
            Self::Minimalist => "minimalist",
            Self::Luxury => "luxury",
            Self::Scandinavian => "scandinavian",
            Self::Industrial => "industrial",
        }
    }

    pub fn config(&self) -> &'static StyleConfig {
        match *self {
            Self::Modern => &MODERN,
            Self::Rustic => &RUSTIC,
            Self::Minimalist => &MINIMALIST,
            Self::Luxury => &LUXURY,
            Self::Scandinavian => &SCANDINAVIAN,
            Self::Industrial => &INDUSTRIAL,
        }
    }
}

impl FromStr for StylePreset {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.value() == s)
            .ok_or_else(|| TransformError::Validation("Invalid style preset".to_string()))
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

macro_rules! negative_prompt {
    ($extra:literal) => {
        concat!(
            "lowres, watermark, banner, logo, watermark, contactinfo, text, deformed, blurry, blur, out of focus, out of frame, surreal, extra, ugly, ",
            $extra
        )
    };
}

static MODERN: StyleConfig = StyleConfig {
    prompt: "A contemporary living space with clean lines, minimalist furniture, and a neutral color palette. Modern art pieces adorn the walls, and large windows provide natural light. The space features sleek, high-end appliances and smart home technology.",
    negative_prompt: negative_prompt!("upholstered walls, fabric walls, plush walls, mirror, mirrored, functional, realistic, traditional, vintage, rustic"),
    guidance_scale: 15.0,
    prompt_strength: 0.8,
};

static RUSTIC: StyleConfig = StyleConfig {
    prompt: "A cozy rustic interior with exposed wooden beams, vintage furniture, and warm lighting. Natural materials like stone and wood dominate the space, creating a warm and inviting atmosphere. Antique pieces and handmade decor add character.",
    negative_prompt: negative_prompt!("modern, minimalist, industrial, sleek"),
    guidance_scale: 15.0,
    prompt_strength: 0.8,
};

static MINIMALIST: StyleConfig = StyleConfig {
    prompt: "A minimalist space with essential furniture pieces, clean lines, and a monochromatic color scheme. The design emphasizes functionality and simplicity, with carefully selected decor items and ample negative space.",
    negative_prompt: negative_prompt!("cluttered, busy, ornate, decorative"),
    guidance_scale: 15.0,
    prompt_strength: 0.8,
};

static LUXURY: StyleConfig = StyleConfig {
    prompt: "An opulent interior featuring high-end finishes, premium materials, and sophisticated design elements. Crystal chandeliers, marble surfaces, and designer furniture create an atmosphere of elegance and luxury.",
    negative_prompt: negative_prompt!("cheap, basic, simple, plain"),
    guidance_scale: 15.0,
    prompt_strength: 0.8,
};

static SCANDINAVIAN: StyleConfig = StyleConfig {
    prompt: "A bright and airy Scandinavian-inspired space with light wood floors, white walls, and functional furniture. Natural light floods the room, and hygge elements like soft textiles and plants create a cozy atmosphere.",
    negative_prompt: negative_prompt!("dark, heavy, ornate, cluttered"),
    guidance_scale: 15.0,
    prompt_strength: 0.8,
};

static INDUSTRIAL: StyleConfig = StyleConfig {
    prompt: "An industrial-style space featuring exposed brick walls, metal fixtures, and raw materials. The design incorporates vintage machinery elements, concrete floors, and a mix of metal and wood furniture.",
    negative_prompt: negative_prompt!("soft, delicate, ornate, traditional"),
    guidance_scale: 15.0,
    prompt_strength: 0.8,
};
