//! Generation parameters accepted by `/generate-image` and forwarded verbatim
//! to the upstream `/api/gen/create` endpoint.
//!
//! Every omitted field is filled by a serde default function, so each request
//! owns a freshly built value. Wire names follow the upstream API, including
//! its mixed camelCase keys.
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const DEFAULT_MODEL_ID: &str = "23887bba-507e-4249-a0e3-6951e4027f2b";
pub const DEFAULT_SEED: i64 = 9_896_923_949;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: i64,
    pub height: i64,
    pub batch_size: i64,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution { width: 1344, height: 768, batch_size: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(rename = "highPixels", default)]
    pub high_pixels: bool,
    #[serde(default = "default_model_id")]
    pub model_id: String,
    #[serde(default)]
    pub negative_prompt: String,
    #[serde(default)]
    pub resolution: Resolution,
    #[serde(default)]
    pub model_ability: Map<String, Value>,
    #[serde(default = "default_seed")]
    pub seed: i64,
    #[serde(default = "default_steps")]
    pub steps: i64,
    #[serde(default = "default_cfg")]
    pub cfg: i64,
    #[serde(default = "default_sampler_name")]
    pub sampler_name: String,
    #[serde(default = "default_scheduler")]
    pub scheduler: String,
    #[serde(rename = "ponyTags", default)]
    pub pony_tags: Map<String, Value>,
    #[serde(default = "default_denoise")]
    pub denoise: f64,
    #[serde(default = "default_hires_fix_denoise")]
    pub hires_fix_denoise: f64,
    #[serde(default = "default_hires_scale")]
    pub hires_scale: i64,
    #[serde(default = "empty_style_list")]
    pub multi_img2img_info: Map<String, Value>,
    #[serde(default = "empty_style_list")]
    pub img_control_info: Map<String, Value>,
    #[serde(rename = "continueCreate", default)]
    pub continue_create: bool,
}

impl GenerationRequest {
    /// A request carrying `prompt` and defaults for everything else.
    pub fn new(prompt: impl Into<String>) -> Self {
        GenerationRequest {
            prompt: prompt.into(),
            high_pixels: false,
            model_id: default_model_id(),
            negative_prompt: String::new(),
            resolution: Resolution::default(),
            model_ability: Map::new(),
            seed: default_seed(),
            steps: default_steps(),
            cfg: default_cfg(),
            sampler_name: default_sampler_name(),
            scheduler: default_scheduler(),
            pony_tags: Map::new(),
            denoise: default_denoise(),
            hires_fix_denoise: default_hires_fix_denoise(),
            hires_scale: default_hires_scale(),
            multi_img2img_info: empty_style_list(),
            img_control_info: empty_style_list(),
            continue_create: false,
        }
    }
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}

fn default_seed() -> i64 {
    DEFAULT_SEED
}

fn default_steps() -> i64 {
    6
}

fn default_cfg() -> i64 {
    1
}

fn default_sampler_name() -> String {
    "euler".to_string()
}

fn default_scheduler() -> String {
    "normal".to_string()
}

fn default_denoise() -> f64 {
    1.0
}

fn default_hires_fix_denoise() -> f64 {
    0.5
}

fn default_hires_scale() -> i64 {
    2
}

fn empty_style_list() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("style_list".to_string(), json!([]));
    map
}
