use crate::camera::{CameraSettings, VerticalSampling};
use crate::geometry::Sphere;
use crate::math::Vector3;
use crate::renderer::ProgressKind;

use anyhow::{bail, ensure};
use serde::Deserialize;

pub const DEFAULT_OUTPUT_FILE: &str = "output/image.ppm";
pub const DEFAULT_WIDTH: usize = 400;
pub const DEFAULT_ASPECT_RATIO: f32 = 16.0 / 9.0;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum AspectRatioData {
    // aspect_ratio = 1.7777778
    Ratio(f32),
    // aspect_ratio = [16, 9]
    Fraction([f32; 2]),
}

impl AspectRatioData {
    pub fn value(&self) -> f32 {
        match *self {
            AspectRatioData::Ratio(ratio) => ratio,
            AspectRatioData::Fraction([w, h]) => w / h,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, Default)]
#[serde(default)]
pub struct TOMLResolution {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub aspect_ratio: Option<AspectRatioData>,
}

#[derive(Deserialize, Copy, Clone, Debug, Default)]
#[serde(default)]
pub struct TOMLRenderSettings {
    pub resolution: TOMLResolution,
    pub threads: Option<u16>,
    pub progress: Option<ProgressKind>,
}

#[derive(Deserialize, Copy, Clone, Debug, Default)]
#[serde(default)]
pub struct TOMLCameraSettings {
    pub viewport_height: Option<f32>,
    pub focal_length: Option<f32>,
    pub vertical_sampling: Option<VerticalSampling>,
}

#[derive(Deserialize, Copy, Clone, Debug, Default)]
#[serde(default)]
pub struct TOMLSphereSettings {
    pub center: Option<[f32; 3]>,
    pub radius: Option<f32>,
}

#[derive(Deserialize, Copy, Clone, Debug, Default)]
#[serde(default)]
pub struct TOMLSceneSettings {
    pub sphere: TOMLSphereSettings,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct TOMLConfig {
    pub output_file: Option<String>,
    pub render_settings: TOMLRenderSettings,
    pub camera: TOMLCameraSettings,
    pub scene: TOMLSceneSettings,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Resolution {
    /// Height is `width / aspect_ratio`, truncated toward zero.
    pub fn from_aspect_ratio(width: usize, aspect_ratio: f32) -> Self {
        Resolution {
            width,
            height: (width as f32 / aspect_ratio) as usize,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RendererType {
    Naive,
    RowParallel { threads: usize },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub output_file: String,
    pub resolution: Resolution,
    pub renderer: RendererType,
    pub progress: ProgressKind,
    pub camera: CameraSettings,
    pub sphere: Sphere,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_file: String::from(DEFAULT_OUTPUT_FILE),
            resolution: Resolution::from_aspect_ratio(DEFAULT_WIDTH, DEFAULT_ASPECT_RATIO),
            renderer: RendererType::Naive,
            progress: ProgressKind::default(),
            camera: CameraSettings::default(),
            sphere: Sphere::default(),
        }
    }
}

fn positive(name: &str, value: f32) -> anyhow::Result<f32> {
    ensure!(
        value.is_finite() && value > 0.0,
        "{} must be a positive number, got {}",
        name,
        value
    );
    Ok(value)
}

impl TryFrom<TOMLConfig> for Config {
    type Error = anyhow::Error;
    fn try_from(data: TOMLConfig) -> Result<Self, Self::Error> {
        let default = Config::default();

        let resolution_data = data.render_settings.resolution;
        let width = resolution_data.width.unwrap_or(DEFAULT_WIDTH);
        let resolution = match (resolution_data.height, resolution_data.aspect_ratio) {
            (Some(_), Some(_)) => {
                bail!("resolution takes either height or aspect_ratio, not both")
            }
            (Some(height), None) => Resolution { width, height },
            (None, aspect_ratio) => {
                let aspect_ratio = aspect_ratio
                    .map(|e| e.value())
                    .unwrap_or(DEFAULT_ASPECT_RATIO);
                Resolution::from_aspect_ratio(width, positive("aspect_ratio", aspect_ratio)?)
            }
        };

        // threads is filled in by get_settings when missing
        let renderer = match data.render_settings.threads {
            None | Some(0) | Some(1) => RendererType::Naive,
            Some(threads) => RendererType::RowParallel {
                threads: threads as usize,
            },
        };

        let camera_data = data.camera;
        let camera = CameraSettings {
            viewport_height: positive(
                "viewport_height",
                camera_data
                    .viewport_height
                    .unwrap_or(default.camera.viewport_height),
            )?,
            focal_length: positive(
                "focal_length",
                camera_data
                    .focal_length
                    .unwrap_or(default.camera.focal_length),
            )?,
            vertical_sampling: camera_data.vertical_sampling.unwrap_or_default(),
        };

        let sphere_data = data.scene.sphere;
        let sphere = Sphere::new(
            sphere_data.radius.unwrap_or(default.sphere.radius),
            sphere_data
                .center
                .map(Vector3::from)
                .unwrap_or(default.sphere.origin),
        );
        ensure!(
            sphere.radius.is_finite() && sphere.origin.is_finite(),
            "sphere center and radius must be finite"
        );

        Ok(Config {
            output_file: data.output_file.unwrap_or(default.output_file),
            resolution,
            renderer,
            progress: data.render_settings.progress.unwrap_or_default(),
            camera,
            sphere,
        })
    }
}
