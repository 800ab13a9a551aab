use anyhow::{Context, Result};
use rasw_core::{
    Arm, DEFAULT_FRAMES, DEFAULT_HOLD_FRAMES, ElbowBranch, IkOptions, Pose, ShoulderBias,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Arm geometry and solver settings for the `rasw` tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Arm geometry
    #[serde(default)]
    pub arm: ArmConfig,

    /// Inverse kinematics settings
    #[serde(default)]
    pub ik: IkConfig,

    /// Animation frame settings
    #[serde(default)]
    pub animation: AnimationConfig,
}

/// Arm geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmConfig {
    /// Link lengths, base link first
    #[serde(default = "default_links")]
    pub links: Vec<f64>,

    /// Rest pose in degrees. All zeros when omitted.
    #[serde(default)]
    pub rest: Option<Vec<f64>>,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            links: default_links(),
            rest: None,
        }
    }
}

/// Inverse kinematics settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IkConfig {
    /// Elbow branch for 2-link arms
    #[serde(default)]
    pub branch: ElbowBranch,

    /// Weight on the target bearing for the first joint of 3-link arms
    #[serde(default = "default_bias_weight")]
    pub bias_weight: f64,

    /// Offset added to the first joint of 3-link arms, in degrees
    #[serde(default = "default_bias_offset_deg")]
    pub bias_offset_deg: f64,
}

impl Default for IkConfig {
    fn default() -> Self {
        Self {
            branch: ElbowBranch::default(),
            bias_weight: default_bias_weight(),
            bias_offset_deg: default_bias_offset_deg(),
        }
    }
}

/// Animation frame settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Frames spent moving from rest to target
    #[serde(default = "default_frames")]
    pub frames: usize,

    /// Frames spent holding the target afterwards
    #[serde(default = "default_hold")]
    pub hold: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            hold: default_hold(),
        }
    }
}

fn default_links() -> Vec<f64> {
    vec![160.0, 160.0, 160.0]
}

fn default_bias_weight() -> f64 {
    1.0
}

fn default_bias_offset_deg() -> f64 {
    10.0
}

fn default_frames() -> usize {
    DEFAULT_FRAMES
}

fn default_hold() -> usize {
    DEFAULT_HOLD_FRAMES
}

impl Config {
    /// Load configuration from a file, auto-detecting TOML or JSON format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            // TOML first, JSON as a fallback
            _ => Self::from_toml(&content).or_else(|_| Self::from_json(&content)),
        }
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config as TOML")
    }

    /// Parse configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("failed to parse config as JSON")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let arm = self.arm()?;

        if let Some(rest) = &self.arm.rest {
            if rest.len() != arm.len() {
                anyhow::bail!(
                    "arm.rest has {} angles but the arm has {} links",
                    rest.len(),
                    arm.len()
                );
            }
            if rest.iter().any(|a| !a.is_finite()) {
                anyhow::bail!("arm.rest angles must be finite");
            }
        }

        if !self.ik.bias_weight.is_finite() {
            anyhow::bail!("ik.bias_weight must be finite");
        }
        if !self.ik.bias_offset_deg.is_finite() {
            anyhow::bail!("ik.bias_offset_deg must be finite");
        }

        Ok(())
    }

    /// The configured arm
    pub fn arm(&self) -> Result<Arm> {
        Arm::new(self.arm.links.clone()).context("invalid arm.links")
    }

    /// Rest pose in radians
    pub fn rest_pose(&self) -> Pose {
        match &self.arm.rest {
            Some(rest) => Pose::from_degrees(rest),
            None => Pose::zeros(self.arm.links.len()),
        }
    }

    pub fn ik_options(&self) -> IkOptions {
        IkOptions {
            branch: self.ik.branch,
            bias: ShoulderBias::from_degrees(self.ik.bias_weight, self.ik.bias_offset_deg),
        }
    }
}
