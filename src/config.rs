//! Runtime configuration, loadable from TOML.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Missing values fall back to the `vanilla` preset.
//!
//! ```toml
//! [spring]
//! stiffness = 0.05
//! damping = 0.8
//!
//! [layout]
//! endpoint_margin = 120.0
//! resize = "reflow"
//!
//! [input]
//! mode = "drag"
//!
//! [style]
//! curve_color = "#ff00aa"
//! outline_color = "#000000"
//! ```

use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;
use ggez::graphics::Color;
use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use crate::spring::{Spring, DEFAULT_DAMPING, DEFAULT_STIFFNESS};

pub const DEFAULT_CONFIG_FILE: &str = "bezier_rope.toml";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    Vanilla,
    Component,
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vanilla" => Ok(Preset::Vanilla),
            "component" => Ok(Preset::Component),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

/// How pointer movement is turned into spring targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    /// The first handle chases the pointer, the second its mirror image.
    Follow,
    /// A handle is grabbed with the left button and chases the pointer until released.
    Drag,
}

impl InputMode {
    pub fn toggled(self) -> InputMode {
        match self {
            InputMode::Follow => InputMode::Drag,
            InputMode::Drag => InputMode::Follow,
        }
    }
}

impl Display for InputMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            InputMode::Follow => "follow",
            InputMode::Drag => "drag",
        })
    }
}

/// What happens to the control points when the window changes size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizePolicy {
    /// Endpoints stay where the initial window size put them.
    KeepEndpoints,
    /// Endpoints are re-derived from the new size; handles are rescaled.
    Reflow,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub u32);

impl HexColor {
    pub const fn new(rgb: u32) -> Self {
        HexColor(rgb & 0xff_ffff)
    }
}

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(HexColor)
            .map_err(|_| ConfigError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> String {
        format!("#{:06x}", color.0)
    }
}

impl From<HexColor> for Color {
    fn from(color: HexColor) -> Color {
        let [_, r, g, b] = color.0.to_be_bytes();
        Color::from_rgb(r, g, b)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self { stiffness: DEFAULT_STIFFNESS, damping: DEFAULT_DAMPING }
    }
}

impl SpringConfig {
    pub fn spring(&self) -> Spring {
        Spring::new(self.stiffness, self.damping)
    }

    /// Stiffness at which the per-frame update stops converging: the step
    /// matrix has determinant `d` and trace `1 + d - d*k`, so it needs
    /// `k < 2 (1 + d) / d`.
    pub fn stiffness_limit(&self) -> f32 {
        2.0 * (1.0 + self.damping) / self.damping
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance of the endpoints from the window edges.
    pub endpoint_margin: f32,
    pub resize: ResizePolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { endpoint_margin: 100.0, resize: ResizePolicy::KeepEndpoints }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mode: InputMode,
    pub grab_radius: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mode: InputMode::Follow, grab_radius: 15.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            title: String::from("Bezier Rope"),
            vsync: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: HexColor,
    pub curve_color: HexColor,
    pub curve_width: f32,
    pub curve_segments: u32,
    pub tangent_color: HexColor,
    pub tangent_width: f32,
    pub tangent_length: f32,
    pub tangent_segments: u32,
    pub point_radius: f32,
    pub endpoint_color: HexColor,
    pub handle_color: HexColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<HexColor>,
    pub outline_width: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: HexColor::new(0x000000),
            curve_color: HexColor::new(0x00ffaa),
            curve_width: 3.0,
            curve_segments: 100,
            tangent_color: HexColor::new(0xfaf6f7),
            tangent_width: 1.0,
            tangent_length: 160.0,
            tangent_segments: 10,
            point_radius: 6.0,
            endpoint_color: HexColor::new(0xffffff),
            handle_color: HexColor::new(0xffaa00),
            outline_color: None,
            outline_width: 1.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RopeConfig {
    pub spring: SpringConfig,
    pub layout: LayoutConfig,
    pub input: InputConfig,
    pub window: WindowConfig,
    pub style: StyleConfig,
}

impl RopeConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Vanilla => Self::default(),
            Preset::Component => Self {
                spring: SpringConfig { stiffness: 0.1, damping: 0.8 },
                input: InputConfig { mode: InputMode::Drag, ..InputConfig::default() },
                window: WindowConfig { width: 700.0, height: 400.0, ..WindowConfig::default() },
                style: StyleConfig {
                    background: HexColor::new(0xffffff),
                    curve_color: HexColor::new(0x8b4513),
                    curve_width: 6.0,
                    tangent_color: HexColor::new(0x0000ff),
                    tangent_width: 2.0,
                    tangent_length: 20.0,
                    point_radius: 10.0,
                    endpoint_color: HexColor::new(0x888888),
                    handle_color: HexColor::new(0xffffff),
                    outline_color: Some(HexColor::new(0x000000)),
                    ..StyleConfig::default()
                },
                ..Self::default()
            },
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RopeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Config loaded from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let SpringConfig { stiffness, damping } = self.spring;
        if !(damping > 0.0 && damping < 1.0) {
            return Err(ConfigError::InvalidDamping(damping));
        }
        let limit = self.spring.stiffness_limit();
        if !(stiffness > 0.0 && stiffness < limit) {
            return Err(ConfigError::InvalidStiffness { value: stiffness, limit });
        }
        if self.style.curve_segments == 0 {
            return Err(ConfigError::InvalidSegments { name: "curve_segments" });
        }
        if self.style.tangent_segments == 0 {
            return Err(ConfigError::InvalidSegments { name: "tangent_segments" });
        }
        let style = &self.style;
        let lengths = [
            ("endpoint_margin", self.layout.endpoint_margin),
            ("grab_radius", self.input.grab_radius),
            ("curve_width", style.curve_width),
            ("tangent_width", style.tangent_width),
            ("tangent_length", style.tangent_length),
            ("point_radius", style.point_radius),
            ("outline_width", style.outline_width),
        ];
        for (name, value) in lengths {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::InvalidLength { name, value });
            }
        }
        let WindowConfig { width, height, .. } = self.window;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ConfigError::InvalidWindowSize { width, height });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_vanilla_defaults() {
        let config = RopeConfig::from_toml_str("").unwrap();
        assert_eq!(config, RopeConfig::preset(Preset::Vanilla));
        assert_eq!(config.spring.spring(), Spring::new(0.02, 0.85));
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let config = RopeConfig::from_toml_str(
            r##"
            [spring]
            damping = 0.5

            [layout]
            resize = "reflow"

            [input]
            mode = "drag"

            [style]
            curve_color = "#FF0000"
            outline_color = "#010203"
            "##,
        )
        .unwrap();

        assert_eq!(config.spring.stiffness, DEFAULT_STIFFNESS);
        assert_eq!(config.spring.damping, 0.5);
        assert_eq!(config.layout.resize, ResizePolicy::Reflow);
        assert_eq!(config.layout.endpoint_margin, 100.0);
        assert_eq!(config.input.mode, InputMode::Drag);
        assert_eq!(config.style.curve_color, HexColor(0xff0000));
        assert_eq!(config.style.outline_color, Some(HexColor(0x010203)));
        assert_eq!(config.style.curve_segments, 100);
    }

    #[test]
    fn rejects_unstable_damping() {
        for damping in ["0.0", "1.0", "1.5", "-0.2"] {
            let result = RopeConfig::from_toml_str(&format!("[spring]\ndamping = {}", damping));
            assert!(matches!(result, Err(ConfigError::InvalidDamping(_))), "damping {}", damping);
        }
    }

    #[test]
    fn rejects_non_positive_stiffness() {
        let result = RopeConfig::from_toml_str("[spring]\nstiffness = 0.0");
        assert!(matches!(result, Err(ConfigError::InvalidStiffness { .. })));
    }

    #[test]
    fn rejects_stiffness_that_diverges() {
        // limit is about 4.35 at the default damping
        for stiffness in ["5.0", "4.4", "inf", "nan"] {
            let result = RopeConfig::from_toml_str(&format!("[spring]\nstiffness = {}", stiffness));
            assert!(matches!(result, Err(ConfigError::InvalidStiffness { .. })), "stiffness {}", stiffness);
        }
        assert!(RopeConfig::from_toml_str("[spring]\nstiffness = 4.0").is_ok());
    }

    #[test]
    fn stiff_but_accepted_spring_stays_finite() {
        let config = RopeConfig::from_toml_str("[spring]\nstiffness = 4.3").unwrap();
        let spring = config.spring.spring();
        let mut point = crate::spring::MovablePoint::at(crate::vector::Vector::ZERO);
        point.set_target(crate::vector::Vector::new(500.0, -300.0));
        for _ in 0..5000 {
            spring.step(&mut point);
        }
        assert!(point.pos.x.is_finite() && point.pos.y.is_finite());
        assert!(point.is_settled(1.0, 1.0));
    }

    #[test]
    fn rejects_non_finite_or_negative_lengths() {
        let cases = [
            ("[layout]\nendpoint_margin = nan", "endpoint_margin"),
            ("[input]\ngrab_radius = -1.0", "grab_radius"),
            ("[style]\ncurve_width = inf", "curve_width"),
            ("[style]\ntangent_length = nan", "tangent_length"),
            ("[style]\npoint_radius = -6.0", "point_radius"),
            ("[style]\noutline_width = -inf", "outline_width"),
        ];
        for (toml, field) in cases {
            let result = RopeConfig::from_toml_str(toml);
            assert!(
                matches!(result, Err(ConfigError::InvalidLength { name, .. }) if name == field),
                "{}", toml
            );
        }
    }

    #[test]
    fn rejects_non_finite_window() {
        let result = RopeConfig::from_toml_str("[window]\nwidth = inf");
        assert!(matches!(result, Err(ConfigError::InvalidWindowSize { .. })));
    }

    #[test]
    fn rejects_zero_segments() {
        let result = RopeConfig::from_toml_str("[style]\ntangent_segments = 0");
        assert!(matches!(result, Err(ConfigError::InvalidSegments { name: "tangent_segments" })));
    }

    #[test]
    fn rejects_bad_colour_and_unknown_mode() {
        assert!(matches!(
            RopeConfig::from_toml_str("[style]\nbackground = \"#12345\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            RopeConfig::from_toml_str("[input]\nmode = \"hover\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn component_preset_survives_toml() {
        let config = RopeConfig::preset(Preset::Component);
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("outline_color = \"#000000\""));
        assert_eq!(RopeConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn hex_colour_parsing() {
        assert_eq!("#00ffaa".parse::<HexColor>().unwrap(), HexColor(0x00ffaa));
        assert_eq!("8B4513".parse::<HexColor>().unwrap(), HexColor(0x8b4513));
        assert!("#fff".parse::<HexColor>().is_err());
        assert!("#gg0000".parse::<HexColor>().is_err());
        assert_eq!(String::from(HexColor(0xffaa00)), "#ffaa00");
        assert_eq!(Color::from(HexColor(0xff0000)), Color::from_rgb(255, 0, 0));
    }

    #[test]
    fn preset_names() {
        assert_eq!("component".parse::<Preset>().unwrap(), Preset::Component);
        assert!(matches!("fancy".parse::<Preset>(), Err(ConfigError::UnknownPreset(_))));
    }
}
