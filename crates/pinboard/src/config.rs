//! Configuration types for Pinboard board rendering.
//!
//! Board parameters are plain numbers whose defaults reproduce the stock
//! boards exactly. All types implement [`serde::Deserialize`] with
//! `#[serde(default)]`, so a configuration file only needs to name the
//! values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining both boards and the style.
//! - [`BreadboardConfig`] - Pitch, hole size, gaps and counts of the breadboard.
//! - [`GpioBoardConfig`] - Pitch, pin size and board dimensions of the GPIO board.
//! - [`StyleConfig`] - Optional overrides of the hole palette.
//!
//! # Example
//!
//! ```
//! # use pinboard::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.breadboard().main_rows(), 65);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use pinboard_core::{color::Color, geometry::Size};

use crate::render::{HoleColors, Palette};

/// Highest number of main-grid columns that still map to a single letter.
const MAX_COLUMN_LETTERS: u32 = 26;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    breadboard: BreadboardConfig,

    #[serde(default)]
    gpio: GpioBoardConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its three sections.
    pub fn new(breadboard: BreadboardConfig, gpio: GpioBoardConfig, style: StyleConfig) -> Self {
        Self {
            breadboard,
            gpio,
            style,
        }
    }

    /// Returns the breadboard parameters.
    pub fn breadboard(&self) -> &BreadboardConfig {
        &self.breadboard
    }

    /// Returns the GPIO board parameters.
    pub fn gpio(&self) -> &GpioBoardConfig {
        &self.gpio
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks both board configurations.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending parameter.
    pub fn validate(&self) -> Result<(), String> {
        self.breadboard
            .validate()
            .map_err(|err| format!("breadboard: {err}"))?;
        self.gpio.validate().map_err(|err| format!("gpio: {err}"))
    }
}

/// Breadboard geometry.
///
/// Horizontal layout, left to right:
///
/// ```text
/// margin | power L | gap | bank a-e | divider | bank f-j | gap | power R | margin
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BreadboardConfig {
    /// Distance between hole centres.
    pitch: f32,
    /// Side length of a square hole.
    hole_size: f32,
    gap_power_to_main: f32,
    /// Gap between the two banks of the main grid.
    gap_center_divider: f32,
    main_rows: u32,
    columns_per_bank: u32,
    power_segments: u32,
    holes_per_segment: u32,
    /// Left and right outer margin; also the x of the left power rail.
    margin: f32,
    /// y of the first main-grid row.
    start_y: f32,
    /// Extra canvas height added below `main_rows * pitch`.
    vertical_padding: f32,
}

impl Default for BreadboardConfig {
    fn default() -> Self {
        Self {
            pitch: 20.0,
            hole_size: 6.0,
            gap_power_to_main: 40.0,
            gap_center_divider: 30.0,
            main_rows: 65,
            columns_per_bank: 5,
            power_segments: 10,
            holes_per_segment: 5,
            margin: 40.0,
            start_y: 40.0,
            vertical_padding: 60.0,
        }
    }
}

impl BreadboardConfig {
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn hole_size(&self) -> f32 {
        self.hole_size
    }

    pub fn gap_power_to_main(&self) -> f32 {
        self.gap_power_to_main
    }

    pub fn gap_center_divider(&self) -> f32 {
        self.gap_center_divider
    }

    pub fn main_rows(&self) -> u32 {
        self.main_rows
    }

    pub fn columns_per_bank(&self) -> u32 {
        self.columns_per_bank
    }

    pub fn power_segments(&self) -> u32 {
        self.power_segments
    }

    pub fn holes_per_segment(&self) -> u32 {
        self.holes_per_segment
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    /// Sets the number of main-grid rows (builder style).
    pub fn with_main_rows(mut self, rows: u32) -> Self {
        self.main_rows = rows;
        self
    }

    /// Sets the pitch (builder style).
    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }

    /// Sets the power segment shape (builder style).
    pub fn with_power_segments(mut self, segments: u32, holes_per_segment: u32) -> Self {
        self.power_segments = segments;
        self.holes_per_segment = holes_per_segment;
        self
    }

    /// Sets the number of columns in each bank (builder style).
    pub fn with_columns_per_bank(mut self, columns: u32) -> Self {
        self.columns_per_bank = columns;
        self
    }

    /// Width of one power rail: two polarity lines.
    pub fn power_rail_width(&self) -> f32 {
        self.pitch * 2.0
    }

    pub fn bank_width(&self) -> f32 {
        self.pitch * self.columns_per_bank as f32
    }

    pub fn start_x_power_left(&self) -> f32 {
        self.margin
    }

    pub fn start_x_bank_left(&self) -> f32 {
        self.start_x_power_left() + self.power_rail_width() + self.gap_power_to_main
    }

    pub fn start_x_bank_right(&self) -> f32 {
        self.start_x_bank_left() + self.bank_width() + self.gap_center_divider
    }

    pub fn start_x_power_right(&self) -> f32 {
        self.start_x_bank_right() + self.bank_width() + self.gap_power_to_main
    }

    /// Vertical distance between the starts of two consecutive power segments.
    ///
    /// Segments are spread over the full grid height regardless of
    /// `holes_per_segment`; a large hole count with few segments overlaps
    /// the next segment.
    pub fn segment_spacing(&self) -> f32 {
        (self.main_rows as f32 * self.pitch) / self.power_segments as f32
    }

    /// Overall canvas size.
    pub fn canvas_size(&self) -> Size {
        Size::new(
            self.start_x_power_right() + self.power_rail_width() + self.margin,
            self.main_rows as f32 * self.pitch + self.vertical_padding,
        )
    }

    /// Checks that the parameters describe a drawable board.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending parameter.
    pub fn validate(&self) -> Result<(), String> {
        positive("pitch", self.pitch)?;
        positive("hole_size", self.hole_size)?;
        non_negative("gap_power_to_main", self.gap_power_to_main)?;
        non_negative("gap_center_divider", self.gap_center_divider)?;
        non_negative("margin", self.margin)?;
        non_negative("start_y", self.start_y)?;
        non_negative("vertical_padding", self.vertical_padding)?;
        at_least_one("main_rows", self.main_rows)?;
        at_least_one("columns_per_bank", self.columns_per_bank)?;
        at_least_one("power_segments", self.power_segments)?;
        at_least_one("holes_per_segment", self.holes_per_segment)?;

        if self.columns_per_bank > MAX_COLUMN_LETTERS / 2 {
            return Err(format!(
                "columns_per_bank must be at most {} so every column gets a letter, got {}",
                MAX_COLUMN_LETTERS / 2,
                self.columns_per_bank
            ));
        }

        Ok(())
    }
}

/// GPIO extension board geometry.
///
/// The header sections keep fixed origins on the board; these parameters
/// control pin spacing and the outer board.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GpioBoardConfig {
    /// Distance between header rows and between the two header columns.
    pitch: f32,
    /// Diameter of a round pin.
    pin_size: f32,
    width: f32,
    height: f32,
    corner_radius: f32,
    /// Horizontal distance between the four pins of a POWER row.
    power_pin_spacing: f32,
    /// Row step factor of the dense DIGITAL and I2C headers.
    dense_row_factor: f32,
    /// Minimum horizontal gap between the POWER section and the DC jack.
    dc_jack_gap: f32,
}

impl Default for GpioBoardConfig {
    fn default() -> Self {
        Self {
            pitch: 25.0,
            pin_size: 8.0,
            width: 450.0,
            height: 920.0,
            corner_radius: 8.0,
            power_pin_spacing: 12.0,
            dense_row_factor: 0.8,
            dc_jack_gap: 30.0,
        }
    }
}

impl GpioBoardConfig {
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn pin_size(&self) -> f32 {
        self.pin_size
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn power_pin_spacing(&self) -> f32 {
        self.power_pin_spacing
    }

    pub fn dense_row_factor(&self) -> f32 {
        self.dense_row_factor
    }

    pub fn dc_jack_gap(&self) -> f32 {
        self.dc_jack_gap
    }

    /// Sets the pitch (builder style).
    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }

    /// Overall canvas size.
    pub fn canvas_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Checks that the parameters describe a drawable board.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending parameter.
    pub fn validate(&self) -> Result<(), String> {
        positive("pitch", self.pitch)?;
        positive("pin_size", self.pin_size)?;
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("power_pin_spacing", self.power_pin_spacing)?;
        positive("dense_row_factor", self.dense_row_factor)?;
        non_negative("corner_radius", self.corner_radius)?;
        non_negative("dc_jack_gap", self.dc_jack_gap)
    }
}

/// Visual styling overrides.
///
/// Each field replaces one color of the default hole [`Palette`]. Colors are
/// CSS color strings.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Base color of every breadboard hole.
    breadboard_hole: Option<Color>,
    /// Highlight color of a hovered breadboard hole.
    breadboard_hover: Option<Color>,
    /// Base color of every GPIO header pin.
    gpio_pin: Option<Color>,
    /// Highlight color of hovered 3.3V/5V/VIN pins.
    supply_hover: Option<Color>,
    /// Highlight color of all other hovered header pins.
    signal_hover: Option<Color>,
}

impl StyleConfig {
    /// Builds the hole palette, applying any configured overrides.
    pub fn palette(&self) -> Palette {
        let defaults = Palette::default();

        let breadboard = |colors: HoleColors| {
            HoleColors::new(
                self.breadboard_hole.unwrap_or(colors.base()),
                self.breadboard_hover.unwrap_or(colors.hover()),
            )
        };
        let gpio = |colors: HoleColors, hover: Option<Color>| {
            HoleColors::new(
                self.gpio_pin.unwrap_or(colors.base()),
                hover.unwrap_or(colors.hover()),
            )
        };

        Palette::new(
            breadboard(defaults.main_grid()),
            breadboard(defaults.power_negative()),
            breadboard(defaults.power_positive()),
            gpio(defaults.supply_pin(), self.supply_hover),
            gpio(defaults.ground_pin(), self.signal_hover),
            gpio(defaults.signal_pin(), self.signal_hover),
        )
    }
}

fn positive(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{name} must be a positive number, got {value}"))
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{name} must not be negative, got {value}"))
    }
}

fn at_least_one(name: &str, value: u32) -> Result<(), String> {
    if value >= 1 {
        Ok(())
    } else {
        Err(format!("{name} must be at least 1"))
    }
}
