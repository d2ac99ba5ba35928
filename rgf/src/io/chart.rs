use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail};
use relief_rs::entities::LoadPlan;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Group, Line, Path, Rectangle, Text, Title};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct ChartOptions {
    #[serde(default)]
    pub theme: ChartTheme,
    pub width: f64,
    pub height: f64,
    ///Print the loaded weight above each bar
    #[serde(default)]
    pub bar_labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            theme: ChartTheme::default(),
            width: 800.0,
            height: 500.0,
            bar_labels: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct ChartTheme {
    pub background: Color,
    pub axis: Color,
    pub capacity_line: Color,
    pub bar_fills: [Color; 6],
}

impl Default for ChartTheme {
    fn default() -> Self {
        ChartTheme::EARTH_TONES
    }
}

impl ChartTheme {
    pub const EARTH_TONES: ChartTheme = ChartTheme {
        background: Color(0xFF, 0xFF, 0xFF),
        axis: Color(0x2D, 0x2D, 0x2D),
        capacity_line: Color(0xCC, 0x00, 0x00),
        bar_fills: [
            Color(0xCC, 0x82, 0x4A),
            Color(0xFF, 0xC8, 0x79),
            Color(0x7A, 0x9E, 0x7E),
            Color(0x2E, 0x86, 0xC1),
            Color(0x8E, 0x5B, 0x3D),
            Color(0xC7, 0xA9, 0x00),
        ],
    };
}

/// Draws a bar chart of the weight loaded per entry, with the capacity of the carrier as a dotted line.
pub fn load_plan_to_svg(plan: &LoadPlan, options: ChartOptions) -> Document {
    let ChartOptions {
        theme,
        width,
        height,
        bar_labels,
    } = options;

    let margin = 0.1 * f64::min(width, height);
    let font_size = 0.035 * f64::min(width, height);
    let (x_axis, y_axis) = (width - 2.0 * margin, height - 2.0 * margin);

    //highest value on the y-axis, leave some headroom above the tallest element
    let y_max = plan
        .entries
        .iter()
        .map(|e| e.weight_loaded)
        .fold(plan.capacity, f64::max)
        .max(f64::MIN_POSITIVE)
        * 1.1;
    let to_y = |weight: f64| margin + y_axis * (1.0 - weight / y_max);

    let title = Text::new(format!(
        "Weight Loaded vs. Capacity ({:.1} kg) | utility: {:.2} | utilization: {:.1}%",
        plan.capacity,
        plan.total_utility,
        plan.utilization_percent()
    ))
    .set("x", margin)
    .set("y", 0.6 * margin)
    .set("font-size", font_size)
    .set("font-family", "monospace")
    .set("font-weight", "500");

    let axes = Path::new()
        .set("fill", "none")
        .set("stroke", theme.axis.to_string())
        .set("stroke-width", 2)
        .set(
            "d",
            Data::new()
                .move_to::<(f32, f32)>((margin as f32, margin as f32))
                .line_to::<(f32, f32)>((margin as f32, (margin + y_axis) as f32))
                .line_to::<(f32, f32)>(((margin + x_axis) as f32, (margin + y_axis) as f32)),
        );

    let bars = {
        let mut bars = Group::new().set("id", "bars");
        let n_bars = plan.entries.len().max(1) as f64;
        let slot = x_axis / n_bars;
        for (i, entry) in plan.entries.iter().enumerate() {
            let color = theme.bar_fills[i % theme.bar_fills.len()];
            let x = margin + slot * (i as f64 + 0.15);
            let y = to_y(entry.weight_loaded);
            let bar = Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", 0.7 * slot)
                .set("height", margin + y_axis - y)
                .set("fill", color.to_string())
                .set("stroke", change_brightness(color, 0.5).to_string())
                .add(Title::new(format!(
                    "{}: {:.2} kg, utility {:.2}, {:.1}% loaded",
                    entry.name,
                    entry.weight_loaded,
                    entry.utility_obtained,
                    entry.fraction_loaded_percent
                )));
            let name_label = Text::new(entry.name.clone())
                .set("x", x + 0.35 * slot)
                .set("y", margin + y_axis + 1.2 * font_size)
                .set("font-size", font_size)
                .set("font-family", "monospace")
                .set("text-anchor", "middle");
            bars = bars.add(bar).add(name_label);
            if bar_labels {
                let weight_label = Text::new(format!("{:.1} kg", entry.weight_loaded))
                    .set("x", x + 0.35 * slot)
                    .set("y", y - 0.3 * font_size)
                    .set("font-size", 0.8 * font_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle");
                bars = bars.add(weight_label);
            }
        }
        bars
    };

    let capacity_line = {
        let y = to_y(plan.capacity.max(0.0));
        Group::new()
            .set("id", "capacity")
            .add(
                Line::new()
                    .set("x1", margin)
                    .set("y1", y)
                    .set("x2", margin + x_axis)
                    .set("y2", y)
                    .set("stroke", theme.capacity_line.to_string())
                    .set("stroke-width", 2)
                    .set("stroke-dasharray", "2 6")
                    .set("stroke-linecap", "round"),
            )
            .add(
                Text::new("Capacity")
                    .set("x", margin + 0.3 * font_size)
                    .set("y", y - 0.3 * font_size)
                    .set("font-size", 0.8 * font_size)
                    .set("font-family", "monospace")
                    .set("fill", theme.capacity_line.to_string()),
            )
    };

    Document::new()
        .set("viewBox", (0, 0, width, height))
        .add(
            Rectangle::new()
                .set("width", width)
                .set("height", height)
                .set("fill", theme.background.to_string()),
        )
        .add(axes)
        .add(bars)
        .add(capacity_line)
        .add(title)
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("invalid color: {s:?}, expected #RRGGBB");
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}
