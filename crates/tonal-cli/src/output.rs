//! Output formatting for the CLI.

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tonal_domain::{Gradient, RangeState, Rgb, Sampler, SAMPLE_COUNT};

/// One classified point, as reported to the user.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    /// The classified point
    pub point: f64,
    /// Sample positions `[p1, p2, p3, p4, p5]`
    pub neighbors: [f64; SAMPLE_COUNT],
    /// State name
    pub state: String,
    /// Integer code in -2..=2
    pub code: i8,
}

impl ClassificationReport {
    /// Classify `point` with `sampler` and capture the details.
    pub fn new(point: f64, sampler: &Sampler) -> Self {
        let state = sampler.classify(point);
        Self {
            point,
            neighbors: sampler.neighbors(point),
            state: state.to_string(),
            code: state.code(),
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format classification results.
    pub fn format_classifications(
        &self,
        reports: &[ClassificationReport],
        sampler: &Sampler,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
            OutputFormat::Quiet => Ok(reports
                .iter()
                .map(|r| r.code.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => Ok(self.format_classifications_table(reports, sampler)),
        }
    }

    fn format_classifications_table(
        &self,
        reports: &[ClassificationReport],
        sampler: &Sampler,
    ) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Point", "p1", "p2", "p4", "p5", "State", "Code"]);

        for report in reports {
            let [p1, p2, _, p4, p5] = report.neighbors;
            builder.push_record([
                format!("{}", report.point),
                format!("{:.4}", p1),
                format!("{:.4}", p2),
                format!("{:.4}", p4),
                format!("{:.4}", p5),
                report.state.clone(),
                format!("{:+}", report.code),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let header = format!(
            "spacing {}, range [{}, {}]",
            sampler.spacing, sampler.range.min, sampler.range.max
        );
        format!("{}\n{}", self.colorize(&header, "cyan"), table)
    }

    /// Format a generated gradient.
    pub fn format_gradient(&self, gradient: &Gradient) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let shades: Vec<serde_json::Value> = gradient
                    .shades
                    .iter()
                    .map(|s| {
                        serde_json::json!({
                            "hex": s.hex,
                            "lab": { "l": s.lab.l, "a": s.lab.a, "b": s.lab.b },
                        })
                    })
                    .collect();
                let value = serde_json::json!({
                    "state": gradient.state.as_str(),
                    "code": gradient.state.code(),
                    "reference_index": gradient.reference_index(),
                    "shades": shades,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(gradient
                .shades
                .iter()
                .map(|s| s.hex.clone())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["#", "Swatch", "Hex", "L*", "a*", "b*", ""]);

                let reference = gradient.reference_index();
                for (i, shade) in gradient.shades.iter().enumerate() {
                    builder.push_record([
                        i.to_string(),
                        self.swatch(&shade.hex),
                        shade.hex.clone(),
                        format!("{:.2}", shade.lab.l),
                        format!("{:.2}", shade.lab.a),
                        format!("{:.2}", shade.lab.b),
                        if i == reference { "ref".to_string() } else { String::new() },
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                let header = format!("lightness state: {} ({:+})", gradient.state, gradient.state.code());
                Ok(format!("{}\n{}", self.colorize(&header, "cyan"), table))
            }
        }
    }

    /// Format a color in all supported models.
    pub fn format_conversion(&self, rgb: &Rgb, state: RangeState) -> Result<String> {
        let hsl = rgb.to_hsl();
        let hsv = rgb.to_hsv();
        let cmyk = rgb.to_cmyk();
        let lab = rgb.to_lab();

        match self.format {
            OutputFormat::Json => {
                let (r, g, b) = rgb.to_rgb255();
                let value = serde_json::json!({
                    "hex": rgb.to_hex(),
                    "rgb": [r, g, b],
                    "hsl": { "h": hsl.h, "s": hsl.s, "l": hsl.l },
                    "hsv": { "h": hsv.h, "s": hsv.s, "v": hsv.v },
                    "cmyk": { "c": cmyk.c, "m": cmyk.m, "y": cmyk.y, "k": cmyk.k },
                    "lab": { "l": lab.l, "a": lab.a, "b": lab.b },
                    "lightness_state": state.as_str(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(rgb.to_hex()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Model", "Value"]);
                builder.push_record(["hex".to_string(), rgb.to_hex()]);
                builder.push_record(["rgb".to_string(), rgb.to_string()]);
                builder.push_record(["hsl".to_string(), hsl.to_string()]);
                builder.push_record(["hsv".to_string(), hsv.to_string()]);
                builder.push_record(["cmyk".to_string(), cmyk.to_string()]);
                builder.push_record(["lab".to_string(), lab.to_string()]);
                builder.push_record([
                    "lightness state".to_string(),
                    format!("{} ({:+})", state, state.code()),
                ]);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(format!("{} {}\n{}", self.swatch(&rgb.to_hex()), rgb.to_hex(), table))
            }
        }
    }

    /// Format the effective configuration.
    pub fn format_config(&self, config: &Config) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            _ => config.to_toml(),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Block of the given color, or an empty cell without color.
    fn swatch(&self, hex: &str) -> String {
        if !self.color_enabled {
            return String::new();
        }
        match Rgb::from_hex(hex) {
            Ok(rgb) => {
                let (r, g, b) = rgb.to_rgb255();
                "    ".on_truecolor(r, g, b).to_string()
            }
            Err(_) => String::new(),
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonal_domain::natural_gradient;

    fn reports() -> Vec<ClassificationReport> {
        let sampler = Sampler::default();
        [-0.5, 0.25, 0.5, 0.75, 1.5]
            .iter()
            .map(|&p| ClassificationReport::new(p, &sampler))
            .collect()
    }

    #[test]
    fn test_report() {
        let report = ClassificationReport::new(0.25, &Sampler::default());
        assert_eq!(report.state, "below");
        assert_eq!(report.code, -1);
        assert_eq!(report.neighbors[2], 0.25);
    }

    #[test]
    fn test_quiet_classifications() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_classifications(&reports(), &Sampler::default())
            .unwrap();
        assert_eq!(output, "-2\n-1\n0\n1\n2");
    }

    #[test]
    fn test_json_classifications() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_classifications(&reports(), &Sampler::default())
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 5);
        assert_eq!(parsed[0]["state"], "far-below");
        assert_eq!(parsed[4]["code"], 2);
    }

    #[test]
    fn test_table_classifications() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_classifications(&reports(), &Sampler::default())
            .unwrap();
        assert!(output.contains("spacing 0.2, range [0, 1]"));
        assert!(output.contains("far-above"));
        assert!(output.contains("+2"));
    }

    #[test]
    fn test_gradient_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let gradient = natural_gradient("#ff0000").unwrap();
        let output = formatter.format_gradient(&gradient).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["state"], "within");
        assert_eq!(parsed["reference_index"], 2);
        assert_eq!(parsed["shades"][2]["hex"], "#ff0000");
    }

    #[test]
    fn test_gradient_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let gradient = natural_gradient("#ffffff").unwrap();
        let output = formatter.format_gradient(&gradient).unwrap();
        assert_eq!(output.lines().count(), 5);
        assert!(output.lines().all(|l| l.starts_with('#')));
    }

    #[test]
    fn test_gradient_table_marks_reference() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let gradient = natural_gradient("#000000").unwrap();
        let output = formatter.format_gradient(&gradient).unwrap();
        assert!(output.contains("far-below"));
        assert!(output.contains("ref"));
    }

    #[test]
    fn test_conversion_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let rgb = Rgb::from_hex("#ff8000").unwrap();
        let output = formatter.format_conversion(&rgb, RangeState::Within).unwrap();
        assert!(output.contains("rgb(255, 128, 0)"));
        assert!(output.contains("hsv(30.1, 100.0%, 100.0%)"));
        assert!(output.contains("cmyk(0.0%, 49.8%, 100.0%, 0.0%)"));
        assert!(output.contains("within (+0)"));
    }

    #[test]
    fn test_conversion_json_black() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let rgb = Rgb::from_hex("#000000").unwrap();
        let output = formatter.format_conversion(&rgb, RangeState::FarBelow).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["hsv"]["v"], 0.0);
        assert_eq!(parsed["cmyk"]["c"], 0.0);
        assert_eq!(parsed["cmyk"]["k"], 1.0);
        assert_eq!(parsed["lightness_state"], "far-below");
    }

    #[test]
    fn test_config_as_toml() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_config(&Config::default()).unwrap();
        assert!(output.contains("[sampler]"));
        assert!(output.contains("spacing = 0.2"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.swatch("#ff0000"), "");
    }
}
