use crate::models::{text_or_na, value_or_na};
use crate::pipeline::handler::IMAGE_NOT_AVAILABLE;
use crate::pipeline::{MatchReport, Notice, NoticeLevel};
use anyhow::{Context, Result};
use std::fmt::Write;

fn badge(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "ℹ️ ",
        NoticeLevel::Success => "✅",
        NoticeLevel::Warning => "⚠️ ",
        NoticeLevel::Error => "❌",
    }
}

pub fn format_notice(notice: &Notice) -> String {
    format!("{} {}", badge(notice.level), notice.message)
}

/// Transient notices go to stderr so `--json` output stays parseable
pub fn print_notice(notice: &Notice) {
    eprintln!("{}", format_notice(notice));
}

pub fn render_text(report: &MatchReport) -> String {
    let mut out = String::new();

    for notice in &report.notices {
        let _ = writeln!(out, "{}", format_notice(notice));
    }
    if !report.matches.is_empty() {
        out.push('\n');
    }

    for (i, found) in report.matches.iter().enumerate() {
        let car = &found.car;
        let _ = writeln!(out, "{}. {} {}", i + 1, car.make, car.model);
        match &found.image {
            Some(path) => {
                let _ = writeln!(out, "   Image: {}", path.display());
            }
            None => {
                let _ = writeln!(out, "   {}", IMAGE_NOT_AVAILABLE);
            }
        }
        let _ = writeln!(out, "   Year: {}", car.year);
        let _ = writeln!(out, "   Fuel Type: {}", text_or_na(car.fuel_type.as_deref()));
        let _ = writeln!(out, "   Class: {}", text_or_na(car.class.as_deref()));
        let _ = writeln!(out, "   Transmission: {}", text_or_na(car.transmission.as_deref()));
        let _ = writeln!(out, "   Drive: {}", text_or_na(car.drive.as_deref()));
        let _ = writeln!(out, "   Cylinders: {}", value_or_na(car.cylinders.as_ref()));
        let _ = writeln!(out, "   Combined MPG: {}", value_or_na(car.combination_mpg.as_ref()));
        let _ = writeln!(out, "---");
    }

    out
}

pub fn render_json(report: &MatchReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize match report")
}
