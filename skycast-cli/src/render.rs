use std::fmt::{self, Write};

use skycast_core::ViewModel;

/// Plain-text rendering of a dashboard view.
pub fn render(view: &ViewModel<'_>) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", view.heading)?;
    writeln!(out)?;

    if let Some(current) = &view.current {
        writeln!(
            out,
            "  {}°C  {}  {}",
            current.temperature, current.description, current.icon
        )?;
        writeln!(
            out,
            "  wind {}  gusts {}  humidity {}",
            current.wind, current.gusts, current.humidity
        )?;
        if let (Some(max), Some(min)) = (current.today_max, current.today_min) {
            writeln!(out, "  {}, {max}° {min}°", current.description)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", view.labels.hourly)?;
    for entry in view.hourly.iter() {
        writeln!(
            out,
            "  {}  {:>4}°  {}",
            entry.time, entry.temperature, entry.icon
        )?;
    }
    writeln!(out, "  [{}]", view.labels.toggle)?;
    writeln!(out)?;

    if !view.daily.is_empty() {
        writeln!(out, "{}", view.labels.daily)?;
        let width = view
            .daily
            .iter()
            .map(|d| d.label.chars().count())
            .max()
            .unwrap_or(0);
        for day in &view.daily {
            let pad = width - day.label.chars().count();
            writeln!(
                out,
                "  {}{}  {:>4}° {:>4}°  {}",
                day.label,
                " ".repeat(pad),
                day.max,
                day.min,
                day.icon
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", view.labels.footer)?;
    Ok(out)
}
