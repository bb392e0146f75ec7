//! Plain-text rendering of the view models, used by the CLI.

use crate::view::{CardView, DetailView, LIFE_INDEX_HEADING, ListView, ScoreBar};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

pub fn card(card: &CardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", card.favorite_glyph, card.name);
    let _ = writeln!(out, "    Code:       {}", card.codes);
    let _ = writeln!(out, "    Region:     {}", card.region);
    let _ = writeln!(out, "    Capital:    {}", card.capital);
    let _ = write!(out, "    Population: {}", card.population);
    if let Some(url) = &card.flag_url {
        let _ = write!(out, "\n    Flag:       {}", url);
    }
    out
}

/// Status line, then either every card or the placeholder.
pub fn list(view: &ListView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.status);
    let _ = writeln!(out);
    if let Some(placeholder) = view.placeholder {
        let _ = writeln!(out, "{}", placeholder);
        return out;
    }
    for c in &view.cards {
        let _ = writeln!(out, "{}", card(c));
    }
    out
}

/// `[#########-----------]  45%`
pub fn bar(bar: &ScoreBar) -> String {
    let filled = (bar.fraction() * BAR_WIDTH as f32).round() as usize;
    format!(
        "{:<22} [{}{}] {:>3}%",
        bar.label,
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        bar.value
    )
}

pub fn detail(view: &DetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", "=".repeat(view.title.chars().count()));
    if let Some(url) = &view.flag_url {
        let _ = writeln!(out, "Flag:       {}", url);
    }
    let _ = writeln!(out, "Capital:    {}", view.capital);
    let _ = writeln!(out, "Region:     {}", view.region);
    let _ = writeln!(out, "Population: {}", view.population);
    let _ = writeln!(out, "Codes:      {}", view.codes);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", LIFE_INDEX_HEADING);
    for b in &view.bars {
        let _ = writeln!(out, "{}", bar(b));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_proportional() {
        let b = ScoreBar {
            label: "x",
            value: 50,
        };
        let s = bar(&b);
        assert!(s.contains("[##########----------]"));
        assert!(s.ends_with(" 50%"));
    }

    #[test]
    fn card_lists_flag_url_when_present() {
        let mut c = CardView {
            name: "Peru".into(),
            flag_url: Some("https://flagcdn.com/w320/pe.png".into()),
            favorite: false,
            favorite_glyph: "☆",
            codes: "PE (PER)".into(),
            region: "Americas".into(),
            capital: "Lima".into(),
            population: "32,971,846".into(),
        };
        let s = card(&c);
        assert!(s.ends_with("    Flag:       https://flagcdn.com/w320/pe.png"));

        c.flag_url = None;
        assert!(!card(&c).contains("Flag:"));
    }
}
