use ratatui::{prelude::*, widgets::*};

use crate::models::Country;

/// Region accent color
pub fn region_color(region: &str) -> Color {
    match region {
        "Africa" => Color::Yellow,
        "Americas" => Color::Green,
        "Asia" => Color::Red,
        "Europe" => Color::Blue,
        "Oceania" => Color::Cyan,
        _ => Color::White,
    }
}

/// Format a population count with thousands separators
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Build the detail card lines for one country
pub fn country_card_lines(country: &Country, is_favorite: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", country.flag, country.name.common),
            Style::default().bold(),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Capital:    ", Style::default().fg(Color::DarkGray)),
            Span::raw(country.capital().unwrap_or("N/A").to_string()),
        ]),
        Line::from(vec![
            Span::styled("Population: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_population(country.population)),
        ]),
        Line::from(vec![
            Span::styled("Region:     ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                country.region.clone(),
                Style::default().fg(region_color(&country.region)),
            ),
        ]),
        Line::raw(""),
    ];

    if is_favorite {
        lines.push(Line::from(Span::styled(
            "❤ Favorited (f to remove)",
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "♡ Press f to favorite",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

/// One row in the country list; selection highlighting is left to the List widget
pub fn country_list_item(country: &Country, is_favorite: bool) -> ListItem<'static> {
    let marker = if is_favorite { " ❤" } else { "" };

    ListItem::new(Line::from(vec![
        Span::raw(format!("{} ", country.flag)),
        Span::raw(country.name.common.clone()),
        Span::styled(marker, Style::default().fg(Color::Red)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountryName;

    fn brazil() -> Country {
        Country {
            name: CountryName {
                common: String::from("Brazil"),
            },
            capital: vec![String::from("Brasília")],
            population: 215353593,
            region: String::from("Americas"),
            flag: String::from("🇧🇷"),
            cca3: String::from("BRA"),
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.clone()).collect()
    }

    #[test]
    fn test_format_population() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(215353593), "215,353,593");
    }

    #[test]
    fn test_card_lines_show_country_fields() {
        let lines = country_card_lines(&brazil(), false);
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert!(text[0].contains("Brazil"));
        assert!(text.iter().any(|l| l.contains("Brasília")));
        assert!(text.iter().any(|l| l.contains("215,353,593")));
        assert!(text.iter().any(|l| l.contains("Americas")));
    }

    #[test]
    fn test_card_reflects_favorite_flag() {
        let favorited = country_card_lines(&brazil(), true);
        assert!(line_text(favorited.last().unwrap()).contains("Favorited"));

        let plain = country_card_lines(&brazil(), false);
        assert!(line_text(plain.last().unwrap()).contains("favorite"));
    }

    #[test]
    fn test_missing_capital_renders_na() {
        let mut country = brazil();
        country.capital.clear();
        let lines = country_card_lines(&country, false);
        assert!(lines.iter().map(line_text).any(|l| l.contains("N/A")));
    }
}
