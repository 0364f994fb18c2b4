use ratib_lib::quran::Ayah;
use ratib_lib::schedule::{calendar, DailyAssignment, Reading, Slot};

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in `color` when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

fn slot_color(slot: Slot) -> &'static str {
    match slot {
        Slot::Morning => Color::YELLOW,
        Slot::Evening => Color::BLUE,
    }
}

/// One line per slot, e.g. "ورد الصباح: الحزب 12"
pub fn render_slot(assignment: &DailyAssignment, slot: Slot, use_color: bool) -> String {
    let reading = assignment.reading(slot);
    let label = match reading {
        Reading::Special(_) => paint(&reading.label(), Color::GREEN, use_color),
        Reading::Hizb { .. } => reading.label(),
    };
    format!("{}: {}", paint(slot.title(), slot_color(slot), use_color), label)
}

/// Date heading followed by both slots
pub fn render_assignment(assignment: &DailyAssignment, use_color: bool) -> String {
    let mut lines = Vec::new();
    let heading = format!(
        "{} ({})",
        calendar::format_date(assignment.date),
        assignment.date
    );
    lines.push(paint(&heading, Color::BOLD, use_color));
    for slot in Slot::ALL {
        lines.push(format!("  {}", render_slot(assignment, slot, use_color)));
    }
    lines.join("\n")
}

/// Render ayahs as running text with "﴿n﴾" markers, starting a new
/// paragraph at the first ayah of each surah
pub fn render_ayahs(ayahs: &[Ayah], use_color: bool) -> String {
    let mut lines = Vec::new();

    for paragraph in paragraphs(ayahs) {
        if let Some(name) = paragraph.heading {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(paint(&name, Color::BOLD, use_color));
        }

        let text = paragraph
            .ayahs
            .iter()
            .map(|ayah| {
                format!(
                    "{} {}",
                    ayah.text.trim(),
                    paint(&ayah_marker(ayah), Color::GRAY, use_color)
                )
            })
            .collect::<Vec<_>>()
            .join(" ");

        // Wrap on the uncolored text so escape codes do not count as width
        if use_color {
            lines.push(text);
        } else {
            lines.extend(wrap_lines(&text, "", 80));
        }
    }

    lines.join("\n")
}

/// Render ayahs to plain lines wrapped at `width` (for TUI use - no ANSI codes)
#[cfg_attr(not(feature = "tui"), allow(dead_code))]
pub fn render_ayahs_plain(ayahs: &[Ayah], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in paragraphs(ayahs) {
        if let Some(name) = paragraph.heading {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("# {}", name));
        }
        let text = paragraph
            .ayahs
            .iter()
            .map(|ayah| format!("{} {}", ayah.text.trim(), ayah_marker(ayah)))
            .collect::<Vec<_>>()
            .join(" ");
        lines.extend(wrap_lines(&text, "", width));
    }
    lines
}

fn ayah_marker(ayah: &Ayah) -> String {
    format!("﴿{}﴾", ayah.number_in_surah)
}

struct Paragraph<'a> {
    heading: Option<String>,
    ayahs: Vec<&'a Ayah>,
}

/// Split ayahs at every surah opening
fn paragraphs(ayahs: &[Ayah]) -> Vec<Paragraph<'_>> {
    let mut result: Vec<Paragraph> = Vec::new();

    for ayah in ayahs {
        let opens_surah = ayah.number_in_surah == 1;
        if opens_surah || result.is_empty() {
            let heading = ayah
                .surah
                .as_ref()
                .filter(|_| opens_surah)
                .map(|s| s.name.clone())
                .filter(|name| !name.is_empty());
            result.push(Paragraph {
                heading,
                ayahs: Vec::new(),
            });
        }
        if let Some(current) = result.last_mut() {
            current.ayahs.push(ayah);
        }
    }

    result
}

/// Simple word-wrapping for terminal output, measured in characters
fn wrap_lines(text: &str, prefix: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let effective_width = max_width.saturating_sub(prefix.chars().count()).max(1);

    for line in text.lines() {
        if line.chars().count() <= effective_width {
            lines.push(format!("{}{}", prefix, line));
        } else {
            // Simple word wrap
            let mut current_line = String::new();
            let mut current_width = 0;
            for word in line.split_whitespace() {
                let word_width = word.chars().count();
                if current_line.is_empty() {
                    current_line = word.to_string();
                    current_width = word_width;
                } else if current_width + 1 + word_width <= effective_width {
                    current_line.push(' ');
                    current_line.push_str(word);
                    current_width += 1 + word_width;
                } else {
                    lines.push(format!("{}{}", prefix, current_line));
                    current_line = word.to_string();
                    current_width = word_width;
                }
            }
            if !current_line.is_empty() {
                lines.push(format!("{}{}", prefix, current_line));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ratib_lib::quran::SurahRef;
    use ratib_lib::schedule::compute;

    fn ayah(number_in_surah: u32, text: &str, surah: Option<(u16, &str)>) -> Ayah {
        Ayah {
            number: number_in_surah,
            text: text.to_string(),
            number_in_surah,
            surah: surah.map(|(number, name)| SurahRef {
                number,
                name: name.to_string(),
            }),
        }
    }

    #[test]
    fn test_render_assignment_plain() {
        let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let assignment = compute(friday, friday, 7).unwrap();
        let rendered = render_assignment(&assignment, false);

        assert_eq!(
            rendered,
            "الجمعة، 5 يناير (2024-01-05)\n  ورد الصباح: يس، الواقعة، تبارك\n  ورد المساء: الحزب 7"
        );
    }

    #[test]
    fn test_paragraphs_split_on_surah_start() {
        let ayahs = vec![
            ayah(1, "a", Some((36, "يس"))),
            ayah(2, "b", Some((36, "يس"))),
            ayah(1, "c", Some((56, "الواقعة"))),
        ];
        let lines = render_ayahs_plain(&ayahs, 80);
        assert_eq!(lines, vec!["# يس", "a ﴿1﴾ b ﴿2﴾", "", "# الواقعة", "c ﴿1﴾"]);
    }

    #[test]
    fn test_hizb_starting_mid_surah_has_no_heading() {
        let ayahs = vec![ayah(142, "x", Some((2, "البقرة"))), ayah(143, "y", None)];
        assert_eq!(render_ayahs(&ayahs, false), "x ﴿142﴾ y ﴿143﴾");
    }

    #[test]
    fn test_wrap_counts_characters() {
        let lines = wrap_lines("بسم الله الرحمن الرحيم", "", 10);
        assert_eq!(lines, vec!["بسم الله", "الرحمن", "الرحيم"]);
        assert!(wrap_lines("", "", 10).is_empty());
    }
}
