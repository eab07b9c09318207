#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;

/// Render an aligned table of string rows.
#[must_use]
pub fn render_rows(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&clip(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let clipped = clip(value, *width);
                let numeric = looks_numeric(&clipped);
                let padded = format_cell(&clipped, *width, numeric);
                if options.color {
                    highlight(&clipped, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

/// Shorten to `width` display characters, marking the cut with `…`.
fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Dim placeholder values, tint droid crews.
fn highlight(plain: &str, padded: String) -> String {
    let code = match plain {
        "Unknown" | "-" => Some("2"),
        "Droid-operated" => Some("36"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_are_aligned() {
        let rows = vec![
            vec!["2".to_string(), "CR90 corvette".to_string()],
            vec!["10".to_string(), "Millennium Falcon".to_string()],
        ];
        let table = render_rows(&["uid", "name"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].find("CR90"), lines[3].find("Millennium"));
        assert!(lines[2].starts_with("     2"), "numbers are right-aligned");
    }

    #[test]
    fn narrow_terminal_clips_widest_column() {
        let rows = vec![vec![
            "9".to_string(),
            "Sentinel-class landing craft with a long name".to_string(),
        ]];
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let table = render_rows(&["uid", "name"], &rows, options);

        for line in table.lines() {
            assert!(line.chars().count() <= 40, "{line:?} is too wide");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_rows(&["a", "b"], &[vec!["x".to_string()]], PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.trim_end().ends_with('-')));
    }

    #[test]
    fn color_wraps_unknown_values() {
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_rows(&["crew"], &[vec!["Unknown".to_string()]], options);
        assert!(table.contains("\u{1b}[2m"));
    }
}
