//! Plain-text tables with fixed columns.

use super::rows::TableRow;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const GAP: &str = "  ";
/// A column is never squeezed below its header or this width.
const MIN_COLUMN: usize = 4;

/// Render `rows` under `R::HEADERS`, fitting `options.max_width` when set.
#[must_use]
pub fn render<R: TableRow>(rows: &[R], options: TableOptions) -> String {
    if rows.is_empty() {
        return String::from("(no rows)");
    }

    let cells: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();
    let widths = column_widths(R::HEADERS, &cells, options.max_width);

    let header = R::HEADERS
        .iter()
        .zip(&widths)
        .map(|(name, width)| pad(&clip(name, *width), *width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(header.chars().count());

    let mut lines = vec![header, divider];
    for row in &cells {
        let line = widths
            .iter()
            .enumerate()
            .map(|(column, width)| {
                let value = row.get(column).map_or("-", String::as_str);
                let cell = pad(&clip(value, *width), *width, R::NUMERIC_COLUMNS.contains(&column));
                if options.color && R::STATUS_COLUMN == Some(column) {
                    colorize_status(&cell)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line);
    }
    lines.join("\n")
}

/// Natural widths, then the widest shrinkable column loses one character at a
/// time until the table fits.
fn column_widths(headers: &[&str], cells: &[Vec<String>], max_width: Option<usize>) -> Vec<usize> {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, name)| {
            cells
                .iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .fold(name.chars().count(), usize::max)
        })
        .collect();

    let Some(max_width) = max_width else {
        return widths;
    };
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    let floor = |column: usize| headers[column].chars().count().max(MIN_COLUMN);

    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = (0..widths.len())
            .filter(|&column| widths[column] > floor(column))
            .max_by_key(|&column| widths[column])
        else {
            break;
        };
        widths[widest] -= 1;
    }
    widths
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Wrap an already padded status cell in its ANSI color.
fn colorize_status(cell: &str) -> String {
    let code = match cell.trim() {
        "open" => "36",
        "in_progress" => "33",
        "completed" => "32",
        _ => return cell.to_string(),
    };
    format!("\u{1b}[{code}m{cell}\u{1b}[0m")
}
