#![cfg(feature = "std")]

//! Text rendering and input parsing for terminal play.

use std::fmt::Write as _;

use crate::{DataGrid, Orientation, Tile};

/// Largest column count the letter notation can address.
pub const MAX_COLUMNS: usize = 26;

/// Human notation for (`x`, `y`): column letter, then 1-based row.
pub fn coord_to_string(x: usize, y: usize) -> String {
    let col = (b'A' + x as u8) as char;
    format!("{}{}", col, y + 1)
}

/// Parse `B3` style input into (`x`, `y`) on a `columns` × `rows` grid.
pub fn parse_coord(input: &str, columns: usize, rows: usize) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let last_col = (b'A' + columns.min(MAX_COLUMNS) as u8 - 1) as char;
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let x = (col_ch as u8).wrapping_sub(b'A') as usize;
    if x >= columns {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, rows))?;
    if row == 0 || row > rows {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, rows));
    }
    Ok((x, row - 1))
}

/// Parse `B3 p` / `B3 l` into an origin and orientation.
pub fn parse_placement(
    input: &str,
    columns: usize,
    rows: usize,
) -> Result<(usize, usize, Orientation), String> {
    let mut parts = input.split_whitespace();
    let coord = parts.next().ok_or("Empty input")?;
    let (x, y) = parse_coord(coord, columns, rows)?;
    let orientation = match parts.next().map(|s| s.to_ascii_lowercase()).as_deref() {
        Some("p") | Some("portrait") => Orientation::Portrait,
        Some("l") | Some("landscape") => Orientation::Landscape,
        Some(other) => {
            return Err(format!("Unknown orientation '{}' - use p or l", other));
        }
        None => return Err("Missing orientation - add p (portrait) or l (landscape)".to_string()),
    };
    if parts.next().is_some() {
        return Err("Too many values - expected e.g. B3 p".to_string());
    }
    Ok((x, y, orientation))
}

/// Draw a grid. With `reveal`, unshot ship tiles are shown too.
pub fn render_grid(grid: &DataGrid<Tile>, reveal: bool) -> String {
    let mut out = String::new();
    let _ = write!(out, "     ");
    for x in 0..grid.column_count() {
        let _ = write!(out, " {}", (b'A' + x as u8) as char);
    }
    let _ = writeln!(out);
    for y in 0..grid.row_count() {
        let _ = write!(out, "  {:3}", y + 1);
        for x in 0..grid.column_count() {
            let ch = match grid.get(x, y) {
                Some(t) if t.is_shot() && t.is_occupied() => 'X',
                Some(t) if t.is_shot() => 'o',
                Some(t) if reveal && t.is_occupied() => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        let _ = writeln!(out);
    }
    if reveal {
        let _ = writeln!(out, "  Legend: S=Ship  X=Hit  o=Miss  .=Water");
    } else {
        let _ = writeln!(out, "  Legend: X=Hit  o=Miss  .=Unknown");
    }
    out
}
