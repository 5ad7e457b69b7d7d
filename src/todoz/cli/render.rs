//! Terminal rendering of the user directory.
//!
//! Everything is built into a `String` so the layout can be tested without a
//! terminal. Widths are measured with `unicode-width` before styling is applied,
//! so escape codes never disturb the column alignment.

use colored::Colorize;
use todoz::directory::{DirectorySession, SortField};
use todoz::model::User;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const EMPTY_MESSAGE: &str = "No users found.";
pub const LOADING_MESSAGE: &str = "Loading users...";

const COLUMN_GAP: &str = "  ";
const NAME_MAX_WIDTH: usize = 20;
const EMAIL_MAX_WIDTH: usize = 36;
const AVATAR_MAX_WIDTH: usize = 60;
const PAGE_WINDOW: u32 = 7;
const GAP_MARKER: &str = "…";

struct Column {
    label: String,
    max_width: usize,
}

pub fn render_directory(session: &DirectorySession, source: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", "Users from".bold(), source));
    if let Some(status) = session.status() {
        out.push_str(&format!("{}\n", format!("HTTP status: {}", status).dimmed()));
    }
    if let Some(error) = session.error() {
        out.push_str(&format!("{}\n", format!("Error: {}", error).red()));
    }
    out.push('\n');

    if session.is_loading() {
        out.push_str(LOADING_MESSAGE);
        out.push('\n');
    } else {
        out.push_str(&render_table(&session.visible_users(), session));
    }

    out.push('\n');
    out.push_str(&render_pagination(session.page(), session.total_pages()));
    out.push('\n');
    out
}

fn header_label(name: &str, field: Option<SortField>, session: &DirectorySession) -> String {
    let options = session.options();
    match field {
        Some(f) if f == options.sort_field => format!("{} {}", name, options.sort_order.marker()),
        _ => name.to_string(),
    }
}

fn render_table(users: &[User], session: &DirectorySession) -> String {
    let columns = [
        Column {
            label: header_label("First Name", Some(SortField::FirstName), session),
            max_width: NAME_MAX_WIDTH,
        },
        Column {
            label: header_label("Last Name", None, session),
            max_width: NAME_MAX_WIDTH,
        },
        Column {
            label: header_label("Email", Some(SortField::Email), session),
            max_width: EMAIL_MAX_WIDTH,
        },
        Column {
            label: header_label("Avatar", None, session),
            max_width: AVATAR_MAX_WIDTH,
        },
    ];

    let rows: Vec<[String; 4]> = users
        .iter()
        .map(|u| {
            [
                u.first_name.clone(),
                u.last_name.clone(),
                u.email.clone(),
                u.avatar.clone(),
            ]
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let widest = rows
                .iter()
                .map(|row| row[i].width())
                .max()
                .unwrap_or(0)
                .min(col.max_width);
            widest.max(col.label.width())
        })
        .collect();

    let mut out = String::new();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(col, width)| pad(&col.label, *width).bold().to_string())
        .collect();
    out.push_str(header.join(COLUMN_GAP).trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join(COLUMN_GAP).dimmed().to_string());
    out.push('\n');

    if rows.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
        return out;
    }

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(&truncate_to_width(cell, *width), *width))
            .collect();
        out.push_str(cells.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }
    out
}

/// `Prev 1 [2] 3 Next`, with the current page highlighted and unavailable
/// directions dimmed. Past `PAGE_WINDOW` pages only a window around the current
/// page is listed, plus the first and last page: `Prev 1 … 4 [5] 6 … 40 Next`.
pub fn render_pagination(page: u32, total_pages: u32) -> String {
    let prev = if page > 1 {
        "Prev".normal()
    } else {
        "Prev".dimmed()
    };
    let next = if page < total_pages {
        "Next".normal()
    } else {
        "Next".dimmed()
    };

    let total_pages = total_pages.max(1);
    let (first, last) = page_window(page, total_pages);

    let mut parts = vec![prev.to_string()];
    if first > 1 {
        parts.push(page_label(1, page));
        if first > 2 {
            parts.push(GAP_MARKER.to_string());
        }
    }
    for n in first..=last {
        parts.push(page_label(n, page));
    }
    if last < total_pages {
        if last < total_pages - 1 {
            parts.push(GAP_MARKER.to_string());
        }
        parts.push(page_label(total_pages, page));
    }
    parts.push(next.to_string());
    parts.join(" ")
}

/// Inclusive range of at most `PAGE_WINDOW` page numbers, centred on `page` where
/// possible and always inside `1..=total_pages`.
fn page_window(page: u32, total_pages: u32) -> (u32, u32) {
    if total_pages <= PAGE_WINDOW {
        return (1, total_pages);
    }
    let half = PAGE_WINDOW / 2;
    let last = page.saturating_add(half).clamp(PAGE_WINDOW, total_pages);
    (last - (PAGE_WINDOW - 1), last)
}

fn page_label(n: u32, page: u32) -> String {
    if n == page {
        format!("[{}]", n).bold().to_string()
    } else {
        n.to_string()
    }
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
