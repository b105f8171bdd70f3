use chrono::{DateTime, Utc};
use colored::*;
use todoz::api::{CmdMessage, MessageLevel};
use todoz::config::TodozConfig;
use todoz::index::DisplayItem;
use todoz::model::Stats;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const DONE_MARKER: &str = "✓";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_todos(todos: &[DisplayItem]) {
    if todos.is_empty() {
        println!("No todos found.");
        return;
    }

    let now = Utc::now();
    for dt in todos {
        let idx_str = format!("{}. ", dt.index);
        let marker = if dt.item.completed {
            format!("  {} ", DONE_MARKER)
        } else {
            "    ".to_string()
        };

        let fixed_width = marker.width() + idx_str.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title = truncate_to_width(&dt.item.title, available);
        let padding = available.saturating_sub(title.width());

        let title_colored = if dt.item.completed {
            title.dimmed().strikethrough()
        } else {
            title.normal()
        };

        println!(
            "{}{}{}{}  {}",
            marker.green(),
            idx_str.yellow(),
            title_colored,
            " ".repeat(padding),
            format_time_ago(dt.item.updated_at, now).dimmed()
        );
    }
}

pub fn print_stats(stats: &Stats) {
    println!("{:<10}{}", "total", stats.total);
    println!("{:<10}{}", "active", stats.active.to_string().yellow());
    println!("{:<10}{}", "completed", stats.completed.to_string().green());
}

pub fn print_config(config: &TodozConfig) {
    for key in TodozConfig::keys() {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", key, value);
    }
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
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
