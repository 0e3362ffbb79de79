use crate::output::is_quiet;
use crate::record::Record;
use crate::ui::{content_preview, theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::DATABASE, text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn info(label: &str, value: &str) {
    if is_quiet() {
        return;
    }
    println!(
        "{} {}: {}",
        Icons::INFO,
        label.style(theme().label.clone()),
        value
    );
}

pub fn dim(text: &str) -> String {
    text.style(theme().label.clone()).to_string()
}

/// Print every field of one record
pub fn record_detail(record: &Record) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::KEY, record.identifier.style(theme().identifier.clone()));
    println!("  {} {}", dim("kind:   "), record.kind.style(theme().kind.clone()));
    let flags = format!("{:#010b} ({})", record.flags, record.flags);
    println!("  {} {}", dim("flags:  "), flags.style(theme().flags.clone()));
    println!("  {} {} bytes", dim("size:   "), record.content.len());
    println!("  {} {}", dim("content:"), content_preview(&record.content, 64));
}
