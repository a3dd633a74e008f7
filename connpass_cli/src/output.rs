use anyhow::Result;
use connpass_api::types::Event;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct EventRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Place")]
    #[serde(rename = "Place")]
    place: String,
    #[tabled(rename = "Attendees")]
    #[serde(rename = "Attendees")]
    attendees: String,
    #[tabled(rename = "Owner")]
    #[serde(rename = "Owner")]
    owner: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

// -- Row builders --

fn build_event_rows(events: &[Event]) -> Vec<EventRow> {
    events
        .iter()
        .map(|e| EventRow {
            id: e.event_id,
            date: format_start(e),
            title: e.title.clone(),
            place: e.place.clone().unwrap_or_default(),
            attendees: format_attendees(e.accepted, e.limit, e.waiting),
            owner: if e.owner_display_name.is_empty() {
                e.owner_nickname.clone()
            } else {
                e.owner_display_name.clone()
            },
            url: e.event_url.clone(),
        })
        .collect()
}

// -- Table output --

pub fn print_events_table(events: &[Event]) {
    println!("{}", Table::new(build_event_rows(events)));
}

// -- Markdown output --

pub fn print_events_markdown(events: &[Event]) {
    let mut table = Table::new(build_event_rows(events));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_events_csv(events: &[Event]) -> Result<()> {
    write_events_csv(events, std::io::stdout())
}

fn write_events_csv<W: std::io::Write>(events: &[Event], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in build_event_rows(events) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Start time as `YYYY-MM-DD HH:MM` in the event's own offset, or the raw value.
fn format_start(event: &Event) -> String {
    match event.start_time() {
        Some(start) => start.format("%Y-%m-%d %H:%M").to_string(),
        None => event.started_at.clone(),
    }
}

fn format_attendees(accepted: i64, limit: Option<i64>, waiting: i64) -> String {
    let base = match limit {
        Some(limit) => format!("{}/{}", accepted, limit),
        None => accepted.to_string(),
    };
    if waiting > 0 {
        format!("{} (+{} waiting)", base, waiting)
    } else {
        base
    }
}
