use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Args;
use connpass_api::types::{Event, EventID, SeriesID};
use connpass_api::{Client, EventQuery, Order, Query, Time};

use crate::output::{
    print_events_csv, print_events_markdown, print_events_table, print_json, OutputFormat,
};

/// Search filters shared by `events` and `url`.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Event ID (repeatable, OR'd)
    #[arg(long = "event-id")]
    pub event_id: Vec<EventID>,

    /// Series ID (repeatable, OR'd)
    #[arg(long = "series-id")]
    pub series_id: Vec<SeriesID>,

    /// Keyword that must appear (repeatable, AND'd)
    #[arg(long)]
    pub keyword: Vec<String>,

    /// Keyword of which any may appear (repeatable, OR'd)
    #[arg(long = "keyword-or")]
    pub keyword_or: Vec<String>,

    /// Month the event is held in, YYYY-MM (repeatable)
    #[arg(long)]
    pub ym: Vec<Time>,

    /// Day the event is held on, YYYY-MM-DD (repeatable)
    #[arg(long)]
    pub date: Vec<NaiveDate>,

    /// Participant nickname (repeatable, OR'd)
    #[arg(long)]
    pub nickname: Vec<String>,

    /// Owner nickname (repeatable, OR'd)
    #[arg(long)]
    pub owner: Vec<String>,

    /// 1-based offset of the first result
    #[arg(long)]
    pub start: Option<u32>,

    /// Results per page (the API defaults to 10)
    #[arg(long)]
    pub count: Option<u32>,

    /// Sort order: update, start, create
    #[arg(long)]
    pub order: Option<Order>,
}

impl FilterArgs {
    pub fn to_query(&self) -> Result<EventQuery> {
        if let Some(day) = self.ym.iter().find(|t| t.is_day_precision()) {
            bail!(
                "--ym expects a month (YYYY-MM), got {:?}; use --date for a single day",
                day
            );
        }

        let mut query = EventQuery::default()
            .with_event_ids(&self.event_id)
            .with_series_ids(&self.series_id)
            .with_keywords(&self.keyword)
            .with_keywords_or(&self.keyword_or)
            .with_times(&self.ym)
            .with_nicknames(&self.nickname)
            .with_owner_nicknames(&self.owner);
        for date in &self.date {
            query = query.with_time(Time::from(*date));
        }
        if let Some(start) = self.start {
            query = query.with_start(start);
        }
        if let Some(count) = self.count {
            query = query.with_count(count);
        }
        if let Some(order) = self.order {
            query = query.with_order(order);
        }
        Ok(query)
    }
}

#[derive(Args, Debug)]
pub struct EventsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Keep fetching pages until every matching event has been read
    #[arg(long)]
    pub all: bool,

    /// Stop after this many pages when --all is set
    #[arg(long, requires = "all")]
    pub max_pages: Option<u32>,
}

pub async fn run(args: &EventsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = args.filter.to_query()?;
    let events = collect_pages(client, &mut query, args.all, args.max_pages).await?;

    match format {
        OutputFormat::Table => print_events_table(&events),
        OutputFormat::Json => print_json(&events),
        OutputFormat::Csv => print_events_csv(&events)?,
        OutputFormat::Markdown => print_events_markdown(&events),
    }

    Ok(())
}

async fn collect_pages(
    client: &Client,
    query: &mut EventQuery,
    all: bool,
    max_pages: Option<u32>,
) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    let mut pages = 0u32;
    loop {
        let resp = client
            .search(query)
            .await
            .with_context(|| format!("event search failed (start={:?})", query.common.start))?;
        pages += 1;

        match resp.end() {
            Some(end) => eprintln!(
                "Showing {}-{} of {} events",
                resp.start, end, resp.available
            ),
            None => eprintln!("No events on this page ({} available)", resp.available),
        }

        let next = resp.next_start();
        events.extend(resp.events);

        let Some(next) = next else { break };
        if !all || max_pages.is_some_and(|max| pages >= max) {
            if all {
                tracing::info!("Stopped after {} pages; next page starts at {}", pages, next);
            }
            break;
        }
        query.get_common().start = Some(next);
    }
    Ok(events)
}
