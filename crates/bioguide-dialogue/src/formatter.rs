//! Pure rendering of knowledge entries into multi-line chat replies.
//!
//! Every function here is deterministic: identical arguments give
//! byte-identical output. Missing entries or empty lists just drop their
//! block, they never fail.

use bioguide_core::FormatLimits;
use bioguide_store::text::{take_items, truncate_chars};
use bioguide_store::{KnowledgeEntry, KnowledgeStore, Sector, Topic};

/// Fixed action items closing every roadmap.
pub const NEXT_STEPS: &[&str] = &[
    "Connect with BIRAC for funding",
    "Validate technology at CSIR labs",
    "Engage regulatory consultants",
    "Explore joint venture opportunities",
];

/// Partnership lists shown in a roadmap. A store with none of these labels
/// (e.g. an ingested report) shows all of its lists instead.
const ROADMAP_PARTNER_LISTS: &[&str] = &["Government", "Research", "Industry"];

const FUNDING_STAGE_PROMPT: &str = "What's your venture stage?\n• Pre-seed\n• Series A\n• Growth Stage";

pub const HELP_MESSAGE: &str = "I can help with:\n- Market data\n- Partnership options\n- Policy frameworks\n- Entry strategies\n\nType 'ready' to open the menu, or ask about a specific subject.";

/// The top-level menu shown after "ready".
pub fn top_menu() -> String {
    let mut out = String::from("Which aspect of India's biomaterials sector interests you?\n");
    for (i, topic) in Topic::ALL.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", i + 1, topic.label()));
        if *topic == Topic::Sector {
            let names: Vec<&str> = Sector::ALL.iter().map(|s| s.label()).collect();
            out.push_str(&format!(" ({})", names.join(", ")));
        }
    }
    out
}

/// The sector drill-down menu, with each sector's headline when the store has one.
pub fn sector_menu(store: &KnowledgeStore) -> String {
    let mut out = String::from("Which biomaterial sector are you targeting?\n");
    for (i, sector) in Sector::ALL.iter().enumerate() {
        let headline = store.sector(*sector).and_then(|e| e.headline.as_deref());
        match headline {
            Some(h) => out.push_str(&format!("\n{}. {} ({})", i + 1, sector.label(), h)),
            None => out.push_str(&format!("\n{}. {}", i + 1, sector.label())),
        }
    }
    out
}

/// Render one top-level topic.
pub fn format_topic(topic: Topic, store: &KnowledgeStore, limits: &FormatLimits) -> String {
    if topic == Topic::Sector {
        return sector_menu(store);
    }
    match store.topic(topic) {
        Some(entry) => with_title(&entry.title.to_uppercase(), entry_blocks(entry, limits)),
        None => with_title(
            &topic.label().to_uppercase(),
            vec!["No details are loaded for this topic yet.".to_string()],
        ),
    }
}

/// Render one sector's opportunities, followed by the funding-stage prompt.
pub fn format_sector(sector: Sector, store: &KnowledgeStore, limits: &FormatLimits) -> String {
    let mut blocks = store
        .sector(sector)
        .map(|entry| entry_blocks(entry, limits))
        .unwrap_or_default();
    blocks.push(FUNDING_STAGE_PROMPT.to_string());
    with_title(
        &format!("{} SECTOR OPPORTUNITIES", sector.label().to_uppercase()),
        blocks,
    )
}

/// Render the roadmap for a sector at a given funding stage.
///
/// Partnership and policy lists are cut to `limits.list_items` entries each.
pub fn format_roadmap(
    sector: Sector,
    funding_stage: &str,
    store: &KnowledgeStore,
    limits: &FormatLimits,
) -> String {
    let stage_label = funding_stage.split_whitespace().collect::<Vec<_>>().join(" ");
    let stage_label = if stage_label.is_empty() {
        "unspecified stage".to_string()
    } else {
        stage_label
    };

    let mut sections: Vec<(&str, String)> = Vec::new();

    if let Some(entry) = store.topic(Topic::Partnership) {
        let mut lines = Vec::new();
        if let Some(text) = &entry.text {
            lines.push(truncate_chars(text, limits.text_chars));
        }
        let lists: Vec<_> = entry.lists.iter().filter(|l| !l.items.is_empty()).collect();
        let preferred: Vec<_> = lists
            .iter()
            .copied()
            .filter(|l| {
                ROADMAP_PARTNER_LISTS
                    .iter()
                    .any(|name| l.label.eq_ignore_ascii_case(name))
            })
            .collect();
        let shown = if preferred.is_empty() { lists } else { preferred };
        for list in shown {
            lines.push(format!("{}:", list.label));
            lines.extend(bullets(take_items(&list.items, limits.list_items)));
        }
        if !lines.is_empty() {
            sections.push(("ESSENTIAL PARTNERSHIPS", lines.join("\n")));
        }
    }

    if let Some(entry) = store.topic(Topic::Policy) {
        let body = match entry.lists.iter().find(|l| !l.items.is_empty()) {
            Some(list) => bullets(take_items(&list.items, limits.list_items)).join("\n"),
            None => entry
                .text
                .as_deref()
                .map(|t| truncate_chars(t, limits.text_chars))
                .unwrap_or_default(),
        };
        if !body.is_empty() {
            sections.push(("POLICY SUPPORT", body));
        }
    }

    let steps: Vec<String> = NEXT_STEPS.iter().map(|s| s.to_string()).collect();
    sections.push(("NEXT STEPS", bullets(&steps).join("\n")));

    let blocks = sections
        .into_iter()
        .enumerate()
        .map(|(i, (heading, body))| format!("{}. {}:\n{}", i + 1, heading, body))
        .collect();

    with_title(
        &format!(
            "STRATEGIC ROADMAP FOR {} ({})",
            sector.label().to_uppercase(),
            stage_label
        ),
        blocks,
    )
}

/// Facts, free text and one block per populated list, in that order.
fn entry_blocks(entry: &KnowledgeEntry, limits: &FormatLimits) -> Vec<String> {
    let mut blocks = Vec::new();

    if !entry.facts.is_empty() {
        let lines: Vec<String> = entry
            .facts
            .iter()
            .map(|f| format!("{}: {}", f.label, f.value))
            .collect();
        blocks.push(lines.join("\n"));
    }

    if let Some(text) = entry.text.as_deref().filter(|t| !t.trim().is_empty()) {
        blocks.push(truncate_chars(text.trim(), limits.text_chars));
    }

    for list in entry.lists.iter().filter(|l| !l.items.is_empty()) {
        let mut lines = vec![format!("{}:", list.label)];
        lines.extend(bullets(&list.items));
        blocks.push(lines.join("\n"));
    }

    blocks
}

fn bullets(items: &[String]) -> Vec<String> {
    items.iter().map(|item| format!("- {}", item)).collect()
}

fn with_title(title: &str, blocks: Vec<String>) -> String {
    if blocks.is_empty() {
        format!("{}:", title)
    } else {
        format!("{}:\n\n{}", title, blocks.join("\n\n"))
    }
}
