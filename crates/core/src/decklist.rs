use crate::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LandLine {
    pub count: usize,
    pub name: String,
}

/// A finished deck reduced to what gets printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Decklist {
    pub commander: String,
    pub mainboard: Vec<String>,
    pub lands: Vec<LandLine>,
}

impl Decklist {
    pub fn new(commander: &Card, mainboard: &[Card], lands: &[Card]) -> Self {
        Self {
            commander: commander.name.clone(),
            mainboard: mainboard.iter().map(|card| card.name.clone()).collect(),
            lands: group_lands(lands),
        }
    }

    pub fn card_count(&self) -> usize {
        1 + self.mainboard.len() + self.lands.iter().map(|line| line.count).sum::<usize>()
    }

    /// Plain text import format: commander in the sideboard, one line per
    /// mainboard card, lands counted.
    pub fn render_text(&self) -> String {
        let mut out = format!("SB: 1 {}\n", self.commander);
        for name in &self.mainboard {
            out.push_str(&format!("1 {name}\n"));
        }
        for line in &self.lands {
            out.push_str(&format!("{} {}\n", line.count, line.name));
        }
        out
    }
}

fn group_lands(lands: &[Card]) -> Vec<LandLine> {
    let mut names: Vec<&str> = lands.iter().map(|card| card.name.as_str()).collect();
    names.sort_unstable();

    let mut lines: Vec<LandLine> = Vec::new();
    for name in names {
        match lines.last_mut() {
            Some(line) if line.name == name => line.count += 1,
            _ => lines.push(LandLine {
                count: 1,
                name: name.to_string(),
            }),
        }
    }
    lines
}
