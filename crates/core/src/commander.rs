use crate::{Card, CardSearch, DeckError, RngState};

const COMMANDER_QUERY: &str = "is:commander f:edh c>1";

pub fn commander_query(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("{COMMANDER_QUERY} {extra}"),
        None => COMMANDER_QUERY.to_string(),
    }
}

/// Picks a random commander of two or more colours. Unlike mainboard
/// lookups, a failing search is an error here: there is nothing to fall
/// back to.
pub fn pick_commander(
    search: &mut dyn CardSearch,
    extra: Option<&str>,
    rng: &mut RngState,
) -> Result<Card, DeckError> {
    let query = commander_query(extra);
    log::debug!("searching for: `{query}`");
    let candidates = search.search(&query)?;
    let commander = rng
        .choose(&candidates)
        .cloned()
        .ok_or(DeckError::NoCommander(query))?;
    log::info!("commander: {}", commander.name);
    Ok(commander)
}
