use crate::{search_or_empty, Card, CardSearch, Colour, RngState};
use std::collections::HashSet;

const COMMAND_TOWER: &str = "Command Tower";
const ESSENTIAL_BASICS: usize = 8;
const UTILITY_LAND_PICKS: usize = 3;

/// Builds the land base: Command Tower and a handful of basics first, then
/// the dual and utility lands the colour identity allows, trimmed or padded
/// with basics to exactly `land_count`.
pub fn build_lands(
    commander: &Card,
    land_count: usize,
    search: &mut dyn CardSearch,
    rng: &mut RngState,
) -> Vec<Card> {
    let identity = commander.identity_query();
    let colours = commander.colours();

    let mut lands = vec![Card::named(COMMAND_TOWER)];
    lands.extend(basics(&colours, ESSENTIAL_BASICS));

    let mut good = Vec::new();
    if !colours.is_empty() {
        good.extend(search_or_empty(search, &fetchland_query(&colours)));
    }
    good.extend(search_or_empty(search, &format!("is:Shockland id:{identity}")));

    let mut utility = search_or_empty(
        search,
        &format!("f:edh sort:edhrec oracletag:utility-land id:{identity}"),
    );
    for _ in 0..UTILITY_LAND_PICKS {
        let Some(idx) = rng.pick_index(utility.len()) else {
            break;
        };
        good.push(utility.remove(idx));
    }

    for kind in ["Checkland", "Painland", "Scryland"] {
        good.extend(search_or_empty(search, &format!("is:{kind} id:{identity}")));
    }

    lands.extend(dedup_by_name(good));
    lands.truncate(land_count);

    let missing = land_count - lands.len();
    lands.extend(basics(&colours, missing));
    lands
}

fn fetchland_query(colours: &[Colour]) -> String {
    let terms: Vec<String> = colours
        .iter()
        .map(|colour| format!("o:{}", colour.basic_land()))
        .collect();
    format!("is:Fetchland ({})", terms.join(" or "))
}

/// `count` basics, cycling through the colours in order.
fn basics(colours: &[Colour], count: usize) -> Vec<Card> {
    colours
        .iter()
        .cycle()
        .take(count)
        .map(|colour| Card::named(colour.basic_land()))
        .collect()
}

fn dedup_by_name(cards: Vec<Card>) -> Vec<Card> {
    let mut seen = HashSet::new();
    cards
        .into_iter()
        .filter(|card| seen.insert(card.name.clone()))
        .collect()
}
