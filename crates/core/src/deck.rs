use crate::{
    auto_theme, build_lands, pick_commander, Card, CardSearch, DeckConfig, DeckError, Decklist,
    Mainboard, RngState, TagSource, ThemeSelector,
};

/// Where the run's theme comes from.
#[derive(Debug, Clone)]
pub enum ThemeChoice {
    /// A caller supplied theme query.
    Explicit(String),
    /// One of a list of preset queries, picked at random.
    Preset(ThemeSelector),
    /// Derived from the commander's keywords, tags and subtypes.
    Auto,
    Unthemed,
}

#[derive(Debug, Clone)]
pub struct GeneratedDeck {
    pub commander: Card,
    pub theme: Option<String>,
    pub mainboard: Vec<Card>,
    pub lands: Vec<Card>,
}

impl GeneratedDeck {
    pub fn decklist(&self) -> Decklist {
        Decklist::new(&self.commander, &self.mainboard, &self.lands)
    }
}

/// Picks a commander and theme, then draws the mainboard and land base.
///
/// A theme known before the commander is picked also narrows the commander
/// search, so the commander itself fits the theme.
pub fn generate_deck(
    search: &mut dyn CardSearch,
    tag_source: &mut dyn TagSource,
    choice: &ThemeChoice,
    commander_extra: Option<&str>,
    config: &DeckConfig,
    rng: &mut RngState,
) -> Result<GeneratedDeck, DeckError> {
    let upfront = match choice {
        ThemeChoice::Explicit(theme) => Some(theme.clone()),
        ThemeChoice::Preset(selector) => selector.pick(rng),
        ThemeChoice::Auto | ThemeChoice::Unthemed => None,
    };
    if let Some(theme) = &upfront {
        log::info!("theme: {theme}");
    }

    let extra = [commander_extra, upfront.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    let commander = pick_commander(search, Some(extra.as_str()), rng)?;

    let theme = match choice {
        ThemeChoice::Auto => auto_theme(&commander, tag_source, &config.theme, rng),
        _ => upfront,
    };

    let mut assembler = Mainboard::new(&commander, theme.clone(), config);
    let mainboard = assembler.build(search, rng)?;
    let lands = build_lands(&commander, config.land_count, search, rng);

    Ok(GeneratedDeck {
        commander,
        theme,
        mainboard,
        lands,
    })
}
