use crate::{Card, CardTags, RngState, TagSource, ThemeSettings};

pub const DEFAULT_THEMES: &[&str] = &[
    "(otag:synergy-sorcery or t:sorcery)",
    "(otag:synergy-artifact or t:artifact)",
    "(otag:synergy-attacker or otag:synergy-attack-self or o:attack)",
    "(otag:synergy-enchantment or t:enchantment)",
    "(otag:synergy-equipment or t:equipment)",
    "(otag:synergy-sacrifice or o:dies)",
    "(otag:pp-counters-matter or (o:+1 and o:counter))",
    "(otag:tribal-dragon or t:dragon)",
    "(otag:tribal-zombie or t:zombie)",
    "(otag:tribal-vampire or t:vampire)",
    "(otag:tribal-rogue or t:rogue)",
    "(otag:tribal-human or t:human)",
];

/// A fixed list of theme queries to pick from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSelector {
    themes: Vec<String>,
}

impl Default for ThemeSelector {
    fn default() -> Self {
        Self::new(DEFAULT_THEMES.iter().map(|theme| theme.to_string()).collect())
    }
}

impl ThemeSelector {
    pub fn new(themes: Vec<String>) -> Self {
        Self { themes }
    }

    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    pub fn pick(&self, rng: &mut RngState) -> Option<String> {
        rng.choose(&self.themes).cloned()
    }
}

/// Builds a theme from the commander's keywords, tags and subtypes, sampling
/// at most the configured number of terms from each group. `None` when no
/// group contributed a term.
pub fn derive_theme(
    commander: &Card,
    tags: &CardTags,
    settings: &ThemeSettings,
    rng: &mut RngState,
) -> Option<String> {
    let subtypes = commander.subtypes();
    let mut terms: Vec<String> = Vec::new();
    terms.extend(
        rng.sample(&commander.keywords, settings.keyword_amount)
            .into_iter()
            .map(|keyword| format!("o:{keyword}")),
    );
    terms.extend(
        rng.sample(&tags.oracle_text, settings.otag_amount)
            .into_iter()
            .map(|tag| format!("otag:{tag}")),
    );
    terms.extend(
        rng.sample(&tags.illustration, settings.atag_amount)
            .into_iter()
            .map(|tag| format!("atag:{tag}")),
    );
    terms.extend(
        rng.sample(&subtypes, settings.type_amount)
            .into_iter()
            .map(|subtype| format!("t:{subtype}")),
    );

    if terms.is_empty() {
        return None;
    }
    Some(format!("({})", terms.join(" or ")))
}

/// Looks up the commander's tags and derives a theme from them. A failing
/// tag source only costs the tag terms.
pub fn auto_theme(
    commander: &Card,
    tag_source: &mut dyn TagSource,
    settings: &ThemeSettings,
    rng: &mut RngState,
) -> Option<String> {
    let tags = match tag_source.tags(&commander.set, &commander.collector_number) {
        Ok(tags) => tags,
        Err(err) => {
            log::warn!(
                "could not fetch tags for {} ({} #{}): {err}",
                commander.name,
                commander.set,
                commander.collector_number
            );
            CardTags::default()
        }
    };
    let theme = derive_theme(commander, &tags, settings, rng);
    match &theme {
        Some(theme) => log::info!("derived theme: {theme}"),
        None => log::info!("no theme terms for {}, building unthemed", commander.name),
    }
    theme
}
