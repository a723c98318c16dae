//! Price filter applied to the listing grid.

/// Threshold picked in the price selector. `All` shows every card; `Max`
/// keeps cards whose nightly price is at or below the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFilter {
    #[default]
    All,
    Max(u32),
}

impl PriceFilter {
    /// Parse a selector value. `"all"` (or anything non-numeric) selects
    /// [`PriceFilter::All`].
    pub fn parse(value: &str) -> Self {
        value.parse::<u32>().map_or(Self::All, Self::Max)
    }

    /// Whether a card with this nightly price stays visible. Inclusive.
    pub fn allows(&self, price: f64) -> bool {
        match self {
            Self::All => true,
            Self::Max(max) => price <= f64::from(*max),
        }
    }
}
