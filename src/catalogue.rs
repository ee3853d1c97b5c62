//! Catalogue filtering
//!
//! Search and facet filtering over the wallpaper listing. The listing is
//! small and already cached, so filtering happens in memory.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::models::Wallpaper;

/// Value meaning "no restriction" for every facet.
pub const ALL: &str = "All";

pub const STYLES: [&str; 4] = ["Modern", "Nature", "Classic", "Industrial"];
pub const COLORS: [&str; 4] = ["Neutral", "Green", "Gold", "Gray"];
pub const ROOMS: [&str; 4] = ["Living Room", "Bedroom", "Dining", "Office"];

/// Price bands offered by the catalogue's price filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceBand {
    #[default]
    All,
    Under150,
    From150To200,
    Over200,
}

impl PriceBand {
    pub const ALL_BANDS: [PriceBand; 4] = [
        PriceBand::All,
        PriceBand::Under150,
        PriceBand::From150To200,
        PriceBand::Over200,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PriceBand::All => ALL,
            PriceBand::Under150 => "Under 150",
            PriceBand::From150To200 => "150 - 200",
            PriceBand::Over200 => "200+",
        }
    }

    /// Unknown labels mean no restriction.
    pub fn from_label(label: &str) -> Self {
        Self::ALL_BANDS
            .into_iter()
            .find(|band| band.label() == label)
            .unwrap_or_default()
    }

    pub fn contains(self, price: Decimal) -> bool {
        match self {
            PriceBand::All => true,
            PriceBand::Under150 => price < dec!(150),
            PriceBand::From150To200 => price >= dec!(150) && price <= dec!(200),
            PriceBand::Over200 => price > dec!(200),
        }
    }
}

/// Catalogue filter as submitted in the landing page query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogueQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

/// Parsed catalogue filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueFilter {
    pub q: String,
    pub style: String,
    pub color: String,
    pub room: String,
    pub price: PriceBand,
}

impl Default for CatalogueFilter {
    fn default() -> Self {
        Self {
            q: String::new(),
            style: ALL.to_string(),
            color: ALL.to_string(),
            room: ALL.to_string(),
            price: PriceBand::All,
        }
    }
}

impl From<&CatalogueQuery> for CatalogueFilter {
    fn from(query: &CatalogueQuery) -> Self {
        let facet = |value: &Option<String>| match value.as_deref().map(str::trim) {
            None | Some("") => ALL.to_string(),
            Some(v) => v.to_string(),
        };

        Self {
            q: query.q.as_deref().unwrap_or("").trim().to_string(),
            style: facet(&query.style),
            color: facet(&query.color),
            room: facet(&query.room),
            price: PriceBand::from_label(query.price.as_deref().unwrap_or(ALL)),
        }
    }
}

impl CatalogueFilter {
    pub fn matches(&self, wallpaper: &Wallpaper) -> bool {
        let matches_q =
            self.q.is_empty() || wallpaper.title.to_lowercase().contains(&self.q.to_lowercase());
        let matches_facet = |selected: &str, value: &str| selected == ALL || selected == value;

        matches_q
            && matches_facet(&self.style, &wallpaper.style)
            && matches_facet(&self.color, &wallpaper.color)
            && matches_facet(&self.room, &wallpaper.room)
            && self.price.contains(wallpaper.price)
    }

    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

/// Wallpapers matching `filter`, in listing order.
pub fn filter_wallpapers<'a>(items: &'a [Wallpaper], filter: &CatalogueFilter) -> Vec<&'a Wallpaper> {
    items.iter().filter(|w| filter.matches(w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn wallpaper(title: &str, style: &str, color: &str, room: &str, price: Decimal) -> Wallpaper {
        Wallpaper {
            id: Uuid::new_v4(),
            title: title.to_string(),
            style: style.to_string(),
            color: color.to_string(),
            room: room.to_string(),
            price,
            img: format!("https://img.example/{title}.jpg"),
            created_at: Utc::now(),
        }
    }

    fn catalogue() -> Vec<Wallpaper> {
        vec![
            wallpaper("Concrete Loft", "Industrial", "Gray", "Office", dec!(140)),
            wallpaper("Forest Mist", "Nature", "Green", "Bedroom", dec!(150)),
            wallpaper("Linen Weave", "Modern", "Neutral", "Living Room", dec!(200)),
            wallpaper("Gilded Damask", "Classic", "Gold", "Dining", dec!(200.01)),
        ]
    }

    fn titles(items: Vec<&Wallpaper>) -> Vec<&str> {
        items.into_iter().map(|w| w.title.as_str()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything_in_order() {
        let items = catalogue();
        let filtered = filter_wallpapers(&items, &CatalogueFilter::default());
        assert_eq!(
            titles(filtered),
            vec!["Concrete Loft", "Forest Mist", "Linen Weave", "Gilded Damask"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = catalogue();
        let filter = CatalogueFilter {
            q: "MIST".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(filter_wallpapers(&items, &filter)), vec!["Forest Mist"]);
    }

    #[test]
    fn test_facets_use_exact_equality() {
        let items = catalogue();
        let filter = CatalogueFilter {
            room: "Living".to_string(),
            ..Default::default()
        };
        assert!(filter_wallpapers(&items, &filter).is_empty());

        let filter = CatalogueFilter {
            style: "Classic".to_string(),
            color: "Gold".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(filter_wallpapers(&items, &filter)), vec!["Gilded Damask"]);
    }

    #[test]
    fn test_price_band_boundaries() {
        assert!(PriceBand::Under150.contains(dec!(149.99)));
        assert!(!PriceBand::Under150.contains(dec!(150)));
        assert!(PriceBand::From150To200.contains(dec!(150)));
        assert!(PriceBand::From150To200.contains(dec!(200)));
        assert!(!PriceBand::Over200.contains(dec!(200)));
        assert!(PriceBand::Over200.contains(dec!(200.01)));

        let items = catalogue();
        let filter = CatalogueFilter {
            price: PriceBand::From150To200,
            ..Default::default()
        };
        assert_eq!(
            titles(filter_wallpapers(&items, &filter)),
            vec!["Forest Mist", "Linen Weave"]
        );
    }

    #[test]
    fn test_price_band_labels_round_trip() {
        for band in PriceBand::ALL_BANDS {
            assert_eq!(PriceBand::from_label(band.label()), band);
        }
        assert_eq!(PriceBand::from_label("cheap"), PriceBand::All);
    }

    #[test]
    fn test_filter_from_query_blank_means_all() {
        let query = CatalogueQuery {
            q: Some("  loft ".to_string()),
            style: Some("".to_string()),
            color: None,
            room: Some("Office".to_string()),
            price: Some("Under 150".to_string()),
        };
        let filter = CatalogueFilter::from(&query);
        assert_eq!(filter.q, "loft");
        assert_eq!(filter.style, ALL);
        assert_eq!(filter.color, ALL);
        assert_eq!(filter.room, "Office");
        assert_eq!(filter.price, PriceBand::Under150);
        assert!(filter.is_active());
        assert!(!CatalogueFilter::default().is_active());
    }
}
