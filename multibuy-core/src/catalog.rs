//! Product catalog: the bundle options a page offers
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A purchasable bundle option for the product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProductOption {
    /// Number of units in the bundle; doubles as the option key
    pub unit_count: u8,
    /// Price in cents to avoid floating-point issues
    pub price_cents: i64,
    /// Compare-at price in cents, shown struck through
    pub original_price_cents: i64,
}

impl ProductOption {
    /// Discount against the compare-at price, as a whole percentage.
    /// Zero when the option is not actually discounted.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn savings_pct(&self) -> u8 {
        if self.original_price_cents <= 0 || self.price_cents >= self.original_price_cents {
            return 0;
        }
        let ratio = self.price_cents as f64 / self.original_price_cents as f64;
        ((1.0 - ratio) * 100.0).round() as u8
    }
}

/// Catalog validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unit count 0 is not a valid option key")]
    ZeroUnitCount,
    #[error("duplicate option for unit count {0}")]
    DuplicateUnitCount(u8),
}

/// Failures loading catalog data from embedded JSON.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Complete catalog: the bundle options plus the size and colour
/// choices every rendered chooser offers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default)]
    options: Vec<ProductOption>,
    /// Sizes offered per item; empty means no size chooser is rendered
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Colours offered per item; empty means no colour chooser is rendered
    #[serde(default)]
    pub colours: Vec<String>,
}

impl Catalog {
    /// Build a catalog from parts, validating option keys.
    ///
    /// # Errors
    ///
    /// Returns an error if any option has a zero or duplicate unit count.
    pub fn new(
        options: Vec<ProductOption>,
        sizes: Vec<String>,
        colours: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            options,
            sizes,
            colours,
        };
        catalog.normalize()?;
        Ok(catalog)
    }

    /// Parse and validate catalog JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the options fail
    /// key validation.
    pub fn from_json(raw: &str) -> Result<Self, CatalogLoadError> {
        let mut catalog: Self = serde_json::from_str(raw)?;
        catalog.normalize()?;
        Ok(catalog)
    }

    fn normalize(&mut self) -> Result<(), CatalogError> {
        self.options.sort_by_key(|option| option.unit_count);
        let mut previous: Option<u8> = None;
        for option in &self.options {
            if option.unit_count == 0 {
                return Err(CatalogError::ZeroUnitCount);
            }
            if previous == Some(option.unit_count) {
                return Err(CatalogError::DuplicateUnitCount(option.unit_count));
            }
            previous = Some(option.unit_count);
        }
        Ok(())
    }

    /// All options in ascending unit-count order.
    #[must_use]
    pub fn options(&self) -> &[ProductOption] {
        &self.options
    }

    /// Look up an option by its unit-count key.
    #[must_use]
    pub fn option(&self, unit_count: u8) -> Option<&ProductOption> {
        self.options
            .iter()
            .find(|option| option.unit_count == unit_count)
    }

    /// The option selected before any user input: the smallest bundle.
    #[must_use]
    pub fn default_option(&self) -> Option<&ProductOption> {
        self.options.first()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
