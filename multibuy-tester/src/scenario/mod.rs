use anyhow::{Context, Result};
use multibuy_core::Catalog;
use thirtyfour::prelude::*;

use crate::browser::TestBridge;

pub mod bundles;
pub mod checkout;
pub mod smoke;
pub mod validation;

/// Same catalog the page ships, so expectations come from the data
/// itself instead of hard-coded prices.
const CATALOG_JSON: &str = include_str!("../../../multibuy-web/static/assets/data/catalog.json");

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub bridge: TestBridge<'a>,
    pub verbose: bool,
}

/// One QA scenario with a pure-logic replay and a browser run of the
/// same flow. The logic side exercises the core crate directly; the
/// browser side drives the rendered page through WebDriver and the
/// test bridge.
#[async_trait::async_trait]
pub trait PageScenario {
    fn name(&self) -> &'static str;
    fn describe(&self) -> &'static str;
    fn run_logic(&self) -> Result<()>;
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

pub fn get_scenario(name: &str) -> Option<Box<dyn PageScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "bundles" | "selection" => Some(Box::new(bundles::BundlesScenario)),
        "checkout" | "add-to-cart" => Some(Box::new(checkout::CheckoutScenario)),
        "validation" | "guard" => Some(Box::new(validation::ValidationScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", smoke::SmokeScenario.describe()),
        ("bundles", bundles::BundlesScenario.describe()),
        ("checkout", checkout::CheckoutScenario.describe()),
        ("validation", validation::ValidationScenario.describe()),
    ]
}

pub(crate) fn load_catalog() -> Result<Catalog> {
    Catalog::from_json(CATALOG_JSON).context("parsing the bundled catalog")
}

/// Parse a `data-price` attribute ("18.00") into cents without going
/// through floating point.
pub(crate) fn price_attr_to_cents(attr: &str) -> Result<i64> {
    let (dollars, cents) = match attr.split_once('.') {
        Some((dollars, cents)) => (dollars, cents),
        None => (attr, "0"),
    };
    anyhow::ensure!(
        cents.len() <= 2,
        "price attribute {attr:?} has more than two decimals"
    );
    let dollars: i64 = dollars
        .parse()
        .with_context(|| format!("parsing dollars in {attr:?}"))?;
    let fraction: i64 = cents
        .parse()
        .with_context(|| format!("parsing cents in {attr:?}"))?;
    let fraction = if cents.len() == 1 { fraction * 10 } else { fraction };
    Ok(dollars * 100 + fraction)
}

/// Count matches for a CSS selector without waiting on the implicit
/// timeout, so zero-match checks stay fast.
pub(crate) async fn css_count(driver: &WebDriver, selector: &str) -> Result<u64> {
    let result = driver
        .execute(
            "return document.querySelectorAll(arguments[0]).length",
            vec![selector.into()],
        )
        .await?;
    Ok(result.json().as_u64().unwrap_or(0))
}
