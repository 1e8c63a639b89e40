use anyhow::{Context, Result};
use multibuy_core::{Cart, Catalog, Selection};
use thirtyfour::prelude::*;

use super::{PageScenario, ScenarioCtx, css_count, load_catalog};

/// Fastest end-to-end check: the page loads, the bridge answers, and
/// the boot state matches what the catalog dictates.
pub struct SmokeScenario;

fn check_boot_state(catalog: &Catalog) -> Result<()> {
    anyhow::ensure!(
        !catalog.is_empty(),
        "Catalog should offer at least one bundle"
    );

    let selection = Selection::default_for(catalog);
    let active = selection
        .active_option(catalog)
        .context("Default selection should resolve to a bundle")?;
    let smallest = catalog
        .default_option()
        .context("Catalog should expose a default bundle")?;

    anyhow::ensure!(
        active.unit_count == smallest.unit_count,
        "Boot should select the smallest bundle, got {} units",
        active.unit_count
    );
    anyhow::ensure!(
        active.price_cents > 0,
        "Boot bundle should carry a positive price, got {}",
        active.price_cents
    );

    let cart = Cart::new();
    anyhow::ensure!(cart.is_empty(), "Cart should start empty");
    anyhow::ensure!(cart.total_cents() == 0, "Empty cart should total zero");
    Ok(())
}

#[async_trait::async_trait]
impl PageScenario for SmokeScenario {
    fn name(&self) -> &'static str {
        "Smoke Test"
    }

    fn describe(&self) -> &'static str {
        "Page boots with the smallest bundle active and an empty cart"
    }

    fn run_logic(&self) -> Result<()> {
        let catalog = load_catalog()?;
        check_boot_state(&catalog)
    }

    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;

        let _container = driver.find(By::Css(".container")).await?;
        ctx.bridge.ensure_available().await?;
        if ctx.verbose {
            println!("  🌐 Page loaded, bridge connected");
        }

        let catalog = load_catalog()?;
        let boxes = driver.find_all(By::Css(".product-box")).await?;
        anyhow::ensure!(
            boxes.len() == catalog.options().len(),
            "Expected {} bundle boxes, found {}",
            catalog.options().len(),
            boxes.len()
        );

        let state = ctx.bridge.state().await?;
        if ctx.verbose {
            println!("  📊 Boot state: {state:?}");
        }

        let smallest = catalog
            .default_option()
            .context("Catalog should expose a default bundle")?;
        anyhow::ensure!(
            state.selected == Some(smallest.unit_count),
            "Boot should select bundle {}, got {:?}",
            smallest.unit_count,
            state.selected
        );
        anyhow::ensure!(
            state.total_cents == smallest.price_cents,
            "Boot total should be {} cents, got {}",
            smallest.price_cents,
            state.total_cents
        );
        anyhow::ensure!(
            state.cart_len == 0,
            "Cart should start empty, got {} lines",
            state.cart_len
        );

        let active = css_count(driver, ".product-box.active").await?;
        anyhow::ensure!(active == 1, "Exactly one bundle should render active, found {active}");

        let total_text = driver.find(By::Css("#total-amount")).await?.text().await?;
        anyhow::ensure!(
            !total_text.trim().is_empty(),
            "Total amount should render a price"
        );

        Ok(())
    }
}
