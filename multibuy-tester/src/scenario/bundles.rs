use anyhow::{Context, Result};
use multibuy_core::{Catalog, SelectOutcome, Selection};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{PageScenario, ScenarioCtx, css_count, load_catalog, price_attr_to_cents};

/// A unit count no catalog in the test data uses.
const UNKNOWN_UNIT: u8 = 99;

/// Walks the selection across every bundle and checks that exactly one
/// option is active at a time and that unknown keys change nothing.
pub struct BundlesScenario;

fn check_selection_moves(catalog: &Catalog) -> Result<()> {
    let mut selection = Selection::default_for(catalog);
    for option in catalog.options() {
        match selection.select(catalog, option.unit_count) {
            SelectOutcome::Applied { price_cents, .. } => anyhow::ensure!(
                price_cents == option.price_cents,
                "Selecting bundle {} should report {} cents, got {}",
                option.unit_count,
                option.price_cents,
                price_cents
            ),
            SelectOutcome::Ignored => anyhow::bail!(
                "Bundle {} is in the catalog and should be selectable",
                option.unit_count
            ),
        }
        anyhow::ensure!(
            selection.active_unit() == Some(option.unit_count),
            "Bundle {} should be active after selecting it",
            option.unit_count
        );

        let active: Vec<u8> = catalog
            .options()
            .iter()
            .map(|candidate| candidate.unit_count)
            .filter(|unit_count| selection.is_active(*unit_count))
            .collect();
        anyhow::ensure!(
            active.len() == 1,
            "Exactly one bundle should be active, found {active:?}"
        );
    }
    Ok(())
}

fn check_unknown_keys_are_ignored(catalog: &Catalog) -> Result<()> {
    let mut selection = Selection::default_for(catalog);
    let before = selection.active_unit();
    anyhow::ensure!(
        selection.select(catalog, UNKNOWN_UNIT) == SelectOutcome::Ignored,
        "Unknown bundle key {UNKNOWN_UNIT} should be ignored"
    );
    anyhow::ensure!(
        selection.active_unit() == before,
        "An ignored select should leave the selection where it was"
    );
    Ok(())
}

#[async_trait::async_trait]
impl PageScenario for BundlesScenario {
    fn name(&self) -> &'static str {
        "Bundle Selection Test"
    }

    fn describe(&self) -> &'static str {
        "Selection moves across bundles as a unit and ignores unknown keys"
    }

    fn run_logic(&self) -> Result<()> {
        let catalog = load_catalog()?;
        check_selection_moves(&catalog)?;
        check_unknown_keys_are_ignored(&catalog)
    }

    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.bridge.ensure_available().await?;

        let catalog = load_catalog()?;
        for option in catalog.options() {
            let selector = format!(".product-box[data-unit='{}']", option.unit_count);
            let bundle_box = driver.find(By::Css(&selector)).await?;
            bundle_box.click().await?;
            tokio::time::sleep(Duration::from_millis(250)).await;

            let state = ctx.bridge.state().await?;
            anyhow::ensure!(
                state.selected == Some(option.unit_count),
                "Clicking bundle {} should select it, got {:?}",
                option.unit_count,
                state.selected
            );

            let price_attr = bundle_box
                .attr("data-price")
                .await?
                .context("bundle box is missing data-price")?;
            let expected = price_attr_to_cents(&price_attr)?;
            anyhow::ensure!(
                state.total_cents == expected,
                "Total should match the advertised price, expected {} got {}",
                expected,
                state.total_cents
            );

            let active = css_count(driver, ".product-box.active").await?;
            anyhow::ensure!(
                active == 1,
                "Exactly one bundle should render active, found {active}"
            );

            if ctx.verbose {
                println!(
                    "  🖱️  Selected bundle {} via DOM, total {} cents",
                    option.unit_count, state.total_cents
                );
            }
        }

        let before = ctx.bridge.state().await?;
        ctx.bridge.select(UNKNOWN_UNIT).await?;
        tokio::time::sleep(Duration::from_millis(250)).await;
        let after = ctx.bridge.state().await?;
        anyhow::ensure!(
            after.selected == before.selected,
            "Unknown bundle key should leave the selection alone, got {:?}",
            after.selected
        );
        if ctx.verbose {
            println!("  🔒 Unknown bundle key ignored, selection still {:?}", after.selected);
        }

        Ok(())
    }
}
