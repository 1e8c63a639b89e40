use anyhow::{Context, Result};
use multibuy_core::{Catalog, SelectOutcome, Selection};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{PageScenario, ScenarioCtx, css_count, load_catalog};

/// Clears the selection, tries to add, and checks the blocked add
/// leaves the cart untouched and warns instead. Ends by re-selecting
/// to prove the picker recovers.
pub struct ValidationScenario;

fn check_cleared_selection_resolves_nothing(catalog: &Catalog) -> Result<()> {
    let mut selection = Selection::default_for(catalog);
    selection.clear();
    anyhow::ensure!(
        selection.active_unit().is_none(),
        "Cleared selection should report no bundle"
    );
    anyhow::ensure!(
        selection.active_option(catalog).is_none(),
        "Cleared selection should resolve to no catalog entry"
    );
    // zero is never a valid option key, so this cannot revive the selection
    anyhow::ensure!(
        selection.select(catalog, 0) == SelectOutcome::Ignored,
        "Unit count 0 should never select anything"
    );
    Ok(())
}

fn check_selection_recovers(catalog: &Catalog) -> Result<()> {
    let mut selection = Selection::default_for(catalog);
    selection.clear();

    let first = catalog
        .default_option()
        .context("Catalog should expose a default bundle")?;
    anyhow::ensure!(
        selection.select(catalog, first.unit_count) != SelectOutcome::Ignored,
        "Re-selecting bundle {} after a clear should work",
        first.unit_count
    );
    anyhow::ensure!(
        selection.active_unit() == Some(first.unit_count),
        "Bundle {} should be active again",
        first.unit_count
    );
    Ok(())
}

#[async_trait::async_trait]
impl PageScenario for ValidationScenario {
    fn name(&self) -> &'static str {
        "Selection Guard Test"
    }

    fn describe(&self) -> &'static str {
        "Adding without a selection warns and leaves the cart untouched"
    }

    fn run_logic(&self) -> Result<()> {
        let catalog = load_catalog()?;
        check_cleared_selection_resolves_nothing(&catalog)?;
        check_selection_recovers(&catalog)
    }

    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.bridge.ensure_available().await?;

        ctx.bridge.clear_selection().await?;
        tokio::time::sleep(Duration::from_millis(250)).await;

        let state = ctx.bridge.state().await?;
        anyhow::ensure!(
            state.selected.is_none(),
            "Bridge clear should drop the selection, got {:?}",
            state.selected
        );
        anyhow::ensure!(
            state.total_cents == 0,
            "Nothing selected should total 0 cents, got {}",
            state.total_cents
        );
        let active = css_count(driver, ".product-box.active").await?;
        anyhow::ensure!(
            active == 0,
            "No bundle should render active after a clear, found {active}"
        );
        let cart_len_before = state.cart_len;

        driver.find(By::Css(".add-to-cart-btn")).await?.click().await?;
        tokio::time::sleep(Duration::from_millis(400)).await;

        let message = driver.find(By::Css(".cart-message")).await?;
        let class = message.attr("class").await?.unwrap_or_default();
        anyhow::ensure!(
            class.contains("cart-message-warning"),
            "Blocked add should flash a warning, got class {class:?}"
        );
        let text = message.text().await?;
        anyhow::ensure!(
            !text.trim().is_empty(),
            "Warning notice should carry a message"
        );
        if ctx.verbose {
            println!("  ⚠️  Blocked add warned: {}", text.trim());
        }

        let state = ctx.bridge.state().await?;
        anyhow::ensure!(
            state.cart_len == cart_len_before,
            "Blocked add should leave the cart untouched, got {} lines",
            state.cart_len
        );

        // warnings stay up 4 seconds then fade over 300ms
        tokio::time::sleep(Duration::from_millis(4600)).await;
        let remaining = css_count(driver, ".cart-message").await?;
        anyhow::ensure!(
            remaining == 0,
            "Warning notice should dismiss itself, found {remaining} still mounted"
        );

        let catalog = load_catalog()?;
        let first = catalog
            .default_option()
            .context("Catalog should expose a default bundle")?;
        ctx.bridge.select(first.unit_count).await?;
        tokio::time::sleep(Duration::from_millis(250)).await;
        let state = ctx.bridge.state().await?;
        anyhow::ensure!(
            state.selected == Some(first.unit_count),
            "Picker should recover after the blocked add, got {:?}",
            state.selected
        );
        if ctx.verbose {
            println!("  ✅ Picker recovered, bundle {} active again", first.unit_count);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_selection_resolves_nothing_on_the_bundled_catalog() {
        let catalog = load_catalog().expect("bundled catalog");
        check_cleared_selection_resolves_nothing(&catalog).expect("guard ok");
    }

    #[test]
    fn selection_recovers_on_the_bundled_catalog() {
        let catalog = load_catalog().expect("bundled catalog");
        check_selection_recovers(&catalog).expect("recovery ok");
    }

    #[test]
    fn recovery_fails_loudly_on_an_empty_catalog() {
        let err = check_selection_recovers(&Catalog::default())
            .expect_err("empty catalog cannot recover");
        assert!(err.to_string().contains("default bundle"));
    }
}
