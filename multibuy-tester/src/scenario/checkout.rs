use anyhow::{Context, Result};
use multibuy_core::{
    Cart, Catalog, ChoiceKind, ChoiceSource, ProductOption, SelectOutcome, Selection, SystemClock,
    collect_options,
};
use std::time::Duration;
use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;

use super::{PageScenario, ScenarioCtx, css_count, load_catalog};

/// Adds bundles to the cart end to end: pick a bundle, change the
/// first item's choosers, add twice, and watch the success notice
/// appear and dismiss itself.
pub struct CheckoutScenario;

/// Choice source shaped like the rendered page: every chooser answers,
/// item 1 carries the scripted pick and the rest keep the first
/// offered value.
struct PageLikeChoices<'a> {
    catalog: &'a Catalog,
    chosen_size: &'a str,
    chosen_colour: &'a str,
}

impl ChoiceSource for PageLikeChoices<'_> {
    fn choice_of(&self, kind: ChoiceKind, _unit_count: u8, item: u8) -> Option<String> {
        let offered = match kind {
            ChoiceKind::Size => &self.catalog.sizes,
            ChoiceKind::Colour => &self.catalog.colours,
        };
        if offered.is_empty() {
            return None;
        }
        if item == 1 {
            let chosen = match kind {
                ChoiceKind::Size => self.chosen_size,
                ChoiceKind::Colour => self.chosen_colour,
            };
            return Some(chosen.to_string());
        }
        offered.first().cloned()
    }
}

/// The bundle the flow exercises: the second option when the catalog
/// has one, so the walk leaves the boot selection.
fn target_bundle(catalog: &Catalog) -> Result<&ProductOption> {
    catalog
        .options()
        .get(1)
        .or_else(|| catalog.default_option())
        .context("Catalog should offer a bundle")
}

/// A non-default value when the list offers one.
fn second_or_first(values: &[String]) -> Option<&str> {
    values.get(1).or_else(|| values.first()).map(String::as_str)
}

fn check_checkout_accumulates(catalog: &Catalog) -> Result<()> {
    let option = target_bundle(catalog)?;
    let mut selection = Selection::default_for(catalog);
    anyhow::ensure!(
        selection.select(catalog, option.unit_count) != SelectOutcome::Ignored,
        "Bundle {} should be selectable",
        option.unit_count
    );

    let chosen_size = second_or_first(&catalog.sizes).context("Catalog should list sizes")?;
    let chosen_colour =
        second_or_first(&catalog.colours).context("Catalog should list colours")?;
    let source = PageLikeChoices {
        catalog,
        chosen_size,
        chosen_colour,
    };

    let mut cart = Cart::new();
    let clock = SystemClock;
    let line = cart.add_line(option, collect_options(&source, option.unit_count), &clock);

    anyhow::ensure!(
        line.unit_count == option.unit_count,
        "Line should record {} units, got {}",
        option.unit_count,
        line.unit_count
    );
    anyhow::ensure!(
        line.price_cents == option.price_cents,
        "Line should record {} cents, got {}",
        option.price_cents,
        line.price_cents
    );
    anyhow::ensure!(
        line.sizes.get(&1).map(String::as_str) == Some(chosen_size),
        "Item 1 should record size {chosen_size:?}, got {:?}",
        line.sizes.get(&1)
    );
    anyhow::ensure!(
        line.colours.get(&1).map(String::as_str) == Some(chosen_colour),
        "Item 1 should record colour {chosen_colour:?}, got {:?}",
        line.colours.get(&1)
    );
    anyhow::ensure!(
        line.sizes.len() == usize::from(option.unit_count),
        "Every item should record a size, got {} of {}",
        line.sizes.len(),
        option.unit_count
    );
    anyhow::ensure!(
        !line.created_at.is_empty(),
        "Line should carry a creation timestamp"
    );

    cart.add_line(option, collect_options(&source, option.unit_count), &clock);
    anyhow::ensure!(cart.len() == 2, "Cart should hold 2 lines, got {}", cart.len());
    anyhow::ensure!(
        cart.total_cents() == option.price_cents * 2,
        "Cart total should be {} cents, got {}",
        option.price_cents * 2,
        cart.total_cents()
    );

    let mut stamps = cart.lines().iter().map(|line| line.created_at.as_str());
    let first_stamp = stamps.next().context("first line should exist")?;
    let second_stamp = stamps.next().context("second line should exist")?;
    anyhow::ensure!(
        first_stamp <= second_stamp,
        "Timestamps should not go backwards: {first_stamp} then {second_stamp}"
    );

    Ok(())
}

#[async_trait::async_trait]
impl PageScenario for CheckoutScenario {
    fn name(&self) -> &'static str {
        "Checkout Flow Test"
    }

    fn describe(&self) -> &'static str {
        "Adding to cart snapshots the choices, stacks lines, and flashes a notice"
    }

    fn run_logic(&self) -> Result<()> {
        let catalog = load_catalog()?;
        check_checkout_accumulates(&catalog)
    }

    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.bridge.ensure_available().await?;

        let catalog = load_catalog()?;
        let option = target_bundle(&catalog)?;
        let unit = option.unit_count;

        let box_selector = format!(".product-box[data-unit='{unit}']");
        driver.find(By::Css(&box_selector)).await?.click().await?;
        tokio::time::sleep(Duration::from_millis(250)).await;

        let chosen_size =
            second_or_first(&catalog.sizes).context("Catalog should list sizes")?;
        let chosen_colour =
            second_or_first(&catalog.colours).context("Catalog should list colours")?;

        let size_select = driver.find(By::Css(&format!("#size-{unit}-1"))).await?;
        SelectElement::new(&size_select)
            .await?
            .select_by_value(chosen_size)
            .await?;
        let colour_select = driver.find(By::Css(&format!("#colour-{unit}-1"))).await?;
        SelectElement::new(&colour_select)
            .await?
            .select_by_value(chosen_colour)
            .await?;
        if ctx.verbose {
            println!("  🎨 Picked {chosen_size} / {chosen_colour} for item 1");
        }

        driver.find(By::Css(".add-to-cart-btn")).await?.click().await?;
        tokio::time::sleep(Duration::from_millis(400)).await;

        let message = driver.find(By::Css(".cart-message")).await?;
        let class = message.attr("class").await?.unwrap_or_default();
        anyhow::ensure!(
            class.contains("cart-message-success"),
            "Add to cart should flash a success notice, got class {class:?}"
        );
        anyhow::ensure!(
            class.contains("show"),
            "Success notice should be visible, got class {class:?}"
        );

        let state = ctx.bridge.state().await?;
        anyhow::ensure!(
            state.cart_len == 1,
            "Cart should hold 1 line, got {}",
            state.cart_len
        );

        let line = ctx
            .bridge
            .last_line()
            .await?
            .context("Bridge should expose the newest cart line")?;
        anyhow::ensure!(
            line.unit_count == unit,
            "Newest line should record {unit} units, got {}",
            line.unit_count
        );
        anyhow::ensure!(
            line.price_cents == option.price_cents,
            "Newest line should record {} cents, got {}",
            option.price_cents,
            line.price_cents
        );
        anyhow::ensure!(
            line.sizes.get(&1).map(String::as_str) == Some(chosen_size),
            "Item 1 should record size {chosen_size:?}, got {:?}",
            line.sizes.get(&1)
        );
        anyhow::ensure!(
            line.colours.get(&1).map(String::as_str) == Some(chosen_colour),
            "Item 1 should record colour {chosen_colour:?}, got {:?}",
            line.colours.get(&1)
        );
        if unit > 1 {
            let default_size = catalog.sizes.first().context("Catalog should list sizes")?;
            anyhow::ensure!(
                line.sizes.get(&2).map(String::as_str) == Some(default_size.as_str()),
                "Untouched item 2 should keep the first offered size, got {:?}",
                line.sizes.get(&2)
            );
        }
        if ctx.verbose {
            println!("  🛒 First add recorded: {line:?}");
        }

        let count_attr = driver
            .find(By::Css(".cart-count"))
            .await?
            .attr("data-cart-count")
            .await?
            .context("cart count is missing data-cart-count")?;
        anyhow::ensure!(
            count_attr == "1",
            "Cart count should display 1, got {count_attr}"
        );

        driver.find(By::Css(".add-to-cart-btn")).await?.click().await?;
        tokio::time::sleep(Duration::from_millis(250)).await;
        let state = ctx.bridge.state().await?;
        anyhow::ensure!(
            state.cart_len == 2,
            "Second add should stack a line, got {}",
            state.cart_len
        );

        // success notices stay up 3 seconds then fade over 300ms
        tokio::time::sleep(Duration::from_millis(3600)).await;
        let remaining = css_count(driver, ".cart-message").await?;
        anyhow::ensure!(
            remaining == 0,
            "Success notice should dismiss itself, found {remaining} still mounted"
        );
        if ctx.verbose {
            println!("  ⏲️  Notice dismissed itself after its display window");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_flow_accumulates_on_the_bundled_catalog() {
        let catalog = load_catalog().expect("bundled catalog");
        check_checkout_accumulates(&catalog).expect("checkout ok");
    }

    #[test]
    fn target_bundle_prefers_the_second_option() {
        let catalog = load_catalog().expect("bundled catalog");
        let target = target_bundle(&catalog).expect("target bundle");
        let second = catalog.options().get(1).expect("two options");
        assert_eq!(target.unit_count, second.unit_count);
    }

    #[test]
    fn page_like_choices_answer_every_item() {
        let catalog = load_catalog().expect("bundled catalog");
        let source = PageLikeChoices {
            catalog: &catalog,
            chosen_size: "L",
            chosen_colour: "Blue",
        };
        let options = collect_options(&source, 3);
        assert_eq!(options.sizes.get(&1).map(String::as_str), Some("L"));
        assert_eq!(options.colours.get(&1).map(String::as_str), Some("Blue"));
        assert_eq!(
            options.sizes.get(&2),
            catalog.sizes.first(),
            "other items keep the first offered size"
        );
        assert_eq!(options.sizes.len(), 3);
        assert_eq!(options.colours.len(), 3);
    }

    #[test]
    fn choosers_are_omitted_when_nothing_is_offered() {
        let catalog = Catalog::new(
            vec![ProductOption {
                unit_count: 2,
                price_cents: 1800,
                original_price_cents: 2400,
            }],
            vec![],
            vec![],
        )
        .expect("catalog");
        let source = PageLikeChoices {
            catalog: &catalog,
            chosen_size: "L",
            chosen_colour: "Blue",
        };
        let options = collect_options(&source, 2);
        assert!(options.is_empty());
    }

    #[test]
    fn second_or_first_falls_back() {
        let one = vec!["S".to_string()];
        assert_eq!(second_or_first(&one), Some("S"));
        let two = vec!["S".to_string(), "M".to_string()];
        assert_eq!(second_or_first(&two), Some("M"));
        assert_eq!(second_or_first(&[]), None);
    }
}
