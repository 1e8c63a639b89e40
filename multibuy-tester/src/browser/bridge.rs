use anyhow::{Context, Result, bail};
use multibuy_core::CartLine;
use serde::Deserialize;
use thirtyfour::prelude::*;

/// Picker snapshot exposed by `window.__multibuyTest.state()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub selected: Option<u8>,
    pub total_cents: i64,
    pub cart_len: usize,
}

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute("return !!window.__multibuyTest", vec![])
            .await?;
        let ok = result.json().as_bool().unwrap_or(false);
        if !ok {
            bail!("__multibuyTest is not available. Did you load the page with ?test=1?");
        }
        Ok(())
    }

    pub async fn state(&self) -> Result<PageState> {
        let result = self
            .driver
            .execute("return window.__multibuyTest.state()", vec![])
            .await?;
        let v = result.json().clone();
        let s: PageState = serde_json::from_value(v).context("parsing PageState")?;
        Ok(s)
    }

    pub async fn select(&self, unit_count: u8) -> Result<()> {
        self.driver
            .execute(
                "window.__multibuyTest.select(arguments[0])",
                vec![i64::from(unit_count).into()],
            )
            .await?;
        Ok(())
    }

    pub async fn clear_selection(&self) -> Result<()> {
        self.driver
            .execute("window.__multibuyTest.clearSelection()", vec![])
            .await?;
        Ok(())
    }

    /// The newest cart line, or `None` while the cart is empty.
    pub async fn last_line(&self) -> Result<Option<CartLine>> {
        let result = self
            .driver
            .execute("return window.__multibuyTest.lastLine()", vec![])
            .await?;
        let v = result.json().clone();
        if v.is_null() {
            return Ok(None);
        }
        let line: CartLine = serde_json::from_value(v).context("parsing newest cart line")?;
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_state_parses_camel_case_payloads() {
        let state: PageState = serde_json::from_str(
            r#"{ "selected": 2, "totalCents": 1800, "cartLen": 1 }"#,
        )
        .expect("bridge payload");
        assert_eq!(state.selected, Some(2));
        assert_eq!(state.total_cents, 1800);
        assert_eq!(state.cart_len, 1);
    }

    #[test]
    fn page_state_accepts_a_cleared_selection() {
        let state: PageState = serde_json::from_str(
            r#"{ "selected": null, "totalCents": 0, "cartLen": 0 }"#,
        )
        .expect("bridge payload");
        assert_eq!(state.selected, None);
        assert_eq!(state.total_cents, 0);
    }

    #[test]
    fn cart_lines_parse_from_bridge_json() {
        let line: CartLine = serde_json::from_str(
            r#"{
                "unit_count": 2,
                "price_cents": 1800,
                "sizes": { "1": "M" },
                "colours": { "1": "Red" },
                "created_at": "2026-08-25T12:00:00.000Z"
            }"#,
        )
        .expect("cart line payload");
        assert_eq!(line.unit_count, 2);
        assert_eq!(line.sizes.get(&1).map(String::as_str), Some("M"));
    }
}
