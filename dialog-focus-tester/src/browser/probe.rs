use anyhow::{Context, Result, bail};
use std::time::Duration;
use thirtyfour::prelude::*;

/// Upper bound on how long a focus handoff may take to land.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Reads and drives focus on the demo page through injected scripts.
#[derive(Debug, Clone)]
pub struct FocusProbe<'a> {
    driver: &'a WebDriver,
}

impl<'a> FocusProbe<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn active_id(&self) -> Result<String> {
        let ret = self
            .driver
            .execute(
                "const el = document.activeElement; return el ? el.id : '';",
                vec![],
            )
            .await?;
        Ok(ret.json().as_str().unwrap_or_default().to_string())
    }

    pub async fn exists(&self, id: &str) -> Result<bool> {
        let ret = self
            .driver
            .execute(
                "return document.getElementById(arguments[0]) !== null;",
                vec![id.into()],
            )
            .await?;
        Ok(ret.json().as_bool().unwrap_or(false))
    }

    pub async fn attribute(&self, id: &str, name: &str) -> Result<Option<String>> {
        let ret = self
            .driver
            .execute(
                "const el = document.getElementById(arguments[0]); \
                 return el ? el.getAttribute(arguments[1]) : null;",
                vec![id.into(), name.into()],
            )
            .await?;
        Ok(ret.json().as_str().map(ToString::to_string))
    }

    pub async fn click(&self, id: &str) -> Result<()> {
        self.driver
            .find(By::Id(id))
            .await
            .with_context(|| format!("locating #{id}"))?
            .click()
            .await?;
        Ok(())
    }

    /// Move focus to `id` from script, as sequential navigation would.
    pub async fn focus(&self, id: &str) -> Result<()> {
        let ret = self
            .driver
            .execute(
                "const el = document.getElementById(arguments[0]); \
                 if (!el) { return false; } el.focus(); return true;",
                vec![id.into()],
            )
            .await?;
        if !ret.json().as_bool().unwrap_or(false) {
            bail!("cannot focus missing element #{id}");
        }
        Ok(())
    }

    pub async fn press_escape(&self, id: &str) -> Result<()> {
        self.driver
            .execute(
                "const el = document.getElementById(arguments[0]); \
                 el.dispatchEvent(new KeyboardEvent('keydown', { key: 'Escape', bubbles: true }));",
                vec![id.into()],
            )
            .await?;
        Ok(())
    }

    /// Poll until `id` holds focus, or fail with whatever holds it instead.
    pub async fn wait_for_focus(&self, id: &str) -> Result<()> {
        let deadline = tokio::time::Instant::now() + SETTLE_TIMEOUT;
        loop {
            let active = self.active_id().await?;
            if active == id {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                bail!("expected focus on #{id}, found #{active}");
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
