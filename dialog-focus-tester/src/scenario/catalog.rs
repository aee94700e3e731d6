use anyhow::{Context, Result, bail, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, logic};

/// Scenarios run when `all` is requested.
pub const DEFAULT_SCENARIOS: &[&str] = &[
    "two-button-cycle",
    "stacked-isolation",
    "empty-trap",
    "activation-handoff",
    "listener-discipline",
    "no-op-event",
];

type LogicCheck = fn() -> Result<()>;

async fn load_demo(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    driver.goto(&ctx.base_url).await?;
    driver
        .find(By::Id("dialog-a-activator"))
        .await
        .context("demo page did not render its dialogs")?;
    ctx.note("demo page loaded");
    Ok(())
}

async fn open_dialog(ctx: &ScenarioCtx<'_>, id: &str) -> Result<()> {
    ctx.probe.click(&format!("{id}-activator")).await?;
    ctx.probe.wait_for_focus(&format!("{id}-content")).await?;
    ctx.note(&format!("opened #{id}"));
    Ok(())
}

pub struct TwoButtonCycle;

#[async_trait::async_trait]
impl BrowserScenario for TwoButtonCycle {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        load_demo(driver, ctx).await?;
        open_dialog(ctx, "dialog-a").await?;

        ctx.probe.focus("dialog-a-save").await?;
        ctx.probe.focus("before").await?;
        ctx.probe.wait_for_focus("dialog-a-cancel").await?;
        ctx.note("escape from first stop wrapped to last");

        ctx.probe.focus("after").await?;
        ctx.probe.wait_for_focus("dialog-a-save").await?;
        ctx.note("escape from last stop wrapped to first");
        Ok(())
    }
}

impl CombinedScenario for TwoButtonCycle {
    fn name(&self) -> &'static str {
        "Two Button Focus Cycle"
    }

    fn run_logic(&self) -> Result<()> {
        logic::two_button_cycle()
    }
}

pub struct StackedIsolation;

#[async_trait::async_trait]
impl BrowserScenario for StackedIsolation {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        load_demo(driver, ctx).await?;
        open_dialog(ctx, "dialog-a").await?;
        open_dialog(ctx, "dialog-b").await?;

        ctx.probe.focus("dialog-b-cancel").await?;
        ctx.probe.focus("before").await?;
        ctx.probe.wait_for_focus("dialog-b-ok").await?;
        ctx.note("topmost dialog pulled focus back");

        ctx.probe.click("dialog-b-ok").await?;
        ctx.probe.wait_for_focus("dialog-b-activator").await?;
        ctx.note("closing the nested dialog restored its activator");

        ctx.probe.focus("after").await?;
        ctx.probe.wait_for_focus("dialog-a-save").await?;
        Ok(())
    }
}

impl CombinedScenario for StackedIsolation {
    fn name(&self) -> &'static str {
        "Stacked Dialog Isolation"
    }

    fn run_logic(&self) -> Result<()> {
        logic::stacked_isolation()
    }
}

pub struct EmptyTrap;

#[async_trait::async_trait]
impl BrowserScenario for EmptyTrap {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        load_demo(driver, ctx).await?;
        open_dialog(ctx, "dialog-empty").await?;

        ctx.probe.focus("after").await?;
        ctx.probe.wait_for_focus("after").await?;
        ctx.note("focus left a dialog with no stops");
        Ok(())
    }
}

impl CombinedScenario for EmptyTrap {
    fn name(&self) -> &'static str {
        "Empty Dialog Lets Focus Escape"
    }

    fn run_logic(&self) -> Result<()> {
        logic::empty_trap()
    }
}

pub struct ActivationHandoff;

#[async_trait::async_trait]
impl BrowserScenario for ActivationHandoff {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        load_demo(driver, ctx).await?;
        open_dialog(ctx, "dialog-a").await?;
        let expanded = ctx.probe.attribute("dialog-a-activator", "aria-expanded").await?;
        ensure!(
            expanded.as_deref() == Some("true"),
            "activator should report aria-expanded=true, got {expanded:?}"
        );

        ctx.probe.press_escape("dialog-a-content").await?;
        ctx.probe.wait_for_focus("dialog-a-activator").await?;
        ensure!(
            !ctx.probe.exists("dialog-a-content").await?,
            "dialog content still mounted after Escape"
        );
        ctx.note("Escape closed the dialog and restored the activator");
        Ok(())
    }
}

impl CombinedScenario for ActivationHandoff {
    fn name(&self) -> &'static str {
        "Activation Focus Handoff"
    }

    fn run_logic(&self) -> Result<()> {
        logic::activation_handoff()
    }
}

/// Scenario whose behavior has no observable browser surface.
pub struct LogicOnly {
    name: &'static str,
    check: LogicCheck,
}

#[async_trait::async_trait]
impl BrowserScenario for LogicOnly {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        bail!("{} has no browser implementation", self.name)
    }
}

impl CombinedScenario for LogicOnly {
    fn name(&self) -> &'static str {
        self.name
    }

    fn run_logic(&self) -> Result<()> {
        (self.check)()
    }

    fn supports_browser(&self) -> bool {
        false
    }
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "two-button-cycle" | "cycle" => Some(Box::new(TwoButtonCycle)),
        "stacked-isolation" | "stacked" => Some(Box::new(StackedIsolation)),
        "empty-trap" | "empty" => Some(Box::new(EmptyTrap)),
        "activation-handoff" | "handoff" => Some(Box::new(ActivationHandoff)),
        "listener-discipline" | "listener" => Some(Box::new(LogicOnly {
            name: "Listener Attach Discipline",
            check: logic::listener_discipline,
        })),
        "no-op-event" | "no-op" => Some(Box::new(LogicOnly {
            name: "Unchanged Focus Event Ignored",
            check: logic::no_op_event,
        })),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    DEFAULT_SCENARIOS
        .iter()
        .filter_map(|key| get_scenario(key).map(|scenario| (*key, scenario.name())))
        .collect()
}
