use anyhow::Result;
use thirtyfour::prelude::*;

use crate::browser::FocusProbe;

mod catalog;
pub mod logic;

pub use catalog::{DEFAULT_SCENARIOS, get_scenario, list_scenarios};

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub probe: FocusProbe<'a>,
    pub verbose: bool,
}

impl ScenarioCtx<'_> {
    pub fn note(&self, message: &str) {
        if self.verbose {
            println!("  {message}");
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Scenario that checks the in-memory model and, where observable, a live page
pub trait CombinedScenario: BrowserScenario {
    fn name(&self) -> &'static str;

    fn run_logic(&self) -> Result<()>;

    fn supports_browser(&self) -> bool {
        true
    }
}
