//! Scenario checks against the in-memory document.
use std::rc::Rc;

use anyhow::{Result, ensure};
use dialog_focus::{
    DialogConfig, DialogFocus, FocusChange, FocusHost, MemoryDom, NodeId, OverlayStack, Pass,
    SharedStack, TrapDecision, TrapView, on_focus_change,
};

/// A page with a link and an opener button ahead of any dialog content.
pub struct Fixture {
    pub dom: Rc<MemoryDom>,
    pub stack: SharedStack,
    pub before: NodeId,
    pub opener: NodeId,
    pub after: NodeId,
}

impl Fixture {
    pub fn new() -> Self {
        let dom = Rc::new(MemoryDom::new());
        let before = dom.create_element(dom.body(), "a");
        dom.set_attribute(before, "href", "#main");
        let opener = dom.create_element(dom.body(), "button");
        let after = dom.create_element(dom.body(), "button");
        Self {
            dom,
            stack: OverlayStack::shared(),
            before,
            opener,
            after,
        }
    }

    pub fn dialog(&self, config: &DialogConfig) -> DialogFocus<MemoryDom> {
        DialogFocus::new(self.dom.clone(), self.stack.clone(), config)
    }

    /// Unmounted content root holding `buttons` buttons.
    pub fn content(&self, buttons: usize) -> (NodeId, Vec<NodeId>) {
        let root = self.dom.create_detached("div");
        self.dom.set_attribute(root, "tabindex", "-1");
        let buttons = (0..buttons)
            .map(|_| self.dom.create_element(root, "button"))
            .collect();
        (root, buttons)
    }

    pub fn open(&self, dialog: &mut DialogFocus<MemoryDom>, opener: NodeId, root: NodeId) {
        self.dom.move_focus(opener);
        dialog.set_active(true);
        self.dom.append_child(self.dom.body(), root);
        dialog.set_content_root(Some(root));
        self.dom.flush();
    }

    pub fn close(&self, dialog: &mut DialogFocus<MemoryDom>, root: NodeId) {
        dialog.set_active(false);
        self.dom.detach(root);
        self.dom.flush();
    }

    fn expect_focus(&self, expected: NodeId, what: &str) -> Result<()> {
        let active = self.dom.active_element();
        ensure!(
            active == Some(expected),
            "{what}: expected focus on {expected:?}, found {active:?}"
        );
        Ok(())
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

pub fn two_button_cycle() -> Result<()> {
    let page = Fixture::new();
    let (root, buttons) = page.content(2);
    let (save, cancel) = (buttons[0], buttons[1]);
    let mut dialog = page.dialog(&DialogConfig::default());
    page.open(&mut dialog, page.opener, root);

    page.dom.move_focus(save);
    page.dom.shift_tab();
    page.expect_focus(cancel, "shift-tab from first")?;
    page.dom.tab();
    page.expect_focus(save, "tab from last")?;
    page.dom.move_focus(page.before);
    page.expect_focus(cancel, "escape from first")?;
    Ok(())
}

pub fn stacked_isolation() -> Result<()> {
    let page = Fixture::new();
    let (root_a, a_buttons) = page.content(2);
    let (root_b, b_buttons) = page.content(2);
    let mut a = page.dialog(&DialogConfig::default());
    let mut b = page.dialog(&DialogConfig::default());

    page.open(&mut a, page.opener, root_a);
    page.open(&mut b, a_buttons[1], root_b);
    ensure!(b.is_topmost() && !a.is_topmost(), "second dialog should be topmost");

    page.dom.move_focus(b_buttons[1]);
    page.dom.move_focus(page.after);
    page.expect_focus(b_buttons[0], "escape from topmost")?;

    page.close(&mut b, root_b);
    page.expect_focus(a_buttons[1], "close returns to nested activator")?;
    ensure!(a.is_topmost(), "first dialog should be topmost again");

    page.dom.move_focus(page.before);
    page.expect_focus(a_buttons[0], "escape after nested close")?;
    Ok(())
}

pub fn empty_trap() -> Result<()> {
    let page = Fixture::new();
    let (root, _) = page.content(0);
    page.dom.create_element(root, "p");
    let mut dialog = page.dialog(&DialogConfig::default());
    page.open(&mut dialog, page.opener, root);

    page.dom.move_focus(page.after);
    page.expect_focus(page.after, "empty dialog")?;
    Ok(())
}

pub fn activation_handoff() -> Result<()> {
    let page = Fixture::new();
    let (root, _) = page.content(1);
    let mut dialog = page.dialog(&DialogConfig::default());

    page.open(&mut dialog, page.opener, root);
    page.expect_focus(root, "open")?;
    let handoff = page.dom.focus_calls().last().copied();
    ensure!(
        handoff.is_some_and(|call| call.options.prevent_scroll),
        "handoff should preserve scroll position"
    );

    page.close(&mut dialog, root);
    page.expect_focus(page.opener, "close")?;
    ensure!(page.stack.borrow().is_empty(), "stack should be empty after close");
    Ok(())
}

pub fn listener_discipline() -> Result<()> {
    let page = Fixture::new();
    let (root, _) = page.content(1);
    let mut dialog = page.dialog(&DialogConfig::default());
    page.open(&mut dialog, page.opener, root);

    for retain in [false, false, true, true] {
        dialog.set_retain_focus(retain);
        let expected = usize::from(retain);
        ensure!(
            page.dom.listener_count() == expected,
            "retain_focus={retain}: expected {expected} listener(s), found {}",
            page.dom.listener_count()
        );
    }
    ensure!(
        dialog.listener_attachments() == 2,
        "listener attached {} times",
        dialog.listener_attachments()
    );

    page.close(&mut dialog, root);
    ensure!(page.dom.listener_count() == 0, "listener outlived activation");
    Ok(())
}

pub fn no_op_event() -> Result<()> {
    let page = Fixture::new();
    let (root, _) = page.content(2);
    page.dom.append_child(page.dom.body(), root);
    let view = TrapView {
        content_root: Some(&root),
        is_topmost: true,
    };
    let change = FocusChange::new(Some(page.after), Some(page.after));
    let decision = on_focus_change(&*page.dom, &change, &view);
    ensure!(
        decision == TrapDecision::Pass(Pass::NoMovement),
        "unexpected decision {decision:?}"
    );
    ensure!(page.dom.focus_calls().is_empty(), "focus moved on a no-op event");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_logic_scenario_passes() {
        for (name, run) in [
            ("two-button-cycle", two_button_cycle as fn() -> Result<()>),
            ("stacked-isolation", stacked_isolation),
            ("empty-trap", empty_trap),
            ("activation-handoff", activation_handoff),
            ("listener-discipline", listener_discipline),
            ("no-op-event", no_op_event),
        ] {
            if let Err(err) = run() {
                panic!("{name} failed: {err:#}");
            }
        }
    }

    #[test]
    fn fixture_orders_page_elements() {
        let page = Fixture::new();
        assert_eq!(page.dom.tab(), Some(page.before));
        assert_eq!(page.dom.tab(), Some(page.opener));
        assert_eq!(page.dom.tab(), Some(page.after));
    }
}
