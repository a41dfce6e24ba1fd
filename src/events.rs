use crate::wheel::Selector;
use std::cell::RefCell;
use std::rc::Rc;

/// Edge-triggered inputs from the host's input-action layer. Edges are
/// assumed clean; debouncing happens upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdge {
    Activate,
    Deactivate,
}

pub type EdgeSlot = Box<dyn FnMut()>;

/// Two named callback slots the host fills in. The selector never learns
/// what input-action system sits behind them.
pub trait InputBinder {
    fn bind(&mut self, on_activate: EdgeSlot, on_deactivate: EdgeSlot);
}

/// Registers the selector's activate/deactivate transitions on `binder`.
/// A second call for the same selector is a warned no-op.
pub fn bind_edges(selector: &Rc<RefCell<Selector>>, binder: &mut dyn InputBinder) {
    if selector.borrow_mut().mark_edges_bound() {
        log::warn!("Trying to bind selector edges twice!");
        return;
    }

    let on_activate = {
        let selector = Rc::clone(selector);
        Box::new(move || selector.borrow_mut().activate()) as EdgeSlot
    };
    let on_deactivate = {
        let selector = Rc::clone(selector);
        Box::new(move || selector.borrow_mut().deactivate()) as EdgeSlot
    };

    binder.bind(on_activate, on_deactivate);
}
