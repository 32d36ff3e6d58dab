//! Test doubles that record every lifecycle, presenter and factory call.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use wayfinder::{FactoryError, Router, Screen};

pub type Log = Rc<RefCell<Vec<String>>>;

pub struct Probe {
    pub name: String,
    pub id: usize,
    log: Log,
}

impl Probe {
    pub fn new(name: &str, id: usize, log: &Log) -> Self {
        Self {
            name: name.to_string(),
            id,
            log: Rc::clone(log),
        }
    }

    fn note(&self, event: &str) {
        self.log.borrow_mut().push(format!("{}.{}", self.name, event));
    }
}

impl Screen for Probe {
    fn name(&self) -> &str {
        &self.name
    }

    fn will_present(&mut self) {
        self.note("will_present");
    }

    fn did_present(&mut self) {
        self.note("did_present");
    }

    fn will_disappear(&mut self) {
        self.note("will_disappear");
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub selected: Option<u32>,
    pub cancelled: bool,
}

/// Presenter logging `present <name>`.
pub fn presenter(log: &Log) -> impl FnMut(&Probe) + 'static {
    let log = Rc::clone(log);
    move |screen: &Probe| log.borrow_mut().push(format!("present {}", screen.name))
}

/// Factory logging `create <name>` that builds any name except `rejected`.
/// Screens get increasing ids starting at 1.
pub fn factory(log: &Log) -> impl FnMut(&str) -> Result<Probe, FactoryError> + 'static {
    let log = Rc::clone(log);
    let mut next_id = 0;
    move |name: &str| {
        log.borrow_mut().push(format!("create {}", name));
        if name == "rejected" {
            return Err(FactoryError::unknown(name));
        }
        next_id += 1;
        Ok(Probe::new(name, next_id, &log))
    }
}

/// Router over a `home` screen with logging doubles.
pub fn router(log: &Log) -> Router<AppState, Probe> {
    Router::new(Probe::new("home", 0, log), presenter(log), factory(log))
}

pub fn stack_names<T>(router: &Router<T, Probe>) -> Vec<String> {
    router
        .navigation_stack()
        .names()
        .map(str::to_string)
        .collect()
}

pub fn take(log: &Log) -> Vec<String> {
    std::mem::take(&mut *log.borrow_mut())
}
