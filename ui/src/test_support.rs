//! Fixtures shared by the component and hook tests.

use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::time::Duration;

use api::error::StatusCode;
use api::referral_date::ReferralDate;
use api::reward_amount::RewardAmount;
use api::Referral;
use api::ReferralError;
use api::ReferralSource;
use async_trait::async_trait;
use dioxus::prelude::*;
use tokio::sync::Notify;

/// Serializes tests that touch the process-wide native session store.
static SESSION_LOCK: Mutex<()> = Mutex::new(());

pub fn lock_session() -> MutexGuard<'static, ()> {
    SESSION_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Lets pending tasks run and applies the resulting renders.
pub async fn pump(dom: &mut VirtualDom) {
    let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
    dom.render_immediate_to_vec();
}

pub fn referral(first: &str, last: &str, date: &str, rewards: f64) -> Referral {
    Referral {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@x.com", first.to_lowercase()),
        date: ReferralDate::parse(date),
        rewards: RewardAmount::new_from_float(rewards),
    }
}

pub fn ann_lee() -> Referral {
    referral("Ann", "Lee", "2024-01-05", 12.5)
}

#[derive(Clone)]
pub enum Outcome {
    Referrals(Vec<Referral>),
    Fails,
    /// Never resolves.
    Hangs,
    /// Answers with the list once the gate is opened.
    Gated(Rc<Notify>, Vec<Referral>),
}

/// A `ReferralSource` that answers from memory and records every call.
pub struct StubSource {
    outcome: Outcome,
    calls: Cell<usize>,
    answered: Cell<usize>,
    seen: RefCell<Vec<String>>,
}

impl StubSource {
    pub fn new(outcome: Outcome) -> Rc<Self> {
        Rc::new(Self {
            outcome,
            calls: Cell::new(0),
            answered: Cell::new(0),
            seen: RefCell::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Number of requests that ran to completion.
    pub fn answered(&self) -> usize {
        self.answered.get()
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ReferralSource for StubSource {
    async fn referrals(&self, user_id: &str) -> Result<Vec<Referral>, ReferralError> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().push(user_id.to_string());
        let result = match &self.outcome {
            Outcome::Referrals(referrals) => Ok(referrals.clone()),
            Outcome::Fails => Err(ReferralError::Status(StatusCode::SERVICE_UNAVAILABLE)),
            Outcome::Hangs => std::future::pending().await,
            Outcome::Gated(gate, referrals) => {
                gate.notified().await;
                Ok(referrals.clone())
            }
        };
        self.answered.set(self.answered.get() + 1);
        result
    }
}
