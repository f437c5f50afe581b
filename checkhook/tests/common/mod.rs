#![allow(dead_code)]

use checkhook::{Actor, BoxError, CheckType, FailureHook, SharedHook, Verdict};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Taxonomy and Actor
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CheckType)]
pub enum Check {
    #[check(all, name = "ALL")]
    All,
    #[check(name = "BLOCKBREAK")]
    BlockBreak,
    #[check(group = BlockBreak, name = "BLOCKBREAK_FASTBREAK")]
    BlockBreakFastBreak,
    #[check(group = BlockBreak, name = "BLOCKBREAK_REACH")]
    BlockBreakReach,
    #[check(name = "MOVING")]
    Moving,
    #[check(group = Moving, name = "MOVING_SURVIVALFLY")]
    MovingSurvivalFly,
    #[check(group = Moving, name = "MOVING_CREATIVEFLY")]
    MovingCreativeFly,
    #[check(name = "CHAT")]
    Chat,
    #[check(group = Chat, name = "CHAT_SPAM")]
    ChatSpam,
    #[check(group = ChatSpam, name = "CHAT_SPAM_WORDS")]
    ChatSpamWords,
    #[check(name = "INVENTORY_DROP")]
    InventoryDrop,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub staff: bool,
}

impl Actor for Player {
    fn name(&self) -> &str {
        &self.name
    }
}

pub fn player(name: &str) -> Player {
    Player {
        name: name.to_string(),
        staff: false,
    }
}

pub fn staff(name: &str) -> Player {
    Player {
        name: name.to_string(),
        staff: true,
    }
}

pub type Hook = SharedHook<Check, Player>;

// ============================================================================
// Test Hooks
// ============================================================================

pub struct CountingHook {
    pub name: &'static str,
    pub call_count: Arc<AtomicUsize>,
    pub verdict: Verdict,
}

impl CountingHook {
    pub fn new(name: &'static str, verdict: Verdict) -> (Hook, Arc<AtomicUsize>) {
        let call_count = Arc::new(AtomicUsize::new(0));
        let hook = CountingHook {
            name,
            call_count: call_count.clone(),
            verdict,
        };
        (Arc::new(hook), call_count)
    }
}

impl FailureHook<Check, Player> for CountingHook {
    fn name(&self) -> &str {
        self.name
    }

    fn version(&self) -> &str {
        "1.0"
    }

    fn on_check_failure(&self, _check: Check, _player: &Player) -> Result<Verdict, BoxError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.verdict)
    }
}

pub struct OrderRecordingHook {
    pub id: usize,
    pub order: Arc<Mutex<Vec<usize>>>,
    pub verdict: Verdict,
}

impl FailureHook<Check, Player> for OrderRecordingHook {
    fn name(&self) -> &str {
        "OrderRecording"
    }

    fn version(&self) -> &str {
        "1.0"
    }

    fn on_check_failure(&self, _check: Check, _player: &Player) -> Result<Verdict, BoxError> {
        self.order.lock().unwrap().push(self.id);
        Ok(self.verdict)
    }
}

/// Cancels violation processing for staff members.
pub struct ExemptStaffHook;

impl FailureHook<Check, Player> for ExemptStaffHook {
    fn name(&self) -> &str {
        "ExemptStaff"
    }

    fn version(&self) -> &str {
        "2.3.1"
    }

    fn on_check_failure(&self, _check: Check, player: &Player) -> Result<Verdict, BoxError> {
        Ok(Verdict::from(player.staff))
    }
}

pub fn counting(name: &'static str) -> (Hook, Arc<AtomicUsize>) {
    CountingHook::new(name, Verdict::Continue)
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
