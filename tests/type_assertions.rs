//! Compile-time guarantees about the public value types.

use prowl::{Agent, AgentState, Observation, PatrolRange, SignalLog};
use static_assertions::assert_impl_all;

assert_impl_all!(Agent: Copy, Send, Sync);
assert_impl_all!(AgentState: Copy, Eq, std::hash::Hash);
assert_impl_all!(Observation: Copy, Send, Sync);
assert_impl_all!(PatrolRange: Copy, serde::Serialize);
assert_impl_all!(SignalLog: Default, Send, Sync);

#[test]
fn agent_state_is_small() {
    assert_eq!(std::mem::size_of::<AgentState>(), 1);
}
