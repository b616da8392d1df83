//! Shared, lockable Bevy `App` for rspec suites.
//!
//! rspec environments must be `Send + Sync`, which `App` is not.

use bevy::prelude::App;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// An `App` that may be moved between the threads rspec owns.
#[derive(Debug)]
pub struct ThreadSafeApp(pub App);

impl Deref for ThreadSafeApp {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ThreadSafeApp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// SAFETY: suites using this wrapper run through `run_serial`, so only one
// example touches the app at a time, and every access goes through the
// mutex in `SharedApp`.
unsafe impl Send for ThreadSafeApp {}
unsafe impl Sync for ThreadSafeApp {}

/// Shared handle cloned into each rspec example.
pub type SharedApp = Arc<Mutex<ThreadSafeApp>>;

/// Wraps a fresh app in a [`SharedApp`].
pub fn shared(app: App) -> SharedApp {
    Arc::new(Mutex::new(ThreadSafeApp(app)))
}

/// Locks the app, recovering it from a poisoned mutex so one failed example
/// does not hide the rest.
pub fn lock_app(app: &SharedApp) -> MutexGuard<'_, ThreadSafeApp> {
    app.lock().unwrap_or_else(PoisonError::into_inner)
}
