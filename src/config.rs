//! Process-wide defaults for new generators.
//!
//! `configure` and `reset` mutate a module-level table guarded by a mutex.
//! Generators snapshot the table once, at construction; later changes never
//! affect existing instances.

use parking_lot::Mutex;

use crate::errors::{Error, Result};

/// Built-in cap for unbounded quantifiers (`*`, `+`, `{n,}`).
pub const DEFAULT_MAX_REPEAT: u32 = 100;

/// Default iteration budget for `render_set`.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

#[derive(Debug, Clone)]
pub(crate) struct ProcessConfig {
    pub max_repeat: u32,
    pub alphabet: Option<String>,
}

static CONFIG: Mutex<ProcessConfig> = Mutex::new(ProcessConfig {
    max_repeat: DEFAULT_MAX_REPEAT,
    alphabet: None,
});

/// Updates the process-wide defaults. `None` leaves a setting unchanged.
///
/// Settings apply to generators constructed *after* this call; existing
/// instances keep the defaults they captured.
///
/// # Errors
///
/// [`Error::Value`] if `max_repeat` is zero or `alphabet` is empty or
/// whitespace-only.
pub fn configure(max_repeat: Option<u32>, alphabet: Option<&str>) -> Result<()> {
    if let Some(cap) = max_repeat {
        if cap == 0 {
            return Err(Error::Value("max_repeat must be >= 1".into()));
        }
    }
    if let Some(letters) = alphabet {
        if letters.trim().is_empty() {
            return Err(Error::Value(
                "alphabet must contain at least one non-whitespace character".into(),
            ));
        }
    }

    let mut config = CONFIG.lock();
    if let Some(cap) = max_repeat {
        config.max_repeat = cap;
    }
    if let Some(letters) = alphabet {
        config.alphabet = Some(letters.to_owned());
    }
    Ok(())
}

/// Restores all process-wide defaults to their built-in values.
pub fn reset() {
    let mut config = CONFIG.lock();
    config.max_repeat = DEFAULT_MAX_REPEAT;
    config.alphabet = None;
}

/// The current defaults, captured at generator construction.
pub(crate) fn snapshot() -> ProcessConfig {
    CONFIG.lock().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringGen;

    // Process config is shared across the test binary; every test touching
    // it serialises on this lock and restores the defaults before releasing.
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_configure_and_reset() {
        let _guard = TEST_LOCK.lock();
        configure(Some(7), Some("xyz")).unwrap();
        let snap = snapshot();
        assert_eq!(snap.max_repeat, 7);
        assert_eq!(snap.alphabet.as_deref(), Some("xyz"));
        reset();
        let snap = snapshot();
        assert_eq!(snap.max_repeat, DEFAULT_MAX_REPEAT);
        assert_eq!(snap.alphabet, None);
    }

    #[test]
    fn test_configure_rejects_zero_cap() {
        let _guard = TEST_LOCK.lock();
        let err = configure(Some(0), None).unwrap_err();
        assert!(matches!(err, Error::Value(_)));
        assert_eq!(snapshot().max_repeat, DEFAULT_MAX_REPEAT);
    }

    #[test]
    fn test_configure_rejects_blank_alphabet() {
        let _guard = TEST_LOCK.lock();
        assert!(matches!(configure(None, Some("")), Err(Error::Value(_))));
        assert!(matches!(configure(None, Some(" \t")), Err(Error::Value(_))));
        reset();
    }

    #[test]
    fn test_new_instances_see_new_defaults() {
        let _guard = TEST_LOCK.lock();
        configure(Some(3), None).unwrap();
        let mut capped = StringGen::new(r"a+").unwrap();
        for _ in 0..50 {
            assert!(capped.render().len() <= 3);
        }
        reset();
    }

    #[test]
    fn test_existing_instances_keep_captured_defaults() {
        let _guard = TEST_LOCK.lock();
        reset();
        let mut before = StringGen::builder(r"a+").seed(11u64).max_repeat(2).build().unwrap();
        configure(Some(90), None).unwrap();
        for _ in 0..50 {
            assert!(
                before.render().len() <= 2,
                "configure must not affect instances built earlier"
            );
        }
        reset();
    }

    #[test]
    fn test_configured_alphabet_flows_into_word() {
        let _guard = TEST_LOCK.lock();
        configure(None, Some("Ω")).unwrap();
        let mut gen = StringGen::builder(r"\w").seed(5u64).build().unwrap();
        let allowed: Vec<char> = "Ω0123456789_".chars().collect();
        for _ in 0..30 {
            let out = gen.render();
            assert!(out.chars().all(|c| allowed.contains(&c)), "got {out:?}");
        }
        reset();
    }
}
