//! Integration tests for the fjall-backed store.

#![cfg(feature = "fjall")]

use std::collections::BTreeSet;

use pref_kv::prelude::*;
use tempfile::TempDir;

fn open(dir: &TempDir) -> anyhow::Result<TypedStore<FjallBackend>> {
    Ok(TypedStore::new(FjallBackend::open(dir.path())?))
}

#[test]
fn test_roundtrip_all_kinds() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut store = open(&dir)?;

    let tags: BTreeSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    store.set("name", "alice")?;
    store.set("tags", tags.clone())?;
    store.set("volume", 7)?;
    store.set("epoch", 1_700_000_000_000i64)?;
    store.set("scale", 1.25f32)?;
    store.set("enabled", true)?;

    assert_eq!(store.get_string("name", "")?, "alice");
    assert_eq!(store.get_string_set("tags", BTreeSet::new())?, tags);
    assert_eq!(store.get_i32("volume", 0)?, 7);
    assert_eq!(store.get_i64("epoch", 0)?, 1_700_000_000_000);
    assert_eq!(store.get_f32("scale", 0.0)?, 1.25);
    assert!(store.get_bool("enabled", false)?);
    Ok(())
}

#[test]
fn test_persists_across_reopen() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    {
        let mut store = open(&dir)?;
        store.set("volume", 7)?;
        store.set("theme", "dark")?;
    }

    let store = open(&dir)?;
    assert_eq!(store.get_i32("volume", 0)?, 7);
    assert_eq!(store.get_string("theme", "light")?, "dark");
    Ok(())
}

#[test]
fn test_absent_key_returns_default() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = open(&dir)?;

    assert_eq!(store.get("missing_key", 3.5f32)?, 3.5);
    assert_eq!(store.get_opt::<String>("missing_key", None)?, None);
    Ok(())
}

#[test]
fn test_overwrite_persists() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    {
        let mut store = open(&dir)?;
        store.set("volume", 1)?;
        store.set("volume", 2)?;
    }

    let store = open(&dir)?;
    assert_eq!(store.get_i32("volume", 0)?, 2);
    Ok(())
}

#[test]
fn test_kind_mismatch_across_reopen() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    {
        let mut store = open(&dir)?;
        store.set("name", "alice")?;
    }

    let store = open(&dir)?;
    let err = store.get_i32("name", 0).unwrap_err();
    assert!(matches!(
        err,
        StoreError::KindMismatch {
            stored: Kind::String,
            requested: Kind::I32,
            ..
        }
    ));
    Ok(())
}

#[test]
fn test_batched_writes_persist_after_single_commit() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    {
        let mut store = open(&dir)?;
        let backend = store.backend_mut();
        backend.write_i32("a", 1)?;
        backend.write_i32("b", 2)?;
        backend.commit()?;
    }

    let store = open(&dir)?;
    assert_eq!(store.get_i32("a", 0)?, 1);
    assert_eq!(store.get_i32("b", 0)?, 2);
    Ok(())
}

#[test]
fn test_empty_values_roundtrip() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut store = open(&dir)?;

    store.set("empty_string", "")?;
    store.set("empty_set", BTreeSet::new())?;

    assert_eq!(store.get_string("empty_string", "default")?, "");
    assert_eq!(
        store.get_string_set("empty_set", ["x".to_string()].into())?,
        BTreeSet::new()
    );
    Ok(())
}
