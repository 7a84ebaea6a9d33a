use super::*;

fn store_in(dir: &tempfile::TempDir) -> FileTokenStore {
    FileTokenStore::new(dir.path().join("nested").join("token"))
}

#[test]
fn missing_file_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(store_in(&dir).load(), None);
}

#[test]
fn save_creates_parent_dirs_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save("T1").unwrap();
    assert!(store.path().exists());
    assert_eq!(store.load().as_deref(), Some("T1"));
}

#[test]
fn blank_file_counts_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save("  \n").unwrap();
    assert_eq!(store.load(), None);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save("T1\n").unwrap();
    assert_eq!(store.load().as_deref(), Some("T1"));
}

#[test]
fn clear_removes_file_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save("T1").unwrap();
    store.clear().unwrap();
    assert_eq!(store.load(), None);
    store.clear().unwrap();
}

#[cfg(unix)]
#[test]
fn saved_token_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save("T1").unwrap();
    let mode = fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[test]
fn save_tightens_a_world_readable_token_file() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));
    fs::write(store.path(), "OLD").unwrap();
    fs::set_permissions(store.path(), fs::Permissions::from_mode(0o644)).unwrap();

    store.save("T2").unwrap();

    let mode = fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    assert_eq!(store.load().as_deref(), Some("T2"));
}

#[test]
fn default_path_ends_with_pmb_token() {
    if let Some(path) = default_path() {
        assert!(path.ends_with("pmb/token"));
    }
}
