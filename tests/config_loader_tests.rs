use spodemy::config::ConfigLoader;
use std::{
    env, fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;

const SECRET: &str = "0123456789abcdef0123456789abcdef";

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn env_guard() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn clear_env() {
    unsafe {
        for key in [
            "SPODEMY_PROFILE",
            "SPODEMY_API_BIND_ADDR",
            "SPODEMY_LOG_LEVEL",
            "SPODEMY_JWT_SECRET",
            "SPODEMY_JWT_TTL_SECONDS",
            "SPODEMY_AUTO_MIGRATE",
            "SPODEMY_BOOTSTRAP_ADMIN_EMAIL",
            "SPODEMY_BOOTSTRAP_ADMIN_PASSWORD",
        ] {
            env::remove_var(key);
        }
    }
}

fn write_env_file(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    fs::write(path, contents).unwrap();
}

fn loader_in(dir: &TempDir) -> ConfigLoader {
    ConfigLoader::with_base_dir(PathBuf::from(dir.path()))
}

#[test]
fn loads_defaults_when_only_secret_present() {
    let _guard = env_guard();
    clear_env();
    unsafe {
        env::set_var("SPODEMY_JWT_SECRET", SECRET);
    }

    let temp_dir = TempDir::new().unwrap();
    let cfg = loader_in(&temp_dir).load().expect("config loads with defaults");

    assert_eq!(cfg.profile, "local");
    assert_eq!(cfg.api_bind_addr, "0.0.0.0:8080");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.jwt_ttl_seconds, 3600);
    assert!(cfg.auto_migrate);
    assert!(cfg.bootstrap_admin_email.is_none());
    cfg.bind_addr().expect("default bind addr parses");
    clear_env();
}

#[test]
fn missing_secret_is_rejected() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let err = loader_in(&temp_dir).load().expect_err("secret is required");
    assert!(format!("{}", err).contains("JWT secret is missing"));
}

#[test]
fn short_secret_is_rejected() {
    let _guard = env_guard();
    clear_env();
    unsafe {
        env::set_var("SPODEMY_JWT_SECRET", "too-short");
    }

    let temp_dir = TempDir::new().unwrap();
    let err = loader_in(&temp_dir).load().expect_err("secret must be long enough");
    assert!(format!("{}", err).contains("at least 32 bytes"));
    clear_env();
}

#[test]
fn layered_env_files_apply_in_order() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        &format!("SPODEMY_API_BIND_ADDR=127.0.0.1:3000\nSPODEMY_JWT_SECRET={SECRET}\n"),
    );
    write_env_file(
        &temp_dir,
        ".env.test",
        "SPODEMY_API_BIND_ADDR=192.168.0.10:5000\n",
    );
    write_env_file(
        &temp_dir,
        ".env.test.local",
        "SPODEMY_API_BIND_ADDR=10.0.0.5:6000\n",
    );

    // Select profile via .env.local before profile-specific files load.
    write_env_file(
        &temp_dir,
        ".env.local",
        "SPODEMY_PROFILE=test\nSPODEMY_API_BIND_ADDR=127.0.0.1:4000\n",
    );

    let cfg = loader_in(&temp_dir)
        .load()
        .expect("config loads with layered env files");

    assert_eq!(cfg.profile, "test");
    assert_eq!(cfg.api_bind_addr, "10.0.0.5:6000");
    clear_env();
}

#[test]
fn os_environment_has_highest_precedence() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        &format!("SPODEMY_API_BIND_ADDR=127.0.0.1:3000\nSPODEMY_JWT_SECRET={SECRET}\n"),
    );

    unsafe {
        env::set_var("SPODEMY_API_BIND_ADDR", "0.0.0.0:9090");
        env::set_var("SPODEMY_AUTO_MIGRATE", "false");
    }

    let cfg = loader_in(&temp_dir)
        .load()
        .expect("config loads with env override");
    assert_eq!(cfg.api_bind_addr, "0.0.0.0:9090");
    assert!(!cfg.auto_migrate);

    clear_env();
}

#[test]
fn invalid_bind_addr_returns_error() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("SPODEMY_API_BIND_ADDR", "not-an-addr");
        env::set_var("SPODEMY_JWT_SECRET", SECRET);
    }
    let temp_dir = TempDir::new().unwrap();
    let err = loader_in(&temp_dir)
        .load()
        .expect_err("invalid bind addr should fail");
    assert!(format!("{}", err).contains("invalid api bind address"));

    clear_env();
}

#[test]
fn half_configured_bootstrap_admin_is_rejected() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("SPODEMY_JWT_SECRET", SECRET);
        env::set_var("SPODEMY_BOOTSTRAP_ADMIN_EMAIL", "root@example.com");
    }
    let temp_dir = TempDir::new().unwrap();
    let err = loader_in(&temp_dir)
        .load()
        .expect_err("password is required alongside email");
    assert!(format!("{}", err).contains("bootstrap admin requires both"));

    clear_env();
}
