use tempfile::TempDir;
use ventureflow::{cli::context::AppContext, cli::flow, init};
use ventureflow_storage_json::STATE_FILE_NAME;

#[test]
fn context_persists_sign_in_across_sessions() {
    init();
    let temp = TempDir::new().unwrap();

    {
        let mut ctx = AppContext::with_base_dir(temp.path().to_path_buf()).unwrap();
        assert_eq!(ctx.config().total_steps, 3);
        assert!(!ctx.store().state().is_authenticated);
        flow::sign_in(&mut ctx, "Nimal", "nimal@example.com").unwrap();
        assert_eq!(ctx.state_path(), temp.path().join(STATE_FILE_NAME).as_path());
    }

    let ctx = AppContext::with_base_dir(temp.path().to_path_buf()).unwrap();
    let state = ctx.store().state();
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().map(|user| user.name.as_str()), Some("Nimal"));
    assert!(temp.path().join("config").is_dir());
}

#[test]
fn blank_sign_in_is_rejected() {
    let temp = TempDir::new().unwrap();
    let mut ctx = AppContext::with_base_dir(temp.path().to_path_buf()).unwrap();
    assert!(flow::sign_in(&mut ctx, "  ", "nimal@example.com").is_err());
    assert!(flow::sign_in(&mut ctx, "Nimal", "@example.com").is_err());
    assert!(!ctx.store().state().is_authenticated);
}
