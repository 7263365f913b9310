use create_base_app::error::{BaseAppError, BaseAppResult};
use create_base_app::hooks::{init_repository, CommandRunner, ProcessRunner};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[derive(Default)]
struct RecordingRunner {
    calls: RefCell<Vec<(String, Vec<String>, PathBuf)>>,
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> BaseAppResult<()> {
        self.calls.borrow_mut().push((
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
            working_dir.to_path_buf(),
        ));
        Ok(())
    }
}

#[test]
fn test_init_repository_runs_git_init_in_project() {
    let runner = RecordingRunner::default();
    init_repository(&runner, Path::new("/tmp/demo")).unwrap();

    let calls = runner.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "git");
    assert_eq!(calls[0].1, vec!["init"]);
    assert_eq!(calls[0].2, PathBuf::from("/tmp/demo"));
}

#[test]
fn test_process_runner_reports_missing_program() {
    let temp_dir = TempDir::new().unwrap();
    let program = "definitely-not-a-real-program-5f1c";
    let result = ProcessRunner.run(program, &[], temp_dir.path());

    match result {
        Err(BaseAppError::CommandError { command, .. }) => {
            assert_eq!(command, program)
        }
        other => panic!("Expected CommandError, got {other:?}"),
    }
}
